use std::fmt::Display;

use thiserror::Error;

use crate::ast::types::Type;

/// The rule families a semantic diagnostic can belong to. Callers that need
/// to react to diagnostics should match on this rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    DuplicateDeclaration,
    UndeclaredReference,
    TypeMismatch,
    ConstViolation,
    ArityMismatch,
    StructuralViolation,
}

/// A single rule violation found by the analyzer. Messages keep the wording
/// of the language's reference tooling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("Variabila globala '{name}' este deja definita")]
    DuplicateGlobal { name: String },
    #[error("Variabila locala '{name}' este redeclarata")]
    DuplicateLocal { name: String },
    #[error("Parametrul '{name}' este duplicat")]
    DuplicateParameter { name: String },
    #[error("Functia '{name}' este deja definita")]
    DuplicateFunction { name: String },

    #[error("Variabila '{name}' nu este declarata")]
    UndeclaredVariable { name: String },
    #[error("Functia '{name}' nu este definita.")]
    UndefinedFunction { name: String },

    #[error("Nu se poate initializa tipul '{target}' cu un string")]
    StringInitializer { target: Type },
    #[error("Nu se poate initializa tipul 'string' cu un numar")]
    NumberInitializer,
    #[error("Nu se poate converti '{received}' la '{expected}' in initializarea variabilei '{name}'")]
    InitializerMismatch {
        name: String,
        expected: Type,
        received: Type,
    },
    #[error("Tip incompatibil la atribuire pentru '{name}'. Asteptat: {expected}, Primit: {received}")]
    AssignmentMismatch {
        name: String,
        expected: Type,
        received: Type,
    },
    #[error("Argumentul {position} al functiei '{function}' este incompatibil. Asteptat: '{expected}', Primit: '{received}'.")]
    ArgumentTypeMismatch {
        function: String,
        /// 1-based.
        position: usize,
        expected: Type,
        received: Type,
    },
    #[error("Tip returnat incompatibil. Asteptat: '{expected}', Gasit: '{received}'.")]
    ReturnTypeMismatch { expected: Type, received: Type },

    #[error("Nu se poate modifica variabila constanta '{name}'")]
    ConstAssignment { name: String },

    #[error("Functia '{function}' asteapta {expected} argumente, dar a primit {received}.")]
    ArgumentCountMismatch {
        function: String,
        expected: usize,
        received: usize,
    },

    #[error("Programul nu contine o functie 'main'")]
    MissingMain,
    #[error("Functia 'main' este definita multiplu")]
    MainDefinedMultipleTimes,
    #[error("Functia 'main' nu trebuie sa aiba parametri")]
    MainWithParameters,
    #[error("Functia 'main' nu poate fi apelata explicit.")]
    MainCalled,
    #[error("Instructiunea 'return' folosita in afara unei functii.")]
    ReturnOutsideFunction,
    #[error("Functia '{function}' (tip {return_type}) nu se incheie cu o instructiune return.")]
    MissingReturn { function: String, return_type: Type },
    #[error("Functia '{function}' este de tip void si nu poate returna o valoare.")]
    VoidReturnsValue { function: String },
    #[error("Functia '{function}' trebuie sa returneze o valoare de tip '{return_type}'.")]
    MissingReturnValue { function: String, return_type: Type },
}

impl SemanticError {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            SemanticError::DuplicateGlobal { .. }
            | SemanticError::DuplicateLocal { .. }
            | SemanticError::DuplicateParameter { .. }
            | SemanticError::DuplicateFunction { .. } => DiagnosticKind::DuplicateDeclaration,

            SemanticError::UndeclaredVariable { .. } | SemanticError::UndefinedFunction { .. } => {
                DiagnosticKind::UndeclaredReference
            }

            SemanticError::StringInitializer { .. }
            | SemanticError::NumberInitializer
            | SemanticError::InitializerMismatch { .. }
            | SemanticError::AssignmentMismatch { .. }
            | SemanticError::ArgumentTypeMismatch { .. }
            | SemanticError::ReturnTypeMismatch { .. } => DiagnosticKind::TypeMismatch,

            SemanticError::ConstAssignment { .. } => DiagnosticKind::ConstViolation,

            SemanticError::ArgumentCountMismatch { .. } => DiagnosticKind::ArityMismatch,

            SemanticError::MissingMain
            | SemanticError::MainDefinedMultipleTimes
            | SemanticError::MainWithParameters
            | SemanticError::MainCalled
            | SemanticError::ReturnOutsideFunction
            | SemanticError::MissingReturn { .. }
            | SemanticError::VoidReturnsValue { .. }
            | SemanticError::MissingReturnValue { .. } => DiagnosticKind::StructuralViolation,
        }
    }
}

/// A line-tagged, non-fatal semantic error.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: u32,
    pub error: SemanticError,
}

impl Diagnostic {
    pub fn new(line: u32, error: SemanticError) -> Self {
        Diagnostic { line, error }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.error.kind()
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Eroare Semantica (L{}): {}", self.line, self.error)
    }
}
