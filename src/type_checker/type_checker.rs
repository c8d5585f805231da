use std::collections::HashSet;

use log::{debug, trace};

use crate::{
    ast::{
        ast::{FnDeclStmt, GlobalDeclStmt, Item, Program},
        statements::Stmt,
        types::Type,
    },
    errors::diagnostics::{Diagnostic, DiagnosticKind, SemanticError},
};

use super::{
    environment::{
        DuplicateName, Environment, FunctionSignature, ParameterEntry, Scope, SymbolTables,
        VariableEntry,
    },
    stmt::check_block,
};

/// The function whose body is currently being walked: its signature under
/// construction and its local table. Dropped when the walk of the body ends.
#[derive(Debug)]
pub struct Frame {
    pub signature: FunctionSignature,
    pub locals: Environment,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    pub globals: Vec<VariableEntry>,
    pub functions: Vec<FunctionSignature>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics_of(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.kind() == kind)
            .collect()
    }

    pub fn global(&self, name: &str) -> Option<&VariableEntry> {
        self.globals.iter().find(|global| global.name == name)
    }

    pub fn function(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.iter().find(|function| function.name == name)
    }
}

#[derive(Debug, Default)]
pub struct TypeChecker {
    pub tables: SymbolTables,
    pub diagnostics: Vec<Diagnostic>,
    has_main: bool,
    /// Functions whose definition has been reached by the walk.
    walked_functions: HashSet<String>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker::default()
    }

    pub fn scope<'a>(&'a self, frame: Option<&'a Frame>) -> Scope<'a> {
        self.tables.scope(frame.map(|frame| &frame.locals))
    }

    pub fn report(&mut self, line: u32, error: SemanticError) {
        let diagnostic = Diagnostic::new(line, error);
        trace!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Registers every function header before any body is checked, so
    /// calls may refer to functions defined further down. The first
    /// definition of a name wins; later ones are reported during the walk.
    pub fn register_headers(&mut self, program: &Program) {
        for function in program.functions() {
            let _ = self.tables.register_function(signature_of(function));
        }

        debug!(
            "registered {} function headers",
            self.tables.functions.signatures().len()
        );
    }

    pub fn check_item(&mut self, item: &Item) {
        match item {
            Item::Global(global) => self.check_global(global),
            Item::Function(function) => self.check_function(function),
        }
    }

    fn check_global(&mut self, global: &GlobalDeclStmt) {
        let line = global.span.line();
        let entry = VariableEntry::new(
            &global.identifier,
            global.var_type,
            global.assigned_value.as_ref().map(|value| value.to_string()),
            global.is_constant,
        );

        if let Err(DuplicateName(name)) = self.tables.declare_global(entry) {
            self.report(line, SemanticError::DuplicateGlobal { name });
            return;
        }

        // Global initializers are literals, so only their kind is checked.
        match &global.assigned_value {
            Some(value) if value.is_string() && global.var_type != Type::String => self.report(
                line,
                SemanticError::StringInitializer {
                    target: global.var_type,
                },
            ),
            Some(value) if value.is_number() && global.var_type == Type::String => {
                self.report(line, SemanticError::NumberInitializer)
            }
            _ => {}
        }
    }

    fn check_function(&mut self, function: &FnDeclStmt) {
        let line = function.span.line();
        let name = &function.identifier;

        if !self.walked_functions.insert(name.clone()) {
            let error = if name == "main" {
                SemanticError::MainDefinedMultipleTimes
            } else {
                SemanticError::DuplicateFunction { name: name.clone() }
            };
            self.report(line, error);
            return;
        }

        debug!("checking function `{}`", name);

        let signature = self
            .tables
            .lookup_function(name)
            .cloned()
            .unwrap_or_else(|| signature_of(function));

        if signature.is_main {
            self.has_main = true;
            if !function.parameters.is_empty() {
                self.report(line, SemanticError::MainWithParameters);
            }
        }

        let mut frame = Frame {
            signature,
            locals: Environment::new(),
        };

        for parameter in &function.parameters {
            let entry = VariableEntry::new(&parameter.name, parameter.param_type, None, false);
            if let Err(DuplicateName(name)) = SymbolTables::declare_local(&mut frame.locals, entry)
            {
                self.report(
                    parameter.span.line(),
                    SemanticError::DuplicateParameter { name },
                );
            }
        }

        check_block(self, Some(&mut frame), &function.body);

        // Only the last top-level statement is inspected, not every path.
        let return_type = function.return_type;
        if !return_type.is_void() && !matches!(function.body.last(), Some(Stmt::Return(_))) {
            self.report(
                function.span.end.line(),
                SemanticError::MissingReturn {
                    function: name.clone(),
                    return_type,
                },
            );
        }

        debug!(
            "finished `{}`: {} locals, recursive: {}",
            name,
            frame.signature.local_variables.len(),
            frame.signature.is_recursive
        );

        if let Some(signature) = self.tables.functions.get_mut(name) {
            *signature = frame.signature;
        }
    }

    pub fn finish(mut self, program: &Program) -> AnalysisResult {
        if !self.has_main {
            self.report(program.span.line(), SemanticError::MissingMain);
        }

        debug!(
            "analysis finished: {} globals, {} functions, {} diagnostics",
            self.tables.globals.len(),
            self.tables.functions.signatures().len(),
            self.diagnostics.len()
        );

        AnalysisResult {
            globals: self.tables.globals.into_entries(),
            functions: self.tables.functions.into_signatures(),
            diagnostics: self.diagnostics,
        }
    }
}

/// The header of a function definition, before its body is walked.
pub fn signature_of(function: &FnDeclStmt) -> FunctionSignature {
    let parameters = function
        .parameters
        .iter()
        .map(|parameter| ParameterEntry {
            name: parameter.name.clone(),
            param_type: parameter.param_type,
        })
        .collect();

    FunctionSignature::new(&function.identifier, function.return_type, parameters)
}

/// Runs semantic analysis over a parsed program.
///
/// Never fails: every rule violation becomes a [`Diagnostic`], in source
/// order, and a missing `main` is reported last.
pub fn type_check(program: &Program) -> AnalysisResult {
    let mut type_checker = TypeChecker::new();
    type_checker.register_headers(program);

    for item in &program.items {
        type_checker.check_item(item);
    }

    type_checker.finish(program)
}
