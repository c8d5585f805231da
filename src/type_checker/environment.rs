//! Symbol tables used during semantic analysis.
//!
//! There are exactly two scope tiers: the global [`Environment`], alive for
//! the whole pass, and the local [`Environment`] of the function whose body
//! is being walked. Blocks inside a function share its local table.

use std::{collections::HashMap, fmt::Display};

use thiserror::Error;

use crate::ast::types::Type;

/// Returned when a name is inserted into a table that already holds it.
/// The existing entry is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("`{0}` is already declared in this scope")]
pub struct DuplicateName(pub String);

/// A declared variable, global or local.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableEntry {
    pub name: String,
    pub var_type: Type,
    /// Source-like text of the initializer, kept for reports only.
    pub value: Option<String>,
    pub is_constant: bool,
}

impl VariableEntry {
    pub fn new(name: &str, var_type: Type, value: Option<String>, is_constant: bool) -> Self {
        VariableEntry {
            name: name.to_string(),
            var_type,
            value,
            is_constant,
        }
    }
}

/// One scope tier. Entries keep their declaration order.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    entries: Vec<VariableEntry>,
    variable_lookup: HashMap<String, usize>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn declare_variable(&mut self, entry: VariableEntry) -> Result<(), DuplicateName> {
        if self.variable_lookup.contains_key(&entry.name) {
            return Err(DuplicateName(entry.name));
        }

        self.variable_lookup
            .insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn get_variable(&self, name: &str) -> Option<&VariableEntry> {
        self.variable_lookup
            .get(name)
            .map(|index| &self.entries[*index])
    }

    pub fn into_entries(self) -> Vec<VariableEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A declared parameter. Displays as `type name`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEntry {
    pub name: String,
    pub param_type: Type,
}

impl Display for ParameterEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.param_type, self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub name: String,
    pub return_type: Type,
    /// Every declared parameter in order, duplicates included.
    pub parameters: Vec<ParameterEntry>,
    pub is_recursive: bool,
    pub is_main: bool,
    /// Locals declared in the body, parameters excluded.
    pub local_variables: Vec<VariableEntry>,
    /// `if (linia N)` style descriptors, in walk order.
    pub control_structures: Vec<String>,
}

impl FunctionSignature {
    pub fn new(name: &str, return_type: Type, parameters: Vec<ParameterEntry>) -> Self {
        FunctionSignature {
            name: name.to_string(),
            return_type,
            parameters,
            is_recursive: false,
            is_main: name == "main",
            local_variables: vec![],
            control_structures: vec![],
        }
    }

    pub fn parameter_types(&self) -> impl Iterator<Item = Type> + '_ {
        self.parameters.iter().map(|parameter| parameter.param_type)
    }
}

/// Function signatures by name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: Vec<FunctionSignature>,
    function_lookup: HashMap<String, usize>,
}

impl FunctionTable {
    pub fn new() -> Self {
        FunctionTable::default()
    }

    /// First registration wins.
    pub fn register(&mut self, signature: FunctionSignature) -> Result<(), DuplicateName> {
        if self.function_lookup.contains_key(&signature.name) {
            return Err(DuplicateName(signature.name));
        }

        self.function_lookup
            .insert(signature.name.clone(), self.functions.len());
        self.functions.push(signature);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&FunctionSignature> {
        self.function_lookup
            .get(name)
            .map(|index| &self.functions[*index])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FunctionSignature> {
        match self.function_lookup.get(name) {
            Some(index) => self.functions.get_mut(*index),
            None => None,
        }
    }

    pub fn signatures(&self) -> &[FunctionSignature] {
        &self.functions
    }

    pub fn into_signatures(self) -> Vec<FunctionSignature> {
        self.functions
    }
}

/// The program-wide tables: globals and functions.
#[derive(Debug, Clone, Default)]
pub struct SymbolTables {
    pub globals: Environment,
    pub functions: FunctionTable,
}

impl SymbolTables {
    pub fn new() -> Self {
        SymbolTables::default()
    }

    pub fn declare_global(&mut self, entry: VariableEntry) -> Result<(), DuplicateName> {
        self.globals.declare_variable(entry)
    }

    /// Parameters already in `locals` count as collisions.
    pub fn declare_local(
        locals: &mut Environment,
        entry: VariableEntry,
    ) -> Result<(), DuplicateName> {
        locals.declare_variable(entry)
    }

    /// Locals shadow globals for the rest of the function.
    pub fn lookup<'a>(
        &'a self,
        locals: Option<&'a Environment>,
        name: &str,
    ) -> Option<&'a VariableEntry> {
        self.scope(locals).lookup(name)
    }

    pub fn register_function(&mut self, signature: FunctionSignature) -> Result<(), DuplicateName> {
        self.functions.register(signature)
    }

    pub fn lookup_function(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.lookup(name)
    }

    pub fn scope<'a>(&'a self, locals: Option<&'a Environment>) -> Scope<'a> {
        Scope {
            globals: &self.globals,
            functions: &self.functions,
            locals,
        }
    }
}

/// A read-only view of what is visible from one point of the walk.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub globals: &'a Environment,
    pub functions: &'a FunctionTable,
    pub locals: Option<&'a Environment>,
}

impl<'a> Scope<'a> {
    pub fn lookup(&self, name: &str) -> Option<&'a VariableEntry> {
        self.locals
            .and_then(|locals| locals.get_variable(name))
            .or_else(|| self.globals.get_variable(name))
    }

    pub fn lookup_function(&self, name: &str) -> Option<&'a FunctionSignature> {
        self.functions.lookup(name)
    }
}
