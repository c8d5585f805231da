use std::fmt::Write;

use crate::{
    errors::diagnostics::Diagnostic,
    lexer::tokens::{Token, TokenKind},
    type_checker::environment::{FunctionSignature, VariableEntry},
};

const SEPARATOR: &str = "------------------------------------------------";

fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn value_or_null(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

/// One `<KIND, "text", line>` line per token. `EOF` is left out.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|token| token.kind != TokenKind::EOF)
        .fold(String::new(), |mut output, token| {
            let _ = writeln!(output, "{}", token);
            output
        })
}

pub fn render_globals(globals: &[VariableEntry]) -> String {
    let mut output = String::new();

    for global in globals {
        let _ = writeln!(
            output,
            "Nume: {}, Tip: {}, Valoare: {}, Const: {}",
            global.name,
            global.var_type,
            value_or_null(&global.value),
            flag(global.is_constant)
        );
    }

    output
}

/// Renders every function as a block: header, return type, parameters,
/// locals and control structures, closed by a separator line.
pub fn render_functions(functions: &[FunctionSignature]) -> String {
    let mut output = String::new();

    for function in functions {
        let _ = writeln!(
            output,
            "Functie: {} (Tip: {}, Recursiva: {})",
            function.name,
            if function.is_main { "Main" } else { "Non-Main" },
            flag(function.is_recursive)
        );
        let _ = writeln!(output, "  Return: {}", function.return_type);

        let parameters: Vec<String> = function
            .parameters
            .iter()
            .map(|parameter| parameter.to_string())
            .collect();
        let _ = writeln!(output, "  Parametri: {}", parameters.join(", "));

        let _ = writeln!(output, "  Variabile Locale:");
        for local in &function.local_variables {
            let _ = writeln!(
                output,
                "    - {} {} (= {})",
                local.var_type,
                local.name,
                value_or_null(&local.value)
            );
        }

        let _ = writeln!(output, "  Structuri Control:");
        for control_structure in &function.control_structures {
            let _ = writeln!(output, "    - {}", control_structure);
        }

        let _ = writeln!(output, "{}", SEPARATOR);
    }

    output
}

pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut output = String::new();

    for diagnostic in diagnostics {
        let _ = writeln!(output, "{}", diagnostic);
    }

    output
}
