//! Integration tests for the complete analysis pipeline.
//!
//! These tests run MiniLang source through tokenization, parsing and
//! semantic analysis, and check the resulting diagnostics, symbol tables
//! and rendered reports.

use minilang::{
    ast::types::{compatible, Type},
    errors::diagnostics::DiagnosticKind,
    lexer::lexer::tokenize,
    parser::parser::parse,
    report::report::{render_diagnostics, render_functions, render_globals},
    type_checker::type_checker::{type_check, AnalysisResult},
};
use std::rc::Rc;

fn analyze(source: &str) -> AnalysisResult {
    let tokens = tokenize(source.to_string(), Some("test.minilang".to_string()));
    let program = parse(tokens, Rc::new("test.minilang".to_string())).expect("source should parse");
    type_check(&program)
}

fn kinds(result: &AnalysisResult) -> Vec<DiagnosticKind> {
    result.diagnostics.iter().map(|diagnostic| diagnostic.kind()).collect()
}

#[test]
fn test_valid_program_has_no_diagnostics() {
    let source = r#"
const double PI = 3.14;
int counter = 0;
string greeting = "salut";

int square(int x) {
    return x * x;
}

double area(double r) {
    double result = PI * r * r;
    return result;
}

void main() {
    int total = 0;
    for (int i = 0; i < 10; i++) {
        total += square(i);
    }
    while (total > 100) {
        total -= 7;
    }
    if (total == 3 || !(total < 2)) {
        counter++;
    } else {
        counter = total % 2;
    }
    double a = area(2.5);
    greeting = "gata";
}
"#;
    let result = analyze(source);

    assert!(!result.has_errors(), "{}", render_diagnostics(&result.diagnostics));
    assert_eq!(result.globals.len(), 3);
    assert_eq!(result.functions.len(), 3);
    assert_eq!(
        result.function("main").unwrap().control_structures,
        vec!["for (linia 17)", "while (linia 20)", "if (linia 23)"]
    );
}

#[test]
fn test_trivial_main() {
    let result = analyze("void main() {\n}\n");

    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_compatibility_relation() {
    for ty in Type::ALL {
        assert!(compatible(ty, ty));
    }
    assert!(!compatible(Type::String, Type::Int));
    assert!(!compatible(Type::Int, Type::String));
    assert!(compatible(Type::Double, Type::Int));
    assert!(compatible(Type::Double, Type::Float));
    assert!(compatible(Type::Float, Type::Int));
    assert!(compatible(Type::Int, Type::Bool));
    assert!(!compatible(Type::Bool, Type::Int));
}

#[test]
fn test_duplicate_global_keeps_original_value() {
    let result = analyze("int x = 5;\nint x = 6;\nvoid main() { }");

    assert_eq!(kinds(&result), vec![DiagnosticKind::DuplicateDeclaration]);
    assert_eq!(result.diagnostics[0].line, 2);
    assert_eq!(result.global("x").unwrap().value.as_deref(), Some("5"));
    assert_eq!(
        render_globals(&result.globals),
        "Nume: x, Tip: int, Valoare: 5, Const: False\n"
    );
}

#[test]
fn test_duplicates_in_each_scope_tier() {
    let source = "int g;
string g;
void f(int a, int a) {
  float l = 1;
  int l;
}
void f() { }
void main() { }";
    let result = analyze(source);

    assert_eq!(result.diagnostics.len(), 4);
    assert!(kinds(&result)
        .iter()
        .all(|kind| *kind == DiagnosticKind::DuplicateDeclaration));
    assert_eq!(result.global("g").unwrap().var_type, Type::Int);
    assert_eq!(result.function("f").unwrap().local_variables[0].var_type, Type::Float);
}

#[test]
fn test_const_assignment_on_assignment_line() {
    let result = analyze("void main() {\n  const int y = 3;\n  y = 4;\n}");

    assert_eq!(kinds(&result), vec![DiagnosticKind::ConstViolation]);
    assert_eq!(result.diagnostics[0].line, 3);
    assert_eq!(
        result.diagnostics[0].to_string(),
        "Eroare Semantica (L3): Nu se poate modifica variabila constanta 'y'"
    );
}

#[test]
fn test_const_assignment_regardless_of_value_type() {
    let result = analyze("const string s = \"a\";\nvoid main() {\n  s = \"b\";\n}");

    assert_eq!(kinds(&result), vec![DiagnosticKind::ConstViolation]);
}

#[test]
fn test_non_void_function_without_return() {
    let result = analyze("int f() { }\nvoid main() { }");

    assert_eq!(kinds(&result), vec![DiagnosticKind::StructuralViolation]);
    assert_eq!(
        result.diagnostics[0].to_string(),
        "Eroare Semantica (L1): Functia 'f' (tip int) nu se incheie cu o instructiune return."
    );
}

#[test]
fn test_two_mains() {
    let result = analyze("void main() {\n  int a;\n}\nvoid main() {\n  int b;\n}");

    assert_eq!(kinds(&result), vec![DiagnosticKind::StructuralViolation]);
    assert_eq!(result.diagnostics[0].line, 4);
    assert_eq!(result.functions.len(), 1);
    assert_eq!(result.functions[0].local_variables[0].name, "a");
}

#[test]
fn test_argument_mismatch_position() {
    let result = analyze("int f(int a, int b) { return a + b; }\nvoid main() {\n  f(1, \"a\");\n}");

    assert_eq!(kinds(&result), vec![DiagnosticKind::TypeMismatch]);
    assert_eq!(
        result.diagnostics[0].to_string(),
        "Eroare Semantica (L3): Argumentul 2 al functiei 'f' este incompatibil. Asteptat: 'int', Primit: 'string'."
    );
}

#[test]
fn test_arity_mismatch_suppresses_argument_checks() {
    let result = analyze("void f(int a, int b) { }\nvoid main() {\n  f(\"x\");\n  f(\"x\", \"y\", 1.5);\n}");

    assert_eq!(
        kinds(&result),
        vec![DiagnosticKind::ArityMismatch, DiagnosticKind::ArityMismatch]
    );
    assert!(result.diagnostics_of(DiagnosticKind::TypeMismatch).is_empty());
}

#[test]
fn test_recursive_flag() {
    let source = "int fib(int n) {
  if (n < 2) { return n; }
  return fib(n - 1) + fib(n - 2);
}
void countdown(int n) {
  if (n > 0) { countdown(n - 1); }
}
int plain(int n) { return fib(n); }
void main() { countdown(fib(5)); }";
    let result = analyze(source);

    assert!(!result.has_errors());
    assert!(result.function("fib").unwrap().is_recursive);
    assert!(result.function("countdown").unwrap().is_recursive);
    assert!(!result.function("plain").unwrap().is_recursive);
    assert!(!result.function("main").unwrap().is_recursive);
}

#[test]
fn test_forward_references_resolve() {
    let source = "void main() {
  int v = later(1) + 2;
  helper();
}
int later(int x) { return x; }
void helper() { }";
    let result = analyze(source);

    assert!(!result.has_errors());
}

#[test]
fn test_errors_accumulate_in_source_order() {
    let source = "int a = \"s\";
void main(int x) {
  b = 1;
  undefined(1);
  return 5;
}
int a;";
    let result = analyze(source);

    assert_eq!(
        kinds(&result),
        vec![
            DiagnosticKind::TypeMismatch,
            DiagnosticKind::StructuralViolation,
            DiagnosticKind::UndeclaredReference,
            DiagnosticKind::UndeclaredReference,
            DiagnosticKind::StructuralViolation,
            DiagnosticKind::DuplicateDeclaration,
        ]
    );
    let lines: Vec<u32> = result.diagnostics.iter().map(|diagnostic| diagnostic.line).collect();
    assert_eq!(lines, vec![1, 2, 3, 4, 5, 7]);
}

#[test]
fn test_missing_main() {
    let result = analyze("int x = 1;\nvoid f() { }");

    assert_eq!(kinds(&result), vec![DiagnosticKind::StructuralViolation]);
    assert_eq!(
        render_diagnostics(&result.diagnostics),
        "Eroare Semantica (L1): Programul nu contine o functie 'main'\n"
    );
}

#[test]
fn test_function_report() {
    let source = "int sum(int n) {
  int total = 0;
  for (int i = 0; i < n; i++) {
    total += i;
  }
  return total;
}
void main() {
  int s = sum(4);
}";
    let result = analyze(source);
    let report = render_functions(&result.functions);

    assert!(!result.has_errors());
    assert!(report.starts_with("Functie: sum (Tip: Non-Main, Recursiva: False)\n"));
    assert!(report.contains("  Parametri: int n\n"));
    assert!(report.contains("    - int total (= 0)\n"));
    assert!(report.contains("    - int i (= 0)\n"));
    assert!(report.contains("    - for (linia 3)\n"));
    assert!(report.contains("Functie: main (Tip: Main, Recursiva: False)\n"));
    assert!(report.contains("    - int s (= sum(4))\n"));
}

#[test]
fn test_syntax_error_is_fatal() {
    let tokens = tokenize("void main() { int x = ; }".to_string(), None);
    let error = parse(tokens, Rc::new("shell".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().line(), 1);
}
