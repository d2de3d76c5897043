use crate::analysis::Analyzer;
use crate::ast::demo;
use crate::ast::AstNode;

fn analyze(ast: &AstNode) -> Analyzer {
    let mut analyzer = Analyzer::new();
    analyzer.build_symtab(ast);
    analyzer.type_check(ast);
    analyzer
}

fn messages(analyzer: &Analyzer) -> Vec<String> {
    analyzer.diagnostics().iter().map(|d| d.message.clone()).collect()
}

#[test]
fn s1_smoke_is_clean() {
    let analyzer = analyze(&demo::smoke());
    assert!(!analyzer.has_error(), "{:?}", analyzer.diagnostics());

    let mut dump = String::new();
    analyzer.print_sym_tab(&mut dump).unwrap();
    assert!(dump.contains("input"));
    assert!(dump.contains("output"));
    assert!(dump.contains("main"));
    assert!(dump.contains("Scope Level : 0"));
    assert!(dump.contains("Scope Level : 1"));
}

#[test]
fn s2_undeclared_identifier() {
    let analyzer = analyze(&demo::undeclared_identifier());
    assert!(messages(&analyzer).iter().any(|m| m.contains("undeclared symbol")));
}

#[test]
fn s3_redeclared_function() {
    let analyzer = analyze(&demo::redeclared_function());
    assert!(messages(&analyzer).iter().any(|m| m.contains("function already declared")));
}

#[test]
fn s4_void_variable() {
    let analyzer = analyze(&demo::void_variable());
    assert!(messages(&analyzer).iter().any(|m| m.contains("type should not be void")));
}

#[test]
fn s5_return_mismatches() {
    let missing = analyze(&demo::return_missing_value());
    assert!(messages(&missing).iter().any(|m| m.contains("expected return value")));

    let unexpected = analyze(&demo::return_unexpected_value());
    assert!(messages(&unexpected).iter().any(|m| m.contains("unexpected return value")));
}

#[test]
fn s6_array_misuse_and_correct_use() {
    let both = analyze(&demo::array_both_operands());
    assert!(messages(&both).iter().any(|m| m.contains("operands must not both be arrays")));

    let minus = analyze(&demo::array_minus_int());
    assert!(messages(&minus).iter().any(|m| m.contains("invalid operands")));

    let times = analyze(&demo::array_times_int());
    assert!(messages(&times).iter().any(|m| m.contains("invalid operands")));

    let ok = analyze(&demo::array_indexed_ok());
    assert!(!ok.has_error(), "{:?}", ok.diagnostics());
}

#[test]
fn s7_call_arity() {
    let too_few = analyze(&demo::call_too_few_args());
    assert!(messages(&too_few).iter().any(|m| m.contains("wrong number of parameters")));

    let too_many = analyze(&demo::call_too_many_args());
    assert!(messages(&too_many).iter().any(|m| m.contains("wrong number of parameters")));

    let ok = analyze(&demo::call_arity_ok());
    assert!(!ok.has_error(), "{:?}", ok.diagnostics());
}

#[test]
fn type_check_is_idempotent_on_a_clean_program() {
    let ast = demo::composite_sum_loop();
    let mut analyzer = Analyzer::new();
    analyzer.build_symtab(&ast);
    analyzer.type_check(&ast);
    assert!(!analyzer.has_error(), "{:?}", analyzer.diagnostics());
    let first_pass_diagnostic_count = analyzer.diagnostics().len();

    // Re-running pass 2 against the already-annotated tree must reproduce
    // the same (empty) diagnostics without rebuilding the table.
    analyzer.type_check(&ast);
    assert_eq!(analyzer.diagnostics().len(), first_pass_diagnostic_count);
    assert!(!analyzer.has_error());
}

#[test]
fn composite_program_builds_and_analyzes_cleanly() {
    let analyzer = analyze(&demo::composite_sum_loop());
    assert!(!analyzer.has_error(), "{:?}", analyzer.diagnostics());
}
