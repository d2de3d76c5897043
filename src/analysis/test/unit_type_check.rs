use crate::analysis::Analyzer;
use crate::ast::build::*;
use crate::ast::{AstNode, Type};

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
fn while_with_void_test_is_rejected() {
    // while (output(1)) { } — output's return type is Void.
    let ast = program(vec![fun_decl(
        "main",
        Type::Void,
        vec![],
        compound(
            vec![],
            vec![while_stmt(call("output", vec![const_(1, 1)], 1), compound(vec![], vec![], 1), 1)],
            1,
        ),
        1,
    )]);
    let analyzer = analyze(&ast);
    assert!(messages(&analyzer).iter().any(|m| m.contains("while test should not have void value")));
}

#[test]
fn array_argument_passed_without_subscript_keeps_array_type() {
    // int a[10]; output(a) should not itself be flagged (Array isn't Void);
    // the call arity/void rules are the only thing checked on arguments.
    let ast = program(vec![fun_decl(
        "main",
        Type::Void,
        vec![],
        compound(
            vec![var_decl("a", Type::Array, 1)],
            vec![expr_stmt(call("output", vec![id("a", 2)], 2))],
            1,
        ),
        1,
    )]);
    let analyzer = analyze(&ast);
    assert!(!analyzer.has_error(), "{:?}", analyzer.diagnostics());
}

#[test]
fn call_on_a_non_function_is_expected_function() {
    let ast = program(vec![fun_decl(
        "main",
        Type::Void,
        vec![],
        compound(
            vec![var_decl("a", Type::Integer, 1)],
            vec![expr_stmt(call("a", vec![], 2))],
            1,
        ),
        1,
    )]);
    let analyzer = analyze(&ast);
    assert!(messages(&analyzer).iter().any(|m| m.contains("expected function")));
}

#[test]
fn void_argument_is_rejected() {
    // int f(int x) { return x; } ... f(output(1))
    let ast = program(vec![
        fun_decl(
            "f",
            Type::Integer,
            vec![param("x", Type::Integer, 1)],
            compound(vec![], vec![return_stmt(Some(id("x", 1)), 1)], 1),
            1,
        ),
        fun_decl(
            "main",
            Type::Void,
            vec![],
            compound(
                vec![],
                vec![expr_stmt(call("f", vec![call("output", vec![const_(1, 2)], 2)], 2))],
                2,
            ),
            2,
        ),
    ]);
    let analyzer = analyze(&ast);
    assert!(messages(&analyzer).iter().any(|m| m.contains("cannot pass void value")));
}
