use crate::ast::Type;
use crate::scope::ScopeManager;
use crate::symtab::{BucketKind, SymbolTable};

fn global(mgr: &mut ScopeManager) -> crate::scope::ScopeId {
    let global = mgr.scope_create(None).unwrap();
    mgr.scope_push(global).unwrap();
    global
}

#[test]
fn insert_then_chain_lookup_from_nested_scope() {
    let mut mgr = ScopeManager::new();
    let mut table = SymbolTable::new();
    let global = global(&mut mgr);
    table.st_insert(global, "x", 1, 0, BucketKind::Variable(Type::Integer));

    let inner = mgr.scope_create(None).unwrap();
    mgr.scope_push(inner).unwrap();

    assert!(table.st_bucket(&mgr, inner, "x").is_some());
    assert_eq!(table.st_lookup(&mgr, inner, "x"), Some(0));
}

#[test]
fn duplicate_insert_in_same_scope_is_a_no_op() {
    let mut mgr = ScopeManager::new();
    let mut table = SymbolTable::new();
    let global = global(&mut mgr);
    assert!(table.st_insert(global, "x", 1, 0, BucketKind::Variable(Type::Integer)));
    assert!(!table.st_insert(global, "x", 2, 1, BucketKind::Variable(Type::Integer)));
    // The original binding (and its memloc) survives the no-op insert.
    assert_eq!(table.st_lookup(&mgr, global, "x"), Some(0));
}

#[test]
fn lookup_top_does_not_see_outer_scopes() {
    let mut mgr = ScopeManager::new();
    let mut table = SymbolTable::new();
    let global = global(&mut mgr);
    table.st_insert(global, "x", 1, 0, BucketKind::Variable(Type::Integer));

    let inner = mgr.scope_create(None).unwrap();
    mgr.scope_push(inner).unwrap();

    assert_eq!(table.st_lookup_top(inner, "x"), None);
    assert!(table.st_lookup(&mgr, inner, "x").is_some());
}

#[test]
fn add_lineno_appends_without_disturbing_declaration_line() {
    let mut mgr = ScopeManager::new();
    let mut table = SymbolTable::new();
    let global = global(&mut mgr);
    table.st_insert(global, "x", 3, 0, BucketKind::Variable(Type::Integer));
    table.st_add_lineno(&mgr, global, "x", 7);
    table.st_add_lineno(&mgr, global, "x", 9);

    let bucket = table.st_bucket(&mgr, global, "x").unwrap();
    assert_eq!(bucket.lines(), &[3, 7, 9]);
}

#[test]
fn builtins_keep_negative_synthetic_lineno() {
    let mut mgr = ScopeManager::new();
    let mut table = SymbolTable::new();
    let global = global(&mut mgr);
    table.st_insert(
        global,
        "input",
        -1,
        0,
        BucketKind::Function { return_type: Type::Integer, params: vec![] },
    );

    let bucket = table.st_bucket(&mgr, global, "input").unwrap();
    assert_eq!(bucket.lines(), &[-1]);
}

#[test]
fn dump_lists_scopes_in_creation_order_and_buckets_in_declaration_order() {
    let mut mgr = ScopeManager::new();
    let mut table = SymbolTable::new();
    let global = global(&mut mgr);
    table.st_insert(global, "output", -1, 0, BucketKind::Function { return_type: Type::Void, params: vec![Type::Integer] });
    table.st_insert(global, "input", -1, 1, BucketKind::Function { return_type: Type::Integer, params: vec![] });

    let inner = mgr.scope_create(Some("main".to_string())).unwrap();
    mgr.scope_push(inner).unwrap();
    table.st_insert(inner, "y", 2, 0, BucketKind::Variable(Type::Integer));

    let mut out = String::new();
    table.print_sym_tab(&mgr, &mut out).unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Scope Level : 0");
    assert!(lines[3].starts_with("output"));
    assert!(lines[4].starts_with("input"));
    assert!(out.contains("Scope Level : 1"));
    assert!(out.contains("y"));
}
