use crate::scope::ScopeManager;

#[test]
fn global_scope_has_no_parent() {
    let mut mgr = ScopeManager::new();
    let global = mgr.scope_create(None).unwrap();
    mgr.scope_push(global).unwrap();
    assert_eq!(mgr.scope_top(), Some(global));
    assert_eq!(mgr.parent_of(global), None);
}

#[test]
fn nested_scope_parent_chain() {
    let mut mgr = ScopeManager::new();
    let global = mgr.scope_create(None).unwrap();
    mgr.scope_push(global).unwrap();

    let fun_scope = mgr.scope_create(Some("main".to_string())).unwrap();
    mgr.scope_push(fun_scope).unwrap();
    assert_eq!(mgr.parent_of(fun_scope), Some(global));
    assert_eq!(mgr.lookup(fun_scope).depth(), 1);
    assert_eq!(mgr.lookup(fun_scope).owner(), Some("main"));

    mgr.scope_pop();
    assert_eq!(mgr.scope_top(), Some(global));
}

#[test]
fn add_loc_increments_per_scope_independently() {
    let mut mgr = ScopeManager::new();
    let global = mgr.scope_create(None).unwrap();
    mgr.scope_push(global).unwrap();
    assert_eq!(mgr.add_loc(), 0);
    assert_eq!(mgr.add_loc(), 1);

    let inner = mgr.scope_create(None).unwrap();
    mgr.scope_push(inner).unwrap();
    assert_eq!(mgr.add_loc(), 0, "new scope starts its own counter at 0");

    mgr.scope_pop();
    assert_eq!(mgr.add_loc(), 2, "popped scope's counter was discarded, not reused");
}

#[test]
fn registry_persists_after_pop() {
    let mut mgr = ScopeManager::new();
    let global = mgr.scope_create(None).unwrap();
    mgr.scope_push(global).unwrap();
    let inner = mgr.scope_create(None).unwrap();
    mgr.scope_push(inner).unwrap();
    mgr.scope_pop();

    // The scope itself is still reachable via the registry after being
    // popped off the active stack — pass 2 must be able to re-enter it.
    assert_eq!(mgr.scopes_in_creation_order().count(), 2);
    assert_eq!(mgr.lookup(inner).id(), inner);
}
