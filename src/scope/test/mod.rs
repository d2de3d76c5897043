mod unit_scope_manager;
