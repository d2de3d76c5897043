mod unit_symbol_table;
