mod unit_scenarios;
mod unit_type_check;
