mod user_table;

pub use user_table::user_table_panel;
