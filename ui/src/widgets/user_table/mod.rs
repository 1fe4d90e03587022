//! Member table widget.
//!
//! - `toolbar`: search box and bulk delete
//! - `table`: the rows of the current page
//! - `pagination`: first / previous / numbered / next / last controls

mod pagination;
mod panel;
mod table;
mod toolbar;

pub use panel::user_table_panel;
