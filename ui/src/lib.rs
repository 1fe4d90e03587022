#![warn(clippy::all, rust_2018_idioms)]

//! egui front end of the roster member table.

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::RosterApp;
