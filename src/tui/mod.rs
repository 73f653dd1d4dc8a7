//! Terminal frontend: assembles parameter records from its own state, calls
//! the engine and renders the results.

pub mod app;
pub mod controller;
pub mod ui;
