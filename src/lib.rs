// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app;
pub mod catalog;
pub mod detail;
pub mod form;
pub mod library;
pub mod recipe;
pub mod runtime;
pub mod timer;
pub mod toast;
pub mod ui;
