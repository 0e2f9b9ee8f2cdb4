//! Adapters between the outside world (terminal, files) and the application.

pub mod console;
pub mod csv;
