pub mod pollution_handler;

pub use pollution_handler::*;
