pub mod pollution_service;

pub use pollution_service::PollutionService;
