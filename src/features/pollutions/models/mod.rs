mod pollution;

pub use pollution::{NewPollution, Pollution, PollutionType};
