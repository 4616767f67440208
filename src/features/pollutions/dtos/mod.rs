pub mod pollution_dto;

pub use pollution_dto::{PollutionQueryParams, PollutionRequestDto, PollutionResponseDto};
