pub mod user_dto;

pub use user_dto::{CreateUserDto, LoginRequestDto, UserResponseDto};
