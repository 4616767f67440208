//! Pollution declarations.
//!
//! | Method | Path | |
//! |--------|------|-|
//! | GET    | `/api/pollutions` | list, filtered by `type`, `location`, `date_from`, `date_to` |
//! | GET    | `/api/pollutions/{id}` | one declaration |
//! | POST   | `/api/pollutions` | declare |
//! | PUT    | `/api/pollutions/{id}` | replace |
//! | DELETE | `/api/pollutions/{id}` | delete |

pub mod dtos;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod services;
pub mod validators;

pub use services::PollutionService;
