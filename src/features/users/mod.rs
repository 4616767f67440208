//! User accounts.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/users` | List users (alias `/api/utilisateur`) |
//! | GET | `/api/users/{id}` | Get one user |
//! | POST | `/api/users` | Create a user with a client-chosen id |
//! | DELETE | `/api/users/{id}` | Delete a user |
//! | POST | `/api/users/login` | Check credentials (alias `/api/utilisateur/login`) |
//!
//! Passwords are stored as given and never returned.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::UserService;
