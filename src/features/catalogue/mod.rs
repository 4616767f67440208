//! Static sample catalogue, served as-is at `GET /api/catalogue`.

pub mod dto;
pub mod handler;
pub mod routes;
