//! Form layer and backend-for-frontend for the news subscription service.
//!
//! [`models`] holds the profile draft and request types, [`session`] the
//! per-form state machine, [`client`] the HTTP client used to submit built
//! requests, and [`routes`] the BFF that relays them to upstream services.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod session;
pub mod upstream;
