//! Feature modules. Each has a `controller` (HTTP handlers), a `service`
//! (business rules over the store) and a `router`.

pub mod admin;
pub mod auth;
pub mod health;
pub mod users;
