pub mod admin;
mod commands;
pub mod connection_settings;
pub mod error;
pub mod models;
pub mod pattern;
mod queries;
pub mod transport;

pub use admin::AdminClient;
pub use connection_settings::{BasicCredentials, ConnectionSettings};
pub use error::{TransportError, UnsupportedOperation};
pub use pattern::Patterns;
