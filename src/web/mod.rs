//! Web gateway: one form page and one review endpoint.

pub mod server;
pub mod types;

pub use server::{GatewayState, router, start_server};
