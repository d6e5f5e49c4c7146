//! Service layer module
//!
//! Contains the outbound ModelScope HTTP client

pub mod client;

pub use client::ModelScopeClient;
