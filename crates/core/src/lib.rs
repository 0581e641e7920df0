//! Core types for bankapi
//!
//! This crate contains the domain records and request payloads shared by the
//! storage, service and HTTP layers.

mod account;
mod client;
mod constants;
mod env_config;
mod validation;

pub use account::*;
pub use client::*;
pub use constants::*;
pub use env_config::*;
pub use validation::*;
