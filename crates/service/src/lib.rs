//! Service layer for bankapi
//!
//! Parses raw path/query parameters, enforces field rules, and wraps each
//! repository call in a unit of work.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod account_service;
mod client_service;
mod error;
mod params;

pub use account_service::AccountService;
pub use client_service::ClientService;
pub use error::ServiceError;
