//! Repository traits
//!
//! Each method runs one parameterized statement on the connection handed in
//! by the caller. Repositories hold no connection of their own, so whoever
//! owns the connection decides the transaction boundary.

mod account;
mod client;

pub use account::AccountRepository;
pub use client::ClientRepository;
