//! Request handlers

pub mod auth;
pub mod claims;
pub mod health;
