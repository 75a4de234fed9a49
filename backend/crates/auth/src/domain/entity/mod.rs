//! Entity Module

pub mod credentials;
pub mod user;
