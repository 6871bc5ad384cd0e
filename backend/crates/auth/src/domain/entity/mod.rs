//! Entity Module

pub mod auth_context;
pub mod session;
pub mod user;
