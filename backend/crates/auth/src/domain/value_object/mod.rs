//! Value Object Module

pub mod provider_name;
pub mod session_token;
pub mod user_id;
