//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (CSPRNG bytes, SHA-256, HMAC, Base64url)
//! - Cookie management

pub mod cookie;
pub mod crypto;
