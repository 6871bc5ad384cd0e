//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed identifiers
//! - HTML escaping for server-rendered pages
//!
//! Only things that are hard to change and have a consistent meaning
//! across crates belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod html;
pub mod id;
