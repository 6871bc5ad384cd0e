//! Infrastructure Layer
//!
//! Store implementations and external identity-provider integrations.

pub mod google;
pub mod memory;
pub mod postgres;

pub use google::GoogleIdentityProvider;
pub use memory::InMemoryAuthRepository;
pub use postgres::PgAuthRepository;
