//! Application Layer
//!
//! Use cases and application services.

pub mod begin_sign_in;
pub mod check_session;
pub mod complete_sign_in;
pub mod config;
pub mod session;
pub mod sign_out;

// Re-exports
pub use begin_sign_in::BeginSignInUseCase;
pub use check_session::CheckSessionUseCase;
pub use complete_sign_in::{CompleteSignInUseCase, SignInOutput};
pub use config::AuthConfig;
pub use session::SessionService;
pub use sign_out::SignOutUseCase;
