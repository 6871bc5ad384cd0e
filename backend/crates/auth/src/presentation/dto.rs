//! Request DTOs
//!
//! Query strings accepted by the page routes. The callback route takes
//! [`CallbackParams`](crate::domain::provider::CallbackParams) directly.

use serde::Deserialize;

use crate::domain::value_object::provider_name::ProviderName;

/// `GET /` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeQuery {
    /// `<provider>_cancelled` or `<provider>_failed`
    pub error: Option<String>,
}

impl HomeQuery {
    pub fn notice(&self) -> Option<LoginNotice> {
        self.error.as_deref().and_then(LoginNotice::from_flag)
    }
}

/// Outcome of an unsuccessful sign-in, carried back to `/` as a query flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginNotice {
    Cancelled(ProviderName),
    Failed(ProviderName),
}

impl LoginNotice {
    /// Parse `google_cancelled` / `google_failed`; anything else is ignored
    pub fn from_flag(flag: &str) -> Option<Self> {
        let (provider, outcome) = flag.rsplit_once('_')?;
        let provider = provider.parse::<ProviderName>().ok()?;

        match outcome {
            "cancelled" => Some(LoginNotice::Cancelled(provider)),
            "failed" => Some(LoginNotice::Failed(provider)),
            _ => None,
        }
    }

    /// Redirect target carrying this notice
    pub fn redirect_path(&self) -> String {
        match self {
            LoginNotice::Cancelled(p) => format!("/?error={}_cancelled", p.as_str()),
            LoginNotice::Failed(p) => format!("/?error={}_failed", p.as_str()),
        }
    }

    /// Text shown above the login card
    pub fn message(&self) -> String {
        match self {
            LoginNotice::Cancelled(p) => format!("{} sign-in was cancelled.", p.label()),
            LoginNotice::Failed(p) => {
                format!("{} sign-in failed. Please try again.", p.label())
            }
        }
    }
}
