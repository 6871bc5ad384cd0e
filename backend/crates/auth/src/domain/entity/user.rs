//! User Entity
//!
//! Minimal profile of a federated account, keyed by its provider-namespaced ID.
//! Overwritten on every successful sign-in for that account.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::provider::ProviderProfile;
use crate::domain::value_object::{provider_name::ProviderName, user_id::UserId};

/// User record
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// `"<provider>:<externalId>"`
    pub id: UserId,
    pub provider: ProviderName,
    pub display_name: String,
    /// Possibly empty, provider order preserved
    pub emails: Vec<String>,
    /// Provider photo list; the first entry is the profile photo
    pub photos: Vec<String>,
    /// Provider payload as received
    pub raw: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Map a provider profile to the record stored for it
    pub fn from_profile(provider: ProviderName, profile: ProviderProfile) -> Self {
        let now = Utc::now();

        Self {
            id: UserId::federated(provider, &profile.external_id),
            provider,
            display_name: profile.display_name,
            emails: profile.emails,
            photos: profile.photos,
            raw: profile.raw,
            created_at: now,
            updated_at: now,
        }
    }

    /// First photo from the provider's photo list
    pub fn photo_url(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    /// Photo to show on the profile page
    ///
    /// Falls back to the payload's `picture` field (a URL string, or the
    /// nested `picture.data.url` form), then to `placeholder`.
    pub fn avatar_url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.photo_url()
            .or_else(|| self.raw_picture())
            .filter(|url| !url.is_empty())
            .unwrap_or(placeholder)
    }

    fn raw_picture(&self) -> Option<&str> {
        let picture = self.raw.get("picture")?;
        picture
            .as_str()
            .or_else(|| picture.pointer("/data/url").and_then(Value::as_str))
    }
}
