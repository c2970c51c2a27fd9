//! OAuth2 sign-in against Google.

use actix_web::web::{get, resource, ServiceConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod client;
pub mod views;

pub use client::IdentityClient;

/// Token bundle proving the user's authorization to act on their behalf
/// against the YouTube API. Held in the session store for the lifetime of
/// the browser session; never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Enables oauth2 login and authentication.
pub fn configure(config: &mut ServiceConfig) {
    config
        .service(resource("/auth").route(get().to(views::login::redirect_to_provider)))
        .service(
            resource("/oauth2callback")
                .name("oauth-callback")
                .route(get().to(views::authorize::exchange_code_for_token)),
        )
        .service(resource("/logout").route(get().to(views::login::sign_out)))
        .service(resource("/status").route(get().to(views::login::status)));
}
