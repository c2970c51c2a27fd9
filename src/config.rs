//! Environment-sourced server configuration.

use std::env;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;

/// Everything the server needs from the process environment. Values are
/// read once at startup; there is no config file and no CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth client id issued by the Google API console.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Redirect URI registered for this client; must point at the
    /// `/oauth2callback` route of this server.
    pub redirect_uri: String,
    /// Secret used to sign session cookies.
    pub session_secret: String,
    /// Port to listen on.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            client_id: env::var("CLIENT_ID").context("CLIENT_ID not set!")?,
            client_secret: env::var("CLIENT_SECRET").context("CLIENT_SECRET not set!")?,
            redirect_uri: env::var("REDIRECT_URI").context("REDIRECT_URI not set!")?,
            session_secret: env::var("SESSION_SECRET").context("SESSION_SECRET not set!")?,
            port: match env::var("PORT") {
                Ok(port) => port.parse().context("PORT is not a valid port number!")?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }
}
