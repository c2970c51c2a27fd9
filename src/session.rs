//! Server-side session storage keyed by a signed cookie.
//!
//! Sessions hold at most one [`Credential`] and live only as long as the
//! process. The cookie carries an opaque session id plus an HMAC-SHA256
//! signature; the credential itself never leaves the server.

use std::collections::HashMap;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use hmac::{Hmac, Mac, NewMac};
use parking_lot::RwLock;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use sha2::Sha256;

use crate::auth::Credential;

pub const SESSION_COOKIE: &str = "sessionid";

const SESSION_ID_LEN: usize = 32;

type HmacSha256 = Hmac<Sha256>;

/// In-memory session store. Clone-free: wrap in `web::Data` and share.
///
/// Concurrent writes to the same session are not synchronized beyond the
/// lock; the last write wins.
pub struct SessionStore {
    secret: Vec<u8>,
    sessions: RwLock<HashMap<String, Credential>>,
}

impl SessionStore {
    pub fn new(secret: &str) -> Self {
        SessionStore {
            secret: secret.as_bytes().to_vec(),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, session_id: &str) -> Option<Credential> {
        self.sessions.read().get(session_id).cloned()
    }

    pub fn put(&self, session_id: &str, credential: Credential) {
        self.sessions
            .write()
            .insert(session_id.to_owned(), credential);
    }

    pub fn destroy(&self, session_id: &str) {
        self.sessions.write().remove(session_id);
    }

    /// A fresh, unguessable session id. Not stored until `put` is called.
    pub fn create_session_id(&self) -> String {
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_ID_LEN)
            .map(char::from)
            .collect()
    }

    /// The session id from the request cookie, if the signature checks out.
    /// A missing, malformed, or tampered cookie all read as "no session".
    pub fn session_id(&self, request: &HttpRequest) -> Option<String> {
        let cookie = request.cookie(SESSION_COOKIE)?;
        let (id, signature) = cookie.value().split_once('.')?;
        let presented = base64_url::decode(signature).ok()?;
        if constant_time_eq::constant_time_eq(&self.sign(id), &presented) {
            Some(id.to_owned())
        } else {
            None
        }
    }

    /// A session cookie for the given id, value `<id>.<signature>`.
    pub fn cookie_for(&self, session_id: &str) -> Cookie<'static> {
        let value = format!("{}.{}", session_id, base64_url::encode(&self.sign(session_id)));

        let builder = Cookie::build(SESSION_COOKIE, value)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);

        #[cfg(feature = "production")]
        let builder = builder.secure(true);

        builder.finish()
    }

    /// A cookie that instructs the browser to drop the session cookie.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
        cookie.make_removal();
        cookie
    }

    fn sign(&self, session_id: &str) -> Vec<u8> {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts keys of any length");
        mac.update(session_id.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}
