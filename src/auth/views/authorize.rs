use actix_web::http::header::LOCATION;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::auth::IdentityClient;
use crate::session::SessionStore;

/// Query string on the callback from Google:
///   code=<authorization_code>
///   state=<state>
///   scope=https%3A%2F%2Fwww.googleapis.com%2Fauth%2Fyoutube.force-ssl
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    code: Option<String>,
    #[allow(dead_code)]
    state: Option<String>,
    error: Option<String>,
}

/// Handle callback from Google: exchanges the authorization code for a
/// credential and stores it in the caller's session. A failed exchange is
/// not an error page; the user lands back on `/` signed out.
pub async fn exchange_code_for_token(
    request: HttpRequest,
    query: web::Query<AuthRequest>,
    identity: web::Data<IdentityClient>,
    sessions: web::Data<SessionStore>,
) -> HttpResponse {
    let code = match (&query.error, &query.code) {
        (Some(error), _) => {
            warn!("authorization was denied by the provider: {}", error);
            return signed_out_redirect();
        }
        (_, Some(code)) => code,
        _ => {
            warn!("callback arrived without an authorization code");
            return signed_out_redirect();
        }
    };

    match identity.exchange_code(code).await {
        Ok(credential) => {
            let session_id = sessions
                .session_id(&request)
                .unwrap_or_else(|| sessions.create_session_id());
            let cookie = sessions.cookie_for(&session_id);
            sessions.put(&session_id, credential);

            HttpResponse::Found()
                .append_header((LOCATION, "/"))
                .cookie(cookie)
                .finish()
        }
        Err(error) => {
            error!("code exchange failed: {}", error);
            signed_out_redirect()
        }
    }
}

fn signed_out_redirect() -> HttpResponse {
    HttpResponse::Found().append_header((LOCATION, "/")).finish()
}
