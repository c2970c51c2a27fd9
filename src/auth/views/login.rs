use actix_web::http::header::LOCATION;
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::auth::IdentityClient;
use crate::session::SessionStore;

/// GET-handler kicking off the authorization-code flow: redirects the
/// browser to the provider's consent URL.
pub async fn redirect_to_provider(identity: web::Data<IdentityClient>) -> HttpResponse {
    let authorize_url = identity.authorize_url();

    HttpResponse::Found()
        .append_header((LOCATION, authorize_url.to_string()))
        .finish()
}

/// Destroys the session and sends the user back to the landing page.
pub async fn sign_out(
    request: HttpRequest,
    sessions: web::Data<SessionStore>,
) -> HttpResponse {
    if let Some(session_id) = sessions.session_id(&request) {
        sessions.destroy(&session_id);
    }

    HttpResponse::Found()
        .append_header((LOCATION, "/"))
        .cookie(sessions.removal_cookie())
        .finish()
}

/// Reports whether the current session holds a credential.
pub async fn status(request: HttpRequest, sessions: web::Data<SessionStore>) -> HttpResponse {
    let signed_in = sessions
        .session_id(&request)
        .map(|session_id| sessions.get(&session_id).is_some())
        .unwrap_or(false);

    HttpResponse::Ok().json(json!({ "signedIn": signed_in }))
}
