use actix_web::web::{Data, Form, Json};
use actix_web::{Either, HttpRequest, HttpResponse};
use serde_json::json;

use crate::comments::forms::CommentForm;
use crate::error::Error;
use crate::session::SessionStore;
use crate::youtube::YouTubeClient;
use crate::Result;

/// POST-handler for publishing a comment. Rejects the request before any
/// outbound call unless the session holds a credential; the credential is
/// passed to the API client per call, never bound on shared state.
pub async fn post_comment(
    request: HttpRequest,
    body: Either<Json<CommentForm>, Form<CommentForm>>,
    sessions: Data<SessionStore>,
    youtube: Data<YouTubeClient>,
) -> Result<HttpResponse> {
    let credential = sessions
        .session_id(&request)
        .and_then(|session_id| sessions.get(&session_id))
        .ok_or(Error::NotAuthenticated)?;

    let form = body.into_inner();
    let video_id = form.video_id().unwrap_or_default();

    youtube
        .insert_comment(&credential, &video_id, &form.comment)
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Comment posted successfully!" })))
}
