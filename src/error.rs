//! Error types for the request handlers.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use oauth2::basic::BasicErrorResponseType;
use oauth2::{RequestTokenError, StandardErrorResponse};
use serde_json::json;
use thiserror::Error;

/// The error returned by the `oauth2` crate for a failed code exchange over
/// its reqwest transport.
pub type ExchangeError = RequestTokenError<
    oauth2::reqwest::Error<reqwest::Error>,
    StandardErrorResponse<BasicErrorResponseType>,
>;

#[derive(Debug, Error)]
pub enum Error {
    /// The code exchange with the identity provider failed. Handled at the
    /// callback route with a redirect; never rendered as JSON.
    #[error("unable to exchange the authorization code")]
    AuthExchange(#[from] ExchangeError),

    /// A comment was attempted without a credential in the session.
    #[error("Not signed in")]
    NotAuthenticated,

    /// The outbound comment-post call failed. The payload is the logged
    /// detail; callers only ever see the fixed message.
    #[error("Error posting comment")]
    Api(String),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotAuthenticated => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Error::Api(detail) = self {
            error!("posting comment failed: {}", detail);
        }

        HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() }))
    }
}
