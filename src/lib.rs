//! A small web server that signs a user in with Google OAuth2 and posts
//! YouTube comments on their behalf.

use std::io;

#[macro_use]
extern crate log;

pub mod auth;
pub mod comments;
pub mod config;
pub mod error;
pub mod pages;
pub mod server;
pub mod session;
pub mod youtube;

pub use error::Error;

/// A generic result type for handlers in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub async fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let _lock = stdout.lock();

    server::Server::new()
        .register_service(pages::configure)
        .register_service(auth::configure)
        .register_service(comments::configure)
        .run()
        .await?
        .await
}
