use std::io;
use std::sync::Arc;

use actix_web::web::ServiceConfig;
use actix_web::{dev, middleware, web, App, HttpServer};

use crate::auth::IdentityClient;
use crate::config::Config;
use crate::session::SessionStore;
use crate::youtube::YouTubeClient;

/// This struct provides a slightly simpler way to write `main.rs` in
/// the root project, and forces more coupling to app-specific modules.
#[derive(Default)]
pub struct Server {
    apps: Vec<Box<dyn Fn(&mut ServiceConfig) + Send + Sync + 'static>>,
}

impl Server {
    /// Creates a new Server struct to configure.
    pub fn new() -> Self {
        Server::default()
    }

    /// Registers a service.
    pub fn register_service<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut ServiceConfig) + Send + Sync + 'static,
    {
        self.apps.push(Box::new(handler));
        self
    }

    /// Consumes and then runs the server, with default settings that we
    /// generally want.
    pub async fn run(self) -> io::Result<dev::Server> {
        dotenv::dotenv().ok();
        pretty_env_logger::init();

        let config = Config::from_env().expect("Invalid server configuration!");
        let port = config.port;

        let sessions = web::Data::new(SessionStore::new(&config.session_secret));
        let identity = web::Data::new(IdentityClient::new(&config));
        let youtube = web::Data::new(YouTubeClient::new());

        let apps = Arc::new(self.apps);

        let server = HttpServer::new(move || {
            let mut app = App::new()
                .app_data(sessions.clone())
                .app_data(identity.clone())
                .app_data(youtube.clone())
                .wrap(middleware::Logger::default());

            // Configure app resources and routes
            for handler in apps.iter() {
                app = app.configure(handler);
            }

            app
        })
        .backlog(8192)
        .shutdown_timeout(0)
        .workers(1)
        .bind(("0.0.0.0", port))?
        .run();

        info!("Server running on port {}", port);

        Ok(server)
    }
}
