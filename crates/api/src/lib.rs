mod auth;
mod error;
mod friendship;
mod reminder;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use remind_anyone_infra::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    status::configure_routes(cfg);
    auth::configure_routes(cfg);
    friendship::configure_routes(cfg);
    reminder::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: Context) -> anyhow::Result<Self> {
        let (server, port) = Application::configure_server(context).await?;
        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: Context) -> anyhow::Result<(Server, u16)> {
        let address = format!("0.0.0.0:{}", context.config.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let shared_ctx = context.clone();
        let server = HttpServer::new(move || {
            let ctx = shared_ctx.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .configure(configure_server_api)
        })
        .listen(listener)?
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> anyhow::Result<()> {
        self.server
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {:?}", e))
    }
}
