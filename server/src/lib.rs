#![recursion_limit = "512"]
//! Server library module.
//!
//! The binary and the integration tests share the router built here, so
//! tests exercise exactly what production serves.

pub mod config;
pub mod error;

use app::components::App;
use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use config::SiteConfig;
use error::Result;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::info;

/// Body of `GET /healthz`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos_meta::MetaTags;
    let stylesheet = format!("/{}/{}.css", options.site_pkg_dir, options.output_name);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=stylesheet/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Build the full application router: the rendered page, the health check
/// and the compiled site bundle.
pub fn build_router(options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let pkg_route = format!("/{}", options.site_pkg_dir);
    let pkg_dir = format!("{}/{}", options.site_root, options.site_pkg_dir);

    Router::new()
        .route("/healthz", get(health))
        .leptos_routes(&options, routes, {
            let options = options.clone();
            move || shell(options.clone())
        })
        .fallback(file_and_error_handler)
        .nest_service(&pkg_route, ServeDir::new(pkg_dir))
        .with_state(options)
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn run(config: SiteConfig) -> Result<()> {
    let app = build_router(config.leptos_options());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Listening on http://{}", config.addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn file_and_error_handler(
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response {
    let path = req.uri().path();

    if path.starts_with(&format!("/{}/", options.site_pkg_dir)) {
        return (StatusCode::NOT_FOUND, Html("<h1>404 Not Found</h1>")).into_response();
    }

    let handler = leptos_axum::render_app_to_stream(move || shell(options.clone()));
    handler(req).await.into_response()
}

#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutting down gracefully...");
}
