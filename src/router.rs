use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::auth::{require_admin, SessionStore};
use crate::config::Config;
use crate::db::DBPool;
use crate::handlers::{
    about, auth, challenges, competitions, executives, gallery, hackathons, hero, projects,
    social_links, workshops,
};

// Define the application state struct
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<DBPool>,
    pub config: Arc<Config>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(pool: Arc<DBPool>, config: Arc<Config>) -> Self {
        let sessions = Arc::new(SessionStore::new(Duration::from_secs(
            config.session_ttl_secs,
        )));
        AppState {
            pool,
            config,
            sessions,
        }
    }
}

async fn healthz() -> &'static str {
    "OK"
}

// Function to create the Axum router
pub fn create_router(state: AppState) -> Result<Router> {
    let origin: HeaderValue = state
        .config
        .allowed_origin
        .parse()
        .with_context(|| format!("Invalid allowed_origin: {}", state.config.allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Everything here sits behind the bearer-token check.
    let admin_routes = Router::new()
        .route("/logout", post(auth::logout))
        .route("/hero", post(hero::update_hero))
        .route("/about", post(about::update_about))
        .route(
            "/social-links",
            put(social_links::create_social_link)
                .post(social_links::update_social_link)
                .delete(social_links::delete_social_link),
        )
        .route(
            "/executives",
            put(executives::create_executive)
                .post(executives::update_executive)
                .delete(executives::delete_executive),
        )
        .route(
            "/gallery",
            put(gallery::create_gallery_image)
                .post(gallery::update_gallery_image)
                .delete(gallery::delete_gallery_image),
        )
        .route(
            "/projects",
            put(projects::create_project)
                .post(projects::update_project)
                .delete(projects::delete_project),
        )
        .route(
            "/workshops",
            put(workshops::create_workshop)
                .post(workshops::update_workshop)
                .delete(workshops::delete_workshop),
        )
        .route(
            "/workshop-materials",
            put(workshops::create_workshop_material)
                .delete(workshops::delete_workshop_material),
        )
        .route(
            "/challenges",
            put(challenges::create_challenge)
                .post(challenges::update_challenge)
                .delete(challenges::delete_challenge),
        )
        .route(
            "/hackathons",
            put(hackathons::create_hackathon)
                .post(hackathons::update_hackathon)
                .delete(hackathons::delete_hackathon),
        )
        .route(
            "/competitions",
            put(competitions::create_competition)
                .post(competitions::update_competition)
                .delete(competitions::delete_competition),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let router = Router::new()
        .route("/healthz", get(healthz))
        .route("/v0/hero", get(hero::get_hero))
        .route("/v0/about", get(about::get_about))
        .route("/v0/social-links", get(social_links::list_social_links))
        .route("/v0/executives", get(executives::list_executives))
        .route("/v0/gallery", get(gallery::list_gallery_images))
        .route("/v0/projects", get(projects::list_projects))
        .route("/v0/workshops", get(workshops::list_workshops))
        .route("/v0/challenges", get(challenges::list_challenges))
        .route("/v0/hackathons", get(hackathons::list_hackathons))
        .route("/v0/competitions", get(competitions::list_competitions))
        .nest(
            "/api/admin",
            Router::new()
                .route("/login", post(auth::login))
                .merge(admin_routes),
        )
        .layer(cors)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::pg::PgConnection;
    use diesel::r2d2::ConnectionManager;

    fn test_state(allowed_origin: &str) -> AppState {
        let manager = ConnectionManager::<PgConnection>::new("postgres://localhost/unused");
        // build_unchecked defers connecting, so no database is needed here.
        let pool = Arc::new(diesel::r2d2::Pool::builder().build_unchecked(manager));
        let config = Arc::new(Config {
            database_url: "postgres://localhost/unused".to_string(),
            listen_addr: "127.0.0.1:0".to_string(),
            admin_password: "secret".to_string(),
            session_ttl_secs: 60,
            allowed_origin: allowed_origin.to_string(),
        });
        AppState::new(pool, config)
    }

    #[test]
    fn router_builds_with_a_valid_origin() {
        assert!(create_router(test_state("http://localhost:3000")).is_ok());
    }

    #[test]
    fn router_rejects_an_unparsable_origin() {
        assert!(create_router(test_state("http://bad\norigin")).is_err());
    }
}
