pub mod api;
pub mod modules;
pub use modules::auth;
pub use modules::entry;
pub use modules::learning_log;
pub use modules::topic;
pub mod health;
pub mod shared;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::extractors::auth::LoginUrl;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::entry::adapter::outgoing::{EntryQueryPostgres, EntryRepositoryPostgres};
use crate::entry::application::services::{CreateEntryService, EditEntryService, GetEntryService};
use crate::learning_log::application::record_access_coordinator::RecordAccessCoordinator;
use crate::shared::api::custom_json_config;
use crate::shared::config::{load_env_files, AppConfig};
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::services::{
    CreateTopicService, GetTopicDetailService, GetTopicService, GetTopicsService,
};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub learning_log: RecordAccessCoordinator,
}

/// Postgres adapters wired into the services behind every view.
fn build_coordinator(db: &Arc<DatabaseConnection>) -> RecordAccessCoordinator {
    let topic_query = TopicQueryPostgres::new(Arc::clone(db));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(db));
    let entry_query = EntryQueryPostgres::new(Arc::clone(db));
    let entry_repo = EntryRepositoryPostgres::new(Arc::clone(db));

    RecordAccessCoordinator {
        get_topics: Arc::new(GetTopicsService::new(topic_query.clone())),
        get_topic: Arc::new(GetTopicService::new(topic_query.clone())),
        get_topic_detail: Arc::new(GetTopicDetailService::new(
            topic_query.clone(),
            entry_query.clone(),
        )),
        create_topic: Arc::new(CreateTopicService::new(topic_repo)),
        get_entry: Arc::new(GetEntryService::new(topic_query, entry_query)),
        create_entry: Arc::new(CreateEntryService::new(entry_repo.clone())),
        edit_entry: Arc::new(EditEntryService::new(entry_repo)),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let environment = load_env_files();

    // SAFETY GUARD: never expose test helpers in production
    #[cfg(feature = "test-helpers")]
    {
        if environment == "production" {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!(
            "Test helper routes are ENABLED for environment: {}",
            environment
        );
    }

    let config = AppConfig::from_env().context("Invalid application configuration")?;
    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;

    let server_url = config.server_url();
    info!(environment = %environment, "Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let state = AppState {
        learning_log: build_coordinator(&db_arc),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let login_url = LoginUrl(config.login_url.clone());
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(login_url.clone()))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::learning_log::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Learning log
    cfg.service(routes::index_handler);
    cfg.service(routes::get_topics_handler);
    cfg.service(routes::get_topic_handler);
    cfg.service(routes::new_topic_form_handler);
    cfg.service(routes::create_topic_handler);
    cfg.service(routes::new_entry_form_handler);
    cfg.service(routes::create_entry_handler);
    cfg.service(routes::edit_entry_form_handler);
    cfg.service(routes::edit_entry_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
