// File: src/lib.rs
// Purpose: Mail UI routing, wired from configuration

//! Route table and navigation for the mail and partner-management UI.
//!
//! The table is built once at startup. The mail box view is loaded
//! eagerly; every other view is read from the views directory on the first
//! navigation that needs it.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! let navigator = mailroute::bootstrap().await?;
//! let navigation = navigator.push("/view/42").await?;
//! assert_eq!(navigation.location.param("id"), Some("42"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod navigation;
pub mod routes;
pub mod telemetry;
pub mod views;

pub use config::{Config, LoggingConfig, RoutingConfig};
pub use navigation::{BasePath, Location, Navigation, NavigationError, NavigationPhase, Navigator};
pub use routes::{install, installed, mail_routes, MailRouter};
pub use views::{MailView, TemplateLoader, TemplateView};

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Build a navigator over a fresh table without touching the global slot
pub async fn build_navigator(config: &Config) -> Result<Navigator> {
    let router = mail_routes(&config.routing).await?;
    Ok(Navigator::new(Arc::new(router), &config.routing))
}

/// Start-up sequence: `.env`, `mailroute.toml`, environment overrides,
/// tracing, then the route table installed process-wide
pub async fn bootstrap() -> Result<Navigator> {
    dotenvy::dotenv().ok();
    let config = Config::load_default()?.with_env_overrides();
    bootstrap_with(config).await
}

/// [`bootstrap`] with an already-loaded configuration
pub async fn bootstrap_with(config: Config) -> Result<Navigator> {
    telemetry::init_tracing(&config.logging);

    let router = install(mail_routes(&config.routing).await?)?;
    info!(
        app = %config.app.name,
        base = %config.routing.base_path,
        routes = router.len(),
        "mail routes installed"
    );

    Ok(Navigator::new(router, &config.routing))
}
