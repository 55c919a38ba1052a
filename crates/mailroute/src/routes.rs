// File: src/routes.rs
// Purpose: The mail UI route table and its process-wide slot

use crate::config::RoutingConfig;
use crate::views::MailView;
use anyhow::{anyhow, Context, Result};
use mailroute_router::{Route, Router};
use mailroute_views::ViewRef;
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// The application's route table
pub type MailRouter = Router<ViewRef>;

pub const HOME: &str = "home";
pub const COMPOSE: &str = "compose";
pub const VIEW: &str = "view";
pub const PARTNERS: &str = "partners";
pub const PARTNER_ADD: &str = "partner-add";
pub const LOGS: &str = "logs";
pub const PMODE_EDIT: &str = "pmode-edit";

/// (pattern, name, view, title) in matching order
const MAIL_ROUTES: [(&str, &str, MailView, &str); 7] = [
    ("/", HOME, MailView::MailBox, "Mailbox"),
    ("/compose", COMPOSE, MailView::Compose, "Compose"),
    ("/view/:id", VIEW, MailView::ViewMail, "Message"),
    ("/partner", PARTNERS, MailView::PartnerList, "Partners"),
    ("/partner/add", PARTNER_ADD, MailView::AddPartner, "Add partner"),
    ("/log", LOGS, MailView::LogView, "Message log"),
    ("/pmode/:id/edit", PMODE_EDIT, MailView::PModeEdit, "Edit P-Mode"),
];

/// Administrative paths from earlier layouts of the UI
const LEGACY_REDIRECTS: [(&str, &str, &str); 4] = [
    ("/admin/partner", "legacy-partners", "/partner"),
    ("/admin/partner/add", "legacy-partner-add", "/partner/add"),
    ("/admin/log", "legacy-logs", "/log"),
    ("/admin/pmode/:id/edit", "legacy-pmode-edit", "/pmode/:id/edit"),
];

static ROUTE_TABLE: OnceCell<Arc<MailRouter>> = OnceCell::new();

/// Build the mail UI route table
///
/// Eager views are read from `views_dir` here, so a missing landing view
/// fails bootstrap.
pub async fn mail_routes(config: &RoutingConfig) -> Result<MailRouter> {
    let views_dir = Path::new(&config.views_dir);
    let mut builder = Router::builder().case_insensitive(config.case_insensitive);

    for (pattern, name, view, title) in MAIL_ROUTES {
        let reference = view
            .reference(views_dir)
            .await
            .with_context(|| format!("Failed to prepare view for route `{}`", name))?;

        let route = Route::new(pattern, name, reference)?
            .with_meta("title", title)
            .with_meta("component", view.component());
        builder = builder.with_route(route);
    }

    if config.legacy_redirects {
        for (pattern, name, to) in LEGACY_REDIRECTS {
            builder = builder.redirect(pattern, name, to);
        }
    }

    let router = builder.build()?;
    info!(routes = router.len(), views_dir = %config.views_dir, "route table built");
    Ok(router)
}

/// Install the process-wide route table
///
/// Only one table can be installed for the lifetime of the process.
pub fn install(router: MailRouter) -> Result<Arc<MailRouter>> {
    ROUTE_TABLE
        .try_insert(Arc::new(router))
        .map(Arc::clone)
        .map_err(|_| anyhow!("a route table is already installed"))
}

/// The installed route table, if bootstrap has run
pub fn installed() -> Option<Arc<MailRouter>> {
    ROUTE_TABLE.get().cloned()
}
