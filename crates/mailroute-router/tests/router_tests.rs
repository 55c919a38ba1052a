//! Integration tests for mailroute-router
//!
//! Organized by feature area:
//! - Declaration and duplicate detection
//! - Resolution (static, dynamic, optional, catch-all, order)
//! - Query strings and fragments
//! - Named routes and URL generation
//! - Redirects
//! - Metadata

use mailroute_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;

fn mail_table() -> Router<&'static str> {
    Router::builder()
        .route("/", "home", "MailBoxView")
        .route("/compose", "compose", "ComposeMail")
        .route("/view/:id", "view", "ViewMail")
        .build()
        .unwrap()
}

// ============================================================================
// Declaration
// ============================================================================

#[test]
fn test_declared_patterns_and_names_are_pairwise_distinct() {
    let router = mail_table();

    for (i, a) in router.routes().iter().enumerate() {
        for b in &router.routes()[i + 1..] {
            assert_ne!(a.shape(false), b.shape(false));
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn test_duplicate_name_is_reported_by_build() {
    let err = Router::builder()
        .route("/", "home", ())
        .route("/inbox", "home", ())
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        RouterError::InvalidTable(vec![RouterError::DuplicateName("home".to_string())])
    );
    assert!(err.is_configuration());
}

#[test]
fn test_duplicate_pattern_shape_is_reported_by_build() {
    let err = Router::builder()
        .route("/view/:id", "view", ())
        .route("/view/:messageId", "view-message", ())
        .build()
        .unwrap_err();

    match err {
        RouterError::InvalidTable(errors) => {
            assert_eq!(
                errors,
                vec![RouterError::DuplicatePattern {
                    pattern: "/view/:messageId".to_string(),
                    existing: "/view/:id".to_string(),
                }]
            );
        }
        other => panic!("expected InvalidTable, got {:?}", other),
    }
}

#[test]
fn test_build_reports_all_errors_together() {
    let err = Router::builder()
        .route("/", "home", ())
        .route("/", "root", ())
        .route("/inbox", "home", ())
        .route("/view/:", "broken", ())
        .build()
        .unwrap_err();

    match err {
        RouterError::InvalidTable(errors) => assert_eq!(errors.len(), 3),
        other => panic!("expected InvalidTable, got {:?}", other),
    }
}

#[test]
fn test_rejected_route_is_not_added() {
    let mut builder = RouterBuilder::new();
    builder.register("/compose", "compose", 1).unwrap();
    assert!(builder.register("/compose/", "compose-again", 2).is_err());

    let router = builder.build().unwrap();
    assert_eq!(router.len(), 1);
    assert_eq!(router.resolve("/compose").unwrap().view(), Some(&1));
}

#[test]
fn test_case_insensitive_duplicates() {
    let sensitive = Router::builder()
        .route("/Log", "log-upper", ())
        .route("/log", "log", ())
        .build();
    assert!(sensitive.is_ok());

    let insensitive = Router::builder()
        .case_insensitive(true)
        .route("/Log", "log-upper", ())
        .route("/log", "log", ())
        .build();
    assert!(insensitive.is_err());
}

#[test]
fn test_case_insensitivity_set_after_registration_is_rechecked() {
    let mut builder = RouterBuilder::new();
    builder.register("/Log", "log-upper", ()).unwrap();
    builder.register("/log", "log", ()).unwrap();

    assert!(builder.case_insensitive(true).build().is_err());
}

#[test]
fn test_empty_name_rejected() {
    let err = Route::new("/compose", "  ", ()).unwrap_err();
    assert!(matches!(err, RouterError::InvalidPattern { .. }));
}

#[test]
fn test_empty_table() {
    let router: Router<()> = Router::builder().build().unwrap();
    assert!(router.is_empty());
    assert!(router.resolve("/").is_none());
}

// ============================================================================
// Resolution
// ============================================================================

#[rstest]
#[case("/", "home")]
#[case("/compose", "compose")]
#[case("/compose/", "compose")]
#[case("//compose", "compose")]
#[case("/view/42", "view")]
#[case("view/42", "view")]
fn test_resolve_mail_routes(#[case] url: &str, #[case] expected: &str) {
    let router = mail_table();
    let route_match = router.resolve(url).unwrap();
    assert_eq!(route_match.name(), expected);
}

#[rstest]
#[case("/does-not-exist")]
#[case("/view")]
#[case("/view/42/extra")]
#[case("/Compose")]
fn test_resolve_misses(#[case] url: &str) {
    assert!(mail_table().resolve(url).is_none());
}

#[test]
fn test_root_resolves_to_default_view() {
    let router = mail_table();
    let route_match = router.resolve("/").unwrap();
    assert_eq!(route_match.view(), Some(&"MailBoxView"));
    assert!(route_match.params.is_empty());
}

#[test]
fn test_resolve_extracts_id() {
    let router = mail_table();
    let route_match = router.resolve("/view/42").unwrap();
    assert_eq!(route_match.route.pattern, "/view/:id");
    assert_eq!(route_match.param("id"), Some("42"));
}

#[test]
fn test_params_are_percent_decoded() {
    let router = mail_table();
    let route_match = router.resolve("/view/msg%2042%40host").unwrap();
    assert_eq!(route_match.param("id"), Some("msg 42@host"));
}

#[test]
fn test_static_segments_are_percent_decoded() {
    let router = mail_table();
    assert_eq!(router.resolve("/com%70ose").map(|m| m.name()), Some("compose"));
    assert_eq!(router.resolve("/%76iew/9").unwrap().param("id"), Some("9"));
    assert!(router.resolve("/com%2Fpose").is_none());
}

#[test]
fn test_first_declared_match_wins() {
    let router = Router::builder()
        .route("/partner/:id", "partner", "detail")
        .route("/partner/add", "partner-add", "add")
        .build()
        .unwrap();

    // `/partner/add` also matches `/partner/:id`, which was declared first.
    assert_eq!(router.resolve("/partner/add").unwrap().name(), "partner");
    assert_eq!(router.shadowed(), vec![("/partner/add", "/partner/:id")]);
}

#[test]
fn test_static_declared_first_shadows_param() {
    let router = Router::builder()
        .route("/partner/add", "partner-add", "add")
        .route("/partner/:id", "partner", "detail")
        .build()
        .unwrap();

    assert_eq!(router.resolve("/partner/add").unwrap().name(), "partner-add");
    assert_eq!(router.resolve("/partner/7").unwrap().name(), "partner");
}

#[test]
fn test_optional_param() {
    let router = Router::builder()
        .route("/log/:page?", "log", ())
        .build()
        .unwrap();

    let with_page = router.resolve("/log/3").unwrap();
    assert_eq!(with_page.param("page"), Some("3"));

    let without_page = router.resolve("/log").unwrap();
    assert_eq!(without_page.param("page"), None);
}

#[test]
fn test_optional_param_backtracks_before_static() {
    let router = Router::builder()
        .route("/log/:level?/export", "log-export", ())
        .build()
        .unwrap();

    let route_match = router.resolve("/log/export").unwrap();
    assert_eq!(route_match.param("level"), None);

    let route_match = router.resolve("/log/error/export").unwrap();
    assert_eq!(route_match.param("level"), Some("error"));
}

#[test]
fn test_catch_all() {
    let router = Router::builder()
        .route("/attachments/*path", "attachment", ())
        .build()
        .unwrap();

    let route_match = router.resolve("/attachments/2024/05/report.pdf").unwrap();
    assert_eq!(route_match.param("path"), Some("2024/05/report.pdf"));
    assert!(router.resolve("/attachments").is_none());
}

#[test]
fn test_case_insensitive_matching_keeps_param_case() {
    let router = Router::builder()
        .case_insensitive(true)
        .route("/view/:id", "view", ())
        .build()
        .unwrap();

    let route_match = router.resolve("/VIEW/AbC").unwrap();
    assert_eq!(route_match.param("id"), Some("AbC"));
    assert!(router.is_case_insensitive());
}

// ============================================================================
// Query & Fragment
// ============================================================================

#[test]
fn test_query_and_fragment_are_split_off() {
    let router = mail_table();
    let route_match = router
        .resolve("/compose?to=ops%40partner.example&subject=Hello+there#editor")
        .unwrap();

    assert_eq!(route_match.name(), "compose");
    assert_eq!(route_match.path, "/compose");

    let mut expected = HashMap::new();
    expected.insert("to".to_string(), "ops@partner.example".to_string());
    expected.insert("subject".to_string(), "Hello there".to_string());
    assert_eq!(route_match.query, expected);
    assert_eq!(route_match.fragment.as_deref(), Some("editor"));
}

#[test]
fn test_root_with_query() {
    let router = mail_table();
    let route_match = router.resolve("/?folder=sent").unwrap();
    assert_eq!(route_match.name(), "home");
    assert_eq!(route_match.query.get("folder"), Some(&"sent".to_string()));
}

// ============================================================================
// Named Routes
// ============================================================================

#[test]
fn test_route_lookup_by_name() {
    let router = mail_table();
    assert_eq!(router.route("compose").unwrap().pattern, "/compose");
    assert!(router.route("nope").is_none());
}

#[test]
fn test_url_for_static_and_root() {
    let router = mail_table();
    assert_eq!(router.url_for("home", &HashMap::new()).unwrap(), "/");
    assert_eq!(router.url_for("compose", &HashMap::new()).unwrap(), "/compose");
}

#[test]
fn test_url_for_encodes_params() {
    let router = mail_table();
    let url = router.url_for_params("view", &[("id", "a b/c")]).unwrap();
    assert_eq!(url, "/view/a%20b%2Fc");

    // Generated URLs resolve back to the same route and value.
    let route_match = router.resolve(&url).unwrap();
    assert_eq!(route_match.param("id"), Some("a b/c"));
}

#[test]
fn test_url_for_errors() {
    let router = mail_table();

    assert_eq!(
        router.url_for("view", &HashMap::new()).unwrap_err(),
        RouterError::MissingParam {
            route: "view".to_string(),
            param: "id".to_string(),
        }
    );
    assert_eq!(
        router.url_for("inbox", &HashMap::new()).unwrap_err(),
        RouterError::UnknownRoute("inbox".to_string())
    );
}

#[test]
fn test_url_for_optional_and_catch_all() {
    let router = Router::builder()
        .route("/log/:page?", "log", ())
        .route("/attachments/*path", "attachment", ())
        .build()
        .unwrap();

    assert_eq!(router.url_for_params("log", &[]).unwrap(), "/log");
    assert_eq!(router.url_for_params("log", &[("page", "2")]).unwrap(), "/log/2");
    assert_eq!(
        router
            .url_for_params("attachment", &[("path", "2024/report 1.pdf")])
            .unwrap(),
        "/attachments/2024/report%201.pdf"
    );
}

// ============================================================================
// Redirects
// ============================================================================

#[test]
fn test_static_redirect() {
    let router = Router::<&str>::builder()
        .redirect("/admin/partner/add", "legacy-partner-add", "/partner/add")
        .route("/partner/add", "partner-add", "AddPartner")
        .build()
        .unwrap();

    let route_match = router.resolve("/admin/partner/add").unwrap();
    assert!(route_match.is_redirect());
    assert_eq!(route_match.view(), None);
    assert_eq!(route_match.redirect_target(), Some(Ok("/partner/add".to_string())));
}

#[test]
fn test_redirect_target_must_use_captured_params() {
    let err = Router::<()>::builder()
        .redirect("/admin/log", "legacy-log", "/log/:page")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("does not capture"));
}

#[rstest]
#[case("/old/:id?", "/view/:id", "only captures optionally")]
#[case("/old/:id?", "/files/*id", "only captures optionally")]
#[case("/old/*rest", "/view/:id", "does not capture")]
fn test_redirect_target_rejects_unfillable_params(
    #[case] pattern: &str,
    #[case] to: &str,
    #[case] reason: &str,
) {
    let err = Router::<()>::builder()
        .redirect(pattern, "legacy", to)
        .build()
        .unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains(reason), "{err}");
}

#[test]
fn test_redirect_from_optional_and_catch_all_sources() {
    let router = Router::<()>::builder()
        .redirect("/old/log/:page?", "legacy-log", "/log/:page?")
        .redirect("/old/files/*path", "legacy-files", "/files/*path")
        .redirect("/old/view/*id", "legacy-view", "/view/:id")
        .build()
        .unwrap();

    let target = |url: &str| router.resolve(url).and_then(|m| m.redirect_target());

    assert_eq!(target("/old/log"), Some(Ok("/log".to_string())));
    assert_eq!(target("/old/log/3"), Some(Ok("/log/3".to_string())));
    assert_eq!(target("/old/files/a/b.txt"), Some(Ok("/files/a/b.txt".to_string())));
    assert_eq!(target("/old/view/a/b"), Some(Ok("/view/a%2Fb".to_string())));
}

#[test]
fn test_redirect_target_reports_missing_param() {
    let route = Route::<()>::redirect("/admin/pmode/:id", "legacy-pmode", "/pmode/:id/edit").unwrap();

    assert_eq!(
        route.redirect_target(&HashMap::new()),
        Some(Err(RouterError::MissingParam {
            route: "legacy-pmode".to_string(),
            param: "id".to_string(),
        }))
    );
}

#[test]
fn test_view_route_has_no_redirect_target() {
    let router = mail_table();
    let route_match = router.resolve("/compose").unwrap();
    assert!(!route_match.is_redirect());
    assert_eq!(route_match.redirect_target(), None);
}

// ============================================================================
// Metadata
// ============================================================================

#[test]
fn test_route_metadata() {
    let route = Route::new("/log", "log", ())
        .unwrap()
        .with_meta("title", "Message log")
        .with_meta("section", "admin");

    let router = Router::builder().with_route(route).build().unwrap();
    let matched = router.resolve("/log").unwrap();

    assert_eq!(matched.route.get_meta("title"), Some("Message log"));
    assert!(matched.route.has_meta("section"));
}

#[test]
fn test_route_metadata_in_bulk() {
    let metadata: HashMap<String, String> = [("title", "Partners"), ("section", "admin")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let route = Route::new("/partner", "partners", ())
        .unwrap()
        .with_meta("title", "Old title")
        .with_metadata(metadata);

    assert_eq!(route.get_meta("title"), Some("Partners"));
    assert_eq!(route.get_meta("section"), Some("admin"));
}

// ============================================================================
// Shadowed routes
// ============================================================================

#[test]
fn test_shadowed_route_is_reported() {
    let router = Router::builder()
        .route("/log/:page?", "log-page", "LogView")
        .route("/log", "log", "LogView")
        .route("/view/:id", "view", "ViewMail")
        .route("/view/latest", "latest", "ViewMail")
        .build()
        .unwrap();

    assert_eq!(
        router.shadowed(),
        vec![("/log", "/log/:page?"), ("/view/latest", "/view/:id")]
    );
    assert_eq!(router.resolve("/log").map(|m| m.name()), Some("log-page"));
}

#[test]
fn test_specific_routes_first_are_not_shadowed() {
    let router = Router::builder()
        .route("/log", "log", "LogView")
        .route("/log/:page?", "log-page", "LogView")
        .route("/view/latest", "latest", "ViewMail")
        .route("/view/:id", "view", "ViewMail")
        .build()
        .unwrap();

    assert!(router.shadowed().is_empty());
    assert!(mail_table().shadowed().is_empty());
}
