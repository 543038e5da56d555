use axum_test::TestServer;
use std::path::PathBuf;

use sala::security::SecurityMode;
use website::config::{Config, ServerConfig};
use website::run::AppState;
use website::web::all_routes;

fn test_server(mode: SecurityMode) -> TestServer {
    let frontend_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config = Config {
        server: ServerConfig {
            port: 0,
            https: false,
        },
        frontend_dir: frontend_dir.clone(),
        // Nothing listens here; lead submission fails fast in tests
        contact_api_url: "http://127.0.0.1:9/leads".to_string(),
        analytics_url: None,
        ga_tag_id: None,
        security_mode: mode,
    };

    let state = AppState::build(config).expect("state must build");
    TestServer::new(all_routes(state, &frontend_dir)).expect("server must build")
}

const HARDENING_HEADERS: [&str; 8] = [
    "content-security-policy",
    "x-content-type-options",
    "x-frame-options",
    "referrer-policy",
    "permissions-policy",
    "cross-origin-opener-policy",
    "cross-origin-resource-policy",
    "strict-transport-security",
];

#[tokio::test]
async fn test_bare_path_redirects_to_default_locale() {
    let server = test_server(SecurityMode::Production);

    let res = server.get("/pricing").await;
    res.assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.header("location"), "/th/pricing");

    // Redirects are hardened too
    for name in HARDENING_HEADERS {
        assert!(res.maybe_header(name).is_some(), "missing header: {}", name);
    }
}

#[tokio::test]
async fn test_root_redirects_to_default_locale_root() {
    let server = test_server(SecurityMode::Production);

    let res = server.get("/").await;
    res.assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.header("location"), "/th");
}

#[tokio::test]
async fn test_localized_page_passes_through_with_headers() {
    let server = test_server(SecurityMode::Production);

    let res = server.get("/en/pricing").await;
    res.assert_status_ok();

    for name in HARDENING_HEADERS {
        assert!(res.maybe_header(name).is_some(), "missing header: {}", name);
    }

    // The side-channel nonce matches the one embedded in the CSP
    let nonce = res.header("x-csp-nonce");
    let nonce = nonce.to_str().unwrap();
    let csp = res.header("content-security-policy");
    let csp = csp.to_str().unwrap();
    assert!(!nonce.is_empty());
    assert!(csp.contains(&format!("'nonce-{}'", nonce)));

    // Page embeds the same nonce for its scripts
    let body = res.text();
    assert!(body.contains(&format!("nonce=\"{}\"", nonce)));
}

#[tokio::test]
async fn test_region_variant_tag_is_served_without_redirect() {
    let server = test_server(SecurityMode::Production);

    let res = server.get("/en-US/pricing").await;
    res.assert_status_ok();
    assert!(res.text().contains("Pricing"));
}

#[tokio::test]
async fn test_nonces_differ_across_requests() {
    let server = test_server(SecurityMode::Production);

    let first = server.get("/en/pricing").await;
    let second = server.get("/en/pricing").await;
    assert_ne!(first.header("x-csp-nonce"), second.header("x-csp-nonce"));
}

#[tokio::test]
async fn test_api_paths_bypass_locale_and_hardening() {
    let server = test_server(SecurityMode::Production);

    let res = server.get("/api/contact").await;
    // No redirect into a localized path
    assert_ne!(
        res.status_code(),
        axum::http::StatusCode::TEMPORARY_REDIRECT
    );
    for name in HARDENING_HEADERS {
        assert!(
            res.maybe_header(name).is_none(),
            "unexpected header: {}",
            name
        );
    }
}

#[tokio::test]
async fn test_development_mode_emits_no_hardening_headers() {
    let server = test_server(SecurityMode::Development);

    let res = server.get("/en/pricing").await;
    res.assert_status_ok();
    for name in HARDENING_HEADERS {
        assert!(
            res.maybe_header(name).is_none(),
            "unexpected header: {}",
            name
        );
    }
    assert!(res.maybe_header("x-csp-nonce").is_none());
}

#[tokio::test]
async fn test_unknown_localized_path_renders_localized_404() {
    let server = test_server(SecurityMode::Production);

    let res = server.get("/en/no-such-page").await;
    res.assert_status_not_found();
    assert!(res.text().contains("Page not found"));
    assert!(res.maybe_header("content-security-policy").is_some());

    let th = server.get("/th/no-such-page").await;
    th.assert_status_not_found();
    assert!(th.text().contains("ไม่พบหน้าที่ค้นหา"));
}

#[tokio::test]
async fn test_unknown_case_slug_renders_404() {
    let server = test_server(SecurityMode::Production);

    let res = server.get("/en/cases/no-such-case").await;
    res.assert_status_not_found();
    assert!(res.text().contains("Page not found"));
}

#[tokio::test]
async fn test_case_tag_filter() {
    let server = test_server(SecurityMode::Production);

    let res = server.get("/en/cases").add_query_param("tag", "chatbot").await;
    res.assert_status_ok();
    let body = res.text();
    assert!(body.contains("chatbot"));
    assert!(!body.contains("Automated invoice extraction"));
}

#[tokio::test]
async fn test_contact_form_validation_rerenders_with_error() {
    let server = test_server(SecurityMode::Production);

    let res = server
        .post("/en/contact")
        .form(&[
            ("name", "Somchai"),
            ("email", "not-an-email"),
            ("company", ""),
            ("message", "We need a chatbot for support."),
        ])
        .await;

    res.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body = res.text();
    assert!(body.contains("Please check the highlighted fields"));
    // Submitted values are preserved
    assert!(body.contains("not-an-email"));
}

#[tokio::test]
async fn test_api_contact_rejects_invalid_payload() {
    let server = test_server(SecurityMode::Production);

    let res = server
        .post("/api/contact")
        .json(&serde_json::json!({
            "name": "",
            "email": "nope",
            "company": null,
            "message": "hi",
            "locale": "en"
        }))
        .await;

    res.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json();
    assert_eq!(body["status_code"], 400);
}

#[tokio::test]
async fn test_robots_txt_served_without_hardening() {
    let server = test_server(SecurityMode::Production);

    let res = server.get("/robots.txt").await;
    res.assert_status_ok();
    assert!(res.maybe_header("content-security-policy").is_none());
    assert!(res.text().contains("User-agent"));
}
