//! Integration tests for production-mode static asset serving.

use std::fs;

use shoplist::config::{AppConfig, Environment};

mod common;

fn production_config(dir: &std::path::Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.environment = Environment::Production;
    config.database.uri = "mongodb://127.0.0.1:27017".to_string(); // satisfies validation; store is injected
    config.static_assets.dir = dir.to_string_lossy().into_owned();
    config
}

#[tokio::test]
async fn test_unmatched_path_serves_index_in_production() {
    let build_dir = tempfile::tempdir().expect("tempdir");
    fs::write(build_dir.path().join("index.html"), "<html>shoplist</html>").expect("write index");

    let app = common::spawn_app_with_config(production_config(build_dir.path())).await;
    let client = reqwest::Client::new();

    // A client-side route unknown to the API falls back to the index
    let res = client
        .get(app.url("/some/client/route"))
        .send()
        .await
        .expect("fallback request");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.expect("body"), "<html>shoplist</html>");

    // The API still wins for its own prefix
    let res = client
        .get(app.url("/api/items"))
        .send()
        .await
        .expect("api request");
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn test_real_asset_is_served_directly() {
    let build_dir = tempfile::tempdir().expect("tempdir");
    fs::write(build_dir.path().join("index.html"), "index").expect("write index");
    fs::write(build_dir.path().join("app.js"), "console.log(1)").expect("write asset");

    let app = common::spawn_app_with_config(production_config(build_dir.path())).await;
    let client = reqwest::Client::new();

    let res = client
        .get(app.url("/app.js"))
        .send()
        .await
        .expect("asset request");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.expect("body"), "console.log(1)");
}

#[tokio::test]
async fn test_development_mode_has_no_fallback() {
    let app = common::spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .get(app.url("/some/client/route"))
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), 404);
}
