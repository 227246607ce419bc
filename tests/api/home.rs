use reqwest::StatusCode;

use crate::helpers::{spawn_app, spawn_app_with};

#[tokio::test]
async fn home_page_is_rendered_as_html() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert_eq!(StatusCode::OK, response.status());
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("<title>TastManagement - Bienvenue</title>"));
    assert!(html_page.contains("<h1>TastManagement</h1>"));
}

#[tokio::test]
async fn home_page_lists_features_in_order() {
    let app = spawn_app().await;

    let html_page = app.get_home_html().await;

    let positions: Vec<usize> = [
        "Pipeline CI",
        "Déploiement Kubernetes avec ArgoCD",
        "Base de données PostgreSQL",
        "Interface moderne et responsive",
    ]
    .iter()
    .map(|feature| {
        html_page
            .find(feature)
            .unwrap_or_else(|| panic!("`{feature}` is missing from the home page"))
    })
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn query_string_does_not_change_the_page() {
    let app = spawn_app().await;

    let plain = app.get_home_html().await;
    let with_query = app.get("/?page=2&sort=desc").await.text().await.unwrap();

    assert_eq!(plain, with_query);
}

#[tokio::test]
async fn missing_template_returns_500() {
    let empty_dir = std::env::temp_dir().join(uuid::Uuid::new_v4().to_string());
    std::fs::create_dir_all(&empty_dir).unwrap();
    let app = spawn_app_with(|c| {
        c.templates.directory = empty_dir.to_string_lossy().into_owned();
        c.templates.reload = false;
    })
    .await;

    let response = app.get("/").await;

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    assert_eq!("500: Internal Server Error", response.text().await.unwrap());
}

#[tokio::test]
async fn stylesheet_linked_from_the_home_page_is_served() {
    let app = spawn_app().await;

    let html_page = app.get_home_html().await;
    assert!(html_page.contains(r#"href="/static/css/home.css""#));

    let response = app.get("/static/css/home.css").await;
    assert_eq!(StatusCode::OK, response.status());
}
