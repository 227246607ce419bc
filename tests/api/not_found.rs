use reqwest::StatusCode;

use crate::helpers::spawn_app;

#[tokio::test]
async fn unknown_path_returns_404() {
    let app = spawn_app().await;

    let response = app.get("/admin/dashboard").await;

    assert_eq!(StatusCode::NOT_FOUND, response.status());
    assert_eq!("404: Page Not Found", response.text().await.unwrap());
}
