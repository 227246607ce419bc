use std::sync::LazyLock;

use tastmanagement::{
    configuration::{get_configuration, Settings},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "debug".to_string();
    let subscriber_name = "test".to_string();
    let result = match std::env::var("TEST_LOG") {
        Ok(_) => init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout,
        )),
        Err(_) => init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink,
        )),
    };
    result.expect("Failed to install the test subscriber");
});

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_home_html(&self) -> String {
        self.get("/").await.text().await.unwrap()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Spawns the application on a random port after letting `customize` adjust
/// the configuration read from `configuration/`.
pub async fn spawn_app_with(customize: impl FnOnce(&mut Settings)) -> TestApp {
    LazyLock::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.host = "127.0.0.1".into();
        c.application.port = 0;
        customize(&mut c);
        c
    };

    let app = Application::build(configuration)
        .await
        .expect("Failed to build the test application");
    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(app.run());

    TestApp {
        address,
        api_client: reqwest::Client::new(),
    }
}
