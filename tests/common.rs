use sesmock::api::{self, AppState};
use sesmock::storage::MessageStore;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("sesmock=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

pub struct TestApp {
    pub server_url: String,
    pub client: reqwest::Client,
    pub store: MessageStore,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_state(AppState::new()).await
    }

    pub async fn spawn_with_state(state: AppState) -> Self {
        setup_tracing();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let store = state.store.clone();
        let app = api::app_router(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test app");
        });

        Self { server_url: format!("http://{addr}"), client: reqwest::Client::new(), store }
    }

    pub async fn send_email(&self, payload: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/v2/email/outbound-emails", self.server_url))
            .json(payload)
            .send()
            .await
            .expect("send request")
    }
}

/// A request carrying one text body, the smallest meaningful send.
#[allow(dead_code)]
pub fn simple_send_payload(subject: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "FromEmailAddress": "a@x.com",
        "Destination": {"ToAddresses": ["b@x.com"]},
        "Content": {
            "Simple": {
                "Subject": {"Data": subject},
                "Body": {"Text": {"Data": text}}
            }
        }
    })
}
