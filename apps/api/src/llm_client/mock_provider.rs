//! A throwaway chat-completions provider for tests: an axum server on an
//! ephemeral local port that answers every call with a canned status and body,
//! and remembers what it was sent.

use std::sync::{Arc, Mutex};

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::Value;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

pub struct MockProvider {
    addr: std::net::SocketAddr,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockProvider {
    pub async fn spawn(status: StatusCode, body: String) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();

        let app = Router::new().route(
            COMPLETIONS_PATH,
            post(move |headers: HeaderMap, Json(request): Json<Value>| {
                let recorder = recorder.clone();
                let body = body.clone();
                async move {
                    recorder.lock().unwrap().push(SeenRequest {
                        authorization: headers
                            .get(AUTHORIZATION)
                            .and_then(|v| v.to_str().ok())
                            .map(String::from),
                        body: request,
                    });
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, seen }
    }

    /// Wraps `content` in a minimal successful chat-completion body.
    pub async fn replying(content: &str) -> Self {
        let body = serde_json::json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
        });
        Self::spawn(StatusCode::OK, body.to_string()).await
    }

    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, COMPLETIONS_PATH)
    }

    pub fn call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<SeenRequest> {
        self.seen.lock().unwrap().last().cloned()
    }
}
