#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use lanyardcard::config::CardProfile;
use lanyardcard::fetcher::LanyardClient;
use lanyardcard::render::Renderer;
use lanyardcard::routes;
use lanyardcard::state::AppState;
use lanyardcard::store::ViewStore;
use serde_json::json;

pub const USER_ID: &str = "1025214794766221384";

/// Canned upstream reply.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn ok(body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct FakeState {
    replies: Arc<Mutex<Vec<Reply>>>,
    hits: Arc<AtomicUsize>,
}

/// Stand-in for the Lanyard REST API. Replies are served in order; the
/// last one repeats once the queue is down to a single entry.
pub struct FakeLanyard {
    pub base_url: String,
    state: FakeState,
}

impl FakeLanyard {
    pub async fn spawn(reply: Reply) -> Self {
        let state = FakeState {
            replies: Arc::new(Mutex::new(vec![reply])),
            hits: Arc::new(AtomicUsize::new(0)),
        };
        let app = Router::new()
            .route("/v1/users/{user_id}", get(serve_presence))
            .with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            base_url: format!("http://127.0.0.1:{}/v1", addr.port()),
            state,
        }
    }

    /// Replace every queued reply with `reply`.
    pub fn set_reply(&self, reply: Reply) {
        *self.state.replies.lock().unwrap() = vec![reply];
    }

    /// Queue replies to be served one per request.
    pub fn set_replies(&self, replies: Vec<Reply>) {
        *self.state.replies.lock().unwrap() = replies;
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> LanyardClient {
        LanyardClient::new(
            self.base_url.clone(),
            USER_ID.to_string(),
            Duration::from_secs(5),
        )
    }
}

async fn serve_presence(State(state): State<FakeState>) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let reply = {
        let mut replies = state.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.remove(0)
        } else {
            replies[0].clone()
        }
    };
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    (reply.status, reply.body)
}

/// A Lanyard success envelope for `username` with the given status and
/// activities.
pub fn presence_body(
    username: &str,
    status: &str,
    activities: serde_json::Value,
) -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "kv": {},
            "discord_user": {
                "id": USER_ID,
                "username": username,
                "avatar": "a_5f1e2d3c",
                "discriminator": "0",
                "bot": false,
                "global_name": username,
                "display_name": null,
                "public_flags": 64
            },
            "discord_status": status,
            "activities": activities,
            "spotify": null,
            "listening_to_spotify": false,
            "active_on_discord_web": false,
            "active_on_discord_desktop": true,
            "active_on_discord_mobile": false
        }
    })
}

pub fn card() -> CardProfile {
    CardProfile {
        handle: "loneweeb".to_string(),
        about_me: vec!["ϡ writes rust".to_string()],
    }
}

pub fn test_state() -> AppState {
    AppState {
        store: Arc::new(ViewStore::new()),
        renderer: Arc::new(Renderer::new().expect("widget templates should load")),
        card: Arc::new(card()),
        poll_interval: Duration::from_millis(1000),
    }
}

/// Poll `check` until it passes or two seconds elapse.
pub async fn wait_until(mut check: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}

pub fn test_app(state: AppState) -> axum::Router {
    routes::router(state)
}
