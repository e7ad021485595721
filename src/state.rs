use std::sync::Arc;
use std::time::Duration;

use crate::config::CardProfile;
use crate::render::Renderer;
use crate::store::ViewStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ViewStore>,
    pub renderer: Arc<Renderer>,
    pub card: Arc<CardProfile>,
    pub poll_interval: Duration,
}
