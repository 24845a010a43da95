pub mod health;
pub mod writing;

use std::sync::Arc;

use axum::{middleware, Router};
use restyle_model::TextModel;
use tower_http::trace::TraceLayer;

use crate::cors::cors_middleware;

pub struct InnerAppState {
    pub model: Arc<dyn TextModel>,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(model: Arc<dyn TextModel>) -> Router {
    let state: AppState = Arc::new(InnerAppState { model });

    Router::new()
        .merge(health::routes())
        .merge(writing::routes())
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
