pub mod config;
pub mod cors;
mod routes;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use restyle_model::TextModel;
use tokio::net::TcpListener;

/// Build the full application router around a text model.
pub fn router(model: Arc<dyn TextModel>) -> Router {
    routes::build_router(model)
}

pub async fn serve(listener: TcpListener, model: Arc<dyn TextModel>) -> Result<()> {
    let app = router(model);
    axum::serve(listener, app).await?;
    Ok(())
}
