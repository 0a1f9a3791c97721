use axum::{extract::State, response::Html};

use crate::{
    error::{AppError, Result},
    AppState,
};

pub async fn serve_index(State(state): State<AppState>) -> Result<Html<String>> {
    let page = tokio::fs::read_to_string(state.index_page.as_path())
        .await
        .map_err(|e| {
            AppError::AssetMissing(format!("{}: {}", state.index_page.display(), e))
        })?;

    Ok(Html(page))
}
