//! Deploy endpoint

use crate::deploy_id::allocate_workdir;
use crate::error::ApiError;
use crate::models::{DeployRequest, DeployResponse};
use crate::state::AppState;
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::info;

/// Create a new deployment: clone the requested repository into a fresh
/// working directory and upload its contents to the configured object
/// store.
///
/// The whole sequence runs synchronously within this request; the caller
/// blocks until the clone and upload finish. Working directories are never
/// cleaned up.
pub async fn create_deploy(
    State(state): State<AppState>,
    payload: Result<Json<DeployRequest>, JsonRejection>,
) -> Result<Json<DeployResponse>, ApiError> {
    // Reject malformed input before touching the filesystem.
    let Json(request) =
        payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;

    let (deploy_id, workdir) = allocate_workdir(&state.config.output_root).await?;

    dd_repo::clone_repo(&request.repo_url, &workdir).await?;
    info!(repo_url = %request.repo_url, deploy_id = %deploy_id, "repository cloned");

    state.uploader.upload_dir(&workdir).await?;

    Ok(Json(DeployResponse { deploy_id }))
}
