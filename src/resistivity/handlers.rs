use axum::{routing::post, Json, Router};
use tracing::instrument;

use crate::{auth::extractors::ActiveUser, error::ApiError, state::AppState};

use super::dto::{
    DipoleDipoleRequest, PolePoleRequest, ResistivityResponse, SchlumbergerRequest, WennerRequest,
};
use super::formulas;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/resistivity/wenner", post(wenner))
        .route("/resistivity/schlumberger", post(schlumberger))
        .route("/resistivity/dipole-dipole", post(dipole_dipole))
        .route("/resistivity/pole-pole", post(pole_pole))
}

#[instrument(skip_all)]
pub async fn wenner(
    ActiveUser(_user): ActiveUser,
    Json(body): Json<WennerRequest>,
) -> Result<Json<ResistivityResponse>, ApiError> {
    let resistivity = formulas::wenner(
        body.potential_difference,
        body.current,
        body.spacing,
        body.number_of_electrodes,
    )?;
    Ok(Json(ResistivityResponse { resistivity }))
}

#[instrument(skip_all)]
pub async fn schlumberger(
    ActiveUser(_user): ActiveUser,
    Json(body): Json<SchlumbergerRequest>,
) -> Result<Json<ResistivityResponse>, ApiError> {
    let resistivity = formulas::schlumberger(
        body.potential_difference,
        body.current,
        body.half_distance_current,
        body.half_distance_potential,
        body.number_of_electrodes,
    )?;
    Ok(Json(ResistivityResponse { resistivity }))
}

#[instrument(skip_all)]
pub async fn dipole_dipole(
    ActiveUser(_user): ActiveUser,
    Json(body): Json<DipoleDipoleRequest>,
) -> Result<Json<ResistivityResponse>, ApiError> {
    let resistivity = formulas::dipole_dipole(
        body.potential_difference,
        body.current,
        body.spacing_between_dipoles,
        body.spacing,
        body.total_electrodes,
    )?;
    Ok(Json(ResistivityResponse { resistivity }))
}

#[instrument(skip_all)]
pub async fn pole_pole(
    ActiveUser(_user): ActiveUser,
    Json(body): Json<PolePoleRequest>,
) -> Result<Json<ResistivityResponse>, ApiError> {
    let resistivity = formulas::pole_pole(
        body.potential_difference,
        body.current,
        body.spacing,
        body.number_of_electrodes,
    )?;
    Ok(Json(ResistivityResponse { resistivity }))
}
