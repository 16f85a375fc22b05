use super::pantry;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use pantry_derive::api_handler;
use pantry_domain::Ingredient;
use pantry_domain::constants::INGREDIENTS_TAG;
use pantry_kernel::server::{ApiError, ApiState, ErrorBody};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(super) struct IdsParams {
    /// Comma separated ingredient ids, e.g. `1,2,3`. Blank entries are skipped; the key may
    /// appear only once.
    #[serde(default)]
    ids: String,
}

impl IdsParams {
    fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.split(',').map(str::trim).filter(|id| !id.is_empty())
    }
}

#[api_handler(
    get,
    path = "/ingredients",
    params(IdsParams),
    responses(
        (status = OK, description = "Requested ingredients in catalog order", body = Vec<Ingredient>),
        (status = BAD_REQUEST, description = "Repeated `ids` key or malformed query string", body = ErrorBody),
    ),
    tag = INGREDIENTS_TAG,
)]
pub(super) async fn list_ingredients(
    State(state): State<ApiState>,
    params: Result<Query<IdsParams>, QueryRejection>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    let Query(params) = params?;
    let found = pantry(&state)?.get_ingredients_by_ids(params.ids());
    Ok(Json(found.into_iter().cloned().collect()))
}

#[api_handler(
    get,
    path = "/ingredients/{id}",
    params(("id" = String, Path, description = "Ingredient id")),
    responses(
        (status = OK, description = "The ingredient", body = Ingredient),
        (status = NOT_FOUND, description = "No ingredient with this id", body = ErrorBody),
    ),
    tag = INGREDIENTS_TAG,
)]
pub(super) async fn get_ingredient(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Ingredient>, ApiError> {
    pantry(&state)?
        .get_ingredient_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("ingredient '{id}'")))
}
