use super::pantry;
use crate::CatalogStats;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use pantry_derive::api_handler;
use pantry_domain::constants::{INGREDIENTS_TAG, RECIPES_TAG, SYSTEM_TAG};
use pantry_domain::{Ingredient, Recipe};
use pantry_kernel::server::{ApiError, ApiState, ErrorBody};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(super) struct SearchParams {
    /// Case-insensitive name fragment; empty or missing matches every recipe.
    #[serde(default)]
    q: String,
}

#[api_handler(
    get,
    path = "/recipes",
    responses((status = OK, description = "All recipes in catalog order", body = Vec<Recipe>)),
    tag = RECIPES_TAG,
)]
pub(super) async fn list_recipes(State(state): State<ApiState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(pantry(&state)?.get_all_recipes().to_vec()))
}

#[api_handler(
    get,
    path = "/recipes/search",
    params(SearchParams),
    responses(
        (status = OK, description = "Recipes whose name contains the query", body = Vec<Recipe>),
        (status = BAD_REQUEST, description = "Malformed query string", body = ErrorBody),
    ),
    tag = RECIPES_TAG,
)]
pub(super) async fn search_recipes(
    State(state): State<ApiState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let Query(params) = params?;
    let matches = pantry(&state)?.search_recipes(&params.q);
    Ok(Json(matches.into_iter().cloned().collect()))
}

#[api_handler(
    get,
    path = "/recipes/{id}",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = OK, description = "The recipe", body = Recipe),
        (status = NOT_FOUND, description = "No recipe with this id", body = ErrorBody),
    ),
    tag = RECIPES_TAG,
)]
pub(super) async fn get_recipe(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    pantry(&state)?
        .get_recipe_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("recipe '{id}'")))
}

#[api_handler(
    get,
    path = "/recipes/{id}/ingredients",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = OK, description = "Ingredients of the recipe, unknown ids dropped", body = Vec<Ingredient>),
        (status = NOT_FOUND, description = "No recipe with this id", body = ErrorBody),
    ),
    tag = INGREDIENTS_TAG,
)]
pub(super) async fn get_recipe_ingredients(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    let pantry = pantry(&state)?;
    let recipe =
        pantry.get_recipe_by_id(&id).ok_or_else(|| ApiError::not_found(format!("recipe '{id}'")))?;

    Ok(Json(pantry.resolve_ingredients(recipe).into_iter().cloned().collect()))
}

#[api_handler(
    get,
    path = "/stats",
    responses((status = OK, description = "Catalog record counts", body = CatalogStats)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn catalog_stats(State(state): State<ApiState>) -> Result<Json<CatalogStats>, ApiError> {
    Ok(Json(pantry(&state)?.stats()))
}
