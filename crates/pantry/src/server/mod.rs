//! Read-only JSON API over [`Pantry`](crate::Pantry).
//!
//! Handlers fetch the facade from the kernel `ApiState` and translate not-found into
//! `404`. They never touch the stores directly.

mod ingredients;
mod recipes;

use pantry_kernel::server::{ApiError, ApiState};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Catalog routes under `/recipes`, `/ingredients` and `/stats`.
pub fn catalog_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(recipes::list_recipes))
        .routes(routes!(recipes::search_recipes))
        .routes(routes!(recipes::get_recipe))
        .routes(routes!(recipes::get_recipe_ingredients))
        .routes(routes!(ingredients::list_ingredients))
        .routes(routes!(ingredients::get_ingredient))
        .routes(routes!(recipes::catalog_stats))
}

fn pantry(state: &ApiState) -> Result<&crate::Pantry, ApiError> {
    state.try_get_slice::<crate::Pantry>().map_err(ApiError::from)
}
