pub mod categories;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::SharedState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints. Reads are public; the
/// mutation handlers gate themselves with the AdminUser extractor.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/recipes",
            get(list::list_recipes).post(create::create_recipe),
        )
        .route("/api/recipes/categories", get(categories::list_categories))
        .route(
            "/api/recipes/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        get::get_recipe,
        create::create_recipe,
        update::update_recipe,
        delete::delete_recipe,
        categories::list_categories,
    ),
    components(schemas(
        crate::store::Recipe,
        crate::store::RecipeDraft,
        categories::CategoriesResponse,
        delete::DeleteRecipeResponse,
    ))
)]
pub struct ApiDoc;
