//! Seeds a fresh deployment with the sample catalog.

use crate::api::{store_error_response, ErrorResponse};
use crate::auth::AdminUser;
use crate::store::RecipeDraft;
use crate::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

pub fn router() -> Router<SharedState> {
    Router::new().route("/api/seed", post(seed))
}

struct SeedRecipe {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    cooking_time: &'static str,
    difficulty: &'static str,
    servings: &'static str,
    ingredients: &'static str,
    recipe: &'static str,
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        name: "Špagety Carbonara",
        description: "Klasické talianske špagety s vajíčkami, slaninou a parmezánom. \
            Jednoduchý a chutný recept, ktorý zvládne každý.",
        category: "Hlavné jedlá",
        cooking_time: "20 min",
        difficulty: "Stredná",
        servings: "4 porcie",
        ingredients: "400g špagiet
200g slaniny
4 vajcia
100g parmezánu
2 strúčiky cesnaku
Čierne korenie
Soľ",
        recipe: "1. Uvaríme špagety podľa návodu na obale v osolenej vode.
2. Medzitým si na panvici opečieme nakrájanú slaninu do zlatista.
3. V miske rozmiešame vajcia s nastrúhaným parmezánom.
4. Keď sú špagety hotové, odcedíme ich a pridáme k slanine.
5. Odstavíme z ohňa a rýchlo premiešame s vajíčkovou zmesou.
6. Podávame s ďalším parmezánom a čiernym korením.",
    },
    SeedRecipe {
        name: "Čokoládový koláč",
        description: "Vlhký a nadýchaný čokoládový koláč, ktorý sa roztopí v ústach. \
            Perfektný dezert pre každú príležitosť.",
        category: "Dezerty",
        cooking_time: "45 min",
        difficulty: "Ľahká",
        servings: "8 porcií",
        ingredients: "200g tmavej čokolády
200g masla
4 vajcia
200g cukru
100g múky
50g kakaa
1 lyžička prášku do pečiva",
        recipe: "1. Roztopíme čokoládu s maslom v dvojitom kotlíku.
2. V miske vyšľaháme vajcia s cukrom do pene.
3. Pridáme vychladnutú čokoládovú zmes.
4. Premiešame múku, kakao a prášok do pečiva a pridáme k zmesi.
5. Nalejeme do vymasteného a vysypaného formátu.
6. Pečieme na 180°C asi 30-35 minút.
7. Necháme vychladnúť pred podávaním.",
    },
    SeedRecipe {
        name: "Kapustnica",
        description: "Hustá kyslá polievka s klobásou a hubami, presne ako od babky.",
        category: "Polievky",
        cooking_time: "90 min",
        difficulty: "Stredná",
        servings: "6 porcií",
        ingredients: "500g kyslej kapusty
300g klobásy
100g sušených húb
2 cibule
2 lyžice mletej papriky
Bobkový list
Soľ a korenie",
        recipe: "1. Huby namočíme do teplej vody aspoň na hodinu.
2. Na cibuli orestujeme nakrájanú klobásu.
3. Pridáme papriku, kapustu a huby aj s vodou.
4. Zalejeme vodou, pridáme bobkový list a varíme 60 minút.
5. Dochutíme soľou a korením, podávame s chlebom.",
    },
];

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SeedResponse {
    /// How many sample recipes were inserted.
    pub created: usize,
}

#[utoipa::path(
    post,
    path = "/api/seed",
    tag = "seed",
    responses(
        (status = 201, description = "Sample recipes inserted", body = SeedResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn seed(_admin: AdminUser, State(state): State<SharedState>) -> impl IntoResponse {
    let mut created = 0;

    for sample in SAMPLE_RECIPES {
        let draft = RecipeDraft {
            name: sample.name.to_string(),
            description: sample.description.to_string(),
            category: sample.category.to_string(),
            cooking_time: sample.cooking_time.to_string(),
            difficulty: sample.difficulty.to_string(),
            servings: sample.servings.to_string(),
            ingredients: sample.ingredients.to_string(),
            recipe: sample.recipe.to_string(),
            ..RecipeDraft::default()
        };

        match state.store.create(draft).await {
            Ok(_) => created += 1,
            Err(e) => {
                tracing::error!(error = %e, recipe = sample.name, "failed to seed recipe");
                return store_error_response(e);
            }
        }
    }

    (StatusCode::CREATED, Json(SeedResponse { created })).into_response()
}

#[derive(OpenApi)]
#[openapi(paths(seed), components(schemas(SeedResponse)))]
pub struct ApiDoc;
