use actix_web::{web, HttpResponse};
use anyhow::Context;
use foodie_finds::data::{Dish, Restaurant};
use foodie_finds::db as db_api;

pub(super) struct ApiState {
    db_pool: sqlx::SqlitePool,
}

impl ApiState {
    pub(super) async fn new(addr: &str) -> anyhow::Result<Self> {
        let db_pool = sqlx::SqlitePool::connect(addr)
            .await
            .with_context(|| format!("fail to open database {addr}"))?;
        Ok(Self { db_pool })
    }
}

#[derive(serde::Serialize)]
struct MsgJsonResp {
    message: String,
}

#[derive(serde::Serialize)]
struct ErrJsonResp {
    error: String,
}

#[derive(serde::Serialize)]
struct RestaurantsJsonResp {
    restaurants: Vec<Restaurant>,
}

/// Lookup by id keeps the list shape under the singular key.
#[derive(serde::Serialize)]
struct RestaurantJsonResp {
    restaurant: Vec<Restaurant>,
}

#[derive(serde::Serialize)]
struct DishesJsonResp {
    dishes: Vec<Dish>,
}

#[derive(serde::Serialize)]
struct DishJsonResp {
    dish: Vec<Dish>,
}

fn not_found(message: String) -> HttpResponse {
    HttpResponse::NotFound().json(MsgJsonResp { message })
}

// The store's own message goes out verbatim in the error field.
fn store_failure(err: anyhow::Error) -> HttpResponse {
    tracing::error!("database query failed: {err}");
    HttpResponse::InternalServerError().json(ErrJsonResp {
        error: err.to_string(),
    })
}

#[actix_web::get("/")]
pub(super) async fn index() -> HttpResponse {
    HttpResponse::Ok().json(MsgJsonResp {
        message: "FoodieFinds".to_string(),
    })
}

#[actix_web::get("/restaurants")]
pub(super) async fn restaurants(data: web::Data<ApiState>) -> HttpResponse {
    match db_api::get_restaurants(&data.db_pool, db_api::RestaurantSearchProps::All).await {
        Ok(found) if found.is_empty() => not_found("No Restaurants Found".to_string()),
        Ok(found) => HttpResponse::Ok().json(RestaurantsJsonResp { restaurants: found }),
        Err(err) => store_failure(err),
    }
}

#[derive(serde::Deserialize)]
pub(super) struct RestaurantPath {
    id: String,
}

#[actix_web::get("/restaurants/details/{id}")]
pub(super) async fn restaurant_details(
    data: web::Data<ApiState>,
    path: web::Path<RestaurantPath>,
) -> HttpResponse {
    let id = path.into_inner().id;
    let props = db_api::RestaurantSearchProps::ById(id.clone());
    match db_api::get_restaurants(&data.db_pool, props).await {
        Ok(found) if found.is_empty() => {
            not_found(format!("No Restaurant Found by this ID {id}"))
        }
        Ok(found) => HttpResponse::Ok().json(RestaurantJsonResp { restaurant: found }),
        Err(err) => store_failure(err),
    }
}

#[derive(serde::Deserialize)]
pub(super) struct CuisinePath {
    cuisine: String,
}

#[actix_web::get("/restaurants/cuisine/{cuisine}")]
pub(super) async fn restaurants_by_cuisine(
    data: web::Data<ApiState>,
    path: web::Path<CuisinePath>,
) -> HttpResponse {
    let cuisine = path.into_inner().cuisine;
    let props = db_api::RestaurantSearchProps::ByCuisine(cuisine.clone());
    match db_api::get_restaurants(&data.db_pool, props).await {
        Ok(found) if found.is_empty() => {
            not_found(format!("No Restaurants Found by this Cuisine {cuisine}"))
        }
        Ok(found) => HttpResponse::Ok().json(RestaurantsJsonResp { restaurants: found }),
        Err(err) => store_failure(err),
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RestaurantFilterQuery {
    is_veg: Option<String>,
    has_outdoor_seating: Option<String>,
    is_luxury: Option<String>,
}

#[actix_web::get("/restaurants/filter")]
pub(super) async fn restaurants_filter(
    data: web::Data<ApiState>,
    query: web::Query<RestaurantFilterQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    let filter = db_api::RestaurantFilterBuilder::default()
        .is_veg(query.is_veg)
        .has_outdoor_seating(query.has_outdoor_seating)
        .is_luxury(query.is_luxury)
        .build()
        .unwrap();
    match db_api::get_restaurants(&data.db_pool, db_api::RestaurantSearchProps::Filter(filter))
        .await
    {
        Ok(found) if found.is_empty() => {
            not_found("No Restaurants Found by these filters".to_string())
        }
        Ok(found) => HttpResponse::Ok().json(RestaurantsJsonResp { restaurants: found }),
        Err(err) => store_failure(err),
    }
}

#[actix_web::get("/restaurants/sort-by-rating")]
pub(super) async fn restaurants_sort_by_rating(data: web::Data<ApiState>) -> HttpResponse {
    match db_api::get_restaurants(&data.db_pool, db_api::RestaurantSearchProps::SortByRating).await
    {
        Ok(found) if found.is_empty() => not_found("No Restaurants Found".to_string()),
        Ok(found) => HttpResponse::Ok().json(RestaurantsJsonResp { restaurants: found }),
        Err(err) => store_failure(err),
    }
}

#[actix_web::get("/dishes")]
pub(super) async fn dishes(data: web::Data<ApiState>) -> HttpResponse {
    match db_api::get_dishes(&data.db_pool, db_api::DishSearchProps::All).await {
        Ok(found) if found.is_empty() => not_found("No Dishes Found".to_string()),
        Ok(found) => HttpResponse::Ok().json(DishesJsonResp { dishes: found }),
        Err(err) => store_failure(err),
    }
}

#[derive(serde::Deserialize)]
pub(super) struct DishPath {
    id: String,
}

#[actix_web::get("/dishes/details/{id}")]
pub(super) async fn dish_details(
    data: web::Data<ApiState>,
    path: web::Path<DishPath>,
) -> HttpResponse {
    let id = path.into_inner().id;
    let props = db_api::DishSearchProps::ById(id.clone());
    match db_api::get_dishes(&data.db_pool, props).await {
        Ok(found) if found.is_empty() => not_found(format!("No Dish Found by this ID {id}")),
        Ok(found) => HttpResponse::Ok().json(DishJsonResp { dish: found }),
        Err(err) => store_failure(err),
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DishFilterQuery {
    is_veg: Option<String>,
}

#[actix_web::get("/dishes/filter")]
pub(super) async fn dishes_filter(
    data: web::Data<ApiState>,
    query: web::Query<DishFilterQuery>,
) -> HttpResponse {
    let props = db_api::DishSearchProps::ByVeg(query.into_inner().is_veg);
    match db_api::get_dishes(&data.db_pool, props).await {
        Ok(found) if found.is_empty() => {
            not_found("No Dishes Found by these filters".to_string())
        }
        Ok(found) => HttpResponse::Ok().json(DishesJsonResp { dishes: found }),
        Err(err) => store_failure(err),
    }
}

#[actix_web::get("/dishes/sort-by-price")]
pub(super) async fn dishes_sort_by_price(data: web::Data<ApiState>) -> HttpResponse {
    match db_api::get_dishes(&data.db_pool, db_api::DishSearchProps::SortByPrice).await {
        Ok(found) if found.is_empty() => not_found("No Dishes Found".to_string()),
        Ok(found) => HttpResponse::Ok().json(DishesJsonResp { dishes: found }),
        Err(err) => store_failure(err),
    }
}
