use derive_builder::Builder;
use sqlx::sqlite::SqlitePool;

use crate::data::{Dish, Restaurant};

/// Which fixed statement a restaurant read runs. Values are always bound
/// into `?` placeholders, never spliced into the SQL text.
#[derive(Clone)]
pub enum RestaurantSearchProps {
    All,
    /// Raw path segment, bound as-is. SQLite's column affinity converts
    /// numeric text for the comparison; anything else matches no row.
    ById(String),
    ByCuisine(String),
    Filter(RestaurantFilter),
    SortByRating,
}

/// Attribute filter matched conjunctively. An absent value binds as NULL,
/// and `col = NULL` never holds, so it matches no row.
#[derive(Builder, Clone)]
pub struct RestaurantFilter {
    #[builder(setter(into), default)]
    is_veg: Option<String>,
    #[builder(setter(into), default)]
    has_outdoor_seating: Option<String>,
    #[builder(setter(into), default)]
    is_luxury: Option<String>,
}

pub async fn get_restaurants(
    db_conn: &SqlitePool,
    props: RestaurantSearchProps,
) -> anyhow::Result<Vec<Restaurant>> {
    let query = match props {
        RestaurantSearchProps::All => {
            sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants")
        }
        RestaurantSearchProps::ById(id) => {
            sqlx::query_as("SELECT * FROM restaurants WHERE id = ?").bind(id)
        }
        RestaurantSearchProps::ByCuisine(cuisine) => {
            sqlx::query_as("SELECT * FROM restaurants WHERE cuisine = ?").bind(cuisine)
        }
        RestaurantSearchProps::Filter(filter) => {
            let RestaurantFilter {
                is_veg,
                has_outdoor_seating,
                is_luxury,
            } = filter;
            sqlx::query_as(
                r#"
SELECT * FROM restaurants
WHERE isVeg = ? AND hasOutdoorSeating = ? AND isLuxury = ?"#,
            )
            .bind(is_veg)
            .bind(has_outdoor_seating)
            .bind(is_luxury)
        }
        RestaurantSearchProps::SortByRating => {
            sqlx::query_as("SELECT * FROM restaurants ORDER BY rating DESC")
        }
    };

    let rows = query.fetch_all(db_conn).await?;
    Ok(rows)
}

#[derive(Clone)]
pub enum DishSearchProps {
    All,
    ById(String),
    /// Same NULL-bind rule as the restaurant filter: a missing value
    /// matches no row.
    ByVeg(Option<String>),
    SortByPrice,
}

pub async fn get_dishes(
    db_conn: &SqlitePool,
    props: DishSearchProps,
) -> anyhow::Result<Vec<Dish>> {
    let query = match props {
        DishSearchProps::All => sqlx::query_as::<_, Dish>("SELECT * FROM dishes"),
        DishSearchProps::ById(id) => {
            sqlx::query_as("SELECT * FROM dishes WHERE id = ?").bind(id)
        }
        DishSearchProps::ByVeg(is_veg) => {
            sqlx::query_as("SELECT * FROM dishes WHERE isVeg = ?").bind(is_veg)
        }
        DishSearchProps::SortByPrice => {
            sqlx::query_as("SELECT * FROM dishes ORDER BY price")
        }
    };

    let rows = query.fetch_all(db_conn).await?;
    Ok(rows)
}
