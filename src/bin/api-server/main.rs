use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

mod api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("fail to setup logging");

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL env not found");

    // Connect before binding so no request can race an unopened handle.
    let state = web::Data::new(api::ApiState::new(&db_url).await?);
    tracing::info!("Successfully connected to Sqlite Database");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .service(api::index)
            .service(api::restaurants)
            .service(api::restaurant_details)
            .service(api::restaurants_by_cuisine)
            .service(api::restaurants_filter)
            .service(api::restaurants_sort_by_rating)
            .service(api::dishes)
            .service(api::dish_details)
            .service(api::dishes_filter)
            .service(api::dishes_sort_by_price)
    })
    .bind(("127.0.0.1", 3000))?
    .run()
    .await?;
    Ok(())
}
