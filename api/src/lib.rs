mod error;

use std::env;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use entity::{baked_good, bakery};
use migration::{Migrator, MigratorTrait};
use serde::{Deserialize, Serialize};
use serde_json::json;
use service::{
    sea_orm::{Database, DatabaseConnection},
    Mutation as MutationCore, Query as QueryCore,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::ApiError;

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let server_url = format!("{host}:{port}");

    let conn = Database::connect(db_url)
        .await
        .expect("Database connection failed");
    Migrator::up(&conn, None).await?;

    let app = create_router(AppState { conn });

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("listening on {server_url}");
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
}

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/bakeries", get(list_bakeries))
        .route("/bakeries/{id}", get(bakery_by_id).patch(update_bakery))
        .route(
            "/baked_goods",
            get(list_baked_goods).post(create_baked_good),
        )
        .route("/baked_goods/by_price", get(baked_goods_by_price))
        .route(
            "/baked_goods/most_expensive",
            get(most_expensive_baked_good),
        )
        .route(
            "/baked_goods/{id}",
            get(baked_good_by_id).delete(delete_baked_good),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A bakery with its baked goods nested, as the original API serialized it.
#[derive(Serialize)]
struct BakeryResponse {
    #[serde(flatten)]
    bakery: bakery::Model,
    baked_goods: Vec<baked_good::Model>,
}

impl From<(bakery::Model, Vec<baked_good::Model>)> for BakeryResponse {
    fn from((bakery, baked_goods): (bakery::Model, Vec<baked_good::Model>)) -> Self {
        Self {
            bakery,
            baked_goods,
        }
    }
}

/// Patch payload: fields left out of the form stay unchanged.
#[derive(Deserialize)]
struct BakeryPatch {
    name: Option<String>,
}

async fn index() -> Html<&'static str> {
    Html("<h1>Bakery GET-POST-PATCH-DELETE API</h1>")
}

async fn list_bakeries(
    State(state): State<AppState>,
) -> Result<Json<Vec<BakeryResponse>>, ApiError> {
    let bakeries = QueryCore::list_bakeries_with_baked_goods(&state.conn).await?;

    Ok(Json(bakeries.into_iter().map(Into::into).collect()))
}

async fn bakery_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BakeryResponse>, ApiError> {
    let bakery = QueryCore::find_bakery_with_baked_goods(&state.conn, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("bakery {id} not found")))?;

    Ok(Json(bakery.into()))
}

async fn update_bakery(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(patch): Form<BakeryPatch>,
) -> Result<Json<BakeryResponse>, ApiError> {
    MutationCore::update_bakery_by_id(&state.conn, id, patch.name).await?;

    let bakery = QueryCore::find_bakery_with_baked_goods(&state.conn, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("bakery {id} not found")))?;

    Ok(Json(bakery.into()))
}

async fn list_baked_goods(
    State(state): State<AppState>,
) -> Result<Json<Vec<baked_good::Model>>, ApiError> {
    let baked_goods = QueryCore::list_baked_goods(&state.conn).await?;

    Ok(Json(baked_goods))
}

async fn create_baked_good(
    State(state): State<AppState>,
    Form(form): Form<baked_good::Model>,
) -> Result<(StatusCode, Json<baked_good::Model>), ApiError> {
    let baked_good = MutationCore::create_baked_good(&state.conn, form).await?;

    Ok((StatusCode::CREATED, Json(baked_good)))
}

async fn baked_good_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<baked_good::Model>, ApiError> {
    let baked_good = QueryCore::find_baked_good_by_id(&state.conn, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("baked good {id} not found")))?;

    Ok(Json(baked_good))
}

async fn delete_baked_good(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    MutationCore::delete_baked_good(&state.conn, id).await?;

    Ok(Json(json!({ "message": "record successfully deleted" })))
}

async fn baked_goods_by_price(
    State(state): State<AppState>,
) -> Result<Json<Vec<baked_good::Model>>, ApiError> {
    let baked_goods = QueryCore::list_baked_goods_by_price_desc(&state.conn).await?;

    Ok(Json(baked_goods))
}

async fn most_expensive_baked_good(
    State(state): State<AppState>,
) -> Result<Json<baked_good::Model>, ApiError> {
    let baked_good = QueryCore::find_most_expensive_baked_good(&state.conn)
        .await?
        .ok_or_else(|| ApiError::NotFound("no baked goods yet".to_owned()))?;

    Ok(Json(baked_good))
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        println!("Error: {err}");
    }
}
