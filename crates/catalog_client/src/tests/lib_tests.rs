use super::*;
use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;

async fn spawn_catalog(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn fixture_catalog() -> Router {
    Router::new().route(
        "/pokemon/:id",
        get(|Path(id): Path<u16>| async move {
            match id {
                25 => Json(serde_json::json!({
                    "id": 25,
                    "name": "pikachu",
                    "sprites": { "front_default": "https://img.example/25.png" },
                    "base_experience": 112
                }))
                .into_response(),
                132 => Json(serde_json::json!({
                    "id": 132,
                    "name": "ditto",
                    "sprites": { "front_default": null }
                }))
                .into_response(),
                7 => (StatusCode::OK, "definitely not json").into_response(),
                _ => (StatusCode::NOT_FOUND, "no such creature").into_response(),
            }
        }),
    )
}

#[tokio::test]
async fn fetch_maps_catalog_record_to_creature() {
    let target = spawn_catalog(fixture_catalog()).await;
    let catalog = HttpCatalog::new(target);

    let creature = catalog.fetch(CreatureId(25)).await.expect("fetch");
    assert_eq!(creature.id, CreatureId(25));
    assert_eq!(creature.name, "pikachu");
    assert_eq!(creature.sprite_url, "https://img.example/25.png");
}

#[tokio::test]
async fn fetch_maps_null_sprite_to_empty_url() {
    let target = spawn_catalog(fixture_catalog()).await;
    let catalog = HttpCatalog::new(target);

    let creature = catalog.fetch(CreatureId(132)).await.expect("fetch");
    assert_eq!(creature.name, "ditto");
    assert_eq!(creature.sprite_url, "");
}

#[tokio::test]
async fn fetch_fails_on_missing_record() {
    let target = spawn_catalog(fixture_catalog()).await;
    let catalog = HttpCatalog::new(target);

    assert!(catalog.fetch(CreatureId(9999)).await.is_err());
}

#[tokio::test]
async fn fetch_fails_on_undecodable_body() {
    let target = spawn_catalog(fixture_catalog()).await;
    let catalog = HttpCatalog::new(target);

    assert!(catalog.fetch(CreatureId(7)).await.is_err());
}

#[tokio::test]
async fn trailing_slashes_on_target_are_tolerated() {
    let target = spawn_catalog(fixture_catalog()).await;
    let catalog = HttpCatalog::new(format!("{target}//"));

    assert_eq!(catalog.target(), target);
    let creature = catalog.fetch(CreatureId(25)).await.expect("fetch");
    assert_eq!(creature.name, "pikachu");
}

#[tokio::test]
async fn missing_catalog_always_fails() {
    let err = MissingCatalog
        .fetch(CreatureId(1))
        .await
        .expect_err("must fail");
    assert!(err.to_string().contains("no catalog configured"));
}
