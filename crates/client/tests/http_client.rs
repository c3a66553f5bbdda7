use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use catalogue_client::{CatalogueApi, CatalogueClient, ClientError};
use catalogue_core::SetId;

struct FakeCatalogue {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl FakeCatalogue {
    async fn spawn(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for FakeCatalogue {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn router() -> Router {
    Router::new()
        .route(
            "/api/user/by-username/:username",
            get(|Path(username): Path<String>| async move {
                if username == "brick fan" {
                    (
                        StatusCode::OK,
                        Json(json!({ "id": 101, "username": username, "brickCount": 12 })),
                    )
                } else {
                    (StatusCode::NOT_FOUND, Json(json!({ "error": "no such user" })))
                }
            }),
        )
        .route(
            "/api/sets",
            get(|| async {
                Json(json!({
                    "Sets": [
                        { "id": "s1", "name": "first", "setNumber": "100", "totalPieces": 4 },
                        { "id": "s2", "name": "second", "setNumber": "200" }
                    ]
                }))
            }),
        )
        .route(
            "/api/set/by-id/:id",
            get(|Path(id): Path<String>| async move {
                let body: Value = if id == "broken" {
                    json!({ "id": id, "name": "broken", "pieces": [ { "part": { "designID": "3001" }, "quantity": 1 } ] })
                } else {
                    json!({ "id": id, "name": "ok", "pieces": [ { "part": { "designID": "3001", "material": 1 }, "quantity": 2 } ] })
                };
                Json(body)
            }),
        )
}

#[tokio::test]
async fn resolves_username_with_encoded_path_segment() {
    let server = FakeCatalogue::spawn(router()).await;
    let client = CatalogueClient::new(&server.base_url).unwrap();

    let user = client.user_by_username("brick fan").await.unwrap();
    assert_eq!(user.id.as_str(), "101");
    assert_eq!(user.brick_count, 12);
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let server = FakeCatalogue::spawn(router()).await;
    let client = CatalogueClient::new(&server.base_url).unwrap();

    let err = client.user_by_username("ghost").await.unwrap_err();
    match err {
        ClientError::Api { status, ref body, .. } => {
            assert_eq!(status, 404);
            assert!(body.contains("no such user"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
    assert!(err.is_transport());
}

#[tokio::test]
async fn lists_sets_in_service_order() {
    let server = FakeCatalogue::spawn(router()).await;
    let client = CatalogueClient::new(&server.base_url).unwrap();

    let sets = client.list_sets().await.unwrap();
    let names: Vec<&str> = sets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(sets[1].total_pieces, None);
}

#[tokio::test]
async fn missing_material_is_a_decode_error() {
    let server = FakeCatalogue::spawn(router()).await;
    let client = CatalogueClient::new(&server.base_url).unwrap();

    let ok = client.set_by_id(&"fine".parse::<SetId>().unwrap()).await.unwrap();
    assert_eq!(ok.pieces.len(), 1);

    let err = client
        .set_by_id(&"broken".parse::<SetId>().unwrap())
        .await
        .unwrap_err();
    assert!(err.is_decode(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CatalogueClient::new(&format!("http://{addr}")).unwrap();
    let err = client.list_sets().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "unexpected error: {err:?}");
}
