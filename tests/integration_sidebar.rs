mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use campusgate::router::init_router;
use campusgate_core::{Role, ViewAs};
use common::{body_json, get, test_state, token_with_view_as};
use tower::ServiceExt;
use uuid::Uuid;

fn toggle(category: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(format!("/api/sidebar/{}/toggle", category));
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_sidebar_defaults() {
    let app = init_router(test_state());
    let token = token_with_view_as(Uuid::new_v4(), Role::Student, ViewAs::Current);

    let response = app.oneshot(get("/api/sidebar", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["groups"]["general"], true);
    assert_eq!(body["groups"]["learning"], true);
    assert_eq!(body["groups"]["community"], false);
}

#[tokio::test]
async fn test_toggle_persists_per_user() {
    let app = init_router(test_state());
    let alice = token_with_view_as(Uuid::new_v4(), Role::Student, ViewAs::Current);
    let bob = token_with_view_as(Uuid::new_v4(), Role::Student, ViewAs::Current);

    let response = app
        .clone()
        .oneshot(toggle("community", Some(&alice)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["category"], "community");
    assert_eq!(body["expanded"], true);

    let response = app
        .clone()
        .oneshot(get("/api/sidebar", Some(&alice)))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["groups"]["community"], true);

    let response = app.oneshot(get("/api/sidebar", Some(&bob))).await.unwrap();
    assert_eq!(body_json(response).await["groups"]["community"], false);
}

#[tokio::test]
async fn test_toggle_unknown_category() {
    let app = init_router(test_state());
    let token = token_with_view_as(Uuid::new_v4(), Role::Admin, ViewAs::Current);

    let response = app.oneshot(toggle("settings", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sidebar_requires_session() {
    let app = init_router(test_state());
    let response = app.oneshot(toggle("general", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_toggles_keep_every_update() {
    let app = init_router(test_state());

    for _ in 0..50 {
        let token = token_with_view_as(Uuid::new_v4(), Role::Student, ViewAs::Current);

        let community = tokio::spawn(app.clone().oneshot(toggle("community", Some(&token))));
        let account = tokio::spawn(app.clone().oneshot(toggle("account", Some(&token))));
        assert_eq!(community.await.unwrap().unwrap().status(), StatusCode::OK);
        assert_eq!(account.await.unwrap().unwrap().status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(get("/api/sidebar", Some(&token)))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["groups"]["community"], true);
        assert_eq!(body["groups"]["account"], true);
    }
}
