//! End-to-end HTTP tests against the in-memory back-end.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Value, json};
use tower::ServiceExt;

use tutor_api::{AppState, build_app};
use tutor_core::config::AppConfig;
use tutor_database::{Database, MemoryDatabase};

fn app() -> Router {
    let config: AppConfig =
        serde_json::from_value(json!({ "database": { "url": "memory://" } })).expect("config");
    build_app(AppState::new(config, Database::Memory(MemoryDatabase::new())))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-actor", "tester");
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(request.body(body).expect("request"))
        .await
        .expect("response")
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

async fn seed_ratings(app: &Router) {
    for score in 1..=5 {
        let response = send(
            app,
            "POST",
            "/api/ratings",
            Some(json!({ "score": score, "comment": format!("score {score}") })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_create_and_fetch_student() {
    let app = app();
    let response = send(
        &app,
        "POST",
        "/api/students",
        Some(json!({ "code": "S1", "fullName": "An Nguyen", "gender": "FEMALE" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/api/students/1")
    );
    let created = json_body(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["fullName"], "An Nguyen");

    let response = send(&app, "GET", "/api/students/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["gender"], "FEMALE");

    let response = send(&app, "GET", "/api/students/2", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_preconditions() {
    let app = app();

    let response = send(&app, "POST", "/api/ratings", Some(json!({ "id": 3, "score": 4 }))).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(&app, "POST", "/api/ratings", Some(json!({ "score": 6 }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "VALIDATION_ERROR");

    let response = send(
        &app,
        "POST",
        "/api/lesson-times",
        Some(json!({ "period": 1, "startTime": "7h" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "GET", "/api/ratings/count", None).await;
    assert_eq!(json_body(response).await, json!(0));
}

#[tokio::test]
async fn test_list_with_criteria_paging_and_total_count() {
    let app = app();
    seed_ratings(&app).await;

    let response = send(
        &app,
        "GET",
        "/api/ratings?score.greaterThanOrEqual=3&score.lessThanOrEqual=5&sort=score,desc&size=2",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-total-count").and_then(|v| v.to_str().ok()),
        Some("3")
    );
    let page = json_body(response).await;
    let scores: Vec<i64> = page
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|r| r["score"].as_i64())
        .collect();
    assert_eq!(scores, vec![5, 4]);

    let response = send(
        &app,
        "GET",
        "/api/ratings?score.greaterThanOrEqual=3&sort=score,desc&size=2&page=1",
        None,
    )
    .await;
    let page = json_body(response).await;
    assert_eq!(page.as_array().map(Vec::len), Some(1));

    let response = send(&app, "GET", "/api/ratings/count?score.greaterThanOrEqual=3", None).await;
    assert_eq!(json_body(response).await, json!(3));

    let response = send(&app, "GET", "/api/ratings/count?comment.contains=SCORE%201", None).await;
    assert_eq!(json_body(response).await, json!(1));
}

#[tokio::test]
async fn test_out_of_range_page_is_empty() {
    let app = app();
    seed_ratings(&app).await;

    let response = send(&app, "GET", "/api/ratings?page=18446744073709551614", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-total-count").and_then(|v| v.to_str().ok()),
        Some("5")
    );
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn test_like_kind_filters() {
    let app = app();
    for kind in ["LIKE", "DISLIKE", "LIKE"] {
        let response = send(&app, "POST", "/api/likes", Some(json!({ "kind": kind }))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&app, "GET", "/api/likes/count?kind.in=LIKE", None).await;
    assert_eq!(json_body(response).await, json!(2));
    let response = send(&app, "GET", "/api/likes/count?kind.notIn=LIKE", None).await;
    assert_eq!(json_body(response).await, json!(1));
    let response = send(&app, "GET", "/api/likes?kind.equals=like", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_criteria_are_rejected() {
    let app = app();
    for uri in [
        "/api/ratings?stars.equals=3",
        "/api/ratings?score.between=3",
        "/api/ratings?score.equals=high",
        "/api/ratings?sort=stars,asc",
        "/api/ratings?distinct=maybe",
    ] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_update_partial_update_and_delete() {
    let app = app();
    seed_ratings(&app).await;

    let response = send(&app, "PUT", "/api/ratings/2", Some(json!({ "id": 3, "score": 4 }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "PUT", "/api/ratings/99", Some(json!({ "id": 99, "score": 4 }))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "PUT", "/api/ratings/2", Some(json!({ "id": 2, "score": 0 }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["score"], 0);
    assert!(updated.get("comment").is_none_or(Value::is_null));

    let response = send(&app, "PATCH", "/api/ratings/3", Some(json!({ "comment": "revised" }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let patched = json_body(response).await;
    assert_eq!(patched["score"], 3);
    assert_eq!(patched["comment"], "revised");

    let response = send(&app, "PATCH", "/api/ratings/99", Some(json!({ "comment": "x" }))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "DELETE", "/api/ratings/5", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = send(&app, "DELETE", "/api/ratings/5", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = send(&app, "GET", "/api/ratings/count", None).await;
    assert_eq!(json_body(response).await, json!(4));
}

#[tokio::test]
async fn test_association_filters_and_distinct() {
    let app = app();
    seed_ratings(&app).await;
    for content in ["why?", "how?"] {
        let response = send(
            &app,
            "POST",
            "/api/questions",
            Some(json!({ "content": content, "rating": { "id": 1 } })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&app, "GET", "/api/ratings/count?questionsId.specified=true", None).await;
    assert_eq!(json_body(response).await, json!(2));
    let response = send(
        &app,
        "GET",
        "/api/ratings/count?questionsId.specified=true&distinct=true",
        None,
    )
    .await;
    assert_eq!(json_body(response).await, json!(1));

    let response = send(&app, "GET", "/api/questions?ratingId.equals=1", None).await;
    assert_eq!(
        response.headers().get("x-total-count").and_then(|v| v.to_str().ok()),
        Some("2")
    );
}

#[tokio::test]
async fn test_teacher_by_code() {
    let app = app();
    let response = send(
        &app,
        "POST",
        "/api/teachers",
        Some(json!({ "code": "T1", "fullName": "Tran Van An", "degree": "PhD" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, "GET", "/api/teachers/by-code/T1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["degree"], "PhD");

    let response = send(&app, "GET", "/api/teachers/by-code/T9", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_replace_rating_questions() {
    let app = app();
    seed_ratings(&app).await;
    for (content, rating) in [("a", Some(1)), ("b", Some(1)), ("c", None)] {
        let mut body = json!({ "content": content });
        if let Some(id) = rating {
            body["rating"] = json!({ "id": id });
        }
        send(&app, "POST", "/api/questions", Some(body)).await;
    }

    let response = send(&app, "PUT", "/api/ratings/1/questions", Some(json!([2, 3]))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let linked = json_body(response).await;
    let ids: Vec<i64> = linked
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|q| q["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![2, 3]);

    let response = send(&app, "GET", "/api/questions/1", None).await;
    assert!(json_body(response).await["rating"].is_null());

    let response = send(&app, "GET", "/api/ratings/1/questions", None).await;
    assert_eq!(json_body(response).await.as_array().map(Vec::len), Some(2));

    let response = send(&app, "PUT", "/api/ratings/42/questions", Some(json!([1]))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let response = send(&app, "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "UP");
}
