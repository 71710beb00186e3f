// tests/http.rs

//! End-to-end HTTP behaviour of the cookbook server.

mod common;

use axum::http::StatusCode;
use common::{get, parse_body, post_json, test_app};
use serde_json::json;

#[tokio::test]
async fn test_create_and_summarize() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/entry",
        json!({ "type": "ingredient", "name": "Egg", "cookTime": 6 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_body(&body), json!({}));

    post_json(&app, "/entry", json!({ "type": "ingredient", "name": "Milk", "cookTime": 1 })).await;
    let (status, _) = post_json(
        &app,
        "/entry",
        json!({
            "type": "recipe",
            "name": "Omelette",
            "requiredItems": [{ "name": "Egg", "quantity": 3 }, { "name": "Milk", "quantity": 1 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/summary?name=Omelette").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse_body(&body),
        json!({
            "name": "Omelette",
            "cookTime": 19,
            "ingredients": [
                { "name": "Egg", "quantity": 3 },
                { "name": "Milk", "quantity": 1 }
            ]
        })
    );
}

#[tokio::test]
async fn test_summary_with_encoded_name() {
    let app = test_app();
    post_json(&app, "/entry", json!({ "type": "ingredient", "name": "Bun", "cookTime": 2 })).await;
    post_json(
        &app,
        "/entry",
        json!({ "type": "recipe", "name": "Plain Burger", "requiredItems": [{ "name": "Bun", "quantity": 2 }] }),
    )
    .await;

    let (status, body) = get(&app, "/summary?name=Plain%20Burger").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_body(&body)["cookTime"], 4);
}

#[tokio::test]
async fn test_entry_validation_messages() {
    let app = test_app();

    let cases = [
        (json!({ "type": "dessert", "name": "Pie" }), "Type must be 'recipe' or 'ingredient'"),
        (json!({ "type": "ingredient", "cookTime": 1 }), "Entry name must be unique"),
        (json!({ "type": "ingredient", "name": "Egg", "cookTime": -3 }), "cookTime must be a non-negative integer"),
        (json!({ "type": "recipe", "name": "Pie", "requiredItems": "Apple" }), "requiredItems must be a list"),
        (
            json!({ "type": "recipe", "name": "Pie", "requiredItems": [{ "name": "", "quantity": 1 }] }),
            "Required item name must not be empty",
        ),
        (
            json!({
                "type": "recipe",
                "name": "Pie",
                "requiredItems": [{ "name": "Apple", "quantity": 1 }, { "name": "Apple", "quantity": 1 }]
            }),
            "Duplicate required item 'Apple'",
        ),
        (
            json!({ "type": "recipe", "name": "Pie", "requiredItems": [{ "name": "Apple", "quantity": 1.5 }] }),
            "Quantity for 'Apple' must be a non-negative integer",
        ),
    ];

    for (body, message) in cases {
        let (status, response) = post_json(&app, "/entry", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parse_body(&response), json!({ "error": message }));
    }

    let (status, _) = get(&app, "/entry/Pie").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_body() {
    let app = test_app();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/entry")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let (status, body) = common::send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(&body), json!({ "error": "Request body is invalid" }));

    for empty in [json!({}), json!([]), json!(null), json!("ingredient")] {
        let (status, body) = post_json(&app, "/entry", empty).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parse_body(&body), json!({ "error": "Request body is invalid" }));
    }

    // Unknown fields only: a real object, so validation starts at `type`
    let (status, body) = post_json(&app, "/entry", json!({ "colour": "red" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(&body),
        json!({ "error": "Type must be 'recipe' or 'ingredient'" })
    );
}

#[tokio::test]
async fn test_duplicate_entry_keeps_original() {
    let app = test_app();
    post_json(&app, "/entry", json!({ "type": "ingredient", "name": "Egg", "cookTime": 6 })).await;

    let (status, _) = post_json(
        &app,
        "/entry",
        json!({ "type": "recipe", "name": "Egg", "requiredItems": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(&app, "/entry/Egg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_body(&body), json!({ "type": "ingredient", "name": "Egg", "cookTime": 6 }));
}

#[tokio::test]
async fn test_summary_failures() {
    let app = test_app();
    post_json(&app, "/entry", json!({ "type": "ingredient", "name": "Egg", "cookTime": 6 })).await;
    post_json(
        &app,
        "/entry",
        json!({ "type": "recipe", "name": "Cake", "requiredItems": [{ "name": "Sugar", "quantity": 1 }] }),
    )
    .await;
    post_json(
        &app,
        "/entry",
        json!({ "type": "recipe", "name": "Loop", "requiredItems": [{ "name": "Loop", "quantity": 1 }] }),
    )
    .await;

    let (status, body) = get(&app, "/summary?name=Ghost").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(&body), json!({ "error": "Recipe not found" }));

    let (status, body) = get(&app, "/summary").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(&body), json!({ "error": "Recipe not found" }));

    let (status, body) = get(&app, "/summary?name=Egg").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(&body), json!({ "error": "Not a recipe" }));

    let (status, body) = get(&app, "/summary?name=Cake").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(parse_body(&body)["error"].as_str().unwrap().starts_with("Recipe contains missing items"));

    let (status, body) = get(&app, "/summary?name=Loop").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(&body),
        json!({ "error": "Recipe contains a cyclic reference: Loop -> Loop" })
    );
}

#[tokio::test]
async fn test_parse_endpoint() {
    let app = test_app();

    let (status, body) = post_json(&app, "/parse", json!({ "input": "my-_Recipe 123!!" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_body(&body), json!({ "msg": "My Recipe" }));

    let (status, body) = post_json(&app, "/parse", json!({ "input": "---" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid recipe name");

    let (status, body) = post_json(&app, "/parse", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid recipe name");
}

#[tokio::test]
async fn test_stats_counts_requests() {
    let app = test_app();
    post_json(&app, "/entry", json!({ "type": "ingredient", "name": "Egg", "cookTime": 6 })).await;
    post_json(&app, "/entry", json!({ "type": "ingredient", "name": "Egg", "cookTime": 6 })).await;
    get(&app, "/summary?name=Egg").await;

    let (status, body) = get(&app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    let stats = parse_body(&body);
    assert_eq!(stats["entries"], 1);
    assert_eq!(stats["entriesCreated"], 1);
    assert_eq!(stats["entriesRejected"], 1);
    assert_eq!(stats["summaryFailures"], 1);
}
