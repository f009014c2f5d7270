//! End-to-end integration tests for the algoviz HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! AlgorithmService -> parameter adapter -> engine -> HTTP response.
//!
//! Tests use `tower::ServiceExt::oneshot` to send requests directly to the
//! router without starting a network server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use algoviz_server::router::build_router;
use algoviz_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    build_router(AppState::new())
}

/// Sends a POST request with a JSON body and returns (status, json).
async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a POST request with an arbitrary body and returns (status, json).
async fn post_raw(
    app: &Router,
    path: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("POST").uri(path);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Runs an algorithm and returns its steps, asserting a 200.
async fn run_steps(app: &Router, body: serde_json::Value) -> Vec<serde_json::Value> {
    let (status, json) = post_json(app, "/run_algorithm", body).await;
    assert_eq!(status, StatusCode::OK, "run failed: {:?}", json);
    json["steps"].as_array().cloned().unwrap()
}

fn actions(steps: &[serde_json::Value]) -> Vec<&str> {
    steps
        .iter()
        .map(|s| s["action"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_content_lists_algorithms_and_structures() {
    let app = test_app();
    let (status, body) = get_json(&app, "/get_content").await;
    assert_eq!(status, StatusCode::OK);

    let bubble = &body["algorithms"]["bubble_sort"];
    assert_eq!(bubble["name"], "Bubble Sort");
    assert_eq!(bubble["category"], "Sorting");
    assert_eq!(bubble["ds"], "array");
    assert_eq!(bubble["complexity"]["time_worst"], "O(n^2)");
    assert_eq!(body["data_structures"]["graph"]["name"], "Graph");
    assert_eq!(body["algorithms"].as_object().unwrap().len(), 19);
}

#[tokio::test]
async fn algorithms_endpoint_lists_registry() {
    let app = test_app();
    let (status, body) = get_json(&app, "/algorithms").await;
    assert_eq!(status, StatusCode::OK);
    let list = body["algorithms"].as_array().unwrap();
    assert_eq!(list.len(), 19);
    assert_eq!(list[11]["key"], "dijkstra");
    assert_eq!(list[11]["input_kind"], "shortest_path");
}

// ---------------------------------------------------------------------------
// Running algorithms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn linear_search_trace_shape() {
    let app = test_app();
    let steps = run_steps(
        &app,
        json!({ "algorithm": "linear_search", "input_data": [4, 2, 7], "target": 7 }),
    )
    .await;
    assert_eq!(
        actions(&steps),
        vec!["compare", "compare", "compare", "found"]
    );
    assert_eq!(steps[3]["indices"], json!([2]));
    assert!(steps.iter().all(|s| s["message"].is_string()));
}

#[tokio::test]
async fn unsorted_binary_search_is_single_error_step() {
    let app = test_app();
    let steps = run_steps(
        &app,
        json!({ "algorithm": "binary_search", "input_data": [3, 1, 2], "target": "1" }),
    )
    .await;
    assert_eq!(actions(&steps), vec!["error"]);
    assert_eq!(
        steps[0]["message"],
        "Error: Binary Search requires a sorted array!"
    );
}

#[tokio::test]
async fn binary_search_ends_on_found() {
    let app = test_app();
    let steps = run_steps(
        &app,
        json!({ "algorithm": "binary_search", "input_data": [1, 3, 5, 7, 9], "target": 7 }),
    )
    .await;
    let last = steps.last().unwrap();
    assert_eq!(last["action"], "found");
    assert_eq!(last["indices"], json!([3]));
    assert!(!actions(&steps).contains(&"complete"));
}

#[tokio::test]
async fn bitwise_swap_ends_on_final_state() {
    let app = test_app();
    let steps = run_steps(&app, json!({ "algorithm": "bitwise_swap", "a": 5, "b": 9 })).await;
    let last = steps.last().unwrap();
    assert_eq!(last["action"], "final_state");
    assert_eq!((last["a"].clone(), last["b"].clone()), (json!(9), json!(5)));
}

#[tokio::test]
async fn bubble_sort_ends_complete() {
    let app = test_app();
    let steps = run_steps(
        &app,
        json!({ "algorithm": "bubble_sort", "input_data": [3, 1, 2] }),
    )
    .await;
    assert_eq!(steps.last().unwrap()["action"], "complete");
    assert!(actions(&steps).contains(&"swap"));
}

#[tokio::test]
async fn dijkstra_reports_unreachable_as_null() {
    let app = test_app();
    let steps = run_steps(
        &app,
        json!({
            "algorithm": "dijkstra",
            "input_data": {
                "nodes": { "A": { "x": 0, "y": 0 }, "B": { "x": 1, "y": 1 } },
                "adjacency_list": { "A": [], "B": [] }
            },
            "start_node": "A",
            "end_node": "B"
        }),
    )
    .await;
    assert_eq!(steps[0]["action"], "init_distances");
    assert_eq!(steps[0]["distances"]["A"], 0.0);
    assert!(steps[0]["distances"]["B"].is_null());
    assert!(actions(&steps).contains(&"path_not_found"));
}

#[tokio::test]
async fn fib_defaults_to_five() {
    let app = test_app();
    let steps = run_steps(&app, json!({ "algorithm": "fib_dp" })).await;
    let last = steps.last().unwrap();
    assert_eq!(last["action"], "complete");
    assert_eq!(last["result"], 5);
}

#[tokio::test]
async fn hanoi_snapshots_serialize_by_peg_name() {
    let app = test_app();
    let steps = run_steps(&app, json!({ "algorithm": "hanoi", "n_disks": 2 })).await;
    assert_eq!(
        actions(&steps),
        vec!["move_disk", "move_disk", "move_disk", "complete"]
    );
    assert_eq!(steps[0]["from_peg"], "A");
    assert_eq!(steps[0]["to_peg"], "B");
    assert_eq!(
        steps[2]["towers_state"],
        json!({ "A": [], "B": [], "C": [2, 1] })
    );
}

#[tokio::test]
async fn bst_build_uses_camel_case_new_value() {
    let app = test_app();
    let steps = run_steps(
        &app,
        json!({ "algorithm": "bst_build", "input_data": [5, 3] }),
    )
    .await;
    assert_eq!(steps[1]["action"], "compare");
    assert_eq!(steps[1]["newValue"], 3);
    assert_eq!(steps[2]["direction"], "left");
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_algorithm_is_bad_request() {
    let app = test_app();
    let (status, body) = post_json(&app, "/run_algorithm", json!({ "algorithm": "bogo_sort" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Algorithm 'bogo_sort' not found or is not implemented."
    );

    let (status, _) = post_json(&app, "/run_algorithm", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unreadable_run_bodies_are_json_bad_request() {
    let app = test_app();
    let cases = [
        (Some("application/json"), r#"{"algorithm": 123}"#),
        (Some("application/json"), "not json at all"),
        (None, r#"{"algorithm": "bubble_sort", "input_data": [2, 1]}"#),
    ];
    for (content_type, body) in cases {
        let (status, json) = post_raw(&app, "/run_algorithm", content_type, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert!(json["error"].is_string(), "body {body:?} gave {json:?}");
    }
}

#[tokio::test]
async fn unreadable_generate_body_is_json_bad_request() {
    let app = test_app();
    let (status, json) = post_raw(
        &app,
        "/generate_data",
        Some("application/json"),
        r#"{"size": "lots"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn malformed_parameters_are_internal_error() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/run_algorithm",
        json!({ "algorithm": "linear_search", "input_data": [1, 2] }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "An unexpected error occurred on the server while running the algorithm."
    );
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = test_app();
    let (status, body) = get_json(&app, "/run_everything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not found: /run_everything");
}

// ---------------------------------------------------------------------------
// Data generation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_sorted_array() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/generate_data",
        json!({ "size": 12, "dtype": "array", "sorted": true, "seed": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let values: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(values.len(), 12);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn generate_graph_is_reproducible() {
    let app = test_app();
    let request = json!({ "size": 6, "dtype": "graph", "seed": 11 });
    let (status, first) = post_json(&app, "/generate_data", request.clone()).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = post_json(&app, "/generate_data", request).await;
    assert_eq!(first, second);
    assert_eq!(first["nodes"].as_object().unwrap().len(), 6);
    assert!(first["adjacency_list"]["A"].is_array());
}

#[tokio::test]
async fn generated_graph_runs_through_bfs() {
    let app = test_app();
    let (_, graph) = post_json(
        &app,
        "/generate_data",
        json!({ "size": 5, "dtype": "graph", "seed": 2 }),
    )
    .await;
    let steps = run_steps(
        &app,
        json!({ "algorithm": "bfs", "input_data": graph, "start_node": "A" }),
    )
    .await;
    assert_eq!(steps[0]["action"], "enqueue");
    assert_eq!(steps.last().unwrap()["action"], "complete");
}

#[tokio::test]
async fn unknown_dtype_yields_empty_list() {
    let app = test_app();
    let (status, body) = post_json(&app, "/generate_data", json!({ "dtype": "trie" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
