use chrono::FixedOffset;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jiggly_fruitz::models::{Goal, OrderStatus, Portion, PreferenceProfile};
use jiggly_fruitz::recommender::recommend;
use jiggly_fruitz::state::OrderBoard;
use jiggly_fruitz::storage::{build_order_record, OrderStore, SupabaseStore};
use jiggly_fruitz::KioskError;

const ANON_KEY: &str = "test-anon-key";

fn wib() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).unwrap()
}

#[tokio::test]
async fn test_list_orders_sends_query_and_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/orders"))
        .and(query_param("select", "*"))
        .and(query_param("order", "created_at.desc"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", "Bearer test-anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "created_at": "2025-03-01T05:20:00.000000+00:00",
                "customer_name": "Sinta",
                "salad_type": "Diet",
                "size": "300",
                "toppings": "Strawberry, Melon",
                "price": 15000,
                "status": "done"
            },
            { "id": 12 }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = SupabaseStore::new(mock_server.uri(), ANON_KEY);
    let mut board = OrderBoard::new(store, wib());
    let orders = board.refresh().await.unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].code, "JF-0AE7");
    assert_eq!(orders[0].name, "Sinta");
    assert_eq!(orders[0].goal, Goal::Diet);
    assert_eq!(orders[0].fruits, vec!["Strawberry", "Melon"]);
    assert_eq!(orders[0].created_at, "12.20");
    assert_eq!(orders[0].status, OrderStatus::Done);

    assert_eq!(orders[1].code, "JF-12");
    assert_eq!(orders[1].goal, Goal::Gain);
    assert_eq!(orders[1].portion, Portion::Small);
    assert_eq!(orders[1].status, OrderStatus::New);
}

#[tokio::test]
async fn test_refresh_keeps_rows_with_unusual_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "good1", "salad_type": "Weight Gain", "price": 25000, "size": "500" },
            { "id": "odd2", "goal": "Diet", "price": 15000.0 },
            { "id": "odd3", "goal": "DIET", "price": "15000", "status": 1 }
        ])))
        .mount(&mock_server)
        .await;

    let store = SupabaseStore::new(mock_server.uri(), ANON_KEY);
    let mut board = OrderBoard::new(store, wib());
    let orders = board.refresh().await.unwrap();

    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].goal, Goal::Gain);
    assert_eq!(orders[0].price, 25000);
    assert_eq!(orders[1].goal, Goal::Diet);
    assert_eq!(orders[1].price, 15000);
    assert_eq!(orders[2].goal, Goal::Diet);
    assert_eq!(orders[2].price, 15000);
    assert_eq!(orders[2].status, OrderStatus::New);
}

#[tokio::test]
async fn test_insert_posts_record_and_returns_row() {
    let mock_server = MockServer::start().await;

    let profile = PreferenceProfile {
        name: "Agus".to_string(),
        goal: Goal::Gain,
        sweetness: jiggly_fruitz::models::Sweetness::High,
        portion: Portion::Large,
        ..Default::default()
    };
    let rec = recommend(&profile);

    Mock::given(method("POST"))
        .and(path("/rest/v1/orders"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!([{
            "customer_name": "Agus",
            "salad_type": "Weight Gain",
            "size": "500",
            "toppings": "Mangga, Buah Naga",
            "price": 25000,
            "status": "new"
        }])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": "f00dcafe",
            "created_at": "2025-03-01T10:00:00+00:00",
            "customer_name": "Agus",
            "salad_type": "Weight Gain",
            "size": "500",
            "toppings": "Mangga, Buah Naga",
            "price": 25000,
            "status": "new"
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = SupabaseStore::new(mock_server.uri(), ANON_KEY);
    let mut board = OrderBoard::new(store, wib());
    let order = board.confirm(&profile, &rec).await.unwrap();

    assert_eq!(order.code, "JF-CAFE");
    assert_eq!(order.goal, Goal::Gain);
    assert_eq!(order.price, 25000);
    assert_eq!(order.created_at, "17.00");
    assert_eq!(board.len(), 1);
}

#[tokio::test]
async fn test_insert_empty_response_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let store = SupabaseStore::new(mock_server.uri(), ANON_KEY);
    let profile = PreferenceProfile::default();
    let record = build_order_record(&profile, &recommend(&profile));

    let err = store.insert_order(&record).await.unwrap_err();
    assert!(matches!(err, KioskError::Storage { .. }));
}

#[tokio::test]
async fn test_backend_error_surfaces_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/orders"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&mock_server)
        .await;

    let store = SupabaseStore::new(mock_server.uri(), ANON_KEY);
    let mut board = OrderBoard::new(store, wib());
    let err = board.refresh().await.unwrap_err();

    match err {
        KioskError::Storage { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Invalid API key");
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(board.is_empty());
}

#[tokio::test]
async fn test_update_status_patches_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "abc123", "status": "new" }
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/orders"))
        .and(query_param("id", "eq.abc123"))
        .and(body_json(json!({ "status": "done" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = SupabaseStore::new(mock_server.uri(), ANON_KEY);
    let mut board = OrderBoard::new(store, wib());
    board.refresh().await.unwrap();

    board
        .update_status("abc123", OrderStatus::Done)
        .await
        .unwrap();
    assert_eq!(board.get("abc123").unwrap().status, OrderStatus::Done);
}

#[tokio::test]
async fn test_failed_status_update_rolls_back() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "abc123", "status": "new" }
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let store = SupabaseStore::new(mock_server.uri(), ANON_KEY);
    let mut board = OrderBoard::new(store, wib());
    board.refresh().await.unwrap();

    let err = board
        .update_status("abc123", OrderStatus::Done)
        .await
        .unwrap_err();
    assert!(matches!(err, KioskError::Storage { status: 500, .. }));
    assert_eq!(board.get("abc123").unwrap().status, OrderStatus::New);
}
