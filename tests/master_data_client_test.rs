use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bookset_admin::ApiClient;
use bookset_admin::domain::MasterDataProvider;
use bookset_admin::master_forms::{MasterKind, MasterPayload};

// Helper to point a client at the mock server
fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(&server.uri()).expect("Failed to build client")
}

#[tokio::test]
async fn catalog_responses_are_unwrapped_from_the_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/master/boards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "board_name": "CBSE"},
                {"id": 2, "board_name": "ICSE"}
            ]
        })))
        .mount(&server)
        .await;

    let boards = client_for(&server).get_boards().await.expect("boards");
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[0].board_name, "CBSE");
    assert_eq!(boards[1].id, 2);
}

#[tokio::test]
async fn academic_years_are_fetched_from_their_own_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/master/academic-years"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 3,
                "year_name": "2024-2025",
                "start_date": "2024-06-01T00:00:00",
                "end_date": "2025-04-30T00:00:00"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let years = client_for(&server).get_academic_years().await.expect("years");
    assert_eq!(years[0].year_name, "2024-2025");
    assert_eq!(years[0].start_date_only(), "2024-06-01");
    assert_eq!(years[0].end_date_only(), "2025-04-30");
}

#[tokio::test]
async fn create_posts_the_exact_payload_to_the_tab_segment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/master/boards"))
        .and(body_json(json!({"board_name": "State Board"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 5, "board_name": "State Board"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = MasterPayload::Board {
        board_name: "State Board".to_string(),
    };
    client_for(&server)
        .create_master(payload.kind(), &payload)
        .await
        .expect("create board");
}

#[tokio::test]
async fn year_mutations_use_the_years_segment() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/master/years/7"))
        .and(body_json(json!({
            "year_name": "2025-2026",
            "start_date": "2025-06-01",
            "end_date": "2026-04-30"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let payload = MasterPayload::year(
        "2025-2026",
        chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2026, 4, 30).unwrap(),
    );
    client_for(&server)
        .update_master(MasterKind::Years, 7, &payload)
        .await
        .expect("update year");
}

#[tokio::test]
async fn delete_surfaces_the_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/master/books/9"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Book is used in a book set"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete_master(MasterKind::Books, 9)
        .await
        .unwrap_err();
    assert_eq!(err.server_message(), Some("Book is used in a book set"));
}

#[tokio::test]
async fn unexpected_body_shape_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/master/mediums"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "medium_name": "English"}
        ])))
        .mount(&server)
        .await;

    let err = client_for(&server).get_mediums().await.unwrap_err();
    assert!(matches!(err, bookset_admin::ApiError::Decode(_)));
}
