//! Console facade and store behavior against a mock backend

use serde_json::json;
use vigil_api::{CameraUpdate, DemographicsConfigCreate, DemographicsTuning, Gender};
use vigil_client::{CameraListQuery, CameraStore, ConsoleClient, ConsoleClientConfig, ResultsQuery};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ConsoleClient {
    ConsoleClient::new(ConsoleClientConfig {
        base_url: server.uri(),
        retry_delay_ms: 10,
        ..Default::default()
    })
    .unwrap()
}

fn camera_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "rtsp_url": "rtsp://192.168.1.100/stream",
        "stream_frame_width": 1920,
        "stream_frame_height": 1080,
        "stream_fps": 30,
        "tags": [{"id": "1", "name": "Entrance"}],
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

fn result_json(id: &str, gender: &str) -> serde_json::Value {
    json!({
        "id": id,
        "camera_id": "123",
        "gender": gender,
        "age": "19-30",
        "emotion": "happy",
        "ethnicity": "white",
        "confidence": 0.95,
        "timestamp": "2024-01-01T10:00:00Z",
        "created_at": "2024-01-01T10:00:00Z"
    })
}

#[tokio::test]
async fn camera_list_decodes_the_paginated_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras/"))
        .and(query_param("page", "1"))
        .and(query_param("size", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [camera_json("123", "Main Entrance Camera")],
            "total": 1,
            "page": 1,
            "size": 12,
            "pages": 1
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.camera_list(&CameraListQuery::new()).await.unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Main Entrance Camera");
    assert_eq!(page.items[0].stream_fps, Some(30));
    assert_eq!(page.items[0].tags.as_ref().unwrap()[0].name, "Entrance");
}

#[tokio::test]
async fn name_filter_is_sent_only_when_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras/"))
        .and(query_param("camera_name", "entrance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [], "total": 0, "page": 1, "size": 12, "pages": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = CameraListQuery::new().with_name("entrance");
    client.camera_list(&query).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().unwrap().contains("camera_name=entrance"));
}

#[tokio::test]
async fn camera_update_puts_the_partial_payload() {
    let server = MockServer::start().await;

    let update = CameraUpdate {
        name: "Dock Camera".to_string(),
        rtsp_url: "rtsp://10.0.0.5/stream".to_string(),
        stream_fps: Some(15),
        tags: Some(vec!["1".to_string(), "3".to_string()]),
        ..Default::default()
    };

    Mock::given(method("PUT"))
        .and(path("/cameras/123"))
        .and(body_json(json!({
            "name": "Dock Camera",
            "rtsp_url": "rtsp://10.0.0.5/stream",
            "stream_fps": 15,
            "tags": ["1", "3"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(camera_json("123", "Dock Camera")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let camera = client.camera_update("123", &update).await.unwrap();

    assert_eq!(camera.name, "Dock Camera");
}

#[tokio::test]
async fn config_create_and_update_round_trip() {
    let server = MockServer::start().await;

    let config_body = json!({
        "id": "456",
        "camera_id": "123",
        "track_history_max_length": 30,
        "save_interval": 600,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    });

    Mock::given(method("POST"))
        .and(path("/demographics/config"))
        .and(body_json(json!({
            "camera_id": "123",
            "track_history_max_length": 30,
            "save_interval": 600
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(config_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/demographics/config/456"))
        .and(body_json(json!({"save_interval": 900})))
        .respond_with(ResponseTemplate::new(200).set_body_json(config_body))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let created = client
        .demographics_config_create(&DemographicsConfigCreate {
            camera_id: "123".to_string(),
            tuning: DemographicsTuning {
                track_history_max_length: Some(30),
                save_interval: Some(600),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(created.camera_id, "123");
    assert_eq!(created.tuning.track_history_max_length, Some(30));

    // The update payload never carries camera_id.
    let updated = client
        .demographics_config_update(
            "456",
            &DemographicsTuning {
                save_interval: Some(900),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, "456");
}

#[tokio::test]
async fn results_decode_and_empty_match_is_an_empty_vec() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/demographics/results"))
        .and(query_param("camera_id", "123"))
        .and(query_param("gender", "female"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([result_json("1", "female"), result_json("2", "female")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/demographics/results"))
        .and(query_param("camera_id", "empty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let query = ResultsQuery::new("123").with_gender(Some(Gender::Female));
    let results = client.demographics_results(&query).await.unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.gender == Gender::Female));

    let none = client
        .demographics_results(&ResultsQuery::new("empty"))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn store_serves_repeated_reads_from_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(camera_json("123", "Main")))
        .expect(1) // the second read must not hit the network
        .mount(&server)
        .await;

    let store = CameraStore::new(client_for(&server));

    let first = store.camera("123").await.unwrap();
    let second = store.camera("123").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn update_refreshes_the_cached_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(camera_json("123", "Old Name")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/cameras/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(camera_json("123", "New Name")))
        .expect(1)
        .mount(&server)
        .await;

    let store = CameraStore::new(client_for(&server));

    assert_eq!(store.camera("123").await.unwrap().name, "Old Name");

    let update = CameraUpdate {
        name: "New Name".to_string(),
        rtsp_url: "rtsp://192.168.1.100/stream".to_string(),
        ..Default::default()
    };
    store.update_camera("123", &update).await.unwrap();

    // Served from the refreshed cache; the GET mock only allows one hit.
    assert_eq!(store.camera("123").await.unwrap().name, "New Name");
}

#[tokio::test]
async fn store_skips_the_network_without_a_camera_selected() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and fail the test.

    let store = CameraStore::new(client_for(&server));
    let results = store.results(&ResultsQuery::new("")).await.unwrap();
    assert!(results.is_empty());
}
