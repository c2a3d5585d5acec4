use chrono::NaiveDate;
use hi_canvas::api::groups::GroupAssignment;
use hi_canvas::client::CanvasClient;
use hi_canvas::config::Config;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> Config {
    Config {
        institution_url: base_url.trim_end_matches('/').to_string(),
        api_version: "v1".to_string(),
        api_token: "test-token".to_string(),
        course_id: "1234".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
    }
}

/// Run a blocking client call off the async test runtime
async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

/// An existing category is reused, never recreated
#[tokio::test(flavor = "multi_thread")]
async fn existing_category_is_not_recreated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/1234/group_categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 11, "name": "Project groups"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let id = blocking(move || {
        let client = CanvasClient::new(config).unwrap();
        client.find_or_create_group_category("Project groups").unwrap()
    })
    .await;

    assert_eq!(id, 11);
}

/// A missing category is created on the fly
#[tokio::test(flavor = "multi_thread")]
async fn missing_category_is_created() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/1234/group_categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/courses/1234/group_categories"))
        .and(body_partial_json(json!({"name": "Teams"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "name": "Teams"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let id = blocking(move || {
        let client = CanvasClient::new(config).unwrap();
        client.find_or_create_group_category("Teams").unwrap()
    })
    .await;

    assert_eq!(id, 12);
}

/// Canvas answering 409 means the user was already a member
#[tokio::test(flavor = "multi_thread")]
async fn membership_conflict_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/groups/3/memberships"))
        .respond_with(ResponseTemplate::new(409).set_body_string("already a member"))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let added = blocking(move || {
        let client = CanvasClient::new(config).unwrap();
        client.add_group_membership(3, 100).unwrap()
    })
    .await;

    assert!(!added);
}

/// Applying a plan creates only the missing groups and adds everyone
#[tokio::test(flavor = "multi_thread")]
async fn plan_application_creates_missing_groups() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/1234/group_categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "name": "Teams"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/group_categories/5/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 31, "name": "Teams-1"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/group_categories/5/groups"))
        .and(body_partial_json(json!({"name": "Teams-2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 32,
            "name": "Teams-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/groups/31/memberships"))
        .and(body_partial_json(json!({"user_id": 100})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/groups/32/memberships"))
        .and(body_partial_json(json!({"user_id": 200})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    blocking(move || {
        let client = CanvasClient::new(config).unwrap();
        let plan = vec![
            GroupAssignment {
                user_id: 100,
                group_name: "Teams-1".to_string(),
            },
            GroupAssignment {
                user_id: 200,
                group_name: "Teams-2".to_string(),
            },
        ];
        client.assign_members("Teams", &plan).unwrap()
    })
    .await;
}
