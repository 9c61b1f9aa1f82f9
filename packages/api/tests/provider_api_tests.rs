// ABOUTME: Integration tests for the provider API module
// ABOUTME: Covers registration, login and seeker search against a mock backend

mod common;

use common::{fallback_api, remote_api, unreachable_api};
use freelink_api::fallback::{MOCK_PROVIDER_ID, MOCK_PROVIDER_TOKEN};
use freelink_api::{messages, ApiError};
use freelink_core::{AuthFormFields, NotificationLevel, SearchCriteria, SeekerId, UserType};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_register_sends_normalized_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/provider/register"))
        .and(body_json(json!({
            "name": "Pat",
            "phone_number": "555-0100",
            "email": "pat@example.com",
            "password": "secret"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"message": "Registration successful"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (api, notifier) = remote_api(&server);
    let form = AuthFormFields {
        name: Some("Pat".to_string()),
        phone: Some("555-0100".to_string()),
        ..AuthFormFields::new("pat@example.com", "secret")
    };

    let response = api.provider().register(&form).await.unwrap();

    assert_eq!(response.message, "Registration successful");
    assert!(notifier.contains(NotificationLevel::Success, "Registration successful"));
}

#[tokio::test]
async fn test_register_conflict_propagates_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/provider/register"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "Email already registered"})))
        .mount(&server)
        .await;

    let (api, notifier) = remote_api(&server);
    let err = api
        .provider()
        .register(&AuthFormFields::new("pat@example.com", "secret"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert!(notifier.contains(
        NotificationLevel::Error,
        "Registration failed: Email already registered"
    ));
}

#[tokio::test]
async fn test_login_shapes_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/provider/login"))
        .and(body_json(json!({"email": "pat@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "token": "jwt-token",
            "user": {"id": 12, "name": "Pat", "email": "pat@example.com", "userType": "provider"}
        })))
        .mount(&server)
        .await;

    let (api, _) = remote_api(&server);
    let response = api.provider().login("pat@example.com", "secret").await.unwrap();

    assert_eq!(response.token, "jwt-token");
    assert_eq!(response.user.id, 12);
    assert_eq!(response.user.user_type, UserType::Provider);
    assert_eq!(response.user.skill, None);
}

#[tokio::test]
async fn test_login_rejection_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/provider/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})))
        .mount(&server)
        .await;

    let (api, notifier) = remote_api(&server);
    let err = api.provider().login("pat@example.com", "wrong").await.unwrap_err();

    assert!(err.is_http());
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(notifier.contains(NotificationLevel::Error, "Login failed: Invalid credentials"));
    assert!(!notifier.contains(NotificationLevel::Error, messages::CONNECTION_FAILED));
}

#[tokio::test]
async fn test_login_without_token_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/provider/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let (api, _) = remote_api(&server);
    let err = api.provider().login("pat@example.com", "secret").await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_login_unreachable_reports_connection_problem() {
    let (api, notifier) = unreachable_api();

    let err = api.provider().login("pat@example.com", "secret").await.unwrap_err();

    assert!(err.is_transport());
    assert!(notifier.contains(NotificationLevel::Error, messages::CONNECTION_FAILED));
}

#[tokio::test]
async fn test_fallback_login_returns_mock_provider() {
    let (api, notifier) = fallback_api();

    let response = api.provider().login("pat@example.com", "secret").await.unwrap();

    assert_eq!(response.token, MOCK_PROVIDER_TOKEN);
    assert_eq!(response.user.id, MOCK_PROVIDER_ID);
    assert_eq!(response.user.name, "pat");
    assert!(notifier.contains(NotificationLevel::Warning, messages::MOCK_LOGIN));
}

#[tokio::test]
async fn test_search_sends_only_non_empty_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/seekers"))
        .and(query_param("skill", "Design"))
        .and(query_param("time_period", "Contract"))
        .and(query_param_is_missing("location"))
        .and(query_param_is_missing("rating"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = remote_api(&server);
    let criteria = SearchCriteria::new()
        .with_skill("Design")
        .with_time_period("Contract");

    let seekers = api.provider().search_seekers(&criteria).await.unwrap();
    assert!(seekers.is_empty());
}

#[tokio::test]
async fn test_search_snake_case_results_are_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/seekers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 7,
            "name": "Lee",
            "skill": "Design",
            "years_of_experience": 6,
            "location": "Remote",
            "time_period": "Part-time",
            "base_price": "42.50",
            "rating": 4.9,
            "reviews": 31
        }])))
        .mount(&server)
        .await;

    let (api, _) = remote_api(&server);
    let seekers = api.provider().search_seekers(&SearchCriteria::new()).await.unwrap();

    assert_eq!(seekers.len(), 1);
    let seeker = &seekers[0];
    assert_eq!(seeker.id, SeekerId::Number(7));
    assert_eq!(seeker.experience, 6.0);
    assert_eq!(seeker.time_period, "Part-time");
    assert_eq!(seeker.base_price, 42.5);
    assert_eq!(seeker.reviews, 31);
}

#[tokio::test]
async fn test_search_unreachable_returns_backup_data_echoing_skill() {
    let (api, notifier) = unreachable_api();
    let criteria = SearchCriteria::new().with_skill("Design");

    let seekers = api.provider().search_seekers(&criteria).await.unwrap();

    assert!(!seekers.is_empty());
    assert!(seekers.iter().all(|s| s.skill == "Design"));
    assert!(notifier.contains(NotificationLevel::Warning, messages::CONNECTION_FAILED));
}

#[tokio::test]
async fn test_search_server_error_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/seekers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let (api, notifier) = remote_api(&server);
    let err = api
        .provider()
        .search_seekers(&SearchCriteria::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Internal Server Error");
    assert!(notifier.contains(NotificationLevel::Error, messages::SEARCH_FAILED));
}

#[tokio::test]
async fn test_fallback_search_serves_demo_data() {
    let (api, notifier) = fallback_api();
    let criteria = SearchCriteria::new().with_location("Berlin");

    let seekers = api.provider().search_seekers(&criteria).await.unwrap();

    assert_eq!(seekers.len(), 3);
    assert_eq!(seekers[0].name, "Jane Smith");
    assert!(seekers.iter().all(|s| s.location == "Berlin"));
    assert!(notifier.contains(NotificationLevel::Warning, messages::DEMO_DATA));
}
