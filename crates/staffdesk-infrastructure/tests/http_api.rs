use serde_json::json;
use staffdesk_core::StaffdeskError;
use staffdesk_core::auth::AuthApi;
use staffdesk_core::employee::{EmployeeApi, EmployeeDraft, PageQuery, SortKey};
use staffdesk_core::session::{Identity, Role, Session};
use staffdesk_infrastructure::http::TokenProvider;
use staffdesk_infrastructure::{ApiClient, HttpAuthApi, HttpEmployeeApi};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn signed_in_session() -> watch::Receiver<Session> {
    let (tx, rx) = watch::channel(Session {
        identity: Some(Identity {
            token: "jwt-admin".to_string(),
            role: Role::Admin,
            username: "admin".to_string(),
        }),
        loading_phase: false,
    });
    // Keep the sender alive for the duration of the test process.
    std::mem::forget(tx);
    rx
}

fn employee_api(server: &MockServer) -> HttpEmployeeApi {
    let client = ApiClient::new(format!("{}/api", server.uri()), Duration::from_secs(5)).unwrap();
    let tokens: Arc<dyn TokenProvider> = Arc::new(signed_in_session());
    HttpEmployeeApi::new(client, tokens)
}

fn auth_api(server: &MockServer) -> HttpAuthApi {
    let client = ApiClient::new(format!("{}/api", server.uri()), Duration::from_secs(5)).unwrap();
    HttpAuthApi::new(client)
}

#[tokio::test]
async fn test_list_records_sends_query_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .and(query_param("page", "1"))
        .and(query_param("size", "9"))
        .and(query_param("sort", "joinedDate,desc"))
        .and(query_param("search", "alice"))
        .and(header("authorization", "Bearer jwt-admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"id": 1, "name": "Alice Smith", "department": "Engineering"},
                {"id": 2, "name": "Alice Jones"}
            ],
            "totalPages": 3,
            "totalElements": 20
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = PageQuery {
        search_term: "alice".to_string(),
        sort_key: Some(SortKey::desc("joinedDate")),
        page_index: 1,
        page_size: 9,
    };
    let page = employee_api(&server).list_records(&query).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "Alice Smith");
    assert_eq!(page.total_pages, 3);
}

#[tokio::test]
async fn test_list_records_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = employee_api(&server)
        .list_records(&PageQuery::first(9))
        .await
        .unwrap_err();

    assert_eq!(err, StaffdeskError::server(500, "boom"));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_list_records_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"content": [], "totalPages": 0}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/api", server.uri()), Duration::from_millis(200)).unwrap();
    let api = HttpEmployeeApi::new(client, Arc::new(signed_in_session()));

    let err = api.list_records(&PageQuery::first(9)).await.unwrap_err();
    assert_eq!(err, StaffdeskError::Timeout);
}

#[tokio::test]
async fn test_get_record_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = employee_api(&server).get_record(404).await.unwrap_err();
    assert_eq!(err, StaffdeskError::not_found("employee", "404"));
}

#[tokio::test]
async fn test_create_record_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .and(body_json(json!({"name": "Carol", "companyRole": "Designer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12, "name": "Carol", "companyRole": "Designer"
        })))
        .mount(&server)
        .await;

    let draft = EmployeeDraft {
        name: "Carol".to_string(),
        company_role: Some("Designer".to_string()),
        ..Default::default()
    };
    let created = employee_api(&server).create_record(&draft).await.unwrap();

    assert_eq!(created.id, 12);
}

#[tokio::test]
async fn test_update_record_forbidden_is_denial() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/employees/5"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = employee_api(&server)
        .update_record(5, &EmployeeDraft::default())
        .await
        .unwrap_err();

    assert_eq!(err, StaffdeskError::denied("edit"));
}

#[tokio::test]
async fn test_delete_record() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/employees/7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/employees/8"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let api = employee_api(&server);
    api.delete_record(7).await.unwrap();

    let err = api.delete_record(8).await.unwrap_err();
    assert!(err.is_authorization_denied());
    assert_eq!(
        err.user_message(),
        "Permission denied: Only Admins can delete employees"
    );
}

#[tokio::test]
async fn test_login_success_and_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"username": "admin", "password": "admin123"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "jwt", "role": "ADMIN"})),
        )
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid username or password"))
        .mount(&server)
        .await;

    let api = auth_api(&server);
    let response = api.login("admin", "admin123").await.unwrap();
    assert_eq!(response.token, "jwt");
    assert_eq!(response.role, "ADMIN");

    let err = api.login("admin", "wrong").await.unwrap_err();
    assert_eq!(err, StaffdeskError::InvalidCredentials);
}

#[tokio::test]
async fn test_password_reset_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/forgot-password"))
        .and(body_json(json!({"email": "nobody@example.com"})))
        .respond_with(ResponseTemplate::new(404).set_body_string("No user found with this email"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/reset-password"))
        .and(body_json(json!({"token": "stale", "newPassword": "n3w"})))
        .respond_with(ResponseTemplate::new(400).set_body_string("Reset token has expired"))
        .mount(&server)
        .await;

    let api = auth_api(&server);

    let err = api
        .request_password_reset("nobody@example.com")
        .await
        .unwrap_err();
    assert_eq!(err, StaffdeskError::not_found("user", "nobody@example.com"));

    let err = api.reset_password("stale", "n3w").await.unwrap_err();
    assert_eq!(
        err,
        StaffdeskError::InvalidOrExpiredToken("Reset token has expired".to_string())
    );
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on this port once the listener is dropped.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = ApiClient::new(format!("http://{addr}/api"), Duration::from_secs(2)).unwrap();
    let api = HttpAuthApi::new(client);

    let err = api.login("a", "b").await.unwrap_err();
    assert!(matches!(err, StaffdeskError::Network(_)));
}
