use std::time::Duration;

use fake::{
    Fake,
    faker::internet::en::{Password, SafeEmail},
};
use remote_auth_adapters::http::{HttpClientError, ReqwestHttpClient};
use remote_auth_core::{
    AccountModel, AuthenticationParams, HttpPostClient, HttpPostParams, HttpResponse,
    HttpStatusCode,
};
use secrecy::{ExposeSecret, Secret};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn mock_authentication() -> AuthenticationParams {
    let email: String = SafeEmail().fake();
    let password: String = Password(8..16).fake();
    AuthenticationParams::new(email, Secret::new(password))
}

fn client() -> ReqwestHttpClient {
    ReqwestHttpClient::new(reqwest::Client::new())
}

async fn post(
    client: &ReqwestHttpClient,
    url: String,
    body: AuthenticationParams,
) -> Result<HttpResponse<AccountModel>, HttpClientError> {
    client.post(HttpPostParams::new(url, Some(body))).await
}

#[tokio::test]
async fn sends_json_body_to_url_and_decodes_success() {
    let server = MockServer::start().await;
    let params = mock_authentication();
    let password = params.password.expose_secret().clone();

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "email": params.email, "password": password })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "tok-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let response = post(&client(), format!("{}/login", server.uri()), params)
        .await
        .unwrap();

    assert_eq!(response.status_code, HttpStatusCode::Ok);
    assert_eq!(response.body, Some(AccountModel::new("tok-1")));
}

#[tokio::test]
async fn error_statuses_are_returned_as_responses() {
    let server = MockServer::start().await;

    for (code, expected) in [
        (400u16, HttpStatusCode::BadRequest),
        (401, HttpStatusCode::Unauthorized),
        (404, HttpStatusCode::NotFound),
        (500, HttpStatusCode::ServerError),
    ] {
        server.reset().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(code).set_body_json(json!({ "error": "request failed" })),
            )
            .mount(&server)
            .await;

        let response = post(&client(), server.uri(), mock_authentication())
            .await
            .unwrap();

        assert_eq!(response.status_code, expected);
        assert_eq!(response.body, None);
    }
}

#[tokio::test]
async fn empty_body_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = post(&client(), server.uri(), mock_authentication())
        .await
        .unwrap();

    assert_eq!(response.status_code, HttpStatusCode::Other(204));
    assert_eq!(response.body, None);
}

#[tokio::test]
async fn other_2xx_with_foreign_body_is_a_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;

    let response = post(&client(), server.uri(), mock_authentication())
        .await
        .unwrap();

    assert_eq!(response.status_code, HttpStatusCode::Other(201));
    assert_eq!(response.body, None);
}

#[tokio::test]
async fn undecodable_success_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = post(&client(), server.uri(), mock_authentication()).await;

    assert!(matches!(result, Err(HttpClientError::Decode(_))));
}

#[tokio::test]
async fn timeout_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new(
        reqwest::Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap(),
    );

    let result = post(&client, server.uri(), mock_authentication()).await;

    match result {
        Err(HttpClientError::Request(e)) => assert!(e.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_a_request_error() {
    let result = post(
        &client(),
        "http://127.0.0.1:1/login".to_string(),
        mock_authentication(),
    )
    .await;

    assert!(matches!(result, Err(HttpClientError::Request(_))));
}
