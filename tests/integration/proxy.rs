//! Proxy client against a mock server.

use crate::mock_server::{unreachable_client, MockServerFixture, CONNECTION_ID};
use bundleup::{Error, ErrorKind};
use mockito::Matcher;
use serde_json::{json, Value};
use std::collections::HashMap;

#[test]
fn get_forwards_with_connection_header() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("GET", "/users")
        .match_header("authorization", "Bearer test-api-key")
        .match_header("bu-connection-id", CONNECTION_ID)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(r#"{"users":[{"id":"1"}]}"#)
        .create();

    let client = fixture.client();
    let proxy = client.proxy(CONNECTION_ID).unwrap();

    // Leading slash is optional.
    let body = proxy.get("users", None).unwrap();

    mock.assert();
    assert_eq!(body["users"][0]["id"], "1");
}

#[test]
fn verbs_with_bodies_are_forwarded() {
    let mut fixture = MockServerFixture::new();
    let payload = json!({"title": "Bug", "labels": ["p1"]});
    let mocks: Vec<_> = ["POST", "PUT", "PATCH"]
        .into_iter()
        .map(|method| {
            fixture
                .server
                .mock(method, "/repos/acme/app/issues")
                .match_body(Matcher::Json(payload.clone()))
                .with_status(200)
                .with_body(format!(r#"{{"method":"{}"}}"#, method))
                .create()
        })
        .collect();

    let client = fixture.client();
    let proxy = client.proxy(CONNECTION_ID).unwrap();

    let posted = proxy.post("/repos/acme/app/issues", Some(&payload), None).unwrap();
    let put = proxy.put("/repos/acme/app/issues", Some(&payload), None).unwrap();
    let patched = proxy.patch("/repos/acme/app/issues", Some(&payload), None).unwrap();

    for mock in &mocks {
        mock.assert();
    }
    assert_eq!(posted["method"], "POST");
    assert_eq!(put["method"], "PUT");
    assert_eq!(patched["method"], "PATCH");
}

#[test]
fn caller_headers_take_precedence() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("POST", "/upload")
        .match_header("content-type", "text/plain")
        .match_header("x-request-id", "req-42")
        .match_header("bu-connection-id", CONNECTION_ID)
        .with_status(200)
        .with_body("{}")
        .create();

    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "text/plain".to_string());
    headers.insert("X-Request-Id".to_string(), "req-42".to_string());

    let client = fixture.client();
    client
        .proxy(CONNECTION_ID)
        .unwrap()
        .post("/upload", None, Some(&headers))
        .unwrap();

    mock.assert();
}

#[test]
fn delete_with_empty_body_returns_null() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_empty("DELETE", "/users/1", 204);

    let client = fixture.client();
    let body = client.proxy(CONNECTION_ID).unwrap().delete("/users/1", None).unwrap();

    mock.assert();
    assert_eq!(body, Value::Null);
}

#[test]
fn delete_with_json_body_returns_it() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json("DELETE", "/users/1", 200, r#"{"deleted":true}"#);

    let client = fixture.client();
    let body = client.proxy(CONNECTION_ID).unwrap().delete("/users/1", None).unwrap();

    mock.assert();
    assert_eq!(body, json!({"deleted": true}));
}

#[test]
fn upstream_errors_are_classified() {
    let cases = [
        (401usize, ErrorKind::Authentication),
        (404, ErrorKind::NotFound),
        (429, ErrorKind::RateLimit),
        (502, ErrorKind::Api),
    ];
    for (status, expected) in cases {
        let mut fixture = MockServerFixture::new();
        let _mock = fixture.mock_json("GET", "/users", status, r#"{"message":"upstream"}"#);

        let client = fixture.client();
        let err = client.proxy(CONNECTION_ID).unwrap().get("/users", None).unwrap_err();
        assert_eq!(err.kind(), expected, "status {}", status);
        assert_eq!(err.response_body(), Some(r#"{"message":"upstream"}"#));
        assert!(err.to_string().contains("Proxy GET /users failed"));
    }
}

#[test]
fn empty_path_never_reaches_server() {
    let client = unreachable_client();
    let err = client.proxy(CONNECTION_ID).unwrap().get("  ", None).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn transport_failure_is_api_error_without_status() {
    let client = unreachable_client();
    let err = client.proxy(CONNECTION_ID).unwrap().get("/users", None).unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.status_code(), None);
}
