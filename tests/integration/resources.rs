//! Resource CRUD against a mock server.

use crate::mock_server::{unreachable_client, MockServerFixture};
use bundleup::{Error, ErrorKind};
use mockito::Matcher;
use serde_json::json;

#[test]
fn list_returns_upstream_array() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json(
        "GET",
        "/v1/connections",
        200,
        r#"[{"id":"1","name":"GitHub","status":"active"},{"id":"2","name":"Slack"}]"#,
    );

    let client = fixture.client();
    let connections = client.connections().list().expect("list should succeed");

    mock.assert();
    assert_eq!(connections.len(), 2);
    assert_eq!(connections[0].id.as_deref(), Some("1"));
    assert_eq!(connections[0].status.as_deref(), Some("active"));
    assert_eq!(connections[1].name.as_deref(), Some("Slack"));
}

#[test]
fn list_with_params_passes_query_through() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("GET", "/v1/integrations")
        .match_query(Matcher::UrlEncoded("category".into(), "crm".into()))
        .with_status(200)
        .with_body(r#"[{"id":"i1","slug":"hubspot","category":"crm"}]"#)
        .create();

    let client = fixture.client();
    let integrations = client
        .integrations()
        .list_with_params(&[("category", "crm")])
        .unwrap();

    mock.assert();
    assert_eq!(integrations[0].slug.as_deref(), Some("hubspot"));
}

#[test]
fn create_posts_json_and_returns_entity() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("POST", "/v1/connections")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "x"})))
        .with_status(201)
        .with_body(r#"{"id":"1","name":"x"}"#)
        .create();

    let client = fixture.client();
    let created = client.connections().create(&json!({"name": "x"})).unwrap();

    mock.assert();
    assert_eq!(created.id.as_deref(), Some("1"));
    assert_eq!(created.name.as_deref(), Some("x"));
}

#[test]
fn create_rejects_non_object_without_calling_server() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("POST", "/v1/webhooks")
        .with_status(200)
        .with_body("{}")
        .expect(0)
        .create();

    let client = fixture.client();
    let err = client.webhooks().create(&json!(["not", "an", "object"])).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    mock.assert();
}

#[test]
fn retrieve_fetches_single_entity() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json(
        "GET",
        "/v1/webhooks/w1",
        200,
        r#"{"id":"w1","url":"https://example.com/hook","events":["connection.created"],"active":true,"region":"eu"}"#,
    );

    let client = fixture.client();
    let hook = client.webhooks().retrieve("w1").unwrap();

    mock.assert();
    assert_eq!(hook.active, Some(true));
    assert_eq!(hook.extra["region"], "eu");
}

#[test]
fn retrieve_missing_is_not_found() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_json("GET", "/v1/connections/missing", 404, r#"{"error":"Not found"}"#);

    let client = fixture.client();
    let err = client.connections().retrieve("missing").unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.response_body(), Some(r#"{"error":"Not found"}"#));
    assert!(err.to_string().contains("connections missing"));
}

#[test]
fn update_uses_patch() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("PATCH", "/v1/connections/1")
        .match_body(Matcher::Json(json!({"name": "Renamed"})))
        .with_status(200)
        .with_body(r#"{"id":"1","name":"Renamed","status":"active"}"#)
        .create();

    let client = fixture.client();
    let updated = client
        .connections()
        .update("1", &json!({"name": "Renamed"}))
        .unwrap();

    mock.assert();
    assert_eq!(updated.name.as_deref(), Some("Renamed"));
    assert_eq!(updated.status.as_deref(), Some("active"));
}

#[test]
fn delete_accepts_empty_204() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_empty("DELETE", "/v1/connections/1", 204);

    let client = fixture.client();
    client.connections().delete("1").unwrap();
    mock.assert();
}

#[test]
fn delete_discards_json_body() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json("DELETE", "/v1/webhooks/w1", 200, r#"{"deleted":true}"#);

    let client = fixture.client();
    client.webhooks().delete("w1").unwrap();
    mock.assert();
}

#[test]
fn delete_ignores_non_json_body() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("DELETE", "/v1/connections/1")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("OK")
        .create();

    let client = fixture.client();
    client.connections().delete("1").unwrap();
    mock.assert();
}

#[test]
fn status_codes_map_to_error_kinds() {
    let cases = [
        (401usize, ErrorKind::Authentication),
        (404, ErrorKind::NotFound),
        (429, ErrorKind::RateLimit),
        (400, ErrorKind::Api),
        (403, ErrorKind::Api),
        (500, ErrorKind::Api),
        (503, ErrorKind::Api),
    ];

    for (status, expected) in cases {
        let mut fixture = MockServerFixture::new();
        let _mock = fixture.mock_json("GET", "/v1/integrations", status, r#"{"error":"nope"}"#);

        let err = fixture.client().integrations().list().unwrap_err();
        assert_eq!(err.kind(), expected, "status {}", status);
        assert_eq!(err.status_code(), Some(status as u16));
        assert!(err.is_api_error());
    }
}

#[test]
fn unauthorized_on_every_operation() {
    let mut fixture = MockServerFixture::new();
    let _mocks: Vec<_> = ["GET", "POST", "PATCH", "DELETE"]
        .into_iter()
        .map(|method| {
            fixture
                .server
                .mock(method, Matcher::Any)
                .with_status(401)
                .with_body(r#"{"error":"Unauthorized"}"#)
                .create()
        })
        .collect();
    let client = fixture.client();
    let conns = client.connections();

    let results = [
        conns.list().map(|_| ()),
        conns.create(&json!({"name": "x"})).map(|_| ()),
        conns.retrieve("1").map(|_| ()),
        conns.update("1", &json!({})).map(|_| ()),
        conns.delete("1"),
    ];
    for result in results {
        assert!(matches!(result, Err(Error::Authentication(_))));
    }
}

#[test]
fn malformed_success_body_is_api_error() {
    let mut fixture = MockServerFixture::new();
    let _mock = fixture.mock_json("GET", "/v1/connections/1", 200, "<html>oops</html>");

    let err = fixture.client().connections().retrieve("1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status_code(), Some(200));
    assert_eq!(err.response_body(), Some("<html>oops</html>"));
}

#[test]
fn transport_failure_has_no_status() {
    let err = unreachable_client().connections().list().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status_code(), None);
    assert!(err.to_string().contains("Failed to list connections"));
}
