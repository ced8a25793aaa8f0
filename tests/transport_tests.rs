//! Tests that drive the client through a caller-supplied transport.
//!
//! Run with: cargo test --test transport_tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;
use http::header::{ACCEPT, AUTHORIZATION};
use serde_json::json;

use moneytree::client::HttpTransport;
use moneytree::prelude::*;
use moneytree::TransportError;

const BASE_URL: &str = "https://jp-api.example.com";
const CLIENT_SECRET: &str = "very-secret";

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: http::Method,
    uri: String,
    authorization: Option<String>,
    accept: Option<String>,
}

enum Canned {
    Reply(u16, Vec<u8>),
    Fail(TransportError),
}

/// Transport that records every request and replays canned responses in order.
#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    replies: Mutex<VecDeque<Canned>>,
}

impl RecordingTransport {
    fn reply_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Canned::Reply(status, body.to_string().into_bytes()));
        self
    }

    fn fail(&self, error: TransportError) -> &Self {
        self.replies.lock().unwrap().push_back(Canned::Fail(error));
        self
    }

    fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for RecordingTransport {
    fn send(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> BoxFuture<'_, std::result::Result<http::Response<Vec<u8>>, TransportError>> {
        let header = |name: http::header::HeaderName| {
            request
                .headers()
                .get(name)
                .and_then(|v: &http::HeaderValue| v.to_str().ok())
                .map(str::to_owned)
        };
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method().clone(),
            uri: request.uri().to_string(),
            authorization: header(AUTHORIZATION),
            accept: header(ACCEPT),
        });

        let next = self.replies.lock().unwrap().pop_front();
        Box::pin(async move {
            match next {
                Some(Canned::Reply(status, body)) => Ok(http::Response::builder()
                    .status(status)
                    .body(body)
                    .unwrap()),
                Some(Canned::Fail(error)) => Err(error),
                None => Err(TransportError::new("no canned response left")),
            }
        })
    }
}

fn create_client(transport: Arc<RecordingTransport>) -> MoneytreeClient {
    MoneytreeClient::with_transport(Config::new(BASE_URL, "client-id", CLIENT_SECRET), transport)
        .expect("Failed to create client")
}

#[tokio::test]
async fn test_supplied_transport_handles_every_call() {
    let transport = Arc::new(RecordingTransport::default());
    transport
        .reply_json(200, json!({"profile": {"moneytree_id": "mt-1"}}))
        .reply_json(200, json!({"accounts": []}));

    let client = create_client(transport.clone());
    let token = AccessToken::new("abc");

    let profile = client.profile().get(&token).await.unwrap();
    assert_eq!(profile.moneytree_id, "mt-1");
    let accounts = client
        .corporate_accounts()
        .list(&token, Some(PageQuery::new().per_page(50)))
        .await
        .unwrap();
    assert!(accounts.is_empty());

    let recorded = transport.recorded();
    assert_eq!(recorded.len(), 2);

    assert_eq!(recorded[0].method, http::Method::GET);
    assert_eq!(recorded[0].uri, "https://jp-api.example.com/link/profile.json");
    assert_eq!(recorded[0].authorization.as_deref(), Some("Bearer abc"));
    assert_eq!(recorded[0].accept.as_deref(), Some("application/json"));

    assert_eq!(
        recorded[1].uri,
        "https://jp-api.example.com/link/corporate/accounts.json?per_page=50"
    );
}

#[tokio::test]
async fn test_oauth_credentials_sent_but_not_leaked() {
    let transport = Arc::new(RecordingTransport::default());
    transport.reply_json(
        401,
        json!({"error": "invalid_client", "error_description": "Client authentication failed"}),
    );

    let client = create_client(transport.clone());
    let err = client
        .oauth()
        .refresh(&RefreshToken::new("refresh-me"))
        .await
        .unwrap_err();

    let recorded = transport.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].method, http::Method::POST);
    assert!(recorded[0].uri.contains("client_secret=very-secret"));
    assert!(recorded[0].uri.contains("refresh_token=refresh-me"));
    assert!(recorded[0].authorization.is_none());

    assert!(err.is_unauthorized());
    let rendered = format!("{} {:?}", err, err);
    assert!(!rendered.contains(CLIENT_SECRET));
    assert!(!rendered.contains("refresh-me"));
}

#[tokio::test]
async fn test_transport_failure_is_classified() {
    let transport = Arc::new(RecordingTransport::default());
    transport.fail(TransportError::timeout("deadline elapsed"));

    let client = create_client(transport.clone());
    let err = client
        .oauth()
        .exchange_code("one-time-code", "https://example.com/cb")
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(!err.is_api());
    match &err {
        Error::Transport { url, source } => {
            assert!(source.is_timeout());
            assert!(url.starts_with("https://jp-api.example.com/oauth/token.json?"));
            assert!(url.contains("client_secret=REDACTED"));
            assert!(url.contains("code=REDACTED"));
            assert!(url.contains("client_id=client-id"));
        }
        other => panic!("Expected Transport error, got {:?}", other),
    }
    assert!(!err.to_string().contains(CLIENT_SECRET));
}

#[tokio::test]
async fn test_clones_share_transport_concurrently() {
    let transport = Arc::new(RecordingTransport::default());
    transport
        .reply_json(200, json!({"institutions": []}))
        .reply_json(200, json!({"institutions": []}));

    let client = create_client(transport.clone());
    let other = client.clone();
    let token = AccessToken::new("abc");

    let first = client.institutions();
    let second = other.institutions();
    let (a, b) = tokio::join!(first.list(&token, None), second.list(&token, None));

    assert!(a.unwrap().is_empty());
    assert!(b.unwrap().is_empty());
    assert_eq!(transport.recorded().len(), 2);
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let transport = Arc::new(RecordingTransport::default());
    transport.reply_json(200, json!({"point_accounts": []}));

    let client = MoneytreeClient::with_transport(
        Config::new("https://jp-api.example.com/", "client-id", CLIENT_SECRET),
        transport.clone(),
    )
    .unwrap();

    client
        .point_accounts()
        .list(&AccessToken::new("abc"), None)
        .await
        .unwrap();

    assert_eq!(
        transport.recorded()[0].uri,
        "https://jp-api.example.com/link/point_accounts.json"
    );
}

#[test]
fn test_invalid_config_rejected_with_custom_transport() {
    let err = MoneytreeClient::with_transport(
        Config::new(BASE_URL, "client-id", "   "),
        RecordingTransport::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::EmptyClientSecret)));

    let err = MoneytreeClient::with_transport(
        Config::new("ftp://example.com", "client-id", CLIENT_SECRET),
        RecordingTransport::default(),
    )
    .unwrap_err();
    assert!(err.is_config());
}
