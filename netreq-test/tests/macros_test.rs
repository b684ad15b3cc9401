use netreq::{Error, HttpClient, HttpClientOption};
use std::time::Duration;
use netreq_test::macros::{NetworkResponse, User};
use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 起一个只应答一次的本地 HTTP 服务，返回其地址
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await.unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{}", addr)
}

fn assert_codable<T: netreq::Codable>() {}

#[test]
fn derive_codable_implements_marker() {
    assert_codable::<NetworkResponse>();
    assert_codable::<User>();
    assert_codable::<netreq_test::macros::Page<String>>();
}

#[tokio::test]
async fn generated_fetch_decodes_into_struct() {
    let endpoint = serve_once("200 OK", r#"{"id":7,"name":"Ferris","args":{"q":"rust"}}"#).await;
    let client = HttpClient::with_endpoint(&endpoint).unwrap();

    let user = User::fetch_with(&client).await.unwrap();
    assert_eq!(
        user,
        User {
            id: 7,
            name: "Ferris".into(),
            args: Some(netreq_test::Args { q: "rust".into() }),
        }
    );
}

#[tokio::test]
async fn undecodable_body_is_invalid_data() {
    let endpoint = serve_once("200 OK", r#"{"unexpected":true}"#).await;
    let client = HttpClient::with_endpoint(&endpoint).unwrap();

    let err = User::fetch_with(&client).await.unwrap_err();
    match err {
        Error::InvalidData { url, body_snippet, .. } => {
            assert_eq!(url, format!("{}/users/1", endpoint));
            assert_eq!(body_snippet, r#"{"unexpected":true}"#);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let endpoint = serve_once("404 Not Found", r#"{"error":"missing"}"#).await;
    let client = HttpClient::with_endpoint(&endpoint).unwrap();

    let err = User::fetch_with(&client).await.unwrap_err();
    match err {
        Error::Http { status, body_snippet, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body_snippet, r#"{"error":"missing"}"#);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn default_operation_ignores_client_endpoint() {
    // 默认地址 https://api/get 是绝对地址，不会落到 endpoint 指向的本地服务上
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    let option = HttpClientOption::builder()
        .endpoint(&endpoint)
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let client = HttpClient::new(option).unwrap();

    let err = NetworkResponse::get_request_with(&client).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "unexpected error: {err:?}");

    let accepted = tokio::time::timeout(Duration::from_millis(100), listener.accept()).await;
    assert!(accepted.is_err(), "local endpoint should not receive the request");
}

#[tokio::test]
async fn shared_client_operation_reaches_default_url() {
    // 共享客户端同样请求 https://api/get；测试环境下该主机不提供此接口
    let err = NetworkResponse::get_request().await.unwrap_err();
    assert!(
        matches!(err, Error::Transport(_) | Error::Http { .. } | Error::InvalidData { .. }),
        "request was not sent: {err:?}"
    );
}

#[test]
fn generated_signatures() {
    // 只检查签名能通过类型检查
    fn _shared() -> impl std::future::Future<Output = netreq::Result<NetworkResponse>> {
        NetworkResponse::get_request()
    }
    fn _with(client: &HttpClient) -> impl std::future::Future<Output = netreq::Result<NetworkResponse>> + '_ {
        NetworkResponse::get_request_with(client)
    }
}
