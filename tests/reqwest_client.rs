//! 原生 reqwest 客户端对真实 socket 的端到端测试

#![cfg(not(target_arch = "wasm32"))]

use gamepass::request::ReqwestHttpClient;
use gamepass::shared::protocol::LoginRequest;
use gamepass::{ApiConfig, GamePassApi, RequestError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 接受一个连接，返回收到的原始请求文本，并回写固定响应
async fn serve_once(listener: TcpListener, status_line: &str, body: &str) -> String {
    let (mut socket, _) = listener.accept().await.unwrap();

    let mut received = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        received.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&received).to_string();
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    k.eq_ignore_ascii_case("content-length")
                        .then(|| v.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if received.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    socket.shutdown().await.ok();

    String::from_utf8_lossy(&received).to_string()
}

#[tokio::test]
async fn test_login_rejection_over_the_wire() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let host = format!("http://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(serve_once(
        listener,
        "401 Unauthorized",
        r#"{"message":"Invalid credentials"}"#,
    ));

    let api = GamePassApi::new(ApiConfig::new(&host), ReqwestHttpClient::new());
    let err = api
        .login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RequestError::Status {
            status: 401,
            message: "Invalid credentials".into()
        }
    );

    let raw = server.await.unwrap();
    let lower = raw.to_ascii_lowercase();
    assert!(raw.starts_with("POST /api/auth/login HTTP/1.1"));
    assert!(lower.contains("content-type: application/json"));
    assert!(!lower.contains("authorization:"));
    assert!(raw.ends_with(r#"{"email":"ada@example.com","password":"wrong"}"#));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let host = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let api = GamePassApi::new(ApiConfig::new(&host), ReqwestHttpClient::new());
    let err = api.overall_leaderboard("tok").await.unwrap_err();

    assert!(matches!(err, RequestError::Transport(_)));
    assert_eq!(err.status(), None);
}
