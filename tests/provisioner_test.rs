use dependency_parsing::{Asset, AssetProvisioner, AssetStatus, DepParseError};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const JAR_BODY: &[u8] = b"PK\x03\x04 not really a jar";
const WRONG_SHA256: &str = "5b0ba0e9a6bbcd8d0b5d9c6e5ac4ab21c69f15e21cab2ed0b3e1e0e7b2d6b4b7";

/// Minimal HTTP/1.1 responder: `/missing` is a 404, anything else returns
/// `JAR_BODY`. Counts every request it answers.
async fn serve() -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let counter = Arc::clone(&counter);
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                counter.fetch_add(1, Ordering::SeqCst);

                let head = String::from_utf8_lossy(&request);
                let response = if head.starts_with("GET /missing") {
                    b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                        .to_vec()
                } else {
                    let mut ok = format!(
                        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                        JAR_BODY.len()
                    )
                    .into_bytes();
                    ok.extend_from_slice(JAR_BODY);
                    ok
                };
                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, hits)
}

// local responder only, never through a system proxy
fn provisioner(force: bool) -> AssetProvisioner {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    AssetProvisioner::new(force).with_client(client)
}

fn sha256_of_body() -> String {
    use sha2::{Digest, Sha256};
    format!("{:x}", Sha256::digest(JAR_BODY))
}

#[tokio::test]
async fn test_existing_assets_are_not_fetched() {
    let (addr, hits) = serve().await;
    let temp = TempDir::new().unwrap();
    let parser = temp.path().join("stanford-parser.jar");
    let models = temp.path().join("stanford-parser-3.9.1-models.jar");
    std::fs::write(&parser, "local").unwrap();
    std::fs::write(&models, "local").unwrap();

    let assets = vec![
        Asset::new("parser jar", &parser, format!("http://{}/parser.jar", addr)),
        Asset::new("models jar", &models, format!("http://{}/models.jar", addr)),
    ];
    let reports = provisioner(false).ensure(&assets).await.unwrap();

    assert!(reports.iter().all(|r| r.status == AssetStatus::Present));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(std::fs::read_to_string(&parser).unwrap(), "local");
}

#[tokio::test]
async fn test_missing_asset_is_downloaded() {
    let (addr, hits) = serve().await;
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("assets/nested/stanford-parser.jar");

    let assets = vec![Asset::new(
        "parser jar",
        &target,
        format!("http://{}/parser.jar", addr),
    )];
    let reports = provisioner(false).ensure(&assets).await.unwrap();

    assert_eq!(
        reports[0].status,
        AssetStatus::Downloaded {
            bytes: JAR_BODY.len() as u64
        }
    );
    assert_eq!(std::fs::read(&target).unwrap(), JAR_BODY);
    assert!(!temp.path().join("assets/nested/stanford-parser.jar.part").exists());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_force_redownloads() {
    let (addr, hits) = serve().await;
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("stanford-parser.jar");
    std::fs::write(&target, "stale").unwrap();

    let assets = vec![Asset::new(
        "parser jar",
        &target,
        format!("http://{}/parser.jar", addr),
    )];
    provisioner(true).ensure(&assets).await.unwrap();

    assert_eq!(std::fs::read(&target).unwrap(), JAR_BODY);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_http_error_leaves_no_file() {
    let (addr, _) = serve().await;
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("stanford-parser.jar");

    let assets = vec![Asset::new(
        "parser jar",
        &target,
        format!("http://{}/missing", addr),
    )];
    let result = provisioner(false).ensure(&assets).await;

    assert!(matches!(
        result,
        Err(DepParseError::HttpStatus { status: 404, .. })
    ));
    assert!(!target.exists());
}

#[tokio::test]
async fn test_checksum_verification() {
    let (addr, _) = serve().await;
    let temp = TempDir::new().unwrap();

    let good = temp.path().join("good.jar");
    let mut asset = Asset::new("parser jar", &good, format!("http://{}/parser.jar", addr));
    asset.sha256 = Some(sha256_of_body());
    provisioner(false).ensure(&[asset]).await.unwrap();
    assert!(good.exists());

    let bad = temp.path().join("bad.jar");
    let mut asset = Asset::new("parser jar", &bad, format!("http://{}/parser.jar", addr));
    asset.sha256 = Some(WRONG_SHA256.to_string());
    let result = provisioner(false).ensure(&[asset]).await;
    assert!(matches!(result, Err(DepParseError::Checksum { .. })));
    assert!(!bad.exists());
    assert!(!temp.path().join("bad.jar.part").exists());
}

#[tokio::test]
async fn test_unreachable_host_is_download_error() {
    // bind then drop so the port is closed
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let temp = TempDir::new().unwrap();
    let target = temp.path().join("stanford-parser.jar");
    let assets = vec![Asset::new(
        "parser jar",
        &target,
        format!("http://{}/parser.jar", addr),
    )];
    let result = provisioner(false).ensure(&assets).await;

    assert!(matches!(result, Err(DepParseError::Download { .. })));
    assert!(!target.exists());
}
