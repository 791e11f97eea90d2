use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use tempfile::TempDir;

fn weightfetch() -> Command {
    Command::cargo_bin("weightfetch").unwrap()
}

/// Minimal hub stand-in: answers the repository metadata request with a
/// three-component file list and serves `{}` for every file download.
/// `Connection: close` keeps the client from pooling connections.
fn spawn_stub_hub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };

            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let request = String::from_utf8_lossy(&request);
            let path = request.split_whitespace().nth(1).unwrap_or("/");

            let body = if path.starts_with("/api/models/") {
                concat!(
                    r#"{"id":"test/stub-model","siblings":["#,
                    r#"{"rfilename":"vae/config.json"},"#,
                    r#"{"rfilename":"transformer/config.json"},"#,
                    r#"{"rfilename":"scheduler/config.json"}"#,
                    r#"]}"#
                )
            } else {
                "{}"
            };

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

#[test]
fn help_describes_the_tool() {
    weightfetch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Download model weights"));
}

#[test]
fn complete_repository_downloads_and_verifies() {
    let endpoint = spawn_stub_hub();
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let cache_dir = work.path().join("weights");

    weightfetch()
        .current_dir(work.path())
        .env("HOME", home.path())
        .env("HF_ENDPOINT", &endpoint)
        .args(["--repo", "test/stub-model"])
        .arg("--dir")
        .arg(&cache_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("All weights verified successfully!"))
        .stdout(predicate::str::contains("Weight download completed!"));

    for component in ["vae", "transformer", "scheduler"] {
        assert!(cache_dir.join(component).join("config.json").exists());
    }
}

#[test]
fn download_failure_exits_nonzero_with_cause() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    // Nothing listens here, so the metadata request fails immediately. The
    // trailing colon asserts the underlying client error follows the context.
    weightfetch()
        .current_dir(work.path())
        .env("HOME", home.path())
        .env("HF_ENDPOINT", "http://127.0.0.1:9")
        .args(["--repo", "someone/some-model", "--dir", "weights"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error downloading weights: Failed to fetch repository info:",
        ));
}

#[test]
fn cache_directory_is_created_before_download() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let cache_dir = work.path().join("weights");
    assert!(!cache_dir.exists());

    weightfetch()
        .current_dir(work.path())
        .env("HOME", home.path())
        .env("HF_ENDPOINT", "http://127.0.0.1:9")
        .args(["--repo", "someone/some-model"])
        .arg("--dir")
        .arg(&cache_dir)
        .assert()
        .failure();

    // The directory is created ahead of the transfer, even when it fails.
    assert!(cache_dir.exists());
}
