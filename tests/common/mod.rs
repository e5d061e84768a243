//! Shared test doubles and fixtures for workflow tests.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use class_declarer::artifact::ContractArtifact;
use class_declarer::blockchain::{DeclareError, DeclareReport, SigningAccount};

/// Account stub that records every declaration it receives.
#[allow(dead_code)]
pub struct RecordingAccount {
    outcome: Result<DeclareReport, String>,
    calls: Mutex<Vec<PathBuf>>,
}

#[allow(dead_code)]
impl RecordingAccount {
    /// Accept every declaration with the given class hash.
    pub fn accepting(class_hash: &str) -> Self {
        Self {
            outcome: Ok(DeclareReport::new("0x7a11", class_hash)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Reject every declaration with the given message.
    pub fn rejecting(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn declared_paths(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SigningAccount for RecordingAccount {
    async fn declare(&self, artifact: &ContractArtifact) -> Result<DeclareReport, DeclareError> {
        self.calls.lock().unwrap().push(artifact.path().to_path_buf());
        match &self.outcome {
            Ok(report) => Ok(report.clone()),
            Err(message) => Err(DeclareError::Rejected(message.clone())),
        }
    }
}

/// Write a minimal Sierra-shaped document under `dir` at `relative`.
#[allow(dead_code)]
pub fn write_artifact(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, r#"{ "sierra_program": ["0x1", "0x2", "0x3"] }"#).unwrap();
    path
}

/// Captured output as text.
#[allow(dead_code)]
pub fn output_text(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

/// Write a Sierra contract class the Starknet account can flatten and hash.
#[allow(dead_code)]
pub fn write_sierra_class(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    let class = json!({
        "sierra_program": ["0x1", "0x2", "0x3"],
        "sierra_program_debug_info": {
            "type_names": [],
            "libfunc_names": [],
            "user_func_names": []
        },
        "contract_class_version": "0.1.0",
        "entry_points_by_type": {
            "EXTERNAL": [],
            "L1_HANDLER": [],
            "CONSTRUCTOR": []
        },
        "abi": []
    });
    fs::write(&path, class.to_string()).unwrap();
    path
}

/// How the mock node answers one JSON-RPC method call.
#[allow(dead_code)]
pub enum RpcReply {
    Result(Value),
    Error { code: i64, message: String },
    /// Never answer; the connection stays open until the test ends.
    Hang,
}

/// Start a programmable JSON-RPC node on an ephemeral port.
///
/// Every method name received is recorded in `calls`.
#[allow(dead_code)]
pub async fn start_json_rpc_backend<F>(f: F) -> (SocketAddr, Arc<Mutex<Vec<String>>>)
where
    F: Fn(&str) -> RpcReply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let recorded = calls.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    let recorded = recorded.clone();
                    tokio::spawn(async move {
                        serve_connection(socket, f.as_ref(), &recorded).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, calls)
}

async fn serve_connection<F>(mut socket: TcpStream, f: &F, calls: &Mutex<Vec<String>>)
where
    F: Fn(&str) -> RpcReply,
{
    let Some(body) = read_request_body(&mut socket).await else {
        return;
    };
    let request: Value = serde_json::from_slice(&body).unwrap();
    let method = request["method"].as_str().unwrap_or_default().to_string();
    let id = request["id"].clone();
    calls.lock().unwrap().push(method.clone());

    let payload = match f(&method) {
        RpcReply::Result(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        RpcReply::Error { code, message } => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": code, "message": message }
        }),
        RpcReply::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            return;
        }
    };

    let body = payload.to_string();
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

async fn read_request_body(socket: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length: usize = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some(buf[header_end..header_end + content_length].to_vec())
}
