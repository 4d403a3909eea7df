use std::time::Duration;

use anyhow::{Result, anyhow};
use gamebox_server::config::{Parser, ServerConfig};
use rand::Rng as _;
use tempfile::TempDir;

fn random_port() -> Result<u16> {
    let mut rng = rand::rng();

    let mut retries = 3;
    while retries > 0 {
        let port: u16 = rng.random_range(3030..4030);
        let addr: std::net::SocketAddr = format!("127.0.0.1:{}", port).parse()?;
        match std::net::TcpStream::connect_timeout(&addr, std::time::Duration::from_millis(100)) {
            Err(e) if e.kind() == std::io::ErrorKind::ConnectionRefused => return Ok(port),
            Err(_) => retries -= 1,
            Ok(_) => retries -= 1,
        }
    }

    Err(anyhow!("Could not find a free port"))
}

pub struct ConfigGuard {
    #[allow(dead_code)]
    data_dir: TempDir,
}

pub fn prepare_env(test_name: &str) -> Result<(ServerConfig, ConfigGuard)> {
    let tmp_data_dir = TempDir::with_prefix(format!("{}_", test_name))?;
    let data_dir = tmp_data_dir.path().to_string_lossy().to_string();
    let port = random_port()?;
    let port = port.to_string();
    let base_url = format!("http://localhost:{}", port);
    let args = &[
        "gamebox-e2e-tests",
        "--data-dir",
        &data_dir,
        "--port",
        &port,
        "--base-url",
        &base_url,
    ];
    let config = ServerConfig::try_parse_from(args)?;
    Ok((
        config,
        ConfigGuard {
            data_dir: tmp_data_dir,
        },
    ))
}

/// Starts the real server in the background and waits until its health
/// route answers. Returns a client to drive it with.
pub async fn launch_env(args: ServerConfig) -> Result<reqwest::Client> {
    let state = gamebox_server::build_state(&args).await?;
    let health_url = args.base_url.join("health")?;
    tokio::spawn(gamebox_server::run_graceful_with_state(
        args,
        state,
        futures::future::pending(),
    ));

    let client = reqwest::Client::new();
    let mut retries = 50;
    while retries > 0 {
        match client.get(health_url.clone()).send().await {
            Ok(response) if response.status().is_success() => return Ok(client),
            _ => {
                tokio::time::sleep(Duration::from_millis(100)).await;
                retries -= 1;
            }
        }
    }
    Err(anyhow!("Server did not become healthy"))
}
