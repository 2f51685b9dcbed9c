use anyhow::Result;
use reqwest::{Client, ClientBuilder, Response};
use serde_json::Value;
use std::time::Duration;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

pub fn build_http_client() -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(APP_USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()?;
    Ok(client)
}

pub async fn get(client: &Client, address: &str) -> Result<Response> {
    Ok(client.get(address).send().await?)
}

pub async fn post_json(client: &Client, address: &str, body: &Value) -> Result<Response> {
    Ok(client.post(address).json(body).send().await?)
}

pub async fn put_json(client: &Client, address: &str, body: &Value) -> Result<Response> {
    Ok(client.put(address).json(body).send().await?)
}

pub async fn delete(client: &Client, address: &str) -> Result<Response> {
    Ok(client.delete(address).send().await?)
}

/// Sends a raw, possibly malformed, JSON body
pub async fn send_raw_json(
    client: &Client,
    method: reqwest::Method,
    address: &str,
    body: &'static str,
) -> Result<Response> {
    let response = client
        .request(method, address)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;
    Ok(response)
}
