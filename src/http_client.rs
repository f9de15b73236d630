// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - HTTP Client
 * Thin reqwest wrapper with bounded retries for probe traffic
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::errors::AnalyzerError;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Maximum response body size (10MB) to prevent memory exhaustion
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Clone)]
pub struct HttpClient {
    client: Arc<Client>,
    max_retries: u32,
}

impl HttpClient {
    pub fn new(timeout_secs: u64, max_retries: u32) -> Result<Self, AnalyzerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(USER_AGENT)
            .tcp_nodelay(true)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            max_retries,
        })
    }

    /// Send GET request
    pub async fn get(&self, url: &str) -> Result<HttpResponse, AnalyzerError> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts <= self.max_retries {
            match self.client.get(url).send().await {
                Ok(response) => return Ok(Self::into_response(response).await),
                Err(e) => {
                    last_error = Some(e);
                    attempts += 1;
                    if attempts <= self.max_retries {
                        sleep(Duration::from_millis(100 * attempts as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap().into())
    }

    /// Send POST request with form-encoded body
    pub async fn post_form(&self, url: &str, body: String) -> Result<HttpResponse, AnalyzerError> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts <= self.max_retries {
            match self
                .client
                .post(url)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body.clone())
                .send()
                .await
            {
                Ok(response) => return Ok(Self::into_response(response).await),
                Err(e) => {
                    last_error = Some(e);
                    attempts += 1;
                    if attempts <= self.max_retries {
                        sleep(Duration::from_millis(100 * attempts as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap().into())
    }

    async fn into_response(response: reqwest::Response) -> HttpResponse {
        let status_code = response.status().as_u16();

        let headers = {
            let headers = response.headers();
            let mut map = HashMap::with_capacity(headers.len());
            for (k, v) in headers.iter() {
                if let Ok(value_str) = v.to_str() {
                    map.insert(k.as_str().to_string(), value_str.to_string());
                }
            }
            map
        };

        // Read body with size limit
        let body_bytes = response.bytes().await.unwrap_or_default();
        let body = if body_bytes.len() > MAX_BODY_SIZE {
            String::from_utf8_lossy(&body_bytes[..MAX_BODY_SIZE]).to_string()
        } else {
            String::from_utf8_lossy(&body_bytes).to_string()
        };

        HttpResponse {
            status_code,
            body,
            headers,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
    /// Header names are stored lowercase (reqwest normalizes them)
    pub headers: HashMap<String, String>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.headers.get(&name.to_lowercase()).cloned()
    }
}
