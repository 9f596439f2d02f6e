use crate::core::Transport;
use crate::utils::error::{MealError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(MealError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
