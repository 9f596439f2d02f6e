use crate::domain::model::ViewState;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Fetches the raw response body for a fully formed request URL.
///
/// Non-2xx responses are reported as errors, never as a body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub trait Renderer {
    fn render(&mut self, state: &ViewState) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn office_code(&self) -> &str;
    fn school_code(&self) -> &str;
}
