use async_trait::async_trait;

use crate::clients::ollama_client::OllamaClient;
use crate::config::Settings;

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn chat(
        &self,
        system_message: &str,
        user_message: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

pub struct OllamaService {
    client: OllamaClient,
}

impl OllamaService {
    pub fn new(settings: &Settings) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = OllamaClient::new(&settings.ollama_url, &settings.model, settings.timeout)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ChatClient for OllamaService {
    async fn chat(
        &self,
        system_message: &str,
        user_message: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.client.query(system_message, user_message).await
    }
}
