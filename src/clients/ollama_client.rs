use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(
        base_url: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    pub async fn query(
        &self,
        system_message: &str,
        user_message: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_message.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_message.to_string(),
                },
            ],
            stream: false,
        };

        let endpoint = self.endpoint();
        log::debug!("POST {} (model {})", endpoint, self.model);
        let response = self.http.post(&endpoint).json(&request).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::warn!("Chat request failed with {}: {}", status, text);
            return Err(format!("Request failed with status {}: {}", status, text).into());
        }

        let parsed: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            format!("Failed to parse chat response: {}\nRaw body: {}", e, text)
        })?;
        Ok(parsed.message.content)
    }
}
