use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;
use crate::models::presence::{LanyardResponse, Presence};

/// Read-only client for one Lanyard subject.
#[derive(Debug, Clone)]
pub struct LanyardClient {
    client: Client,
    api_base: String,
    user_id: String,
    timeout: Duration,
}

impl LanyardClient {
    pub fn new(api_base: String, user_id: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            user_id,
            timeout,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn presence_url(&self) -> String {
        format!("{}/users/{}", self.api_base, self.user_id)
    }

    pub async fn fetch_presence(&self) -> Result<Presence, FetchError> {
        let resp = self
            .client
            .get(self.presence_url())
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        // Lanyard reports unknown users as a 404 with a regular error envelope.
        let envelope: LanyardResponse = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            Err(e) => return Err(FetchError::Decode(e)),
        };

        parse_envelope(envelope, status.as_u16(), body)
    }
}

fn parse_envelope(
    envelope: LanyardResponse,
    status: u16,
    body: String,
) -> Result<Presence, FetchError> {
    if let Some(err) = envelope.error {
        return Err(FetchError::Api {
            code: err.code,
            message: err.message,
        });
    }
    if !(200..300).contains(&status) {
        return Err(FetchError::Status { status, body });
    }
    match envelope.data {
        Some(presence) if envelope.success => Ok(presence),
        _ => Err(FetchError::Api {
            code: "unknown".to_string(),
            message: "response carried no presence data".to_string(),
        }),
    }
}
