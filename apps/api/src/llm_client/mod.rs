/// LLM Client: the single point of entry for all Claude API calls.
///
/// No other module calls the Anthropic API directly; the salary advisor goes
/// through `LlmClient` and classifies failures with `LlmError::kind`.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls. Hardcoded to keep valuations comparable.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;

/// Low temperature keeps repeated valuations of the same profile close.
pub const ANALYSIS_TEMPERATURE: f32 = 0.2;
pub const WRITING_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Coarse failure taxonomy that decides whether a request can degrade
/// gracefully and what the user is told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmFailureKind {
    RateLimited,
    InvalidCredential,
    ServerError,
    Unknown,
}

impl LlmFailureKind {
    /// Rate limits and bad credentials will fail every later call too.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LlmFailureKind::RateLimited | LlmFailureKind::InvalidCredential
        )
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            LlmFailureKind::RateLimited => "API 요청 한도를 초과했습니다. 1분 후에 다시 시도해주세요.",
            LlmFailureKind::InvalidCredential => {
                "AI 서버 인증에 실패했습니다. 관리자에게 문의하여 API 키 설정을 확인해주세요."
            }
            LlmFailureKind::ServerError => {
                "AI 서버에 일시적인 문제가 발생했습니다. 잠시 후 다시 시도해주세요."
            }
            LlmFailureKind::Unknown => {
                "AI 분석 중 알 수 없는 오류가 발생했습니다. 잠시 후 다시 시도해주세요."
            }
        }
    }
}

impl LlmError {
    pub fn kind(&self) -> LlmFailureKind {
        match self {
            LlmError::RateLimited { .. } => LlmFailureKind::RateLimited,
            LlmError::Api { status, message } => match status {
                429 => LlmFailureKind::RateLimited,
                401 | 403 => LlmFailureKind::InvalidCredential,
                500..=599 => LlmFailureKind::ServerError,
                _ => classify_message(message),
            },
            LlmError::Http(e) => classify_message(&e.to_string()),
            LlmError::Parse(_) | LlmError::EmptyContent => LlmFailureKind::Unknown,
        }
    }
}

fn classify_message(message: &str) -> LlmFailureKind {
    let message = message.to_lowercase();
    let mentions = |needles: &[&str]| needles.iter().any(|n| message.contains(n));

    if mentions(&["rate limit", "quota", "resource exhausted", "resource_exhausted"]) {
        LlmFailureKind::RateLimited
    } else if mentions(&["api key not valid", "invalid x-api-key", "permission denied", "permission_denied"]) {
        LlmFailureKind::InvalidCredential
    } else if mentions(&["internal error", "server error", "service unavailable", "overloaded"]) {
        LlmFailureKind::ServerError
    } else {
        LlmFailureKind::Unknown
    }
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API with retry logic and structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        temperature: f32,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Calls the LLM and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        temperature: f32,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system, temperature).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        serde_json::from_str(strip_json_fences(text)).map_err(LlmError::Parse)
    }

    /// Calls the LLM for free-form prose, trimmed. Blank output is an error.
    pub async fn call_text(
        &self,
        prompt: &str,
        system: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let response = self.call(prompt, system, temperature).await?;
        response
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let stripped = stripped.trim_start();
    stripped
        .strip_suffix("```")
        .map(|s| s.trim())
        .unwrap_or(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, message: &str) -> LlmError {
        LlmError::Api {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_kind_from_status() {
        assert_eq!(api(429, "").kind(), LlmFailureKind::RateLimited);
        assert_eq!(api(401, "").kind(), LlmFailureKind::InvalidCredential);
        assert_eq!(api(403, "").kind(), LlmFailureKind::InvalidCredential);
        assert_eq!(api(500, "").kind(), LlmFailureKind::ServerError);
        assert_eq!(api(529, "Overloaded").kind(), LlmFailureKind::ServerError);
        assert_eq!(
            LlmError::RateLimited { retries: 3 }.kind(),
            LlmFailureKind::RateLimited
        );
    }

    #[test]
    fn test_kind_from_message() {
        assert_eq!(api(400, "Monthly quota reached").kind(), LlmFailureKind::RateLimited);
        assert_eq!(api(400, "API key not valid").kind(), LlmFailureKind::InvalidCredential);
        assert_eq!(api(400, "Service Unavailable").kind(), LlmFailureKind::ServerError);
        assert_eq!(api(400, "max_tokens too large").kind(), LlmFailureKind::Unknown);
        assert_eq!(LlmError::EmptyContent.kind(), LlmFailureKind::Unknown);
    }

    #[test]
    fn test_only_rate_limit_and_credential_are_fatal() {
        assert!(LlmFailureKind::RateLimited.is_fatal());
        assert!(LlmFailureKind::InvalidCredential.is_fatal());
        assert!(!LlmFailureKind::ServerError.is_fatal());
        assert!(!LlmFailureKind::Unknown.is_fatal());
    }
}
