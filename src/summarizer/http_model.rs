use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::ModelConfig;
use crate::errors::{DeskError, DeskResult};
use crate::summarizer::traits::{GenerationParams, SummaryModel};

/// Summarization model served by a Hugging Face style inference endpoint
pub struct HttpSummaryModel {
    client: Client,
    url: Url,
    token: Option<String>,
    params: GenerationParams,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceParameters {
    min_length: u32,
    max_length: u32,
    do_sample: bool,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

impl HttpSummaryModel {
    /// Acquire the model described by `config`
    pub fn connect(config: &ModelConfig) -> DeskResult<Self> {
        let unavailable = |e: DeskError| DeskError::ModelUnavailable(e.to_string());

        if !config.is_enabled().map_err(unavailable)? {
            return Err(DeskError::ModelUnavailable(
                "disabled by SUMMARIZER_ENABLED".to_string(),
            ));
        }

        let url = Url::parse(&config.url)
            .map_err(|e| DeskError::ModelUnavailable(format!("{}: {}", config.url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DeskError::ModelUnavailable(format!(
                "unsupported scheme '{}' in {}",
                url.scheme(),
                config.url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout().map_err(unavailable)?)
            .build()
            .map_err(|e| DeskError::ModelUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            url,
            token: config.token.clone(),
            params: GenerationParams::default(),
        })
    }

    /// Extract the generated text from an inference response body
    fn parse_response(body: &str) -> DeskResult<String> {
        let outputs: Vec<SummaryOutput> = serde_json::from_str(body)
            .map_err(|e| DeskError::ModelInvocation(format!("unexpected response: {}", e)))?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text.trim().to_string())
            .ok_or_else(|| DeskError::ModelInvocation("empty response".to_string()))
    }
}

impl SummaryModel for HttpSummaryModel {
    fn name(&self) -> String {
        self.url.to_string()
    }

    fn generate(&self, text: &str) -> DeskResult<String> {
        let request = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                min_length: self.params.min_length,
                max_length: self.params.max_length,
                do_sample: self.params.do_sample,
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut builder = self.client.post(self.url.clone()).json(&request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(DeskError::ModelInvocation(format!(
                "status {}: {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )));
        }

        debug!(chars = text.chars().count(), "model summary received");
        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> ModelConfig {
        ModelConfig {
            timeout_secs: Some("5".to_string()),
            ..ModelConfig::new(url)
        }
    }

    #[test]
    fn test_connect_accepts_http_url() {
        let model = HttpSummaryModel::connect(&config("http://localhost:8080/summarize")).unwrap();
        assert_eq!(model.name(), "http://localhost:8080/summarize");
        assert_eq!(model.params, GenerationParams::default());
    }

    #[test]
    fn test_connect_rejects_malformed_url() {
        let result = HttpSummaryModel::connect(&config("not a url"));
        assert!(matches!(result, Err(DeskError::ModelUnavailable(_))));
    }

    #[test]
    fn test_connect_rejects_non_http_scheme() {
        let result = HttpSummaryModel::connect(&config("ftp://models.example.com/bart"));
        assert!(matches!(result, Err(DeskError::ModelUnavailable(_))));
    }

    #[test]
    fn test_connect_when_disabled() {
        let mut cfg = config("http://localhost:8080");
        cfg.enabled = Some("false".to_string());
        assert!(matches!(
            HttpSummaryModel::connect(&cfg),
            Err(DeskError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn test_connect_rejects_malformed_settings() {
        let mut cfg = config("http://localhost:8080");
        cfg.enabled = Some("maybe".to_string());
        assert!(matches!(
            HttpSummaryModel::connect(&cfg),
            Err(DeskError::ModelUnavailable(_))
        ));

        let mut cfg = config("http://localhost:8080");
        cfg.timeout_secs = Some("soon".to_string());
        assert!(matches!(
            HttpSummaryModel::connect(&cfg),
            Err(DeskError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn test_parse_response_takes_first_summary() {
        let body = r#"[{"summary_text": "  A short summary.  "}, {"summary_text": "ignored"}]"#;
        assert_eq!(
            HttpSummaryModel::parse_response(body).unwrap(),
            "A short summary."
        );
    }

    #[test]
    fn test_parse_response_rejects_empty_list() {
        assert!(matches!(
            HttpSummaryModel::parse_response("[]"),
            Err(DeskError::ModelInvocation(_))
        ));
    }

    #[test]
    fn test_parse_response_rejects_error_object() {
        let body = r#"{"error": "Model is currently loading"}"#;
        assert!(matches!(
            HttpSummaryModel::parse_response(body),
            Err(DeskError::ModelInvocation(_))
        ));
    }
}
