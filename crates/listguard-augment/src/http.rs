use crate::{AugmentError, Augmenter};
use listguard_types::{AiRequest, AiVerdict};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Augmenter backed by an HTTP endpoint taking `POST {title, description}`.
#[derive(Clone, Debug)]
pub struct HttpAugmenter {
    client: Client,
    endpoint: String,
}

impl HttpAugmenter {
    /// `timeout` bounds the whole request, independently of any caller deadline.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, AugmentError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AugmentError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

impl Augmenter for HttpAugmenter {
    fn name(&self) -> &str {
        "http"
    }

    fn analyze(&self, request: &AiRequest) -> Result<AiVerdict, AugmentError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| AugmentError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AugmentError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .map_err(|e| AugmentError::Transport(e.to_string()))?;
        debug!(bytes = body.len(), "augmentation response received");
        parse_verdict(&body)
    }
}

/// Parse a verdict from a response body.
///
/// Models often wrap the JSON object in prose or a code fence, so when the body
/// is not a verdict as a whole, the outermost `{...}` span is tried.
pub fn parse_verdict(body: &str) -> Result<AiVerdict, AugmentError> {
    let whole = match serde_json::from_str::<AiVerdict>(body.trim()) {
        Ok(verdict) => return Ok(verdict),
        Err(err) => err,
    };

    let embedded = match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if start < end => &body[start..=end],
        _ => return Err(AugmentError::Malformed(whole.to_string())),
    };
    serde_json::from_str::<AiVerdict>(embedded)
        .map_err(|e| AugmentError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use listguard_types::AiStatus;

    #[test]
    fn plain_json_verdict_parses() {
        let v = parse_verdict(
            r#"{"status":"fail","flaggedTerms":["replica"],"confidence":0.9,"modelUsed":"m1"}"#,
        )
        .expect("verdict");
        assert_eq!(v.status, AiStatus::Fail);
        assert_eq!(v.flagged_terms, vec!["replica"]);
        assert_eq!(v.model_used.as_deref(), Some("m1"));
    }

    #[test]
    fn fenced_verdict_parses() {
        let body = "Here is my analysis:\n```json\n{\"status\": \"warning\", \"flaggedTerms\": []}\n```";
        let v = parse_verdict(body).expect("verdict");
        assert_eq!(v.status, AiStatus::Warning);
    }

    #[test]
    fn non_json_is_malformed() {
        let bodies = [
            "",
            "<html>502 Bad Gateway</html>",
            "{not json}",
            r#"{"status":"maybe"}"#,
        ];
        for body in bodies {
            let err = parse_verdict(body).expect_err(body);
            assert_eq!(err.reason(), "malformed_response");
        }
    }
}
