//! HTTP client for the remote translation endpoint.
//!
//! Builds the request URL, performs a single GET, and strictly parses the
//! service's nested-array response. Failures map onto [`TranslateError`];
//! no retry is attempted — the debounced pipeline already suppresses
//! redundant calls, and a failed request is retried only by a new
//! user-triggered input.

use std::sync::LazyLock;
use std::time::Duration;

use serde_json::Value;

use crate::catalog::AUTO;
use crate::util::percent_encode;

/// Base URL of the translation service.
const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Failure modes of a single translation attempt.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The service answered with a non-success HTTP status.
    #[error("translation service returned HTTP {status}")]
    Http {
        /// Status code from the response.
        status: u16,
    },
    /// The body was not the expected nested-array shape.
    #[error("unexpected response shape from translation service")]
    UnexpectedResponse,
    /// Transport-level failure (timeout, DNS, offline).
    #[error("network failure: {0}")]
    Network(String),
}

impl TranslateError {
    /// Message rendered into the output buffer when a request fails.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { status } => {
                format!("Translation failed (HTTP {status}). Please try again later.")
            }
            Self::UnexpectedResponse => "Translation error: Unexpected API response".to_string(),
            Self::Network(_) => "Translation failed. Please try again later.".to_string(),
        }
    }
}

/// Shared HTTP client with connection pooling and sane timeouts.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(15))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("tradui/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// What: Build the translation request URL.
///
/// Inputs:
/// - `text`: Raw text to translate (percent-encoded here).
/// - `source`: Source language code or `"auto"`.
/// - `target`: Target language code.
///
/// Output:
/// - Full GET URL with `client=gtx`, `dt=t` (plain-text mode), and the
///   encoded query.
#[must_use]
pub fn build_url(text: &str, source: &str, target: &str) -> String {
    format!(
        "{ENDPOINT}?client=gtx&sl={source}&tl={target}&dt=t&q={}",
        percent_encode(text)
    )
}

/// What: Extract the translated text from the service's JSON body.
///
/// Inputs:
/// - `v`: Parsed JSON value.
///
/// Output:
/// - Concatenation of every translated segment in order, or
///   [`TranslateError::UnexpectedResponse`] if the shape is not a
///   top-level array whose first element is an array of
///   `[translated, original, ...]` tuples.
///
/// Details:
/// - The shape is validated strictly rather than duck-typed; a segment
///   whose first element is not a string fails the whole parse.
///
/// # Errors
/// - [`TranslateError::UnexpectedResponse`] when the body does not match
///   the documented shape.
pub fn parse_translation(v: &Value) -> Result<String, TranslateError> {
    let segments = v
        .get(0)
        .and_then(Value::as_array)
        .ok_or(TranslateError::UnexpectedResponse)?;
    let mut out = String::new();
    for seg in segments {
        let translated = seg
            .get(0)
            .and_then(Value::as_str)
            .ok_or(TranslateError::UnexpectedResponse)?;
        out.push_str(translated);
    }
    Ok(out)
}

/// What: Translate `text` from `source` to `target` with a single request.
///
/// Inputs:
/// - `text`: Non-empty text (callers short-circuit empty input).
/// - `source`: Source language code or `"auto"`.
/// - `target`: Target language code.
///
/// Output:
/// - The translated text, or a [`TranslateError`] describing the failure.
///
/// Details:
/// - Identity optimization: when `source == target` and the source is not
///   `"auto"`, the input is returned unchanged without touching the
///   network.
///
/// # Errors
/// - [`TranslateError::Network`] on transport failure, [`TranslateError::Http`]
///   on a non-success status, [`TranslateError::UnexpectedResponse`] on a
///   malformed body.
pub async fn translate(
    text: &str,
    source: &str,
    target: &str,
) -> Result<String, TranslateError> {
    if source == target && source != AUTO {
        return Ok(text.to_string());
    }

    let url = build_url(text, source, target);
    tracing::debug!(source, target, chars = text.chars().count(), "translation request");

    let resp = HTTP_CLIENT
        .get(&url)
        .send()
        .await
        .map_err(|e| TranslateError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "translation request rejected");
        return Err(TranslateError::Http {
            status: status.as_u16(),
        });
    }

    let body: Value = resp
        .json()
        .await
        .map_err(|_| TranslateError::UnexpectedResponse)?;
    parse_translation(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// What: The request URL carries the documented query parameters.
    ///
    /// - Input: "Hello", auto → fr
    /// - Output: URL containing `sl=auto&tl=fr&dt=t&q=Hello`
    #[test]
    fn build_url_encodes_query() {
        let url = build_url("Hello", "auto", "fr");
        assert!(url.starts_with(ENDPOINT));
        assert!(url.contains("client=gtx"));
        assert!(url.contains("sl=auto&tl=fr&dt=t&q=Hello"));

        let spaced = build_url("good morning", "en", "de");
        assert!(spaced.ends_with("q=good%20morning"));
    }

    /// What: A well-formed nested response concatenates all segments.
    ///
    /// - Input: `[[["Bonjour","Hello"],[" le monde"," world"]]]`
    /// - Output: `"Bonjour le monde"`
    #[test]
    fn parse_translation_joins_segments() {
        let v = json!([[["Bonjour", "Hello"], [" le monde", " world"]]]);
        assert_eq!(
            parse_translation(&v).expect("valid shape"),
            "Bonjour le monde"
        );
    }

    /// What: Malformed bodies fail explicitly instead of degrading silently.
    ///
    /// - Input: Non-array body, empty object, tuple without a string
    /// - Output: `UnexpectedResponse` in every case
    #[test]
    fn parse_translation_rejects_bad_shapes() {
        for v in [json!({}), json!("nope"), json!([]), json!([[[42]]])] {
            assert!(matches!(
                parse_translation(&v),
                Err(TranslateError::UnexpectedResponse)
            ));
        }
    }

    /// What: Identical non-auto languages return the input without a network call.
    ///
    /// - Input: "Hello", en → en (offline)
    /// - Output: `Ok("Hello")`
    #[tokio::test]
    async fn translate_is_identity_for_same_language() {
        let out = translate("Hello", "en", "en").await.expect("identity");
        assert_eq!(out, "Hello");
    }

    /// What: Error messages shown to users are stable and human-readable.
    ///
    /// - Input: Each error variant
    /// - Output: The front end's display strings
    #[test]
    fn user_messages_match_display_policy() {
        assert_eq!(
            TranslateError::UnexpectedResponse.user_message(),
            "Translation error: Unexpected API response"
        );
        assert_eq!(
            TranslateError::Network("boom".into()).user_message(),
            "Translation failed. Please try again later."
        );
        assert!(
            TranslateError::Http { status: 500 }
                .user_message()
                .contains("HTTP 500")
        );
    }
}
