use std::io::Read;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::data::prompt;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Image requests always target this model, regardless of the configured
/// text model.
pub const IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(20);
const WRITE_TIMEOUT: Duration = Duration::from_secs(20);
const TEXT_READ_TIMEOUT: Duration = Duration::from_secs(60);
const IMAGE_READ_TIMEOUT: Duration = Duration::from_secs(180);

/// Upper bound when reading a response body. Inline base64 image payloads
/// run to tens of megabytes.
const MAX_RESPONSE_BYTES: u64 = 64 * 1024 * 1024;

fn agent(read_timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(CONNECT_TIMEOUT)
        .timeout_read(read_timeout)
        .timeout_write(WRITE_TIMEOUT)
        .build()
}

fn endpoint(model: &str, api_key: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        GEMINI_API_BASE.trim_end_matches('/'),
        model.trim(),
        urlencoding::encode(api_key.trim())
    )
}

/// POST a JSON payload and parse the generateContent response. Non-2xx
/// responses keep the raw body so the user can read the API's own error
/// message.
fn post_generate(
    url: &str,
    read_timeout: Duration,
    payload: &serde_json::Value,
) -> Result<GeminiResponse, String> {
    let response = agent(read_timeout)
        .post(url)
        .set("Content-Type", "application/json")
        .send_string(&payload.to_string())
        .map_err(|err| match err {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();
                format!("Gemini returned HTTP {code}: {body}")
            }
            ureq::Error::Transport(transport) => format!("Gemini request failed: {transport}"),
        })?;

    let body = read_body(response)?;

    serde_json::from_str(&body)
        .map_err(|err| format!("Invalid Gemini response JSON: {err}; raw: {body}"))
}

/// Read the whole body. `into_string` is capped at 10 MiB, which image
/// responses exceed.
fn read_body(response: ureq::Response) -> Result<String, String> {
    let mut body = String::new();
    response
        .into_reader()
        .take(MAX_RESPONSE_BYTES)
        .read_to_string(&mut body)
        .map_err(|err| format!("Failed to read Gemini response: {err}"))?;
    Ok(body)
}

/// One blocking text-generation call: wraps the source novel text in the
/// storyboard instruction template and returns the generated storyboard.
pub fn generate_storyboard(api_key: &str, model: &str, source: &str) -> Result<String, String> {
    let payload = json!({
        "contents": [{
            "parts": [{ "text": prompt::storyboard_request(source) }]
        }],
        "generationConfig": {
            "temperature": 0.7,
            "maxOutputTokens": 8000
        }
    });

    let parsed = post_generate(&endpoint(model, api_key), TEXT_READ_TIMEOUT, &payload)?;
    extract_text(parsed)
}

/// One blocking image-generation call: sends the prompt to the image model
/// and returns the first inline image payload, decoded.
pub fn generate_image(api_key: &str, prompt: &str) -> Result<Vec<u8>, String> {
    let payload = json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }]
    });

    let parsed = post_generate(&endpoint(IMAGE_MODEL, api_key), IMAGE_READ_TIMEOUT, &payload)?;
    extract_image_bytes(parsed)
}

/// Text payload of a response: the first candidate's text parts joined,
/// trimmed.
fn extract_text(parsed: GeminiResponse) -> Result<String, String> {
    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| "Gemini response had no candidates.".to_string())?;

    let text = candidate
        .content
        .and_then(|c| c.parts)
        .map(|parts| {
            parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err("Gemini response contained no text.".to_string());
    }
    Ok(text.to_string())
}

/// Decoded bytes of the first candidate's first `inlineData` part.
fn extract_image_bytes(parsed: GeminiResponse) -> Result<Vec<u8>, String> {
    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| "Gemini response had no candidates.".to_string())?;

    let encoded = candidate
        .content
        .and_then(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .find_map(|p| p.inline_data)
        .map(|d| d.data)
        .ok_or_else(|| "Gemini response contained no image data.".to_string())?;

    use base64::Engine;
    base64::engine::general_purpose::STANDARD
        .decode(encoded.as_bytes())
        .map_err(|err| format!("Invalid image payload: {err}"))
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, rename = "inlineData")]
    inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Deserialize)]
struct GeminiInlineData {
    #[serde(default)]
    data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> GeminiResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn endpoint_embeds_model_and_escapes_key() {
        let url = endpoint("gemini-2.0-flash-exp", "abc+/=123");
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent?key=abc%2B%2F%3D123"
        );
    }

    #[test]
    fn text_extraction_joins_parts_of_the_first_candidate() {
        let body = r#"{"candidates":[
            {"content":{"parts":[{"text":"Hello"},{"text":" world"}]}},
            {"content":{"parts":[{"text":"second candidate, ignored"}]}}
        ]}"#;
        assert_eq!(extract_text(parse(body)).unwrap(), "Hello world");
    }

    #[test]
    fn empty_candidate_list_is_an_error() {
        assert!(extract_text(parse("{}"))
            .unwrap_err()
            .contains("no candidates"));
        assert!(extract_image_bytes(parse("{}"))
            .unwrap_err()
            .contains("no candidates"));
    }

    #[test]
    fn whitespace_only_text_is_an_error() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  \n  "}]}}]}"#;
        assert!(extract_text(parse(body)).unwrap_err().contains("no text"));
    }

    #[test]
    fn image_extraction_decodes_the_first_inline_payload() {
        let body = r#"{"candidates":[{"content":{"parts":[
            {"text":"caption"},
            {"inlineData":{"mimeType":"image/png","data":"aGk="}},
            {"inlineData":{"mimeType":"image/png","data":"bm8="}}
        ]}}]}"#;
        assert_eq!(extract_image_bytes(parse(body)).unwrap(), b"hi");
    }

    #[test]
    fn text_only_response_has_no_image_payload() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"caption"}]}}]}"#;
        assert!(extract_image_bytes(parse(body))
            .unwrap_err()
            .contains("no image data"));
    }

    #[test]
    fn corrupt_base64_payload_is_an_error() {
        let body = r#"{"candidates":[{"content":{"parts":[{"inlineData":{"data":"%%%"}}]}}]}"#;
        assert!(extract_image_bytes(parse(body))
            .unwrap_err()
            .contains("Invalid image payload"));
    }

    #[test]
    fn reads_bodies_larger_than_the_into_string_cap() {
        let payload = "x".repeat(11 * 1024 * 1024);
        let response = ureq::Response::new(200, "OK", &payload).unwrap();
        assert_eq!(read_body(response).unwrap().len(), payload.len());
    }
}
