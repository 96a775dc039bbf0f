//! Cổng AI chẩn đoán (Gemini generateContent)
//!
//! Mọi lỗi mạng/khóa đều được nuốt tại đây và thay bằng một chuỗi kết luận
//! cố định; với người dùng, nút "AI Phân tích" luôn điền được ô kết luận.

use gloo::console;
use serde::{Deserialize, Serialize};
use smart_thermal_common::{build_advisory_prompt, clean_advisory, FALLBACK_ADVISORY, STEADY_ADVISORY};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

/// API key do môi trường build cung cấp (Netlify/CI inject khi build)
const API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

/// Kết luận khi chưa cấu hình API key trên hosting
pub const MISSING_KEY_ADVISORY: &str = "Lỗi: Chưa cấu hình API_KEY trên hosting (Netlify). \
     Hãy vào Site Settings > Environment variables để thêm.";

/// Kết luận khi API key bị từ chối
pub const INVALID_KEY_ADVISORY: &str =
    "Lỗi: API Key không hợp lệ. Vui lòng kiểm tra lại trên Google AI Studio.";

/// Body request gửi generateContent
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

/// Body response của generateContent
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

enum AdvisoryError {
    InvalidKey,
    Transport(JsValue),
}

impl From<JsValue> for AdvisoryError {
    fn from(value: JsValue) -> Self {
        AdvisoryError::Transport(value)
    }
}

/// Gọi cổng AI với số liệu đo, luôn trả về một chuỗi kết luận khác rỗng
///
/// # Arguments
/// * `measured` - nhiệt độ đo t1 (°C)
/// * `reference` - nhiệt độ tham chiếu t2 (°C)
/// * `load` - phụ tải (A)
pub async fn fetch_advisory(measured: f64, reference: f64, load: f64) -> String {
    let Some(api_key) = API_KEY else {
        console::error!("GEMINI_API_KEY chưa được cấu hình khi build");
        return MISSING_KEY_ADVISORY.to_string();
    };

    match request_advisory(api_key, measured, reference, load).await {
        Ok(text) => clean_advisory(&text).unwrap_or_else(|| STEADY_ADVISORY.to_string()),
        Err(AdvisoryError::InvalidKey) => INVALID_KEY_ADVISORY.to_string(),
        Err(AdvisoryError::Transport(err)) => {
            console::error!("Gemini:", err);
            FALLBACK_ADVISORY.to_string()
        }
    }
}

/// Một lượt fetch tới generateContent, trả về phần text của candidate đầu
async fn request_advisory(
    api_key: &str,
    measured: f64,
    reference: f64,
    load: f64,
) -> Result<String, AdvisoryError> {
    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_advisory_prompt(measured, reference, load),
            }],
        }],
    };
    let body = serde_json::to_string(&request)
        .map_err(|e| AdvisoryError::Transport(JsValue::from_str(&e.to_string())))?;

    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(&body)));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        // Key bị từ chối trả về 400 kèm "API key not valid" trong body
        let detail = JsFuture::from(resp.text()?)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        if detail.contains("API key not valid") {
            return Err(AdvisoryError::InvalidKey);
        }
        return Err(AdvisoryError::Transport(JsValue::from_str(&format!(
            "API error: {}",
            resp.status()
        ))));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| AdvisoryError::Transport(e.into()))?;

    first_candidate_text(&response)
        .ok_or_else(|| AdvisoryError::Transport(JsValue::from_str("Empty response")))
}

fn first_candidate_text(response: &GeminiResponse) -> Option<String> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialize() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_advisory_prompt(50.0, 25.0, 100.0),
                }],
            }],
        };

        let json = serde_json::to_string(&request).expect("serialize lỗi");
        assert!(json.contains("\"contents\""));
        assert!(json.contains("\"parts\""));
        assert!(json.contains("chuyên gia chẩn đoán nhiệt"));
        assert!(json.contains("ΔT=25.0°C"));
    }

    #[test]
    fn test_response_deserialize() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "Phát nóng rõ rệt, giảm tải và xử lý sớm."
                    }]
                }
            }]
        }"#;

        let response: GeminiResponse = serde_json::from_str(json).expect("parse lỗi");
        assert_eq!(
            first_candidate_text(&response).as_deref(),
            Some("Phát nóng rõ rệt, giảm tải và xử lý sớm.")
        );
    }

    #[test]
    fn test_empty_candidates_has_no_text() {
        let response: GeminiResponse =
            serde_json::from_str(r#"{"candidates": []}"#).expect("parse lỗi");
        assert_eq!(first_candidate_text(&response), None);
    }

    #[test]
    fn test_fixed_advisories_non_empty() {
        assert!(!MISSING_KEY_ADVISORY.is_empty());
        assert!(!INVALID_KEY_ADVISORY.is_empty());
    }
}
