//! Cổng gửi dữ liệu về Google Sheet (Apps Script)
//!
//! Gửi ở chế độ no-cors để vượt hạn chế CORS của trình duyệt khi gọi GAS.
//! Response là opaque, không đọc được body/status, nên transport không ném
//! exception được coi là gửi thành công. Không retry; thất bại báo một lần
//! và bản nháp được giữ nguyên để gửi lại.

use smart_thermal_common::{SubmitOutcome, ThermalRecord};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode};

/// Thông báo khi chưa cấu hình URL Apps Script
pub const MISSING_URL_MESSAGE: &str = "Lỗi: Chưa cấu hình URL Google Apps Script.";

const SUCCESS_MESSAGE: &str =
    "Dữ liệu (bao gồm Xuất tuyến & Loại kiểm tra) đã được gửi thành công!";

/// Gửi một phiếu đã qua kiểm tra
///
/// # Arguments
/// * `gas_url` - URL Apps Script đã deploy
/// * `record` - phiếu đã ép kiểu số, serialize nguyên vẹn vào body
pub async fn submit_record(gas_url: &str, record: &ThermalRecord) -> SubmitOutcome {
    if gas_url.trim().is_empty() {
        return SubmitOutcome {
            success: false,
            message: MISSING_URL_MESSAGE.to_string(),
        };
    }

    let body = match serde_json::to_string(record) {
        Ok(body) => body,
        Err(err) => {
            return SubmitOutcome {
                success: false,
                message: format!("Lỗi tạo dữ liệu gửi: {}", err),
            };
        }
    };

    match post_plain_text(gas_url, &body).await {
        Ok(()) => SubmitOutcome {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        },
        Err(err) => SubmitOutcome {
            success: false,
            message: format!(
                "Không thể kết nối với máy chủ Google: {}",
                js_error_message(&err)
            ),
        },
    }
}

/// Một lượt POST text/plain; GAS vẫn nhận dữ liệu dù response opaque
async fn post_plain_text(url: &str, body: &str) -> Result<(), JsValue> {
    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::NoCors);
    opts.body(Some(&JsValue::from_str(body)));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "text/plain;charset=utf-8")?;

    let window = web_sys::window().unwrap();
    JsFuture::from(window.fetch_with_request(&request)).await?;
    Ok(())
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_thermal_common::{InspectionType, Phase};

    fn sample_record() -> ThermalRecord {
        ThermalRecord {
            unit: "Điện lực Miền Trung".to_string(),
            station_name: "TBA 110kV Đông Anh".to_string(),
            device_location: "Dao cách ly 171-1".to_string(),
            feeder: "471".to_string(),
            inspection_type: InspectionType::Periodic,
            phase: Phase::Abc,
            measured_temp: 50.0,
            reference_temp: 25.0,
            ambient_temp: 30.0,
            current_load: 100.0,
            thermal_image: None,
            normal_image: None,
            conclusion: "Nguy hiểm, xử lý sớm".to_string(),
            inspector: "Nguyễn Văn An".to_string(),
            date: "2026-08-06".to_string(),
        }
    }

    #[test]
    fn test_payload_keeps_numbers_numeric() {
        // Body gửi GAS phải giữ số liệu là số, không phải chuỗi
        let body = serde_json::to_string(&sample_record()).expect("serialize lỗi");
        assert!(body.contains("\"measuredTemp\":50.0"));
        assert!(body.contains("\"referenceTemp\":25.0"));
        assert!(body.contains("\"ambientTemp\":30.0"));
        assert!(body.contains("\"currentLoad\":100.0"));
        assert!(!body.contains("\"measuredTemp\":\"50\""));
    }

    #[test]
    fn test_messages_non_empty() {
        assert!(!MISSING_URL_MESSAGE.is_empty());
        assert!(!SUCCESS_MESSAGE.is_empty());
    }
}
