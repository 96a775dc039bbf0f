//! Kiểm tra phiếu trước khi gửi
//!
//! Bản nháp chỉ được đổi thành `ThermalRecord` khi đủ các ô bắt buộc và
//! số liệu nhiệt độ/dòng điện là số hữu hạn. Khi hỏng, trả về danh sách
//! nhãn ô để form báo cho người nhập; bản nháp giữ nguyên.

use thiserror::Error;

use crate::types::{RecordDraft, ThermalRecord};

/// Phiếu chưa hợp lệ; `fields` là nhãn các ô thiếu hoặc sai kiểu
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Vui lòng kiểm tra lại các mục: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

/// Kiểm tra và ép kiểu một bản nháp
///
/// Chuỗi được trim; nhiệt độ môi trường bỏ trống rơi về 30°C, dòng điện
/// bỏ trống rơi về 0A. Nhiệt độ đo và tham chiếu là bắt buộc.
pub fn validate(draft: &RecordDraft) -> Result<ThermalRecord, ValidationError> {
    let mut fields = Vec::new();

    let station_name = draft.station_name.trim();
    if station_name.is_empty() {
        fields.push("Tên Trạm / Đường dây");
    }
    let device_location = draft.device_location.trim();
    if device_location.is_empty() {
        fields.push("Vị trí / Thiết bị");
    }
    let feeder = draft.feeder.trim();
    if feeder.is_empty() {
        fields.push("Xuất tuyến");
    }

    let measured = parse_finite(&draft.measured_temp);
    if measured.is_none() {
        fields.push("Nhiệt độ đo (t1)");
    }
    let reference = parse_finite(&draft.reference_temp);
    if reference.is_none() {
        fields.push("Nhiệt độ tham chiếu (t2)");
    }
    let ambient = parse_or_default(&draft.ambient_temp, 30.0);
    if ambient.is_none() {
        fields.push("Nhiệt độ môi trường");
    }
    let load = parse_or_default(&draft.current_load, 0.0);
    if load.is_none() {
        fields.push("Dòng điện (A)");
    }

    let inspector = draft.inspector.trim();
    if inspector.is_empty() {
        fields.push("Người đo");
    }
    let date = draft.date.trim();
    if date.is_empty() {
        fields.push("Ngày đo");
    }

    match (measured, reference, ambient, load) {
        (Some(measured_temp), Some(reference_temp), Some(ambient_temp), Some(current_load))
            if fields.is_empty() =>
        {
            Ok(ThermalRecord {
                unit: draft.unit.trim().to_string(),
                station_name: station_name.to_string(),
                device_location: device_location.to_string(),
                feeder: feeder.to_string(),
                inspection_type: draft.inspection_type,
                phase: draft.phase,
                measured_temp,
                reference_temp,
                ambient_temp,
                current_load,
                thermal_image: draft.thermal_image.clone(),
                normal_image: draft.normal_image.clone(),
                conclusion: draft.conclusion.trim().to_string(),
                inspector: inspector.to_string(),
                date: date.to_string(),
            })
        }
        _ => Err(ValidationError { fields }),
    }
}

/// Chuỗi rỗng không hợp lệ; NaN/vô hạn bị loại
fn parse_finite(value: &str) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Bỏ trống thì dùng mặc định, có nhập thì phải là số hữu hạn
fn parse_or_default(value: &str, default: f64) -> Option<f64> {
    if value.trim().is_empty() {
        Some(default)
    } else {
        parse_finite(value)
    }
}
