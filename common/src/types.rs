//! Kiểu dữ liệu của một phiếu đo nhiệt
//!
//! Dùng chung giữa form (WASM) và test native:
//! - RecordDraft: bản nháp trên form, mọi ô nhập giữ dạng chuỗi
//! - ThermalRecord: phiếu đã qua kiểm tra, số liệu đã ép kiểu
//! - SubmitOutcome: kết quả trả về từ cổng gửi dữ liệu

use serde::{Deserialize, Serialize};

/// Loại kiểm tra; chuỗi trên wire là nhãn tiếng Việt, Sheet lưu nguyên văn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionType {
    #[default]
    #[serde(rename = "Định kỳ")]
    Periodic,
    #[serde(rename = "Đột xuất")]
    Unscheduled,
    #[serde(rename = "Kỹ thuật")]
    Technical,
}

impl InspectionType {
    pub const ALL: [InspectionType; 3] = [
        InspectionType::Periodic,
        InspectionType::Unscheduled,
        InspectionType::Technical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionType::Periodic => "Định kỳ",
            InspectionType::Unscheduled => "Đột xuất",
            InspectionType::Technical => "Kỹ thuật",
        }
    }

    /// Đọc lại từ giá trị của ô select; chuỗi lạ rơi về "Định kỳ"
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Đột xuất" => InspectionType::Unscheduled,
            "Kỹ thuật" => InspectionType::Technical,
            _ => InspectionType::Periodic,
        }
    }
}

/// Pha đo; N là trung tính
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    A,
    B,
    C,
    #[default]
    #[serde(rename = "ABC")]
    Abc,
    #[serde(rename = "N")]
    Neutral,
}

impl Phase {
    pub const ALL: [Phase; 5] = [Phase::A, Phase::B, Phase::C, Phase::Abc, Phase::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::A => "A",
            Phase::B => "B",
            Phase::C => "C",
            Phase::Abc => "ABC",
            Phase::Neutral => "N",
        }
    }

    /// Nhãn hiển thị trên form
    pub fn label(&self) -> &'static str {
        match self {
            Phase::A => "Pha A",
            Phase::B => "Pha B",
            Phase::C => "Pha C",
            Phase::Abc => "Cả 3 Pha",
            Phase::Neutral => "Trung tính",
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "A" => Phase::A,
            "B" => Phase::B,
            "C" => Phase::C,
            "N" => Phase::Neutral,
            _ => Phase::Abc,
        }
    }
}

/// Phiếu đo đã qua kiểm tra, đúng hình dạng payload Apps Script nhận
///
/// Ảnh là data URL base64, vắng mặt là trạng thái hợp lệ (null trên wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermalRecord {
    pub unit: String,
    pub station_name: String,
    pub device_location: String,
    pub feeder: String,
    pub inspection_type: InspectionType,
    pub phase: Phase,
    pub measured_temp: f64,
    pub reference_temp: f64,
    pub ambient_temp: f64,
    pub current_load: f64,
    pub thermal_image: Option<String>,
    pub normal_image: Option<String>,
    pub conclusion: String,
    pub inspector: String,
    pub date: String,
}

/// Bản nháp trên form
///
/// Một giá trị duy nhất cho mỗi phiên nhập; khi làm mới thì thay cả giá trị
/// bằng `blank`, không sửa tại chỗ.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDraft {
    pub unit: String,
    pub station_name: String,
    pub device_location: String,
    pub feeder: String,
    pub inspection_type: InspectionType,
    pub phase: Phase,
    pub measured_temp: String,
    pub reference_temp: String,
    pub ambient_temp: String,
    pub current_load: String,
    pub thermal_image: Option<String>,
    pub normal_image: Option<String>,
    pub conclusion: String,
    pub inspector: String,
    pub date: String,
}

impl RecordDraft {
    /// Phiếu trắng đầu phiên hoặc sau khi gửi thành công
    ///
    /// Đơn vị giữ theo người đăng nhập, nhiệt độ môi trường mặc định 30°C,
    /// dòng điện mặc định 0, ngày đo lấy theo `today` (YYYY-MM-DD).
    pub fn blank(unit: &str, today: &str) -> Self {
        Self {
            unit: unit.to_string(),
            ambient_temp: "30".to_string(),
            current_load: "0".to_string(),
            date: today.to_string(),
            ..Default::default()
        }
    }
}

/// Kết quả cổng gửi dữ liệu trả về; `success` là tín hiệu duy nhất
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}
