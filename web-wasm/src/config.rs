//! Cấu hình cố định của ứng dụng

/// URL Apps Script nhận dữ liệu về Google Sheet
pub const GAS_URL: &str = "https://script.google.com/macros/s/AKfycbypfttBiCS2KZ0aGEG91K87fIxD4gk4DubxTQELO_GBGrrxGX3cWkw9C1UOWSSQi3_nVA/exec";

/// Mã truy cập dùng chung, chỉ để chặn người lạ; không phải cơ chế xác thực
pub const ACCESS_CODES: [&str; 2] = ["123456", "evn2024"];

/// Danh sách đơn vị công tác
pub const UNITS: [&str; 7] = [
    "Truyền tải điện 1",
    "Truyền tải điện 2",
    "Điện lực Hà Nội",
    "Điện lực TP.HCM",
    "Điện lực Miền Trung",
    "Điện lực Miền Nam",
    "Khác",
];
