//! Luồng nghiệp vụ đầy đủ của một phiếu đo: nhập -> kiểm tra -> phân loại
//! -> gửi qua cổng giả lập -> làm mới phiếu

use std::cell::RefCell;

use smart_thermal_common::{classify, validate, RecordDraft, Severity, SubmitOutcome, ThermalRecord};

/// Cổng gửi giả lập: ghi lại payload đã nhận và trả kết quả định trước
struct StubGateway {
    accept: bool,
    received: RefCell<Vec<String>>,
}

impl StubGateway {
    fn new(accept: bool) -> Self {
        Self {
            accept,
            received: RefCell::new(Vec::new()),
        }
    }

    fn submit(&self, record: &ThermalRecord) -> SubmitOutcome {
        let payload = serde_json::to_string(record).expect("serialize phiếu đo");
        self.received.borrow_mut().push(payload);
        if self.accept {
            SubmitOutcome {
                success: true,
                message: "Dữ liệu đã được gửi thành công!".to_string(),
            }
        } else {
            SubmitOutcome {
                success: false,
                message: "Không thể kết nối với máy chủ Google".to_string(),
            }
        }
    }
}

fn filled_draft() -> RecordDraft {
    let mut draft = RecordDraft::blank("Điện lực Miền Trung", "2026-08-06");
    draft.station_name = "TBA 110kV Đông Anh".to_string();
    draft.device_location = "Dao cách ly 171-1".to_string();
    draft.feeder = "471".to_string();
    draft.measured_temp = "50".to_string();
    draft.reference_temp = "25".to_string();
    draft.current_load = "100".to_string();
    draft.inspector = "Nguyễn Văn An".to_string();
    draft
}

#[test]
fn danger_record_submits_and_resets() {
    let draft = filled_draft();

    let mut record = validate(&draft).expect("phiếu hợp lệ");
    let result = classify(record.measured_temp, record.reference_temp, record.current_load);
    assert_eq!(result.severity, Severity::Danger);
    assert!((result.delta_t - 25.0).abs() < f64::EPSILON);
    record.conclusion = result.advisory;

    let gateway = StubGateway::new(true);
    let outcome = gateway.submit(&record);
    assert!(outcome.success);

    // Gửi thành công: thay phiếu bằng bản trắng, chỉ giữ lại đơn vị
    let fresh = RecordDraft::blank(&record.unit, "2026-08-06");
    assert_eq!(fresh.unit, "Điện lực Miền Trung");
    assert_eq!(fresh.station_name, "");
    assert_eq!(fresh.measured_temp, "");
    assert_eq!(fresh.ambient_temp, "30");
    assert_eq!(fresh.current_load, "0");
    assert_eq!(fresh.conclusion, "");

    let received = gateway.received.borrow();
    assert_eq!(received.len(), 1);
    assert!(received[0].contains("\"measuredTemp\":50.0"));
    assert!(received[0].contains("\"stationName\":\"TBA 110kV Đông Anh\""));
    assert!(received[0].contains("Nguy hiểm (Phát nóng rõ rệt)"));
}

#[test]
fn failed_submission_keeps_the_draft() {
    let draft = filled_draft();
    let record = validate(&draft).expect("phiếu hợp lệ");

    let gateway = StubGateway::new(false);
    let outcome = gateway.submit(&record);
    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());

    // Thất bại: bản nháp giữ nguyên cho lần gửi lại
    assert_eq!(draft.measured_temp, "50");
    assert_eq!(draft.inspector, "Nguyễn Văn An");
}

#[test]
fn invalid_draft_never_reaches_the_gateway() {
    let mut draft = filled_draft();
    draft.inspector.clear();

    let err = validate(&draft).expect_err("phải bị chặn");
    assert!(err.fields.contains(&"Người đo"));

    // Không có phiếu hợp lệ thì không có gì để gửi
    let gateway = StubGateway::new(true);
    assert!(gateway.received.borrow().is_empty());
}
