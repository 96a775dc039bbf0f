//! Sinh prompt chẩn đoán gửi cổng AI
//!
//! Prompt cố định tiếng Việt, nêu số liệu đo và bốn mức của quy trình ΔT,
//! yêu cầu kết luận dưới 15 từ kèm hướng xử lý nhanh.

use crate::classify::{CRITICAL_THRESHOLD, DANGER_THRESHOLD, WATCH_THRESHOLD};

/// Kết luận thay thế khi cổng AI lỗi hoặc quá bận
pub const FALLBACK_ADVISORY: &str =
    "Kết quả: Cần kiểm tra thủ công theo quy trình ΔT (AI đang bận).";

/// Kết luận thay thế khi AI trả về chuỗi rỗng
pub const STEADY_ADVISORY: &str = "Dữ liệu đo ổn định, tiếp tục theo dõi.";

/// Dựng prompt chẩn đoán từ số liệu đo; ΔT làm tròn một chữ số thập phân
pub fn build_advisory_prompt(measured: f64, reference: f64, load: f64) -> String {
    let delta_t = measured - reference;
    format!(
        "Bạn là chuyên gia chẩn đoán nhiệt thiết bị điện của EVN.\n\
         Dữ liệu đo: t1={measured}°C (thiết bị), t2={reference}°C (tham chiếu), \
         ΔT={delta_t:.1}°C, phụ tải={load}A.\n\
         Dựa trên quy trình kỹ thuật:\n\
         - Nếu ΔT < {WATCH_THRESHOLD}°C: Bình thường.\n\
         - Nếu {WATCH_THRESHOLD}°C <= ΔT < {DANGER_THRESHOLD}°C: Theo dõi (Chớm phát nóng).\n\
         - Nếu {DANGER_THRESHOLD}°C <= ΔT < {CRITICAL_THRESHOLD}°C: Nguy hiểm (Phát nóng rõ rệt).\n\
         - Nếu ΔT >= {CRITICAL_THRESHOLD}°C: Đặc biệt nguy hiểm.\n\
         Hãy đưa ra kết luận cực ngắn gọn (dưới 15 từ) và hướng xử lý nhanh."
    )
}

/// Cắt khoảng trắng quanh câu trả lời; chuỗi rỗng coi như không có kết quả
pub fn clean_advisory(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
