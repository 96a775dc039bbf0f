//! Phân loại mức phát nóng theo chênh lệch nhiệt ΔT
//!
//! Ngưỡng theo quy trình thí nghiệm camera nhiệt của EVN:
//! dưới 5°C bình thường, 5-15°C theo dõi, 15-35°C nguy hiểm,
//! từ 35°C trở lên đặc biệt nguy hiểm. Cận dưới thuộc mức trên.

/// ΔT bắt đầu mức "Theo dõi"
pub const WATCH_THRESHOLD: f64 = 5.0;
/// ΔT bắt đầu mức "Nguy hiểm"
pub const DANGER_THRESHOLD: f64 = 15.0;
/// ΔT bắt đầu mức "Đặc biệt nguy hiểm"
pub const CRITICAL_THRESHOLD: f64 = 35.0;

/// Mức nghiêm trọng của điểm phát nóng
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Normal,
    Watch,
    Danger,
    Critical,
}

impl Severity {
    /// Xếp mức theo ΔT; ΔT âm vẫn là bình thường, không có ngoại lệ riêng
    pub fn from_delta(delta_t: f64) -> Self {
        if delta_t >= CRITICAL_THRESHOLD {
            Severity::Critical
        } else if delta_t >= DANGER_THRESHOLD {
            Severity::Danger
        } else if delta_t >= WATCH_THRESHOLD {
            Severity::Watch
        } else {
            Severity::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Normal => "Bình thường",
            Severity::Watch => "Theo dõi (Chớm phát nóng)",
            Severity::Danger => "Nguy hiểm (Phát nóng rõ rệt)",
            Severity::Critical => "Đặc biệt nguy hiểm",
        }
    }
}

/// Kết quả phân loại kèm khuyến nghị ngắn để điền vào ô kết luận
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub severity: Severity,
    pub delta_t: f64,
    pub advisory: String,
}

/// Phân loại từ số liệu đo
///
/// Hàm thuần, không bao giờ lỗi. Mức nghiêm trọng chỉ phụ thuộc ΔT;
/// phụ tải chỉ xuất hiện trong câu khuyến nghị.
pub fn classify(measured: f64, reference: f64, load: f64) -> Classification {
    let delta_t = measured - reference;
    let severity = Severity::from_delta(delta_t);

    let action = match severity {
        Severity::Normal => "Tiếp tục vận hành bình thường.",
        Severity::Watch => "Tăng tần suất đo, theo dõi điểm phát nóng.",
        Severity::Danger => "Bố trí xử lý sớm, cân nhắc giảm tải.",
        Severity::Critical => "Báo điều độ cô lập thiết bị, xử lý ngay.",
    };
    let advisory = format!(
        "ΔT = {:.1}°C, phụ tải {}A: {}. {}",
        delta_t,
        load,
        severity.label(),
        action
    );

    Classification {
        severity,
        delta_t,
        advisory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_exactness() {
        // Cận dưới thuộc mức trên, ngay sát dưới vẫn thuộc mức dưới
        assert_eq!(Severity::from_delta(4.999), Severity::Normal);
        assert_eq!(Severity::from_delta(5.0), Severity::Watch);
        assert_eq!(Severity::from_delta(14.999), Severity::Watch);
        assert_eq!(Severity::from_delta(15.0), Severity::Danger);
        assert_eq!(Severity::from_delta(34.999), Severity::Danger);
        assert_eq!(Severity::from_delta(35.0), Severity::Critical);
    }

    #[test]
    fn test_negative_delta_is_normal() {
        // Thiết bị lạnh hơn tham chiếu: ΔT = -5
        let result = classify(20.0, 25.0, 50.0);
        assert_eq!(result.severity, Severity::Normal);
        assert!((result.delta_t + 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_severity_ignores_load() {
        let low_load = classify(50.0, 25.0, 0.0);
        let high_load = classify(50.0, 25.0, 400.0);
        assert_eq!(low_load.severity, high_load.severity);
        assert_eq!(low_load.severity, Severity::Danger);
    }

    #[test]
    fn test_severity_depends_only_on_delta() {
        // Cùng ΔT ở hai mức nhiệt tuyệt đối khác nhau
        assert_eq!(classify(12.0, 2.0, 0.0).severity, classify(112.0, 102.0, 0.0).severity);
    }

    #[test]
    fn test_advisory_mentions_delta_and_label() {
        let result = classify(50.0, 25.0, 100.0);
        assert!(result.advisory.contains("ΔT = 25.0°C"));
        assert!(result.advisory.contains("phụ tải 100A"));
        assert!(result.advisory.contains("Nguy hiểm (Phát nóng rõ rệt)"));
    }

    #[test]
    fn test_critical_advisory() {
        let result = classify(80.0, 30.0, 250.0);
        assert_eq!(result.severity, Severity::Critical);
        assert!(result.advisory.contains("Đặc biệt nguy hiểm"));
        assert!(!result.advisory.is_empty());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Normal < Severity::Watch);
        assert!(Severity::Watch < Severity::Danger);
        assert!(Severity::Danger < Severity::Critical);
    }
}
