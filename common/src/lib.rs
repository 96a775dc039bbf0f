//! Thư viện dùng chung của PCQN Smart Thermal
//!
//! Kiểu phiếu đo, luật phân loại ΔT và phần sinh prompt chẩn đoán,
//! dùng chung giữa ứng dụng web (WASM) và test chạy native

pub mod classify;
pub mod prompts;
pub mod types;
pub mod validate;

pub use classify::{classify, Classification, Severity};
pub use prompts::{build_advisory_prompt, clean_advisory, FALLBACK_ADVISORY, STEADY_ADVISORY};
pub use types::{InspectionType, Phase, RecordDraft, SubmitOutcome, ThermalRecord};
pub use validate::{validate, ValidationError};
