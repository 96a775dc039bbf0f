//! Form nhập phiếu đo nhiệt
//!
//! Mọi ô nhập gắn vào một `RwSignal<RecordDraft>` duy nhất. Nút AI và nút
//! gửi mỗi nút chỉ cho một request đang bay; đây là chặn ở mức giao diện,
//! mỗi phiếu thuộc về đúng một phiên nhập nên không cần khoá gì thêm.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;

use smart_thermal_common::{InspectionType, Phase, RecordDraft};

use crate::api::gemini;
use crate::components::image_picker::ImagePicker;

#[component]
pub fn ThermalForm<F>(
    draft: RwSignal<RecordDraft>,
    is_submitting: ReadSignal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let (ai_analyzing, set_ai_analyzing) = signal(false);

    let can_analyze =
        move || !ai_analyzing.get() && draft.with(|d| !d.measured_temp.trim().is_empty());

    // Gọi cổng AI rồi ghi đè ô kết luận; cổng luôn trả về một chuỗi nào đó
    // nên nhánh này không có đường lỗi
    let on_analyze = move |_| {
        if ai_analyzing.get() {
            return;
        }
        let (measured, reference, load) = draft.with(|d| {
            (
                d.measured_temp.trim().parse::<f64>().ok(),
                d.reference_temp.trim().parse::<f64>().ok(),
                d.current_load.trim().parse::<f64>().unwrap_or(0.0),
            )
        });
        let (Some(measured), Some(reference)) = (measured, reference) else {
            return;
        };

        set_ai_analyzing.set(true);
        spawn_local(async move {
            let advisory = gemini::fetch_advisory(measured, reference, load).await;
            draft.update(|d| d.conclusion = advisory);
            set_ai_analyzing.set(false);
        });
    };

    let submit = {
        let on_submit = on_submit.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            on_submit(());
        }
    };

    view! {
        <form class="record-form" on:submit=submit>
            <div class="form-group">
                <label for="station-name">"Tên Trạm / Đường dây"</label>
                <input
                    type="text"
                    id="station-name"
                    required=true
                    placeholder="VD: TBA 110kV Đông Anh"
                    prop:value=move || draft.with(|d| d.station_name.clone())
                    on:input=move |ev| draft.update(|d| d.station_name = event_target_value(&ev))
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="feeder">"Xuất tuyến"</label>
                    <input
                        type="text"
                        id="feeder"
                        required=true
                        placeholder="VD: 471, 473..."
                        prop:value=move || draft.with(|d| d.feeder.clone())
                        on:input=move |ev| draft.update(|d| d.feeder = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="inspection-type">"Loại kiểm tra"</label>
                    <select
                        id="inspection-type"
                        on:change=move |ev| {
                            draft.update(|d| {
                                d.inspection_type = InspectionType::from_wire(&event_target_value(&ev));
                            });
                        }
                    >
                        {InspectionType::ALL
                            .iter()
                            .map(|t| {
                                let t = *t;
                                view! {
                                    <option
                                        value=t.as_str()
                                        selected=move || draft.with(|d| d.inspection_type == t)
                                    >
                                        {t.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="device-location">"Vị trí / Thiết bị"</label>
                    <input
                        type="text"
                        id="device-location"
                        required=true
                        placeholder="VD: Dao cách ly 171-1"
                        prop:value=move || draft.with(|d| d.device_location.clone())
                        on:input=move |ev| draft.update(|d| d.device_location = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="phase">"Pha"</label>
                    <select
                        id="phase"
                        on:change=move |ev| {
                            draft.update(|d| d.phase = Phase::from_wire(&event_target_value(&ev)));
                        }
                    >
                        {Phase::ALL
                            .iter()
                            .map(|p| {
                                let p = *p;
                                view! {
                                    <option
                                        value=p.as_str()
                                        selected=move || draft.with(|d| d.phase == p)
                                    >
                                        {p.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="measure-panel">
                <h3>"Số liệu đo nhiệt độ (°C)"</h3>
                <div class="measure-grid">
                    <div class="form-group">
                        <label for="measured-temp">"Nhiệt độ đo (t1)"</label>
                        <input
                            type="number"
                            id="measured-temp"
                            step="0.1"
                            required=true
                            prop:value=move || draft.with(|d| d.measured_temp.clone())
                            on:input=move |ev| draft.update(|d| d.measured_temp = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="reference-temp">"Nhiệt độ tham chiếu (t2)"</label>
                        <input
                            type="number"
                            id="reference-temp"
                            step="0.1"
                            required=true
                            prop:value=move || draft.with(|d| d.reference_temp.clone())
                            on:input=move |ev| draft.update(|d| d.reference_temp = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="ambient-temp">"Môi trường"</label>
                        <input
                            type="number"
                            id="ambient-temp"
                            step="0.1"
                            prop:value=move || draft.with(|d| d.ambient_temp.clone())
                            on:input=move |ev| draft.update(|d| d.ambient_temp = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="current-load">"Dòng điện (A)"</label>
                        <input
                            type="number"
                            id="current-load"
                            step="1"
                            prop:value=move || draft.with(|d| d.current_load.clone())
                            on:input=move |ev| draft.update(|d| d.current_load = event_target_value(&ev))
                        />
                    </div>
                </div>
            </div>

            <div class="form-row">
                <ImagePicker
                    label="Ảnh nhiệt"
                    caption="Chụp ảnh nhiệt"
                    image=Signal::derive(move || draft.with(|d| d.thermal_image.clone()))
                    on_capture=move |data_url| draft.update(|d| d.thermal_image = Some(data_url))
                />
                <ImagePicker
                    label="Ảnh thường"
                    caption="Chụp ảnh thường"
                    image=Signal::derive(move || draft.with(|d| d.normal_image.clone()))
                    on_capture=move |data_url| draft.update(|d| d.normal_image = Some(data_url))
                />
            </div>

            <div class="form-group">
                <div class="conclusion-head">
                    <label for="conclusion">"Đánh giá / Kết luận"</label>
                    <button
                        type="button"
                        class="btn btn-ai"
                        disabled=move || !can_analyze()
                        on:click=on_analyze
                    >
                        {move || if ai_analyzing.get() { "Đang phân tích..." } else { "AI Phân tích" }}
                    </button>
                </div>
                <textarea
                    id="conclusion"
                    placeholder="Nhập kết luận đánh giá..."
                    prop:value=move || draft.with(|d| d.conclusion.clone())
                    on:input=move |ev| draft.update(|d| d.conclusion = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="inspector">"Người đo"</label>
                    <input
                        type="text"
                        id="inspector"
                        required=true
                        placeholder="Tên nhân viên"
                        prop:value=move || draft.with(|d| d.inspector.clone())
                        on:input=move |ev| draft.update(|d| d.inspector = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="date">"Ngày đo"</label>
                    <input
                        type="date"
                        id="date"
                        required=true
                        prop:value=move || draft.with(|d| d.date.clone())
                        on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                    />
                </div>
            </div>

            <button
                type="submit"
                class="btn btn-primary btn-submit"
                disabled=move || is_submitting.get()
            >
                {move || if is_submitting.get() { "Đang gửi dữ liệu..." } else { "Gửi kết quả đo" }}
            </button>
        </form>
    }
}
