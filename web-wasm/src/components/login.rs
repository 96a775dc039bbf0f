//! Màn hình đăng nhập: chọn đơn vị và nhập mã truy cập

use leptos::prelude::*;
use web_sys::SubmitEvent;

use crate::config;

#[component]
pub fn Login<F>(on_login: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    let (unit, set_unit) = signal(String::new());
    let (passcode, set_passcode) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_enter = move |ev: SubmitEvent| {
        ev.prevent_default();

        if unit.get().is_empty() {
            set_error.set("Vui lòng chọn đơn vị".to_string());
            return;
        }
        // Mã dùng chung chỉ để chặn người lạ, không phải xác thực thật
        if config::ACCESS_CODES.contains(&passcode.get().as_str()) {
            on_login(unit.get());
        } else {
            set_error.set("Mã truy cập không chính xác".to_string());
        }
    };

    view! {
        <div class="login-card">
            <h2>"Đăng nhập hệ thống"</h2>
            <form on:submit=on_enter>
                <div class="form-group">
                    <label for="unit">"Đơn vị công tác"</label>
                    <select
                        id="unit"
                        on:change=move |ev| set_unit.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || unit.get().is_empty()>
                            "-- Chọn đơn vị --"
                        </option>
                        {config::UNITS
                            .iter()
                            .map(|u| {
                                let u = *u;
                                view! {
                                    <option value=u selected=move || unit.get() == u>{u}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="passcode">"Mã truy cập (Passcode)"</label>
                    <input
                        type="password"
                        id="passcode"
                        placeholder="Nhập mã bảo mật"
                        prop:value=move || passcode.get()
                        on:input=move |ev| set_passcode.set(event_target_value(&ev))
                    />
                </div>

                <Show when=move || !error.get().is_empty()>
                    <p class="field-error">{move || error.get()}</p>
                </Show>

                <button type="submit" class="btn btn-dark">
                    "Bắt đầu đo hiện trường"
                </button>
            </form>
        </div>
    }
}
