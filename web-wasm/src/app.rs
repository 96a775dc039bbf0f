//! Thành phần gốc: điều hướng màn hình, banner thông báo và luồng gửi phiếu

use leptos::prelude::*;
use smart_thermal_common::{validate, RecordDraft};
use wasm_bindgen_futures::spawn_local;

use crate::api::sheets;
use crate::components::{login::Login, thermal_form::ThermalForm};
use crate::config;

/// Màn hình đang hiển thị
#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Login,
    Form,
}

/// Loại thông báo trên banner
#[derive(Clone, Copy, PartialEq, Eq)]
enum Notice {
    Success,
    Error,
}

/// Thành phần gốc của ứng dụng
#[component]
pub fn App() -> impl IntoView {
    let (view, set_view) = signal(View::Login);
    let (unit, set_unit) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (message, set_message) = signal(Option::<(Notice, String)>::None);

    // Bản nháp của phiên nhập hiện tại; làm mới bằng cách thay cả giá trị,
    // không sửa từng ô
    let draft = RwSignal::new(RecordDraft::blank("", &today_iso()));

    let on_login = move |chosen_unit: String| {
        draft.set(RecordDraft::blank(&chosen_unit, &today_iso()));
        set_unit.set(chosen_unit);
        set_message.set(None);
        set_view.set(View::Form);
    };

    let on_logout = move |_| {
        set_message.set(None);
        set_view.set(View::Login);
    };

    // Kiểm tra -> gửi -> thành công thì thay phiếu trắng (giữ đơn vị),
    // thất bại thì giữ nguyên bản nháp cho lần gửi lại
    let on_submit = move |_: ()| {
        if is_submitting.get() {
            return;
        }
        let record = match validate(&draft.get()) {
            Ok(record) => record,
            Err(err) => {
                set_message.set(Some((Notice::Error, err.to_string())));
                return;
            }
        };

        set_is_submitting.set(true);
        set_message.set(None);
        spawn_local(async move {
            let outcome = sheets::submit_record(config::GAS_URL, &record).await;
            set_is_submitting.set(false);

            if outcome.success {
                set_message.set(Some((
                    Notice::Success,
                    "Đã đồng bộ dữ liệu thành công lên hệ thống!".to_string(),
                )));
                draft.set(RecordDraft::blank(&unit.get_untracked(), &today_iso()));
                scroll_to_top();
                gloo::timers::callback::Timeout::new(5_000, move || set_message.set(None))
                    .forget();
            } else {
                set_message.set(Some((Notice::Error, outcome.message)));
            }
        });
    };

    view! {
        <div class="page">
            <header class="app-header">
                <h1>"PCQN " <span class="accent">"Smart Thermal"</span></h1>
                <div class="app-tagline">
                    <span class="badge">"Chuyển đổi số"</span>
                    <span class="subtitle">"Sổ tay Camera nhiệt thông minh"</span>
                </div>
            </header>

            {move || {
                message.get().map(|(notice, text)| {
                    let class = match notice {
                        Notice::Success => "banner banner-success",
                        Notice::Error => "banner banner-error",
                    };
                    view! { <div class=class>{text}</div> }
                })
            }}

            <Show
                when=move || view.get() == View::Form
                fallback=move || view! { <Login on_login=on_login /> }
            >
                <div class="session">
                    <div class="unit-bar">
                        <div class="unit-info">
                            <p class="unit-caption">"Cán bộ từ đơn vị"</p>
                            <p class="unit-name">{move || unit.get()}</p>
                        </div>
                        <button class="btn btn-logout" on:click=on_logout>
                            "Đăng xuất"
                        </button>
                    </div>
                    <ThermalForm draft=draft is_submitting=is_submitting on_submit=on_submit />
                </div>
            </Show>

            <footer class="app-footer">
                <p>"© 2026 Phòng Kỹ thuật - QNPC"</p>
            </footer>
        </div>
    }
}

/// Ngày hiện tại theo đồng hồ trình duyệt, dạng YYYY-MM-DD
fn today_iso() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.split('T').next().unwrap_or_default().to_string()
}

/// Cuộn lên đầu trang để người nhập thấy banner sau khi gửi
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let mut options = web_sys::ScrollToOptions::new();
        options.top(0.0);
        options.behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
