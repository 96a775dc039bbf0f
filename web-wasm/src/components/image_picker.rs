//! Ô chụp ảnh hiện trường
//!
//! Input file với capture="environment" để mở thẳng camera sau trên điện
//! thoại; ảnh được FileReader đọc thành data URL base64 và xem trước ngay.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, FileReader, HtmlInputElement};

#[component]
pub fn ImagePicker<F>(
    label: &'static str,
    caption: &'static str,
    #[prop(into)] image: Signal<Option<String>>,
    on_capture: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            read_as_data_url(file, on_capture.clone());
        }
    };

    view! {
        <div class="image-picker">
            <label>{label}</label>
            <div class="image-tile">
                <Show
                    when=move || image.get().is_some()
                    fallback=move || view! { <span class="image-caption">{caption}</span> }
                >
                    <img src=move || image.get().unwrap_or_default() alt=label />
                </Show>
                <input
                    type="file"
                    accept="image/*"
                    capture="environment"
                    class="file-input"
                    on:change=on_change
                />
            </div>
        </div>
    }
}

fn read_as_data_url<F>(file: File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
