//! File conversion panel
//!
//! File picker, output format selection, and the mock convert action with
//! a generated download link.

use sycamore::prelude::*;
use transbox_core::OutputFormat;

use crate::processing;
use crate::state::ConversionState;

/// Conversion form with file drop zone and download link.
#[component(inline_props)]
pub fn ConverterPanel(state: ConversionState) -> View {
    let can_submit = create_memo(move || state.can_submit());

    view! {
        div(class="panel") {
            div(class="field") {
                label(r#for="fileInput") { "选择文件:" }
                label(class="drop-zone", r#for="fileInput") {
                    span(class="drop-zone-icon") { "📄" }
                    span(class="drop-zone-text") {
                        (state.file_name.with(|name| {
                            name.clone().unwrap_or_else(|| "点击或拖拽文件到此处".to_string())
                        }))
                    }
                }
                input(
                    id="fileInput",
                    r#type="file",
                    class="hidden-input",
                    on:change=move |ev| {
                        if let Some(file) = super::picked_file(&ev) {
                            state.select_file(file.name());
                        }
                    }
                )
            }

            div(class="field") {
                label(r#for="outputFormat") { "输出格式:" }
                select(
                    id="outputFormat",
                    prop:value=move || state.format.get().extension().to_string(),
                    on:change=move |ev| {
                        if let Some(extension) = super::select_value(&ev) {
                            if let Some(format) = OutputFormat::from_extension(&extension) {
                                state.format.set(format);
                            }
                        }
                    }
                ) {
                    option(value="pdf") { "PDF" }
                    option(value="docx") { "DOCX" }
                    option(value="txt") { "TXT" }
                    option(value="jpg") { "JPG" }
                }
            }

            button(
                class="submit-button convert",
                disabled=move || !can_submit.get(),
                on:click=move |_| processing::submit_conversion(state)
            ) {
                (if state.is_busy() { "转换中..." } else { "转换文件" })
            }

            (if state.error_message().is_some() {
                view! {
                    div(class="error-banner") {
                        (state.error_message().unwrap_or_default())
                    }
                }
            } else {
                view! {}
            })

            (if state.download.with(|download| download.is_some()) {
                view! {
                    a(
                        class="download-link",
                        href=move || state.download.with(|download| {
                            download.as_ref().map(|file| file.url()).unwrap_or_default()
                        }),
                        download=move || state.download.with(|download| {
                            download.as_ref().map(|file| file.name().to_string()).unwrap_or_default()
                        })
                    ) {
                        "下载转换后的文件"
                    }
                }
            } else {
                view! {}
            })
        }
    }
}
