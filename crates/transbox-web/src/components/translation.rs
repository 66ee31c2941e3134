//! Translation panel
//!
//! Language pair selection, input textarea, and the mock translate action.

use sycamore::prelude::*;
use transbox_core::{Language, LanguagePair};

use crate::processing;
use crate::state::TranslationState;

/// Translation form with language selects, swap button, and result box.
#[component(inline_props)]
pub fn TranslationPanel(state: TranslationState) -> View {
    let can_submit = create_memo(move || state.can_submit());

    view! {
        div(class="panel") {
            div(class="language-row") {
                div(class="field") {
                    label(r#for="sourceLang") { "源语言:" }
                    select(
                        id="sourceLang",
                        prop:value=move || state.languages.get().source.code().to_string(),
                        on:change=move |ev| {
                            if let Some(code) = super::select_value(&ev) {
                                if let Some(language) = Language::from_code(&code) {
                                    let pair = state.languages.get();
                                    state.languages.set(LanguagePair { source: language, ..pair });
                                }
                            }
                        }
                    ) {
                        option(value="en") { "英语" }
                        option(value="zh") { "中文" }
                        option(value="es") { "西班牙语" }
                        option(value="fr") { "法语" }
                        option(value="de") { "德语" }
                    }
                }

                button(class="swap-button", on:click=move |_| state.swap_languages()) {
                    "⇄"
                }

                div(class="field") {
                    label(r#for="targetLang") { "目标语言:" }
                    select(
                        id="targetLang",
                        prop:value=move || state.languages.get().target.code().to_string(),
                        on:change=move |ev| {
                            if let Some(code) = super::select_value(&ev) {
                                if let Some(language) = Language::from_code(&code) {
                                    let pair = state.languages.get();
                                    state.languages.set(LanguagePair { target: language, ..pair });
                                }
                            }
                        }
                    ) {
                        // Keep the default target first; the select starts
                        // on its first option.
                        option(value="zh") { "中文" }
                        option(value="en") { "英语" }
                        option(value="es") { "西班牙语" }
                        option(value="fr") { "法语" }
                        option(value="de") { "德语" }
                    }
                }
            }

            div(class="field") {
                label(r#for="inputText") { "输入文本:" }
                textarea(id="inputText", rows="4", bind:value=state.input)
            }

            button(
                class="submit-button",
                disabled=move || !can_submit.get(),
                on:click=move |_| processing::submit_translation(state)
            ) {
                (if state.is_busy() { "翻译中..." } else { "翻译" })
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

            (if state.output.with(|text| !text.is_empty()) {
                view! {
                    div(class="field") {
                        label(r#for="outputText") { "翻译结果:" }
                        textarea(
                            id="outputText",
                            rows="4",
                            readonly=true,
                            prop:value=move || state.output.get_clone()
                        )
                    }
                }
            } else {
                view! {}
            })
        }
    }
}
