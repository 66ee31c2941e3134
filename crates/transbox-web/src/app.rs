//! Main application component
//!
//! The root component owns the theme and tab selection and assembles the
//! two feature panels.

use sycamore::prelude::*;

use crate::components::{ConverterPanel, TranslationPanel};
use crate::state::{ActiveTab, ConversionState, Theme, TranslationState};

/// Main application component
#[component]
pub fn App() -> View {
    let theme = create_signal(Theme::Light);
    let active_tab = create_signal(ActiveTab::Translate);

    // Panel state lives on the shell so that pending completions and form
    // values survive tab switches.
    let translation = TranslationState::new();
    let conversion = ConversionState::new();

    view! {
        div(class=move || format!("app {}", theme.get().css_class())) {
            div(class="card") {
                header(class="app-header") {
                    h1 { "翻译 & 文件转换工具" }
                    button(
                        class="theme-toggle",
                        on:click=move |_| theme.set(theme.get().toggled())
                    ) {
                        (if theme.get() == Theme::Dark { "☀️" } else { "🌙" })
                    }
                }

                div(class="tab-bar") {
                    button(
                        class=move || tab_class(active_tab.get(), ActiveTab::Translate),
                        on:click=move |_| active_tab.set(ActiveTab::Translate)
                    ) {
                        "翻译"
                    }
                    button(
                        class=move || tab_class(active_tab.get(), ActiveTab::Convert),
                        on:click=move |_| active_tab.set(ActiveTab::Convert)
                    ) {
                        "转换"
                    }
                }

                (if active_tab.get() == ActiveTab::Translate {
                    view! { TranslationPanel(state=translation) }
                } else {
                    view! { ConverterPanel(state=conversion) }
                })
            }
        }
    }
}

/// Class list for a tab button, marking the active one.
fn tab_class(current: ActiveTab, tab: ActiveTab) -> String {
    if current == tab {
        "tab-button active".to_string()
    } else {
        "tab-button".to_string()
    }
}
