//! UI components for the two feature panels.

mod converter;
mod translation;

pub use converter::ConverterPanel;
pub use translation::TranslationPanel;

use wasm_bindgen::JsCast;
use web_sys::Event;

/// Current value of the `<select>` that fired this event.
fn select_value(ev: &Event) -> Option<String> {
    ev.target()?
        .dyn_into::<web_sys::HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

/// First file picked in the `<input type="file">` that fired this event.
fn picked_file(ev: &Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}
