//! Processing bridge to transbox-core
//!
//! This module drives the two mock operations from the UI. It waits out the
//! simulated backend latency and then applies the engine outcome to the
//! panel state. A completion is dropped when the panel's generation token
//! changed while the call was in flight.

use transbox_core::{
    convert, translate, ConversionRequest, Error, TranslationRequest, CONVERSION_DELAY_MS,
    TRANSLATION_DELAY_MS,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::download::DownloadFile;
use crate::state::{ConversionState, TranslationState};

/// Message shown when the simulated translation call fails.
const TRANSLATION_FAILED: &str = "翻译失败。请稍后再试。";

/// Message shown when the simulated conversion call fails.
const CONVERSION_FAILED: &str = "文件转换失败，请稍后再试";

/// Start a translation for the current form state.
pub fn submit_translation(state: TranslationState) {
    if state.is_busy() {
        return;
    }

    let request = TranslationRequest {
        text: state.input.get_clone(),
        languages: state.languages.get(),
    };
    if request.text.trim().is_empty() {
        // No busy transition without text, just the validation message.
        state.fail(Error::EmptyInput.to_string());
        return;
    }

    let token = state.bump_generation();
    state.begin();

    spawn_local(async move {
        let result = simulate_latency(TRANSLATION_DELAY_MS)
            .await
            .map_err(|err| {
                log::error!("translation call failed: {:?}", err);
                Error::OperationFailed(TRANSLATION_FAILED.to_string())
            })
            .and_then(|_| translate(&request));

        if !state.accepts(token) {
            log::debug!("dropping stale translation completion");
            return;
        }

        match result {
            Ok(text) => state.complete(text),
            Err(err) => state.fail(err.to_string()),
        }
    });
}

/// Start a conversion for the current form state.
pub fn submit_conversion(state: ConversionState) {
    if state.is_busy() {
        return;
    }

    let request = ConversionRequest {
        file_name: state.file_name.get_clone(),
        format: state.format.get(),
    };
    if request.file_name.is_none() {
        // No busy transition without a file, just the validation message.
        state.fail(Error::NoFileSelected.to_string());
        return;
    }

    let token = state.bump_generation();
    state.begin();

    spawn_local(async move {
        let result = simulate_latency(CONVERSION_DELAY_MS)
            .await
            .map_err(|err| {
                log::error!("conversion call failed: {:?}", err);
                Error::OperationFailed(CONVERSION_FAILED.to_string())
            })
            .and_then(|_| convert(&request, &local_timestamp()))
            .and_then(|artifact| {
                DownloadFile::new(&artifact).map_err(|err| {
                    log::error!("could not create download url: {:?}", err);
                    Error::OperationFailed(CONVERSION_FAILED.to_string())
                })
            });

        if !state.accepts(token) {
            log::debug!("dropping stale conversion completion");
            return;
        }

        match result {
            Ok(download) => state.complete(download),
            Err(err) => state.fail(err.to_string()),
        }
    });
}

/// Wait out the simulated backend latency on the browser event loop.
async fn simulate_latency(ms: u32) -> Result<(), JsValue> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let scheduled = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))
            .and_then(|window| {
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
            });
        if let Err(err) = scheduled {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });

    JsFuture::from(promise).await?;
    Ok(())
}

/// Current time in the zh-CN format the artifact embeds.
fn local_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("zh-CN", &JsValue::UNDEFINED)
        .into()
}
