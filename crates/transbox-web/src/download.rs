//! Download handles for generated artifacts.
//!
//! A conversion result is exposed to the page as a blob object URL. Object
//! URLs are browser-held resources, so the handle revokes its URL on drop.

use std::rc::Rc;

use transbox_core::ConversionArtifact;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

/// Object URL that is revoked when the handle drops.
#[derive(Debug)]
struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Wraps `content` in a blob and publishes an object URL for it.
    fn for_text(content: &str, mime_type: &str) -> Result<ObjectUrl, JsValue> {
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = BlobPropertyBag::new();
        options.set_type(mime_type);

        let blob = Blob::new_with_str_sequence_and_options(parts.as_ref(), &options)?;
        let url = Url::create_object_url_with_blob(&blob)?;
        Ok(ObjectUrl { url })
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(err) = Url::revoke_object_url(&self.url) {
            log::warn!("failed to revoke object url: {:?}", err);
        }
    }
}

/// A ready-to-download conversion artifact.
///
/// Cheap to clone; all clones share one object URL, which is released when
/// the last clone drops.
#[derive(Debug, Clone)]
pub struct DownloadFile {
    name: String,
    url: Rc<ObjectUrl>,
}

impl DownloadFile {
    /// Publishes `artifact` under a fresh object URL.
    pub fn new(artifact: &ConversionArtifact) -> Result<DownloadFile, JsValue> {
        let url = ObjectUrl::for_text(&artifact.content, artifact.mime_type)?;
        Ok(DownloadFile {
            name: artifact.file_name.clone(),
            url: Rc::new(url),
        })
    }

    /// Download attribute value, `converted_file.<extension>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Object URL for the link's `href` attribute.
    pub fn url(&self) -> String {
        self.url.url.clone()
    }
}
