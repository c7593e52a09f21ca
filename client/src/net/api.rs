//! Detect API client.
//!
//! Client-side (hydrate): real multipart upload via `gloo-net` + `FormData`.
//! Server-side (SSR) has no browser files and never submits, so the concrete
//! client only exists under `hydrate`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`DetectError`]. Non-success statuses read
//! the body as text so the service's own message can be shown.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DetectError, DetectionResult};
use crate::util::preview::PreviewUrl;

/// Endpoint that accepts an image upload.
pub const DETECT_ENDPOINT: &str = "/api/detect";

/// Multipart field carrying the image.
pub const FILE_FIELD: &str = "file";

/// A file chosen by the user for upload.
pub trait UploadFile {
    fn file_name(&self) -> String;

    /// Create a temporary URL that displays this file locally.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::Preview`] if the host cannot create one.
    fn preview_url(&self) -> Result<PreviewUrl, DetectError>;
}

/// The single request/response cycle against the detect service.
#[async_trait::async_trait(?Send)]
pub trait DetectApi {
    type File: UploadFile;

    /// Upload `file` and decode the service's answer.
    ///
    /// # Errors
    ///
    /// See [`DetectError`] for the failure tiers.
    async fn detect(&self, file: &Self::File) -> Result<DetectionResult, DetectError>;
}

/// Interpret a finished response from its status and body text.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_response(status: u16, body: String) -> Result<DetectionResult, DetectError> {
    if !(200..300).contains(&status) {
        return Err(DetectError::Rejected { status, body });
    }
    super::types::decode_detection(&body)
}

/// A file picked through the page's `<input type="file">`.
#[cfg(feature = "hydrate")]
pub struct BrowserFile(pub web_sys::File);

#[cfg(feature = "hydrate")]
impl BrowserFile {
    /// All files currently selected in `input`, in selection order.
    pub fn from_input(input: &web_sys::HtmlInputElement) -> Vec<Self> {
        let Some(list) = input.files() else {
            return Vec::new();
        };
        (0..list.length()).filter_map(|i| list.get(i)).map(Self).collect()
    }
}

#[cfg(feature = "hydrate")]
impl UploadFile for BrowserFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn preview_url(&self) -> Result<PreviewUrl, DetectError> {
        crate::util::preview::object_url_for(&self.0).map_err(DetectError::Preview)
    }
}

/// `DetectApi` over the browser's fetch, posting to a same-origin endpoint.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct GlooDetectApi {
    endpoint: String,
}

#[cfg(feature = "hydrate")]
impl Default for GlooDetectApi {
    fn default() -> Self {
        Self { endpoint: DETECT_ENDPOINT.to_owned() }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl DetectApi for GlooDetectApi {
    type File = BrowserFile;

    async fn detect(&self, file: &BrowserFile) -> Result<DetectionResult, DetectError> {
        use crate::util::dom::js_error_text;

        let form = web_sys::FormData::new().map_err(|e| DetectError::Transport(js_error_text(&e)))?;
        form.append_with_blob_and_filename(FILE_FIELD, &file.0, &file.file_name())
            .map_err(|e| DetectError::Transport(js_error_text(&e)))?;

        let resp = gloo_net::http::Request::post(&self.endpoint)
            .body(form)
            .map_err(|e| DetectError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| DetectError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| DetectError::Transport(e.to_string()))?;
        interpret_response(status, body)
    }
}
