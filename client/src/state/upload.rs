//! Upload flow: one image, one detect request, one rendered result.
//!
//! DESIGN
//! ======
//! `handle_submit` drives the whole submission against two seams: an
//! [`UploadView`] for everything the page displays and a [`DetectApi`] for the
//! network. The page implements the view over an `RwSignal<UploadState>`;
//! tests implement it over a recording fake.
//!
//! Every failure is absorbed here and turned into results-area text, and the
//! loader is hidden exactly once on every path that showed it.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::net::api::{DetectApi, UploadFile};
use crate::net::types::DetectError;
use crate::util::preview::PreviewUrl;

/// Alert text when the form is submitted without a file.
pub const MISSING_FILE_MESSAGE: &str = "Please select an image file.";

/// Display state of the upload section.
#[derive(Debug, Default, PartialEq)]
pub struct UploadState {
    /// Loader visibility.
    pub loading: bool,
    /// A submission is in flight; the submit button is disabled.
    pub submitting: bool,
    /// Results container visibility.
    pub results_visible: bool,
    /// Text replacing the results content (server error or generic failure).
    pub message: Option<String>,
    /// Local preview of the uploaded file.
    pub input_image: Option<PreviewUrl>,
    /// Processed image reference returned by the service.
    pub output_image: Option<String>,
}

impl UploadState {
    pub fn show_loader(&mut self) {
        self.loading = true;
    }

    pub fn hide_loader(&mut self) {
        self.loading = false;
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Replace the results content with `message`, dropping both images.
    pub fn show_message(&mut self, message: String) {
        self.message = Some(message);
        self.input_image = None;
        self.output_image = None;
        self.results_visible = true;
    }

    /// Set the input preview. The previous preview is released.
    pub fn set_input_image(&mut self, preview: PreviewUrl) {
        self.input_image = Some(preview);
    }

    pub fn set_output_image(&mut self, url: String) {
        self.output_image = Some(url);
    }

    /// Show the image pair, clearing any earlier message.
    pub fn show_results(&mut self) {
        self.message = None;
        self.results_visible = true;
    }

    #[must_use]
    pub fn input_image_url(&self) -> Option<&str> {
        self.input_image.as_ref().map(PreviewUrl::as_str)
    }
}

/// Everything the submit handler changes on the page.
///
/// Methods take `&self` because the view is shared with the reactive tree
/// while the request is awaited.
pub trait UploadView {
    fn is_submitting(&self) -> bool;
    fn set_submitting(&self, submitting: bool);
    fn show_loader(&self);
    fn hide_loader(&self);
    /// Blocking user notification.
    fn alert(&self, message: &str);
    fn show_message(&self, message: String);
    fn set_input_image(&self, preview: PreviewUrl);
    fn set_output_image(&self, url: String);
    fn show_results(&self);
}

/// The page's view: reactive state plus the browser alert.
impl UploadView for RwSignal<UploadState> {
    fn is_submitting(&self) -> bool {
        self.with_untracked(|s| s.submitting)
    }

    fn set_submitting(&self, submitting: bool) {
        self.update(|s| s.set_submitting(submitting));
    }

    fn show_loader(&self) {
        self.update(UploadState::show_loader);
    }

    fn hide_loader(&self) {
        self.update(UploadState::hide_loader);
    }

    fn alert(&self, message: &str) {
        crate::util::dom::alert(message);
    }

    fn show_message(&self, message: String) {
        self.update(|s| s.show_message(message));
    }

    fn set_input_image(&self, preview: PreviewUrl) {
        self.update(|s| s.set_input_image(preview));
    }

    fn set_output_image(&self, url: String) {
        self.update(|s| s.set_output_image(url));
    }

    fn show_results(&self) {
        self.update(UploadState::show_results);
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was still in flight; nothing happened.
    Ignored,
    /// No file was selected; the user was alerted.
    MissingFile,
    /// Input preview and output image are on screen.
    Displayed,
    /// The failure was rendered into the results area.
    Failed(DetectError),
}

/// Handle one form submission end to end.
///
/// Only the first selected file is uploaded.
pub async fn handle_submit<V, A>(view: &V, api: &A, files: Vec<A::File>) -> SubmitOutcome
where
    V: UploadView + ?Sized,
    A: DetectApi + ?Sized,
{
    if view.is_submitting() {
        leptos::logging::log!("submit ignored: upload already in flight");
        return SubmitOutcome::Ignored;
    }

    view.show_loader();

    let Some(file) = files.into_iter().next() else {
        view.alert(MISSING_FILE_MESSAGE);
        view.hide_loader();
        return SubmitOutcome::MissingFile;
    };

    view.set_submitting(true);
    let outcome = match display_detection(view, api, &file).await {
        Ok(()) => SubmitOutcome::Displayed,
        Err(err) => {
            if err.is_server_reported() {
                leptos::logging::warn!("detect for {} rejected: {err}", file.file_name());
            } else {
                leptos::logging::error!("detect for {} failed: {err}", file.file_name());
            }
            view.show_message(err.results_message());
            SubmitOutcome::Failed(err)
        }
    };
    view.set_submitting(false);
    view.hide_loader();
    outcome
}

async fn display_detection<V, A>(view: &V, api: &A, file: &A::File) -> Result<(), DetectError>
where
    V: UploadView + ?Sized,
    A: DetectApi + ?Sized,
{
    let result = api.detect(file).await?;
    let preview = file.preview_url()?;
    view.set_input_image(preview);
    view.set_output_image(result.output_image);
    view.show_results();
    Ok(())
}
