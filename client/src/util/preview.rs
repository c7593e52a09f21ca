//! Owned temporary object URLs for local image previews.
//!
//! `URL.createObjectURL` pins the blob in memory until the URL is revoked.
//! `PreviewUrl` ties that release to `Drop`, so replacing or clearing the
//! preview in `UploadState` frees the previous blob.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use std::fmt;

/// A preview URL that runs its release hook exactly once when dropped.
pub struct PreviewUrl {
    url: String,
    release: Option<fn(&str)>,
}

impl PreviewUrl {
    /// Wrap `url`, calling `release` with it on drop.
    #[must_use]
    pub fn new(url: impl Into<String>, release: fn(&str)) -> Self {
        Self { url: url.into(), release: Some(release) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(&self.url);
        }
    }
}

impl fmt::Debug for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewUrl").field("url", &self.url).finish_non_exhaustive()
    }
}

impl PartialEq for PreviewUrl {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

/// Create an object URL for `blob`, revoked when the returned value drops.
///
/// # Errors
///
/// Returns the browser's error text if the URL cannot be created.
#[cfg(feature = "hydrate")]
pub fn object_url_for(blob: &web_sys::Blob) -> Result<PreviewUrl, String> {
    web_sys::Url::create_object_url_with_blob(blob)
        .map(|url| PreviewUrl::new(url, revoke_object_url))
        .map_err(|e| crate::util::dom::js_error_text(&e))
}

#[cfg(feature = "hydrate")]
fn revoke_object_url(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        leptos::logging::warn!("failed to revoke preview url {url}: {}", crate::util::dom::js_error_text(&e));
    }
}
