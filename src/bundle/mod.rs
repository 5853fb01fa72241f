//! Bundle output stream and banner splicing
//!
//! A bundle produced by the host bundler is laid out as
//! `[UMD prelude, bundler prelude, modules, bundler postlude, UMD postlude, source map?]`.
//! The only place this crate touches it is offset zero: [`splice`] prepends the
//! rendered banner and leaves every other byte where it was.

pub mod layout;

pub use layout::{inspect, BundleLayout};

use crate::banner::RenderedBanner;

/// Bundler output that has not been written out yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleStream {
    bytes: Vec<u8>,
}

impl BundleStream {
    /// Wrap raw bundle bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Current content
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the stream is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the stream for write-out; nothing can be spliced afterwards
    pub fn finalize(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for BundleStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<String> for BundleStream {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl From<&str> for BundleStream {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

/// Prepend `banner` to `stream`
///
/// The result is the banner bytes followed by the original bytes, unchanged. Its
/// length is always `banner.len() + stream.len()`. An empty banner returns the
/// stream as is.
///
/// # Examples
///
/// ```
/// use bundle_banner::banner::CommentStyle;
/// use bundle_banner::bundle::{splice, BundleStream};
///
/// let banner = CommentStyle::Block.wrap("fizz-buzz v1.0.0");
/// let stream = BundleStream::from("(function(f){ /* umd */ })();\n//# sourceMappingURL=bundle.js.map\n");
/// let original_len = stream.len();
///
/// let out = splice(stream, &banner);
/// assert_eq!(out.len(), banner.len() + original_len);
/// assert!(out.as_bytes().starts_with(banner.as_bytes()));
/// assert!(out.as_bytes().ends_with(b"//# sourceMappingURL=bundle.js.map\n"));
/// ```
pub fn splice(stream: BundleStream, banner: &RenderedBanner) -> BundleStream {
    if banner.is_empty() {
        return stream;
    }

    let mut bytes = Vec::with_capacity(banner.len() + stream.len());
    bytes.extend_from_slice(banner.as_bytes());
    bytes.extend_from_slice(&stream.bytes);

    log::debug!(
        "spliced {} banner byte(s) ahead of {} bundle byte(s)",
        banner.len(),
        stream.len()
    );
    BundleStream { bytes }
}
