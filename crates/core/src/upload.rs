//! Object naming and URL helpers for image uploads.
//!
//! Uploaded objects are stored flat in the bucket under
//! `{unix_millis}-{random}.{ext}` so names never collide and sort by upload
//! time. The public URL is the configured base URL joined with that key.

use rand::Rng;

/// Length of the random suffix in generated object names.
pub const RANDOM_SUFFIX_LEN: usize = 13;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Only `image/*` content types may be uploaded.
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Extension of an uploaded file name: everything after the last `.`.
///
/// A name without a dot is returned whole, so `"photo"` yields `"photo"`.
pub fn file_extension(original_name: &str) -> &str {
    original_name.rsplit('.').next().unwrap_or(original_name)
}

/// Build a collision-resistant object key for an uploaded file.
///
/// ```
/// use portfolio_core::upload::unique_file_name;
///
/// let name = unique_file_name("cover.PNG", 1_700_000_000_000, &mut rand::rng());
/// assert!(name.starts_with("1700000000000-"));
/// assert!(name.ends_with(".PNG"));
/// ```
pub fn unique_file_name<R: Rng + ?Sized>(original_name: &str, now_millis: i64, rng: &mut R) -> String {
    let suffix: String = (0..RANDOM_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{now_millis}-{suffix}.{}", file_extension(original_name))
}

/// Object key referenced by a public URL: its last path segment.
///
/// Returns an empty string when the URL ends with `/`.
pub fn key_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or("")
}

/// Public URL for an object key under `base_url`.
pub fn public_url(base_url: &str, key: &str) -> String {
    format!("{}/{key}", base_url.trim_end_matches('/'))
}
