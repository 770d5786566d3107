//! Query parameter types shared by handlers.

use serde::Deserialize;

/// `?featured=true` filter for project listings.
///
/// Any value other than the exact string `true` lists every project.
#[derive(Debug, Default, Deserialize)]
pub struct FeaturedParams {
    pub featured: Option<String>,
}

impl FeaturedParams {
    pub fn featured_only(&self) -> bool {
        self.featured.as_deref() == Some("true")
    }
}

/// `?key=` for presigned download URLs.
#[derive(Debug, Deserialize)]
pub struct PresignParams {
    pub key: Option<String>,
}
