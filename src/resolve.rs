// Copyright © 2014, Peter Atashian
use crate::{Mediawiki, Result};

const SRC_ATTR: &str = "src=\"";
const SRC_MARKER: &str = "src=\"/images/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Direct URL of the image file.
    Asset(String),
    /// The description page had no `src="/images/…"` line naming the image.
    Unresolved,
}

pub trait Resolve {
    /// Fetches the file description page of `image` and finds the stored file's URL.
    fn resolve_image(&self, image: &str) -> Result<Resolution>;
}
impl Resolve for Mediawiki {
    fn resolve_image(&self, image: &str) -> Result<Resolution> {
        let page = self.get(&self.config.description_url(image))?.text()?;
        Ok(match find_asset_path(&page, image) {
            Some(path) => Resolution::Asset(self.config.asset_url(&path)),
            None => Resolution::Unresolved,
        })
    }
}

/// Scans `page` line by line for `src="/images/` followed later on the same
/// line by `image`, and returns the server path up to and including the
/// image name. Only the first such line counts.
pub fn find_asset_path(page: &str, image: &str) -> Option<String> {
    if image.is_empty() {
        return None;
    }
    page.lines().find_map(|line| {
        let start = line.find(SRC_MARKER)? + SRC_ATTR.len();
        let end = start + line.get(start..)?.find(image)?;
        let dir = line.get(start..end)?;
        Some(format!("{}{}", dir, image))
    })
}
