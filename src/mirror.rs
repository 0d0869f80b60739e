// Copyright © 2014, Peter Atashian
//! Runs the whole pipeline: export → description page → image file.
//!
//! Per-image failures are logged and counted; only reading the export can
//! abort a run.
use crate::download::destination;
use crate::export::read_export;
use crate::{Download, ImageIndex, Mediawiki, Outcome, Resolution, Resolve, Result};
use indexmap::IndexSet;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub downloaded: usize,
    /// Already on disk before the run.
    pub skipped: usize,
    /// Description page had no usable image path.
    pub unresolved: usize,
    pub failed: usize,
}

impl Mediawiki {
    /// Reads the configured export and mirrors every image it references.
    pub fn mirror_export(&self) -> Result<RunSummary> {
        let index = read_export(&self.config.export, self.config.patterns)?;
        Ok(self.mirror(&index))
    }
    /// Mirrors the images of `index` under the configured output root.
    pub fn mirror(&self, index: &ImageIndex) -> RunSummary {
        let mut summary = RunSummary::default();
        for (title, images) in index {
            let images: IndexSet<&str> = images.iter().map(|s| &**s).collect();
            for image in images {
                let Some(dest) = destination(&self.config.output, title, image) else {
                    tracing::error!("No usable file name in image {:?} on {}", image, title);
                    summary.failed += 1;
                    continue;
                };
                self.mirror_one(image, &dest, &mut summary);
            }
        }
        tracing::info!(
            "{} downloaded, {} already present, {} unresolved, {} failed",
            summary.downloaded,
            summary.skipped,
            summary.unresolved,
            summary.failed
        );
        summary
    }
    fn mirror_one(&self, image: &str, dest: &Path, summary: &mut RunSummary) {
        if dest.exists() {
            tracing::debug!("{} already exists", dest.display());
            summary.skipped += 1;
            return;
        }
        let url = match self.resolve_image(image) {
            Ok(Resolution::Asset(url)) => url,
            Ok(Resolution::Unresolved) => {
                tracing::warn!(
                    "No image source found on {}",
                    self.config.description_url(image)
                );
                summary.unresolved += 1;
                return;
            }
            Err(e) => {
                tracing::error!(
                    "Error when downloading {} : {}",
                    self.config.description_url(image),
                    e
                );
                summary.failed += 1;
                return;
            }
        };
        match self.download_image(&url, dest) {
            Ok(Outcome::Downloaded(_)) => {
                summary.downloaded += 1;
                println!("{}: Done with {} -> {}", summary.downloaded, url, dest.display());
            }
            Ok(Outcome::Skipped) => summary.skipped += 1,
            Err(e) => {
                tracing::error!("Error when downloading {} : {}", url, e);
                summary.failed += 1;
            }
        }
    }
}
