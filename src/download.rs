// Copyright © 2014, Peter Atashian
use crate::{Error, Mediawiki, Result};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fetched and written; carries the file size.
    Downloaded(u64),
    /// Destination already existed, nothing was fetched.
    Skipped,
}

pub trait Download {
    fn download_image(&self, url: &str, dest: &Path) -> Result<Outcome>;
}
impl Download for Mediawiki {
    fn download_image(&self, url: &str, dest: &Path) -> Result<Outcome> {
        if dest.exists() {
            tracing::debug!("{} already exists", dest.display());
            return Ok(Outcome::Skipped);
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        if let Err(e) = self.fetch_to(url, dest) {
            remove_partial(dest);
            return Err(e);
        }
        let size = fs::metadata(dest)?.len();
        if size < self.config.min_bytes {
            tracing::debug!("{} is only {} bytes, removing", dest.display(), size);
            fs::remove_file(dest)?;
            return Err(Error::TooSmall {
                url: url.to_owned(),
                size,
            });
        }
        Ok(Outcome::Downloaded(size))
    }
}
impl Mediawiki {
    fn fetch_to(&self, url: &str, dest: &Path) -> Result<u64> {
        let mut response = self.get(url)?;
        let mut file = BufWriter::new(File::create(dest)?);
        let written = response.copy_to(&mut file)?;
        file.flush()?;
        Ok(written)
    }
}

/// A leftover partial file would be skipped as complete on the next run.
fn remove_partial(dest: &Path) {
    match fs::remove_file(dest) {
        Ok(()) => tracing::debug!("removed partial {}", dest.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("could not remove partial {}: {}", dest.display(), e),
    }
}

/// Where `image` from page `title` is stored: the title's directory part
/// (everything before its last `/`, spaces as `_`) under `root`.
///
/// Only plain path segments are kept, so the result never leaves `root`.
/// Returns `None` when `image` has no usable file name.
pub fn destination(root: &Path, title: &str, image: &str) -> Option<PathBuf> {
    let title = title.replace(' ', "_");
    let dir = title.rfind('/').map_or("", |i| &title[..i]);
    let file = Path::new(image).components().filter_map(normal).last()?;
    let mut path = root.to_path_buf();
    path.extend(Path::new(dir).components().filter_map(normal));
    path.push(file);
    Some(path)
}

fn normal(component: Component<'_>) -> Option<&OsStr> {
    match component {
        Component::Normal(segment) => Some(segment),
        _ => None,
    }
}
