// Copyright © 2014, Peter Atashian
//! Pulls image references out of a `Special:Export` dump.
//!
//! The dump is treated as plain lines of text, not XML. A `<title>` line
//! switches the current page and every other line is matched against the
//! image markup patterns. Both kinds of match must cover the whole line.
use crate::{Error, MarkupPatterns, Result};
use indexmap::IndexMap;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Page title to image names, in the order they were first seen.
pub type ImageIndex = IndexMap<String, Vec<String>>;

/// Title used for images that appear before any `<title>` line.
pub const NO_TITLE: &str = "no_title";

const TITLE: &str = r"^.*<title>(.*)</title>.*$";
const FILE_MARKUP: &str = r"^.*\[\[File:([^|\]]*).*\].*$";
const IMAGE_MARKUP: &str = r"^.*\[\[Image:([^|\]]*).*\].*$";

pub struct ExportScanner {
    title: Regex,
    markup: Vec<Regex>,
}
impl ExportScanner {
    pub fn new(patterns: MarkupPatterns) -> Result<ExportScanner> {
        let mut markup = Vec::with_capacity(2);
        if patterns == MarkupPatterns::ImageAndFile {
            markup.push(Regex::new(FILE_MARKUP)?);
        }
        markup.push(Regex::new(IMAGE_MARKUP)?);
        Ok(ExportScanner {
            title: Regex::new(TITLE)?,
            markup,
        })
    }
    pub fn scan<I, S>(&self, lines: I) -> ImageIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = (NO_TITLE.to_owned(), ImageIndex::new());
        let (_, index) = lines.into_iter().fold(start, |(title, mut index), line| {
            let line = line.as_ref();
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some(cap) = self.title.captures(line) {
                return (cap[1].to_owned(), index);
            }
            for pattern in &self.markup {
                let Some(cap) = pattern.captures(line) else {
                    continue;
                };
                let name = normalize_name(&cap[1]);
                if name.is_empty() {
                    tracing::debug!("empty image name under {}", title);
                    continue;
                }
                index.entry(title.clone()).or_default().push(name);
            }
            (title, index)
        });
        index
    }
}

/// MediaWiki stores file names with underscores in place of spaces.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().replace(' ', "_")
}

/// Reads the whole export. Any I/O failure here is fatal for the run.
pub fn read_export(path: &Path, patterns: MarkupPatterns) -> Result<ImageIndex> {
    let export_err = |source| Error::Export {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(export_err)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(export_err)?;
    let index = ExportScanner::new(patterns)?.scan(lines);
    tracing::info!(
        "{} pages with images in {}",
        index.len(),
        path.display()
    );
    Ok(index)
}
