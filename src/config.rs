// Copyright © 2014, Peter Atashian
use crate::Error;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Which image markup forms the export scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkupPatterns {
    /// Only `[[Image:NAME|...]]`.
    Image,
    /// `[[File:NAME|...]]` and `[[Image:NAME|...]]`.
    #[default]
    ImageAndFile,
}

/// Settings for one run, read from a JSON file. Missing keys fall back to
/// the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The `Special:Export` XML dump to scan.
    pub export: PathBuf,
    /// Root of the mirrored image tree.
    pub output: PathBuf,
    /// Origin of the wiki, e.g. `https://wiki.eclipse.org`.
    pub base_url: String,
    /// Namespace prefix of file description pages.
    pub file_namespace: String,
    pub patterns: MarkupPatterns,
    /// Downloads smaller than this are deleted and reported as failures.
    pub min_bytes: u64,
    pub user_agent: String,
    /// Per-request timeout; `None` keeps the client default.
    pub timeout_secs: Option<u64>,
}
impl Default for Config {
    fn default() -> Config {
        Config {
            export: PathBuf::from("/tmp/wikimigration/egit-wiki.xml"),
            output: PathBuf::from("/tmp/wikimigration/markdown/egit"),
            base_url: "https://wiki.eclipse.org".into(),
            file_namespace: "File".into(),
            patterns: MarkupPatterns::default(),
            min_bytes: 1,
            user_agent: concat!("mwimages/", env!("CARGO_PKG_VERSION")).into(),
            timeout_secs: None,
        }
    }
}
impl Config {
    pub fn from_path(path: &Path) -> Result<Config, Error> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
    /// URL of the description page for `image`, e.g. `https://wiki.eclipse.org/File:a.png`.
    pub fn description_url(&self, image: &str) -> String {
        format!("{}/{}:{}", self.base_url.trim_end_matches('/'), self.file_namespace, image)
    }
    /// Joins a server-absolute path such as `/images/a/ab/x.png` onto the origin.
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.patterns, MarkupPatterns::ImageAndFile);
        assert_eq!(cfg.min_bytes, 1);
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: Config = serde_json::from_str(
            r#"{"base_url": "https://wiki.example.org/", "patterns": "image"}"#,
        )
        .unwrap();
        assert_eq!(cfg.base_url, "https://wiki.example.org/");
        assert_eq!(cfg.patterns, MarkupPatterns::Image);
        assert_eq!(cfg.output, Config::default().output);
    }

    #[test]
    fn urls() {
        let cfg = Config {
            base_url: "https://wiki.example.org/".into(),
            ..Config::default()
        };
        assert_eq!(
            cfg.description_url("setup_guide.png"),
            "https://wiki.example.org/File:setup_guide.png"
        );
        assert_eq!(
            cfg.asset_url("/images/abc/setup_guide.png"),
            "https://wiki.example.org/images/abc/setup_guide.png"
        );
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wiki.json");
        fs::write(&path, r#"{"export": "dump.xml", "min_bytes": 16}"#).unwrap();
        let cfg = Config::from_path(&path).unwrap();
        assert_eq!(cfg.export, PathBuf::from("dump.xml"));
        assert_eq!(cfg.min_bytes, 16);
    }

    #[test]
    fn from_path_rejects_unknown_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wiki.json");
        fs::write(&path, r#"{"patterns": "gallery"}"#).unwrap();
        assert!(matches!(Config::from_path(&path), Err(Error::Json(_))));
    }
}
