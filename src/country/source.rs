use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Where boundary files come from.
pub trait GeoSource {
    /// Raw bytes of `file`.
    fn fetch(&self, file: &str) -> Result<Vec<u8>>;

    /// Human-readable location, for logs.
    fn location(&self, file: &str) -> String;
}

/// Static-assets directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl Default for DirSource {
    fn default() -> Self { Self::new(Self::DEFAULT_DIR) }
}

impl DirSource {
    pub const DEFAULT_DIR: &'static str = "public/data";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline] pub fn root(&self) -> &Path { &self.root }

    /// JSON files directly inside the directory, sorted by name.
    pub fn available(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry
                .with_context(|| format!("[source] Failed to list {}", self.root.display()))?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        files.sort();
        Ok(files)
    }
}

impl GeoSource for DirSource {
    fn fetch(&self, file: &str) -> Result<Vec<u8>> {
        let path = self.root.join(file);
        std::fs::read(&path)
            .with_context(|| format!("[source] Failed to read {}", path.display()))
    }

    fn location(&self, file: &str) -> String {
        self.root.join(file).display().to_string()
    }
}

/// Boundary files served over HTTP under a base URL.
#[cfg(feature = "download")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "download")]
impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("choromap/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("[source] Failed to build HTTP client")?;

        Ok(Self { base_url: base_url.into().trim_end_matches('/').to_string(), client })
    }
}

#[cfg(feature = "download")]
impl GeoSource for HttpSource {
    fn fetch(&self, file: &str) -> Result<Vec<u8>> {
        let url = self.location(file);
        let bytes = self.client.get(&url)
            .send()
            .with_context(|| format!("[source] GET {url}"))?
            .error_for_status()
            .with_context(|| format!("[source] GET {url} returned error status"))?
            .bytes()
            .with_context(|| format!("[source] Failed to read body of {url}"))?;
        Ok(bytes.to_vec())
    }

    fn location(&self, file: &str) -> String {
        format!("{}/{}", self.base_url, file.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_lists_json_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("india.json"), b"{}").unwrap();
        std::fs::write(dir.path().join("albania.json"), b"[]").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let source = DirSource::new(dir.path());
        assert_eq!(source.available().unwrap(), ["albania.json", "india.json"]);
        assert_eq!(source.fetch("india.json").unwrap(), b"{}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = DirSource::new(dir.path()).fetch("usa.json").unwrap_err();
        assert!(format!("{err:#}").contains("usa.json"));
    }

    #[test]
    fn default_dir_is_public_data() {
        assert_eq!(DirSource::default().root(), Path::new("public/data"));
    }

    #[cfg(feature = "download")]
    #[test]
    fn http_location_joins_base_url() {
        let source = HttpSource::new("https://example.org/data/").unwrap();
        assert_eq!(source.location("/india.json"), "https://example.org/data/india.json");
    }
}
