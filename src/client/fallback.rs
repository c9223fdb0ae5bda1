//! Static fallback payloads
//!
//! A file tree that mirrors resource paths with the query dropped:
//! `/pokemon/bulbasaur` is served from `pokemon/bulbasaur.json`. The tree comes
//! from a configured directory, or from the copy of `mock/` compiled into the
//! binary when none is configured.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::FetchError;

/// The repository's `mock/` tree, keyed by relative file name
const BUNDLED: &[(&str, &str)] = &[
    ("pokemon.json", include_str!("../../mock/pokemon.json")),
    ("type.json", include_str!("../../mock/type.json")),
    ("pokemon/1.json", include_str!("../../mock/pokemon/1.json")),
    ("pokemon/4.json", include_str!("../../mock/pokemon/4.json")),
    ("pokemon/7.json", include_str!("../../mock/pokemon/7.json")),
    (
        "pokemon/bulbasaur.json",
        include_str!("../../mock/pokemon/bulbasaur.json"),
    ),
    (
        "pokemon/charmander.json",
        include_str!("../../mock/pokemon/charmander.json"),
    ),
    (
        "pokemon/squirtle.json",
        include_str!("../../mock/pokemon/squirtle.json"),
    ),
];

/// Reader for the static fallback tree
#[derive(Debug, Clone, Default)]
pub struct FallbackStore {
    /// `None` serves the bundled tree
    root: Option<PathBuf>,
}

impl FallbackStore {
    /// Serve fallback payloads from a directory on disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Serve the payloads compiled into the binary.
    pub fn bundled() -> Self {
        Self { root: None }
    }

    /// Store for an optional configured directory
    pub fn from_dir(root: Option<&Path>) -> Self {
        match root {
            Some(dir) => Self::new(dir),
            None => Self::bundled(),
        }
    }

    /// Where payloads come from, for logs and `status`
    pub fn describe(&self) -> String {
        match self.root {
            Some(ref dir) => dir.display().to_string(),
            None => format!("bundled ({} payloads)", BUNDLED.len()),
        }
    }

    /// File name of a request path relative to the tree root.
    ///
    /// Anything after the first `?` is discarded; segments are used as given, so an
    /// already-encoded segment stays encoded. Returns `None` for paths that would
    /// escape the root or name no resource.
    fn relative_location(request_path: &str) -> Option<String> {
        let path_only = request_path.split('?').next().unwrap_or_default();

        let segments: Vec<&str> = path_only.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() || segments.iter().any(|s| *s == "." || *s == "..") {
            return None;
        }

        Some(format!("{}.json", segments.join("/")))
    }

    /// Load and parse the fallback payload for a request path.
    pub fn load(&self, request_path: &str) -> Result<Value, FetchError> {
        let relative = Self::relative_location(request_path).ok_or_else(|| {
            FetchError::FallbackMissing(PathBuf::from(request_path.trim_start_matches('/')))
        })?;

        match self.root {
            Some(ref dir) => {
                let location = dir.join(&relative);
                let contents = match std::fs::read(&location) {
                    Ok(contents) => contents,
                    Err(_) => return Err(FetchError::FallbackMissing(location)),
                };
                parse_payload(&contents, location)
            }
            None => {
                let contents = BUNDLED
                    .iter()
                    .find(|(name, _)| *name == relative)
                    .map(|(_, contents)| *contents)
                    .ok_or_else(|| FetchError::FallbackMissing(PathBuf::from(&relative)))?;
                parse_payload(contents.as_bytes(), PathBuf::from(relative))
            }
        }
    }
}

fn parse_payload(contents: &[u8], location: PathBuf) -> Result<Value, FetchError> {
    serde_json::from_slice(contents).map_err(|e| FetchError::FallbackParseError {
        path: location,
        reason: e.to_string(),
    })
}
