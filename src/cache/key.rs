//! Request signatures used as cache keys

use std::fmt;

/// Normalized identity of one logical request: resource path plus query parameters.
///
/// Parameters are kept sorted (by key, then value), so two requests for the same
/// path and parameter set share a signature no matter the order the caller used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestSignature {
    path: String,
    params: Vec<(String, String)>,
}

impl RequestSignature {
    /// Build a signature from a path and unordered parameters.
    pub fn new(path: &str, params: &[(&str, &str)]) -> Self {
        let mut params: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        params.sort();

        Self {
            path: normalize_path(path),
            params,
        }
    }

    /// Parse a request target such as `/pokemon?offset=0&limit=151`.
    ///
    /// Values are taken verbatim; no percent-decoding is applied.
    #[cfg(test)]
    pub fn parse(target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };

        let pairs: Vec<(&str, &str)> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .collect();

        Self::new(path, &pairs)
    }

    /// Resource path with a leading `/` and no query.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Sorted query parameters.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Canonical query string (sorted, unencoded), empty when there are no params.
    pub fn query(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Storage key shared by the volatile and durable caches.
    pub fn key(&self) -> String {
        if self.params.is_empty() {
            format!("cache:{}", self.path)
        } else {
            format!("cache:{}?{}", self.path, self.query())
        }
    }
}

impl fmt::Display for RequestSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    let joined = trimmed
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", joined)
}
