use std::fmt;

/// Content hash of an artifact, e.g. `sha256:4f0c…`.
///
/// Compared by exact string equality; this is the only identity used for deletion and for
/// matching running containers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(String);

impl Digest {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex part shortened for table cells (`sha256:` prefix dropped).
    pub fn short(&self) -> &str {
        let hex = self.0.split_once(':').map(|(_, h)| h).unwrap_or(&self.0);
        let end = hex
            .char_indices()
            .nth(12)
            .map(|(i, _)| i)
            .unwrap_or(hex.len());
        &hex[..end]
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repository name as used in registry routes.
///
/// The registry routes `{repo}` through a layer that decodes once, so the path segment is
/// escaped twice. `display()` undoes both escapes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RepoName(String);

impl RepoName {
    /// Builds the routable name from a listing name of the form `<project>/<repo-path>`.
    ///
    /// Returns `None` when nothing is left after the project segment.
    pub fn from_listing(listing_name: &str) -> Option<Self> {
        let (_, path) = listing_name.split_once('/')?;
        if path.is_empty() {
            return None;
        }
        Some(Self::from_path(path))
    }

    pub fn from_path(path: &str) -> Self {
        let once = urlencoding::encode(path);
        Self(urlencoding::encode(&once).into_owned())
    }

    pub fn as_routable(&self) -> &str {
        &self.0
    }

    pub fn display(&self) -> String {
        let once = match urlencoding::decode(&self.0) {
            Ok(s) => s.into_owned(),
            Err(_) => return self.0.clone(),
        };
        match urlencoding::decode(&once) {
            Ok(s) => s.into_owned(),
            Err(_) => once,
        }
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
#[path = "../tests/model/ids_tests.rs"]
mod tests;
