/*!
 * Recognized source-file extensions
 */

use std::path::Path;

use once_cell::sync::Lazy;

/// Extensions whose files have their content inlined by default
pub static CODE_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".py", ".java", ".js", ".cpp", ".c", ".html", ".css", ".php", ".tsx", ".cs", ".rb", ".go",
    ]
});

/// A set of filename suffixes.
///
/// Matching is case-sensitive and checks the end of the whole file name, so
/// `.c` matches `lib.c` but not `LIB.C`, and `.js` matches `app.min.js`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl ExtensionSet {
    /// Build a set from arbitrary suffixes. Duplicates are dropped.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: Vec<String> = Vec::new();
        for suffix in suffixes {
            let suffix = suffix.into();
            if !suffix.is_empty() && !set.contains(&suffix) {
                set.push(suffix);
            }
        }
        Self { suffixes: set }
    }

    /// Whether a file name ends with at least one member of the set
    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }

    /// Match against the final component of a path
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.matches(&name.to_string_lossy()))
            .unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(CODE_EXTENSIONS.iter().copied())
    }
}
