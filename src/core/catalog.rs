//! # Fortune Catalog
//!
//! The ordered, immutable list of fortunes a cookie can hold.
//!
//! The built-in list is compiled in from `assets/fortunes.txt` by `build.rs`,
//! which refuses to build if the file has no fortunes. A user catalog can
//! replace it at startup; that path is the only place emptiness is checked
//! at runtime.
//!
//! File format: one fortune per line. Surrounding whitespace is trimmed,
//! blank lines and lines starting with `#` are skipped.

use log::{debug, info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::random::RandomIndex;

include!(concat!(env!("OUT_DIR"), "/builtin_fortunes.rs"));

#[derive(Debug)]
pub enum CatalogError {
    /// The source held no usable fortunes.
    Empty,
    /// The catalog file could not be read.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "fortune catalog is empty"),
            CatalogError::Io { path, source } => {
                write!(f, "failed to read fortunes from {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Empty => None,
        }
    }
}

/// Non-empty, ordered sequence of fortunes. Position is the only identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneCatalog {
    fortunes: Vec<String>,
}

impl FortuneCatalog {
    /// Builds a catalog, trimming entries and dropping blank ones.
    pub fn new<I, S>(fortunes: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fortunes: Vec<String> = fortunes
            .into_iter()
            .map(|s| s.into().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if fortunes.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { fortunes })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            fortunes: BUILTIN_FORTUNES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parses the line-oriented catalog format.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&text)?;
        info!("Loaded {} fortunes from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Loads from `path` when given, otherwise falls back to the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let catalog = Self::builtin();
                debug!("Using built-in catalog ({} fortunes)", catalog.len());
                Ok(catalog)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.fortunes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.fortunes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fortunes.get(index).map(String::as_str)
    }

    /// Draws one fortune. Out-of-range indices from `random` wrap around.
    pub fn draw(&self, random: &mut dyn RandomIndex) -> (usize, &str) {
        let len = self.fortunes.len();
        let mut index = random.pick(len);
        if index >= len {
            warn!("Random source returned {} for {} fortunes, wrapping", index, len);
            index %= len;
        }
        (index, &self.fortunes[index])
    }

    pub fn contains(&self, fortune: &str) -> bool {
        self.fortunes.iter().any(|f| f == fortune)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fortunes.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_non_empty_and_trimmed() {
        let catalog = FortuneCatalog::builtin();
        assert!(!catalog.is_empty());
        for fortune in catalog.iter() {
            assert!(!fortune.is_empty());
            assert_eq!(fortune, fortune.trim());
            assert!(!fortune.starts_with('#'));
        }
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            FortuneCatalog::new(Vec::<String>::new()),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            FortuneCatalog::new(["", "   "]),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_new_preserves_order() {
        let catalog = FortuneCatalog::new(["A", " B ", "", "C"]).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0), Some("A"));
        assert_eq!(catalog.get(1), Some("B"));
        assert_eq!(catalog.get(2), Some("C"));
        assert_eq!(catalog.get(3), None);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "# header\n\nFirst fortune\n   \n  # indented comment\nSecond fortune  \n";
        let catalog = FortuneCatalog::parse(text).unwrap();
        assert_eq!(
            catalog.iter().collect::<Vec<_>>(),
            vec!["First fortune", "Second fortune"]
        );
    }

    #[test]
    fn test_parse_only_comments_is_empty() {
        assert!(matches!(
            FortuneCatalog::parse("# nothing\n# here\n"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_from_file_missing_reports_path() {
        let path = Path::new("/definitely/not/a/real/fortunes.txt");
        let err = FortuneCatalog::from_file(path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("fortunes.txt"));
    }

    #[test]
    fn test_from_file_reads_catalog() {
        let path = std::env::temp_dir().join(format!(
            "fortune-caster-catalog-{}.txt",
            std::process::id()
        ));
        fs::write(&path, "Only one\n").unwrap();
        let catalog = FortuneCatalog::load(Some(&path)).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Only one"));
    }

    #[test]
    fn test_draw_uses_random_index() {
        use crate::core::random::FixedIndex;
        let catalog = FortuneCatalog::new(["A", "B", "C"]).unwrap();
        assert_eq!(catalog.draw(&mut FixedIndex(1)), (1, "B"));
        assert_eq!(catalog.draw(&mut FixedIndex(4)), (1, "B"));
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        assert_eq!(FortuneCatalog::load(None).unwrap(), FortuneCatalog::builtin());
    }
}
