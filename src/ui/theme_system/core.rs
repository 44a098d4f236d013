//! Theme variants, the active-theme handle and the theme registry

use super::constants::ThemeConstants;
use super::embedded_themes;
use super::errors::ThemeError;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The built-in theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeVariant {
    /// Dark grey surfaces with an orange accent.
    #[default]
    WarmDark,
    /// Dark grey surfaces with a blue accent.
    CoolDark,
}

impl ThemeVariant {
    pub fn all() -> [ThemeVariant; 2] {
        [ThemeVariant::WarmDark, ThemeVariant::CoolDark]
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeVariant::WarmDark => "warm-dark",
            ThemeVariant::CoolDark => "cool-dark",
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        Self::all().into_iter().map(Self::name).collect()
    }

    /// Parse a variant name. Case-insensitive, `_` and `-` are interchangeable.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::all().into_iter().find(|v| v.name() == normalized)
    }

    fn literal(self) -> &'static str {
        match self {
            ThemeVariant::WarmDark => embedded_themes::WARM_DARK_JSON,
            ThemeVariant::CoolDark => embedded_themes::COOL_DARK_JSON,
        }
    }

    /// Build a fresh `ThemeConstants` from this variant's embedded literal.
    pub fn load(self) -> Result<ThemeConstants, ThemeError> {
        ThemeConstants::from_json_str(self.literal())
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle to the theme a rendering context is using.
///
/// Cloning is cheap and every clone sees the same immutable record, so the
/// handle can be passed to any number of consumers on any thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTheme {
    name: String,
    constants: Arc<ThemeConstants>,
}

impl CurrentTheme {
    pub fn new(name: impl Into<String>, constants: ThemeConstants) -> Self {
        Self {
            name: name.into(),
            constants: Arc::new(constants),
        }
    }

    pub fn from_variant(variant: ThemeVariant) -> Result<Self, ThemeError> {
        Ok(Self::new(variant.name(), variant.load()?))
    }

    /// Registry name the theme was selected by.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn theme(&self) -> &ThemeConstants {
        &self.constants
    }
}

impl Deref for CurrentTheme {
    type Target = ThemeConstants;

    fn deref(&self) -> &ThemeConstants {
        &self.constants
    }
}

/// Loaded themes keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, Arc<ThemeConstants>>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in variant.
    pub fn with_builtins() -> Result<Self, ThemeError> {
        let mut registry = Self::new();
        for variant in ThemeVariant::all() {
            registry.insert(variant.name(), variant.load()?);
        }
        Ok(registry)
    }

    /// Register a theme, replacing any existing theme with the same name.
    ///
    /// Names are case-insensitive: `Ocean` and `ocean` are the same entry.
    pub fn insert(&mut self, name: impl AsRef<str>, theme: ThemeConstants) {
        let name = registry_key(name.as_ref());
        if self.themes.insert(name.clone(), Arc::new(theme)).is_some() {
            debug!("Theme '{}' replaced an existing entry", name);
        }
    }

    /// Load every `*.json` file in `dir`, keyed by file stem.
    ///
    /// Files that fail to load, directory entries that cannot be read and
    /// file names that are not UTF-8 are skipped; their errors are returned
    /// so the caller can report them. A missing directory loads nothing.
    pub fn load_dir(&mut self, dir: &Path) -> Vec<ThemeError> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Themes directory {:?} does not exist", dir);
                return Vec::new();
            }
            Err(source) => {
                return vec![ThemeError::Io {
                    path: dir.to_path_buf(),
                    source,
                }];
            }
        };

        let mut errors = Vec::new();
        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => paths.push(entry.path()),
                Err(source) => {
                    warn!("Unreadable entry in {:?}: {}", dir, source);
                    errors.push(ThemeError::Io {
                        path: dir.to_path_buf(),
                        source,
                    });
                }
            }
        }
        paths.retain(|path| path.extension().is_some_and(|ext| ext == "json"));
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!("Skipping theme {:?}: file name is not UTF-8", path);
                errors.push(ThemeError::Io {
                    path,
                    source: io::Error::new(
                        io::ErrorKind::InvalidData,
                        "file name is not valid UTF-8",
                    ),
                });
                continue;
            };
            match ThemeConstants::from_path(&path) {
                Ok(theme) => {
                    self.insert(stem, theme);
                    loaded += 1;
                }
                Err(e) => {
                    warn!("Skipping theme {:?}: {}", path, e);
                    errors.push(e);
                }
            }
        }
        info!("Loaded {} theme(s) from {:?}", loaded, dir);
        errors
    }

    pub fn get(&self, name: &str) -> Option<CurrentTheme> {
        let key = registry_key(name);
        self.themes.get(&key).map(|constants| CurrentTheme {
            name: key,
            constants: Arc::clone(constants),
        })
    }

    /// Like `get`, but reports the available names when `name` is unknown.
    pub fn select(&self, name: &str) -> Result<CurrentTheme, ThemeError> {
        self.get(name).ok_or_else(|| ThemeError::UnknownTheme {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(&registry_key(name))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

fn registry_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(ThemeVariant::parse("warm-dark"), Some(ThemeVariant::WarmDark));
        assert_eq!(ThemeVariant::parse("Cool_Dark"), Some(ThemeVariant::CoolDark));
        assert_eq!(ThemeVariant::parse(" COOL-DARK "), Some(ThemeVariant::CoolDark));
        assert_eq!(ThemeVariant::parse("light"), None);
        assert_eq!(ThemeVariant::all_names(), vec!["warm-dark", "cool-dark"]);
        assert_eq!(ThemeVariant::default(), ThemeVariant::WarmDark);
    }

    #[test]
    fn current_theme_clones_share_the_record() {
        let current = CurrentTheme::from_variant(ThemeVariant::CoolDark).unwrap();
        let other = current.clone();
        assert!(std::ptr::eq(current.theme(), other.theme()));
        assert_eq!(current.name(), "cool-dark");
        assert_eq!(current.accent(), "#007acc");
    }

    #[test]
    fn current_theme_is_shareable_across_threads() {
        let current = CurrentTheme::from_variant(ThemeVariant::WarmDark).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let theme = current.clone();
                std::thread::spawn(move || theme.background())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), current.background());
        }
    }

    #[test]
    fn builtin_registry_has_every_variant() {
        let registry = ThemeRegistry::with_builtins().unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["cool-dark", "warm-dark"]);
        assert!(registry.contains("warm-dark"));
        assert!(registry.get("light").is_none());
    }

    #[test]
    fn select_lists_available_themes_on_miss() {
        let registry = ThemeRegistry::with_builtins().unwrap();
        match registry.select("solarized") {
            Err(ThemeError::UnknownTheme { name, available }) => {
                assert_eq!(name, "solarized");
                assert_eq!(available, "cool-dark, warm-dark");
            }
            other => panic!("expected UnknownTheme, got {other:?}"),
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Ocean.json"), embedded_themes::COOL_DARK_JSON).unwrap();

        let mut registry = ThemeRegistry::with_builtins().unwrap();
        assert!(registry.load_dir(dir.path()).is_empty());
        assert_eq!(registry.names(), vec!["cool-dark", "ocean", "warm-dark"]);
        assert_eq!(registry.get("OCEAN").unwrap().name(), "ocean");
        assert!(registry.contains("Ocean"));
        assert_eq!(registry.get("Warm-Dark").unwrap().accent(), "#d07010");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_names_are_reported() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join(OsStr::from_bytes(b"bad\xff.json"));
        if fs::write(&odd, embedded_themes::WARM_DARK_JSON).is_err() {
            // Some filesystems refuse non-UTF-8 names outright
            return;
        }
        fs::write(dir.path().join("ember.json"), embedded_themes::WARM_DARK_JSON).unwrap();

        let mut registry = ThemeRegistry::new();
        let errors = registry.load_dir(dir.path());
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ThemeError::Io { path, .. } if *path == odd));
        assert_eq!(registry.names(), vec!["ember"]);
    }

    #[test]
    fn missing_directory_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = ThemeRegistry::new();
        let errors = registry.load_dir(&dir.path().join("absent"));
        assert!(errors.is_empty());
        assert!(registry.is_empty());
    }
}
