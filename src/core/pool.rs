//! Candidate pool and names file loading

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::config::{COMMENT_PREFIX, CONFIG_DIR_NAME, CONFIG_FILE_NAME, NAMES_FILE_ENV};
use super::error::DrawError;
use super::random::{pick_index, RandomSource};

/// Ordered, immutable list of names eligible to be drawn
///
/// An empty pool can be built; drawing from it fails with
/// [`DrawError::InvalidState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    names: Vec<String>,
}

impl CandidatePool {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Draws one name uniformly, with replacement
    pub fn draw(&self, random: &dyn RandomSource) -> Result<&str, DrawError> {
        let index = pick_index(self.names.len(), random.next_unit())?;
        Ok(&self.names[index])
    }
}

/// Contents of a `.toml` names file
#[derive(Debug, Deserialize)]
struct NamesFile {
    #[serde(default)]
    names: Vec<String>,
    placeholder: Option<String>,
}

/// A pool plus any settings that came with it
#[derive(Debug, Clone, Default)]
pub struct LoadedPool {
    pub pool: CandidatePool,
    pub placeholder: Option<String>,
    pub source: PoolSource,
}

/// Where the candidate names were read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PoolSource {
    #[default]
    Inline,
    File(PathBuf),
    Environment(PathBuf),
    ConfigDir(PathBuf),
}

/// Parses a names file's contents; `.toml` files use the `names = [...]` table,
/// anything else is one name per line
pub fn parse_names(path: &Path, content: &str) -> Result<(CandidatePool, Option<String>)> {
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        let file: NamesFile = toml::from_str(content)
            .with_context(|| format!("Failed to parse names file {}", path.display()))?;
        let names = clean_names(file.names.iter().map(String::as_str));
        return Ok((CandidatePool::new(names), file.placeholder));
    }

    let names = clean_names(
        content
            .lines()
            .filter(|line| !line.trim_start().starts_with(COMMENT_PREFIX)),
    );
    Ok((CandidatePool::new(names), None))
}

fn clean_names<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    raw.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads and parses a names file from disk
pub fn load_names_file(path: &Path) -> Result<(CandidatePool, Option<String>)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read names file {}", path.display()))?;
    parse_names(path, &content)
}

/// Default names file in the user config directory
pub fn default_names_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Resolves the candidate pool
///
/// Priority order:
/// 1. names given on the command line
/// 2. --file PATH
/// 3. LUCKYDRAW_NAMES env var → PATH
/// 4. <config dir>/luckydraw/names.toml, if it exists
///
/// Returns `Ok(None)` when no source is available.
pub fn resolve_pool(
    inline: &[String],
    file: Option<&Path>,
    env_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<Option<LoadedPool>> {
    if !inline.is_empty() {
        let names = clean_names(inline.iter().map(String::as_str));
        return Ok(Some(LoadedPool {
            pool: CandidatePool::new(names),
            placeholder: None,
            source: PoolSource::Inline,
        }));
    }

    if let Some(path) = file {
        let (pool, placeholder) = load_names_file(path)?;
        return Ok(Some(LoadedPool {
            pool,
            placeholder,
            source: PoolSource::File(path.to_path_buf()),
        }));
    }

    if let Some(path) = env_path {
        let (pool, placeholder) = load_names_file(&path)?;
        return Ok(Some(LoadedPool {
            pool,
            placeholder,
            source: PoolSource::Environment(path),
        }));
    }

    match config_path {
        Some(path) if path.is_file() => {
            let (pool, placeholder) = load_names_file(&path)?;
            Ok(Some(LoadedPool {
                pool,
                placeholder,
                source: PoolSource::ConfigDir(path),
            }))
        }
        _ => Ok(None),
    }
}

/// Reads the names file path from the environment, ignoring empty values
pub fn names_path_from_env() -> Option<PathBuf> {
    std::env::var_os(NAMES_FILE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::FixedRandom;

    #[test]
    fn test_draw_uses_floor_of_unit_times_len() {
        let pool = CandidatePool::new(["Alice", "Bob"]);
        assert_eq!(pool.draw(&FixedRandom(0.0)).unwrap(), "Alice");
        assert_eq!(pool.draw(&FixedRandom(0.999999)).unwrap(), "Bob");
    }

    #[test]
    fn test_draw_from_empty_pool_fails() {
        let pool = CandidatePool::default();
        assert!(matches!(
            pool.draw(&FixedRandom(0.0)),
            Err(DrawError::InvalidState(_))
        ));
    }

    #[test]
    fn test_parse_plain_text_skips_blanks_and_comments() {
        let content = "# staff\nAlice\n\n   Bob  \n  # Carol\nDave\n";
        let (pool, placeholder) = parse_names(Path::new("names.txt"), content).unwrap();
        assert_eq!(pool.names(), &["Alice", "Bob", "Dave"]);
        assert!(placeholder.is_none());
    }

    #[test]
    fn test_parse_toml_with_placeholder() {
        let content = "names = [\"Alice\", \" \", \"Bob\"]\nplaceholder = \"drum roll\"\n";
        let (pool, placeholder) = parse_names(Path::new("names.TOML"), content).unwrap();
        assert_eq!(pool.names(), &["Alice", "Bob"]);
        assert_eq!(placeholder.as_deref(), Some("drum roll"));
    }

    #[test]
    fn test_parse_invalid_toml_is_an_error() {
        assert!(parse_names(Path::new("names.toml"), "names = [").is_err());
    }

    #[test]
    fn test_resolve_prefers_inline_names() {
        let inline = vec!["Zed".to_string()];
        let loaded = resolve_pool(
            &inline,
            Some(Path::new("/does/not/exist.txt")),
            None,
            None,
        )
        .unwrap()
        .unwrap();
        assert_eq!(loaded.pool.names(), &["Zed"]);
        assert_eq!(loaded.source, PoolSource::Inline);
    }

    #[test]
    fn test_resolve_without_any_source() {
        let missing = PathBuf::from("/does/not/exist/names.toml");
        assert!(resolve_pool(&[], None, None, Some(missing)).unwrap().is_none());
    }
}
