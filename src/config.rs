//! Configuration that affects how entries are rendered.
//!
//! Settings are layered: built-in defaults, then the configuration file,
//! then environment variables.  Command line flags are applied on top by
//! the binary.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Specify when a separator follows a pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SeparatorPolicy {
    /// A separator follows every pair whose code is below the end code
    /// (126), whether or not more pairs follow.
    ///
    /// Short alphabets therefore end with a trailing `", "`, and pairs past
    /// the end code are run together.  Entries authored with earlier
    /// versions of the tool have this shape.  This is the default.
    BelowEndCode,

    /// A separator goes between pairs, never after the last one.
    BetweenPairs,
}

impl Default for SeparatorPolicy {
    fn default() -> Self {
        Self::BelowEndCode
    }
}

impl From<&str> for SeparatorPolicy {
    fn from(value: &str) -> SeparatorPolicy {
        match value.to_lowercase().as_ref() {
            "legacy" | "below-end" | "" => SeparatorPolicy::BelowEndCode,
            "between" => SeparatorPolicy::BetweenPairs,
            other => {
                log::warn!("unknown separator policy {:?}, using legacy", other);
                SeparatorPolicy::default()
            }
        }
    }
}

/// Specify the shape of the emitted entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryFormat {
    /// A keyed alphabet map entry:
    /// `id: {rtl: false, name: 'Name', alphabet:{...}},`
    ///
    /// This is the default.
    Map,

    /// An element of the effects list:
    /// `{id: 'id', name: 'Name', type: 'alphabet', alphabet:{...}},`
    Effect,
}

impl Default for EntryFormat {
    fn default() -> Self {
        Self::Map
    }
}

impl From<&str> for EntryFormat {
    fn from(value: &str) -> EntryFormat {
        match value.to_lowercase().as_ref() {
            "map" | "" => EntryFormat::Map,
            "effect" => EntryFormat::Effect,
            other => {
                log::warn!("unknown entry format {:?}, using map", other);
                EntryFormat::default()
            }
        }
    }
}

/// A group of configurations.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Config {
    /// Specify when a separator follows a pair.
    pub separator: SeparatorPolicy,

    /// Specify the shape of the emitted entry.
    pub format: EntryFormat,

    /// Value of the right-to-left flag in map entries.
    pub rtl: bool,

    /// Sample text to convert with each new alphabet.
    pub preview: Option<String>,
}

/// Contents of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    separator: Option<String>,
    format: Option<String>,
    rtl: Option<bool>,
    preview: Option<String>,
}

impl Config {
    /// Construct [`Config`] from the configuration file and environment
    /// variables.
    pub fn load() -> Result<Self> {
        let path = config_path();
        Self::load_from(path.as_deref(), |name| std::env::var(name).ok())
    }

    /// Construct [`Config`] from the configuration file at `path`, if any,
    /// then the variables that `var` looks up.  Variables take precedence
    /// over the file.
    pub fn load_from(path: Option<&Path>, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();
        if let Some(path) = path {
            config.apply_file(path)?;
        }
        config.apply_vars(var);
        Ok(config)
    }

    /// Apply settings from a TOML configuration file.  A missing file is
    /// ignored.
    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(Error::from(err).with_file(path.to_string_lossy())),
        };
        let file: FileConfig = toml::from_str(&data)
            .map_err(|err| Error::from(err).with_file(path.to_string_lossy()))?;
        log::debug!("loaded configuration from {:?}", path);
        if let Some(separator) = file.separator {
            self.separator = SeparatorPolicy::from(separator.as_ref());
        }
        if let Some(format) = file.format {
            self.format = EntryFormat::from(format.as_ref());
        }
        if let Some(rtl) = file.rtl {
            self.rtl = rtl;
        }
        if file.preview.is_some() {
            self.preview = file.preview;
        }
        Ok(())
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(separator) = var("ALPHAMAP_SEPARATOR") {
            self.separator = SeparatorPolicy::from(separator.as_ref());
        }
        if let Some(format) = var("ALPHAMAP_FORMAT") {
            self.format = EntryFormat::from(format.as_ref());
        }
        if let Some(rtl) = var("ALPHAMAP_RTL").and_then(|s| parse_bool(&s)) {
            self.rtl = rtl;
        }
        if let Some(preview) = var("ALPHAMAP_PREVIEW") {
            self.preview = Some(preview);
        }
    }
}

/// Location of the configuration file.
fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("ALPHAMAP_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let mut path = dirs::config_dir()?;
    path.push("alphamap");
    path.push("config.toml");
    Some(path)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_ref() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}
