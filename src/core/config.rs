//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! The original front-ends kept colors and widths in process-wide constant
//! tables, one copy per variant. Here they collapse into a single explicitly
//! passed [`ResolvedConfig`] — no shared mutable globals.
//!
//! Config lives at `~/.gambit/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::tui::theme::{GlyphSet, ThemeName};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GambitConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<ThemeName>,
    pub glyphs: Option<GlyphSet>,
    pub show_history: Option<bool>,
    pub max_input_chars: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Longest sensible SAN string is 7 chars (`exd8=Q+`); a little headroom
/// lets typos be visible before they are rejected.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 12;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: ThemeName,
    pub glyphs: GlyphSet,
    pub show_history: bool,
    pub max_input_chars: usize,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.gambit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gambit").join("config.toml"))
}

/// Load config from `~/.gambit/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GambitConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GambitConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GambitConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GambitConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: GambitConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Gambit Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "classic"        # "classic", "ocean", or "mono"
# glyphs = "unicode"       # "unicode" (♞) or "ascii" (N/n)
# show_history = true      # side panel with numbered moves
# max_input_chars = 12     # move-entry character limit
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// CLI arguments are `None`/`false` when not specified.
pub fn resolve(
    config: &GambitConfig,
    cli_theme: Option<ThemeName>,
    cli_glyphs: Option<GlyphSet>,
    cli_no_history: bool,
) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli_theme
        .or_else(|| std::env::var("GAMBIT_THEME").ok().and_then(|s| theme_from_env(&s)))
        .or(config.general.theme)
        .unwrap_or_default();

    // Glyphs: CLI → config → default
    let glyphs = cli_glyphs.or(config.general.glyphs).unwrap_or_default();

    // History panel: the CLI flag can only turn it off
    let show_history = if cli_no_history {
        false
    } else {
        config.general.show_history.unwrap_or(true)
    };

    ResolvedConfig {
        theme,
        glyphs,
        show_history,
        max_input_chars: config
            .general
            .max_input_chars
            .unwrap_or(DEFAULT_MAX_INPUT_CHARS),
    }
}

fn theme_from_env(value: &str) -> Option<ThemeName> {
    match clap::ValueEnum::from_str(value, true) {
        Ok(theme) => Some(theme),
        Err(_) => {
            warn!("Ignoring unknown GAMBIT_THEME value '{}'", value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = GambitConfig::default();
        assert!(config.general.theme.is_none());
        assert!(config.general.show_history.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = GambitConfig::default();
        let resolved = resolve(&config, None, None, false);
        assert_eq!(resolved.theme, ThemeName::Classic);
        assert_eq!(resolved.glyphs, GlyphSet::Unicode);
        assert!(resolved.show_history);
        assert_eq!(resolved.max_input_chars, DEFAULT_MAX_INPUT_CHARS);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GambitConfig {
            general: GeneralConfig {
                theme: Some(ThemeName::Mono),
                glyphs: Some(GlyphSet::Ascii),
                show_history: Some(false),
                max_input_chars: Some(8),
            },
        };
        let resolved = resolve(&config, None, None, false);
        assert_eq!(resolved.theme, ThemeName::Mono);
        assert_eq!(resolved.glyphs, GlyphSet::Ascii);
        assert!(!resolved.show_history);
        assert_eq!(resolved.max_input_chars, 8);
    }

    #[test]
    fn test_resolve_cli_theme_wins() {
        let config = GambitConfig {
            general: GeneralConfig {
                theme: Some(ThemeName::Mono),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some(ThemeName::Ocean), None, false);
        assert_eq!(resolved.theme, ThemeName::Ocean);
    }

    #[test]
    fn test_cli_no_history_wins_over_config() {
        let config = GambitConfig {
            general: GeneralConfig {
                show_history: Some(true),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, None, None, true);
        assert!(!resolved.show_history);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
theme = "ocean"
glyphs = "ascii"
show_history = false
max_input_chars = 10
"#;
        let config: GambitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(ThemeName::Ocean));
        assert_eq!(config.general.glyphs, Some(GlyphSet::Ascii));
        assert_eq!(config.general.show_history, Some(false));
        assert_eq!(config.general.max_input_chars, Some(10));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
theme = "mono"
"#;
        let config: GambitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(ThemeName::Mono));
        assert!(config.general.glyphs.is_none());
        assert!(config.general.max_input_chars.is_none());
    }
}
