use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub letters: LetterConfig,
    #[serde(default)]
    pub mood: MoodConfig,
}

/// Fallbacks for fields a letter writer leaves empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterConfig {
    #[serde(default = "default_title")]
    pub default_title: String,
    #[serde(default = "default_from_state")]
    pub default_from_state: String,
    #[serde(default = "default_to_state")]
    pub default_to_state: String,
    #[serde(default = "default_user")]
    pub default_user: String,
}

impl Default for LetterConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            default_from_state: default_from_state(),
            default_to_state: default_to_state(),
            default_user: default_user(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodConfig {
    #[serde(default = "default_user")]
    pub default_user: String,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            default_user: default_user(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
    pub project: ProjectConfig,
    pub user: UserConfig,
    pub resolved_output: String,
}

/// Load `.zenith/config.toml` under `project_root`, or defaults when absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(".zenith/config.toml");
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProjectConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load `<config_dir>/zenith/config.toml`, or defaults when absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<UserConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };

    let path = config_dir.join("zenith/config.toml");
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Merge project config, user config and the `FORMAT` env var.
///
/// # Errors
///
/// Returns an error if either config file is present but malformed.
pub fn resolve_config(project_root: &Path, cli_json: bool) -> Result<EffectiveConfig> {
    let project = load_project_config(project_root)?;
    let user = load_user_config()?;

    let env_format = env::var("FORMAT").ok();
    let resolved_output = resolve_output(
        cli_json,
        user.output.as_deref(),
        env_format.as_deref(),
        std::io::stdout().is_terminal(),
    );

    Ok(EffectiveConfig {
        project,
        user,
        resolved_output,
    })
}

/// Canonical output mode name for a configured value, if recognised.
#[must_use]
pub fn normalize_output_mode(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        // `human` and `table` are legacy aliases
        "pretty" | "human" => Some("pretty"),
        "text" | "table" => Some("text"),
        "json" => Some("json"),
        _ => None,
    }
}

fn resolve_output(
    cli_json: bool,
    user_output: Option<&str>,
    env_format: Option<&str>,
    is_tty: bool,
) -> String {
    if cli_json {
        return "json".to_string();
    }

    if let Some(raw) = env_format {
        if let Some(mode) = normalize_output_mode(raw) {
            return mode.to_string();
        }
        warn!(value = raw, "ignoring unrecognised FORMAT");
    }

    if let Some(raw) = user_output {
        if let Some(mode) = normalize_output_mode(raw) {
            return mode.to_string();
        }
        warn!(value = raw, "ignoring unrecognised output in user config");
    }

    if is_tty {
        "pretty".to_string()
    } else {
        "text".to_string()
    }
}

fn default_title() -> String {
    "Untitled Letter".to_string()
}

fn default_from_state() -> String {
    "Hopeful".to_string()
}

fn default_to_state() -> String {
    "Grateful".to_string()
}

fn default_user() -> String {
    "anonymous".to_string()
}
