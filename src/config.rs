use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{GuardError, GuardResult};
use crate::guard::decision::RatioPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GuardConfig {
    #[serde(default)]
    pub ratio: RatioSection,
}

/// `[ratio]` section of config.toml. The target is expressed as an integer
/// pair so "16:9" stays readable in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioSection {
    #[serde(default = "default_target_width")]
    pub target_width: u32,
    #[serde(default = "default_target_height")]
    pub target_height: u32,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for RatioSection {
    fn default() -> Self {
        Self {
            target_width: default_target_width(),
            target_height: default_target_height(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_target_width() -> u32 {
    16
}

fn default_target_height() -> u32 {
    9
}

fn default_tolerance() -> f64 {
    0.02
}

impl From<&RatioSection> for RatioPolicy {
    fn from(section: &RatioSection) -> Self {
        // A zero target dimension would make the target infinite (accept-all)
        // or zero (reject-all); treat it like a degenerate capture and keep
        // the built-in policy instead.
        if section.target_width == 0 || section.target_height == 0 {
            tracing::warn!(
                target_width = section.target_width,
                target_height = section.target_height,
                "invalid target ratio in config, falling back to 16:9 default"
            );
            return Self::default();
        }
        Self {
            target: section.target_width as f64 / section.target_height as f64,
            tolerance: section.tolerance,
        }
    }
}

fn resolve_config_path() -> GuardResult<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            let candidate = parent.join("config.toml");
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "config found next to executable");
                return Ok(candidate);
            }
        }
    }

    let cwd = std::env::current_dir()?;
    let candidate = cwd.join("config.toml");
    if candidate.exists() {
        tracing::debug!(path = %candidate.display(), "config found in working directory");
        return Ok(candidate);
    }

    Err(GuardError::Config(
        "config.toml not found next to executable or in working directory".into(),
    ))
}

/// Loads config.toml. Callers that treat a missing file as acceptable fall
/// back to `GuardConfig::default()`.
pub fn load_config() -> GuardResult<GuardConfig> {
    let path = resolve_config_path()?;
    let config = load_config_from(&path)?;
    tracing::info!(
        path = %path.display(),
        target_width = config.ratio.target_width,
        target_height = config.ratio.target_height,
        "config loaded"
    );
    Ok(config)
}

pub fn load_config_from(path: &Path) -> GuardResult<GuardConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: GuardConfig = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_config(config: &GuardConfig) -> GuardResult<()> {
    let path = resolve_config_path()?;
    save_config_to(config, &path)?;
    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn save_config_to(config: &GuardConfig, path: &Path) -> GuardResult<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_16x9_two_percent_policy() {
        let policy = RatioPolicy::from(&RatioSection::default());
        assert!((policy.target - 16.0 / 9.0).abs() < 1e-9);
        assert!((policy.tolerance - 0.02).abs() < 1e-9);
    }

    #[test]
    fn zero_target_dimension_falls_back_to_default() {
        for (w, h) in [(16, 0), (0, 9), (0, 0)] {
            let section = RatioSection {
                target_width: w,
                target_height: h,
                tolerance: 0.02,
            };
            let policy = RatioPolicy::from(&section);
            assert!((policy.target - 16.0 / 9.0).abs() < 1e-9);
            // An out-of-tolerance 4:3 frame must still be rejected.
            assert!(!policy.evaluate(1600, 1200).accepted);
            assert!(policy.evaluate(1920, 1080).accepted);
        }
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: GuardConfig = toml::from_str("").unwrap();
        assert_eq!(config.ratio.target_width, 16);
        assert_eq!(config.ratio.target_height, 9);
    }

    #[test]
    fn custom_section_round_trips() {
        let config: GuardConfig = toml::from_str(
            "[ratio]\ntarget_width = 4\ntarget_height = 3\ntolerance = 0.05\n",
        )
        .unwrap();
        let policy = RatioPolicy::from(&config.ratio);
        assert!((policy.target - 4.0 / 3.0).abs() < 1e-9);

        let rendered = toml::to_string_pretty(&config).unwrap();
        let reparsed: GuardConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(reparsed.ratio.target_width, 4);
        assert!((reparsed.ratio.tolerance - 0.05).abs() < 1e-9);
    }

    #[test]
    fn save_and_reload_config_file() {
        let path = std::env::temp_dir().join(format!("ratioguard-config-{}.toml", std::process::id()));
        let config = GuardConfig {
            ratio: RatioSection {
                target_width: 21,
                target_height: 9,
                tolerance: 0.03,
            },
        };
        save_config_to(&config, &path).unwrap();

        let reloaded = load_config_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(reloaded.ratio.target_width, 21);
        assert_eq!(reloaded.ratio.target_height, 9);
        assert!((reloaded.ratio.tolerance - 0.03).abs() < 1e-9);
    }
}
