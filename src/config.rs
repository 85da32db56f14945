use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{adaptive, defaults};

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub icon: IconConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub foreground: ForegroundConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IconConfig {
    #[serde(default = "default_icon_name")]
    pub name: String,
    /// Relative to `layout.res_dir`
    #[serde(default = "default_source")]
    pub source: PathBuf,
    #[serde(default = "default_background_color_hint")]
    pub background_color_hint: String,
}

fn default_icon_name() -> String {
    defaults::ICON_NAME.to_string()
}

fn default_source() -> PathBuf {
    PathBuf::from(defaults::SOURCE_IMAGE)
}

fn default_background_color_hint() -> String {
    defaults::BACKGROUND_COLOR_HINT.to_string()
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            name: default_icon_name(),
            source: default_source(),
            background_color_hint: default_background_color_hint(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Relative to the project root
    #[serde(default = "default_res_dir")]
    pub res_dir: PathBuf,
    #[serde(default = "default_anydpi_dir")]
    pub anydpi_dir: PathBuf,
    #[serde(default = "default_colors_file")]
    pub colors_file: PathBuf,
}

fn default_res_dir() -> PathBuf {
    PathBuf::from(defaults::RES_DIR)
}

fn default_anydpi_dir() -> PathBuf {
    PathBuf::from(defaults::ANYDPI_DIR)
}

fn default_colors_file() -> PathBuf {
    PathBuf::from(defaults::COLORS_FILE)
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            res_dir: default_res_dir(),
            anydpi_dir: default_anydpi_dir(),
            colors_file: default_colors_file(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ForegroundConfig {
    #[serde(default = "default_safe_area")]
    pub safe_area: f32,
}

fn default_safe_area() -> f32 {
    adaptive::SAFE_AREA
}

impl Default for ForegroundConfig {
    fn default() -> Self {
        ForegroundConfig {
            safe_area: default_safe_area(),
        }
    }
}

impl Config {
    pub fn default_path(project_root: &Path) -> PathBuf {
        project_root.join(defaults::CONFIG_FILE)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    /// The file is never created.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        println!("✓ Config loaded: {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty file parses as null; treat it as all defaults
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(contents)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.icon.name.is_empty() {
            bail!("icon name cannot be empty");
        }
        if !is_resource_name(&self.icon.name) {
            bail!(
                "icon name '{}' is not a valid Android resource name \
                 (use a-z, 0-9 and _, starting with a letter)",
                self.icon.name
            );
        }

        if self.icon.source.as_os_str().is_empty() {
            bail!("icon source path cannot be empty");
        }
        if self.layout.res_dir.as_os_str().is_empty() {
            bail!("res_dir cannot be empty");
        }
        if self.layout.anydpi_dir.as_os_str().is_empty() {
            bail!("anydpi_dir cannot be empty");
        }
        if self.layout.colors_file.as_os_str().is_empty() {
            bail!("colors_file cannot be empty");
        }

        let safe_area = self.foreground.safe_area;
        if !(safe_area > 0.0 && safe_area <= 1.0) {
            bail!("foreground safe_area must be in (0, 1], got {}", safe_area);
        }

        Ok(())
    }
}

fn is_resource_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
