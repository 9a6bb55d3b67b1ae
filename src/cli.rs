// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::ViewConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "fly-camera")]
#[command(about = "First-person camera viewer", long_about = None)]
pub struct Cli {
    /// JSON file with view settings; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Mouse-look sensitivity
    #[arg(long, allow_negative_numbers = true)]
    pub sensitivity: Option<f32>,

    /// Let vertical mouse motion change movement speed like the scroll wheel
    #[arg(long = "cursor-adjusts-speed", default_value = "false")]
    pub cursor_adjusts_speed: bool,
}

impl Cli {
    /// Resolve the effective view configuration
    pub fn view_config(&self) -> Result<ViewConfig> {
        let mut config = match &self.config {
            Some(path) => ViewConfig::from_json_file(path)?,
            None => ViewConfig::default(),
        };

        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(sensitivity) = self.sensitivity {
            config.mouse_sensitivity = sensitivity;
        }
        if self.cursor_adjusts_speed {
            config.cursor_adjusts_speed = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["fly-camera"]);
        assert_eq!(cli.view_config().unwrap(), ViewConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "fly-camera",
            "--width",
            "1280",
            "--height",
            "720",
            "--sensitivity",
            "1.5",
            "--cursor-adjusts-speed",
        ]);
        let config = cli.view_config().unwrap();
        assert_eq!((config.width, config.height), (1280, 720));
        assert_eq!(config.mouse_sensitivity, 1.5);
        assert!(config.cursor_adjusts_speed);
        assert_eq!(config.base_speed, 5.0);
    }

    #[test]
    fn test_invalid_flag_values_are_rejected() {
        let cli = Cli::parse_from(["fly-camera", "--width", "0"]);
        assert!(cli.view_config().is_err());

        let cli = Cli::parse_from(["fly-camera", "--sensitivity", "-1"]);
        assert!(cli.view_config().is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["fly-camera", "--config", "/no/such/view.json"]);
        assert!(cli.view_config().is_err());
    }
}
