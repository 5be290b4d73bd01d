// Configuration management
//
// User-tunable settings for the headless frontend, persisted as TOML.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default configuration file path.
pub const CONFIG_FILE: &str = "rnes.toml";

/// Emulator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmulatorConfig {
    /// Run settings
    pub run: RunConfig,

    /// Screenshot settings
    pub screenshot: ScreenshotConfig,
}

/// Settings for the headless run loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Frames to emulate before exiting when no --frames flag is given.
    pub default_frames: u64,

    /// Log a disassembled trace line per instruction (very slow).
    pub trace_execution: bool,
}

/// Settings for framebuffer dumps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScreenshotConfig {
    /// Directory screenshots are written into.
    pub directory: PathBuf,

    /// Include a timestamp in generated filenames.
    pub include_timestamp: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            run: RunConfig::default(),
            screenshot: ScreenshotConfig::default(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            default_frames: 60,
            trace_execution: false,
        }
    }
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        ScreenshotConfig {
            directory: PathBuf::from("screenshots"),
            include_timestamp: true,
        }
    }
}

impl EmulatorConfig {
    /// Load the configuration, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path.as_ref()) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!(
                        "ignoring malformed config '{}': {}",
                        path.as_ref().display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist the configuration as TOML.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let text = toml::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, text)
    }
}
