//! Game settings and preferences
//!
//! Read from an optional JSON file at startup; the menu can change the
//! frame rate and ball speed before each session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while reading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported frame rate: {0}")]
    UnsupportedFrameRate(u32),

    #[error("unsupported ball speed: {0}")]
    UnsupportedBallSpeed(u32),
}

/// Target frame rate levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum FrameRate {
    #[default]
    Fps60,
    Fps120,
    Fps144,
    Fps165,
    Fps180,
    Fps240,
}

impl FrameRate {
    pub const ALL: [FrameRate; 6] = [
        FrameRate::Fps60,
        FrameRate::Fps120,
        FrameRate::Fps144,
        FrameRate::Fps165,
        FrameRate::Fps180,
        FrameRate::Fps240,
    ];

    pub fn hz(self) -> u32 {
        match self {
            FrameRate::Fps60 => 60,
            FrameRate::Fps120 => 120,
            FrameRate::Fps144 => 144,
            FrameRate::Fps165 => 165,
            FrameRate::Fps180 => 180,
            FrameRate::Fps240 => 240,
        }
    }

    pub fn as_f32(self) -> f32 {
        self.hz() as f32
    }
}

impl TryFrom<u32> for FrameRate {
    type Error = SettingsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        FrameRate::ALL
            .into_iter()
            .find(|rate| rate.hz() == value)
            .ok_or(SettingsError::UnsupportedFrameRate(value))
    }
}

impl From<FrameRate> for u32 {
    fn from(rate: FrameRate) -> Self {
        rate.hz()
    }
}

/// Nominal ball speed levels (pixels per second along the direction of travel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BallSpeed {
    #[default]
    Px240,
    Px480,
    Px720,
    Px960,
    Px1280,
    Px1440,
    Px1920,
}

impl BallSpeed {
    pub const ALL: [BallSpeed; 7] = [
        BallSpeed::Px240,
        BallSpeed::Px480,
        BallSpeed::Px720,
        BallSpeed::Px960,
        BallSpeed::Px1280,
        BallSpeed::Px1440,
        BallSpeed::Px1920,
    ];

    pub fn pixels_per_second(self) -> u32 {
        match self {
            BallSpeed::Px240 => 240,
            BallSpeed::Px480 => 480,
            BallSpeed::Px720 => 720,
            BallSpeed::Px960 => 960,
            BallSpeed::Px1280 => 1280,
            BallSpeed::Px1440 => 1440,
            BallSpeed::Px1920 => 1920,
        }
    }

    pub fn as_f32(self) -> f32 {
        self.pixels_per_second() as f32
    }
}

impl TryFrom<u32> for BallSpeed {
    type Error = SettingsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        BallSpeed::ALL
            .into_iter()
            .find(|speed| speed.pixels_per_second() == value)
            .ok_or(SettingsError::UnsupportedBallSpeed(value))
    }
}

impl From<BallSpeed> for u32 {
    fn from(speed: BallSpeed) -> Self {
        speed.pixels_per_second()
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target frame rate; the simulation advances one step per frame
    pub frame_rate: FrameRate,
    /// Nominal ball speed
    pub ball_speed: BallSpeed,
    /// Start every session, including after a reset, with the floor acting as a wall
    pub danger_mode: bool,

    // === HUD ===
    /// Show the stat line
    pub show_stats: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: FrameRate::default(),
            ball_speed: BallSpeed::default(),
            danger_mode: false,
            show_stats: true,
        }
    }
}

impl Settings {
    /// Environment variable overriding the settings file path
    pub const PATH_ENV: &'static str = "BRICKBREAKER_SETTINGS";

    /// Settings file used when the environment variable is unset
    const DEFAULT_FILE: &'static str = "brickbreaker.json";

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Path the settings are read from
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_FILE))
    }

    /// Load settings, falling back to defaults when the file is missing or invalid
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
