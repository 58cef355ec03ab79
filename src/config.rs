use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::segment::{BulletPreset, ContentKind, FontRange};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub frames: FramesConfig,
    pub fonts: FontsConfig,
    pub text: TextConfig,
    pub list: ListConfig,
}

/// Position and size of a content container, in points.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FramesConfig {
    pub title: Frame,
    pub body: Frame,
    pub list: Frame,
    pub table: Frame,
}

impl Default for FramesConfig {
    fn default() -> Self {
        let content = Frame {
            x: 50.0,
            y: 120.0,
            width: 620.0,
            height: 340.0,
        };
        Self {
            title: Frame {
                x: 50.0,
                y: 30.0,
                width: 620.0,
                height: 80.0,
            },
            body: content,
            list: content,
            table: content,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    pub family: String,
    pub title: FontRange,
    pub body: FontRange,
    pub list: FontRange,
    pub table: FontRange,
}

impl Default for FontsConfig {
    fn default() -> Self {
        let reading = FontRange {
            min: 12.0,
            max: 24.0,
            default: 18.0,
        };
        Self {
            family: "Arial".to_string(),
            title: FontRange {
                min: 20.0,
                max: 36.0,
                default: 28.0,
            },
            body: reading,
            list: reading,
            table: FontRange {
                min: 10.0,
                max: 18.0,
                default: 14.0,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Budget for one partition chunk, in characters.
    pub max_chunk_chars: usize,
    /// Whether font sizes are fitted to the container automatically.
    pub autofit: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: 800,
            autofit: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ListConfig {
    pub bullet: BulletPreset,
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn frame(&self, kind: ContentKind) -> Frame {
        match kind {
            ContentKind::Title => self.frames.title,
            ContentKind::Body => self.frames.body,
            ContentKind::List => self.frames.list,
            ContentKind::Table => self.frames.table,
        }
    }

    pub fn font_range(&self, kind: ContentKind) -> FontRange {
        match kind {
            ContentKind::Title => self.fonts.title,
            ContentKind::Body => self.fonts.body,
            ContentKind::List => self.fonts.list,
            ContentKind::Table => self.fonts.table,
        }
    }
}
