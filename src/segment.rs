use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A run of text carrying one set of formatting flags.
///
/// Concatenating `text` across a parsed sequence reconstructs the source with
/// all recognized delimiters stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSegment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub font_size: Option<f64>,
}

impl StyledSegment {
    /// An unstyled segment holding literal text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            underline: false,
            font_size: None,
        }
    }

    /// Whether any formatting flag or an explicit font size is set.
    pub fn has_style(&self) -> bool {
        self.bold || self.italic || self.underline || self.font_size.is_some()
    }

    /// Length of the segment text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A single parsed list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    /// Nesting depth derived from leading spaces (2 spaces = 1 level).
    pub level: usize,
    pub numbered: bool,
}

/// A parsed pipe-delimited table.
///
/// Every row holds exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Estimated rendered extent of a text block, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Bounds for font-fit sizing, `min <= default <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FontRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// The content kinds the compiler lays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Title,
    Body,
    List,
    Table,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Title => "title",
            ContentKind::Body => "body",
            ContentKind::List => "list",
            ContentKind::Table => "table",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(ContentKind::Title),
            "body" => Ok(ContentKind::Body),
            "list" => Ok(ContentKind::List),
            "table" => Ok(ContentKind::Table),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}

/// Named list-marker style, passed through to the rendering client untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BulletPreset {
    #[default]
    Disc,
    Circle,
    Square,
    Arrow,
    Checkbox,
    Decimal,
}

impl BulletPreset {
    pub fn as_str(self) -> &'static str {
        match self {
            BulletPreset::Disc => "disc",
            BulletPreset::Circle => "circle",
            BulletPreset::Square => "square",
            BulletPreset::Arrow => "arrow",
            BulletPreset::Checkbox => "checkbox",
            BulletPreset::Decimal => "decimal",
        }
    }
}
