//! Records produced by extraction and stored in the cache (made by FontLab https://www.fontlab.com/)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One enumerated face: the cheap fields a font catalog already knows.
///
/// Spacing, slant, weight and width use fontconfig's integer scales so the
/// rows line up with what a system font service would report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub filepath: String,
    pub findex: u32,
    pub family: String,
    pub style: String,
    pub spacing: i32,
    pub slant: i32,
    pub weight: i32,
    pub width: i32,
    pub description: String,
}

/// The extended per-face record.
///
/// Every field is always present when serialized; optional text fields come
/// out as `null` rather than being left off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Metadata {
    pub filepath: String,
    pub findex: u32,
    pub family: String,
    pub style: String,
    /// Whether the current user may modify the file.
    pub owner: bool,
    pub psname: Option<String>,
    pub filetype: String,
    pub n_glyphs: u32,
    pub copyright: Option<String>,
    pub version: String,
    pub description: Option<String>,
    pub license_data: Option<String>,
    pub license_url: Option<String>,
    pub vendor: String,
    pub designer: Option<String>,
    pub designer_url: Option<String>,
    pub license_type: String,
    #[serde(rename = "fsType")]
    pub fs_type: u16,
    pub filesize: String,
    /// MD5 of the whole file, lowercase hex.
    pub checksum: String,
}

/// PANOSE classification for one face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panose {
    pub filepath: String,
    pub findex: u32,
    pub values: [u8; 10],
}

/// Coverage of one orthography by one face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrthographyEntry {
    pub name: String,
    pub native: Option<String>,
    pub sample: Option<String>,
    /// Percentage in `0.0..=100.0`.
    pub coverage: f64,
    /// Codepoints the orthography asks for, in definition order.
    pub filter: Vec<u32>,
}

/// Supported orthographies keyed by name, in evaluation order.
pub type Support = IndexMap<String, OrthographyEntry>;

/// Everything the orthography analysis has to say about one face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrthographyResult {
    /// Supported orthographies by name, none at 0%.
    pub support: Support,
    /// A string the face can render, or `None` when the locale pangram works.
    pub sample: Option<String>,
}

impl OrthographyResult {
    pub fn get(&self, name: &str) -> Option<&OrthographyEntry> {
        self.support.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.support.is_empty()
    }
}

/// The full set of derived data for one face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub metadata: Metadata,
    pub panose: Option<Panose>,
    pub orthography: OrthographyResult,
}
