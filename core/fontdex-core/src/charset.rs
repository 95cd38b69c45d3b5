//! Graphic charsets and indexed codepoint lists (made by FontLab https://www.fontlab.com/)
//!
//! A face's cmap says which codepoints it maps, but a character map only
//! wants the ones that draw something. [`Charset`] keeps those, in order,
//! and [`CodepointList`] lays them out as a flat index space, with a small
//! encore of regional-indicator flag pairs when the face can spell them.

use std::collections::BTreeSet;

use skrifa::{FontRef, MetadataProvider};
use unicode_general_category::{get_general_category, GeneralCategory};

/// First codepoint of the regional indicator block (REGIONAL INDICATOR SYMBOL LETTER A).
pub const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;
/// Last codepoint of the regional indicator block (LETTER Z).
pub const REGIONAL_INDICATOR_Z: u32 = 0x1F1FF;

const fn flag(region: &[u8; 2]) -> (u32, u32) {
    (
        REGIONAL_INDICATOR_A + (region[0] - b'A') as u32,
        REGIONAL_INDICATOR_A + (region[1] - b'A') as u32,
    )
}

/// One flag per letter of the alphabet, so every regional indicator shows
/// up at least once as a leading letter.
pub static REGIONAL_INDICATOR_PAIRS: [(&str, (u32, u32)); 26] = [
    ("AU", flag(b"AU")),
    ("BR", flag(b"BR")),
    ("CA", flag(b"CA")),
    ("DE", flag(b"DE")),
    ("ES", flag(b"ES")),
    ("FR", flag(b"FR")),
    ("GB", flag(b"GB")),
    ("HK", flag(b"HK")),
    ("IN", flag(b"IN")),
    ("JP", flag(b"JP")),
    ("KR", flag(b"KR")),
    ("LU", flag(b"LU")),
    ("MX", flag(b"MX")),
    ("NL", flag(b"NL")),
    ("OM", flag(b"OM")),
    ("PT", flag(b"PT")),
    ("QA", flag(b"QA")),
    ("RU", flag(b"RU")),
    ("SE", flag(b"SE")),
    ("TR", flag(b"TR")),
    ("US", flag(b"US")),
    ("VN", flag(b"VN")),
    ("WS", flag(b"WS")),
    ("XK", flag(b"XK")),
    ("YE", flag(b"YE")),
    ("ZA", flag(b"ZA")),
];

/// True for codepoints that render as something visible.
///
/// Controls, format characters, unassigned codepoints, surrogates and
/// space separators are out; everything else (marks and private use
/// included) is in.
pub fn is_graphic(codepoint: u32) -> bool {
    let Some(ch) = char::from_u32(codepoint) else {
        return false;
    };
    !matches!(
        get_general_category(ch),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Unassigned
            | GeneralCategory::Surrogate
            | GeneralCategory::SpaceSeparator
    )
}

/// The ordered set of graphic codepoints a face covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charset {
    codepoints: BTreeSet<u32>,
}

impl Charset {
    /// Keeps the graphic members of `codepoints`.
    pub fn from_codepoints<I: IntoIterator<Item = u32>>(codepoints: I) -> Self {
        Self {
            codepoints: codepoints.into_iter().filter(|cp| is_graphic(*cp)).collect(),
        }
    }

    /// Reads the face's character map.
    pub fn from_font(font: &FontRef<'_>) -> Self {
        Self::from_codepoints(font.charmap().mappings().map(|(cp, _)| cp))
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.codepoints.contains(&codepoint)
    }

    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.codepoints.iter().copied()
    }

    /// True when every non-whitespace character of `text` is covered.
    pub fn covers_text(&self, text: &str) -> bool {
        text.chars()
            .filter(|ch| !ch.is_whitespace())
            .all(|ch| self.contains(ch as u32))
    }

    /// True when the whole regional indicator block is present.
    pub fn has_regional_indicators(&self) -> bool {
        (REGIONAL_INDICATOR_A..=REGIONAL_INDICATOR_Z).all(|cp| self.contains(cp))
    }
}

impl FromIterator<u32> for Charset {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::from_codepoints(iter)
    }
}

/// A charset flattened into index order.
///
/// Indices `0..base_len()` are single codepoints in ascending order. When
/// the face carries every regional indicator, 26 more indices follow, each
/// naming a two-codepoint flag sequence from [`REGIONAL_INDICATOR_PAIRS`].
#[derive(Debug, Clone)]
pub struct CodepointList {
    base: Vec<u32>,
    regional_indicators: bool,
}

impl CodepointList {
    pub fn new(charset: &Charset) -> Self {
        Self {
            base: charset.iter().collect(),
            regional_indicators: charset.has_regional_indicators(),
        }
    }

    pub fn base_len(&self) -> usize {
        self.base.len()
    }

    pub fn has_regional_indicators(&self) -> bool {
        self.regional_indicators
    }

    /// Highest valid index, or `None` for an empty list.
    pub fn last_index(&self) -> Option<usize> {
        let extra = if self.regional_indicators {
            REGIONAL_INDICATOR_PAIRS.len()
        } else {
            0
        };
        (self.base.len() + extra).checked_sub(1)
    }

    /// The codepoint sequence at `index`.
    pub fn codepoints(&self, index: usize) -> Option<Vec<u32>> {
        if let Some(cp) = self.base.get(index) {
            return Some(vec![*cp]);
        }
        if !self.regional_indicators {
            return None;
        }
        REGIONAL_INDICATOR_PAIRS
            .get(index - self.base.len())
            .map(|(_, (first, second))| vec![*first, *second])
    }

    /// Inverse of [`codepoints`](Self::codepoints).
    pub fn index_of(&self, codepoints: &[u32]) -> Option<usize> {
        match codepoints {
            [single] => self.base.binary_search(single).ok(),
            [first, second] if self.regional_indicators => REGIONAL_INDICATOR_PAIRS
                .iter()
                .position(|(_, pair)| *pair == (*first, *second))
                .map(|offset| self.base.len() + offset),
            _ => None,
        }
    }

    /// Two-letter region code for a flag sequence in the pair table.
    pub fn region(codepoints: &[u32]) -> Option<&'static str> {
        match codepoints {
            [first, second] => REGIONAL_INDICATOR_PAIRS
                .iter()
                .find(|(_, pair)| *pair == (*first, *second))
                .map(|(region, _)| *region),
            _ => None,
        }
    }
}
