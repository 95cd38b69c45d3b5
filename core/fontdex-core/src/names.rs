//! Naming-table decoding and field precedence (made by FontLab https://www.fontlab.com/)
//!
//! Only Windows-platform records are read. Each one is decoded according to
//! its encoding ID and offered to [`NameFields`], which decides whether it
//! replaces what an earlier record already supplied.

use encoding_rs::{Encoding, BIG5, EUC_KR, GBK, SHIFT_JIS, UTF_16BE};
use read_fonts::tables::name::Name;

use crate::vendor;

pub const PLATFORM_WINDOWS: u16 = 3;
pub const LANGUAGE_EN_US: u16 = 0x0409;

const ENCODING_SHIFT_JIS: u16 = 1;
const ENCODING_PRC: u16 = 3;
const ENCODING_BIG5: u16 = 4;
const ENCODING_WANSUNG: u16 = 5;
const ENCODING_JOHAB: u16 = 6;
const ENCODING_UCS4: u16 = 10;

const COPYRIGHT: u16 = 0;
const FAMILY: u16 = 1;
const SUBFAMILY: u16 = 2;
const VERSION: u16 = 5;
const POSTSCRIPT_NAME: u16 = 6;
const TRADEMARK: u16 = 7;
const MANUFACTURER: u16 = 8;
const DESIGNER: u16 = 9;
const DESCRIPTION: u16 = 10;
const DESIGNER_URL: u16 = 12;
const LICENSE: u16 = 13;
const LICENSE_URL: u16 = 14;
const TYPOGRAPHIC_FAMILY: u16 = 16;
const TYPOGRAPHIC_SUBFAMILY: u16 = 17;
const WWS_FAMILY: u16 = 21;
const WWS_SUBFAMILY: u16 = 22;

/// One raw name record, still encoded.
#[derive(Debug, Clone, Copy)]
pub struct RawName<'a> {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: u16,
    pub bytes: &'a [u8],
}

/// Walks the records of a naming table in table order.
///
/// Records whose string data falls outside the table are skipped.
pub fn raw_names<'a>(name: &Name<'a>) -> impl Iterator<Item = RawName<'a>> + 'a {
    let data = name.string_data().as_bytes();
    name.name_record().iter().filter_map(move |record| {
        let start = record.string_offset().to_u32() as usize;
        let end = start + usize::from(record.length());
        Some(RawName {
            platform_id: record.platform_id(),
            encoding_id: record.encoding_id(),
            language_id: record.language_id(),
            name_id: record.name_id().to_u16(),
            bytes: data.get(start..end)?,
        })
    })
}

/// Decodes a Windows-platform string, `None` when it is not decodable.
///
/// The legacy CJK encodings store single-byte characters in two-byte cells
/// with a zero high byte; zero bytes are dropped before decoding.
pub fn decode_windows(encoding_id: u16, bytes: &[u8]) -> Option<String> {
    let legacy = |encoding: &'static Encoding| {
        let packed: Vec<u8> = bytes.iter().copied().filter(|b| *b != 0).collect();
        decode_strict(encoding, &packed)
    };
    match encoding_id {
        ENCODING_SHIFT_JIS => legacy(SHIFT_JIS),
        ENCODING_PRC => legacy(GBK),
        ENCODING_BIG5 => legacy(BIG5),
        ENCODING_WANSUNG => legacy(EUC_KR),
        ENCODING_JOHAB => None,
        ENCODING_UCS4 => decode_ucs4(bytes),
        _ => decode_strict(UTF_16BE, bytes),
    }
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

fn decode_ucs4(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 4 != 0 {
        return None;
    }
    bytes
        .chunks_exact(4)
        .map(|chunk| char::from_u32(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])))
        .collect()
}

/// A text field filled from one or more name records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameField {
    value: Option<String>,
    from_en_us: bool,
}

impl NameField {
    /// The first value wins, except that an en-US value replaces a
    /// non-en-US one. A second en-US value never replaces the first.
    fn offer(&mut self, value: &str, language_id: u16) {
        let en_us = language_id == LANGUAGE_EN_US;
        let take = match self.value {
            None => true,
            Some(_) => en_us && !self.from_en_us,
        };
        if take {
            self.value = Some(value.to_string());
            self.from_en_us = en_us;
        }
    }

    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn into_inner(self) -> Option<String> {
        self.value
    }
}

/// Everything the extractor wants from the naming table.
#[derive(Debug, Clone, Default)]
pub struct NameFields {
    pub family: NameField,
    pub style: NameField,
    pub copyright: NameField,
    pub description: NameField,
    pub license_data: NameField,
    pub license_url: NameField,
    pub designer: NameField,
    pub designer_url: NameField,
    /// First version string seen; only used when nothing else set one.
    pub version: Option<String>,
    /// First PostScript name seen.
    pub psname: Option<String>,
    vendor_candidate: Option<String>,
    vendor_locked: bool,
}

impl NameFields {
    /// Collects the Windows-platform records of `name`.
    pub fn from_table(name: &Name<'_>) -> Self {
        let mut fields = Self::default();
        for raw in raw_names(name) {
            fields.offer_raw(&raw);
        }
        fields
    }

    /// Offers a still-encoded record; other platforms are ignored.
    pub fn offer_raw(&mut self, raw: &RawName<'_>) {
        if raw.platform_id != PLATFORM_WINDOWS {
            return;
        }
        if let Some(text) = decode_windows(raw.encoding_id, raw.bytes) {
            self.offer(raw.name_id, raw.language_id, &text);
        }
    }

    /// Offers one decoded record.
    pub fn offer(&mut self, name_id: u16, language_id: u16, text: &str) {
        match name_id {
            FAMILY | WWS_FAMILY | TYPOGRAPHIC_FAMILY => self.family.offer(text, language_id),
            SUBFAMILY | WWS_SUBFAMILY | TYPOGRAPHIC_SUBFAMILY => {
                self.style.offer(text, language_id)
            }
            COPYRIGHT => self.copyright.offer(text, language_id),
            DESCRIPTION => self.description.offer(text, language_id),
            LICENSE => self.license_data.offer(text, language_id),
            LICENSE_URL => self.license_url.offer(text, language_id),
            DESIGNER => self.designer.offer(text, language_id),
            DESIGNER_URL => self.designer_url.offer(text, language_id),
            VERSION => {
                self.version.get_or_insert_with(|| text.to_string());
            }
            POSTSCRIPT_NAME => {
                self.psname.get_or_insert_with(|| text.to_string());
            }
            TRADEMARK => {
                if !self.vendor_locked && self.vendor_candidate.is_none() {
                    self.vendor_candidate = Some(text.to_string());
                }
            }
            MANUFACTURER => {
                if !self.vendor_locked {
                    self.vendor_candidate = Some(text.to_string());
                    self.vendor_locked = language_id == LANGUAGE_EN_US;
                }
            }
            _ => {}
        }
    }

    /// The raw trademark/manufacturer text that would name the vendor.
    pub fn vendor_candidate(&self) -> Option<&str> {
        self.vendor_candidate.as_deref()
    }

    /// The candidate, accepted only if it is a known vendor name or a
    /// notice that mentions one.
    pub fn vendor(&self) -> Option<String> {
        self.vendor_candidate().and_then(vendor::resolve_candidate)
    }
}
