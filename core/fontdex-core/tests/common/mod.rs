//! Tiny in-memory font factory for the integration tests.
//!
//! Builds just enough SFNT for the extractor to chew on: head, maxp, OS/2,
//! name, post and a format 12 cmap, plus an optional CFF Top DICT with
//! version and notice strings. Collections share the same layout code.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use byteorder::{BigEndian, WriteBytesExt};

pub const NAME_COPYRIGHT: u16 = 0;
pub const NAME_FAMILY: u16 = 1;
pub const NAME_SUBFAMILY: u16 = 2;
pub const NAME_VERSION: u16 = 5;
pub const NAME_POSTSCRIPT: u16 = 6;
pub const NAME_TRADEMARK: u16 = 7;
pub const NAME_MANUFACTURER: u16 = 8;
pub const NAME_DESIGNER: u16 = 9;
pub const NAME_LICENSE: u16 = 13;

pub const EN_US: u16 = 0x0409;
pub const DE_DE: u16 = 0x0407;

type Table = ([u8; 4], Vec<u8>);

struct NameRecord {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    bytes: Vec<u8>,
}

/// A face description that turns into font bytes.
pub struct FontBuilder {
    names: Vec<NameRecord>,
    os2_version: Option<u16>,
    vendor_id: [u8; 4],
    fs_type: u16,
    panose: [u8; 10],
    weight_class: u16,
    width_class: u16,
    fs_selection: u16,
    revision: f64,
    fixed_pitch: bool,
    codepoints: Vec<u32>,
    cff: Option<(String, String)>,
    bitmaps: bool,
}

impl Default for FontBuilder {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            os2_version: Some(2),
            vendor_id: *b"NONE",
            fs_type: 0,
            panose: [2, 11, 5, 3, 2, 2, 4, 2, 2, 4],
            weight_class: 400,
            width_class: 5,
            fs_selection: 0x0040,
            revision: 0.0,
            fixed_pitch: false,
            codepoints: Vec::new(),
            cff: None,
            bitmaps: false,
        }
    }
}

impl FontBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A face named `family`/`style` that maps printable ASCII.
    pub fn latin(family: &str, style: &str) -> Self {
        Self::new()
            .name(NAME_FAMILY, family)
            .name(NAME_SUBFAMILY, style)
            .codepoints(0x20..=0x7E)
    }

    /// Windows Unicode BMP record in en-US.
    pub fn name(self, name_id: u16, text: &str) -> Self {
        self.name_in(name_id, EN_US, text)
    }

    /// Windows Unicode BMP record in any language.
    pub fn name_in(self, name_id: u16, language_id: u16, text: &str) -> Self {
        let bytes = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
        self.raw_name(3, 1, language_id, name_id, bytes)
    }

    pub fn raw_name(
        mut self,
        platform_id: u16,
        encoding_id: u16,
        language_id: u16,
        name_id: u16,
        bytes: Vec<u8>,
    ) -> Self {
        self.names.push(NameRecord {
            platform_id,
            encoding_id,
            language_id,
            name_id,
            bytes,
        });
        self
    }

    pub fn vendor_id(mut self, id: &[u8; 4]) -> Self {
        self.vendor_id = *id;
        self
    }

    pub fn os2_version(mut self, version: u16) -> Self {
        self.os2_version = Some(version);
        self
    }

    pub fn without_os2(mut self) -> Self {
        self.os2_version = None;
        self
    }

    pub fn fs_type(mut self, flags: u16) -> Self {
        self.fs_type = flags;
        self
    }

    pub fn panose(mut self, values: [u8; 10]) -> Self {
        self.panose = values;
        self
    }

    pub fn weight_class(mut self, weight: u16) -> Self {
        self.weight_class = weight;
        self
    }

    pub fn italic(mut self) -> Self {
        self.fs_selection = 0x0001;
        self
    }

    pub fn revision(mut self, revision: f64) -> Self {
        self.revision = revision;
        self
    }

    pub fn fixed_pitch(mut self) -> Self {
        self.fixed_pitch = true;
        self
    }

    pub fn codepoints(mut self, codepoints: impl IntoIterator<Item = u32>) -> Self {
        self.codepoints.extend(codepoints);
        self.codepoints.sort_unstable();
        self.codepoints.dedup();
        self
    }

    /// Adds a CFF table whose Top DICT carries `version` and `notice`.
    pub fn cff(mut self, version: &str, notice: &str) -> Self {
        self.cff = Some((version.to_string(), notice.to_string()));
        self
    }

    /// Adds an (empty) EBDT table so bitmap-only embedding is honoured.
    pub fn with_bitmaps(mut self) -> Self {
        self.bitmaps = true;
        self
    }

    pub fn num_glyphs(&self) -> u16 {
        self.codepoints.len() as u16 + 1
    }

    /// Single-face font file bytes.
    pub fn build(&self) -> Vec<u8> {
        assemble(&[self], false)
    }

    fn sfnt_version(&self) -> u32 {
        if self.cff.is_some() {
            u32::from_be_bytes(*b"OTTO")
        } else {
            0x0001_0000
        }
    }

    fn tables(&self) -> Vec<Table> {
        let mut tables = vec![
            (*b"head", self.head()),
            (*b"maxp", self.maxp()),
            (*b"name", self.name_table()),
            (*b"post", self.post()),
            (*b"cmap", self.cmap()),
        ];
        if let Some(version) = self.os2_version {
            tables.push((*b"OS/2", self.os2(version)));
        }
        match &self.cff {
            Some((version, notice)) => tables.push((*b"CFF ", cff_table(version, notice))),
            None => tables.push((*b"glyf", vec![0; 4])),
        }
        if self.bitmaps {
            tables.push((*b"EBDT", vec![0, 2, 0, 0]));
        }
        tables.sort_by(|a, b| a.0.cmp(&b.0));
        tables
    }

    fn head(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(54);
        out.write_u16::<BigEndian>(1).unwrap();
        out.write_u16::<BigEndian>(0).unwrap();
        out.write_i32::<BigEndian>((self.revision * 65536.0).round() as i32)
            .unwrap();
        out.write_u32::<BigEndian>(0).unwrap(); // checksum adjustment
        out.write_u32::<BigEndian>(0x5F0F_3CF5).unwrap();
        out.write_u16::<BigEndian>(0).unwrap(); // flags
        out.write_u16::<BigEndian>(1000).unwrap(); // units per em
        out.write_i64::<BigEndian>(0).unwrap();
        out.write_i64::<BigEndian>(0).unwrap();
        for _ in 0..4 {
            out.write_i16::<BigEndian>(0).unwrap(); // bbox
        }
        let mac_style = u16::from(self.fs_selection & 0x0001 != 0) << 1;
        out.write_u16::<BigEndian>(mac_style).unwrap();
        out.write_u16::<BigEndian>(8).unwrap(); // lowest rec ppem
        out.write_i16::<BigEndian>(2).unwrap();
        out.write_i16::<BigEndian>(0).unwrap();
        out.write_i16::<BigEndian>(0).unwrap();
        out
    }

    fn maxp(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(6);
        out.write_u32::<BigEndian>(0x0000_5000).unwrap();
        out.write_u16::<BigEndian>(self.num_glyphs()).unwrap();
        out
    }

    fn os2(&self, version: u16) -> Vec<u8> {
        let mut out = Vec::with_capacity(96);
        out.write_u16::<BigEndian>(version).unwrap();
        out.write_i16::<BigEndian>(500).unwrap(); // avg char width
        out.write_u16::<BigEndian>(self.weight_class).unwrap();
        out.write_u16::<BigEndian>(self.width_class).unwrap();
        out.write_u16::<BigEndian>(self.fs_type).unwrap();
        for _ in 0..10 {
            out.write_i16::<BigEndian>(0).unwrap(); // sub/superscript, strikeout
        }
        out.write_i16::<BigEndian>(0).unwrap(); // family class
        out.extend_from_slice(&self.panose);
        for _ in 0..4 {
            out.write_u32::<BigEndian>(0).unwrap(); // unicode ranges
        }
        out.extend_from_slice(&self.vendor_id);
        out.write_u16::<BigEndian>(self.fs_selection).unwrap();
        let first = self.codepoints.first().copied().unwrap_or(0).min(0xFFFF) as u16;
        let last = self.codepoints.last().copied().unwrap_or(0).min(0xFFFF) as u16;
        out.write_u16::<BigEndian>(first).unwrap();
        out.write_u16::<BigEndian>(last).unwrap();
        out.write_i16::<BigEndian>(800).unwrap();
        out.write_i16::<BigEndian>(-200).unwrap();
        out.write_i16::<BigEndian>(0).unwrap();
        out.write_u16::<BigEndian>(1000).unwrap();
        out.write_u16::<BigEndian>(250).unwrap();
        // version 1 adds code page ranges, version 2 the x-height block
        if version >= 1 {
            out.write_u32::<BigEndian>(1).unwrap();
            out.write_u32::<BigEndian>(0).unwrap();
        }
        if version >= 2 {
            out.write_i16::<BigEndian>(500).unwrap();
            out.write_i16::<BigEndian>(700).unwrap();
            out.write_u16::<BigEndian>(0).unwrap();
            out.write_u16::<BigEndian>(32).unwrap();
            out.write_u16::<BigEndian>(1).unwrap();
        }
        out
    }

    fn name_table(&self) -> Vec<u8> {
        let count = self.names.len() as u16;
        let mut out = Vec::new();
        out.write_u16::<BigEndian>(0).unwrap();
        out.write_u16::<BigEndian>(count).unwrap();
        out.write_u16::<BigEndian>(6 + 12 * count).unwrap();
        let mut offset = 0u16;
        for record in &self.names {
            out.write_u16::<BigEndian>(record.platform_id).unwrap();
            out.write_u16::<BigEndian>(record.encoding_id).unwrap();
            out.write_u16::<BigEndian>(record.language_id).unwrap();
            out.write_u16::<BigEndian>(record.name_id).unwrap();
            out.write_u16::<BigEndian>(record.bytes.len() as u16).unwrap();
            out.write_u16::<BigEndian>(offset).unwrap();
            offset += record.bytes.len() as u16;
        }
        for record in &self.names {
            out.extend_from_slice(&record.bytes);
        }
        out
    }

    fn post(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(32);
        out.write_u32::<BigEndian>(0x0003_0000).unwrap();
        let angle = if self.fs_selection & 0x0001 != 0 { -12 } else { 0 };
        out.write_i32::<BigEndian>(angle << 16).unwrap();
        out.write_i16::<BigEndian>(-100).unwrap();
        out.write_i16::<BigEndian>(50).unwrap();
        out.write_u32::<BigEndian>(u32::from(self.fixed_pitch)).unwrap();
        for _ in 0..4 {
            out.write_u32::<BigEndian>(0).unwrap();
        }
        out
    }

    /// Format 12 subtable under platform 3 encoding 10, one group per codepoint.
    fn cmap(&self) -> Vec<u8> {
        let groups = self.codepoints.len() as u32;
        let mut out = Vec::new();
        out.write_u16::<BigEndian>(0).unwrap();
        out.write_u16::<BigEndian>(1).unwrap();
        out.write_u16::<BigEndian>(3).unwrap();
        out.write_u16::<BigEndian>(10).unwrap();
        out.write_u32::<BigEndian>(12).unwrap();
        out.write_u16::<BigEndian>(12).unwrap();
        out.write_u16::<BigEndian>(0).unwrap();
        out.write_u32::<BigEndian>(16 + 12 * groups).unwrap();
        out.write_u32::<BigEndian>(0).unwrap();
        out.write_u32::<BigEndian>(groups).unwrap();
        for (gid, cp) in self.codepoints.iter().enumerate() {
            out.write_u32::<BigEndian>(*cp).unwrap();
            out.write_u32::<BigEndian>(*cp).unwrap();
            out.write_u32::<BigEndian>(gid as u32 + 1).unwrap();
        }
        out
    }
}

/// Collection file bytes holding every face in order.
pub fn collection(faces: &[FontBuilder]) -> Vec<u8> {
    let refs: Vec<&FontBuilder> = faces.iter().collect();
    assemble(&refs, true)
}

/// Writes `bytes` to `dir/file_name` and returns the path.
pub fn write_font(dir: &Path, file_name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, bytes).expect("write font");
    path
}

fn padded(len: usize) -> usize {
    (len + 3) & !3
}

fn assemble(faces: &[&FontBuilder], is_collection: bool) -> Vec<u8> {
    let layouts: Vec<(u32, Vec<Table>)> = faces
        .iter()
        .map(|face| (face.sfnt_version(), face.tables()))
        .collect();

    let mut cursor = if is_collection {
        12 + 4 * layouts.len()
    } else {
        0
    };
    let mut directory_offsets = Vec::new();
    for (_, tables) in &layouts {
        directory_offsets.push(cursor as u32);
        cursor += 12 + 16 * tables.len();
    }
    let mut table_offsets = Vec::new();
    for (_, tables) in &layouts {
        let mut offsets = Vec::new();
        for (_, data) in tables {
            offsets.push(cursor as u32);
            cursor += padded(data.len());
        }
        table_offsets.push(offsets);
    }

    let mut out = Vec::with_capacity(cursor);
    if is_collection {
        out.extend_from_slice(b"ttcf");
        out.write_u32::<BigEndian>(0x0001_0000).unwrap();
        out.write_u32::<BigEndian>(layouts.len() as u32).unwrap();
        for offset in &directory_offsets {
            out.write_u32::<BigEndian>(*offset).unwrap();
        }
    }
    for ((sfnt_version, tables), offsets) in layouts.iter().zip(&table_offsets) {
        let num_tables = tables.len() as u16;
        let entry_selector = 15 - num_tables.leading_zeros() as u16;
        let search_range = 16 << entry_selector;
        out.write_u32::<BigEndian>(*sfnt_version).unwrap();
        out.write_u16::<BigEndian>(num_tables).unwrap();
        out.write_u16::<BigEndian>(search_range).unwrap();
        out.write_u16::<BigEndian>(entry_selector).unwrap();
        out.write_u16::<BigEndian>(num_tables * 16 - search_range).unwrap();
        for ((tag, data), offset) in tables.iter().zip(offsets) {
            out.extend_from_slice(tag);
            out.write_u32::<BigEndian>(0).unwrap(); // checksum
            out.write_u32::<BigEndian>(*offset).unwrap();
            out.write_u32::<BigEndian>(data.len() as u32).unwrap();
        }
    }
    for (_, tables) in &layouts {
        for (_, data) in tables {
            out.extend_from_slice(data);
            out.resize(padded(out.len()), 0);
        }
    }
    out
}

/// A CFF table with one font, a Top DICT naming two custom strings, and
/// an empty global subroutine INDEX.
fn cff_table(version: &str, notice: &str) -> Vec<u8> {
    const FIRST_CUSTOM_SID: i16 = 391;
    let mut top_dict = Vec::new();
    // operand (3-byte integer) then operator: 0 = version, 1 = Notice
    for (operator, sid) in [(0u8, FIRST_CUSTOM_SID), (1u8, FIRST_CUSTOM_SID + 1)] {
        top_dict.push(28);
        top_dict.write_i16::<BigEndian>(sid).unwrap();
        top_dict.push(operator);
    }

    let mut out = vec![1, 0, 4, 1];
    write_index(&mut out, &[b"Synthetic".as_slice()]);
    write_index(&mut out, &[top_dict.as_slice()]);
    write_index(&mut out, &[version.as_bytes(), notice.as_bytes()]);
    write_index(&mut out, &[]);
    out
}

/// CFF INDEX with 2-byte offsets.
fn write_index(out: &mut Vec<u8>, items: &[&[u8]]) {
    out.write_u16::<BigEndian>(items.len() as u16).unwrap();
    if items.is_empty() {
        return;
    }
    out.push(2);
    let mut offset = 1u16;
    out.write_u16::<BigEndian>(offset).unwrap();
    for item in items {
        offset += item.len() as u16;
        out.write_u16::<BigEndian>(offset).unwrap();
    }
    for item in items {
        out.extend_from_slice(item);
    }
}
