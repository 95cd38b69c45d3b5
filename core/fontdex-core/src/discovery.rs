//! Font file and face enumeration for fontdex-core (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use read_fonts::tables::os2::SelectionFlags;
use read_fonts::{FontRef, TableProvider};
use skrifa::attribute::Style;
use skrifa::{FontRef as SkrifaFontRef, MetadataProvider};
use walkdir::WalkDir;

use crate::error::DiscoveryError;
use crate::extract::{count_faces, DEFAULT_STYLE};
use crate::model::Font;
use crate::names::NameFields;

/// fontconfig spacing value for monospaced faces.
pub const SPACING_MONO: i32 = 100;
/// fontconfig spacing value for proportional faces.
pub const SPACING_PROPORTIONAL: i32 = 0;
pub const SLANT_ROMAN: i32 = 0;
pub const SLANT_ITALIC: i32 = 100;
pub const SLANT_OBLIQUE: i32 = 110;

/// OpenType weight to fontconfig weight, interpolated between stops.
const WEIGHT_STOPS: [(f32, f32); 12] = [
    (100.0, 0.0),
    (200.0, 40.0),
    (300.0, 50.0),
    (350.0, 55.0),
    (380.0, 75.0),
    (400.0, 80.0),
    (500.0, 100.0),
    (600.0, 180.0),
    (700.0, 200.0),
    (800.0, 205.0),
    (900.0, 210.0),
    (1000.0, 215.0),
];

/// Path to a candidate font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub path: PathBuf,
}

/// Lists every face the sync pass should consider.
///
/// Implementations return faces sorted by `(filepath, findex)`.
pub trait FontFileEnumerator {
    fn enumerate(&self) -> Result<Vec<Font>, DiscoveryError>;
}

/// A fixed list of faces, for callers that already know what they have.
impl FontFileEnumerator for Vec<Font> {
    fn enumerate(&self) -> Result<Vec<Font>, DiscoveryError> {
        let mut faces = self.clone();
        sort_faces(&mut faces);
        Ok(faces)
    }
}

/// Recursive filesystem walker that collects common font formats.
#[derive(Debug, Clone)]
pub struct PathDiscovery {
    roots: Vec<PathBuf>,
    follow_symlinks: bool,
    skip_missing_roots: bool,
}

impl PathDiscovery {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots = roots.into_iter().map(Into::into).collect();
        Self {
            roots,
            follow_symlinks: false,
            skip_missing_roots: false,
        }
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Quietly ignore roots that do not exist instead of failing.
    ///
    /// Handy for the platform default directories, only some of which
    /// exist on any given machine.
    pub fn skip_missing_roots(mut self, skip: bool) -> Self {
        self.skip_missing_roots = skip;
        self
    }

    /// Font files under the roots, in walk order.
    pub fn discover(&self) -> Result<Vec<FontFile>, DiscoveryError> {
        let mut found = Vec::new();

        for root in &self.roots {
            if !root.exists() {
                if self.skip_missing_roots {
                    log::debug!("skipping missing font root {}", root.display());
                    continue;
                }
                return Err(DiscoveryError::MissingRoot(root.clone()));
            }

            for entry in WalkDir::new(root).follow_links(self.follow_symlinks) {
                let entry = entry?;
                if entry.file_type().is_file() && is_font(entry.path()) {
                    found.push(FontFile {
                        path: entry.path().to_path_buf(),
                    });
                }
            }
        }

        Ok(found)
    }
}

impl FontFileEnumerator for PathDiscovery {
    fn enumerate(&self) -> Result<Vec<Font>, DiscoveryError> {
        let files = self.discover()?;
        let mut faces: Vec<Font> = files
            .par_iter()
            .flat_map_iter(|file| faces_in_file(&file.path))
            .collect();
        sort_faces(&mut faces);
        Ok(faces)
    }
}

fn sort_faces(faces: &mut [Font]) {
    faces.sort_by(|a, b| {
        a.filepath
            .cmp(&b.filepath)
            .then_with(|| a.findex.cmp(&b.findex))
    });
}

/// Number of faces in the file at `path`; 1 when it cannot be read.
pub fn face_count(path: &Path) -> u32 {
    fs::read(path)
        .ok()
        .and_then(|data| count_faces(&data))
        .unwrap_or(1)
}

/// One `Font` row per readable face in `path`.
///
/// Unreadable files and faces are logged and left out.
pub fn faces_in_file(path: &Path) -> Vec<Font> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            log::debug!("skipping {}: {err}", path.display());
            return Vec::new();
        }
    };
    let Some(count) = count_faces(&data) else {
        log::debug!("skipping {}: not a font file", path.display());
        return Vec::new();
    };
    (0..count)
        .filter_map(|findex| match describe_face(path, &data, findex) {
            Some(font) => Some(font),
            None => {
                log::debug!("skipping face {findex} of {}", path.display());
                None
            }
        })
        .collect()
}

fn describe_face(path: &Path, data: &[u8], findex: u32) -> Option<Font> {
    let font = FontRef::from_index(data, findex).ok()?;
    let sfont = SkrifaFontRef::from_index(data, findex).ok();

    let names = font.name().map(|name| NameFields::from_table(&name)).ok();
    let family = names
        .as_ref()
        .and_then(|names| names.family.get())
        .map(str::to_string)
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
    let style = names
        .as_ref()
        .and_then(|names| names.style.get())
        .unwrap_or(DEFAULT_STYLE)
        .to_string();

    let spacing = match font.post() {
        Ok(post) if post.is_fixed_pitch() != 0 => SPACING_MONO,
        _ => SPACING_PROPORTIONAL,
    };

    let (slant, weight, width) = match sfont.as_ref() {
        Some(sfont) => {
            let attrs = sfont.attributes();
            let slant = match attrs.style {
                Style::Normal => SLANT_ROMAN,
                Style::Italic => SLANT_ITALIC,
                Style::Oblique(_) => SLANT_OBLIQUE,
            };
            (
                slant,
                fc_weight(attrs.weight.value()),
                fc_width(attrs.stretch.ratio()),
            )
        }
        None => (os2_slant(&font), fc_weight(400.0), 100),
    };

    Some(Font {
        filepath: path.to_string_lossy().into_owned(),
        findex,
        description: format!("{family} {style}"),
        family,
        style,
        spacing,
        slant,
        weight,
        width,
    })
}

fn os2_slant(font: &FontRef<'_>) -> i32 {
    match font.os2() {
        Ok(os2) if os2.fs_selection().contains(SelectionFlags::OBLIQUE) => SLANT_OBLIQUE,
        Ok(os2) if os2.fs_selection().contains(SelectionFlags::ITALIC) => SLANT_ITALIC,
        _ => SLANT_ROMAN,
    }
}

/// Maps an OpenType weight (1..1000) onto fontconfig's scale.
pub fn fc_weight(ot_weight: f32) -> i32 {
    let (first, last) = (WEIGHT_STOPS[0], WEIGHT_STOPS[WEIGHT_STOPS.len() - 1]);
    if ot_weight <= first.0 {
        return first.1 as i32;
    }
    if ot_weight >= last.0 {
        return last.1 as i32;
    }
    for pair in WEIGHT_STOPS.windows(2) {
        let ((ot_lo, fc_lo), (ot_hi, fc_hi)) = (pair[0], pair[1]);
        if ot_weight <= ot_hi {
            let t = (ot_weight - ot_lo) / (ot_hi - ot_lo);
            return (fc_lo + t * (fc_hi - fc_lo)).round() as i32;
        }
    }
    last.1 as i32
}

/// Maps a stretch ratio (1.0 = normal) onto fontconfig's percentage scale.
pub fn fc_width(ratio: f32) -> i32 {
    (ratio * 100.0).round() as i32
}

fn is_font(path: &Path) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return false,
    };

    matches!(ext.as_str(), "ttf" | "otf" | "ttc" | "otc")
}
