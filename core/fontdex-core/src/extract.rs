//! Per-face metadata extraction (made by FontLab https://www.fontlab.com/)
//!
//! One call reads one file, picks one face, and walks its tables in a fixed
//! order: OS/2, head, the naming table, CFF font info, then the derived
//! license, embedding permissions and defaults. Later steps only fill what
//! earlier ones left empty, except license type which always wins.

use std::fs;
use std::path::Path;

use md5::{Digest, Md5};
use read_fonts::tables::os2::Os2;
use read_fonts::tables::postscript::dict::{self, Entry};
use read_fonts::types::Tag;
use read_fonts::{FileRef, FontRef, TableProvider};
use skrifa::string::StringId;
use skrifa::{FontRef as SkrifaFontRef, MetadataProvider};

use crate::charset::Charset;
use crate::error::ExtractionError;
use crate::license;
use crate::model::{Metadata, Panose};
use crate::names::NameFields;
use crate::vendor;

/// Version used when no table supplies one.
pub const DEFAULT_VERSION: &str = "1.0";
/// Style used when no table supplies one.
pub const DEFAULT_STYLE: &str = "Regular";

/// Noise found in real-world version strings.
const VERSION_NOISE: &[&str] = &[
    "Version",
    "version",
    "Revision",
    "revision",
    "$Revision",
    "$:",
    "$",
    ";FFEdit",
    "Altsys Metamorphosis:",
    "Altsys Fontographer",
    "Macromedia Fontographer",
    "Fontmaker",
];

const FS_TYPE_RESTRICTED: u16 = 0x0002;
const FS_TYPE_PREVIEW_AND_PRINT: u16 = 0x0004;
const FS_TYPE_EDITABLE: u16 = 0x0008;
const FS_TYPE_NO_SUBSETTING: u16 = 0x0100;
const FS_TYPE_BITMAP_ONLY: u16 = 0x0200;

/// Everything one extraction produces.
#[derive(Debug, Clone)]
pub struct ExtractedFace {
    pub metadata: Metadata,
    pub panose: Option<Panose>,
    /// Graphic codepoints of the face, for orthography analysis.
    pub charset: Charset,
}

/// Reads faces from disk into [`ExtractedFace`] records.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceMetadataExtractor;

impl FaceMetadataExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts face `findex` of the file at `path`.
    pub fn extract(&self, path: &Path, findex: u32) -> Result<ExtractedFace, ExtractionError> {
        let data = fs::read(path).map_err(|source| ExtractionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        extract_from_bytes(path, &data, findex, user_can_modify(path))
    }
}

/// Whether the effective user may both read and write `path`.
#[cfg(unix)]
pub fn user_can_modify(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is NUL terminated and outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::R_OK | libc::W_OK) == 0 }
}

/// Whether the current user may write `path`; only the read-only bit is known here.
#[cfg(not(unix))]
pub fn user_can_modify(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| !meta.permissions().readonly())
        .unwrap_or(false)
}

/// Extracts face `findex` from in-memory file contents.
///
/// `path` is only used for the record's filepath, the extension-based
/// filetype correction and the file-stem family fallback.
pub fn extract_from_bytes(
    path: &Path,
    data: &[u8],
    findex: u32,
    owner: bool,
) -> Result<ExtractedFace, ExtractionError> {
    let parse_err = |source| ExtractionError::Parse {
        path: path.to_path_buf(),
        index: findex,
        source,
    };
    if let Some(count) = count_faces(data) {
        if findex >= count {
            return Err(ExtractionError::FaceIndex {
                path: path.to_path_buf(),
                index: findex,
                count,
            });
        }
    }
    let font = FontRef::from_index(data, findex).map_err(parse_err)?;
    let sfont = SkrifaFontRef::from_index(data, findex).ok();

    let filepath = path.to_string_lossy().into_owned();
    let mut draft = Draft::default();

    // OS/2
    let mut panose = None;
    let os2 = font.os2().ok();
    if let Some(os2) = os2.as_ref().filter(|os2| has_usable_os2(os2)) {
        draft.vendor = vendor::from_vendor_id(os2.ach_vend_id().to_be_bytes()).map(str::to_string);
        let mut values = [0u8; 10];
        let raw = os2.panose_10();
        let len = raw.len().min(values.len());
        values[..len].copy_from_slice(&raw[..len]);
        panose = Some(Panose {
            filepath: filepath.clone(),
            findex,
            values,
        });
    }

    // head
    if let Ok(head) = font.head() {
        let revision = head.font_revision().to_f64();
        if revision != 0.0 {
            draft.version = Some(format!("{:.2}", revision as f32));
        }
    }

    // name
    if let Ok(name) = font.name() {
        let fields = NameFields::from_table(&name);
        draft.apply_names(fields);
    }

    // CFF font info
    if let Some(info) = postscript_info(&font) {
        if draft.version.is_none() {
            draft.version = info.version;
        }
        if let Some(notice) = info.notice {
            if draft.vendor.is_none() {
                draft.vendor = vendor::from_notice(&notice).map(str::to_string);
            }
            draft.copyright.get_or_insert(notice);
        }
    }

    // license
    let matched = license::classify(
        draft.license_data.as_deref(),
        draft.copyright.as_deref(),
        draft.license_url.as_deref(),
    );
    if let Some(url) = matched.url {
        draft.license_url = Some(url.to_string());
    }

    let fs_type = os2
        .as_ref()
        .map_or(0, |os2| embedding_permissions(os2.fs_type(), has_embedded_bitmaps(&font)));

    let family = draft
        .family
        .or_else(|| sfont.as_ref().and_then(|f| basic_name(f, StringId::FAMILY_NAME)))
        .unwrap_or_else(|| file_stem(path));
    let style = draft
        .style
        .or_else(|| sfont.as_ref().and_then(|f| basic_name(f, StringId::SUBFAMILY_NAME)))
        .unwrap_or_else(|| DEFAULT_STYLE.to_string());
    let version = cleanup_version(draft.version.as_deref().unwrap_or(DEFAULT_VERSION));
    let filetype = correct_filetype(raw_filetype(&font), path);

    let metadata = Metadata {
        filepath,
        findex,
        family,
        style,
        owner,
        psname: draft.psname,
        filetype,
        n_glyphs: font.maxp().map(|maxp| u32::from(maxp.num_glyphs())).unwrap_or(0),
        copyright: draft.copyright,
        version,
        description: draft.description,
        license_data: draft.license_data,
        license_url: draft.license_url,
        vendor: draft.vendor.unwrap_or_else(|| vendor::UNKNOWN_VENDOR.to_string()),
        designer: draft.designer,
        designer_url: draft.designer_url,
        license_type: matched.name.to_string(),
        fs_type,
        filesize: format_size(data.len() as u64),
        checksum: format!("{:x}", Md5::digest(data)),
    };

    Ok(ExtractedFace {
        metadata,
        panose,
        charset: sfont.as_ref().map(Charset::from_font).unwrap_or_default(),
    })
}

/// Number of faces in a font file's contents, `None` if it is not one.
pub fn count_faces(data: &[u8]) -> Option<u32> {
    match FileRef::new(data).ok()? {
        FileRef::Font(_) => Some(1),
        FileRef::Collection(collection) => Some(collection.len()),
    }
}

/// Fields gathered before defaults are applied.
#[derive(Debug, Default)]
struct Draft {
    family: Option<String>,
    style: Option<String>,
    psname: Option<String>,
    copyright: Option<String>,
    version: Option<String>,
    description: Option<String>,
    license_data: Option<String>,
    license_url: Option<String>,
    vendor: Option<String>,
    designer: Option<String>,
    designer_url: Option<String>,
}

impl Draft {
    fn apply_names(&mut self, fields: NameFields) {
        if self.vendor.is_none() {
            self.vendor = fields.vendor();
        }
        if self.version.is_none() {
            self.version = fields.version;
        }
        self.family = fields.family.into_inner();
        self.style = fields.style.into_inner();
        self.psname = fields.psname;
        self.copyright = fields.copyright.into_inner();
        self.description = fields.description.into_inner();
        self.license_data = fields.license_data.into_inner();
        self.license_url = fields.license_url.into_inner();
        self.designer = fields.designer.into_inner();
        self.designer_url = fields.designer_url.into_inner();
    }
}

fn has_usable_os2(os2: &Os2<'_>) -> bool {
    let version = os2.version();
    version >= 1 && version != 0xFFFF
}

struct PostScriptInfo {
    version: Option<String>,
    notice: Option<String>,
}

/// Version and notice strings from the first CFF Top DICT.
fn postscript_info(font: &FontRef<'_>) -> Option<PostScriptInfo> {
    let cff = font.cff().ok()?;
    let top_dict = cff.top_dicts().get(0).ok()?;
    let mut info = PostScriptInfo {
        version: None,
        notice: None,
    };
    for entry in dict::entries(top_dict, None) {
        match entry {
            Ok(Entry::Version(sid)) => info.version = cff.string(sid).map(|s| s.to_string()),
            Ok(Entry::Notice(sid)) => info.notice = cff.string(sid).map(|s| s.to_string()),
            Ok(_) => {}
            Err(_) => break,
        }
    }
    Some(info)
}

fn basic_name(font: &SkrifaFontRef<'_>, id: StringId) -> Option<String> {
    font.localized_strings(id)
        .english_or_first()
        .map(|name| name.to_string())
        .filter(|name| !name.trim().is_empty())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_embedded_bitmaps(font: &FontRef<'_>) -> bool {
    [b"EBDT", b"CBDT", b"sbix"]
        .iter()
        .any(|tag| font.table_data(Tag::new(tag)).is_some())
}

/// Collapses the OS/2 `fsType` bits into a single permission code.
///
/// The least restrictive of restricted (2), preview & print (4) and
/// editable (8) wins, 0 meaning installable. Preview and editable codes
/// gain 16 for no-subsetting and 32 for bitmap-only embedding; bitmap-only
/// on a face without bitmaps degrades to restricted.
pub fn embedding_permissions(flags: u16, has_bitmaps: bool) -> u16 {
    let mut fs_type = 0;
    if flags & FS_TYPE_RESTRICTED != 0 {
        fs_type = 2;
    }
    if flags & FS_TYPE_PREVIEW_AND_PRINT != 0 {
        fs_type = 4;
    }
    if flags & FS_TYPE_EDITABLE != 0 {
        fs_type = 8;
    }
    if fs_type == 4 || fs_type == 8 {
        if flags & FS_TYPE_NO_SUBSETTING != 0 {
            fs_type += 16;
        }
        if flags & FS_TYPE_BITMAP_ONLY != 0 {
            if has_bitmaps {
                fs_type += 32;
            } else {
                fs_type = 2;
            }
        }
    }
    fs_type
}

/// Outline format as a font library would name it.
fn raw_filetype(font: &FontRef<'_>) -> &'static str {
    if font.table_data(Tag::new(b"CFF ")).is_some() || font.table_data(Tag::new(b"CFF2")).is_some()
    {
        "CFF"
    } else if font.table_data(Tag::new(b"glyf")).is_some() {
        "TrueType"
    } else {
        "SFNT"
    }
}

/// Replaces the bare "CFF" label with the container name the extension implies.
pub fn correct_filetype(raw: &str, path: &Path) -> String {
    if raw != "CFF" {
        return raw.to_string();
    }
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("otf") | Some("otc") => "OpenType",
        Some("ttf") => "TrueType",
        Some("ttc") => "TrueType Collection",
        _ => raw,
    }
    .to_string()
}

/// Pulls a plain number out of a noisy version string.
pub fn cleanup_version(raw: &str) -> String {
    let mut version = raw.trim().to_string();
    for noise in VERSION_NOISE {
        if version.contains(noise) {
            version = version.replace(noise, "").trim().to_string();
        }
    }
    for separator in [';', ':'] {
        if version.contains(separator) {
            if let Some(segment) = version.split(separator).find(|part| part.contains('.')) {
                version = segment.trim().to_string();
            }
        }
    }
    version
}

/// Human-readable size with SI (base 1000) units.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["kB", "MB", "GB", "TB", "PB", "EB"];
    if bytes < 1000 {
        return if bytes == 1 {
            "1 byte".to_string()
        } else {
            format!("{bytes} bytes")
        };
    }
    let mut value = bytes as f64 / 1000.0;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
