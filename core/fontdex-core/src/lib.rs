/// fontdex-core: the patient archivist of font collections
///
/// Every font file has a story tucked into its tables: who drew it, who sells
/// it, what you may do with it, which alphabets it can write. This library
/// reads those stories once, writes them down in a persistent cache, and
/// hands them back instantly the next time anyone asks, even when the
/// collection runs to tens of thousands of faces.
///
/// ## Four Acts of Font Archiving
///
/// **Enumeration**: Walking the shelves
/// - Finds TTF, OTF, TTC and OTC files under any number of roots
/// - Counts the faces in collections and visits each one
/// - Reads the cheap descriptive fields in parallel
///
/// **Extraction**: Reading each face's papers
/// - Names, version, copyright, designer and vendor from the binary tables
/// - PANOSE digits and embedding permissions from OS/2
/// - Legacy CJK name encodings decoded politely
///
/// **Classification**: Putting names to what we found
/// - License families from free-text notices and URLs
/// - Vendors from four-letter IDs and foundry names
/// - Orthography coverage, with a sample string the face can actually render
///
/// **Synchronization**: Keeping the archive honest
/// - Skips files it already knows, so repeat passes are quick
/// - Commits in batches, so a cancelled pass keeps its progress
/// - Throws away rows from an older schema instead of misreading them
///
/// ## A Sample Conversation
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use fontdex_core::cache::Cache;
/// use fontdex_core::discovery::PathDiscovery;
/// use fontdex_core::sync::SyncEngine;
///
/// let cache = Arc::new(Cache::open("/tmp/fontdex-cache".as_ref())?);
/// let fonts = PathDiscovery::new(["/usr/share/fonts"]);
///
/// let report = SyncEngine::new(Arc::clone(&cache), fonts).run()?;
/// println!("{} new faces, {} already known", report.inserted, report.skipped);
///
/// for metadata in cache.reader()?.list_metadata()? {
///     println!("{} {} ({})", metadata.family, metadata.style, metadata.license_type);
/// }
/// #
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// ## The Cast of Characters
///
/// - [`model::Metadata`]: everything we learned about one face
/// - [`extract::FaceMetadataExtractor`]: reads one face from disk
/// - [`cache::Cache`]: the versioned LMDB archive
/// - [`sync::SyncEngine`]: the pass that keeps the archive current
/// - [`source::MetadataSource`]: the same question asked of a file or the cache
///
/// ---
///
/// Crafted with care at FontLab https://www.fontlab.com/
pub mod cache;
pub mod charset;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod license;
pub mod model;
pub mod names;
pub mod orthography;
pub mod output;
pub mod source;
pub mod string_set;
pub mod sync;
pub mod vendor;

pub use error::{Error, Result};
