//! Where metadata records come from (made by FontLab https://www.fontlab.com/)
//!
//! Callers that just want "the record for this face" should not care
//! whether it is parsed on the spot or read back from the cache.

use std::path::Path;

use crate::cache::Cache;
use crate::error::Result;
use crate::extract::FaceMetadataExtractor;
use crate::model::MetadataRecord;
use crate::sync::SyncContext;

/// Something that can produce the full record for one face.
pub trait MetadataSource {
    /// `Ok(None)` means the source has nothing for that face.
    fn record(&self, filepath: &str, findex: u32) -> Result<Option<MetadataRecord>>;
}

/// Parses the font file on every call.
#[derive(Debug, Clone, Default)]
pub struct LiveSource {
    extractor: FaceMetadataExtractor,
    context: SyncContext,
}

impl LiveSource {
    pub fn new(context: SyncContext) -> Self {
        Self {
            extractor: FaceMetadataExtractor::new(),
            context,
        }
    }
}

impl MetadataSource for LiveSource {
    fn record(&self, filepath: &str, findex: u32) -> Result<Option<MetadataRecord>> {
        let extracted = self.extractor.extract(Path::new(filepath), findex)?;
        let orthography = self
            .context
            .orthography_for(&extracted.metadata.family, &extracted.charset);
        Ok(Some(MetadataRecord {
            metadata: extracted.metadata,
            panose: extracted.panose,
            orthography,
        }))
    }
}

impl MetadataSource for Cache {
    fn record(&self, filepath: &str, findex: u32) -> Result<Option<MetadataRecord>> {
        Ok(self.reader()?.get_record(filepath, findex)?)
    }
}
