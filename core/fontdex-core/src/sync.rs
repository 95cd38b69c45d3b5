//! Incremental cache synchronization (made by FontLab https://www.fontlab.com/)
//!
//! A pass enumerates faces, rebuilds the `fonts` table, and extracts only
//! the files the cache has never seen. Work is committed in batches so a
//! cancelled or crashed pass keeps what it finished; metadata is written
//! last within each face, so a file only counts as known once all of its
//! rows are in.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use serde::Serialize;

use crate::cache::Cache;
use crate::charset::Charset;
use crate::discovery::FontFileEnumerator;
use crate::error::{Error, ExtractionError, Result};
use crate::extract::FaceMetadataExtractor;
use crate::model::{Font, MetadataRecord, OrthographyResult};
use crate::orthography;

/// Faces processed between commits.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Families whose glyphs are intentionally blank.
pub const DEFAULT_SKIP_FAMILIES: &[&str] = &["Adobe Blank"];

/// Settings for one sync engine.
#[derive(Debug, Clone)]
pub struct SyncContext {
    batch_size: usize,
    skip_families: Vec<String>,
    pangram: String,
}

impl Default for SyncContext {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            skip_families: DEFAULT_SKIP_FAMILIES.iter().map(|s| s.to_string()).collect(),
            pangram: orthography::locale_pangram().to_string(),
        }
    }
}

impl SyncContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Faces per transaction; zero is treated as one.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_skip_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_families = families.into_iter().map(Into::into).collect();
        self
    }

    /// Sample text the orthography analysis tries first.
    pub fn with_pangram(mut self, pangram: impl Into<String>) -> Self {
        self.pangram = pangram.into();
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn pangram(&self) -> &str {
        &self.pangram
    }

    pub fn skips(&self, family: &str) -> bool {
        self.skip_families.iter().any(|skip| skip == family)
    }

    /// Orthography for `charset`, or an empty result for skipped families.
    pub fn orthography_for(&self, family: &str, charset: &Charset) -> OrthographyResult {
        if self.skips(family) {
            return OrthographyResult::default();
        }
        orthography::analyze(charset, &self.pangram)
    }
}

/// Faces handled so far out of the enumerated total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

/// What one pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Faces the enumerator returned.
    pub total: usize,
    /// Faces looked at before finishing or being cancelled.
    pub processed: usize,
    /// Faces newly written to the cache.
    pub inserted: usize,
    /// Faces skipped because their file was already known.
    pub skipped: usize,
    /// Faces whose extraction failed.
    pub failed: usize,
    pub cancelled: bool,
}

/// Drives enumeration, extraction, classification and cache writes.
pub struct SyncEngine<E> {
    cache: Arc<Cache>,
    enumerator: E,
    extractor: FaceMetadataExtractor,
    context: SyncContext,
    cancel: Arc<AtomicBool>,
    progress: Option<Sender<Progress>>,
}

impl<E: FontFileEnumerator> SyncEngine<E> {
    pub fn new(cache: Arc<Cache>, enumerator: E) -> Self {
        Self {
            cache,
            enumerator,
            extractor: FaceMetadataExtractor::new(),
            context: SyncContext::default(),
            cancel: Arc::new(AtomicBool::new(false)),
            progress: None,
        }
    }

    pub fn with_context(mut self, context: SyncContext) -> Self {
        self.context = context;
        self
    }

    /// Posts a [`Progress`] after every face.
    pub fn with_progress(mut self, sender: Sender<Progress>) -> Self {
        self.progress = Some(sender);
        self
    }

    /// Shared flag; set it to stop the pass after the current face.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    pub fn context(&self) -> &SyncContext {
        &self.context
    }

    /// Runs one pass on the calling thread.
    pub fn run(&self) -> Result<SyncReport> {
        let faces = self.enumerator.enumerate()?;
        let known = self.cache.reader()?.known_files()?;
        let mut report = SyncReport {
            total: faces.len(),
            ..SyncReport::default()
        };
        log::info!(
            "sync: {} faces enumerated, {} files already known",
            faces.len(),
            known.len()
        );

        let mut writer = self.cache.writer()?;
        writer.clear_fonts()?;
        for face in &faces {
            writer.insert_font(face)?;
        }
        writer.commit()?;

        let mut writer = self.cache.writer()?;
        let mut pending = 0;
        for face in &faces {
            if known.contains(&face.filepath) {
                report.skipped += 1;
            } else {
                match self.build_record(face) {
                    Ok(record) => {
                        writer.insert_record(&record)?;
                        report.inserted += 1;
                    }
                    Err(err) => {
                        log::warn!("{err}");
                        report.failed += 1;
                    }
                }
            }
            report.processed += 1;
            pending += 1;
            self.post_progress(report.processed, report.total);

            if pending >= self.context.batch_size {
                writer.commit()?;
                log::debug!("sync: committed batch at {}/{}", report.processed, report.total);
                writer = self.cache.writer()?;
                pending = 0;
            }

            if self.cancel.load(Ordering::Relaxed) {
                report.cancelled = true;
                break;
            }
        }
        writer.commit()?;

        log::info!(
            "sync: {} inserted, {} skipped, {} failed{}",
            report.inserted,
            report.skipped,
            report.failed,
            if report.cancelled { " (cancelled)" } else { "" }
        );
        Ok(report)
    }

    fn build_record(&self, face: &Font) -> Result<MetadataRecord, ExtractionError> {
        let extracted = self
            .extractor
            .extract(Path::new(&face.filepath), face.findex)?;
        let family = if self.context.skips(&face.family) {
            &face.family
        } else {
            &extracted.metadata.family
        };
        let orthography = self.context.orthography_for(family, &extracted.charset);
        Ok(MetadataRecord {
            metadata: extracted.metadata,
            panose: extracted.panose,
            orthography,
        })
    }

    fn post_progress(&self, processed: usize, total: usize) {
        if let Some(sender) = &self.progress {
            // A dropped receiver just means nobody is watching.
            let _ = sender.send(Progress { processed, total });
        }
    }
}

impl<E: FontFileEnumerator + Send + 'static> SyncEngine<E> {
    /// Runs the pass on a background thread.
    ///
    /// Progress goes to the returned handle's receiver, replacing any
    /// sender set with [`with_progress`](Self::with_progress).
    pub fn spawn(mut self) -> SyncHandle {
        let (sender, receiver) = mpsc::channel();
        self.progress = Some(sender);
        let cancel = self.cancel_flag();
        let join = thread::spawn(move || self.run());
        SyncHandle {
            join,
            cancel,
            progress: receiver,
        }
    }
}

/// A pass running on its own thread.
pub struct SyncHandle {
    join: JoinHandle<Result<SyncReport>>,
    cancel: Arc<AtomicBool>,
    progress: Receiver<Progress>,
}

impl SyncHandle {
    /// Asks the worker to stop after its current face.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn progress(&self) -> &Receiver<Progress> {
        &self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Blocks until the pass ends.
    pub fn wait(self) -> Result<SyncReport> {
        self.join.join().map_err(|_| Error::WorkerPanicked)?
    }
}
