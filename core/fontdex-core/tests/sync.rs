/// Keeping the archive in step with the shelves
///
/// These tests run real sync passes over synthetic font folders and a
/// throwaway LMDB cache, then poke at what landed: rows per table, files
/// skipped on the second pass, cancelled passes and schema upgrades.
mod common;

use std::fs;
use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;

use common::*;
use fontdex_core::cache::{Cache, SchemaStatus, CURRENT_VERSION};
use fontdex_core::discovery::{FontFileEnumerator, PathDiscovery};
use fontdex_core::model::Font;
use fontdex_core::source::MetadataSource;
use fontdex_core::sync::{SyncContext, SyncEngine};

fn font_folder(dir: &Path) {
    write_font(
        dir,
        "Alpha-Regular.ttf",
        &FontBuilder::latin("Alpha", "Regular").build(),
    );
    write_font(
        dir,
        "Beta-Italic.ttf",
        &FontBuilder::latin("Beta", "Italic").italic().build(),
    );
    write_font(
        dir,
        "Pair.ttc",
        &collection(&[
            FontBuilder::latin("Pair", "Regular"),
            FontBuilder::latin("Pair", "Bold").weight_class(700),
        ]),
    );
}

fn context() -> SyncContext {
    SyncContext::new().with_pangram("The quick brown fox jumps over the lazy dog.")
}

fn listed_face(filepath: &Path, family: &str) -> Font {
    Font {
        filepath: filepath.to_string_lossy().into_owned(),
        findex: 0,
        family: family.to_string(),
        style: "Regular".to_string(),
        spacing: 0,
        slant: 0,
        weight: 80,
        width: 100,
        description: format!("{family} Regular"),
    }
}

#[test]
fn first_pass_fills_every_table() {
    let fonts = tempfile::tempdir().expect("fonts dir");
    let store = tempfile::tempdir().expect("cache dir");
    font_folder(fonts.path());
    let cache = Arc::new(Cache::open(store.path()).expect("open cache"));

    let report = SyncEngine::new(Arc::clone(&cache), PathDiscovery::new([fonts.path()]))
        .with_context(context())
        .run()
        .expect("sync");

    assert_eq!(report.total, 4);
    assert_eq!(report.inserted, 4);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.failed, 0);
    assert!(!report.cancelled);

    let counts = cache.counts().expect("counts");
    assert_eq!(counts.fonts, 4);
    assert_eq!(counts.metadata, 4);
    assert_eq!(counts.panose, 4);
    assert_eq!(counts.orthography, 4);

    let reader = cache.reader().expect("reader");
    let pair = fonts.path().join("Pair.ttc");
    let bold = reader
        .get_metadata(&pair.to_string_lossy(), 1)
        .expect("lookup")
        .expect("bold face cached");
    assert_eq!(bold.style, "Bold");

    let fonts_rows = reader.list_fonts().expect("fonts");
    let beta = fonts_rows
        .iter()
        .find(|font| font.family == "Beta")
        .expect("beta row");
    assert_eq!(beta.slant, 100);
    assert_eq!(beta.description, "Beta Italic");
}

#[test]
fn second_pass_skips_known_files() {
    let fonts = tempfile::tempdir().expect("fonts dir");
    let store = tempfile::tempdir().expect("cache dir");
    font_folder(fonts.path());
    let cache = Arc::new(Cache::open(store.path()).expect("open cache"));
    let engine = SyncEngine::new(Arc::clone(&cache), PathDiscovery::new([fonts.path()]))
        .with_context(context());

    engine.run().expect("first pass");
    let before = cache.counts().expect("counts");
    let report = engine.run().expect("second pass");

    assert_eq!(report.inserted, 0);
    assert_eq!(report.skipped, 4);
    assert_eq!(cache.counts().expect("counts"), before);
}

#[test]
fn new_files_are_picked_up() {
    let fonts = tempfile::tempdir().expect("fonts dir");
    let store = tempfile::tempdir().expect("cache dir");
    font_folder(fonts.path());
    let cache = Arc::new(Cache::open(store.path()).expect("open cache"));
    let engine = SyncEngine::new(Arc::clone(&cache), PathDiscovery::new([fonts.path()]))
        .with_context(context());
    engine.run().expect("first pass");

    write_font(
        fonts.path(),
        "Gamma-Regular.ttf",
        &FontBuilder::latin("Gamma", "Regular").build(),
    );
    let report = engine.run().expect("second pass");
    assert_eq!(report.inserted, 1);
    assert_eq!(report.skipped, 4);
    assert_eq!(cache.counts().expect("counts").fonts, 5);
}

#[test]
fn broken_faces_are_counted_and_retried() {
    let fonts = tempfile::tempdir().expect("fonts dir");
    let store = tempfile::tempdir().expect("cache dir");
    let good = write_font(
        fonts.path(),
        "Good.ttf",
        &FontBuilder::latin("Good", "Regular").build(),
    );
    let missing = fonts.path().join("Vanished.ttf");
    let cache = Arc::new(Cache::open(store.path()).expect("open cache"));
    let listed = vec![
        listed_face(&missing, "Vanished"),
        listed_face(&good, "Good"),
    ];
    let engine = SyncEngine::new(Arc::clone(&cache), listed).with_context(context());

    let report = engine.run().expect("sync");
    assert_eq!(report.inserted, 1);
    assert_eq!(report.failed, 1);

    // the failed file stays unknown, so it is tried again
    let report = engine.run().expect("sync again");
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(cache.counts().expect("counts").metadata, 1);
}

#[test]
fn skipped_families_get_no_orthography() {
    let fonts = tempfile::tempdir().expect("fonts dir");
    let store = tempfile::tempdir().expect("cache dir");
    let blank = write_font(
        fonts.path(),
        "AdobeBlank.ttf",
        &FontBuilder::latin("Adobe Blank", "Regular").build(),
    );
    let cache = Arc::new(Cache::open(store.path()).expect("open cache"));
    SyncEngine::new(Arc::clone(&cache), PathDiscovery::new([fonts.path()]))
        .with_context(context())
        .run()
        .expect("sync");

    let record = cache
        .record(&blank.to_string_lossy(), 0)
        .expect("lookup")
        .expect("cached");
    assert!(record.orthography.is_empty());
    assert_eq!(record.orthography.sample, None);
    assert_eq!(record.metadata.family, "Adobe Blank");
}

#[test]
fn progress_is_posted_per_face() {
    let fonts = tempfile::tempdir().expect("fonts dir");
    let store = tempfile::tempdir().expect("cache dir");
    font_folder(fonts.path());
    let cache = Arc::new(Cache::open(store.path()).expect("open cache"));
    let (sender, receiver) = mpsc::channel();

    SyncEngine::new(Arc::clone(&cache), PathDiscovery::new([fonts.path()]))
        .with_context(context().with_batch_size(1))
        .with_progress(sender)
        .run()
        .expect("sync");

    let seen: Vec<_> = receiver.try_iter().collect();
    assert_eq!(seen.len(), 4);
    assert!(seen.iter().all(|p| p.total == 4));
    assert_eq!(
        seen.iter().map(|p| p.processed).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}

#[test]
fn cancelled_pass_keeps_committed_work() {
    let fonts = tempfile::tempdir().expect("fonts dir");
    let store = tempfile::tempdir().expect("cache dir");
    font_folder(fonts.path());
    let cache = Arc::new(Cache::open(store.path()).expect("open cache"));
    let engine = SyncEngine::new(Arc::clone(&cache), PathDiscovery::new([fonts.path()]))
        .with_context(context().with_batch_size(1));

    // raised before the pass starts: the first face is still handled
    engine
        .cancel_flag()
        .store(true, std::sync::atomic::Ordering::Relaxed);
    let report = engine.run().expect("sync");

    assert!(report.cancelled);
    assert_eq!(report.processed, 1);
    assert_eq!(report.inserted, 1);
    assert_eq!(cache.counts().expect("counts").metadata, 1);
    assert_eq!(cache.counts().expect("counts").fonts, 4);
}

#[test]
fn background_pass_reports_through_the_handle() {
    let fonts = tempfile::tempdir().expect("fonts dir");
    let store = tempfile::tempdir().expect("cache dir");
    font_folder(fonts.path());
    let cache = Arc::new(Cache::open(store.path()).expect("open cache"));

    let handle = SyncEngine::new(Arc::clone(&cache), PathDiscovery::new([fonts.path()]))
        .with_context(context())
        .spawn();
    let last = handle.progress().iter().last().expect("some progress");
    let report = handle.wait().expect("worker result");

    assert_eq!(last.processed, 4);
    assert_eq!(report.inserted, 4);
}

#[test]
fn older_schema_is_rebuilt() {
    let fonts = tempfile::tempdir().expect("fonts dir");
    let store = tempfile::tempdir().expect("cache dir");
    font_folder(fonts.path());
    {
        let cache = Arc::new(Cache::open_with_version(store.path(), CURRENT_VERSION - 1).expect("old"));
        SyncEngine::new(Arc::clone(&cache), PathDiscovery::new([fonts.path()]))
            .with_context(context())
            .run()
            .expect("sync");
        assert_eq!(cache.counts().expect("counts").metadata, 4);
    }

    let cache = Cache::open(store.path()).expect("current");
    assert_eq!(
        cache.status(),
        SchemaStatus::Rebuilt {
            previous: Some(CURRENT_VERSION - 1)
        }
    );
    assert!(cache.counts().expect("counts").is_empty());
}

#[test]
fn missing_root_can_be_skipped() {
    let fonts = tempfile::tempdir().expect("fonts dir");
    font_folder(fonts.path());
    let gone = fonts.path().join("gone");

    let strict = PathDiscovery::new([fonts.path().to_path_buf(), gone.clone()]);
    assert!(strict.enumerate().is_err());

    let lenient = PathDiscovery::new([fonts.path().to_path_buf(), gone]).skip_missing_roots(true);
    assert_eq!(lenient.enumerate().expect("enumerate").len(), 4);

    fs::remove_file(fonts.path().join("Pair.ttc")).expect("remove");
    assert_eq!(lenient.enumerate().expect("enumerate").len(), 2);
}
