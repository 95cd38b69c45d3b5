#[path = "../../core/fontdex-core/tests/common/mod.rs"]
mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::*;
use serde_json::Value;
use tempfile::tempdir;

fn fontdex(cache: &Path, args: &[&str], extra: &[&Path]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_fontdex"))
        .arg("--cache")
        .arg(cache)
        .args(args)
        .args(extra)
        .output()
        .expect("run fontdex");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn font_folder(dir: &Path) {
    write_font(
        dir,
        "Sample-Regular.ttf",
        &FontBuilder::latin("Sample Sans", "Regular")
            .vendor_id(b"MS  ")
            .name(NAME_COPYRIGHT, "Copyright 2021. Licensed under the GNU GPL.")
            .fs_type(0x0004)
            .build(),
    );
    write_font(
        dir,
        "Mono-Regular.ttf",
        &FontBuilder::latin("Sample Mono", "Regular")
            .fixed_pitch()
            .build(),
    );
}

#[test]
fn sync_then_list_and_show() {
    let tmp = tempdir().expect("tempdir");
    let fonts = tmp.path().join("fonts");
    let cache = tmp.path().join("cache");
    std::fs::create_dir_all(&fonts).expect("fonts dir");
    font_folder(&fonts);

    let sync = fontdex(&cache, &["sync", "--json"], &[&fonts]);
    let report: Value = serde_json::from_slice(&sync.stdout).expect("report json");
    assert_eq!(report["inserted"], 2);
    assert_eq!(report["skipped"], 0);

    let again = fontdex(&cache, &["sync", "--json"], &[&fonts]);
    let report: Value = serde_json::from_slice(&again.stdout).expect("report json");
    assert_eq!(report["inserted"], 0);
    assert_eq!(report["skipped"], 2);

    let list = fontdex(&cache, &["list", "--json", "--name", "Mono"], &[]);
    let listed: Value = serde_json::from_slice(&list.stdout).expect("list json");
    let rows = listed.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["family"], "Sample Mono");
    assert_eq!(rows[0]["spacing"], 100);

    let sample = fonts.join("Sample-Regular.ttf");
    let show = fontdex(&cache, &["show"], &[&sample]);
    let record: Value = serde_json::from_slice(&show.stdout).expect("record json");
    assert_eq!(record["metadata"]["vendor"], "Microsoft Corp.");
    assert_eq!(record["metadata"]["license-type"], "GNU General Public License");
    assert_eq!(record["metadata"]["fsType"], 4);
    assert_eq!(
        record["orthography"]["support"]["Basic Latin"]["name"],
        "Basic Latin"
    );
}

#[test]
fn info_reads_the_file_without_a_cache() {
    let tmp = tempdir().expect("tempdir");
    font_folder(tmp.path());
    let cache = tmp.path().join("unused-cache");
    let font = tmp.path().join("Mono-Regular.ttf");

    let info = fontdex(&cache, &["info", "--ndjson"], &[&font]);
    let text = String::from_utf8(info.stdout).expect("utf8");
    assert_eq!(text.lines().count(), 1);
    let record: Value = serde_json::from_str(text.trim()).expect("record json");
    assert_eq!(record["metadata"]["family"], "Sample Mono");
    assert_eq!(record["metadata"]["filetype"], "TrueType");
    assert!(!cache.exists(), "info must not create the cache");
}

#[test]
fn orthography_sample_for_a_greek_face() {
    let tmp = tempdir().expect("tempdir");
    let greek = write_font(
        tmp.path(),
        "Greek.ttf",
        &FontBuilder::new()
            .name(NAME_FAMILY, "Sample Greek")
            .codepoints((0x0391..=0x03A9).filter(|cp| *cp != 0x03A2))
            .codepoints(0x03B1..=0x03C9)
            .build(),
    );
    let cache = tmp.path().join("unused-cache");

    let output = fontdex(
        &cache,
        &["orthography", "--pangram", "The quick brown fox"],
        &[&greek],
    );
    let result: Value = serde_json::from_slice(&output.stdout).expect("orthography json");
    let support = result["support"].as_object().expect("support");
    assert!(support.contains_key("Basic Greek"));
    assert!(result["sample"].is_string());
}

#[test]
fn show_without_sync_fails_politely() {
    let tmp = tempdir().expect("tempdir");
    let cache = tmp.path().join("cache");
    let output = Command::new(env!("CARGO_BIN_EXE_fontdex"))
        .arg("--cache")
        .arg(&cache)
        .args(["show", "/fonts/none.ttf"])
        .output()
        .expect("run fontdex");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no cached record"), "stderr: {stderr}");
}
