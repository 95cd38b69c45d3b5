/// Testing our font-finding expedition skills
///
/// These tests make sure our brave filesystem explorers can find fonts
/// in all the usual hiding spots - nested directories, various file
/// extensions, collections with more than one face inside - and that
/// each face comes back with fontconfig-style numbers attached.
mod common;

use std::path::PathBuf;

use common::*;
use fontdex_core::discovery::{
    face_count, faces_in_file, FontFileEnumerator, PathDiscovery, SLANT_ITALIC, SLANT_ROMAN,
    SPACING_MONO, SPACING_PROPORTIONAL,
};

#[test]
fn discovers_common_font_extensions_recursively() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();

    let font1 = root.join("a.ttf");
    let font2_dir = root.join("nested");
    std::fs::create_dir_all(&font2_dir).unwrap();
    let font2 = font2_dir.join("b.otf");
    let font3 = root.join("c.OTC");

    std::fs::write(&font1, b"\0\0font1").unwrap();
    std::fs::write(&font2, b"\0\0font2").unwrap();
    std::fs::write(&font3, b"\0\0font3").unwrap();

    let discovery = PathDiscovery::new([PathBuf::from(root)]);
    let fonts = discovery.discover().expect("discover");

    let paths: Vec<PathBuf> = fonts.into_iter().map(|f| f.path).collect();
    assert!(paths.contains(&font1));
    assert!(paths.contains(&font2));
    assert!(paths.contains(&font3));
}

#[test]
fn ignores_non_font_extensions() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    std::fs::write(root.join("readme.txt"), b"hello").unwrap();
    std::fs::write(root.join("font.woff2"), b"wOF2").unwrap();

    let discovery = PathDiscovery::new([root.to_path_buf()]);
    let fonts = discovery.discover().expect("discover");

    assert!(fonts.is_empty());
}

#[test]
fn returns_error_for_missing_root() {
    let missing = PathBuf::from("/nonexistent/fontdex-fonts");
    let discovery = PathDiscovery::new([missing]);
    let result = discovery.discover();

    assert!(result.is_err());
}

#[test]
fn enumerates_every_face_in_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write_font(
        root,
        "b-mono.ttf",
        &FontBuilder::latin("Mono", "Regular").fixed_pitch().build(),
    );
    write_font(
        root,
        "a-pair.ttc",
        &collection(&[
            FontBuilder::latin("Pair", "Regular"),
            FontBuilder::latin("Pair", "Italic").italic(),
        ]),
    );
    std::fs::write(root.join("c-broken.ttf"), b"not a font").unwrap();

    let faces = PathDiscovery::new([root]).enumerate().expect("enumerate");
    let described: Vec<(&str, u32, &str)> = faces
        .iter()
        .map(|f| (f.family.as_str(), f.findex, f.style.as_str()))
        .collect();
    assert_eq!(
        described,
        vec![("Pair", 0, "Regular"), ("Pair", 1, "Italic"), ("Mono", 0, "Regular")]
    );

    assert_eq!(faces[0].slant, SLANT_ROMAN);
    assert_eq!(faces[1].slant, SLANT_ITALIC);
    assert_eq!(faces[0].spacing, SPACING_PROPORTIONAL);
    assert_eq!(faces[2].spacing, SPACING_MONO);
    assert_eq!(faces[2].description, "Mono Regular");
}

#[test]
fn weight_class_maps_to_fontconfig_scale() {
    let temp = tempfile::tempdir().expect("tempdir");
    let bold = write_font(
        temp.path(),
        "bold.ttf",
        &FontBuilder::latin("Heavy", "Bold").weight_class(700).build(),
    );
    let faces = faces_in_file(&bold);
    assert_eq!(faces.len(), 1);
    assert_eq!(faces[0].weight, 200);
    assert_eq!(faces[0].width, 100);
}

#[test]
fn face_count_reads_collections() {
    let temp = tempfile::tempdir().expect("tempdir");
    let ttc = write_font(
        temp.path(),
        "trio.ttc",
        &collection(&[
            FontBuilder::latin("Trio", "Regular"),
            FontBuilder::latin("Trio", "Bold"),
            FontBuilder::latin("Trio", "Italic"),
        ]),
    );
    assert_eq!(face_count(&ttc), 3);
    assert_eq!(face_count(&temp.path().join("absent.ttf")), 1);
}
