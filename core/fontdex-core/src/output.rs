/// The graceful art of presenting what we learned to the world
///
/// Records leave fontdex as JSON. Humans usually want the prettified kind,
/// with its generous indentation; pipelines want NDJSON, one record per
/// line, so they can start chewing before the last font is written out.
/// Both writers take any serializable record, so fonts, metadata, panose
/// rows and whole orthography reports all travel the same road.
///
/// Made with love at FontLab https://www.fontlab.com/
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// Writes `records` as one indented JSON array.
pub fn write_json_pretty<T: Serialize>(records: &[T], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Writes one indented JSON value.
pub fn write_json_value<T: Serialize + ?Sized>(value: &T, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Writes each record on its own line.
pub fn write_ndjson<T: Serialize>(records: &[T], mut w: impl Write) -> Result<()> {
    for item in records {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
