/// The long memory of fontdex: every face we ever met, kept on disk
///
/// Parsing tens of thousands of font files at every start would make anyone
/// grumpy, so this cache remembers what extraction found. It lives in an
/// LMDB environment (through heed) with one named database per record kind,
/// plus a face index per kind that maps `(filepath, findex)` to the row id.
/// Readers see the last committed transaction while a writer works, so a
/// listing never observes a half-written batch.
///
/// The cache also knows which shape of row it holds. A small `schema`
/// database carries a version number, and when a newer build opens an older
/// cache every table is emptied in one transaction and the version is
/// updated. Nothing on disk is ever half-migrated.
///
/// Made with care at FontLab https://www.fontlab.com/
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use byteorder::BigEndian;
use heed::types::{Bytes, Str, U32, U64};
use heed::{Database, Env, EnvOpenOptions, RoTxn, RwTxn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::{Font, Metadata, MetadataRecord, OrthographyResult, Panose, Support};
use crate::string_set::StringSet;

/// Row identifier, shared by every record table.
pub type RowId = u64;

/// Bump whenever a stored row changes shape.
pub const CURRENT_VERSION: u32 = 4;

/// Room for a very large collection (4GB of map space).
const MAX_DB_SIZE: usize = 4 * 1024 * 1024 * 1024;

/// Nine named databases, plus headroom.
const MAX_DBS: u32 = 12;

const SCHEMA_VERSION_KEY: &str = "version";

type StoreResult<T> = Result<T, StoreError>;
type RowDb = Database<U64<BigEndian>, Bytes>;
type FaceDb = Database<Bytes, U64<BigEndian>>;

/// What opening the cache did to its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// Nothing was stored before; the current version was written.
    Fresh,
    /// The stored version matched; existing rows were kept.
    Reused,
    /// A different version (or rows without one) was found and every table
    /// was emptied.
    Rebuilt { previous: Option<u32> },
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheCounts {
    pub fonts: u64,
    pub metadata: u64,
    pub panose: u64,
    pub orthography: u64,
}

impl CacheCounts {
    pub fn is_empty(&self) -> bool {
        self.fonts == 0 && self.metadata == 0 && self.panose == 0 && self.orthography == 0
    }
}

/// Stored shape of an orthography result; `support` is JSON text.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OrthographyRow {
    filepath: String,
    findex: u32,
    support: String,
    sample: Option<String>,
}

/// One record table and its face index.
#[derive(Clone, Copy)]
struct Table {
    name: &'static str,
    rows: RowDb,
    by_face: FaceDb,
}

impl Table {
    fn create(env: &Env, wtxn: &mut RwTxn<'_>, name: &'static str) -> StoreResult<Self> {
        let rows = env.create_database(wtxn, Some(name))?;
        let by_face_name: &'static str = match name {
            "fonts" => "fonts_by_face",
            "metadata" => "metadata_by_face",
            "panose" => "panose_by_face",
            _ => "orthography_by_face",
        };
        let by_face = env.create_database(wtxn, Some(by_face_name))?;
        Ok(Self {
            name,
            rows,
            by_face,
        })
    }

    fn clear(&self, wtxn: &mut RwTxn<'_>) -> StoreResult<()> {
        self.rows.clear(wtxn)?;
        self.by_face.clear(wtxn)?;
        Ok(())
    }

    fn len(&self, rtxn: &RoTxn<'_>) -> StoreResult<u64> {
        Ok(self.rows.len(rtxn)?)
    }

    fn max_id(&self, rtxn: &RoTxn<'_>) -> StoreResult<RowId> {
        Ok(self.rows.last(rtxn)?.map_or(0, |(id, _)| id))
    }

    fn get<T: DeserializeOwned>(&self, rtxn: &RoTxn<'_>, key: &[u8]) -> StoreResult<Option<T>> {
        match self.by_face.get(rtxn, key)? {
            Some(id) => match self.rows.get(rtxn, &id)? {
                Some(bytes) => decode(self.name, bytes).map(Some),
                None => Ok(None),
            },
            None => Ok(None),
        }
    }

    /// Rows in face-key order.
    fn rows_in_order<T: DeserializeOwned>(&self, rtxn: &RoTxn<'_>) -> StoreResult<Vec<T>> {
        let mut out = Vec::new();
        for entry in self.by_face.iter(rtxn)? {
            let (_, id) = entry?;
            if let Some(bytes) = self.rows.get(rtxn, &id)? {
                out.push(decode(self.name, bytes)?);
            }
        }
        Ok(out)
    }

    fn put<T: Serialize>(
        &self,
        wtxn: &mut RwTxn<'_>,
        key: &[u8],
        row: &T,
        alloc: impl FnOnce() -> RowId,
    ) -> StoreResult<RowId> {
        let id = match self.by_face.get(&*wtxn, key)? {
            Some(id) => id,
            None => alloc(),
        };
        let bytes = encode(self.name, row)?;
        self.rows.put(wtxn, &id, &bytes)?;
        self.by_face.put(wtxn, key, &id)?;
        Ok(id)
    }

    /// Drops every row whose face key starts with `prefix`.
    fn remove_prefix(&self, wtxn: &mut RwTxn<'_>, prefix: &[u8]) -> StoreResult<usize> {
        let mut doomed = Vec::new();
        for entry in self.by_face.prefix_iter(&*wtxn, prefix)? {
            let (key, id) = entry?;
            doomed.push((key.to_vec(), id));
        }
        for (key, id) in &doomed {
            self.by_face.delete(wtxn, key)?;
            self.rows.delete(wtxn, id)?;
        }
        Ok(doomed.len())
    }
}

/// The persistent, versioned store of extracted records.
pub struct Cache {
    env: Env,
    fonts: Table,
    metadata: Table,
    panose: Table,
    orthography: Table,
    schema: Database<Str, U32<BigEndian>>,
    next_id: AtomicU64,
    status: SchemaStatus,
}

impl Cache {
    /// Opens (or creates) the cache in `dir` at the current schema version.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        Self::open_with_version(dir, CURRENT_VERSION)
    }

    /// Opens the cache expecting schema `version`.
    ///
    /// Rows stored under any other version are discarded.
    pub fn open_with_version(dir: &Path, version: u32) -> StoreResult<Self> {
        fs::create_dir_all(dir).map_err(|source| StoreError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(MAX_DB_SIZE)
                .max_dbs(MAX_DBS)
                .open(dir)?
        };

        let mut wtxn = env.write_txn()?;
        let fonts = Table::create(&env, &mut wtxn, "fonts")?;
        let metadata = Table::create(&env, &mut wtxn, "metadata")?;
        let panose = Table::create(&env, &mut wtxn, "panose")?;
        let orthography = Table::create(&env, &mut wtxn, "orthography")?;
        let schema: Database<Str, U32<BigEndian>> =
            env.create_database(&mut wtxn, Some("schema"))?;

        let tables = [fonts, metadata, panose, orthography];
        let stored = schema.get(&wtxn, SCHEMA_VERSION_KEY)?;
        let mut has_rows = false;
        for table in &tables {
            has_rows |= !table.rows.is_empty(&wtxn)?;
        }
        let status = match stored {
            Some(found) if found == version => SchemaStatus::Reused,
            None if !has_rows => SchemaStatus::Fresh,
            previous => {
                log::info!(
                    "cache schema {:?} does not match {version}, clearing {}",
                    previous,
                    dir.display()
                );
                for table in &tables {
                    table.clear(&mut wtxn)?;
                }
                SchemaStatus::Rebuilt { previous }
            }
        };
        if status != SchemaStatus::Reused {
            schema.put(&mut wtxn, SCHEMA_VERSION_KEY, &version)?;
        }
        wtxn.commit()?;

        let rtxn = env.read_txn()?;
        let mut max_id = 0;
        for table in &tables {
            max_id = max_id.max(table.max_id(&rtxn)?);
        }
        drop(rtxn);

        Ok(Self {
            env,
            fonts,
            metadata,
            panose,
            orthography,
            schema,
            next_id: AtomicU64::new(max_id + 1),
            status,
        })
    }

    pub fn status(&self) -> SchemaStatus {
        self.status
    }

    /// Stored schema version.
    pub fn version(&self) -> StoreResult<Option<u32>> {
        let rtxn = self.env.read_txn()?;
        Ok(self.schema.get(&rtxn, SCHEMA_VERSION_KEY)?)
    }

    /// Starts a write transaction. Only one may be open at a time.
    pub fn writer(&self) -> StoreResult<CacheWriter<'_>> {
        let wtxn = self.env.write_txn()?;
        Ok(CacheWriter { cache: self, wtxn })
    }

    /// Starts a read transaction over the last committed state.
    pub fn reader(&self) -> StoreResult<CacheReader<'_>> {
        let rtxn = self.env.read_txn()?;
        Ok(CacheReader { cache: self, rtxn })
    }

    pub fn counts(&self) -> StoreResult<CacheCounts> {
        self.reader()?.counts()
    }

    fn alloc_id(&self) -> RowId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

/// Write transaction over the cache.
///
/// Nothing is visible to readers until [`commit`](Self::commit).
pub struct CacheWriter<'a> {
    cache: &'a Cache,
    wtxn: RwTxn<'a>,
}

impl<'a> CacheWriter<'a> {
    /// Empties the `fonts` table ahead of a rebuild.
    pub fn clear_fonts(&mut self) -> StoreResult<()> {
        self.cache.fonts.clear(&mut self.wtxn)
    }

    pub fn insert_font(&mut self, font: &Font) -> StoreResult<RowId> {
        let key = font_key(font);
        let cache = self.cache;
        cache
            .fonts
            .put(&mut self.wtxn, &key, font, || cache.alloc_id())
    }

    pub fn insert_metadata(&mut self, metadata: &Metadata) -> StoreResult<RowId> {
        let key = face_key(&metadata.filepath, metadata.findex);
        let cache = self.cache;
        cache
            .metadata
            .put(&mut self.wtxn, &key, metadata, || cache.alloc_id())
    }

    pub fn insert_panose(&mut self, panose: &Panose) -> StoreResult<RowId> {
        let key = face_key(&panose.filepath, panose.findex);
        let cache = self.cache;
        cache
            .panose
            .put(&mut self.wtxn, &key, panose, || cache.alloc_id())
    }

    pub fn insert_orthography(
        &mut self,
        filepath: &str,
        findex: u32,
        result: &OrthographyResult,
    ) -> StoreResult<RowId> {
        let support = serde_json::to_string(&result.support).map_err(|err| StoreError::Encode {
            what: "orthography",
            message: err.to_string(),
        })?;
        let row = OrthographyRow {
            filepath: filepath.to_string(),
            findex,
            support,
            sample: result.sample.clone(),
        };
        let key = face_key(filepath, findex);
        let cache = self.cache;
        cache
            .orthography
            .put(&mut self.wtxn, &key, &row, || cache.alloc_id())
    }

    /// Stores panose and orthography, then metadata, which marks the file known.
    pub fn insert_record(&mut self, record: &MetadataRecord) -> StoreResult<()> {
        let metadata = &record.metadata;
        if let Some(panose) = &record.panose {
            self.insert_panose(panose)?;
        }
        self.insert_orthography(&metadata.filepath, metadata.findex, &record.orthography)?;
        self.insert_metadata(metadata)?;
        Ok(())
    }

    /// Drops every row for `filepath`, returning how many were removed.
    ///
    /// The next sync pass extracts the file again.
    pub fn remove_file(&mut self, filepath: &str) -> StoreResult<usize> {
        let prefix = file_prefix(filepath);
        let mut removed = 0;
        for table in [
            &self.cache.fonts,
            &self.cache.metadata,
            &self.cache.panose,
            &self.cache.orthography,
        ] {
            removed += table.remove_prefix(&mut self.wtxn, &prefix)?;
        }
        Ok(removed)
    }

    pub fn commit(self) -> StoreResult<()> {
        self.wtxn.commit()?;
        Ok(())
    }

    pub fn abort(self) {
        self.wtxn.abort();
    }
}

/// Read transaction over the cache.
pub struct CacheReader<'a> {
    cache: &'a Cache,
    rtxn: RoTxn<'a>,
}

impl<'a> CacheReader<'a> {
    /// Distinct filepaths with a metadata row, in path order.
    pub fn known_files(&self) -> StoreResult<StringSet> {
        let mut known = StringSet::new();
        for entry in self.cache.metadata.by_face.iter(&self.rtxn)? {
            let (key, _) = entry?;
            let path = key.split(|b| *b == 0).next().unwrap_or_default();
            known.add(String::from_utf8_lossy(path).into_owned());
        }
        Ok(known)
    }

    pub fn get_metadata(&self, filepath: &str, findex: u32) -> StoreResult<Option<Metadata>> {
        self.cache
            .metadata
            .get(&self.rtxn, &face_key(filepath, findex))
    }

    pub fn get_panose(&self, filepath: &str, findex: u32) -> StoreResult<Option<Panose>> {
        self.cache.panose.get(&self.rtxn, &face_key(filepath, findex))
    }

    pub fn get_orthography(
        &self,
        filepath: &str,
        findex: u32,
    ) -> StoreResult<Option<OrthographyResult>> {
        let row: Option<OrthographyRow> = self
            .cache
            .orthography
            .get(&self.rtxn, &face_key(filepath, findex))?;
        row.map(|row| {
            let support: Support =
                serde_json::from_str(&row.support).map_err(|err| StoreError::Decode {
                    what: "orthography",
                    message: err.to_string(),
                })?;
            Ok(OrthographyResult {
                support,
                sample: row.sample,
            })
        })
        .transpose()
    }

    /// Metadata, panose and orthography of one face, if metadata exists.
    pub fn get_record(&self, filepath: &str, findex: u32) -> StoreResult<Option<MetadataRecord>> {
        let Some(metadata) = self.get_metadata(filepath, findex)? else {
            return Ok(None);
        };
        Ok(Some(MetadataRecord {
            panose: self.get_panose(filepath, findex)?,
            orthography: self.get_orthography(filepath, findex)?.unwrap_or_default(),
            metadata,
        }))
    }

    /// Every font row, ordered by filepath then face index.
    pub fn list_fonts(&self) -> StoreResult<Vec<Font>> {
        self.cache.fonts.rows_in_order(&self.rtxn)
    }

    /// Every metadata row, ordered by filepath then face index.
    pub fn list_metadata(&self) -> StoreResult<Vec<Metadata>> {
        self.cache.metadata.rows_in_order(&self.rtxn)
    }

    pub fn counts(&self) -> StoreResult<CacheCounts> {
        Ok(CacheCounts {
            fonts: self.cache.fonts.len(&self.rtxn)?,
            metadata: self.cache.metadata.len(&self.rtxn)?,
            panose: self.cache.panose.len(&self.rtxn)?,
            orthography: self.cache.orthography.len(&self.rtxn)?,
        })
    }
}

/// `filepath NUL`, the prefix shared by every face of a file.
fn file_prefix(filepath: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(filepath.len() + 1);
    key.extend_from_slice(filepath.as_bytes());
    key.push(0);
    key
}

/// `filepath NUL findex(be32)`.
fn face_key(filepath: &str, findex: u32) -> Vec<u8> {
    let mut key = file_prefix(filepath);
    key.extend_from_slice(&findex.to_be_bytes());
    key
}

/// Face key followed by `family NUL description`.
fn font_key(font: &Font) -> Vec<u8> {
    let mut key = face_key(&font.filepath, font.findex);
    key.extend_from_slice(font.family.as_bytes());
    key.push(0);
    key.extend_from_slice(font.description.as_bytes());
    key
}

fn encode<T: Serialize>(what: &'static str, row: &T) -> StoreResult<Vec<u8>> {
    bincode::serialize(row).map_err(|err| StoreError::Encode {
        what,
        message: err.to_string(),
    })
}

fn decode<T: DeserializeOwned>(what: &'static str, bytes: &[u8]) -> StoreResult<T> {
    bincode::deserialize(bytes).map_err(|err| StoreError::Decode {
        what,
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrthographyEntry;
    use tempfile::TempDir;

    fn font(path: &str, findex: u32) -> Font {
        Font {
            filepath: path.to_string(),
            findex,
            family: "Sample".into(),
            style: "Regular".into(),
            spacing: 0,
            slant: 0,
            weight: 80,
            width: 100,
            description: "Sample Regular".into(),
        }
    }

    fn metadata(path: &str, findex: u32) -> Metadata {
        Metadata {
            filepath: path.to_string(),
            findex,
            family: "Sample".into(),
            style: "Regular".into(),
            owner: true,
            psname: Some("Sample-Regular".into()),
            filetype: "TrueType".into(),
            n_glyphs: 42,
            copyright: None,
            version: "1.00".into(),
            description: None,
            license_data: None,
            license_url: None,
            vendor: "Unknown Vendor".into(),
            designer: None,
            designer_url: None,
            license_type: "Unknown License".into(),
            fs_type: 0,
            filesize: "1.2 kB".into(),
            checksum: "d41d8cd98f00b204e9800998ecf8427e".into(),
        }
    }

    fn record(path: &str, findex: u32) -> MetadataRecord {
        MetadataRecord {
            metadata: metadata(path, findex),
            panose: Some(Panose {
                filepath: path.to_string(),
                findex,
                values: [2, 11, 5, 2, 4, 5, 4, 2, 2, 4],
            }),
            orthography: OrthographyResult {
                support: Support::from([(
                    "Basic Latin".to_string(),
                    OrthographyEntry {
                        name: "Basic Latin".into(),
                        native: Some("Basic Latin".into()),
                        sample: Some("AaBbCc".into()),
                        coverage: 100.0,
                        filter: vec![0x41, 0x61],
                    },
                )]),
                sample: None,
            },
        }
    }

    #[test]
    fn fresh_cache_is_empty_and_versioned() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::open(dir.path()).unwrap();
        assert_eq!(cache.status(), SchemaStatus::Fresh);
        assert_eq!(cache.version().unwrap(), Some(CURRENT_VERSION));
        assert!(cache.counts().unwrap().is_empty());
    }

    #[test]
    fn records_round_trip() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::open(dir.path()).unwrap();
        let mut writer = cache.writer().unwrap();
        writer.insert_record(&record("/fonts/a.ttf", 0)).unwrap();
        writer.commit().unwrap();

        let reader = cache.reader().unwrap();
        let stored = reader.get_record("/fonts/a.ttf", 0).unwrap().unwrap();
        assert_eq!(stored, record("/fonts/a.ttf", 0));
        assert!(reader.get_record("/fonts/a.ttf", 1).unwrap().is_none());
    }

    #[test]
    fn support_column_is_a_name_keyed_object() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::open(dir.path()).unwrap();
        let mut writer = cache.writer().unwrap();
        writer.insert_record(&record("/fonts/a.ttf", 0)).unwrap();
        writer.commit().unwrap();

        let rtxn = cache.env.read_txn().unwrap();
        let row: OrthographyRow = cache
            .orthography
            .get(&rtxn, &face_key("/fonts/a.ttf", 0))
            .unwrap()
            .unwrap();
        let support: serde_json::Value = serde_json::from_str(&row.support).unwrap();
        assert!(support.is_object());
        assert_eq!(support["Basic Latin"]["coverage"], 100.0);
    }

    #[test]
    fn uncommitted_writes_are_invisible() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::open(dir.path()).unwrap();
        let mut writer = cache.writer().unwrap();
        writer.insert_metadata(&metadata("/fonts/a.ttf", 0)).unwrap();
        writer.abort();
        assert_eq!(cache.counts().unwrap().metadata, 0);
    }

    #[test]
    fn known_files_are_distinct_paths() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::open(dir.path()).unwrap();
        let mut writer = cache.writer().unwrap();
        for (path, findex) in [("/f/b.ttc", 0), ("/f/b.ttc", 1), ("/f/a.ttf", 0)] {
            writer.insert_metadata(&metadata(path, findex)).unwrap();
        }
        writer.commit().unwrap();

        let known = cache.reader().unwrap().known_files().unwrap();
        assert_eq!(known.iter().collect::<Vec<_>>(), ["/f/a.ttf", "/f/b.ttc"]);
    }

    #[test]
    fn upsert_reuses_row() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::open(dir.path()).unwrap();
        let mut writer = cache.writer().unwrap();
        let first = writer.insert_metadata(&metadata("/f/a.ttf", 0)).unwrap();
        let mut changed = metadata("/f/a.ttf", 0);
        changed.version = "2.00".into();
        let second = writer.insert_metadata(&changed).unwrap();
        writer.commit().unwrap();

        assert_eq!(first, second);
        let reader = cache.reader().unwrap();
        assert_eq!(reader.counts().unwrap().metadata, 1);
        let stored = reader.get_metadata("/f/a.ttf", 0).unwrap().unwrap();
        assert_eq!(stored.version, "2.00");
    }

    #[test]
    fn fonts_rebuild_and_list_in_order() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::open(dir.path()).unwrap();
        let mut writer = cache.writer().unwrap();
        writer.insert_font(&font("/f/old.ttf", 0)).unwrap();
        writer.commit().unwrap();

        let mut writer = cache.writer().unwrap();
        writer.clear_fonts().unwrap();
        for (path, findex) in [("/f/z.ttf", 0), ("/f/c.ttc", 1), ("/f/c.ttc", 0)] {
            writer.insert_font(&font(path, findex)).unwrap();
        }
        writer.commit().unwrap();

        let fonts = cache.reader().unwrap().list_fonts().unwrap();
        let keys: Vec<_> = fonts.iter().map(|f| (f.filepath.as_str(), f.findex)).collect();
        assert_eq!(keys, [("/f/c.ttc", 0), ("/f/c.ttc", 1), ("/f/z.ttf", 0)]);
    }

    #[test]
    fn remove_file_drops_every_table() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::open(dir.path()).unwrap();
        let mut writer = cache.writer().unwrap();
        writer.insert_font(&font("/f/a.ttf", 0)).unwrap();
        writer.insert_record(&record("/f/a.ttf", 0)).unwrap();
        writer.insert_record(&record("/f/a.ttf.bak", 0)).unwrap();
        writer.commit().unwrap();

        let mut writer = cache.writer().unwrap();
        assert_eq!(writer.remove_file("/f/a.ttf").unwrap(), 4);
        writer.commit().unwrap();

        let reader = cache.reader().unwrap();
        assert!(reader.get_metadata("/f/a.ttf", 0).unwrap().is_none());
        assert!(reader.get_metadata("/f/a.ttf.bak", 0).unwrap().is_some());
        assert_eq!(
            reader.counts().unwrap(),
            CacheCounts {
                fonts: 0,
                metadata: 1,
                panose: 1,
                orthography: 1
            }
        );
    }

    #[test]
    fn schema_mismatch_clears_everything() {
        let dir = TempDir::new().unwrap();
        {
            let cache = Cache::open_with_version(dir.path(), CURRENT_VERSION - 1).unwrap();
            let mut writer = cache.writer().unwrap();
            writer.insert_font(&font("/f/a.ttf", 0)).unwrap();
            writer.insert_record(&record("/f/a.ttf", 0)).unwrap();
            writer.commit().unwrap();
            assert_eq!(cache.counts().unwrap().metadata, 1);
        }

        let cache = Cache::open(dir.path()).unwrap();
        assert_eq!(
            cache.status(),
            SchemaStatus::Rebuilt {
                previous: Some(CURRENT_VERSION - 1)
            }
        );
        assert!(cache.counts().unwrap().is_empty());
        assert_eq!(cache.version().unwrap(), Some(CURRENT_VERSION));
        drop(cache);

        let cache = Cache::open(dir.path()).unwrap();
        assert_eq!(cache.status(), SchemaStatus::Reused);
    }

    #[test]
    fn ids_continue_after_reopen() {
        let dir = TempDir::new().unwrap();
        let first = {
            let cache = Cache::open(dir.path()).unwrap();
            let mut writer = cache.writer().unwrap();
            let id = writer.insert_metadata(&metadata("/f/a.ttf", 0)).unwrap();
            writer.commit().unwrap();
            id
        };
        let cache = Cache::open(dir.path()).unwrap();
        let mut writer = cache.writer().unwrap();
        let second = writer.insert_metadata(&metadata("/f/b.ttf", 0)).unwrap();
        writer.commit().unwrap();
        assert!(second > first);
    }
}
