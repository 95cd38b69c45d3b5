//! fontdex CLI (made by FontLab https://www.fontlab.com/)

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use regex::Regex;

use fontdex_core::cache::{Cache, SchemaStatus};
use fontdex_core::discovery::PathDiscovery;
use fontdex_core::extract::FaceMetadataExtractor;
use fontdex_core::model::{Font, MetadataRecord};
use fontdex_core::orthography;
use fontdex_core::output::{write_json_pretty, write_json_value, write_ndjson};
use fontdex_core::source::{LiveSource, MetadataSource};
use fontdex_core::sync::{SyncContext, SyncEngine, SyncReport, DEFAULT_BATCH_SIZE};

pub mod server;

/// Environment variable naming the cache directory.
pub const CACHE_ENV: &str = "FONTDEX_CACHE";

/// CLI entrypoint for fontdex.
#[derive(Debug, Parser)]
#[command(
    name = "fontdex",
    about = "Font metadata extraction, classification and cache (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// Cache directory (defaults to $FONTDEX_CACHE, then the user cache dir)
    #[arg(long = "cache", global = true, value_hint = ValueHint::DirPath)]
    cache: Option<PathBuf>,

    /// More log output; repeat for debug and trace
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract every face not yet cached and store the results
    Sync(SyncArgs),
    /// Extract one face live, without touching the cache
    Info(FaceArgs),
    /// Orthography coverage of one face, computed live
    Orthography(OrthographyArgs),
    /// List the fonts recorded by the last sync
    List(ListArgs),
    /// Print the cached record for one face
    Show(FaceArgs),
    /// Serve the cache over HTTP
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
struct SyncArgs {
    /// Font directories or files (defaults to the system font directories)
    #[arg(value_hint = ValueHint::DirPath)]
    paths: Vec<PathBuf>,

    /// Read newline-delimited paths from STDIN
    #[arg(long = "stdin-paths", action = ArgAction::SetTrue)]
    stdin_paths: bool,

    /// Include common system font directories automatically
    #[arg(long = "system-fonts", action = ArgAction::SetTrue)]
    system_fonts: bool,

    /// Follow symlinks while walking paths
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    follow_symlinks: bool,

    /// Faces per cache transaction
    #[arg(long = "batch-size", default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Report progress on stderr
    #[arg(long = "progress", action = ArgAction::SetTrue)]
    progress: bool,

    /// Print the pass report as JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct FaceArgs {
    /// Font file
    #[arg(value_hint = ValueHint::FilePath)]
    file: PathBuf,

    /// Face index inside a collection
    #[arg(short = 'i', long = "index", default_value_t = 0)]
    index: u32,

    /// Emit compact single-line JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,
}

#[derive(Debug, Args)]
struct OrthographyArgs {
    #[command(flatten)]
    face: FaceArgs,

    /// Text to try as the sample before falling back to orthography samples
    #[arg(long = "pangram")]
    pangram: Option<String>,

    /// Print only the sample string
    #[arg(long = "sample", action = ArgAction::SetTrue)]
    sample: bool,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Regex patterns that must match the family or description
    #[arg(short = 'n', long = "name", value_hint = ValueHint::Other)]
    name_patterns: Vec<String>,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Format output as padded columns
    #[arg(long = "columns", action = ArgAction::SetTrue)]
    columns: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long = "bind", default_value = "127.0.0.1:8765")]
    bind: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let cache = cli.cache;

    match cli.command {
        Command::Sync(args) => run_sync(args, cache),
        Command::Info(args) => run_info(args),
        Command::Orthography(args) => run_orthography(args),
        Command::List(args) => run_list(args, cache),
        Command::Show(args) => run_show(args, cache),
        Command::Serve(args) => run_serve(args, cache),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn run_sync(args: SyncArgs, cache: Option<PathBuf>) -> Result<()> {
    let stdin = io::stdin();
    let roots = gather_paths(
        &args.paths,
        args.stdin_paths,
        args.system_fonts,
        stdin.lock(),
    )?;
    let cache = open_cache(cache)?;

    let discovery = PathDiscovery::new(roots)
        .follow_symlinks(args.follow_symlinks)
        .skip_missing_roots(true);
    let context = SyncContext::new().with_batch_size(args.batch_size);
    let worker = SyncEngine::new(Arc::clone(&cache), discovery)
        .with_context(context)
        .spawn();

    for progress in worker.progress().iter() {
        if args.progress {
            eprint!("\r{}/{} faces", progress.processed, progress.total);
        }
    }
    if args.progress {
        eprintln!();
    }
    let report = worker.wait()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.json {
        write_json_value(&report, &mut handle)?;
    } else {
        write_report(&report, &mut handle)?;
    }
    Ok(())
}

fn run_info(args: FaceArgs) -> Result<()> {
    let filepath = args.file.to_string_lossy();
    let record = LiveSource::default()
        .record(&filepath, args.index)?
        .ok_or_else(|| anyhow!("no face {} in {}", args.index, filepath))?;
    write_record(&record, args.ndjson)
}

fn run_orthography(args: OrthographyArgs) -> Result<()> {
    let face = FaceMetadataExtractor::new()
        .extract(&args.face.file, args.face.index)
        .with_context(|| format!("reading {}", args.face.file.display()))?;
    let mut context = SyncContext::new();
    if let Some(pangram) = args.pangram {
        context = context.with_pangram(pangram);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.sample {
        let sample = orthography::sample_string(&face.charset, context.pangram())
            .unwrap_or_else(|| context.pangram().to_string());
        writeln!(handle, "{sample}")?;
        return Ok(());
    }

    let result = context.orthography_for(&face.metadata.family, &face.charset);
    if args.face.ndjson {
        write_ndjson(std::slice::from_ref(&result), &mut handle)?;
    } else {
        write_json_value(&result, &mut handle)?;
    }
    Ok(())
}

fn run_list(args: ListArgs, cache: Option<PathBuf>) -> Result<()> {
    let patterns = compile_patterns(&args.name_patterns)?;
    let cache = open_cache(cache)?;
    let fonts = filter_fonts(cache.reader()?.list_fonts()?, &patterns);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    if args.ndjson {
        write_ndjson(&fonts, &mut handle)?;
    } else if args.json {
        write_json_pretty(&fonts, &mut handle)?;
    } else if args.columns {
        write_columns(&fonts, &mut handle, use_color)?;
    } else {
        write_plain(&fonts, &mut handle, use_color)?;
    }

    Ok(())
}

fn run_show(args: FaceArgs, cache: Option<PathBuf>) -> Result<()> {
    let cache = open_cache(cache)?;
    let record = lookup_cached(&*cache, &args.file, args.index)?.ok_or_else(|| {
        anyhow!(
            "no cached record for face {} of {}; run `fontdex sync` first",
            args.index,
            args.file.display()
        )
    })?;
    write_record(&record, args.ndjson)
}

fn run_serve(args: ServeArgs, cache: Option<PathBuf>) -> Result<()> {
    let cache = open_cache(cache)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime.block_on(server::serve(&args.bind, cache))
}

/// Looks the face up under the path as given, then under its canonical form.
fn lookup_cached(
    source: &impl MetadataSource,
    file: &Path,
    index: u32,
) -> Result<Option<MetadataRecord>> {
    if let Some(record) = source.record(&file.to_string_lossy(), index)? {
        return Ok(Some(record));
    }
    match file.canonicalize() {
        Ok(canonical) if canonical != file => {
            Ok(source.record(&canonical.to_string_lossy(), index)?)
        }
        _ => Ok(None),
    }
}

fn write_record(record: &MetadataRecord, compact: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if compact {
        write_ndjson(std::slice::from_ref(record), &mut handle)
    } else {
        write_json_value(record, &mut handle)
    }
}

fn write_report(report: &SyncReport, mut w: impl Write) -> Result<()> {
    writeln!(
        w,
        "{} faces: {} inserted, {} already cached, {} failed{}",
        report.total,
        report.inserted,
        report.skipped,
        report.failed,
        if report.cancelled { " (cancelled)" } else { "" }
    )?;
    Ok(())
}

fn open_cache(flag: Option<PathBuf>) -> Result<Arc<Cache>> {
    let dir = resolve_cache_path(flag)?;
    let cache = Cache::open(&dir).with_context(|| format!("opening cache at {}", dir.display()))?;
    if let SchemaStatus::Rebuilt { previous } = cache.status() {
        log::info!(
            "cache schema changed (was {}); all tables were emptied",
            previous.map_or_else(|| "unversioned".to_string(), |v| v.to_string())
        );
    }
    Ok(Arc::new(cache))
}

/// Cache directory: `--cache`, then `FONTDEX_CACHE`, then the user cache dir.
fn resolve_cache_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = env::var_os(CACHE_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    user_cache_dir()
        .map(|dir| dir.join("fontdex"))
        .ok_or_else(|| anyhow!("cannot locate a cache directory; pass --cache or set {CACHE_ENV}"))
}

fn user_cache_dir() -> Option<PathBuf> {
    if let Some(xdg) = env::var_os("XDG_CACHE_HOME").filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(xdg));
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = env::var_os("HOME") {
            return Some(PathBuf::from(home).join("Library/Caches"));
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = env::var_os("LOCALAPPDATA") {
            return Some(PathBuf::from(local_appdata));
        }
    }

    env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache"))
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("invalid regex: {p}")))
        .collect()
}

fn filter_fonts(fonts: Vec<Font>, patterns: &[Regex]) -> Vec<Font> {
    fonts
        .into_iter()
        .filter(|font| {
            patterns
                .iter()
                .all(|re| re.is_match(&font.family) || re.is_match(&font.description))
        })
        .collect()
}

/// Font roots for a sync pass.
///
/// `-` among the paths (or `--stdin-paths`) reads one path per line from
/// `stdin`. With nothing given at all, the platform font directories are used.
fn gather_paths(
    raw_paths: &[PathBuf],
    read_stdin: bool,
    include_system: bool,
    stdin: impl BufRead,
) -> Result<Vec<PathBuf>> {
    let wants_stdin = read_stdin || raw_paths.iter().any(|path| path == Path::new("-"));
    let piped = if wants_stdin {
        read_paths_from(stdin)?
    } else {
        Vec::new()
    };

    let mut roots = Vec::new();
    if read_stdin {
        roots.extend(piped.iter().cloned());
    }
    for path in raw_paths {
        if path == Path::new("-") {
            if !read_stdin {
                roots.extend(piped.iter().cloned());
            }
        } else {
            roots.push(path.clone());
        }
    }

    if include_system || (raw_paths.is_empty() && !read_stdin) {
        roots.extend(system_font_roots()?);
    }
    if roots.is_empty() {
        return Err(anyhow!("no font paths provided"));
    }
    Ok(roots)
}

fn read_paths_from(reader: impl BufRead) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line.context("reading paths from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            paths.push(PathBuf::from(line));
        }
    }
    Ok(paths)
}

/// Existing platform font directories, or `FONTDEX_SYSTEM_FONT_DIRS` when set.
fn system_font_roots() -> Result<Vec<PathBuf>> {
    let (mut roots, source) = match env::var("FONTDEX_SYSTEM_FONT_DIRS") {
        Ok(raw) => (
            raw.split([':', ';'])
                .filter(|part| !part.is_empty())
                .map(PathBuf::from)
                .collect::<Vec<_>>(),
            "FONTDEX_SYSTEM_FONT_DIRS",
        ),
        Err(_) => (platform_font_dirs(), "this platform"),
    };

    roots.retain(|root| root.exists());
    roots.sort();
    roots.dedup();
    if roots.is_empty() {
        return Err(anyhow!("no font directories found for {source}"));
    }
    Ok(roots)
}

fn platform_font_dirs() -> Vec<PathBuf> {
    let home = env::var_os("HOME").map(PathBuf::from);
    let mut dirs = Vec::new();

    if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.extend(home.map(|home| home.join("Library/Fonts")));
    } else if cfg!(target_os = "windows") {
        dirs.extend(env::var_os("SYSTEMROOT").map(|root| PathBuf::from(root).join("Fonts")));
        dirs.extend(
            env::var_os("LOCALAPPDATA")
                .map(|local| PathBuf::from(local).join("Microsoft/Windows/Fonts")),
        );
    } else {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = home {
            dirs.push(home.join(".local/share/fonts"));
            dirs.push(home.join(".fonts"));
        }
    }
    dirs
}

fn write_plain(fonts: &[Font], mut w: impl Write, color: bool) -> Result<()> {
    for font in fonts {
        writeln!(w, "{}", paint(&path_with_index(font), color, Paint::Path))?;
    }
    Ok(())
}

/// One row per face: path, description, then the fontconfig-style traits.
fn write_columns(fonts: &[Font], mut w: impl Write, color: bool) -> Result<()> {
    let path_width = fonts
        .iter()
        .map(|font| path_with_index(font).len())
        .max()
        .unwrap_or(0)
        .min(120);
    let name_width = fonts
        .iter()
        .map(|font| font.description.len())
        .max()
        .unwrap_or(0)
        .min(80);

    for font in fonts {
        let path = format!("{:<path_width$}", path_with_index(font));
        let name = format!("{:<name_width$}", font.description);
        let traits = format!(
            "weight:{:<3} width:{:<3} slant:{:<3}{}",
            font.weight,
            font.width,
            font.slant,
            if font.spacing > 0 { " mono" } else { "" },
        );
        writeln!(
            w,
            "{}  {}  {}",
            paint(&path, color, Paint::Path),
            paint(&name, color, Paint::Name),
            paint(&traits, color, Paint::Traits)
        )?;
    }
    Ok(())
}

#[derive(Copy, Clone)]
enum Paint {
    Path,
    Name,
    Traits,
}

fn paint(text: &str, color: bool, role: Paint) -> String {
    if !color {
        return text.to_string();
    }
    let code = match role {
        Paint::Path => 36,
        Paint::Name => 33,
        Paint::Traits => 32,
    };
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

/// `path#index` for faces after the first in a collection.
fn path_with_index(font: &Font) -> String {
    if font.findex > 0 {
        format!("{}#{}", font.filepath, font.findex)
    } else {
        font.filepath.clone()
    }
}
