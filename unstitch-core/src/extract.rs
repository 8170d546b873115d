use crate::error::{Result, UnstitchError};
use crate::format::Format;
use crate::read::parse::Parser;
use crate::rebuild::join::JoinPolicy;
use crate::rebuild::{RebuiltFile, rebuild};

use rayon::prelude::*;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

#[derive(Clone, Debug, Default)]
pub struct ExtractOptions {
    pub format: Format,
    pub join: JoinPolicy,
    /// Worker threads for writing; `None` or `Some(0)` uses rayon's default.
    pub jobs: Option<usize>,
    /// Rebuild and report without touching the filesystem.
    pub dry_run: bool,
}

/// What happened to one rebuilt file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: String,
    pub chunks: usize,
    pub bytes: usize,
    pub result: Result<()>,
}

#[derive(Debug, Default)]
pub struct ExtractReport {
    /// One outcome per base path, in archive order.
    pub files: Vec<FileOutcome>,
}

impl ExtractReport {
    pub fn written(&self) -> usize {
        self.files.iter().filter(|f| f.result.is_ok()).count()
    }

    pub fn failures(&self) -> usize {
        self.files.len() - self.written()
    }

    pub fn is_clean(&self) -> bool {
        self.files.iter().all(|f| f.result.is_ok())
    }
}

/// Read the archive at `archive` and rebuild its files below `dest`.
///
/// A read failure aborts before anything is written.
pub fn extract_file(archive: &Path, dest: &Path, opts: &ExtractOptions) -> Result<ExtractReport> {
    let bytes = fs::read(archive).map_err(|source| UnstitchError::ReadArchive {
        path: archive.to_path_buf(),
        source,
    })?;
    extract(&bytes, dest, opts)
}

/// Rebuild every file in `archive` and write it below `dest`.
///
/// File contents are written byte for byte. Individual write failures are
/// recorded in the report; only an invalid format or thread pool setup fails
/// the whole call.
pub fn extract(archive: &[u8], dest: &Path, opts: &ExtractOptions) -> Result<ExtractReport> {
    let parser = Parser::new(&opts.format)?;
    let files = rebuild(parser.parse(archive), &opts.format, opts.join);
    debug!(files = files.len(), dest = %dest.display(), "rebuilt archive");

    let files: Vec<FileOutcome> = if opts.dry_run {
        files.into_iter().map(|f| outcome(f, Ok(()))).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(opts.jobs.unwrap_or(0))
            .build()
            .map_err(|e| UnstitchError::Config(format!("thread pool: {e}")))?;
        pool.install(|| {
            files
                .into_par_iter()
                .map(|f| {
                    let result = write_file(dest, &f.path, &f.content);
                    outcome(f, result)
                })
                .collect()
        })
    };

    let report = ExtractReport { files };
    info!(
        written = report.written(),
        failed = report.failures(),
        dry_run = opts.dry_run,
        "extract finished"
    );
    Ok(report)
}

fn outcome(file: RebuiltFile, result: Result<()>) -> FileOutcome {
    FileOutcome {
        bytes: file.content.len(),
        path: file.path,
        chunks: file.chunks,
        result,
    }
}

fn write_file(dest: &Path, rel: &str, content: &[u8]) -> Result<()> {
    let outp = safe_join(dest, rel)?;
    if let Some(parent) = outp.parent() {
        fs::create_dir_all(parent).map_err(|source| UnstitchError::Write {
            path: outp.clone(),
            source,
        })?;
    }
    fs::write(&outp, content).map_err(|source| UnstitchError::Write {
        path: outp.clone(),
        source,
    })?;
    debug!(path = %outp.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Join `rel` onto `root`, refusing anything that could land outside it.
fn safe_join(root: &Path, rel: &str) -> Result<PathBuf> {
    let p = Path::new(rel);
    let escapes = p
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if p.is_absolute() || escapes {
        return Err(UnstitchError::UnsafePath(rel.to_string()));
    }
    Ok(root.join(p))
}
