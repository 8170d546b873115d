use std::process::ExitCode;

use tracing::info;
use unstitch_core::error::Result;
use unstitch_core::{ExtractOptions, ExtractReport, Format, extract_file};

use crate::presentation::cli::Cli;

pub fn handle_unpack(cli: Cli) -> Result<ExitCode> {
    let opts = ExtractOptions {
        format: Format::new(cli.marker, cli.chunk_tag)?,
        join: cli.join.into(),
        jobs: cli.jobs,
        dry_run: cli.dry_run,
    };
    info!(archive = %cli.archive.display(), dest = %cli.dest.display(), "unpacking");
    let report = extract_file(&cli.archive, &cli.dest, &opts)?;
    print_report(&report, opts.dry_run);

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "unstitch: {} of {} files failed",
            report.failures(),
            report.files.len()
        );
        Ok(ExitCode::FAILURE)
    }
}

fn print_report(report: &ExtractReport, dry_run: bool) {
    let verb = if dry_run { "plan" } else { "write" };
    for f in &report.files {
        match &f.result {
            Ok(()) if f.chunks > 1 => eprintln!("{verb}: {} ({} chunks)", f.path, f.chunks),
            Ok(()) => eprintln!("{verb}: {}", f.path),
            Err(e) => eprintln!("error: {e}"),
        }
    }
}
