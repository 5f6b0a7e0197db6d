use std::io::{self, BufWriter};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use diverman_core::{parse_headers, render_extraction, render_harvest, write_lines};
use diverman_engine::{
    extract_file, read_url_list, Aggregator, FetchSettings, InputError, ReqwestFetcher,
};
use diverman_logging::{diag_error, diag_info, diag_warn};

use crate::cli::{Cli, Source};

/// Runs one extraction and prints its lines.
///
/// An unreadable input file is reported on stderr and ends the run with no
/// output but without an error; only client or runtime setup failures are
/// returned.
pub fn run(cli: Cli) -> Result<()> {
    let source = cli
        .source()
        .context("no input source: provide --file, --url or --url_list")?;

    let lines = match source {
        Source::File(path) => match extract_file(&path) {
            Ok(result) => render_extraction(&result),
            Err(err) => {
                diag_error!("{err}");
                return Ok(());
            }
        },
        Source::Url(url) => {
            let aggregator = build_aggregator(&cli)?;
            let runtime = build_runtime()?;
            match runtime.block_on(aggregator.fetch_one(&url)) {
                Ok(result) => render_extraction(&result),
                Err(err) => {
                    diag_warn!("Failed to retrieve data from URL {url}: {err}");
                    Vec::new()
                }
            }
        }
        Source::UrlList(path) => {
            let urls = match load_urls(&path) {
                Ok(urls) => urls,
                Err(err) => {
                    diag_error!("{err}");
                    return Ok(());
                }
            };
            let aggregator = build_aggregator(&cli)?;
            let runtime = build_runtime()?;
            let report = runtime.block_on(aggregator.fetch_all(&urls, usize::from(cli.threads)));
            diag_info!(
                "{} of {} urls fetched, {} failed",
                report.succeeded,
                urls.len(),
                report.failures.len()
            );
            render_harvest(&report.harvest)
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_lines(&mut out, &lines).context("writing results to stdout")?;
    Ok(())
}

fn load_urls(path: &Path) -> Result<Vec<String>, InputError> {
    let urls = read_url_list(path)?;
    if urls.is_empty() {
        diag_warn!("{}: no urls found", path.display());
    }
    Ok(urls)
}

fn build_aggregator(cli: &Cli) -> Result<Aggregator> {
    let parsed = parse_headers(cli.headers.as_deref().unwrap_or_default());
    for rejected in &parsed.rejected {
        diag_warn!("Ignoring invalid header: {rejected}");
    }

    let settings = FetchSettings::default()
        .with_timeout_secs(cli.timeout)
        .with_headers(parsed.headers);
    let fetcher = ReqwestFetcher::new(settings).context("building http client")?;
    Ok(Aggregator::new(Arc::new(fetcher)))
}

fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")
}
