use crate::config::{ApiConfig, CliConfig};
use crate::core::client::{RetryPolicy, ValidationClient};
use crate::core::input::InputSource;
use crate::core::precheck::run_precheck;
use crate::core::writer::ResultWriter;
use crate::domain::model::{RunStats, ValidationOutcome};
use crate::utils::error::Result;
use std::fs::File;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

/// The whole pipeline: resolve input and output, precheck when the source
/// can be re-read, then fan addresses out to a bounded worker pool with a
/// single sink task owning the CSV writer.
pub async fn run(config: &CliConfig, api: ApiConfig) -> Result<RunStats> {
    let source = InputSource::from_args(config.infile.as_deref(), config.email.as_deref());
    // Output problems must surface before any request goes out.
    let sink: Box<dyn Write + Send> = match &config.outfile {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    let precheck = if source.is_rewindable() && !config.skip_precheck {
        Some(run_precheck(&source)?)
    } else {
        tracing::info!("Skipping input file syntax pre-check");
        None
    };

    let addresses = read_addresses(&source)?;
    // Progress is sized to the precheck's OK count when it ran; otherwise
    // to everything we are about to dispatch.
    let total = precheck.map_or(addresses.len(), |p| p.ok);
    tracing::info!("Validating {} addresses with SparkPost..", addresses.len());

    let retry = match config.max_attempts {
        Some(max) => RetryPolicy::bounded(Duration::from_secs(config.snooze), max),
        None => RetryPolicy::fixed(Duration::from_secs(config.snooze)),
    };
    let client = Arc::new(ValidationClient::new(api, retry));

    let (tx, rx) = mpsc::channel::<Result<ValidationOutcome>>(config.concurrent_requests);
    let sink_task = tokio::spawn(write_results(ResultWriter::new(sink)?, rx, total));

    let dispatched = addresses.len();
    let mut workers = JoinSet::new();
    for address in addresses {
        while workers.len() >= config.concurrent_requests {
            if let Some(joined) = workers.join_next().await {
                joined?;
            }
        }
        let client = Arc::clone(&client);
        let tx = tx.clone();
        workers.spawn(async move {
            let outcome = client.validate(&address).await;
            // The sink only goes away if the run is already failing.
            let _ = tx.send(outcome).await;
        });
    }
    while let Some(joined) = workers.join_next().await {
        joined?;
    }
    drop(tx);

    let mut stats = sink_task.await??;
    stats.dispatched = dispatched;
    tracing::info!(
        "Done: {} dispatched, {} rows written, {} skipped, {} abandoned, {} failed",
        stats.dispatched,
        stats.rows_written,
        stats.skipped,
        stats.abandoned,
        stats.failed
    );
    Ok(stats)
}

/// Dispatch reads every field of every row, matching the advisory nature of
/// the precheck: even addresses it flagged still go to the API.
fn read_addresses(source: &InputSource) -> Result<Vec<String>> {
    let mut reader = source.csv_reader()?;
    let mut addresses = Vec::new();
    for record in reader.records() {
        for field in record?.iter() {
            addresses.push(field.to_string());
        }
    }
    Ok(addresses)
}

/// Single-writer sink: rows land here one at a time, so concurrent
/// completions can never interleave mid-row.
async fn write_results<W: Write>(
    mut writer: ResultWriter<W>,
    mut rx: mpsc::Receiver<Result<ValidationOutcome>>,
    total: usize,
) -> Result<RunStats> {
    let mut stats = RunStats::default();
    let mut done = 0usize;
    while let Some(outcome) = rx.recv().await {
        match outcome {
            Ok(ValidationOutcome::Row(row)) => {
                writer.write(&row)?;
                writer.flush()?;
                stats.rows_written += 1;
            }
            Ok(ValidationOutcome::Skipped) => stats.skipped += 1,
            Ok(ValidationOutcome::Abandoned { status }) => {
                tracing::warn!("address abandoned after retries (last HTTP status {status})");
                stats.abandoned += 1;
            }
            Err(e) => {
                tracing::error!("validation failed: {e}");
                stats.failed += 1;
            }
        }
        done += 1;
        tracing::info!("progress {done}/{total}");
    }
    writer.flush()?;
    Ok(stats)
}
