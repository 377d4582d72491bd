//! CLI command handling
//!
//! Dispatches commands against the direwolf API and formats output. The run
//! flow is deliberately sequential: resolve the cloud, dispatch, then poll
//! once a second until the server reports an end time.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use tracing::info;

use crate::api::{find_cloud, ApiClient, Cloud, RunStatus};
use crate::commands::Commands;
use crate::common::{Config, Error, Result};

/// Dispatch a CLI command
pub async fn dispatch(
    command: Commands,
    api_key: Option<String>,
    host: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let host = config.resolve_host(host);
    let api_key = config.resolve_api_key(api_key)?;
    let client = ApiClient::new(&host, &api_key);

    match command {
        Commands::Clouds => {
            let clouds = client.clouds().await?;
            print_clouds(&clouds);
            Ok(())
        }

        Commands::Run {
            domain,
            region,
            suite,
            no_wait,
            interval,
        } => {
            let clouds = client.clouds().await?;
            let cloud = find_cloud(&clouds, &domain, &region)
                .ok_or_else(|| Error::cloud_not_found(&domain, &region))?;
            info!(cloud_id = %cloud.id, %suite, "resolved cloud, dispatching run");

            let status = client.dispatch_run(&cloud.id, &suite).await?;
            println!("run id: {}", status.id);

            if no_wait {
                return Ok(());
            }

            let interval = config.resolve_poll_interval(interval);
            let status = poll_run(&client, &status.id, interval).await?;
            report_outcome(&status)
        }

        Commands::Status { id } => {
            let status = client.run_status(&id).await?;
            print_status_line(&status);
            println!();
            Ok(())
        }

        Commands::Watch { id, interval } => {
            let interval = config.resolve_poll_interval(interval);
            let status = poll_run(&client, &id, interval).await?;
            report_outcome(&status)
        }
    }
}

/// Poll a run until its end time is set
///
/// No iteration bound and no backoff: the loop runs as long as the server
/// keeps answering without an `ended_at`. A failed request is fatal.
async fn poll_run(client: &ApiClient, id: &str, interval_secs: u64) -> Result<RunStatus> {
    loop {
        let status = client.run_status(id).await?;
        print_status_line(&status);

        if status.is_finished() {
            println!();
            return Ok(status);
        }

        tokio::time::sleep(Duration::from_secs(interval_secs)).await;
    }
}

/// Print the final run line and turn failed tests into an error so main
/// maps them to exit code 1
fn report_outcome(status: &RunStatus) -> Result<()> {
    if let (Some(start), Some(end)) = (status.started_at, status.ended_at) {
        let took = status.duration_secs().unwrap_or_default();
        println!(
            "run {} ended at {} (started at {} - took {:.1}sec)",
            status.id, end, start, took
        );
    }

    if status.summary.failed > 0 {
        return Err(Error::SuiteFailed {
            id: status.id.clone(),
            failed: status.summary.failed,
        });
    }

    println!(
        "{}",
        format!(
            "{} passed, {} skipped",
            status.summary.passed, status.summary.skipped
        )
        .green()
    );
    Ok(())
}

fn print_clouds(clouds: &[Cloud]) {
    if clouds.is_empty() {
        println!("no clouds available");
        return;
    }
    for cloud in clouds {
        println!(
            "{} ({}):\t\t{} [{}]",
            cloud.domain, cloud.region, cloud.id, cloud.state
        );
    }
}

/// One carriage-returned progress line per poll
fn print_status_line(status: &RunStatus) {
    let s = &status.summary;
    print!(
        "state: {}, summary: {} passed, {} failed, {} skipped, {} running, {} pending\r",
        status.state, s.passed, s.failed, s.skipped, s.running, s.pending
    );
    let _ = std::io::stdout().flush();
}
