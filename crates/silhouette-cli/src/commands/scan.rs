use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use silhouette::{
    core::io::{
        matrix::AreaMatrixFile,
        pdb::{PdbError, PdbFile},
        traits::StructureFile,
    },
    engine::{cancel::CancellationToken, progress::ProgressReporter},
    workflows,
};
use tracing::{info, warn};

pub async fn run(app_config: AppConfig) -> Result<()> {
    let AppConfig {
        input_path,
        output_path,
        core_config,
    } = app_config;

    info!("Loading CA trace from {:?}", &input_path);
    let (points, report) = PdbFile::read_from_path(&input_path).map_err(|e| match e {
        PdbError::EmptyInput(_) => CliError::NoAtoms {
            path: input_path.clone(),
        },
        other => CliError::FileParsing {
            path: input_path.clone(),
            source: other.into(),
        },
    })?;

    if report.skipped_count() > 0 {
        warn!(
            skipped = report.skipped_count(),
            "Some CA records could not be parsed and were skipped."
        );
        println!(
            "Warning: skipped {} malformed CA record(s).",
            report.skipped_count()
        );
    }
    println!(
        "Loaded {} CA atoms from {}",
        report.accepted,
        input_path.display()
    );

    let cancel = CancellationToken::new();
    let interrupt_watcher = tokio::spawn(watch_interrupts(cancel.clone()));

    println!("Starting projected-area sweep...");
    info!("Invoking the core scan workflow...");

    let sweep_token = cancel.clone();
    let result = tokio::task::spawn_blocking(move || {
        let progress_handler = CliProgressHandler::new();
        let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
        workflows::scan::run(&points, &core_config, &reporter, &sweep_token)
    })
    .await
    .map_err(|e| CliError::Other(anyhow::anyhow!("Scan task failed: {}", e)))?;
    // Nothing is left to cancel; any further interrupt exits immediately.
    cancel.cancel();
    let result = result?;

    println!(
        "Center coordinates: [{:.4} {:.4} {:.4}]",
        result.center.x, result.center.y, result.center.z
    );

    info!("Writing area matrix to {:?}", &output_path);
    AreaMatrixFile::write_to_path(&result.matrix, &output_path).map_err(|e| {
        CliError::FileWriting {
            path: output_path.clone(),
            source: e.into(),
        }
    })?;

    println!("Results saved to {}", output_path.display());
    interrupt_watcher.abort();
    Ok(())
}

/// Exit status used when the process is terminated by Ctrl-C (128 + SIGINT).
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InterruptAction {
    CancelSweep,
    Exit,
}

/// The first interrupt cancels the sweep cooperatively; once the token is
/// cancelled (by a previous interrupt or because the sweep is over) the next
/// one terminates the process.
fn on_interrupt(cancel: &CancellationToken) -> InterruptAction {
    if cancel.is_cancelled() {
        InterruptAction::Exit
    } else {
        cancel.cancel();
        InterruptAction::CancelSweep
    }
}

async fn watch_interrupts(cancel: CancellationToken) {
    while tokio::signal::ctrl_c().await.is_ok() {
        match on_interrupt(&cancel) {
            InterruptAction::CancelSweep => {
                warn!("Interrupt received; cancelling remaining angle pairs.");
                println!("Cancelling... press Ctrl-C again to exit immediately.");
            }
            InterruptAction::Exit => {
                warn!("Interrupt received; exiting.");
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        }
    }
}
