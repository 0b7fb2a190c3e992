use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use silhouette::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;
const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
const SWEEP_TEMPLATE: &str =
    "{msg:<14} [{bar:40.cyan/blue}] {pos}/{len} rows ({elapsed_precise}, eta {eta})";

/// Terminal rendering of engine progress: a spinner while a workflow phase runs
/// and a bar over the angle_x rows of the sweep.
///
/// Rows finish on several worker threads at once, so the bar sits behind a mutex
/// shared by every clone of the callback.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target);
        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = Arc::clone(&self.pb);
        Box::new(move |event: Progress| match pb.lock() {
            Ok(bar) => render(&bar, event),
            Err(_) => warn!("Progress bar mutex was poisoned. Cannot update progress."),
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn render(bar: &ProgressBar, event: Progress) {
    match event {
        Progress::PhaseStart { name } => {
            bar.reset();
            bar.set_style(spinner_style());
            bar.set_message(name);
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        }
        Progress::PhaseFinish => {
            bar.disable_steady_tick();
            bar.finish_with_message("✓ Done");
        }
        Progress::SweepStart { total_rows } => {
            bar.disable_steady_tick();
            bar.reset();
            bar.set_length(total_rows);
            bar.set_style(sweep_style());
            bar.set_message("Angle X rows");
        }
        Progress::RowComplete { .. } => bar.inc(1),
        Progress::SweepFinish => bar.finish(),
        Progress::Message(msg) => bar.println(format!("  {}", msg)),
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template(SPINNER_TEMPLATE).expect("Failed to create spinner style template")
}

fn sweep_style() -> ProgressStyle {
    ProgressStyle::with_template(SWEEP_TEMPLATE)
        .expect("Failed to create sweep style template")
        .progress_chars("##-")
}
