use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use isingmc::engine::progress::{Progress, ProgressCallback};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;
const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
const BAR_TEMPLATE: &str =
    "{msg:<12} [{bar:40.cyan/blue}] {human_pos}/{human_len} ({per_sec}, {eta})";

/// Renders core progress events on stderr: a spinner per phase, switching to a
/// bar while the sampling task runs.
pub struct CliProgressHandler {
    bar: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            bar: ProgressBar::with_draw_target(None, target),
        }
    }

    /// `ProgressBar` is internally shared, so each callback holds its own handle.
    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();
        Box::new(move |event| render(&bar, event))
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
            bar.set_style(style(SPINNER_TEMPLATE));
            bar.set_message(name);
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        }
        Progress::TaskStart { total_steps } => {
            bar.disable_steady_tick();
            bar.set_style(style(BAR_TEMPLATE).progress_chars("##-"));
            bar.set_length(total_steps);
            bar.set_position(0);
        }
        Progress::TaskIncrement { amount } => bar.inc(amount),
        Progress::TaskFinish => {
            if let Some(length) = bar.length() {
                bar.set_position(length);
            }
        }
        Progress::PhaseFinish => {
            bar.disable_steady_tick();
            let done = format!("✓ {}", bar.message());
            bar.finish_with_message(done);
        }
        Progress::Message(text) => bar.println(format!("  {}", text)),
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar())
}
