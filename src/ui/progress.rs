//! Console progress display
//!
//! One line per stage. While a stage runs its line is a spinner carrying
//! `Stage::progress_message()`; when it finishes the line flips to a
//! success or failure icon. Without animation only the final lines are
//! printed.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use esmc::domain::ports::{PipelineEvent, PipelineEventSink};

use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::spinner::Spinner;

const TICK: Duration = Duration::from_millis(80);

#[derive(Default)]
struct LiveState {
    region: LiveRegion,
    spinner: Option<Spinner>,
    details: Vec<String>,
}

impl LiveState {
    fn content(&self, ui: &UiContext) -> String {
        let mut lines = Vec::with_capacity(self.details.len() + 1);
        if let Some(spinner) = &self.spinner {
            lines.push(spinner.render(ui.unicode));
        }
        lines.extend(self.details.iter().cloned());
        lines.join("\n")
    }

    fn redraw(&mut self, ui: &UiContext, out: &mut impl Write) -> io::Result<()> {
        let content = self.content(ui);
        self.region.update(out, &content)
    }
}

struct Ticker {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Human-readable pipeline progress on stdout
pub struct ConsoleEventSink {
    ui: UiContext,
    state: Arc<Mutex<LiveState>>,
    ticker: Mutex<Option<Ticker>>,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            state: Arc::new(Mutex::new(LiveState::default())),
            ticker: Mutex::new(None),
        }
    }

    fn state(&self) -> MutexGuard<'_, LiveState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn start_stage(&self, message: &str) {
        {
            let mut state = self.state();
            state.spinner = Some(Spinner::new(message));
            state.details.clear();
            if self.ui.animation {
                let _ = state.redraw(&self.ui, &mut io::stdout().lock());
            }
        }
        if self.ui.animation {
            self.start_ticker();
        }
    }

    fn finish_stage(&self, succeeded: bool, note: Option<&str>) {
        self.stop_ticker();

        let mut state = self.state();
        let Some(spinner) = state.spinner.take() else {
            return;
        };
        let mut line = if succeeded {
            spinner.succeed(self.ui.color, self.ui.unicode)
        } else {
            spinner.fail(self.ui.color, self.ui.unicode)
        };
        if let Some(note) = note {
            line.push(' ');
            line.push_str(&ColoredText::dim(note).render(self.ui.color));
        }

        let mut lines = vec![line];
        lines.append(&mut state.details);
        let content = lines.join("\n");

        let mut out = io::stdout().lock();
        if self.ui.animation {
            let _ = state.region.update(&mut out, &content);
            state.region.commit();
        } else {
            let _ = writeln!(out, "{}", content);
        }
    }

    /// Add a detail line under the running stage, or print it directly
    fn detail(&self, text: String) {
        let line = format!(
            "  {} {}",
            Icon::Arrow.colored(self.ui.color, self.ui.unicode),
            text
        );
        let mut state = self.state();
        if state.spinner.is_some() {
            state.details.push(line);
            if self.ui.animation {
                let _ = state.redraw(&self.ui, &mut io::stdout().lock());
            }
        } else {
            let _ = writeln!(io::stdout().lock(), "{}", line);
        }
    }

    fn start_ticker(&self) {
        let stop = Arc::new(AtomicBool::new(false));
        let state = Arc::clone(&self.state);
        let ui = self.ui;
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || loop {
            thread::sleep(TICK);
            if flag.load(Ordering::Relaxed) {
                break;
            }
            let mut state = state.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(spinner) = state.spinner.as_mut() {
                spinner.tick();
            }
            let _ = state.redraw(&ui, &mut io::stdout().lock());
        });

        let mut ticker = self.ticker.lock().unwrap_or_else(|e| e.into_inner());
        *ticker = Some(Ticker { stop, handle });
    }

    fn stop_ticker(&self) {
        let ticker = self
            .ticker
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(ticker) = ticker {
            ticker.stop.store(true, Ordering::Relaxed);
            let _ = ticker.handle.join();
        }
    }
}

impl Drop for ConsoleEventSink {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

impl PipelineEventSink for ConsoleEventSink {
    fn on_event(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::Purged { removed } => {
                let what = if removed.is_empty() {
                    "nothing to purge".to_string()
                } else {
                    format!("purged {} cache entries", removed.len())
                };
                self.detail(what);
            }
            PipelineEvent::Resolved { total, changed } => {
                if self.ui.verbose > 0 {
                    self.detail(format!("{changed} of {total} source files changed"));
                }
            }
            PipelineEvent::StageStarted { stage, .. } => {
                self.start_stage(stage.progress_message());
            }
            PipelineEvent::StageSucceeded { invoked, .. } => {
                let note = (!invoked).then_some("(no changes)");
                self.finish_stage(true, note);
            }
            PipelineEvent::StageFailed { .. } => {
                self.finish_stage(false, None);
            }
            PipelineEvent::PassCompleted { profile, written } => {
                self.detail(format!("{}: {} files", profile.dir_name(), written));
            }
            PipelineEvent::ManifestCommitted { path, entries } => {
                if self.ui.verbose > 0 {
                    self.detail(format!("manifest {} ({} entries)", path.display(), entries));
                }
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.ui.verbose > 0
    }
}
