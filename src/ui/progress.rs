use log::warn;

use crate::util::progress_percent;

/// Linear step counter owned by the launcher window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressState {
    total_steps: u32,
    current_step: u32,
}

impl ProgressState {
    pub const fn new(total_steps: u32) -> Self {
        Self {
            total_steps,
            current_step: 0,
        }
    }

    pub const fn total_steps(self) -> u32 {
        self.total_steps
    }

    pub const fn current_step(self) -> u32 {
        self.current_step
    }

    /// Move one step forward. The counter never passes `total_steps`; an extra
    /// advance is logged and leaves the counter at the maximum.
    pub fn advance(&mut self) -> u32 {
        if self.current_step >= self.total_steps {
            warn!(
                "ui: step advanced past the final step ({}/{}); clamping",
                self.current_step, self.total_steps
            );
        } else {
            self.current_step += 1;
        }
        self.current_step
    }
}

/// One "B of T bytes" report for a file being downloaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadSample {
    pub filename: String,
    pub bytes_done: u64,
    pub bytes_total: u64,
}

impl DownloadSample {
    pub fn new(filename: impl Into<String>, bytes_done: u64, bytes_total: u64) -> Self {
        Self {
            filename: filename.into(),
            bytes_done,
            bytes_total,
        }
    }

    pub fn percent(&self) -> Option<u8> {
        progress_percent(self.bytes_done, self.bytes_total)
    }
}

/// What the single progress bar is currently showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressMode {
    Steps { current: u32, total: u32 },
    Download { percent: u8, label: String },
}

impl ProgressMode {
    pub fn fraction(&self) -> f32 {
        match self {
            ProgressMode::Steps { total: 0, .. } => 0.0,
            ProgressMode::Steps { current, total } => *current as f32 / *total as f32,
            ProgressMode::Download { percent, .. } => f32::from(*percent) / 100.0,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            ProgressMode::Steps { .. } => None,
            ProgressMode::Download { label, .. } => Some(label),
        }
    }
}

/// Everything the launcher window displays, minus the chrome.
#[derive(Clone, Debug)]
pub struct StatusView {
    message: String,
    sub_message: Option<String>,
    steps: ProgressState,
    mode: ProgressMode,
}

impl StatusView {
    pub fn new(total_steps: u32) -> Self {
        Self {
            message: String::new(),
            sub_message: None,
            steps: ProgressState::new(total_steps),
            mode: ProgressMode::Steps {
                current: 0,
                total: total_steps,
            },
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn sub_message(&self) -> Option<&str> {
        self.sub_message.as_deref()
    }

    pub fn steps(&self) -> ProgressState {
        self.steps
    }

    pub fn mode(&self) -> &ProgressMode {
        &self.mode
    }

    /// Enter the next step: new headline, bar back in step mode, sub-message cleared.
    pub fn advance_step(&mut self, message: impl Into<String>) -> u32 {
        let current = self.steps.advance();
        self.message = message.into();
        self.mode = ProgressMode::Steps {
            current,
            total: self.steps.total_steps(),
        };
        self.set_sub_message(None);
        current
    }

    pub fn set_sub_message(&mut self, message: Option<String>) {
        self.sub_message = message.filter(|msg| !msg.is_empty());
    }

    /// Switch the bar into percentage mode for `sample`. Samples without a
    /// known total are dropped and `false` is returned.
    pub fn report_download(&mut self, sample: &DownloadSample) -> bool {
        let Some(percent) = sample.percent() else {
            return false;
        };
        self.mode = ProgressMode::Download {
            percent,
            label: format!("{} ({percent}%)", sample.filename),
        };
        self.set_sub_message(Some(format!("Downloading {}...", sample.filename)));
        true
    }
}
