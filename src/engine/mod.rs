use std::time::Duration;

use log::{debug, info, warn};

use crate::engine::state::VersionChoice;
use crate::ui::LauncherHandle;
use crate::updater;

pub mod state;

/// The bootstrap phases, in the order the window walks through them.
pub const STEPS: [&str; 4] = [
    "Checking launcher version",
    "Downloading client",
    "Verifying client",
    "Starting client",
];

const PROGRESS_TICKS: u64 = 8;

#[derive(Clone, Debug)]
pub struct Artifact {
    pub name: String,
    pub size_bytes: u64,
}

impl Artifact {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

/// Scripted bootstrap sequence used to drive the launcher window.
#[derive(Clone, Debug)]
pub struct BootstrapPlan {
    pub launcher_version: String,
    pub minimum_version: Option<String>,
    pub artifacts: Vec<Artifact>,
    pub step_delay: Duration,
    pub keep_open: bool,
}

impl Default for BootstrapPlan {
    fn default() -> Self {
        Self {
            launcher_version: env!("CARGO_PKG_VERSION").to_owned(),
            minimum_version: None,
            artifacts: vec![
                Artifact::new("client.jar", 2_048_000),
                Artifact::new("injected-client.jar", 1_536_000),
                Artifact::new("runelite-api.jar", 512_000),
            ],
            step_delay: Duration::from_millis(400),
            keep_open: false,
        }
    }
}

impl BootstrapPlan {
    pub fn total_steps(&self) -> u32 {
        STEPS.len() as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Completed,
    Outdated(VersionChoice),
}

pub async fn run(handle: LauncherHandle, plan: BootstrapPlan) -> BootstrapOutcome {
    info!("bootstrap: launcher {}", plan.launcher_version);

    handle.set_message(STEPS[0]);
    if let Some(minimum) = &plan.minimum_version
        && updater::is_outdated(&plan.launcher_version, minimum)
    {
        warn!(
            "bootstrap: launcher {} is below minimum {minimum}",
            plan.launcher_version
        );
        let choice = handle.invalid_version().await;
        // The window is undecorated; once bootstrapping stops nothing else can dismiss it.
        info!("bootstrap: stopping after outdated launcher prompt ({choice:?})");
        handle.close();
        return BootstrapOutcome::Outdated(choice);
    }
    pause(plan.step_delay).await;

    handle.set_message(STEPS[1]);
    for artifact in &plan.artifacts {
        download(&handle, artifact, plan.step_delay).await;
    }

    handle.set_message(STEPS[2]);
    handle.set_sub_message(Some(format!("{} files", plan.artifacts.len()).as_str()));
    pause(plan.step_delay).await;

    handle.set_message(STEPS[3]);
    pause(plan.step_delay).await;

    if plan.keep_open {
        info!("bootstrap: finished; keeping launcher window open");
    } else {
        info!("bootstrap: finished; closing launcher window");
        handle.close();
    }
    BootstrapOutcome::Completed
}

async fn download(handle: &LauncherHandle, artifact: &Artifact, duration: Duration) {
    debug!(
        "download: {} ({} bytes)",
        artifact.name, artifact.size_bytes
    );
    let tick = duration / PROGRESS_TICKS as u32;
    for i in 0..=PROGRESS_TICKS {
        let bytes = artifact.size_bytes * i / PROGRESS_TICKS;
        handle.progress(&artifact.name, bytes, artifact.size_bytes);
        pause(tick).await;
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
