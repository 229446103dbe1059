use eframe::egui;
use log::debug;
use tokio::sync::{mpsc, oneshot};

use crate::engine::state::{LauncherEvent, VersionChoice};

/// Cloneable remote control for the launcher window.
///
/// Every call is a best-effort display update: once the window is gone the
/// update is dropped.
#[derive(Clone)]
pub struct LauncherHandle {
    events: mpsc::UnboundedSender<LauncherEvent>,
    ctx: egui::Context,
}

impl LauncherHandle {
    pub fn new(events: mpsc::UnboundedSender<LauncherEvent>, ctx: egui::Context) -> Self {
        Self { events, ctx }
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.send(LauncherEvent::Step(message.into()));
    }

    pub fn set_sub_message(&self, message: Option<&str>) {
        self.send(LauncherEvent::SubMessage(message.map(str::to_owned)));
    }

    pub fn progress(&self, filename: impl Into<String>, bytes: u64, total: u64) {
        self.send(LauncherEvent::Download {
            filename: filename.into(),
            bytes,
            total,
        });
    }

    /// Ask the user what to do about an outdated launcher and wait for the answer.
    pub async fn invalid_version(&self) -> VersionChoice {
        let (reply, answer) = oneshot::channel();
        self.send(LauncherEvent::InvalidVersion { reply });
        answer.await.unwrap_or_else(|_| {
            debug!("ui: launcher window closed before answering; assuming close");
            VersionChoice::CloseClient
        })
    }

    pub fn close(&self) {
        self.send(LauncherEvent::Close);
    }

    fn send(&self, event: LauncherEvent) {
        if let Err(err) = self.events.send(event) {
            debug!("ui: dropping update for closed launcher window: {:?}", err.0);
            return;
        }
        self.ctx.request_repaint();
    }
}
