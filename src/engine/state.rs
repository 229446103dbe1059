use tokio::sync::oneshot;

// Updates pushed from the bootstrap side into the launcher window.
#[derive(Debug)]
pub enum LauncherEvent {
    Step(String),
    SubMessage(Option<String>),
    Download {
        filename: String,
        bytes: u64,
        total: u64,
    },
    InvalidVersion {
        reply: oneshot::Sender<VersionChoice>,
    },
    Close,
}

/// Answer to the "outdated launcher" dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionChoice {
    VisitWebsite,
    CloseClient,
}

impl VersionChoice {
    pub fn label(self) -> &'static str {
        match self {
            VersionChoice::VisitWebsite => "Visit runelite.net",
            VersionChoice::CloseClient => "Close client",
        }
    }
}
