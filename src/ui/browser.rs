use log::{info, warn};

/// Opens links outside the launcher.
pub trait UrlOpener: Send {
    fn open(&self, url: &str);
}

/// Hands links to the desktop's default browser.
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) {
        info!("ui: opening {url}");
        if let Err(err) = open::that(url) {
            warn!("ui: unable to open browser for {url}: {err}");
        }
    }
}
