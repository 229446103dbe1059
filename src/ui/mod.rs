use std::sync::Arc;

use eframe::egui;
use log::{debug, error, info, warn};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;

use crate::engine::{self, BootstrapPlan};

pub mod assets;
pub mod browser;
mod handle;
pub mod progress;
pub mod theme;
pub mod window;

pub use self::handle::LauncherHandle;
use self::assets::Image;
use self::browser::SystemUrlOpener;
use self::theme::ThemeConfig;
use self::window::LauncherWindow;

fn build_runtime() -> Arc<Runtime> {
    match Runtime::new() {
        Ok(rt) => Arc::new(rt),
        Err(err) => {
            warn!(
                "ui: failed to create multithreaded runtime ({}); trying single-threaded runtime",
                err
            );
            match Builder::new_current_thread().enable_all().build() {
                Ok(rt) => Arc::new(rt),
                Err(fallback_err) => {
                    error!(
                        "ui: failed to create any Tokio runtime ({}); terminating launcher",
                        fallback_err
                    );
                    std::process::exit(1);
                }
            }
        }
    }
}

pub struct LauncherApp {
    // Owns the bootstrap task; dropping the app stops it.
    _runtime: Arc<Runtime>,
    window: LauncherWindow,
}

impl LauncherApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        theme: ThemeConfig,
        logo: Option<Image>,
        plan: BootstrapPlan,
    ) -> Self {
        if let Some(reason) = theme::apply_theme(&cc.egui_ctx, &theme).reason() {
            debug!("ui: running with default look and feel ({reason})");
        }

        let runtime = build_runtime();
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = LauncherHandle::new(tx, cc.egui_ctx.clone());
        let window = LauncherWindow::new(
            plan.launcher_version.clone(),
            plan.total_steps(),
            theme,
            rx,
            Box::new(SystemUrlOpener),
        )
        .with_logo(logo);

        runtime.spawn(async move {
            let outcome = engine::run(handle, plan).await;
            info!("ui: bootstrap ended: {outcome:?}");
        });

        Self {
            _runtime: runtime,
            window,
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.window.show(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Let the rounded panel define the window outline.
        egui::Rgba::TRANSPARENT.to_array()
    }
}
