use std::time::Duration;

use clap::Parser;
use env_logger::Env;

mod engine;
mod error;
mod ui;
mod updater;
mod util;

use engine::BootstrapPlan;
use ui::theme::ThemeConfig;
use ui::window;

#[derive(Parser, Debug)]
#[command(
    name = "RuneLite Launcher",
    author,
    version,
    about = "Splash window reporting client bootstrap progress"
)]
struct Cli {
    /// Print launcher version and exit without starting the UI.
    #[arg(long)]
    version_only: bool,

    /// Oldest launcher version the client still accepts.
    #[arg(long, value_name = "VERSION")]
    minimum_version: Option<String>,

    /// Time spent on each bootstrap step, in milliseconds.
    #[arg(long, default_value_t = 400)]
    step_delay_ms: u64,

    /// Leave the window open once bootstrapping finishes.
    #[arg(long)]
    keep_open: bool,
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.version_only {
        println!("RuneLite Launcher {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let theme = ThemeConfig::default();
    let logo = ui::assets::load_image(window::LOGO).ready();
    let plan = BootstrapPlan {
        minimum_version: cli.minimum_version,
        step_delay: Duration::from_millis(cli.step_delay_ms),
        keep_open: cli.keep_open,
        ..BootstrapPlan::default()
    };

    let mut viewport = eframe::egui::ViewportBuilder::default()
        .with_title(window::TITLE)
        .with_inner_size(window::FRAME_SIZE)
        .with_resizable(false)
        .with_decorations(false)
        .with_transparent(true);
    if let Some(logo) = &logo {
        viewport = viewport.with_icon(logo.to_icon_data());
    }

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        window::TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ui::LauncherApp::new(cc, theme, logo, plan)))),
    )
}
