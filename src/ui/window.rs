use eframe::egui::{
    self, Align2, CornerRadius, Frame, Margin, RichText, Sense, Stroke, Vec2, ViewportCommand,
};
use log::{debug, info};
use tokio::sync::{mpsc, oneshot};

use crate::engine::state::{LauncherEvent, VersionChoice};
use crate::ui::assets::Image;
use crate::ui::browser::UrlOpener;
use crate::ui::progress::{DownloadSample, StatusView};
use crate::ui::theme::ThemeConfig;

pub const TITLE: &str = "RuneLite";
pub const FRAME_SIZE: Vec2 = Vec2::new(200.0, 275.0);
pub const CORNER_RADIUS: u8 = 15;
pub const PROJECT_URL: &str = "https://runelite.net";
pub const LOGO: &str = "runelite.png";

const LOGO_SIZE: f32 = 96.0;
const OUTDATED_TITLE: &str = "Outdated launcher";
const OUTDATED_MESSAGE: &str = "Your RuneLite launcher version is outdated\n\
                                Please visit runelite.net to download the updated version";
const PROMPT_CHOICES: [VersionChoice; 2] = [VersionChoice::VisitWebsite, VersionChoice::CloseClient];

/// The splash window shown while the client is bootstrapped.
pub struct LauncherWindow {
    version: String,
    status: StatusView,
    theme: ThemeConfig,
    events: mpsc::UnboundedReceiver<LauncherEvent>,
    opener: Box<dyn UrlOpener>,
    logo: Option<Image>,
    logo_texture: Option<egui::TextureHandle>,
    outdated_prompt: Option<oneshot::Sender<VersionChoice>>,
    close_requested: bool,
}

impl LauncherWindow {
    pub fn new(
        version: impl Into<String>,
        steps: u32,
        theme: ThemeConfig,
        events: mpsc::UnboundedReceiver<LauncherEvent>,
        opener: Box<dyn UrlOpener>,
    ) -> Self {
        Self {
            version: version.into(),
            status: StatusView::new(steps),
            theme,
            events,
            opener,
            logo: None,
            logo_texture: None,
            outdated_prompt: None,
            close_requested: false,
        }
    }

    #[must_use]
    pub fn with_logo(mut self, logo: Option<Image>) -> Self {
        self.logo = logo;
        self
    }

    pub fn status(&self) -> &StatusView {
        &self.status
    }

    pub fn prompt_pending(&self) -> bool {
        self.outdated_prompt.is_some()
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Apply everything the bootstrap side queued since the last frame.
    pub fn sync_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
        }
    }

    pub fn apply(&mut self, event: LauncherEvent) {
        match event {
            LauncherEvent::Step(message) => {
                let step = self.status.advance_step(message);
                debug!(
                    "ui: step {step}/{} {}",
                    self.status.steps().total_steps(),
                    self.status.message()
                );
            }
            LauncherEvent::SubMessage(message) => self.status.set_sub_message(message),
            LauncherEvent::Download {
                filename,
                bytes,
                total,
            } => {
                self.status
                    .report_download(&DownloadSample::new(filename, bytes, total));
            }
            LauncherEvent::InvalidVersion { reply } => {
                info!("ui: launcher version rejected; asking user how to proceed");
                if self.outdated_prompt.replace(reply).is_some() {
                    debug!("ui: replacing an unanswered outdated-launcher prompt");
                }
            }
            LauncherEvent::Close => self.close_requested = true,
        }
    }

    /// Answer the outdated-launcher prompt. Visiting the website keeps the
    /// window open; either way the caller receives the choice.
    pub fn resolve_prompt(&mut self, choice: VersionChoice) {
        let Some(reply) = self.outdated_prompt.take() else {
            return;
        };
        info!("ui: outdated launcher prompt answered: {}", choice.label());
        if choice == VersionChoice::VisitWebsite {
            self.opener.open(PROJECT_URL);
        }
        if reply.send(choice).is_err() {
            debug!("ui: bootstrap stopped waiting for the outdated-launcher answer");
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.sync_events();
        if self.close_requested {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        let colors = self.theme.colors;
        let bar_height = self.theme.progress_bar_height();
        let border = self.theme.progress_bar.border;
        let logo = self.logo_texture_id(ctx);

        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(colors.darker_gray)
                    .corner_radius(CornerRadius::same(CORNER_RADIUS))
                    .inner_margin(Margin::same(12)),
            )
            .show(ctx, |ui| {
                let drag = ui.interact(
                    ui.max_rect(),
                    ui.id().with("window_drag"),
                    Sense::click_and_drag(),
                );
                if drag.drag_started() {
                    ctx.send_viewport_cmd(ViewportCommand::StartDrag);
                }

                ui.vertical_centered(|ui| {
                    if let Some(texture) = logo {
                        ui.image((texture, Vec2::splat(LOGO_SIZE)));
                    }
                    ui.label(
                        RichText::new(format!("Version {}", self.version))
                            .small()
                            .color(colors.brand_orange),
                    );
                    ui.add_space(16.0);
                    ui.label(RichText::new(self.status.message()).strong());

                    let mode = self.status.mode();
                    let mut bar = egui::ProgressBar::new(mode.fraction())
                        .fill(colors.brand_orange)
                        .desired_height(bar_height);
                    if let Some(text) = mode.text() {
                        bar = bar.text(
                            RichText::new(text)
                                .small()
                                .color(colors.selection_foreground),
                        );
                    }
                    Frame::new()
                        .stroke(Stroke::new(border, colors.brand_orange))
                        .show(ui, |ui| ui.add(bar));

                    if let Some(sub_message) = self.status.sub_message() {
                        ui.label(RichText::new(sub_message).small());
                    }
                });
            });

        self.render_outdated_prompt(ctx);
    }

    fn logo_texture_id(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        if self.logo_texture.is_none() {
            let image = self.logo.take()?;
            self.logo_texture = Some(ctx.load_texture(
                "launcher_logo",
                image.to_color_image(),
                egui::TextureOptions::LINEAR,
            ));
        }
        self.logo_texture.as_ref().map(egui::TextureHandle::id)
    }

    fn render_outdated_prompt(&mut self, ctx: &egui::Context) {
        if self.outdated_prompt.is_none() {
            return;
        }

        let mut choice = None;
        egui::Window::new(OUTDATED_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(OUTDATED_MESSAGE);
                    ui.add_space(8.0);
                    for option in PROMPT_CHOICES {
                        if ui.button(option.label()).clicked() {
                            choice = Some(option);
                        }
                    }
                });
            });

        // Enter and Escape pick the default, closing the client.
        if choice.is_none()
            && ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape))
        {
            choice = Some(VersionChoice::CloseClient);
        }
        if let Some(choice) = choice {
            self.resolve_prompt(choice);
        }
    }
}
