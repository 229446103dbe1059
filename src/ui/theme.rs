use eframe::egui::{self, Color32, CornerRadius, Stroke, Vec2};
use log::{info, warn};
use serde::Deserialize;

use crate::error::{AssetError, Outcome};
use crate::ui::assets;

const LOOK_AND_FEEL: &str = "look_and_feel.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Accent used for the progress fill and branding.
    pub brand_orange: Color32,
    /// Same accent at lowered opacity.
    pub brand_orange_transparent: Color32,
    pub darker_gray: Color32,
    pub selection_foreground: Color32,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            brand_orange: Color32::from_rgb(220, 138, 0),
            brand_orange_transparent: Color32::from_rgba_unmultiplied(220, 138, 0, 120),
            darker_gray: Color32::from_rgb(30, 30, 30),
            selection_foreground: Color32::BLACK,
        }
    }
}

impl ColorScheme {
    pub fn progress_background(&self) -> Color32 {
        darker(self.brand_orange_transparent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBarMetrics {
    pub border: f32,
    pub horizontal_size: Vec2,
}

impl Default for ProgressBarMetrics {
    fn default() -> Self {
        Self {
            border: 0.0,
            horizontal_size: Vec2::new(10.0, 12.0),
        }
    }
}

/// Look of the launcher, decided once at startup and handed to the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThemeConfig {
    pub colors: ColorScheme,
    pub progress_bar: ProgressBarMetrics,
}

impl ThemeConfig {
    pub fn progress_bar_height(&self) -> f32 {
        self.progress_bar.horizontal_size.y
    }
}

/// Widget rendering preset shipped as a resource.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LookAndFeel {
    pub name: String,
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    pub text_color: Option<[u8; 3]>,
    #[serde(default)]
    pub window_corner_radius: u8,
    #[serde(default)]
    pub widget_corner_radius: u8,
    pub item_spacing: Option<[f32; 2]>,
    pub button_padding: Option<[f32; 2]>,
}

const fn default_dark_mode() -> bool {
    true
}

impl LookAndFeel {
    pub fn from_json(raw: &[u8]) -> Result<Self, AssetError> {
        Ok(serde_json::from_slice(raw)?)
    }

    pub fn load() -> Result<Self, AssetError> {
        Self::from_json(&assets::resource(LOOK_AND_FEEL)?)
    }

    fn install(&self, style: &mut egui::Style) {
        style.visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        let visuals = &mut style.visuals;
        visuals.override_text_color = self
            .text_color
            .map(|[r, g, b]| Color32::from_rgb(r, g, b));
        visuals.window_corner_radius = CornerRadius::same(self.window_corner_radius);
        let widget_radius = CornerRadius::same(self.widget_corner_radius);
        visuals.widgets.noninteractive.corner_radius = widget_radius;
        visuals.widgets.inactive.corner_radius = widget_radius;
        visuals.widgets.hovered.corner_radius = widget_radius;
        visuals.widgets.active.corner_radius = widget_radius;

        if let Some([x, y]) = self.item_spacing {
            style.spacing.item_spacing = Vec2::new(x, y);
        }
        if let Some([x, y]) = self.button_padding {
            style.spacing.button_padding = Vec2::new(x, y);
        }
    }
}

/// Apply the launcher theme to `ctx`.
///
/// The custom look and feel is optional: if it cannot be installed egui's
/// default dark look stays active and the palette is still applied.
pub fn apply_theme(ctx: &egui::Context, config: &ThemeConfig) -> Outcome<()> {
    apply_theme_with(ctx, config, LookAndFeel::load())
}

fn apply_theme_with(
    ctx: &egui::Context,
    config: &ThemeConfig,
    look_and_feel: Result<LookAndFeel, AssetError>,
) -> Outcome<()> {
    let outcome = match &look_and_feel {
        Ok(laf) => {
            info!("ui: installing look and feel {}", laf.name);
            Outcome::Ready(())
        }
        Err(err) => {
            warn!("ui: unable to set look and feel: {err}");
            Outcome::Degraded(err.to_string())
        }
    };

    let dark = look_and_feel.as_ref().map_or(true, |laf| laf.dark_mode);
    ctx.set_theme(if dark {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
    ctx.style_mut(|style| {
        match &look_and_feel {
            Ok(laf) => laf.install(style),
            Err(_) => style.visuals = egui::Visuals::dark(),
        }
        apply_palette(style, config);
    });
    outcome
}

fn apply_palette(style: &mut egui::Style, config: &ThemeConfig) {
    let colors = &config.colors;
    let visuals = &mut style.visuals;
    visuals.panel_fill = colors.darker_gray;
    visuals.window_fill = colors.darker_gray;
    visuals.extreme_bg_color = colors.progress_background();
    visuals.selection.bg_fill = colors.brand_orange;
    visuals.selection.stroke = Stroke::new(1.0, colors.selection_foreground);
    visuals.hyperlink_color = colors.brand_orange;
    style.spacing.interact_size.y = style
        .spacing
        .interact_size
        .y
        .max(config.progress_bar_height());
}

/// Darken a color the way AWT does: every channel scaled by 0.7, alpha kept.
pub fn darker(color: Color32) -> Color32 {
    const FACTOR: f32 = 0.7;
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let scale = |channel: u8| (f32::from(channel) * FACTOR) as u8;
    Color32::from_rgba_unmultiplied(scale(r), scale(g), scale(b), a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_matches_branding() {
        let colors = ColorScheme::default();
        assert_eq!(colors.brand_orange, Color32::from_rgb(220, 138, 0));
        assert_eq!(
            colors.brand_orange_transparent.to_srgba_unmultiplied()[3],
            120
        );
        assert_eq!(colors.selection_foreground, Color32::BLACK);
        assert_eq!(colors.darker_gray, Color32::from_rgb(30, 30, 30));
    }

    #[test]
    fn darker_scales_color_channels() {
        let [r, g, b, _] = darker(Color32::from_rgb(220, 138, 0)).to_srgba_unmultiplied();
        assert_eq!((r, g, b), (154, 96, 0));
    }

    #[test]
    fn default_metrics() {
        let metrics = ProgressBarMetrics::default();
        assert_eq!(metrics.border, 0.0);
        assert_eq!(metrics.horizontal_size, Vec2::new(10.0, 12.0));
        assert_eq!(ThemeConfig::default().progress_bar_height(), 12.0);
    }

    #[test]
    fn bundled_look_and_feel_parses() {
        let laf = LookAndFeel::load().expect("bundled look and feel");
        assert!(laf.dark_mode);
        assert_eq!(laf.window_corner_radius, 15);
    }

    #[test]
    fn bundled_theme_applies_cleanly() {
        let ctx = egui::Context::default();
        let config = ThemeConfig::default();
        assert_eq!(apply_theme(&ctx, &config), Outcome::Ready(()));

        let style = ctx.style();
        assert_eq!(style.visuals.panel_fill, config.colors.darker_gray);
        assert_eq!(style.visuals.selection.bg_fill, config.colors.brand_orange);
        assert_eq!(
            style.visuals.window_corner_radius,
            CornerRadius::same(15)
        );
    }

    #[test]
    fn broken_look_and_feel_degrades_but_keeps_palette() {
        let ctx = egui::Context::default();
        let config = ThemeConfig::default();
        let broken = LookAndFeel::from_json(b"{ not json");
        assert!(broken.is_err());

        let outcome = apply_theme_with(&ctx, &config, broken);
        assert!(outcome.is_degraded());
        assert!(outcome.reason().unwrap().starts_with("malformed look and feel"));

        let style = ctx.style();
        assert!(style.visuals.dark_mode);
        assert_eq!(style.visuals.panel_fill, config.colors.darker_gray);
        assert_eq!(
            style.visuals.extreme_bg_color,
            config.colors.progress_background()
        );
    }

    #[test]
    fn light_look_and_feel() {
        let laf = LookAndFeel::from_json(br#"{ "name": "plain", "dark_mode": false }"#).unwrap();
        let ctx = egui::Context::default();
        assert_eq!(
            apply_theme_with(&ctx, &ThemeConfig::default(), Ok(laf)),
            Outcome::Ready(())
        );
        assert!(!ctx.style().visuals.dark_mode);
    }
}
