//! # GUI Theme
//!
//! Dark studio theme for egui with a violet accent, high contrast and
//! sharp edges.

use egui::{Color32, Context, Stroke, Visuals};

/// Color palette for the studio.
#[derive(Debug, Clone)]
pub struct StudioColors {
    /// Near-black background
    pub background: Color32,
    /// Bright white text
    pub text: Color32,
    /// Violet primary accent
    pub accent: Color32,
    /// Darker violet for pressed states
    pub accent_dark: Color32,
    /// Dark gray borders
    pub border_dark: Color32,
    /// Success green
    pub green_success: Color32,
    /// Error red
    pub red_error: Color32,
    /// Warning yellow
    pub yellow_warning: Color32,
    /// Info blue
    pub blue_info: Color32,
    /// Dark gray for inactive elements
    pub gray_inactive: Color32,
    /// Medium gray for secondary text
    pub gray_secondary: Color32,
}

impl Default for StudioColors {
    fn default() -> Self {
        StudioColors {
            background: Color32::from_rgb(10, 10, 14),
            text: Color32::from_rgb(255, 255, 255),
            accent: Color32::from_rgb(153, 69, 255),
            accent_dark: Color32::from_rgb(94, 37, 168),
            border_dark: Color32::from_rgb(51, 51, 51),
            green_success: Color32::from_rgb(20, 241, 149),
            red_error: Color32::from_rgb(255, 70, 70),
            yellow_warning: Color32::from_rgb(255, 170, 0),
            blue_info: Color32::from_rgb(100, 150, 255),
            gray_inactive: Color32::from_rgb(26, 26, 28),
            gray_secondary: Color32::from_rgb(150, 150, 150),
        }
    }
}

/// Application theme, derived from the palette.
pub struct Theme {
    pub colors: StudioColors,
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = StudioColors::default();
        Theme {
            normal: colors.text,
            selected: colors.accent,
            border: colors.border_dark,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.yellow_warning,
            info: colors.blue_info,
            background: colors.background,
            colors,
        }
    }
}

impl Theme {
    /// Build egui Visuals for the studio look.
    pub fn studio_visuals() -> Visuals {
        let colors = StudioColors::default();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);

        visuals.faint_bg_color = colors.background;
        visuals.extreme_bg_color = Color32::from_rgb(4, 4, 6);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.window_stroke = Stroke::new(1.0, colors.border_dark);

        visuals.widgets.noninteractive.bg_fill = colors.gray_inactive;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.gray_inactive;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(30, 30, 34);

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(40, 22, 62);
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, colors.accent);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(32, 18, 50);

        visuals.widgets.active.bg_fill = colors.accent_dark;
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.accent);
        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(60, 28, 94);

        visuals.widgets.open.bg_fill = Color32::from_rgb(40, 22, 62);
        visuals.widgets.open.bg_stroke = Stroke::new(2.0, colors.accent);

        // 30% opacity accent for the selection highlight
        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(153, 69, 255, 76);
        visuals.selection.stroke = Stroke::new(2.0, colors.accent);

        visuals.hyperlink_color = colors.blue_info;
        visuals.resize_corner_size = 8.0;
        visuals.clip_rect_margin = 2.0;

        visuals
    }

    /// Apply the studio visuals to an egui context.
    pub fn apply(ctx: &Context) {
        ctx.set_visuals(Self::studio_visuals());
    }
}
