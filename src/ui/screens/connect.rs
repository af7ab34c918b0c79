//! # Connect Screen
//!
//! Shown while no wallet is connected. Offers the configured keypair, a
//! file picker, and a throwaway keypair.

use egui;

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// User actions collected during a frame.
enum ConnectAction {
    Connect,
    Browse,
    Generate,
}

/// Render the connect screen
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        forms::render_form_heading(ui, "Mintdeck", &theme);
        ui.label(egui::RichText::new("Wallet Not Connected").size(18.0));
        ui.add_space(8.0);
        forms::render_hint(
            ui,
            "Connect a Solana wallet to mint and browse your NFTs",
            &theme,
        );
        ui.add_space(30.0);

        let size = Some(egui::vec2(260.0, 36.0));
        if forms::render_button(ui, "Connect Wallet", &theme, Some(theme.selected), size)
            .clicked()
        {
            action = Some(ConnectAction::Connect);
        }
        ui.add_space(8.0);
        if forms::render_button(ui, "Browse for Keypair File", &theme, None, size).clicked() {
            action = Some(ConnectAction::Browse);
        }
        ui.add_space(8.0);
        if forms::render_button(ui, "Generate New Keypair", &theme, None, size).clicked() {
            action = Some(ConnectAction::Generate);
        }

        ui.add_space(20.0);
        forms::render_hint(ui, "Devnet only. Uses the Solana CLI keypair by default.", &theme);
    });

    match action {
        Some(ConnectAction::Connect) => app.handle_connect_click(),
        Some(ConnectAction::Browse) => {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Keypair", &["json"])
                .pick_file()
            {
                app.handle_connect_from_file(path);
            }
        }
        Some(ConnectAction::Generate) => app.handle_generate_click(),
        None => {}
    }
}
