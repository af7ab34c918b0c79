//! # Studio Screen
//!
//! The single working screen once a wallet is connected: mint form on the
//! left, random-NFT viewer on the right, wallet summary in the header.

use egui;

use crate::app::state::Phase;
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

const FIELD_SIZE: [f32; 2] = [320.0, 28.0];

/// User actions collected during a frame.
enum StudioAction {
    Submit,
    PickRandom,
    PickImage,
    Disconnect,
    OpenExplorer(String),
}

/// Image sources must be URIs for the egui image loaders; bare paths are
/// treated as local files.
fn image_uri(source: &str) -> String {
    if source.starts_with("http://") || source.starts_with("https://") {
        source.to_string()
    } else {
        format!("file://{}", source)
    }
}

fn truncated(address: &str) -> String {
    if address.len() > 12 {
        format!("{}…{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}

/// Render the studio screen
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let mut action = None;

    {
        let mut state = app.state.write();

        // Header: wallet summary
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Mintdeck").size(20.0).strong().color(theme.selected));
            ui.separator();
            ui.monospace(truncated(&state.wallet.address));
            ui.colored_label(theme.dim, format!("{:.4} SOL", state.wallet.sol_balance));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Disconnect").clicked() {
                    action = Some(StudioAction::Disconnect);
                }
            });
        });
        ui.separator();
        ui.add_space(12.0);

        ui.columns(2, |columns| {
            // Left column: mint form
            let ui = &mut columns[0];
            forms::render_form_heading(ui, "Mint an NFT", &theme);

            forms::render_text_input(
                ui,
                "Name",
                &mut state.mint_form.name,
                "Rocket Monkey #1",
                FIELD_SIZE,
            );
            if let Some(error) = state.mint_form.errors.name.clone() {
                forms::render_error(ui, &error, &theme);
            }
            ui.add_space(8.0);

            forms::render_text_input(
                ui,
                "Description",
                &mut state.mint_form.description,
                "What makes this one special",
                FIELD_SIZE,
            );
            if let Some(error) = state.mint_form.errors.description.clone() {
                forms::render_error(ui, &error, &theme);
            }
            ui.add_space(8.0);

            ui.label(egui::RichText::new("Image").size(14.0));
            ui.horizontal(|ui| {
                if ui.button("Choose file…").clicked() {
                    action = Some(StudioAction::PickImage);
                }
                match &state.mint_form.image {
                    Some(path) => {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        ui.monospace(name);
                    }
                    None => {
                        forms::render_hint(ui, "No file selected", &theme);
                    }
                }
            });
            if let Some(error) = state.mint_form.errors.image.clone() {
                forms::render_error(ui, &error, &theme);
            }
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let submit = ui.add_enabled(
                    state.can_submit(),
                    egui::Button::new(egui::RichText::new("Submit").size(16.0))
                        .fill(theme.selected)
                        .min_size(egui::vec2(120.0, 32.0)),
                );
                if submit.clicked() {
                    action = Some(StudioAction::Submit);
                }
                if state.phase == Phase::Submitting {
                    ui.spinner();
                    forms::render_hint(ui, "Minting…", &theme);
                }
            });

            if let Some(receipt) = &state.last_mint {
                ui.add_space(16.0);
                ui.separator();
                ui.colored_label(theme.success, format!("Minted \"{}\"", receipt.name));
                ui.horizontal(|ui| {
                    ui.monospace(truncated(&receipt.address));
                    if ui.link("View on explorer").clicked() {
                        action = Some(StudioAction::OpenExplorer(receipt.address.clone()));
                    }
                });
            }

            // Right column: random NFT viewer
            let ui = &mut columns[1];
            forms::render_form_heading(ui, "Your NFTs", &theme);

            ui.horizontal(|ui| {
                let pick = ui.add_enabled(
                    state.can_pick(),
                    egui::Button::new(egui::RichText::new("Pick Random NFT").size(16.0))
                        .min_size(egui::vec2(160.0, 32.0)),
                );
                if pick.clicked() {
                    action = Some(StudioAction::PickRandom);
                }
                if state.phase == Phase::LoadingRandom {
                    ui.spinner();
                    forms::render_hint(ui, "Loading…", &theme);
                }
            });
            ui.add_space(12.0);

            ui.label(egui::RichText::new("Mint address").size(14.0));
            forms::render_readonly_field(ui, state.displayed_address(), FIELD_SIZE);
            ui.add_space(8.0);

            match &state.displayed_nft {
                Some(nft) => {
                    ui.label(egui::RichText::new(&nft.name).size(18.0).strong());
                    ui.add_space(4.0);
                    if let Some(source) = state.nft_image_source() {
                        ui.add(
                            egui::Image::new(image_uri(source))
                                .max_size(egui::vec2(320.0, 320.0))
                                .corner_radius(egui::CornerRadius::same(4)),
                        );
                    }
                }
                None => {
                    forms::render_hint(ui, "Nothing picked yet", &theme);
                }
            }
        });
    }

    match action {
        Some(StudioAction::Submit) => app.handle_submit_click(),
        Some(StudioAction::PickRandom) => app.handle_pick_random_click(),
        Some(StudioAction::PickImage) => {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg"])
                .pick_file()
            {
                app.state.write().mint_form.image = Some(path);
            }
        }
        Some(StudioAction::Disconnect) => app.handle_disconnect_click(),
        Some(StudioAction::OpenExplorer(address)) => {
            let url = format!(
                "https://explorer.solana.com/address/{}?cluster=devnet",
                address
            );
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open explorer: {}", e);
            }
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_uri_passthrough_for_http() {
        assert_eq!(
            image_uri("https://arweave.net/abc"),
            "https://arweave.net/abc"
        );
        assert_eq!(image_uri("http://host/x.png"), "http://host/x.png");
    }

    #[test]
    fn test_image_uri_wraps_local_paths() {
        assert_eq!(
            image_uri("assets/fallback-nft.png"),
            "file://assets/fallback-nft.png"
        );
    }

    #[test]
    fn test_truncated_addresses() {
        assert_eq!(
            truncated("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU"),
            "7xKXtg…gAsU"
        );
        assert_eq!(truncated("short"), "short");
    }
}
