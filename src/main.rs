//! Mintdeck binary: window setup, logging, and the eframe update loop.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mintdeck::app::{App, Phase};
use mintdeck::config::StudioConfig;
use mintdeck::services::sdk::SdkClient;
use mintdeck::ui::{screens, NotificationManager, Theme};
use mintdeck::utils::runtime::TOKIO_RT;

/// Initialize logging: daily-rotated file plus stderr.
///
/// The returned guard must stay alive for the lifetime of the process or
/// buffered log lines are dropped.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all("logs") {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily("logs", "mintdeck.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mintdeck=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_ansi(false);

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Some(guard)
}

/// The eframe shell around [`App`].
struct StudioApp {
    app: App,
    notifications: NotificationManager,
}

impl StudioApp {
    fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        Theme::apply(&cc.egui_ctx);
        // Needed for URL and file image sources in the NFT viewer.
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self {
            app,
            notifications: NotificationManager::new(),
        }
    }

    fn drain_notifications(&mut self) {
        let pending = std::mem::take(&mut self.app.state.write().pending_notifications);
        for (level, message) in pending {
            self.notifications.push(level, message);
        }
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let alert = self.app.state.read().alert.clone();
        if let Some(message) = alert {
            let modal = egui::Modal::new(egui::Id::new("studio_alert")).show(ctx, |ui| {
                ui.set_width(280.0);
                ui.label(&message);
                ui.add_space(12.0);
                ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
            });
            if modal.inner || modal.should_close() {
                self.app.handle_alert_dismiss();
            }
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        self.drain_notifications();

        let connected = self.app.state.read().phase != Phase::Disconnected;

        egui::CentralPanel::default().show(ctx, |ui| {
            if connected {
                screens::studio::render(ui, &mut self.app);
            } else {
                screens::connect::render(ui, &mut self.app);
            }
        });

        self.render_alert(ctx);
        self.notifications.show(ctx);

        // Keep draining the event channel even when idle.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn main() -> eframe::Result {
    let _log_guard = init_logging();

    // Spawned tasks need a runtime context before the first frame.
    let _rt_guard = TOKIO_RT.enter();

    let config = StudioConfig::from_env();
    let sdk = Arc::new(SdkClient::new(&config.gateway_url));
    let app = App::new(sdk, config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Mintdeck"),
        ..Default::default()
    };

    eframe::run_native(
        "Mintdeck",
        options,
        Box::new(|cc| Ok(Box::new(StudioApp::new(cc, app)))),
    )
}
