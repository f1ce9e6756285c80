#![windows_subsystem = "windows"]

mod app;
mod settings;
mod theme;
mod ui;

use eframe::egui;
use neo_folio::chat::gateway::OfflineBackend;
use neo_folio::chat::gemini::{self, GeminiBackend};
use neo_folio::{ContentStore, InferenceGateway};
use tracing_subscriber::EnvFilter;

use crate::app::PortfolioApp;
use crate::settings::AppSettings;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("neo_folio=info")))
        .init();

    let settings = AppSettings::load();
    let store = ContentStore::load_or_builtin(settings.content_path.as_deref());
    let gateway = build_gateway(&settings);

    tracing::info!(
        projects = store.projects.len(),
        photos = store.photos.len(),
        lang = ?settings.language,
        "starting neo-folio"
    );

    let title = format!("{}{} // Portfolio", store.owner.brand, store.owner.brand_suffix);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "neo-folio",
        options,
        Box::new(move |cc| {
            theme::install_fonts(&cc.egui_ctx);
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PortfolioApp::new(
                store,
                gateway,
                settings.language,
                settings.effects_enabled,
            )))
        }),
    )
}

/// The Gemini backend, or an offline one that fails every call if the HTTP
/// client cannot be built. Either way the chat stays usable.
fn build_gateway(settings: &AppSettings) -> InferenceGateway {
    let config = settings.gemini_config(gemini::api_key_from_env());
    match GeminiBackend::new(config) {
        Ok(backend) => InferenceGateway::new(Box::new(backend)),
        Err(e) => {
            tracing::error!(error = %e, "failed to set up chat backend");
            InferenceGateway::new(Box::new(OfflineBackend::new(e.to_string())))
        }
    }
}
