// src/main.rs
//
// Outils Aptitude — point d'entrée natif
// --------------------------------------
// Trois petits outils dans une fenêtre : minuteur, bloc-notes/dessin,
// calculatrice. Ici : options de fenêtre + init des logs, rien d'autre.
// La composition vit dans src/app.rs, le coeur calcul dans src/noyau/.

use eframe::egui;

mod app;
mod noyau;

use app::AppOutils;

/// Titre unique de la fenêtre.
const TITRE_APP: &str = "Outils Aptitude";

fn main() -> eframe::Result<()> {
    // Logs filtrables via RUST_LOG (ex: RUST_LOG=outils_aptitude=trace).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "démarrage de {}", TITRE_APP);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([500.0, 840.0])
            .with_min_inner_size([420.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppOutils>::default())),
    )
}
