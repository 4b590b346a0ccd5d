// src/app.rs
//
// Outils Aptitude — module App (racine)
// -------------------------------------
// Rôle :
// - Déclarer les surfaces (minuteur, bloc-notes/dessin, calculatrice)
// - Composer la fenêtre unique (empilement vertical, comme trois outils
//   posés l'un sous l'autre)
// - Fournir l'impl eframe::App
//
// Les trois surfaces sont indépendantes : elles partagent la fenêtre et
// rien d'autre. Le seul raccourci global est Échap (efface l'entrée de la
// calculatrice) ; Espace/R appartiennent au minuteur qui vérifie lui-même
// que le clavier est libre.

pub mod bloc;
pub mod etat;
pub mod minuteur;
pub mod vue;

// Ré-export pratique : `use crate::app::EtatCalc;`
pub use etat::EtatCalc;

use bloc::EtatBloc;
use minuteur::EtatMinuteur;

use eframe::egui;

#[derive(Default)]
pub struct AppOutils {
    pub minuteur: EtatMinuteur,
    pub bloc: EtatBloc,
    pub calc: EtatCalc,
}

impl eframe::App for AppOutils {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l'entrée de la calculatrice.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.calc.effacer_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.minuteur.ui(ui);

                    ui.add_space(4.0);
                    ui.separator();
                    ui.add_space(4.0);

                    self.bloc.ui(ui);

                    ui.add_space(4.0);
                    ui.separator();
                    ui.add_space(4.0);

                    self.calc.ui(ui);
                });
        });
    }
}
