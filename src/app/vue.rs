// src/app/vue.rs
//
// Vue calculatrice (egui)
// -----------------------
// - Carte IO : sorties (3 dernières lignes, alignées à droite) + entrée
// - Clavier : Enter évalue quand le champ a le focus
// - Pavé 5×4 repris de la disposition classique :
//     C   DEL  /   sqrt
//     7   8    9   *
//     4   5    6   -
//     1   2    3   +
//     0   00   .   =
// - Après un clic bouton, le focus revient sur l'entrée (focus_entree)
//
// Aucun affichage d'erreur : un rejet ne change rien à l'écran.

use eframe::egui;

use super::etat::EtatCalc;

impl EtatCalc {
    /// UI de la surface calculatrice, à appeler depuis la fenêtre racine.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(4.0);

        self.ui_carte_io(ui);
        ui.add_space(6.0);
        self.ui_pave(ui);
    }

    /* ------------------------ Carte IO ------------------------ */

    fn ui_carte_io(&mut self, ui: &mut egui::Ui) {
        // Sorties : cadre monospace, 3 lignes réservées, aligné à droite.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id("sorties_calc", |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        3.0 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                        if self.historique.is_empty() {
                            ui.weak("Les résultats s'affichent ici.");
                        }
                        for ligne in &self.historique {
                            ui.monospace(ligne);
                        }
                    });
                });
            });

        // Entrée
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Saisissez une expression.")
                .id_source("entree_calc")
                .code_editor(),
        );

        // Si on a cliqué un bouton du pavé, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue (seulement si le champ est focus, pour éviter les
        // déclenchements globaux)
        let entrer = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && entrer {
            self.egal();
        }
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calc")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                const RANGEES: [[&str; 4]; 5] = [
                    ["C", "DEL", "/", "sqrt"],
                    ["7", "8", "9", "*"],
                    ["4", "5", "6", "-"],
                    ["1", "2", "3", "+"],
                    ["0", "00", ".", "="],
                ];

                for rangee in RANGEES {
                    for touche in rangee {
                        self.bouton_pave(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_pave(&mut self, ui: &mut egui::Ui, touche: &str) {
        let resp = ui.add_sized([56.0, 34.0], egui::Button::new(touche));
        if !resp.clicked() {
            return;
        }

        match touche {
            "C" => self.effacer_tout(),
            "DEL" => self.retour_arriere(),
            "sqrt" => self.racine_carree(),
            "=" => self.egal(),
            _ => self.inserer(touche),
        }
        self.focus_entree = true;
    }
}
