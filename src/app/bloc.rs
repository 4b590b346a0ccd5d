// src/app/bloc.rs
//
// Bloc-notes + zone de dessin (état + vue)
// ----------------------------------------
// Deux modes derrière des boutons à bascule, un seul visible à la fois.
// "Tout effacer" ne vide que le mode actif (le texte ET les traits ne
// partent jamais ensemble).
//
// Dessin : traits libres au glisser (points relatifs au cadre, pour que le
// contenu suive la fenêtre), trait noir 3 px sur fond blanc. Pas d'annuler.

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ModeBloc {
    Notes,
    Dessin,
}

pub struct EtatBloc {
    mode: ModeBloc,
    pub texte: String,
    traits: Vec<Vec<egui::Vec2>>,
}

impl Default for EtatBloc {
    fn default() -> Self {
        Self {
            mode: ModeBloc::Notes,
            texte: String::new(),
            traits: Vec::new(),
        }
    }
}

impl EtatBloc {
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.mode == ModeBloc::Notes, "Bloc-notes")
                .clicked()
            {
                self.mode = ModeBloc::Notes;
            }
            if ui
                .selectable_label(self.mode == ModeBloc::Dessin, "Dessin")
                .clicked()
            {
                self.mode = ModeBloc::Dessin;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Tout effacer").clicked() {
                    self.effacer_actif();
                }
            });
        });

        match self.mode {
            ModeBloc::Notes => {
                ui.add(
                    egui::TextEdit::multiline(&mut self.texte)
                        .desired_width(f32::INFINITY)
                        .desired_rows(8)
                        .hint_text("Notez ici...")
                        .id_source("bloc_notes"),
                );
            }
            ModeBloc::Dessin => self.ui_dessin(ui),
        }
    }

    fn effacer_actif(&mut self) {
        match self.mode {
            ModeBloc::Notes => self.texte.clear(),
            ModeBloc::Dessin => self.traits.clear(),
        }
    }

    fn ui_dessin(&mut self, ui: &mut egui::Ui) {
        let taille = egui::vec2(ui.available_width(), 170.0);
        let (reponse, peintre) = ui.allocate_painter(taille, egui::Sense::drag());
        let cadre = reponse.rect;

        peintre.rect_filled(cadre, 4.0, egui::Color32::WHITE);

        if reponse.drag_started() {
            self.traits.push(Vec::new());
        }
        if reponse.dragged() {
            if let Some(pos) = reponse.interact_pointer_pos() {
                let rel = pos - cadre.min;
                if let Some(trait_courant) = self.traits.last_mut() {
                    if trait_courant.last() != Some(&rel) {
                        trait_courant.push(rel);
                    }
                }
            }
        }

        let pinceau = egui::Stroke::new(3.0, egui::Color32::BLACK);
        for t in &self.traits {
            if t.len() >= 2 {
                let points: Vec<egui::Pos2> = t.iter().map(|v| cadre.min + *v).collect();
                peintre.add(egui::Shape::line(points, pinceau));
            } else if let Some(v) = t.first() {
                // un clic sans glisser laisse un point
                peintre.circle_filled(cadre.min + *v, 1.5, pinceau.color);
            }
        }
    }
}
