// src/app/minuteur.rs
//
// Minuteur compte à rebours (état + vue)
// --------------------------------------
// - Saisie : "MM:SS" ou un nombre de secondes (défaut 20:00)
// - Démarrer / Pause / Réinit ; Espace bascule, R réinitialise
//   (seulement quand aucun champ texte ne capte le clavier)
// - Décompte calé sur l'horloge murale (Instant), pas sur la cadence
//   d'affichage : l'UI immédiate peut se rafraîchir n'importe comment
// - À zéro : arrêt, alerte visuelle (affichage clignotant) + trace log
// - Saisie invalide : ignorée en silence, comme partout ailleurs

use std::time::{Duration, Instant};

use eframe::egui;

const ENTREE_DEFAUT: &str = "20:00";

pub struct EtatMinuteur {
    pub entree: String,
    restant: u64,
    en_marche: bool,
    dernier_tick: Option<Instant>,
    alarme: bool,
}

impl Default for EtatMinuteur {
    fn default() -> Self {
        Self {
            entree: ENTREE_DEFAUT.to_string(),
            restant: 20 * 60,
            en_marche: false,
            dernier_tick: None,
            alarme: false,
        }
    }
}

/// "MM:SS" ou secondes brutes. `None` si la saisie ne se lit pas.
fn parse_mmss(texte: &str) -> Option<u64> {
    let t = texte.trim();
    if t.is_empty() {
        return None;
    }
    if let Some((m, s)) = t.split_once(':') {
        let m: u64 = m.trim().parse().ok()?;
        let s: u64 = s.trim().parse().ok()?;
        Some(m * 60 + s)
    } else {
        t.parse().ok()
    }
}

fn format_mmss(secondes: u64) -> String {
    format!("{:02}:{:02}", secondes / 60, secondes % 60)
}

impl EtatMinuteur {
    /* ------------------------ Logique ------------------------ */

    pub fn demarrer(&mut self) {
        if self.en_marche {
            return;
        }
        if self.restant == 0 {
            match parse_mmss(&self.entree) {
                Some(s) if s > 0 => self.restant = s,
                _ => return, // saisie invalide ou nulle : silencieux
            }
        }
        self.en_marche = true;
        self.alarme = false;
        self.dernier_tick = Some(Instant::now());
    }

    pub fn pause(&mut self) {
        if self.en_marche {
            self.en_marche = false;
            self.dernier_tick = None;
        }
    }

    pub fn reinitialiser(&mut self) {
        self.en_marche = false;
        self.dernier_tick = None;
        self.alarme = false;
        self.restant = parse_mmss(&self.entree).unwrap_or(0);
    }

    /// Avance le décompte du nombre ENTIER de secondes écoulées depuis le
    /// dernier tick. Appelé à chaque frame ; sans seconde pleine écoulée,
    /// ne fait rien.
    fn tic(&mut self) {
        if !self.en_marche {
            return;
        }
        let Some(t0) = self.dernier_tick else {
            return;
        };

        let ecoulees = t0.elapsed().as_secs();
        if ecoulees == 0 {
            return;
        }

        self.dernier_tick = Some(t0 + Duration::from_secs(ecoulees));
        self.restant = self.restant.saturating_sub(ecoulees);

        if self.restant == 0 {
            self.en_marche = false;
            self.dernier_tick = None;
            self.alarme = true;
            tracing::info!("minuteur écoulé");
        }
    }

    fn basculer(&mut self) {
        if self.en_marche {
            self.pause();
        } else {
            self.demarrer();
        }
    }

    /* ------------------------ Vue ------------------------ */

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.tic();

        // Tant que ça tourne (ou clignote), on demande des frames.
        if self.en_marche || self.alarme {
            ui.ctx().request_repaint_after(Duration::from_millis(200));
        }

        // Raccourcis : seulement si aucun champ texte ne capte le clavier.
        let clavier_libre = !ui.ctx().wants_keyboard_input();
        if clavier_libre {
            if ui.input(|i| i.key_pressed(egui::Key::Space)) {
                self.basculer();
            }
            if ui.input(|i| i.key_pressed(egui::Key::R)) {
                self.reinitialiser();
            }
        }

        ui.horizontal(|ui| {
            ui.label("Minuteur");
            ui.separator();

            ui.add_enabled(
                !self.en_marche,
                egui::TextEdit::singleline(&mut self.entree)
                    .desired_width(70.0)
                    .hint_text("MM:SS")
                    .id_source("entree_minuteur"),
            );

            ui.label(self.affichage_restant(ui));

            ui.separator();

            if ui.add_sized([72.0, 26.0], egui::Button::new("Démarrer")).clicked() {
                self.demarrer();
            }
            if ui.add_sized([72.0, 26.0], egui::Button::new("Pause")).clicked() {
                self.pause();
            }
            if ui.add_sized([72.0, 26.0], egui::Button::new("Réinit")).clicked() {
                self.reinitialiser();
            }
        });
    }

    fn affichage_restant(&self, ui: &egui::Ui) -> egui::RichText {
        let texte = egui::RichText::new(format_mmss(self.restant))
            .monospace()
            .size(20.0)
            .strong();

        if self.en_marche {
            return texte.color(egui::Color32::from_rgb(0xd9, 0x53, 0x4f));
        }

        if self.alarme {
            // clignotement : on alterne sur l'horloge de l'UI
            let phase = (ui.input(|i| i.time) * 2.0) as i64 % 2 == 0;
            if phase {
                return texte.color(egui::Color32::from_rgb(0xd9, 0x53, 0x4f));
            }
        }

        texte
    }
}
