//! src/app/etat.rs
//!
//! État + actions de la calculatrice (sans vue, sans rendu).
//!
//! Rôle : contenir l'état de la surface calculatrice (entrée, historique,
//! dernier résultat) et porter les actions des boutons. La vue ne fait que
//! déclencher ces actions : tout est testable sans fenêtre.
//!
//! Contrat central : REJET SILENCIEUX. Quand une évaluation échoue
//! (syntaxe ou évaluation), aucune de ces méthodes ne change quoi que ce
//! soit — pas de message, l'entrée et l'affichage restent tels quels.
//! C'est un choix produit, pas un oubli.

use crate::noyau::{
    evaluer_expression, evaluer_racine, format_decimal, preparer_expression, Contexte, Decimal,
    PRECISION_DEFAUT,
};

/// Nombre de lignes conservées dans l'affichage des résultats.
const LIGNES_HISTORIQUE: usize = 3;

#[derive(Clone, Debug)]
pub struct EtatCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sortie : les dernières lignes "expr = résultat" ---
    pub historique: Vec<String>,

    // --- continuation : dernier résultat ("ans"), propriété de la surface ---
    pub dernier: Option<Decimal>,

    // --- paramètres ---
    pub contexte: Contexte,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic bouton.
    pub focus_entree: bool,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            historique: Vec::new(),
            dernier: None,
            contexte: Contexte::nouveau(PRECISION_DEFAUT),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl EtatCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Insertion clavier/pavé. Un point tapé en début de nombre
    /// (entrée vide ou juste après un opérateur) devient "0.".
    pub fn inserer(&mut self, texte: &str) {
        if texte == "." {
            let fin = self.entree.chars().last();
            if fin.is_none() || matches!(fin, Some('+' | '-' | '*' | '/')) {
                self.entree.push_str("0.");
                self.focus_entree = true;
                return;
            }
        }
        self.entree.push_str(texte);
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère de l'entrée.
    pub fn retour_arriere(&mut self) {
        self.entree.pop();
        self.focus_entree = true;
    }

    /// Efface seulement l'entrée (raccourci Échap).
    pub fn effacer_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// C : remise à zéro totale (entrée + historique + dernier résultat).
    pub fn effacer_tout(&mut self) {
        self.entree.clear();
        self.historique.clear();
        self.dernier = None;
        self.focus_entree = true;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// `=` : prépare (continuation éventuelle), évalue, pousse une ligne.
    /// Rejet => aucun changement.
    pub fn egal(&mut self) {
        let Some(expr) = preparer_expression(&self.entree, self.dernier.as_ref()) else {
            return;
        };
        let Ok(resultat) = evaluer_expression(&expr, &self.contexte) else {
            return; // rejet silencieux : entrée et affichage intacts
        };

        self.pousser_ligne(format!("{expr} = {}", format_decimal(&resultat)));
        self.dernier = Some(resultat);
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Racine carrée : entrée vide = racine du dernier résultat.
    /// Rejet (négatif, inévaluable, rien à lire) => aucun changement.
    pub fn racine_carree(&mut self) {
        let Ok((operande, racine)) =
            evaluer_racine(&self.entree, self.dernier.as_ref(), &self.contexte)
        else {
            return;
        };

        self.pousser_ligne(format!(
            "sqrt({}) = {}",
            format_decimal(&operande),
            format_decimal(&racine)
        ));
        self.dernier = Some(racine);
        self.entree.clear();
        self.focus_entree = true;
    }

    /* ------------------------ Interne ------------------------ */

    fn pousser_ligne(&mut self, ligne: String) {
        self.historique.push(ligne);
        if self.historique.len() > LIGNES_HISTORIQUE {
            self.historique.remove(0);
        }
    }
}
