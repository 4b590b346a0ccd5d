// src/noyau/rejet.rs

use thiserror::Error;

/// Échec terminal d'une tentative d'évaluation.
///
/// Volontairement sans charge utile : l'interface ne montre AUCUN message
/// en cas de rejet (l'entrée et l'affichage restent tels quels). Le type
/// reste distingué en deux familles pour les tests.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejet {
    /// Jeton hors grammaire, parenthésage invalide, entrée vide ou mal formée.
    #[error("syntaxe rejetée")]
    Syntaxe,

    /// Division par zéro, exposant non entier, dépassement de capacité.
    #[error("évaluation rejetée")]
    Evaluation,
}
