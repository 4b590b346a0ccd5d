//! Noyau calculatrice — évaluation arithmétique sûre
//!
//! Organisation interne :
//! - decimal.rs : décimal exact (mantisse × 10^exposant, précision bornée)
//! - jetons.rs  : tokenisation (début de la liste blanche)
//! - rpn.rs     : shunting-yard + construction Expr
//! - expr.rs    : arbre d'expression (ensemble fermé de noeuds)
//! - eval.rs    : parcours d'évaluation + pipeline + continuation + racine
//! - format.rs  : affichage décimal plat (sans exponentielle)
//! - rejet.rs   : échec typé, silencieux côté interface
//!
//! Fonction pure de bout en bout : une chaîne entre, un `Decimal` ou un
//! `Rejet` sort. Aucun état global, aucune mise en cache d'arbre.

pub mod decimal;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod rejet;
pub mod rpn;

#[cfg(test)]
mod tests_calculatrice;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use decimal::Decimal;
pub use eval::{
    evaluer_expression, evaluer_racine, preparer_expression, Contexte, PRECISION_DEFAUT,
};
pub use format::format_decimal;
pub use rejet::Rejet;
