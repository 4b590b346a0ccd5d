// src/noyau/eval.rs
//
// Évaluation : parcours post-ordre de l'arbre + pipeline complet
//
//   tokenize -> RPN -> Expr -> évaluation
//
// Le dispatch est un match sur l'ensemble fermé des noeuds : c'est la liste
// blanche. Un opérateur absent du match n'existe pas, il n'y a aucun chemin
// réflexif ou dynamique vers du code.
//
// Ce module porte aussi les deux points d'entrée côté appelant qui touchent
// au type numérique : la réécriture de continuation (`preparer_expression`)
// et la racine carrée (`evaluer_racine`). L'état « dernier résultat » leur
// est passé explicitement, il appartient à la surface appelante.

use super::decimal::{Decimal, EXPOSANT_MAX};
use super::expr::Expr;
use super::format::format_decimal;
use super::jetons::tokenize;
use super::rejet::Rejet;
use super::rpn::{from_rpn, to_rpn};

/// Précision par défaut : 10 chiffres significatifs.
pub const PRECISION_DEFAUT: usize = 10;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const PRECISION_MAX: usize = 100;

/// Configuration d'évaluation, immuable, passée à chaque appel.
/// Un seul champ : la précision en chiffres significatifs. Pas d'état
/// global de processus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contexte {
    pub precision: usize,
}

impl Default for Contexte {
    fn default() -> Self {
        Self {
            precision: PRECISION_DEFAUT,
        }
    }
}

impl Contexte {
    pub fn nouveau(precision: usize) -> Self {
        Self {
            precision: precision.clamp(1, PRECISION_MAX),
        }
    }
}

/// Parcours post-ordre : enfants d'abord, puis l'opération du noeud.
pub fn evaluer(expr: &Expr, ctx: &Contexte) -> Result<Decimal, Rejet> {
    let prec = ctx.precision;

    match expr {
        Expr::Num(d) => Ok(d.clone()),

        Expr::Pos(x) => evaluer(x, ctx),
        Expr::Neg(x) => Ok(evaluer(x, ctx)?.negatif()),

        Expr::Add(a, b) => Ok(evaluer(a, ctx)?.ajouter(&evaluer(b, ctx)?, prec)),
        Expr::Sub(a, b) => Ok(evaluer(a, ctx)?.soustraire(&evaluer(b, ctx)?, prec)),

        Expr::Mul(a, b) => {
            let v = evaluer(a, ctx)?.multiplier(&evaluer(b, ctx)?, prec);
            verifier_bornes(&v)?;
            Ok(v)
        }

        Expr::Div(a, b) => {
            let den = evaluer(b, ctx)?;
            let v = evaluer(a, ctx)?
                .diviser(&den, prec)
                .ok_or(Rejet::Evaluation)?; // division par zéro
            verifier_bornes(&v)?;
            Ok(v)
        }

        Expr::DivEnt(a, b) => {
            let den = evaluer(b, ctx)?;
            evaluer(a, ctx)?
                .quotient_entier(&den, prec)
                .ok_or(Rejet::Evaluation) // zéro ou quotient trop large
        }

        Expr::Mod(a, b) => {
            let den = evaluer(b, ctx)?;
            evaluer(a, ctx)?
                .reste(&den, prec)
                .ok_or(Rejet::Evaluation)
        }

        Expr::Pow(a, b) => {
            let base = evaluer(a, ctx)?;
            let exposant = evaluer(b, ctx)?;

            // L'arithmétique décimale ne définit pas de puissance
            // fractionnaire ici : exposant entier exigé.
            if !exposant.est_entiere() {
                return Err(Rejet::Evaluation);
            }
            let n = exposant.vers_i64().ok_or(Rejet::Evaluation)?;

            // 0^0 et 0^(n<0) sont indéfinis.
            if base.est_zero() && n <= 0 {
                return Err(Rejet::Evaluation);
            }

            base.puissance(n, prec).ok_or(Rejet::Evaluation)
        }
    }
}

fn verifier_bornes(d: &Decimal) -> Result<(), Rejet> {
    if d.exposant_ajuste().abs() > EXPOSANT_MAX {
        Err(Rejet::Evaluation)
    } else {
        Ok(())
    }
}

/// Pipeline complet : texte -> jetons -> RPN -> arbre -> valeur.
/// Fonction pure, sans état : l'arbre vit le temps de l'appel.
pub fn evaluer_expression(texte: &str, ctx: &Contexte) -> Result<Decimal, Rejet> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(Rejet::Syntaxe);
    }

    let resultat = tokenize(s)
        .and_then(|jetons| to_rpn(&jetons))
        .and_then(|rpn| from_rpn(&rpn))
        .and_then(|expr| evaluer(&expr, ctx));

    if let Err(rejet) = &resultat {
        tracing::trace!(%rejet, entree = s, "expression rejetée");
    }
    resultat
}

/// Continuation : une expression qui COMMENCE par un opérateur binaire
/// (+ - * /) se voit préfixer le dernier résultat formaté ("*3" après 12
/// devient "12*3"). Sans dernier résultat, seul un littéral signé
/// (+ ou - immédiatement suivi d'un chiffre) est laissé passer.
/// `None` = rien à évaluer (l'appelant ne fait rien).
pub fn preparer_expression(brut: &str, dernier: Option<&Decimal>) -> Option<String> {
    let expr = brut.trim();
    if expr.is_empty() {
        return None;
    }

    let mut it = expr.chars();
    let premier = it.next().unwrap();

    if matches!(premier, '+' | '-' | '*' | '/') {
        return match dernier {
            Some(d) => Some(format!("{}{}", format_decimal(d), expr)),
            None => {
                // littéral signé toléré : "+5", "-2.5"
                if matches!(premier, '+' | '-') && it.next().is_some_and(|c| c.is_ascii_digit()) {
                    Some(expr.to_string())
                } else {
                    None
                }
            }
        };
    }

    Some(expr.to_string())
}

/// Racine carrée : entrée vide = racine du dernier résultat, sinon
/// l'expression est évaluée telle quelle (pas de continuation ici).
/// Opérande négative rejetée. Retourne (opérande, racine) pour l'affichage.
pub fn evaluer_racine(
    brut: &str,
    dernier: Option<&Decimal>,
    ctx: &Contexte,
) -> Result<(Decimal, Decimal), Rejet> {
    let s = brut.trim();

    let operande = if s.is_empty() {
        dernier.cloned().ok_or(Rejet::Evaluation)?
    } else {
        evaluer_expression(s, ctx)?
    };

    let racine = operande
        .racine(ctx.precision)
        .ok_or(Rejet::Evaluation)?;

    Ok((operande, racine))
}
