//! Tests bout-en-bout du pipeline calculatrice :
//! texte -> jetons -> RPN -> arbre -> valeur -> affichage.
//!
//! Les chaînes attendues sont épinglées pour la précision par défaut
//! (10 chiffres significatifs, arrondi pair).

use pretty_assertions::assert_eq;

use super::{
    evaluer_expression, evaluer_racine, format_decimal, preparer_expression, Contexte, Decimal,
    Rejet,
};

fn ctx() -> Contexte {
    Contexte::default()
}

fn calc(s: &str) -> String {
    let v = evaluer_expression(s, &ctx())
        .unwrap_or_else(|e| panic!("evaluer_expression({s:?}) rejet: {e}"));
    format_decimal(&v)
}

fn rejet(s: &str) -> Rejet {
    evaluer_expression(s, &ctx())
        .err()
        .unwrap_or_else(|| panic!("evaluer_expression({s:?}) aurait dû être rejetée"))
}

fn d(s: &str) -> Decimal {
    Decimal::depuis_texte(s).unwrap()
}

// --- Arithmétique de base ---

#[test]
fn operations_elementaires() {
    assert_eq!(calc("1+2"), "3");
    assert_eq!(calc("10-4.5"), "5.5");
    assert_eq!(calc("6*7"), "42");
    assert_eq!(calc("9/4"), "2.25");
}

#[test]
fn priorites_usuelles() {
    assert_eq!(calc("1+2*3"), "7");
    assert_eq!(calc("(1+2)*3"), "9");
    assert_eq!(calc("8/4*3"), "6"); // gauche vers droite
    assert_eq!(calc("10-2-3"), "5");
    assert_eq!(calc("7%4*2"), "6"); // % au même niveau que *
}

#[test]
fn puissance_assoc_droite() {
    assert_eq!(calc("2^3^2"), "512");
    assert_eq!(calc("2**10"), "1024");
    assert_eq!(calc("2^10"), "1024");
}

#[test]
fn unaires() {
    assert_eq!(calc("-5"), "-5");
    assert_eq!(calc("+5"), "5");
    assert_eq!(calc("--5"), "5");
    assert_eq!(calc("-(1+2)"), "-3");
    // l'unaire lie plus fort que la puissance
    assert_eq!(calc("-2^2"), "4");
    assert_eq!(calc("2^-3"), "0.125");
}

// --- Exactitude décimale ---

#[test]
fn pas_d_artefact_flottant() {
    assert_eq!(calc("0.1+0.2"), "0.3");
    assert_eq!(calc("1.1*1.1"), "1.21");
    assert_eq!(calc("0.3-0.1"), "0.2");
}

#[test]
fn division_dix_chiffres_significatifs() {
    assert_eq!(calc("1/3"), "0.3333333333");
    assert_eq!(calc("2/3"), "0.6666666667");
    // significatifs, pas décimales
    assert_eq!(calc("1000/3"), "333.3333333");
}

#[test]
fn affichage_sans_queue() {
    assert_eq!(calc("6.00"), "6");
    assert_eq!(calc("2.50"), "2.5");
    assert_eq!(calc("3.0*2.0"), "6");
}

#[test]
fn grande_puissance_arrondie() {
    // 2^64 = 18446744073709551616, arrondi à 10 chiffres
    assert_eq!(calc("2^64"), "18446744070000000000");
}

// --- Division entière et modulo ---

#[test]
fn division_entiere_tronquee() {
    assert_eq!(calc("7//2"), "3");
    assert_eq!(calc("-7//2"), "-3"); // troncature vers zéro, pas plancher
    assert_eq!(calc("7.5//2"), "3");
}

#[test]
fn modulo_signe_du_dividende() {
    assert_eq!(calc("7%2"), "1");
    assert_eq!(calc("-7%2"), "-1");
    assert_eq!(calc("7.5%2"), "1.5");
}

// --- Rejets d'évaluation ---

#[test]
fn division_par_zero_rejetee() {
    assert_eq!(rejet("1/0"), Rejet::Evaluation);
    assert_eq!(rejet("7//0"), Rejet::Evaluation);
    assert_eq!(rejet("5%0"), Rejet::Evaluation);
    assert_eq!(rejet("1/(2-2)"), Rejet::Evaluation);
}

#[test]
fn exposant_fractionnaire_rejete() {
    assert_eq!(rejet("2^0.5"), Rejet::Evaluation);
    assert_eq!(rejet("2^(1/3)"), Rejet::Evaluation);
    // mais un exposant qui S'ÉVALUE entier passe
    assert_eq!(calc("2^(4/2)"), "4");
}

#[test]
fn zero_puissance_indefinie() {
    assert_eq!(rejet("0^0"), Rejet::Evaluation);
    assert_eq!(rejet("0^-1"), Rejet::Evaluation);
}

#[test]
fn depassement_ordre_de_grandeur() {
    assert_eq!(rejet("10^1000000"), Rejet::Evaluation);
}

// --- Rejets de syntaxe (liste blanche) ---

#[test]
fn jetons_hors_grammaire() {
    assert_eq!(rejet("__import__('os')"), Rejet::Syntaxe);
    assert_eq!(rejet("a+1"), Rejet::Syntaxe);
    assert_eq!(rejet("1;2"), Rejet::Syntaxe);
    assert_eq!(rejet("2<3"), Rejet::Syntaxe);
    assert_eq!(rejet("1e3"), Rejet::Syntaxe);
    assert_eq!(rejet("sqrt(4)"), Rejet::Syntaxe);
}

#[test]
fn formes_malformees() {
    assert_eq!(rejet(""), Rejet::Syntaxe);
    assert_eq!(rejet("   "), Rejet::Syntaxe);
    assert_eq!(rejet("1+"), Rejet::Syntaxe);
    assert_eq!(rejet("(1+2"), Rejet::Syntaxe);
    assert_eq!(rejet("1 2"), Rejet::Syntaxe);
    assert_eq!(rejet("*3"), Rejet::Syntaxe);
}

// --- Continuation ---

#[test]
fn continuation_multiplie_le_dernier_resultat() {
    let douze = d("12");
    let expr = preparer_expression("*3", Some(&douze)).unwrap();
    assert_eq!(expr, "12*3");
    assert_eq!(calc(&expr), "36");
}

#[test]
fn continuation_sans_dernier_resultat() {
    assert_eq!(preparer_expression("*3", None), None);
    // littéral signé accepté
    let expr = preparer_expression("+5", None).unwrap();
    assert_eq!(calc(&expr), "5");
}

#[test]
fn continuation_apres_resultat_negatif() {
    let moins_trois = d("-3");
    let expr = preparer_expression("*2", Some(&moins_trois)).unwrap();
    assert_eq!(expr, "-3*2");
    assert_eq!(calc(&expr), "-6");
}

// --- Racine carrée ---

#[test]
fn racine_d_une_expression() {
    let (operande, racine) = evaluer_racine("6.25", None, &ctx()).unwrap();
    assert_eq!(format_decimal(&operande), "6.25");
    assert_eq!(format_decimal(&racine), "2.5");
}

#[test]
fn racine_de_deux() {
    let (_, racine) = evaluer_racine("2", None, &ctx()).unwrap();
    assert_eq!(format_decimal(&racine), "1.414213562");
}

#[test]
fn racine_rejets() {
    assert_eq!(evaluer_racine("-4", None, &ctx()), Err(Rejet::Evaluation));
    assert_eq!(evaluer_racine("a", None, &ctx()), Err(Rejet::Syntaxe));
    assert_eq!(evaluer_racine("", None, &ctx()), Err(Rejet::Evaluation));
}

// --- Stabilité au re-parcours ---

#[test]
fn format_idempotent_au_reparcours() {
    // réinjecter un résultat formaté redonne exactement la même chaîne :
    // pas de dérive de précision au fil des continuations
    for s in ["1/3", "2/3", "10/7", "1.5*1.5", "2^0.5+0", "-7//2"] {
        let Ok(v) = evaluer_expression(s, &ctx()) else {
            continue;
        };
        let une_fois = format_decimal(&v);
        assert_eq!(calc(&une_fois), une_fois, "dérive sur {s:?}");
    }
}
