// src/noyau/expr.rs
//
// Arbre d'expression arithmétique — ensemble FERMÉ de noeuds.
// Trois familles seulement : littéral numérique, opération binaire,
// opération unaire. Ni variable, ni appel, ni identifiant : la grammaire
// ne peut pas les représenter, l'évaluateur n'a donc rien à filtrer.
// L'arbre est construit à chaque évaluation puis jeté, jamais mis en cache.

use super::decimal::Decimal;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Num(Decimal),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    DivEnt(Box<Expr>, Box<Expr>), // division entière //
    Mod(Box<Expr>, Box<Expr>),    // reste %
    Pow(Box<Expr>, Box<Expr>),    // ^ (exposant entier exigé à l'évaluation)

    Neg(Box<Expr>), // -x
    Pos(Box<Expr>), // +x (identité)
}
