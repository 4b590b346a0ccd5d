// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> Expr
//
// Règles :
// - Priorités (du plus faible au plus fort) : + - ; * / // % ; ^ ; unaires.
//   ^ et les unaires sont associatifs à droite, le reste à gauche.
// - `+` / `-` rencontrés là où on n'attend PAS une valeur deviennent des
//   jetons unaires dédiés (MoinsUnaire / PlusUnaire) : l'arbre final porte
//   de vrais noeuds unaires.
// - `prev_was_value` sert aussi de contrôle de forme : deux valeurs
//   adjacentes ("2 3", "2(3)"), un opérateur binaire sans opérande gauche
//   ("*3") ou une expression finissant sur un opérateur ("1+") sont des
//   rejets de syntaxe.

use super::expr::Expr;
use super::jetons::Tok;
use super::rejet::Rejet;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::SlashSlash | Tok::Percent => 2,
        Tok::Caret => 3,
        Tok::MoinsUnaire | Tok::PlusUnaire => 4,
        _ => 0,
    }
}

fn est_assoc_droite(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::MoinsUnaire | Tok::PlusUnaire)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple :
///   jetons : [Num(2), Caret, Minus, Num(3)]
///   rpn    : [Num(2), Num(3), MoinsUnaire, Caret]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, Rejet> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(Rejet::Syntaxe); // deux valeurs adjacentes
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(Rejet::Syntaxe); // "2(3)" : pas d'appel implicite
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(Rejet::Syntaxe); // "()" ou "(1+)"
                }
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(Rejet::Syntaxe); // ')' orpheline
                }
                prev_was_value = true;
            }

            // Position préfixe : + / - deviennent unaires. Rien ne lie plus
            // fort qu'eux, on empile sans dépiler.
            Tok::Plus | Tok::Minus if !prev_was_value => {
                let unaire = if matches!(tok, Tok::Minus) {
                    Tok::MoinsUnaire
                } else {
                    Tok::PlusUnaire
                };
                ops.push(unaire);
                prev_was_value = false;
            }

            Tok::Plus
            | Tok::Minus
            | Tok::Star
            | Tok::Slash
            | Tok::SlashSlash
            | Tok::Percent
            | Tok::Caret => {
                if !prev_was_value {
                    return Err(Rejet::Syntaxe); // opérande gauche manquante
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if est_assoc_droite(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            // Jamais produits par le tokenizer.
            Tok::MoinsUnaire | Tok::PlusUnaire => return Err(Rejet::Syntaxe),
        }
    }

    // Entrée vide ou finissant sur un opérateur / une parenthèse ouvrante.
    if !prev_was_value {
        return Err(Rejet::Syntaxe);
    }

    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(Rejet::Syntaxe); // parenthèse non fermée
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d'une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, Rejet> {
    let mut pile: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(d) => pile.push(Expr::Num(d)),

            Tok::MoinsUnaire | Tok::PlusUnaire => {
                let x = pile.pop().ok_or(Rejet::Syntaxe)?;
                let e = if matches!(tok, Tok::MoinsUnaire) {
                    Expr::Neg(Box::new(x))
                } else {
                    Expr::Pos(Box::new(x))
                };
                pile.push(e);
            }

            Tok::Plus
            | Tok::Minus
            | Tok::Star
            | Tok::Slash
            | Tok::SlashSlash
            | Tok::Percent
            | Tok::Caret => {
                let b = pile.pop().ok_or(Rejet::Syntaxe)?;
                let a = pile.pop().ok_or(Rejet::Syntaxe)?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    Tok::SlashSlash => Expr::DivEnt(Box::new(a), Box::new(b)),
                    Tok::Percent => Expr::Mod(Box::new(a), Box::new(b)),
                    Tok::Caret => Expr::Pow(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };
                pile.push(e);
            }

            Tok::LPar | Tok::RPar => return Err(Rejet::Syntaxe),
        }
    }

    if pile.len() != 1 {
        return Err(Rejet::Syntaxe);
    }
    Ok(pile.pop().unwrap())
}
