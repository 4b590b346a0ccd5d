// src/noyau/jetons.rs

use super::decimal::Decimal;
use super::rejet::Rejet;

/// Jetons de la grammaire arithmétique. C'est ici que commence la liste
/// blanche : tout caractère hors chiffres / point / opérateurs / parenthèses
/// est rejeté immédiatement — pas de branche identifiant, pas de fonctions,
/// rien d'exécutable ne peut passer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(Decimal),

    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash, // division entière //
    Percent,    // modulo %
    Caret,      // puissance : ^ et ** confondus dès la tokenisation

    // Injectés par l'analyse syntaxique (jamais par le tokenizer).
    MoinsUnaire,
    PlusUnaire,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte :
/// - littéraux décimaux : `12`, `2.5`, `.5`, `5.` (un seul point, pas de
///   notation scientifique, pas de séparateurs)
/// - opérateurs + - * / // % ^ (et ** comme synonyme de ^)
/// - parenthèses ( )
/// - espaces entre jetons (ignorés)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, Rejet> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Tok::Caret);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                if i + 1 < chars.len() && chars[i + 1] == '/' {
                    out.push(Tok::SlashSlash);
                    i += 2;
                } else {
                    out.push(Tok::Slash);
                    i += 1;
                }
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Littéral décimal : chiffres avec au plus un point.
        if c.is_ascii_digit() || c == '.' {
            let debut = i;
            let mut chiffre_vu = false;
            let mut point_vu = false;

            while i < chars.len() {
                let cc = chars[i];
                if cc.is_ascii_digit() {
                    chiffre_vu = true;
                    i += 1;
                } else if cc == '.' && !point_vu {
                    point_vu = true;
                    i += 1;
                } else {
                    break;
                }
            }

            // "." seul n'est pas un nombre
            if !chiffre_vu {
                return Err(Rejet::Syntaxe);
            }

            let litteral: String = chars[debut..i].iter().collect();
            let d = Decimal::depuis_texte(&litteral).ok_or(Rejet::Syntaxe)?;
            out.push(Tok::Num(d));
            continue;
        }

        // Tout le reste (lettres, guillemets, `;`, comparaisons, etc.)
        return Err(Rejet::Syntaxe);
    }

    Ok(out)
}
