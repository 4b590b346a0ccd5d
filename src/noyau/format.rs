// src/noyau/format.rs

use std::fmt;

use num_traits::Signed;

use super::decimal::Decimal;

/// Chaîne décimale « plate » : jamais de notation exponentielle, jamais de
/// zéros fractionnaires de queue, les entiers sans point (`6.00` -> `6`,
/// `2.50` -> `2.5`). L'invariant de forme du type (mantisse jamais divisible
/// par 10) fait qu'il n'y a rien à élaguer ici : on ne fait que poser le
/// point au bon endroit.
pub fn format_decimal(d: &Decimal) -> String {
    if d.est_zero() {
        return "0".to_string();
    }

    let chiffres = d.mantisse().abs().to_str_radix(10);
    let e = d.exposant();

    let mut corps = if e >= 0 {
        let mut s = chiffres;
        s.push_str(&"0".repeat(e as usize));
        s
    } else {
        let frac = (-e) as usize;
        if chiffres.len() > frac {
            let (entiere, fractionnaire) = chiffres.split_at(chiffres.len() - frac);
            format!("{entiere}.{fractionnaire}")
        } else {
            format!("0.{}{}", "0".repeat(frac - chiffres.len()), chiffres)
        }
    };

    if d.est_negatif() {
        corps.insert(0, '-');
    }
    corps
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_decimal(self))
    }
}
