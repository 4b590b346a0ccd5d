// src/noyau/decimal.rs
//
// Décimal exact : mantisse entière × 10^exposant.
// - Aucun passage par le flottant binaire (0.1 + 0.2 vaut exactement 0.3).
// - Chaque opération arrondit son résultat à `precision` chiffres
//   significatifs, arrondi pair (banker).
// - Invariant de forme : mantisse nulle => exposant nul ; sinon la mantisse
//   n'est jamais divisible par 10. L'égalité structurelle est donc l'égalité
//   de valeur, et l'affichage n'a jamais de zéros de queue à retirer.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

/// Borne sur l'ordre de grandeur (exposant ajusté) des résultats.
/// Au-delà, l'évaluateur rejette au lieu de laisser la mantisse exploser.
pub const EXPOSANT_MAX: i64 = 999_999;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimal {
    mantisse: BigInt,
    exposant: i64,
}

fn pow10(n: u64) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Nombre de chiffres décimaux de |m| (1 pour zéro).
fn nb_chiffres(m: &BigInt) -> u64 {
    if m.is_zero() {
        1
    } else {
        m.abs().to_str_radix(10).len() as u64
    }
}

/// Retire `k` chiffres (k >= 1) d'une mantisse POSITIVE, arrondi pair.
/// `reste_bas` indique qu'une quantité non nulle existe sous les chiffres
/// retirés (division ou racine inexacte) : une demi-égalité apparente est
/// alors en réalité strictement au-dessus de la moitié.
fn retirer_chiffres(m: &BigInt, k: u64, reste_bas: bool) -> BigInt {
    let p = pow10(k);
    let haut = m / &p;
    let bas = m % &p;
    let double = &bas * BigInt::from(2);

    let monte = match double.cmp(&p) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => reste_bas || !(&haut % BigInt::from(2)).is_zero(),
    };

    if monte {
        haut + 1u32
    } else {
        haut
    }
}

/// Racine carrée entière (plancher) par itération de Newton,
/// avec ajustement final pour garantir le plancher exact.
fn racine_entiere(a: &BigInt) -> BigInt {
    if a.is_zero() {
        return BigInt::zero();
    }

    // Point de départ au-dessus de la racine.
    let mut y = pow10(nb_chiffres(a) / 2 + 1);

    loop {
        let suivant: BigInt = (&y + a / &y) >> 1;
        if suivant >= y {
            break;
        }
        y = suivant;
    }

    while &y * &y > *a {
        y -= 1u32;
    }
    while (&y + 1u32) * (&y + 1u32) <= *a {
        y += 1u32;
    }
    y
}

impl Decimal {
    /// Construit en rétablissant l'invariant de forme.
    fn nouveau(mantisse: BigInt, exposant: i64) -> Self {
        let mut m = mantisse;
        let mut e = exposant;

        if m.is_zero() {
            return Self {
                mantisse: m,
                exposant: 0,
            };
        }

        let dix = BigInt::from(10);
        while (&m % &dix).is_zero() {
            m /= &dix;
            e += 1;
        }

        Self {
            mantisse: m,
            exposant: e,
        }
    }

    pub fn zero() -> Self {
        Self::nouveau(BigInt::zero(), 0)
    }

    pub fn depuis_entier(n: i64) -> Self {
        Self::nouveau(BigInt::from(n), 0)
    }

    /// Lit un littéral décimal : chiffres avec au plus un point
    /// (`12`, `2.5`, `.5`, `5.`), signe `-` optionnel en tête.
    /// Pas de notation scientifique, pas de séparateurs de groupes.
    pub fn depuis_texte(texte: &str) -> Option<Self> {
        let t = texte.trim();
        let (negatif, corps) = match t.strip_prefix('-') {
            Some(r) => (true, r),
            None => (false, t),
        };

        let mut chiffres = String::new();
        let mut frac: usize = 0;
        let mut point_vu = false;

        for c in corps.chars() {
            if c.is_ascii_digit() {
                chiffres.push(c);
                if point_vu {
                    frac += 1;
                }
            } else if c == '.' && !point_vu {
                point_vu = true;
            } else {
                return None;
            }
        }

        if chiffres.is_empty() {
            return None;
        }

        let m = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
        let m = if negatif { -m } else { m };
        Some(Self::nouveau(m, -(frac as i64)))
    }

    pub fn mantisse(&self) -> &BigInt {
        &self.mantisse
    }

    pub fn exposant(&self) -> i64 {
        self.exposant
    }

    pub fn est_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    pub fn est_negatif(&self) -> bool {
        self.mantisse.is_negative()
    }

    /// Vrai si la valeur est entière (forme normalisée : exposant >= 0).
    pub fn est_entiere(&self) -> bool {
        self.est_zero() || self.exposant >= 0
    }

    /// Ordre de grandeur : exposant du chiffre de tête (0 pour zéro).
    pub fn exposant_ajuste(&self) -> i64 {
        if self.est_zero() {
            0
        } else {
            self.exposant + nb_chiffres(&self.mantisse) as i64 - 1
        }
    }

    /// Valeur entière en i64, si elle tient.
    pub fn vers_i64(&self) -> Option<i64> {
        if !self.est_entiere() || self.exposant > 18 {
            return None;
        }
        (&self.mantisse * pow10(self.exposant as u64)).to_i64()
    }

    pub fn negatif(&self) -> Self {
        Self {
            mantisse: -self.mantisse.clone(),
            exposant: self.exposant,
        }
    }

    /// Arrondit à `precision` chiffres significatifs (pair).
    pub fn arrondir(&self, precision: usize) -> Self {
        let prec = precision.max(1) as u64;
        let chiffres = nb_chiffres(&self.mantisse);
        if self.est_zero() || chiffres <= prec {
            return self.clone();
        }

        let k = chiffres - prec;
        let abs = retirer_chiffres(&self.mantisse.abs(), k, false);
        let m = if self.est_negatif() { -abs } else { abs };
        Self::nouveau(m, self.exposant + k as i64)
    }

    pub fn ajouter(&self, autre: &Decimal, precision: usize) -> Self {
        let e = self.exposant.min(autre.exposant);
        let ma = &self.mantisse * pow10((self.exposant - e) as u64);
        let mb = &autre.mantisse * pow10((autre.exposant - e) as u64);
        Self::nouveau(ma + mb, e).arrondir(precision)
    }

    pub fn soustraire(&self, autre: &Decimal, precision: usize) -> Self {
        self.ajouter(&autre.negatif(), precision)
    }

    pub fn multiplier(&self, autre: &Decimal, precision: usize) -> Self {
        Self::nouveau(
            &self.mantisse * &autre.mantisse,
            self.exposant + autre.exposant,
        )
        .arrondir(precision)
    }

    /// Division à `precision` chiffres significatifs, arrondi pair.
    /// `None` si le diviseur est nul.
    pub fn diviser(&self, autre: &Decimal, precision: usize) -> Option<Self> {
        if autre.est_zero() {
            return None;
        }
        if self.est_zero() {
            return Some(Self::zero());
        }

        let prec = precision.max(1) as i64;
        let negatif = self.est_negatif() != autre.est_negatif();
        let n0 = self.mantisse.abs();
        let d = autre.mantisse.abs();

        // On vise un quotient entier d'au moins prec+1 chiffres, puis on
        // arrondit en tenant compte du reste (collant).
        let mut decal = (prec + nb_chiffres(&d) as i64 - nb_chiffres(&n0) as i64 + 1).max(0);

        loop {
            let n = &n0 * pow10(decal as u64);
            let q = &n / &d;
            let r = &n % &d;
            let cq = nb_chiffres(&q) as i64;

            if !r.is_zero() && cq <= prec {
                decal += prec + 1 - cq;
                continue;
            }

            let mut exposant = self.exposant - autre.exposant - decal;
            let abs = if cq > prec {
                let k = (cq - prec) as u64;
                exposant += k as i64;
                retirer_chiffres(&q, k, !r.is_zero())
            } else {
                q
            };

            let m = if negatif { -abs } else { abs };
            return Some(Self::nouveau(m, exposant));
        }
    }

    /// Quotient entier tronqué vers zéro (sémantique décimale : -7//2 = -3).
    /// `None` si le diviseur est nul ou si le quotient dépasse `precision`
    /// chiffres (dépassement de capacité de l'opération entière).
    pub fn quotient_entier(&self, autre: &Decimal, precision: usize) -> Option<Self> {
        if autre.est_zero() {
            return None;
        }

        let e = self.exposant.min(autre.exposant);
        let a = &self.mantisse * pow10((self.exposant - e) as u64);
        let b = &autre.mantisse * pow10((autre.exposant - e) as u64);
        let q = &a / &b; // troncature vers zéro

        if !q.is_zero() && nb_chiffres(&q) > precision.max(1) as u64 {
            return None;
        }
        Some(Self::nouveau(q, 0))
    }

    /// Reste : a - (a//b)*b, signe du dividende. Exact (jamais arrondi,
    /// toujours plus étroit que le diviseur). `None` comme `quotient_entier`.
    pub fn reste(&self, autre: &Decimal, precision: usize) -> Option<Self> {
        if autre.est_zero() {
            return None;
        }

        let e = self.exposant.min(autre.exposant);
        let a = &self.mantisse * pow10((self.exposant - e) as u64);
        let b = &autre.mantisse * pow10((autre.exposant - e) as u64);
        let q = &a / &b;

        if !q.is_zero() && nb_chiffres(&q) > precision.max(1) as u64 {
            return None;
        }

        let r = a - &q * b;
        Some(Self::nouveau(r, e))
    }

    /// Puissance entière par carrés successifs, chiffres de garde puis
    /// arrondi final. `None` en cas de dépassement de l'ordre de grandeur.
    /// L'appelant garantit : base non nulle si exp <= 0.
    pub fn puissance(&self, exp: i64, precision: usize) -> Option<Self> {
        if exp == 0 {
            return Some(Self::depuis_entier(1));
        }
        if self.est_zero() {
            return Some(Self::zero());
        }

        let garde = precision + 5;
        let mut e = exp.unsigned_abs();
        let mut base = self.clone();
        let mut acc = Self::depuis_entier(1);

        while e > 0 {
            if e & 1 == 1 {
                acc = acc.multiplier(&base, garde);
                if acc.exposant_ajuste().abs() > EXPOSANT_MAX {
                    return None;
                }
            }
            e >>= 1;
            if e > 0 {
                base = base.multiplier(&base, garde);
                if base.exposant_ajuste().abs() > EXPOSANT_MAX {
                    return None;
                }
            }
        }

        if exp < 0 {
            Self::depuis_entier(1).diviser(&acc, precision)
        } else {
            Some(acc.arrondir(precision))
        }
    }

    /// Racine carrée à `precision` chiffres significatifs, arrondi pair.
    /// `None` si la valeur est négative.
    pub fn racine(&self, precision: usize) -> Option<Self> {
        if self.est_negatif() {
            return None;
        }
        if self.est_zero() {
            return Some(Self::zero());
        }

        let prec = precision.max(1) as i64;
        let cible = prec + 2;
        let cm = nb_chiffres(&self.mantisse) as i64;

        // sqrt(m·10^e) = racine_entiere(m·10^(e+s)) · 10^(-s/2),
        // avec s pair et e+s >= 0.
        let mut s = (2 * cible - cm - self.exposant).max(-self.exposant).max(0);
        if s % 2 != 0 {
            s += 1;
        }

        loop {
            let a = &self.mantisse * pow10((self.exposant + s) as u64);
            let y = racine_entiere(&a);
            let exacte = &y * &y == a;
            let cy = nb_chiffres(&y) as i64;

            if !exacte && cy <= prec {
                s += 2 * (prec + 1 - cy).max(1);
                continue;
            }

            let mut exposant = -s / 2;
            let m = if cy > prec {
                let k = (cy - prec) as u64;
                exposant += k as i64;
                retirer_chiffres(&y, k, !exacte)
            } else {
                y
            };

            return Some(Self::nouveau(m, exposant));
        }
    }
}
