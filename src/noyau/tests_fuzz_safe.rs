//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - les seuls échecs admis sont des `Rejet` (jamais de panique)
//! - invariants clés : affichage jamais exponentiel, jamais de zéro
//!   fractionnaire de queue, et ré-évaluer un résultat formaté redonne
//!   exactement la même chaîne

use std::time::{Duration, Instant};

use super::{evaluer_expression, format_decimal, Contexte, Rejet};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}", rng.pick(1000)),
        3 => "0.1".to_string(),
        4 => "2.5".to_string(),
        _ => format!("{}.{}", rng.pick(10), rng.pick(100)),
    }
}

/// Dénominateur : parfois un zéro littéral, pour garantir que le fuzz
/// traverse aussi les chemins de rejet (division par zéro).
fn gen_denominateur(rng: &mut Rng, depth: usize) -> String {
    if rng.pick(5) == 0 {
        "0".to_string()
    } else {
        gen_expr(rng, depth)
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(10) {
        0 => gen_nombre(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_denominateur(rng, depth - 1)),
        5 => format!("({}//{})", gen_expr(rng, depth - 1), gen_denominateur(rng, depth - 1)),
        6 => format!("({}%{})", gen_expr(rng, depth - 1), gen_denominateur(rng, depth - 1)),
        7 => {
            // exposant entier petit, pour rester dans le domaine utile
            format!("({}^{})", gen_expr(rng, depth - 1), rng.pick(6))
        }
        8 => format!("-({})", gen_expr(rng, depth - 1)),
        _ => {
            if rng.coin() {
                format!("+{}", gen_nombre(rng))
            } else {
                gen_nombre(rng)
            }
        }
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants_affichage(expr: &str, affiche: &str, ctx: &Contexte) {
    assert!(
        !affiche.contains('e') && !affiche.contains('E'),
        "notation exponentielle interdite: {expr:?} -> {affiche:?}"
    );
    if affiche.contains('.') {
        assert!(
            !affiche.ends_with('0') && !affiche.ends_with('.'),
            "zéro de queue: {expr:?} -> {affiche:?}"
        );
    }

    // Idempotence : re-parcourir le résultat formaté ne change rien.
    let relu = evaluer_expression(affiche, ctx)
        .unwrap_or_else(|e| panic!("résultat non relisible: {affiche:?} ({e})"));
    assert_eq!(
        format_decimal(&relu),
        affiche,
        "dérive de précision: {expr:?}"
    );
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);
    let ctx = Contexte::default();

    let mut seen_ok = 0usize;
    let mut seen_rejet = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match evaluer_expression(&expr, &ctx) {
            Ok(v) => {
                check_invariants_affichage(&expr, &format_decimal(&v), &ctx);
                seen_ok += 1;
            }
            Err(Rejet::Syntaxe | Rejet::Evaluation) => {
                // attendu : division par zéro, 0^0, quotient trop large…
                seen_rejet += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne « balaye » rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_rejet > 0, "aucun rejet vu: fuzz trop « sage »");
}

#[test]
fn fuzz_safe_entrees_hostiles() {
    let ctx = Contexte::default();

    // Aucune de ces chaînes ne doit passer la grammaire : la liste blanche
    // est une frontière de sécurité, pas un détail d'implémentation.
    let hostiles = [
        "__import__('os')",
        "import os",
        "eval(1)",
        "exec('x')",
        "open('/etc/passwd')",
        "a+1",
        "x",
        "1;2",
        "1 if 2 else 3",
        "lambda: 1",
        "'abc'",
        "2<3",
        "2==2",
        "1|2",
        "1&2",
        "~1",
        "0x10",
        "1e10",
        "1_000",
    ];

    for s in hostiles {
        assert_eq!(
            evaluer_expression(s, &ctx),
            Err(Rejet::Syntaxe),
            "aurait dû être un rejet de syntaxe: {s:?}"
        );
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let expr = somme_balancee("1", 512);
    budget(t0, max);

    let ctx = Contexte::default();
    let v = evaluer_expression(&expr, &ctx).unwrap_or_else(|e| panic!("rejet: {e}"));
    assert_eq!(format_decimal(&v), "512");
}
