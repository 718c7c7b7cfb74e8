//! Tests scientifiques (campagne) : propriétés observables de `evaluer`.
//!
//! - précédence / associativité
//! - moins unaire vs binaire
//! - fonctions, constante π
//! - erreurs : toujours le même signal, jamais "NaN" / "inf"
//! - idempotence : réévaluer un résultat numérique le redonne tel quel

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use super::eval::{evaluer, SIGNAL_ERREUR};

fn assert_eval(expr: &str, attendu: &str) {
    assert_eq!(evaluer(expr), attendu, "expr={expr:?}");
}

fn assert_erreur(expr: &str) {
    assert_eq!(evaluer(expr), SIGNAL_ERREUR, "expr={expr:?}");
}

fn assert_proche(expr: &str, attendu: f64) {
    let s = evaluer(expr);
    let v: f64 = s
        .parse()
        .unwrap_or_else(|_| panic!("expr={expr:?} sortie non numérique: {s:?}"));
    assert!(
        (v - attendu).abs() < 1e-12,
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn sci_precedence() {
    assert_eval("3+4*2", "11");
    assert_eval("(3+4)*2", "14");
    assert_eval("10-4-3", "3");
    assert_eval("100/10/5", "2");
    assert_eval("2*3+4*5", "26");
    assert_eval(" 7 /  2 ", "3.5");
}

#[test]
fn sci_puissance_a_droite() {
    assert_eval("2^3^2", "512");
    assert_eval("(2^3)^2", "64");
    assert_eval("2^-1", "0.5");
}

#[test]
fn sci_moins_unaire_et_binaire() {
    assert_eval("-5+3", "-2");
    assert_eval("3-5", "-2");
    assert_eval("-(3+4)", "-7");
    assert_eval("--5", "5");
    assert_eval("---5", "-5");
    assert_eval("3--2", "5");
    assert_eval("2*-3", "-6");
    // moins unaire lie plus fort que ^
    assert_eval("-2^2", "4");
}

#[test]
fn sci_fonctions() {
    assert_eval("sin(0)", "0");
    assert_eval("cos(0)", "1");
    assert_eval("tan(0)", "0");
    assert_eval("sqrt(16)", "4");
    assert_eval("log(1000)", "3");
    assert_eval("ln(1)", "0");
    assert_eval("2*sqrt(9)+1", "7");
    assert_eval("SQRT(4)", "2");
    assert_proche("sin(pi/2)", 1.0);
    assert_proche("ln(2)", 2f64.ln());
}

#[test]
fn sci_constante_pi() {
    let s = evaluer("2*pi");
    assert_eq!(s, format!("{}", 2.0 * PI));
    assert!(!s.ends_with(".0"));
    assert_eq!(evaluer("2*π"), s);
    assert_eq!(evaluer("PI"), evaluer("π"));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs_propres() {
    assert_erreur("foo(1)");
    assert_erreur("5/0");
    assert_erreur("(3+4");
    assert_erreur("3+4)");
    assert_erreur("");
    assert_erreur("2 # 2");
    assert_erreur("1.2.3");
    assert_erreur("2 pi");
    assert_erreur("*");
}

#[test]
fn sci_litteraux_hors_grammaire() {
    // pas d’exposant, pas de multiplication implicite
    assert_erreur("1e5");
    assert_erreur("2(3)");
    // littéral qui déborde f64
    assert_erreur(&format!("1{}", "0".repeat(400)));
}

#[test]
fn sci_jamais_nan_ni_infini() {
    for expr in [
        "sqrt(-1)",
        "ln(0)",
        "log(-5)",
        "0/0",
        "10^400",
        "-(10^400)",
        "1/(1/0)",
        "(0-1)^0.5",
    ] {
        let s = evaluer(expr);
        assert_eq!(s, SIGNAL_ERREUR, "expr={expr:?}");
        let bas = s.to_lowercase();
        assert!(!bas.contains("nan") && !bas.contains("inf"));
    }
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["3+4*2", "2*pi", "10^300", "1/3", "0.1+0.2", "10^20", "1/1024", "sqrt(2)"] {
        let premier = evaluer(expr);
        assert_ne!(premier, SIGNAL_ERREUR, "expr={expr:?}");
        assert_eq!(evaluer(&premier), premier, "expr={expr:?}");
    }
}

#[test]
fn sci_idempotence_negatif() {
    // "-2" se relit comme moins unaire + 2
    let premier = evaluer("3-5");
    assert_eq!(premier, "-2");
    assert_eq!(evaluer(&premier), premier);
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = vec!["1"; 2000].join("+");
    assert_eval(&expr, "2000");
    budget(t0, max);
}

#[test]
fn sci_stress_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // pas de récursion dans le noyau : 500 niveaux ne posent pas de problème de pile
    let n = 500;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eval(&expr, "1");

    let negations = format!("{}7", "-".repeat(n));
    assert_eval(&negations, "7");
    budget(t0, max);
}
