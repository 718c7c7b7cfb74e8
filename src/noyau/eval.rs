//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile de valeurs -> contrôle fini -> format
//!
//! Remarque : `evaluer` est le seul endroit qui écrase les erreurs en `SIGNAL_ERREUR`.
//! Le détail reste disponible via `evaluer_detaille` et part au journal.

use tracing::{debug, warn};

use super::erreur::ErreurNoyau;
use super::format::format_resultat;
use super::jetons::{format_jetons, tokenize, Genre, Jeton};
use super::rpn::to_rpn;
use super::tables::{appliquer_fonction, valeur_constante};

/// Texte unique renvoyé pour toute erreur, quel qu’en soit le genre.
pub const SIGNAL_ERREUR: &str = "Erreur";

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub affichage: String,
    pub demarche: DemarcheNoyau,
}

/// API publique : texte d’expression -> texte de résultat (ou `SIGNAL_ERREUR`).
pub fn evaluer(expression: &str) -> String {
    evaluer_avec_demarche(expression).0
}

/// Comme `evaluer`, avec la démarche (jetons, RPN) quand l’évaluation réussit.
pub fn evaluer_avec_demarche(expression: &str) -> (String, Option<DemarcheNoyau>) {
    match evaluer_detaille(expression) {
        Ok(ev) => (ev.affichage, Some(ev.demarche)),
        Err(e) => {
            warn!(expression, erreur = %e, "évaluation impossible");
            (SIGNAL_ERREUR.to_string(), None)
        }
    }
}

/// Pipeline complet, erreurs typées conservées.
pub fn evaluer_detaille(expression: &str) -> Result<Evaluation, ErreurNoyau> {
    // 1) Jetons
    let jetons = tokenize(expression)?;
    let jetons_txt = format_jetons(&jetons);
    debug!(jetons = %jetons_txt, "scan");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_jetons(&rpn);
    debug!(rpn = %rpn_txt, "shunting-yard");

    // 3) Pile
    let valeur = evaluer_rpn(&rpn)?;

    Ok(Evaluation {
        valeur,
        affichage: format_resultat(valeur),
        demarche: DemarcheNoyau {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    })
}

/// Empile une valeur après contrôle : NaN / ±∞ interdits, même en intermédiaire.
fn empiler(pile: &mut Vec<f64>, v: f64, jeton: &Jeton) -> Result<(), ErreurNoyau> {
    if !v.is_finite() {
        return Err(ErreurNoyau::Numerique(format!(
            "{v} produit par « {} »",
            jeton.texte
        )));
    }
    pile.push(v);
    Ok(())
}

fn depiler(pile: &mut Vec<f64>, jeton: &Jeton) -> Result<f64, ErreurNoyau> {
    pile.pop().ok_or_else(|| {
        ErreurNoyau::Evaluation(format!("opérande manquant pour « {} »", jeton.texte))
    })
}

/// Évalue une RPN sur une pile de valeurs. Une seule valeur doit rester à la fin.
pub fn evaluer_rpn(rpn: &[Jeton]) -> Result<f64, ErreurNoyau> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for jeton in rpn {
        let v = match jeton.genre {
            Genre::Nombre => jeton.texte.parse::<f64>().map_err(|_| {
                ErreurNoyau::Evaluation(format!("nombre illisible « {} »", jeton.texte))
            })?,

            Genre::Constante => valeur_constante(&jeton.texte).ok_or_else(|| {
                ErreurNoyau::Evaluation(format!("constante inconnue « {} »", jeton.texte))
            })?,

            Genre::Operateur => {
                // ordre : b sort en premier
                let b = depiler(&mut pile, jeton)?;
                let a = depiler(&mut pile, jeton)?;
                match jeton.texte.as_str() {
                    "+" => a + b,
                    "-" => a - b,
                    "*" => a * b,
                    "/" => a / b,
                    "^" => a.powf(b),
                    autre => {
                        return Err(ErreurNoyau::Evaluation(format!(
                            "opérateur inconnu « {autre} »"
                        )))
                    }
                }
            }

            Genre::MoinsUnaire => -depiler(&mut pile, jeton)?,

            Genre::Fonction => {
                let x = depiler(&mut pile, jeton)?;
                appliquer_fonction(&jeton.texte, x).ok_or_else(|| {
                    ErreurNoyau::Evaluation(format!("fonction inconnue « {} »", jeton.texte))
                })?
            }

            Genre::ParG | Genre::ParD => {
                return Err(ErreurNoyau::Evaluation(
                    "parenthèse inattendue en RPN".into(),
                ))
            }
        };

        empiler(&mut pile, v, jeton)?;
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurNoyau::Evaluation(format!(
            "pile finale : {} valeur(s) au lieu d’une",
            pile.len()
        ))),
    }
}
