// src/noyau/tables.rs
//
// Tables immuables du noyau : opérateurs, fonctions, constantes.
// Construites à la compilation, partagées en lecture seule entre appels (et threads).

use std::f64::consts::PI;

use super::jetons::{Genre, Jeton};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoOperateur {
    pub precedence: u8,
    pub assoc: Associativite,
}

/// Précédence du moins unaire (au-dessus de `^`).
pub const MOINS_UNAIRE: InfoOperateur = InfoOperateur {
    precedence: 5,
    assoc: Associativite::Droite,
};

/// Opérateurs binaires : symbole -> (précédence, associativité).
pub const OPERATEURS: &[(&str, InfoOperateur)] = &[
    (
        "^",
        InfoOperateur {
            precedence: 4,
            assoc: Associativite::Droite,
        },
    ),
    (
        "*",
        InfoOperateur {
            precedence: 3,
            assoc: Associativite::Gauche,
        },
    ),
    (
        "/",
        InfoOperateur {
            precedence: 3,
            assoc: Associativite::Gauche,
        },
    ),
    (
        "+",
        InfoOperateur {
            precedence: 2,
            assoc: Associativite::Gauche,
        },
    ),
    (
        "-",
        InfoOperateur {
            precedence: 2,
            assoc: Associativite::Gauche,
        },
    ),
];

/// Fonctions unaires reconnues (noms en minuscules).
pub const FONCTIONS: &[&str] = &["sin", "cos", "tan", "sqrt", "log", "ln"];

/// Constantes nommées.
pub const CONSTANTES: &[(&str, f64)] = &[("pi", PI)];

pub fn est_operateur(symbole: char) -> bool {
    let mut buf = [0u8; 4];
    let s: &str = symbole.encode_utf8(&mut buf);
    OPERATEURS.iter().any(|(sym, _)| *sym == s)
}

pub fn est_fonction(nom: &str) -> bool {
    FONCTIONS.contains(&nom)
}

pub fn valeur_constante(nom: &str) -> Option<f64> {
    CONSTANTES
        .iter()
        .find(|(n, _)| *n == nom)
        .map(|(_, v)| *v)
}

/// Précédence/associativité d’un jeton opérateur (binaire ou moins unaire).
/// `None` pour tout autre genre, ou symbole absent de la table.
pub fn info_operateur(jeton: &Jeton) -> Option<InfoOperateur> {
    match jeton.genre {
        Genre::MoinsUnaire => Some(MOINS_UNAIRE),
        Genre::Operateur => OPERATEURS
            .iter()
            .find(|(sym, _)| *sym == jeton.texte)
            .map(|(_, info)| *info),
        _ => None,
    }
}

/// Applique une fonction du jeu fixe (trigonométrie en radians, log en base 10).
pub fn appliquer_fonction(nom: &str, x: f64) -> Option<f64> {
    let v = match nom {
        "sin" => x.sin(),
        "cos" => x.cos(),
        "tan" => x.tan(),
        "sqrt" => x.sqrt(),
        "log" => x.log10(),
        "ln" => x.ln(),
        _ => return None,
    };
    Some(v)
}
