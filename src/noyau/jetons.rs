// src/noyau/jetons.rs

use super::erreur::ErreurNoyau;
use super::tables::{est_fonction, est_operateur, valeur_constante};

/// Genre d’un jeton. Ensemble fermé : parser et évaluateur matchent dessus exhaustivement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Nombre,
    Operateur,
    ParG,
    ParD,
    Fonction,
    Constante,
    MoinsUnaire,
}

/// Jeton = genre + lexème littéral (texte du nombre, symbole, nom en minuscules).
#[derive(Clone, Debug, PartialEq)]
pub struct Jeton {
    pub genre: Genre,
    pub texte: String,
}

impl Jeton {
    pub fn new(genre: Genre, texte: impl Into<String>) -> Self {
        Self {
            genre,
            texte: texte.into(),
        }
    }
}

/// Un `-` est unaire s’il ouvre l’expression, ou suit un opérateur, une `(` ou un autre moins unaire.
/// Décision prise sur le genre du jeton précédent seulement.
fn moins_est_unaire(precedent: Option<&Jeton>) -> bool {
    match precedent {
        None => true,
        Some(j) => matches!(j.genre, Genre::Operateur | Genre::ParG | Genre::MoinsUnaire),
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux sans exposant (ex: 12, 3.5, .5)
/// - opérateurs + - * / ^ (le `-` peut devenir moins unaire)
/// - parenthèses ( )
/// - π ou pi (insensible à la casse)
/// - fonctions sin cos tan sqrt log ln (insensibles à la casse)
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurNoyau> {
    let mut out: Vec<Jeton> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : plus longue suite de chiffres et de points
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            match texte.parse::<f64>() {
                Ok(v) if v.is_finite() => out.push(Jeton::new(Genre::Nombre, texte)),
                _ => return Err(ErreurNoyau::lexicale("nombre invalide", texte)),
            }
            continue;
        }

        if c == '(' {
            out.push(Jeton::new(Genre::ParG, "("));
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::new(Genre::ParD, ")"));
            i += 1;
            continue;
        }

        if est_operateur(c) {
            let genre = if c == '-' && moins_est_unaire(out.last()) {
                Genre::MoinsUnaire
            } else {
                Genre::Operateur
            };
            out.push(Jeton::new(genre, c.to_string()));
            i += 1;
            continue;
        }

        // π : glyphe = autre graphie de "pi"
        if c == 'π' {
            out.push(Jeton::new(Genre::Constante, "pi"));
            i += 1;
            continue;
        }

        // Identifiants : suite de lettres, normalisée en minuscules
        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() && chars[i] != 'π' {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect::<String>().to_lowercase();

            if valeur_constante(&mot).is_some() {
                out.push(Jeton::new(Genre::Constante, mot));
            } else if est_fonction(&mot) {
                out.push(Jeton::new(Genre::Fonction, mot));
            } else {
                return Err(ErreurNoyau::lexicale("identifiant inconnu", mot));
            }
            continue;
        }

        return Err(ErreurNoyau::lexicale("caractère inattendu", c));
    }

    Ok(out)
}

/// Format utilitaire (journal/“démarche”) : liste de jetons en texte.
/// Le moins unaire s’affiche `~` pour rester distinct du `-` binaire.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| match j.genre {
            Genre::MoinsUnaire => "~",
            _ => j.texte.as_str(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
