// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix), sans construire d’arbre
//
// Règles:
// - Nombre / Constante : sortie directe
// - Fonction : empilée, sortie juste après la parenthèse fermante de son argument
// - Opérateur / MoinsUnaire : dépile tant que la précédence l’exige
//   (`^` et moins unaire associatifs à droite, le reste à gauche)
//
// NOTE:
// - Une fonction au sommet de pile bloque le dépilement par un opérateur.

use super::erreur::ErreurNoyau;
use super::jetons::{Genre, Jeton};
use super::tables::{info_operateur, Associativite};

const PARENTHESES: &str = "parenthèses non appariées";

/// Vrai si `haut` (sommet de pile) doit sortir avant d’empiler `op`.
fn doit_depiler(op: &Jeton, haut: &Jeton) -> bool {
    let (Some(p1), Some(p2)) = (info_operateur(op), info_operateur(haut)) else {
        return false;
    };
    match p1.assoc {
        Associativite::Droite => p1.precedence < p2.precedence,
        Associativite::Gauche => p1.precedence <= p2.precedence,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [sin, (, pi, /, 2, )]
///   rpn:    [pi, 2, /, sin]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurNoyau> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton.genre {
            Genre::Nombre | Genre::Constante => out.push(jeton),

            Genre::Fonction | Genre::ParG => ops.push(jeton),

            Genre::Operateur | Genre::MoinsUnaire => {
                while let Some(haut) = ops.last() {
                    if !matches!(haut.genre, Genre::Operateur | Genre::MoinsUnaire)
                        || !doit_depiler(&jeton, haut)
                    {
                        break;
                    }
                    if let Some(haut) = ops.pop() {
                        out.push(haut);
                    }
                }
                ops.push(jeton);
            }

            Genre::ParD => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        None => return Err(ErreurNoyau::Syntaxe(PARENTHESES)),
                        Some(haut) if haut.genre == Genre::ParG => break,
                        Some(haut) => out.push(haut),
                    }
                }

                // fonction au sommet : elle s’attache à l’argument qu’on vient de fermer
                if ops.last().is_some_and(|haut| haut.genre == Genre::Fonction) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op.genre, Genre::ParG | Genre::ParD) {
            return Err(ErreurNoyau::Syntaxe(PARENTHESES));
        }
        out.push(op);
    }

    Ok(out)
}
