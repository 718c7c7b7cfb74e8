//! Noyau — erreurs internes.
//!
//! Quatre genres, jamais exposés tels quels à l’appelant :
//! `evaluer` les écrase en un seul signal, le détail part au journal.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurNoyau {
    /// Caractère ou identifiant non reconnu par le scanner.
    #[error("erreur lexicale : {raison} « {fautif} »")]
    Lexicale { raison: &'static str, fautif: String },

    /// Parenthèses non appariées.
    #[error("erreur de syntaxe : {0}")]
    Syntaxe(&'static str),

    /// Pile de valeurs incohérente, ou jeton inattendu en RPN.
    #[error("erreur d’évaluation : {0}")]
    Evaluation(String),

    /// Valeur non finie (NaN / ±∞) rencontrée pendant le calcul.
    #[error("erreur numérique : {0}")]
    Numerique(String),
}

impl ErreurNoyau {
    pub(crate) fn lexicale(raison: &'static str, fautif: impl Into<String>) -> Self {
        Self::Lexicale {
            raison,
            fautif: fautif.into(),
        }
    }
}
