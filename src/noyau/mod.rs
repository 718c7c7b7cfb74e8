//! Noyau scientifique (f64)
//!
//! Organisation interne :
//! - tables.rs   : opérateurs (précédence/associativité), fonctions, constantes
//! - erreur.rs   : les quatre genres d’erreur du pipeline
//! - jetons.rs   : tokenisation (moins unaire décidé au scan)
//! - rpn.rs      : shunting-yard
//! - eval.rs     : pile RPN + pipeline complet
//! - format.rs   : texte du résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod tables;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use eval::{evaluer, evaluer_avec_demarche, DemarcheNoyau};
