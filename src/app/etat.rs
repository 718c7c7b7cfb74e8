//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir le tampon d’affichage de la calculatrice et offrir les éditions
//! déclenchées par boutons/clavier (AC, Del, ajout, préfixe de fonction, "=").
//!
//! Contrats :
//! - Aucun parsing ici : le seul appel au noyau passe par `valider`.
//! - Le résultat remplace le tampon tel quel, signal d’erreur compris.

use crate::noyau::{evaluer_avec_demarche, DemarcheNoyau};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- tampon partagé entrée / résultat ---
    pub affichage: String,

    // --- dernière évaluation (panneau “Démarche”) ---
    pub derniere_expression: String,
    pub demarche: Option<DemarcheNoyau>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus au tampon après un clic sur un bouton.
    pub focus_affichage: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: String::new(),
            derniere_expression: String::new(),
            demarche: None,
            focus_affichage: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// AC : vide le tampon.
    pub fn effacer(&mut self) {
        self.affichage.clear();
        self.focus_affichage = true;
    }

    /// Del : retire le dernier caractère.
    pub fn supprimer_dernier(&mut self) {
        self.affichage.pop();
        self.focus_affichage = true;
    }

    /// Ajoute un littéral tel quel (chiffre, opérateur, parenthèse, π).
    pub fn ajouter(&mut self, litteral: &str) {
        self.affichage.push_str(litteral);
        self.focus_affichage = true;
    }

    /// Ajoute un nom de fonction suivi de sa parenthèse ouvrante : "sin(".
    pub fn ajouter_fonction(&mut self, nom: &str) {
        self.affichage.push_str(nom);
        self.affichage.push('(');
        self.focus_affichage = true;
    }

    /// "=" / Entrée : évalue le tampon et le remplace par le résultat.
    pub fn valider(&mut self) {
        let expression = std::mem::take(&mut self.affichage);
        let (resultat, demarche) = evaluer_avec_demarche(&expression);

        self.affichage = resultat;
        self.demarche = demarche;
        self.derniere_expression = expression;
        self.focus_affichage = true;
    }
}
