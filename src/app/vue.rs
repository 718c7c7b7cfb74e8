// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Un seul tampon : on y tape l’expression, "=" y dépose le résultat
// - Clavier : Enter évalue (quand le champ a le focus)
// - Pavé de base (4 colonnes) + pavé scientifique (2 colonnes)
// - Focus redonné au tampon après chaque clic (focus_affichage)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::tables::est_fonction;

/// Pavé de base, ligne par ligne.
const PAVE_BASE: [[&str; 4]; 5] = [
    ["AC", "Del", "(", ")"],
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

/// Pavé scientifique, ligne par ligne.
const PAVE_SCIENTIFIQUE: [[&str; 2]; 4] = [
    ["sin", "cos"],
    ["tan", "sqrt"],
    ["log", "ln"],
    ["^", "π"],
];

const TAILLE_TOUCHE: [f32; 2] = [56.0, 36.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice scientifique");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            self.ui_pave_base(ui);
            ui.separator();
            self.ui_pave_scientifique(ui);
        });

        ui.add_space(8.0);
        ui.separator();

        self.ui_demarche(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2*sin(pi/4) + sqrt(2)")
                .id_salt("affichage_edit")
                .font(egui::TextStyle::Monospace),
        );

        if self.focus_affichage {
            resp.request_focus();
            self.focus_affichage = false;
        }

        // Enter fait perdre le focus au champ mono-ligne dans la même frame
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter && (resp.has_focus() || resp.lost_focus()) {
            self.valider();
        }
    }

    fn ui_pave_base(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_base")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE_BASE {
                    for libelle in ligne {
                        self.touche(ui, libelle);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE_SCIENTIFIQUE {
                    for libelle in ligne {
                        self.touche(ui, libelle);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.label(format!("Expression : {}", self.derniere_expression));
                match &self.demarche {
                    Some(d) => {
                        ui.monospace(format!("Jetons : {}", d.jetons));
                        ui.monospace(format!("RPN    : {}", d.rpn));
                    }
                    None => {
                        ui.monospace("indisponible");
                    }
                }
            });
    }

    fn touche(&mut self, ui: &mut egui::Ui, libelle: &str) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(libelle));
        if !resp.clicked() {
            return;
        }

        match libelle {
            "AC" => self.effacer(),
            "Del" => self.supprimer_dernier(),
            "=" => self.valider(),
            f if est_fonction(f) => self.ajouter_fonction(f),
            autre => self.ajouter(autre),
        }
    }
}
