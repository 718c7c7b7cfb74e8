// src/main.rs
//
// Calculatrice scientifique — point d’entrée
// ------------------------------------------
// - sans argument        : fenêtre native (eframe::run_native)
// - --eval "<expr>"      : évaluation sans fenêtre, résultat sur stdout
// - --demarche           : avec --eval, affiche aussi jetons + RPN
// - journal              : RUST_LOG si présent, sinon --journal (défaut "warn"), sur stderr

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (fenêtre + aide CLI).
const TITRE_APP: &str = "Calculatrice scientifique";

const TAILLE_FENETRE: [f32; 2] = [460.0, 420.0];
const TAILLE_FENETRE_MIN: [f32; 2] = [400.0, 360.0];

#[derive(Parser, Debug)]
#[command(name = "calculatrice_sci", about = TITRE_APP, version)]
struct Cli {
    /// Évalue une expression et affiche le résultat, sans ouvrir de fenêtre
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Avec --eval : affiche aussi les jetons et la RPN
    #[arg(short, long, requires = "eval")]
    demarche: bool,

    /// Filtre du journal (ignoré si RUST_LOG est défini)
    #[arg(long, value_name = "FILTRE", default_value = "warn")]
    journal: String,
}

fn installer_journal(filtre_defaut: &str) {
    let filtre =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filtre_defaut));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

fn evaluer_en_ligne(expression: &str, demarche: bool) {
    if !demarche {
        println!("{}", noyau::evaluer(expression));
        return;
    }

    let (resultat, d) = noyau::evaluer_avec_demarche(expression);
    if let Some(d) = d {
        println!("jetons : {}", d.jetons);
        println!("rpn    : {}", d.rpn);
    }
    println!("{resultat}");
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    installer_journal(&cli.journal);

    if let Some(expression) = cli.eval.as_deref() {
        evaluer_en_ligne(expression, cli.demarche);
        return Ok(());
    }

    tracing::info!("ouverture de la fenêtre");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size(TAILLE_FENETRE)
            .with_min_inner_size(TAILLE_FENETRE_MIN),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
