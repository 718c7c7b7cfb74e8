// src/noyau/format.rs

/// Texte affiché pour un résultat fini.
///
/// - écriture décimale la plus courte qui relit la même valeur (jamais d’exposant)
/// - suffixe ".0" retiré (résultat entier => "512", pas "512.0")
/// - aucun arrondi supplémentaire
/// - -0 s’affiche "0"
pub fn format_resultat(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    let s = format!("{v}");
    match s.strip_suffix(".0") {
        Some(entier) => entier.to_string(),
        None => s,
    }
}
