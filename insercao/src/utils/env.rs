// FICHIER : insercao/src/utils/env.rs

use std::env;

/// Récupère une variable d'environnement (Optionnel).
/// Renvoie `None` si la clé est manquante.
pub fn get_optional(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Récupère une variable d'environnement avec valeur par défaut.
pub fn get_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Indique si une feature flag est active (ex: "true", "1", "yes").
/// Utilisée pour le choix du backend ("sommes-nous en hébergement géré ?").
pub fn is_enabled(key: &str) -> bool {
    matches!(
        get_optional(key).as_deref(),
        Some("true") | Some("1") | Some("yes") | Some("on")
    )
}
