// FICHIER : insercao/src/utils/macros.rs

/// Affiche une info à l'utilisateur et logue l'événement
#[macro_export]
macro_rules! user_info {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        println!("{}", msg);
        tracing::info!(event = "user_notification", message = %msg);
    }};
}

/// Affiche un succès (vert) à l'utilisateur
#[macro_export]
macro_rules! user_success {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        println!("✅ {}", msg);
        tracing::info!(event = "user_success", message = %msg);
    }};
}

/// Affiche une erreur à l'utilisateur ET logue l'événement technique
#[macro_export]
macro_rules! user_error {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        eprintln!("❌ {}", msg);
        tracing::error!(event = "user_error", message = %msg);
    }};
}

// --- TESTS UNITAIRES ---
#[cfg(test)]
mod tests {
    use crate::utils::error::AppError;

    #[test]
    fn test_macros_accept_format_args() {
        user_info!("Collection chargée : {} enregistrement(s)", 3);
        user_success!("Resposta registrada");

        let sim_err = AppError::Config("Fichier corrompu".to_string());
        user_error!("Échec de la sauvegarde : {}", sim_err);
    }
}
