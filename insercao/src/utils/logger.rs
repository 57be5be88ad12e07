// FICHIER : insercao/src/utils/logger.rs

use crate::utils::env;
use std::sync::Once;
use tracing_appender::rolling;
use tracing_subscriber::{
    filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

// Sécurité pour éviter la double initialisation (crash fréquent en tests)
static INIT: Once = Once::new();

/// Initialise le logging global : console compacte pour l'humain,
/// fichier JSON journalier si `INSERCAO_LOG_DIR` est défini.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        // Filtre anti-doublon : les macros user_* émettent déjà sur stdout,
        // on ne ré-affiche pas leurs événements dans la couche console.
        let anti_double_filter =
            filter_fn(|metadata| !metadata.fields().iter().any(|f| f.name() == "event"));

        let console_layer = fmt::layer()
            .compact()
            .with_target(false)
            .with_filter(env_filter)
            .with_filter(anti_double_filter);

        let file_layer = env::get_optional("INSERCAO_LOG_DIR").map(|dir| {
            std::fs::create_dir_all(&dir).ok();
            let file_appender = rolling::daily(&dir, "insercao.log");
            fmt::layer()
                .json()
                .with_writer(file_appender)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
        });

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        if registry.try_init().is_err() {
            tracing::warn!(
                "⚠️ [Logger] Tentative de ré-initialisation ignorée (subscriber déjà actif)."
            );
        }
    });
}
