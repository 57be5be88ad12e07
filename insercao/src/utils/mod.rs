// FICHIER : insercao/src/utils/mod.rs

// =========================================================================
//  INSERCAO UTILS - Foundation Layer
// =========================================================================

// --- 1. MODULES INTERNES ---

pub mod env;
pub mod error;
pub mod fs;
pub mod json;
pub mod logger;
pub mod macros;
pub mod net;

// --- 2. FAÇADES SÉMANTIQUES ---
// Points d'entrée que le code applicatif (store, form, CLI) utilise.

/// **Core Foundation** : Types de base et Erreurs.
pub mod core {
    pub use super::error::{AppError, Result};
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;
}

/// **Physical Layer (I/O)** : Accès disque sécurisé (Atomicité).
pub mod io {
    pub use super::fs::{
        ensure_dir, exists, read_json, read_to_string, tempdir, write_atomic,
        write_json_atomic, Path, PathBuf, TempDir,
    };
}

/// **Data Abstraction** : Manipulation JSON.
pub mod data {
    pub use super::json::{json, parse, stringify, stringify_pretty, Map, Value};
    pub use serde::{Deserialize, Serialize};
}

/// **Application Context** : Environnement & Logs.
pub mod context {
    pub use super::env::{get_optional, get_or, is_enabled};
    pub use super::logger::init_logging;
}

/// **Connectivity** : Client HTTP partagé.
pub mod net_client {
    pub use super::net::get_client;
}

/// **Le Prélude** : À utiliser via `use insercao::utils::prelude::*;`
pub mod prelude {
    pub use super::core::{AppError, Result, Utc, Uuid};
    pub use super::data::{json, Deserialize, Serialize, Value};
    pub use tracing::{debug, error, info, instrument, warn};
}

// --- 3. EXPORTS DIRECTS ---

pub use error::{AppError, Result};
pub use logger::init_logging;
