// FICHIER : insercao/src/utils/fs.rs

use crate::utils::{json, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::instrument;

// --- RE-EXPORTS (Isolation de la couche OS) ---
pub use std::path::{Path, PathBuf};
pub use tempfile::{tempdir, TempDir};

/// Crée récursivement un répertoire (idempotent).
pub async fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    fs::create_dir_all(path.as_ref()).await?;
    Ok(())
}

/// Le chemin existe-t-il ? (fichier ou dossier)
pub async fn exists(path: impl AsRef<Path>) -> bool {
    fs::try_exists(path.as_ref()).await.unwrap_or(false)
}

/// Lit un fichier texte en entier.
pub async fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    Ok(fs::read_to_string(path.as_ref()).await?)
}

/// Lit et parse un fichier JSON. Erreur explicite si le fichier est absent :
/// c'est l'appelant qui décide de la politique (stricte ou indulgente).
#[instrument(skip(path), fields(path = ?path))]
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_to_string(path).await?;
    json::parse(&content)
}

// --- ÉCRITURE ATOMIQUE ---

/// Écriture atomique sécurisée (write -> sync -> rename).
/// Une panne au milieu de l'écriture laisse l'ancien fichier intact.
#[instrument(skip(content, path), fields(path = ?path))]
pub async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent).await?;
        }
    }

    let tmp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(content).await?;
        // On force l'écriture physique sur le plateau du disque
        file.sync_all().await?;
    }

    fs::rename(&tmp_path, path).await?;
    Ok(())
}

/// Sérialise un type T en JSON (pretty) et l'écrit atomiquement.
pub async fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = json::stringify_pretty(value)?;
    write_atomic(path, content.as_bytes()).await
}
