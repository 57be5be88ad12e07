// FICHIER : insercao/src/store/local.rs

//! Backend fichier local : la collection entière dans un seul document
//! JSON, écrasé en bloc à chaque sauvegarde. Aucun verrouillage — le
//! mode local est réservé au déploiement mono-opérateur.

use crate::form::Collection;
use crate::utils::io::{exists, read_json, write_json_atomic, Path, PathBuf};
use crate::utils::prelude::*;
use crate::utils::AppError;

pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lecture stricte : fichier absent -> NotFound, contenu illisible ->
    /// Serialization. C'est l'appelant qui applique (ou non) l'indulgence.
    pub async fn try_read(&self) -> Result<Collection> {
        if !exists(&self.path).await {
            return Err(AppError::NotFound(format!(
                "fichier local {:?}",
                self.path
            )));
        }
        read_json(&self.path).await
    }

    /// Lecture indulgente : absent ou illisible -> collection vide.
    /// La corruption est signalée à l'opérateur, jamais à l'appelant —
    /// choix assumé de repartir d'un état frais plutôt que d'échouer.
    #[instrument(skip(self), fields(path = ?self.path))]
    pub async fn read(&self) -> Collection {
        match self.try_read().await {
            Ok(collection) => collection,
            Err(AppError::NotFound(_)) => {
                debug!("Aucun état persisté, collection vide");
                Collection::new()
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "Contenu local illisible (corruption probable) — lecture indulgente, on repart d'une collection vide"
                );
                Collection::new()
            }
        }
    }

    /// Écrase le fichier en bloc (écriture atomique tmp + rename).
    #[instrument(skip(self, collection), fields(path = ?self.path, len = collection.len()))]
    pub async fn write(&self, collection: &Collection) -> Result<()> {
        write_json_atomic(&self.path, collection).await
    }
}
