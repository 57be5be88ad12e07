// FICHIER : insercao/src/store/facade.rs

//! La façade de persistance : `load()` / `save()` au-dessus des deux
//! backends. C'est ici que vivent les deux politiques du cœur :
//! la lecture indulgente (état illisible -> collection vide, signalée)
//! et l'absence de repli entre backends à l'écriture (un seul historique).

use crate::form::Collection;
use crate::store::config::{Backend, StoreConfig};
use crate::store::local::LocalStore;
use crate::store::remote::RemoteStore;
use crate::utils::prelude::*;

pub struct CollectionStore {
    config: StoreConfig,
}

impl CollectionStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(StoreConfig::from_env())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Backend choisi pour l'opération en cours — réévalué à chaque appel.
    pub fn backend(&self) -> Backend {
        self.config.backend()
    }

    /// Charge la collection persistée complète.
    /// Ne fait jamais échouer l'appelant : un état absent est une
    /// collection vide (silencieux), un état illisible ou un backend en
    /// échec dégrade aussi en collection vide mais est signalé à
    /// l'opérateur — politique d'indulgence assumée, pas un oubli.
    pub async fn load(&self) -> Collection {
        match self.try_load().await {
            Ok(collection) => collection,
            Err(e) => {
                warn!(
                    backend = %self.backend(),
                    error = %e,
                    "Lecture indulgente : état persisté illisible ou backend en échec, on repart d'une collection vide"
                );
                Collection::new()
            }
        }
    }

    /// Variante stricte de `load` : expose la taxonomie d'erreurs.
    pub async fn try_load(&self) -> Result<Collection> {
        match self.backend() {
            Backend::Remote => {
                let store = RemoteStore::new(&self.config)?;
                let (collection, _sha) = store.read().await?;
                Ok(collection)
            }
            Backend::Local => {
                let store = LocalStore::new(&self.config.local_path);
                match store.try_read().await {
                    // Fichier jamais créé : état initial légitime
                    Err(AppError::NotFound(_)) => Ok(Collection::new()),
                    other => other,
                }
            }
        }
    }

    /// Persiste la collection complète sur exactement un backend.
    /// `false` signifie « vos données ne sont PAS durablement stockées » :
    /// pas de retry interne, et surtout pas de repli remote -> local, qui
    /// éclaterait l'historique entre deux magasins à l'insu de tous.
    pub async fn save(&self, collection: &Collection) -> bool {
        match self.try_save(collection).await {
            Ok(()) => {
                info!(backend = %self.backend(), len = collection.len(), "Collection persistée");
                true
            }
            Err(e) => {
                error!(
                    backend = %self.backend(),
                    error = %e,
                    "Échec de persistance — aucun repli sur l'autre backend, l'appelant doit réessayer"
                );
                false
            }
        }
    }

    /// Variante stricte de `save` : expose la taxonomie d'erreurs
    /// (Conflict, Network, ...) à l'appelant qui veut la distinguer.
    pub async fn try_save(&self, collection: &Collection) -> Result<()> {
        match self.backend() {
            Backend::Remote => {
                let store = RemoteStore::new(&self.config)?;
                // Rafraîchissement du jeton fusionné à l'écriture : on
                // relit l'état courant dans le même appel. Un jeton issu
                // d'un load antérieur n'est jamais réutilisé.
                let (_, token) = store.read().await?;
                store.write(collection, token.as_deref()).await
            }
            Backend::Local => LocalStore::new(&self.config.local_path).write(collection).await,
        }
    }
}

// --- TESTS UNITAIRES ---
// Le backend distant est couvert par tests/store_suite.rs (serveur simulé).
#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{schema, Record};
    use crate::utils::io::tempdir;
    use serde_json::Map;

    fn local_store(dir: &std::path::Path) -> CollectionStore {
        CollectionStore::new(StoreConfig::local(dir.join("respostas.json")))
    }

    #[tokio::test]
    async fn test_load_empty_then_append_cycle() {
        let dir = tempdir().unwrap();
        let store = local_store(dir.path());
        assert_eq!(store.backend(), Backend::Local);

        // P2 : aucun état -> collection vide, pas d'erreur
        let mut collection = store.load().await;
        assert!(collection.is_empty());

        // P1 : append puis relecture
        let record = Record::new(schema::complete(&Map::new()));
        collection.push(record.clone());
        assert!(store.save(&collection).await);

        let back = store.load().await;
        assert_eq!(back.len(), 1);
        assert_eq!(back.last(), Some(&record));
    }

    #[tokio::test]
    async fn test_load_corrupt_state_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("respostas.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = CollectionStore::new(StoreConfig::local(&path));
        // P2 : contenu illisible -> collection vide, jamais d'erreur levée
        assert!(store.load().await.is_empty());
        // La variante stricte, elle, expose la corruption
        assert!(store.try_load().await.is_err());
    }

    #[tokio::test]
    async fn test_hosted_without_repo_fails_instead_of_writing_locally() {
        // Hébergé avec credential mais INSERCAO_REPO absent : la sélection
        // reste distante et l'opération échoue en Config — le fichier
        // local ne doit jamais recevoir l'historique par bascule muette
        let dir = tempdir().unwrap();
        let mut cfg = StoreConfig::local(dir.path().join("respostas.json"));
        cfg.hosted = true;
        cfg.token = Some("ghp_x".to_string());

        let store = CollectionStore::new(cfg);
        assert_eq!(store.backend(), Backend::Remote);

        let mut collection = Collection::new();
        collection.push(Record::new(schema::complete(&Map::new())));

        assert!(matches!(
            store.try_save(&collection).await,
            Err(AppError::Config(_))
        ));
        assert!(!store.save(&collection).await);
        assert!(!dir.path().join("respostas.json").exists());
    }

    #[tokio::test]
    async fn test_save_remote_misconfigured_reports_failure() {
        // Backend distant sélectionné mais credential manquant au moment
        // de l'opération : échec explicite, aucune écriture locale
        let dir = tempdir().unwrap();
        let mut cfg = StoreConfig::local(dir.path().join("respostas.json"));
        cfg.hosted = true;
        cfg.token = Some("ghp_x".to_string());
        cfg.repo = "ppgpc/respostas".to_string();
        cfg.api_base = "http://127.0.0.1:1".to_string(); // port fermé

        let store = CollectionStore::new(cfg);
        assert_eq!(store.backend(), Backend::Remote);

        let mut collection = Collection::new();
        collection.push(Record::new(schema::complete(&Map::new())));

        assert!(!store.save(&collection).await);
        // Pas de repli : le fichier local n'a pas été créé
        assert!(!dir.path().join("respostas.json").exists());
    }
}
