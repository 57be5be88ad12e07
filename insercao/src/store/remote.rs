// FICHIER : insercao/src/store/remote.rs

//! Backend distant : l'API de contenu versionnée (format GitHub Contents).
//! Un seul objet à chemin fixe ; chaque révision est identifiée par un
//! jeton opaque (`sha`) exigé sur toute mise à jour — c'est lui qui
//! transforme un écrasement silencieux en conflit détecté.

use crate::form::Collection;
use crate::store::config::StoreConfig;
use crate::utils::error::anyhow;
use crate::utils::net_client::get_client;
use crate::utils::prelude::*;
use crate::utils::{json, AppError};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::StatusCode;

/// Réponse du GET : contenu encodé pour le transport + jeton de révision.
#[derive(Deserialize)]
struct ContentsResponse {
    content: Option<String>,
    sha: String,
}

/// Corps du PUT (create-or-update). `sha` absent = création.
#[derive(Serialize)]
struct ContentsUpdate<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

pub struct RemoteStore {
    api_base: String,
    repo: String,
    path: String,
    token: String,
    message: String,
}

impl RemoteStore {
    /// Exige le credential et le dépôt cible : un backend distant
    /// partiellement configuré est une erreur de configuration, pas un
    /// repli silencieux.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let token = config.token.clone().ok_or_else(|| {
            AppError::Config("credential d'accès distant manquant (INSERCAO_GITHUB_TOKEN)".into())
        })?;
        if config.repo.is_empty() {
            return Err(AppError::Config(
                "dépôt cible manquant (INSERCAO_REPO, format owner/repo)".into(),
            ));
        }
        Ok(Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            repo: config.repo.clone(),
            path: config.remote_path.clone(),
            token,
            message: config.commit_message.clone(),
        })
    }

    fn url(&self) -> String {
        format!("{}/repos/{}/contents/{}", self.api_base, self.repo, self.path)
    }

    /// Récupère l'objet unique et son jeton de révision.
    /// Un 404 bien formé n'est PAS une erreur : rien n'a encore été
    /// persisté, on renvoie une collection vide sans jeton.
    #[instrument(skip(self), fields(repo = %self.repo, path = %self.path))]
    pub async fn read(&self) -> Result<(Collection, Option<String>)> {
        let resp = get_client()
            .get(self.url())
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            debug!("Objet distant absent : collection vide, aucun jeton");
            return Ok((Collection::new(), None));
        }

        let body: ContentsResponse = resp.error_for_status()?.json().await?;

        // L'API insère des sauts de ligne dans le base64 : on les retire
        // avant de décoder.
        let encoded: String = body.content.unwrap_or_default().split_whitespace().collect();
        let raw = BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| AppError::System(anyhow!("contenu base64 invalide : {}", e)))?;

        let collection: Collection = serde_json::from_slice(&raw)?;
        debug!(len = collection.len(), sha = %body.sha, "Collection distante chargée");
        Ok((collection, Some(body.sha)))
    }

    /// Create-or-update de l'objet unique. `prior` doit être le jeton de
    /// l'état sur lequel la collection est basée ; périmé ou absent face
    /// à un objet existant, le backend rejette l'écriture en conflit.
    #[instrument(skip(self, collection, prior), fields(repo = %self.repo, len = collection.len()))]
    pub async fn write(&self, collection: &Collection, prior: Option<&str>) -> Result<()> {
        let payload = json::stringify_pretty(collection)?;
        let body = ContentsUpdate {
            message: &self.message,
            content: BASE64.encode(payload.as_bytes()),
            sha: prior,
        };

        let resp = get_client()
            .put(self.url())
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::CONFLICT || status == StatusCode::UNPROCESSABLE_ENTITY {
            // Jamais de fusion ni de retry ici : l'appelant doit recharger
            // puis soumettre à nouveau.
            let detail = resp.text().await.unwrap_or_default();
            return Err(AppError::Conflict(format!(
                "écriture rejetée ({}) : {}",
                status, detail
            )));
        }

        resp.error_for_status()?;
        debug!("Écriture distante acceptée");
        Ok(())
    }
}

// --- TESTS UNITAIRES ---
// Les scénarios réseau (A, C, P3) vivent dans tests/store_suite.rs contre
// un serveur de contenu simulé ; ici uniquement la construction.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::config::StoreConfig;

    #[test]
    fn test_new_requires_credential_and_repo() {
        let mut cfg = StoreConfig::local("respostas.json");
        assert!(matches!(
            RemoteStore::new(&cfg),
            Err(AppError::Config(_))
        ));

        cfg.token = Some("ghp_x".to_string());
        assert!(matches!(
            RemoteStore::new(&cfg),
            Err(AppError::Config(_))
        ));

        cfg.repo = "ppgpc/respostas".to_string();
        assert!(RemoteStore::new(&cfg).is_ok());
    }

    #[test]
    fn test_url_shape() {
        let mut cfg = StoreConfig::local("respostas.json");
        cfg.token = Some("ghp_x".to_string());
        cfg.repo = "ppgpc/respostas".to_string();
        cfg.api_base = "https://api.github.com/".to_string();

        let store = RemoteStore::new(&cfg).unwrap();
        assert_eq!(
            store.url(),
            "https://api.github.com/repos/ppgpc/respostas/contents/respostas.json"
        );
    }

    #[test]
    fn test_update_body_omits_absent_sha() {
        let body = ContentsUpdate {
            message: "m",
            content: "YWJj".to_string(),
            sha: None,
        };
        let raw = serde_json::to_string(&body).unwrap();
        assert!(!raw.contains("sha"));

        let body_with = ContentsUpdate {
            message: "m",
            content: "YWJj".to_string(),
            sha: Some("abc123"),
        };
        let raw_with = serde_json::to_string(&body_with).unwrap();
        assert!(raw_with.contains("\"sha\":\"abc123\""));
    }
}
