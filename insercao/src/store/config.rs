// FICHIER : insercao/src/store/config.rs

//! Configuration explicite du stockage. Le choix du backend est une
//! fonction pure de cette structure : testable sans toucher à
//! l'environnement.

use crate::utils::context;
use std::fmt;
use std::path::PathBuf;

/// API de contenu par défaut (format GitHub Contents).
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
/// Chemin fixe de l'objet distant.
pub const DEFAULT_REMOTE_PATH: &str = "respostas.json";
/// Chemin relatif fixe du fichier local.
pub const DEFAULT_LOCAL_PATH: &str = "respostas.json";

/// L'un des deux backends derrière la façade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Remote,
    Local,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Remote => write!(f, "remote"),
            Backend::Local => write!(f, "local"),
        }
    }
}

/// Configuration du stockage, fournie au démarrage du processus.
/// Les deux entrées environnementales du cœur : « sommes-nous en
/// hébergement géré ? » et le credential d'accès distant.
#[derive(Clone, PartialEq)]
pub struct StoreConfig {
    /// Exécution en contexte hébergé/géré.
    pub hosted: bool,
    /// Credential d'accès à l'API de contenu (Bearer).
    pub token: Option<String>,
    /// Dépôt cible, au format "owner/repo".
    pub repo: String,
    /// Chemin de l'objet dans le dépôt.
    pub remote_path: String,
    /// Racine de l'API de contenu.
    pub api_base: String,
    /// Message associé à chaque écriture distante.
    pub commit_message: String,
    /// Fichier local (backend de repli hors hébergement).
    pub local_path: PathBuf,
}

// Le token ne doit jamais apparaître dans les logs.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("hosted", &self.hosted)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("repo", &self.repo)
            .field("remote_path", &self.remote_path)
            .field("api_base", &self.api_base)
            .field("local_path", &self.local_path)
            .finish()
    }
}

impl StoreConfig {
    /// Lit la configuration depuis l'environnement, une fois au démarrage.
    /// Le cœur ne relit jamais l'environnement lui-même.
    pub fn from_env() -> Self {
        Self {
            hosted: context::is_enabled("INSERCAO_HOSTED"),
            token: context::get_optional("INSERCAO_GITHUB_TOKEN"),
            repo: context::get_or("INSERCAO_REPO", ""),
            remote_path: context::get_or("INSERCAO_REMOTE_PATH", DEFAULT_REMOTE_PATH),
            api_base: context::get_or("INSERCAO_API_BASE", DEFAULT_API_BASE),
            commit_message: "Atualiza respostas do formulário".to_string(),
            local_path: PathBuf::from(context::get_or("INSERCAO_LOCAL_PATH", DEFAULT_LOCAL_PATH)),
        }
    }

    /// Configuration purement locale (mode opérateur unique, tests).
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self {
            hosted: false,
            token: None,
            repo: String::new(),
            remote_path: DEFAULT_REMOTE_PATH.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            commit_message: "Atualiza respostas do formulário".to_string(),
            local_path: path.into(),
        }
    }

    /// Politique de sélection du backend — fonction pure, évaluée à chaque
    /// opération (jamais mise en cache sur la durée du processus).
    /// Hébergé + credential = distant, sans autre condition : un dépôt
    /// cible manquant est une erreur de configuration signalée par
    /// `RemoteStore::new`, jamais un repli silencieux vers le fichier
    /// local (qui éclaterait l'historique).
    pub fn backend(&self) -> Backend {
        if self.hosted && self.token.is_some() {
            Backend::Remote
        } else {
            Backend::Local
        }
    }
}

// --- TESTS UNITAIRES ---
#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn hosted_config() -> StoreConfig {
        StoreConfig {
            hosted: true,
            token: Some("ghp_test".to_string()),
            repo: "ppgpc/respostas".to_string(),
            remote_path: DEFAULT_REMOTE_PATH.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            commit_message: "msg".to_string(),
            local_path: PathBuf::from(DEFAULT_LOCAL_PATH),
        }
    }

    #[test]
    fn test_backend_selection_is_pure() {
        let cfg = hosted_config();
        assert_eq!(cfg.backend(), Backend::Remote);

        // Hébergé mais sans credential -> local
        let mut no_token = hosted_config();
        no_token.token = None;
        assert_eq!(no_token.backend(), Backend::Local);

        // Credential présent mais hors hébergement -> local
        let mut not_hosted = hosted_config();
        not_hosted.hosted = false;
        assert_eq!(not_hosted.backend(), Backend::Local);

        // Hébergé avec credential mais sans dépôt cible : la sélection
        // reste distante, c'est l'opération qui échouera (Config) —
        // jamais de bascule silencieuse vers le fichier local
        let mut no_repo = hosted_config();
        no_repo.repo = String::new();
        assert_eq!(no_repo.backend(), Backend::Remote);
    }

    #[test]
    fn test_debug_redacts_token() {
        let cfg = hosted_config();
        let dump = format!("{:?}", cfg);
        assert!(dump.contains("<redacted>"));
        assert!(!dump.contains("ghp_test"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::remove_var("INSERCAO_HOSTED");
        std::env::remove_var("INSERCAO_GITHUB_TOKEN");
        std::env::remove_var("INSERCAO_REPO");
        std::env::remove_var("INSERCAO_REMOTE_PATH");
        std::env::remove_var("INSERCAO_API_BASE");
        std::env::remove_var("INSERCAO_LOCAL_PATH");

        let cfg = StoreConfig::from_env();
        assert!(!cfg.hosted);
        assert_eq!(cfg.backend(), Backend::Local);
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.local_path, PathBuf::from(DEFAULT_LOCAL_PATH));
    }

    #[test]
    #[serial]
    fn test_from_env_hosted_with_credential() {
        std::env::set_var("INSERCAO_HOSTED", "true");
        std::env::set_var("INSERCAO_GITHUB_TOKEN", "ghp_abc");
        std::env::set_var("INSERCAO_REPO", "ppgpc/respostas");

        let cfg = StoreConfig::from_env();
        assert_eq!(cfg.backend(), Backend::Remote);

        std::env::remove_var("INSERCAO_HOSTED");
        std::env::remove_var("INSERCAO_GITHUB_TOKEN");
        std::env::remove_var("INSERCAO_REPO");
    }
}
