// FICHIER : insercao/src/utils/net.rs

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Singleton : Le client HTTP est réutilisé pour bénéficier du pool de connexions.
static GLOBAL_CLIENT: OnceLock<Client> = OnceLock::new();

/// Récupère l'instance unique du client HTTP global.
/// L'API de contenu distante exige un User-Agent identifié.
pub fn get_client() -> &'static Client {
    GLOBAL_CLIENT.get_or_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!("Insercao-Core/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("❌ CRITICAL: Impossible d'initialiser le client HTTP global")
    })
}

// --- TESTS UNITAIRES ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_singleton_is_stable() {
        let c1 = get_client();
        let c2 = get_client();
        // Vérification par pointeur
        assert!(std::ptr::eq(c1, c2));
    }
}
