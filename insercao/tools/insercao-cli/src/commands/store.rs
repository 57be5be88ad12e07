// FICHIER : insercao/tools/insercao-cli/src/commands/store.rs

use clap::{Args, Subcommand};

// --- IMPORTS INSERCAO ---

use insercao::store::{CollectionStore, StoreConfig};
use insercao::{
    user_info,
    utils::{data, io::PathBuf, prelude::*},
};

// --- DÉFINITION DES ARGUMENTS ---

#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Fichier local des réponses (backend local)
    #[arg(long, env = "INSERCAO_LOCAL_PATH")]
    pub local_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: StoreCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum StoreCommands {
    /// Affiche le backend sélectionné et la configuration (credential masqué)
    Backend,
    /// Exporte la collection complète (JSON) sur la sortie standard
    Export,
}

/// Construit la façade de persistance pour une invocation du CLI.
/// `--local-path` (ou INSERCAO_LOCAL_PATH, déjà consulté par clap) prime ;
/// sinon le fichier vit dans le répertoire de données de l'utilisateur.
pub(crate) fn resolve_store(local_path: Option<PathBuf>) -> CollectionStore {
    let mut config = StoreConfig::from_env();
    match local_path {
        Some(path) => config.local_path = path,
        None => {
            if let Some(base) = dirs::data_dir() {
                config.local_path = base.join("insercao").join("respostas.json");
            }
        }
    }
    CollectionStore::new(config)
}

// --- DISPATCHER ---

pub async fn handle(args: StoreArgs) -> Result<()> {
    let store = resolve_store(args.local_path);

    match args.command {
        StoreCommands::Backend => {
            user_info!("Backend sélectionné : {}", store.backend());
            println!("{:#?}", store.config());
            Ok(())
        }
        StoreCommands::Export => {
            // Lecture stricte : un état corrompu doit faire échouer l'export,
            // pas produire un tableau vide plausible
            let collection = store.try_load().await?;
            println!("{}", data::stringify_pretty(&collection)?);
            Ok(())
        }
    }
}
