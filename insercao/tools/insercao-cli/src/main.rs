// FICHIER : insercao/tools/insercao-cli/src/main.rs

use clap::{Parser, Subcommand};

// On garde le module local des commandes
mod commands;

use insercao::{
    user_error,
    utils::{
        context,    // Config & Environnement
        prelude::*, // Types communs (Result, AppError, etc.)
    },
};

#[derive(Parser)]
#[command(name = "insercao-cli")]
#[command(about = "CLI do Formulário de Inserção Social — Quadriênio 2021-2024", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Preencher e consultar o formulário
    Form(commands::form::FormArgs),

    /// Inspection du magasin de persistance (backend, export)
    Store(commands::store::StoreArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialisation du Logger
    context::init_logging();

    // 2. Parsing & Dispatch
    let cli = Cli::parse();

    if let Err(e) = execute_command(cli.command).await {
        user_error!("{}", e);
        std::process::exit(1);
    }

    tracing::debug!("Fin de l'exécution du CLI");
    Ok(())
}

async fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Form(args) => commands::form::handle(args).await,
        Commands::Store(args) => commands::store::handle(args).await,
    }
}
