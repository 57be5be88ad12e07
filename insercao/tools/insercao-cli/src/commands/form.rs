// FICHIER : insercao/tools/insercao-cli/src/commands/form.rs

use clap::{Args, Subcommand};
use rustyline::DefaultEditor;

// --- IMPORTS INSERCAO ---

use insercao::form::{schema, FieldDef, FieldKind, Record};
use insercao::store::CollectionStore;
use insercao::utils::error::anyhow;
use insercao::{
    user_error, user_info, user_success,
    utils::{
        data::{self, Map},
        io::PathBuf,
        prelude::*,
    },
};

use super::store::resolve_store;

// --- DÉFINITION DES ARGUMENTS ---

#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    /// Fichier local des réponses (backend local)
    #[arg(long, env = "INSERCAO_LOCAL_PATH")]
    pub local_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: FormCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FormCommands {
    /// Preenche o formulário em modo interativo e persiste a resposta
    Fill,
    /// Lista as respostas persistidas
    List,
    /// Mostra uma resposta completa
    Show {
        #[arg(long)]
        index: usize,
    },
}

// --- DISPATCHER ---

pub async fn handle(args: FormArgs) -> Result<()> {
    let store = resolve_store(args.local_path);

    match args.command {
        FormCommands::Fill => fill(&store).await,
        FormCommands::List => list(&store).await,
        FormCommands::Show { index } => show(&store, index).await,
    }
}

// --- COMMANDES ---

/// Déroule le questionnaire complet puis persiste la réponse via la façade.
/// Les sections conditionnelles déclinées sont sautées à la saisie mais
/// restent présentes (vides) dans le Record — forme totale garantie.
async fn fill(store: &CollectionStore) -> Result<()> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| AppError::System(anyhow!("éditeur de ligne indisponible : {}", e)))?;

    user_info!("Formulário de Inserção Social — Quadriênio 2021-2024");
    user_info!("(Deixe em branco para usar o valor padrão do campo.)");

    let mut answers = Map::new();
    for section in schema::sections() {
        println!();
        user_info!("{}", section.title);

        let mut fields = Map::new();
        let answered = match section.gate() {
            Some(gate) => {
                let checked = ask_bool(&mut rl, gate.prompt)?;
                fields.insert(gate.label.to_string(), json!(checked));
                checked
            }
            None => true,
        };

        if answered {
            for field in section.body() {
                let value = ask_field(&mut rl, field)?;
                fields.insert(field.label.to_string(), value);
            }
        }

        answers.insert(section.name.to_string(), Value::Object(fields));
    }

    let record = Record::new(schema::complete(&answers));

    // Lecture stricte : un échec de transport interrompt le cycle ici.
    // Repartir d'une collection vide ferait accepter, au retour du
    // réseau, une écriture qui remplacerait tout l'historique distant.
    let mut collection = match store.try_load().await {
        Ok(collection) => collection,
        Err(e) => {
            user_error!(
                "Não foi possível carregar as respostas existentes; nada foi gravado. Guarde o conteúdo abaixo e tente novamente:"
            );
            eprintln!("{}", data::stringify_pretty(&record)?);
            return Err(e);
        }
    };
    collection.push(record.clone());

    if store.save(&collection).await {
        user_success!(
            "Resposta registrada ({} no total, backend {}).",
            collection.len(),
            store.backend()
        );
        Ok(())
    } else {
        // Pas de stockage de secours : on restitue la réponse au répondant
        // pour qu'elle ne soit pas perdue
        user_error!("Não foi possível salvar a resposta. Guarde o conteúdo abaixo e tente novamente:");
        eprintln!("{}", data::stringify_pretty(&record)?);
        Err(AppError::System(anyhow!("a resposta não foi persistida")))
    }
}

async fn list(store: &CollectionStore) -> Result<()> {
    let collection = store.load().await;

    if collection.is_empty() {
        user_info!("Nenhuma resposta registrada.");
        return Ok(());
    }

    user_info!("{} resposta(s) registrada(s):", collection.len());
    for (i, record) in collection.records().iter().enumerate() {
        println!(
            "  [{}] {}  {:<12}  {}",
            i,
            record.submitted_at.format("%Y-%m-%d %H:%M:%S"),
            record.sigla(),
            record.id
        );
    }
    Ok(())
}

async fn show(store: &CollectionStore, index: usize) -> Result<()> {
    let collection = store.load().await;
    let record = collection.get(index).ok_or_else(|| {
        AppError::NotFound(format!(
            "resposta d'index {} (total : {})",
            index,
            collection.len()
        ))
    })?;

    println!("{}", data::stringify_pretty(record)?);
    Ok(())
}

// --- SAISIE ---

fn prompt_line(rl: &mut DefaultEditor, text: &str) -> Result<String> {
    rl.readline(text)
        .map_err(|e| AppError::System(anyhow!("saisie interrompue : {}", e)))
}

/// Question fermée sim/não (décochée par défaut, comme la case d'origine).
fn ask_bool(rl: &mut DefaultEditor, prompt: &str) -> Result<bool> {
    let line = prompt_line(rl, &format!("{} [s/N] > ", prompt))?;
    Ok(matches!(
        line.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    ))
}

/// Pose la question d'un champ et renvoie la valeur typée du widget.
/// Une saisie vide ou invalide retombe sur la valeur de remplissage.
fn ask_field(rl: &mut DefaultEditor, field: &FieldDef) -> Result<Value> {
    let mut question = field.prompt.to_string();
    if let Some(hint) = field.hint {
        question.push_str(&format!(" ({})", hint));
    }

    match field.kind {
        FieldKind::Text | FieldKind::LongText => {
            let line = prompt_line(rl, &format!("{}\n> ", question))?;
            Ok(json!(line.trim()))
        }
        FieldKind::Number(default) => {
            let line = prompt_line(rl, &format!("{} [{}] > ", question, default))?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(json!(default));
            }
            match trimmed.parse::<i64>() {
                Ok(n) if n >= 0 => Ok(json!(n)),
                _ => {
                    user_error!("Valor inválido, usando {}.", default);
                    Ok(json!(default))
                }
            }
        }
        FieldKind::Checkbox => ask_bool(rl, &question).map(|b| json!(b)),
        FieldKind::Select(options) => {
            for (i, option) in options.iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
            let line = prompt_line(rl, &format!("{} [1-{}] > ", question, options.len()))?;
            let choice = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i))
                .copied()
                .unwrap_or_else(|| options.first().copied().unwrap_or(""));
            Ok(json!(choice))
        }
    }
}
