//! Linha de comando do anotador: recebe um texto em espanhol como único
//! argumento e imprime a anotação em JSON na saída padrão.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anotador_core::config::{DEFAULT_MODELS_DIR, DEFAULT_MODEL_NAME};
use anotador_core::{load_model, AnnotationPipeline, AnnotatorConfig, ModelBackend, ModelError};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    Lexicon,
    Spacy,
}

impl From<BackendArg> for ModelBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Lexicon => ModelBackend::Lexicon,
            BackendArg::Spacy => ModelBackend::Spacy,
        }
    }
}

/// Anota um texto em espanhol (tokens, POS, dependências, entidades, lemas,
/// sentimento e palavras-chave) e imprime o resultado em JSON.
#[derive(Debug, Parser)]
#[command(name = "anotador", version, override_usage = "anotador [OPTIONS] [--] <TEXT>")]
struct Args {
    /// Texto a analisar. Textos iguais a uma opção ("-h", "--help", "-V")
    /// precisam vir depois de `--`: `anotador -- --help`
    #[arg(allow_hyphen_values = true)]
    text: String,

    /// Nome do modelo de linguagem
    #[arg(long, default_value = DEFAULT_MODEL_NAME)]
    model: String,

    /// Diretório com os pacotes de modelo do backend léxico
    #[arg(long, default_value = DEFAULT_MODELS_DIR)]
    models_dir: PathBuf,

    /// Implementação do modelo
    #[arg(long, value_enum, default_value_t = BackendArg::Lexicon)]
    backend: BackendArg,

    /// Filtro de logs (ex: "info", "anotador_core=debug"); os logs vão para stderr
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = AnnotatorConfig {
        model_name: args.model,
        models_dir: args.models_dir,
        backend: args.backend.into(),
        ..AnnotatorConfig::default()
    };

    let model = match load_model(&config) {
        Ok(model) => model,
        Err(e) => {
            report_model_error(&e);
            return ExitCode::FAILURE;
        }
    };
    let pipeline = AnnotationPipeline::new(model, config.lexicon);

    let result = match pipeline.process_text(&args.text) {
        Ok(result) => result,
        Err(e) => {
            report_model_error(&e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "{} tokens, {} entidades, sentimento {}",
        result.tokens.len(),
        result.entities.len(),
        result.sentiment.label()
    );

    let json = match result.to_json_pretty() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: falha ao serializar o resultado: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", json).and_then(|_| stdout.flush()) {
        eprintln!("Error: falha ao escrever na saída padrão: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Mensagem para o operador, com instruções de remediação quando houver.
fn report_model_error(e: &ModelError) {
    debug!("{:?}", e);
    eprintln!("Error: {}", e);
    if let Some(remediation) = e.remediation() {
        eprintln!("{}", remediation);
    }
}
