//! # Modelo de Linguagem — a fronteira com o mundo externo
//!
//! O adaptador não sabe tokenizar, etiquetar nem fazer parsing: tudo isso é
//! responsabilidade de um modelo pré-treinado. Este módulo define a interface
//! estreita que o adaptador consome ([`LanguageModel`]) e o passo explícito de
//! inicialização ([`load_model`]).
//!
//! ## Inicialização
//!
//! Carregar o modelo é a única etapa que pode falhar de forma "esperada"
//! (pacote ausente, Python sem spaCy...). Por isso `load_model` devolve um
//! `Result` com instruções de remediação, e quem decide encerrar o processo
//! é o chamador (a CLI).

use thiserror::Error;
use tracing::info;

use crate::config::{AnnotatorConfig, ModelBackend};
use crate::document::AnnotatedDocument;
use crate::lexicon_model::LexiconModel;

/// Falhas de carregamento ou execução do modelo.
#[derive(Debug, Error)]
pub enum ModelError {
    /// O recurso do modelo não existe no ambiente.
    #[error("modelo '{name}' não encontrado em {path}")]
    NotFound {
        name: String,
        path: String,
        remediation: String,
    },
    /// O recurso existe mas não pôde ser interpretado.
    #[error("modelo '{name}' inválido: {reason}")]
    Invalid { name: String, reason: String },
    /// O backend pedido não foi compilado neste binário.
    #[error("backend '{backend}' indisponível neste binário")]
    BackendUnavailable { backend: &'static str },
    /// O modelo falhou ao anotar um texto.
    #[error("falha na anotação: {0}")]
    Inference(String),
}

impl ModelError {
    /// Instruções para o operador resolver o problema, quando existirem.
    pub fn remediation(&self) -> Option<String> {
        match self {
            ModelError::NotFound { remediation, .. } => Some(remediation.clone()),
            ModelError::Invalid { name, .. } => Some(format!(
                "Reinstale o pacote do modelo '{}' a partir da cópia em models/ do repositório.",
                name
            )),
            ModelError::BackendUnavailable { backend } => Some(format!(
                "Recompile com `cargo build --features {}` ou use `--backend lexicon`.",
                backend
            )),
            ModelError::Inference(_) => None,
        }
    }
}

/// Interface mínima de um modelo de linguagem pré-treinado.
///
/// Implementações devem ser determinísticas: o mesmo texto produz o mesmo
/// documento. `Send + Sync` permite compartilhar o modelo carregado entre
/// threads em contextos embarcados.
pub trait LanguageModel: Send + Sync {
    /// Identificador do modelo carregado (ex: "es_core_news_sm").
    fn name(&self) -> &str;

    /// Anota o texto, produzindo tokens e entidades.
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, ModelError>;
}

/// Carrega o modelo descrito pela configuração.
///
/// Nunca encerra o processo: a falha é devolvida ao chamador.
pub fn load_model(config: &AnnotatorConfig) -> Result<Box<dyn LanguageModel>, ModelError> {
    info!(
        "Carregando modelo '{}' [backend {}]",
        config.model_name,
        config.backend.name()
    );
    match config.backend {
        ModelBackend::Lexicon => {
            let model = LexiconModel::load(&config.model_name, &config.package_path())?;
            Ok(Box::new(model))
        }
        ModelBackend::Spacy => load_spacy(config),
    }
}

#[cfg(feature = "spacy")]
fn load_spacy(config: &AnnotatorConfig) -> Result<Box<dyn LanguageModel>, ModelError> {
    let model = crate::spacy::SpacyModel::load(&config.model_name)?;
    Ok(Box::new(model))
}

#[cfg(not(feature = "spacy"))]
fn load_spacy(_config: &AnnotatorConfig) -> Result<Box<dyn LanguageModel>, ModelError> {
    Err(ModelError::BackendUnavailable {
        backend: ModelBackend::Spacy.name(),
    })
}
