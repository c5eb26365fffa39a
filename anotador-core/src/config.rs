//! Configuração do anotador: qual modelo carregar, de onde, e com qual léxico
//! de sentimento.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentLexicon;

/// Nome do modelo espanhol carregado quando nenhum outro é informado.
pub const DEFAULT_MODEL_NAME: &str = "es_core_news_sm";

/// Diretório (relativo ao diretório de trabalho) onde os pacotes de modelo são procurados.
pub const DEFAULT_MODELS_DIR: &str = "models";

/// Implementação que responde pelo modelo de linguagem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelBackend {
    /// **Léxico**: pacote JSON carregado do disco e anotado por regras em Rust puro.
    #[default]
    Lexicon,
    /// **spaCy**: pipeline Python carregado via `spacy.load` (feature `spacy`).
    Spacy,
}

impl ModelBackend {
    pub fn name(&self) -> &'static str {
        match self {
            ModelBackend::Lexicon => "lexicon",
            ModelBackend::Spacy => "spacy",
        }
    }
}

/// Parâmetros de inicialização do anotador.
#[derive(Debug, Clone)]
pub struct AnnotatorConfig {
    pub model_name: String,
    pub models_dir: PathBuf,
    pub backend: ModelBackend,
    pub lexicon: SentimentLexicon,
}

impl AnnotatorConfig {
    /// Caminho do pacote do backend léxico: `<models_dir>/<model_name>.json`.
    pub fn package_path(&self) -> PathBuf {
        self.models_dir.join(format!("{}.json", self.model_name))
    }
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            backend: ModelBackend::default(),
            lexicon: SentimentLexicon::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_package_path() {
        let config = AnnotatorConfig::default();
        assert_eq!(config.backend, ModelBackend::Lexicon);
        assert_eq!(
            config.package_path(),
            PathBuf::from("models").join("es_core_news_sm.json")
        );
    }
}
