//! # anotador-core — Anotação Linguística de Textos em Espanhol
//!
//! Este crate adapta a saída de um modelo de linguagem pré-treinado para um
//! documento plano (tokens, classes gramaticais, dependências, entidades e
//! lemas) e acrescenta duas heurísticas: sentimento por léxico e extração de
//! palavras-chave.
//!
//! ## Arquitetura
//!
//! 1.  **Configuração** ([`config`]): nome do modelo, diretório e backend.
//! 2.  **Inicialização** ([`model`]): [`load_model`] devolve um [`LanguageModel`]
//!     ou um [`ModelError`] com instruções de remediação.
//! 3.  **Anotação** (backend):
//!     *   **Léxico** ([`lexicon_model`]): pacote JSON + [`tokenizer`], [`tagger`],
//!         [`parser`] e [`rule_based`], em Rust puro.
//!     *   **spaCy** (feature `spacy`): pipeline Python via pyo3.
//! 4.  **Adaptador** ([`pipeline`]): [`AnnotationPipeline::process_text`] monta o
//!     [`AnnotationResult`], com [`sentiment`] e [`keywords`].
//!
//! ## Exemplo de Uso
//!
//! ```rust,no_run
//! use anotador_core::{load_model, AnnotationPipeline, AnnotatorConfig};
//!
//! let config = AnnotatorConfig::default();
//! let model = load_model(&config).expect("modelo instalado em models/");
//! let pipeline = AnnotationPipeline::new(model, config.lexicon.clone());
//!
//! let result = pipeline.process_text("Este producto es excelente y genial").unwrap();
//! println!("{}", result.to_json_pretty().unwrap());
//! ```

pub mod config;
pub mod document;
pub mod keywords;
pub mod lexicon_model;
pub mod model;
pub mod package;
pub mod parser;
pub mod pipeline;
pub mod rule_based;
pub mod sentiment;
#[cfg(feature = "spacy")]
pub mod spacy;
pub mod tagger;
pub mod tokenizer;

pub use config::{AnnotatorConfig, ModelBackend};
pub use document::{AnnotatedDocument, DocEntity, DocToken};
pub use model::{load_model, LanguageModel, ModelError};
pub use pipeline::{AnnotationPipeline, AnnotationResult};
pub use sentiment::{Sentiment, SentimentLexicon, NEGATIVE_LEXICON, POSITIVE_LEXICON};
