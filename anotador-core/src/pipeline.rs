//! # Pipeline de Anotação — o adaptador
//!
//! Recebe um texto, invoca o modelo de linguagem e reformata o documento
//! anotado num [`AnnotationResult`] plano, pronto para virar JSON.
//!
//! ## Fluxo
//!
//! 1. `model.annotate(text)` → [`AnnotatedDocument`].
//! 2. Para cada token, em ordem: registro de token, lema em minúsculas,
//!    registro de POS e, se o token não for raiz, registro de dependência
//!    (com o **texto** do head).
//! 3. Para cada entidade, em ordem: registro de entidade com offsets em caracteres.
//! 4. Sentimento ([`sentiment`](crate::sentiment)) e palavras-chave
//!    ([`keywords`](crate::keywords)) calculados sobre o mesmo documento.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::AnnotatedDocument;
use crate::keywords::extract_keywords;
use crate::model::{LanguageModel, ModelError};
use crate::sentiment::{Sentiment, SentimentLexicon};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub text: String,
    pub lemma: String,
    pub pos: String,
    pub tag: String,
    pub is_alpha: bool,
    pub is_stop: bool,
    pub is_punct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTagRecord {
    pub text: String,
    pub pos: String,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub text: String,
    pub dep: String,
    /// Texto do token governante.
    pub head: String,
}

/// Resultado final do adaptador.
///
/// A ordem dos campos define a ordem das chaves no JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationResult {
    pub tokens: Vec<TokenRecord>,
    pub entities: Vec<EntityRecord>,
    pub pos_tags: Vec<PosTagRecord>,
    pub dependencies: Vec<DependencyRecord>,
    pub lemmas: Vec<String>,
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
}

impl AnnotationResult {
    /// Extrai os registros de um documento já anotado.
    pub fn from_document(doc: &AnnotatedDocument, lexicon: &SentimentLexicon) -> Self {
        let mut tokens = Vec::with_capacity(doc.tokens.len());
        let mut lemmas = Vec::with_capacity(doc.tokens.len());
        let mut pos_tags = Vec::with_capacity(doc.tokens.len());
        let mut dependencies = Vec::new();

        for token in &doc.tokens {
            tokens.push(TokenRecord {
                text: token.text.clone(),
                lemma: token.lemma.clone(),
                pos: token.pos.clone(),
                tag: token.tag.clone(),
                is_alpha: token.is_alpha,
                is_stop: token.is_stop,
                is_punct: token.is_punct,
            });

            lemmas.push(token.lemma.to_lowercase());

            pos_tags.push(PosTagRecord {
                text: token.text.clone(),
                pos: token.pos.clone(),
                tag: token.tag.clone(),
            });

            if !token.is_root() {
                dependencies.push(DependencyRecord {
                    text: token.text.clone(),
                    dep: token.dep.clone(),
                    head: doc.head_of(token).text.clone(),
                });
            }
        }

        let entities = doc
            .entities
            .iter()
            .map(|e| EntityRecord {
                text: e.text.clone(),
                label: e.label.clone(),
                start: e.start_char,
                end: e.end_char,
            })
            .collect();

        Self {
            tokens,
            entities,
            pos_tags,
            dependencies,
            lemmas,
            sentiment: lexicon.classify(&doc.text),
            keywords: extract_keywords(doc),
        }
    }

    /// Serializa em JSON indentado (2 espaços, sem escapar caracteres não-ASCII).
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// O adaptador: um modelo carregado mais o léxico de sentimento.
pub struct AnnotationPipeline {
    model: Box<dyn LanguageModel>,
    lexicon: SentimentLexicon,
}

impl AnnotationPipeline {
    pub fn new(model: Box<dyn LanguageModel>, lexicon: SentimentLexicon) -> Self {
        Self { model, lexicon }
    }

    /// Pipeline com o léxico de sentimento padrão.
    pub fn with_model(model: Box<dyn LanguageModel>) -> Self {
        Self::new(model, SentimentLexicon::default())
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Anota o texto e extrai o resultado.
    pub fn process_text(&self, text: &str) -> Result<AnnotationResult, ModelError> {
        let doc = self.model.annotate(text)?;
        debug!(
            "Modelo '{}' devolveu {} tokens e {} entidades",
            self.model.name(),
            doc.tokens.len(),
            doc.entities.len()
        );
        Ok(AnnotationResult::from_document(&doc, &self.lexicon))
    }

    /// Sentimento do documento segundo o léxico deste pipeline.
    pub fn sentiment(&self, doc: &AnnotatedDocument) -> Sentiment {
        self.lexicon.classify(&doc.text)
    }

    /// Palavras-chave do documento.
    pub fn keywords(&self, doc: &AnnotatedDocument) -> Vec<String> {
        extract_keywords(doc)
    }
}
