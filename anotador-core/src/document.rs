//! # Documento Anotado — a saída bruta do modelo de linguagem
//!
//! Estas estruturas representam exatamente o que o adaptador consome de um
//! modelo pré-treinado: tokens com lema, classe gramatical, rótulo de
//! dependência e flags, além dos spans de entidades nomeadas.
//!
//! O documento é produzido pelo [`LanguageModel`](crate::model::LanguageModel)
//! e nunca é alterado pelo adaptador, que apenas lê os campos e os reformata.
//!
//! ## Convenções
//!
//! - `head` é o **índice** do token governante dentro de `tokens`. A raiz da
//!   sentença aponta para si mesma (mesma convenção do spaCy).
//! - Offsets de entidade são contados em **caracteres** (não bytes), com fim
//!   exclusivo: `text.chars().skip(start).take(end - start)`.

use serde::{Deserialize, Serialize};

/// Rótulo de dependência reservado para a raiz da sentença.
pub const ROOT_LABEL: &str = "ROOT";

/// Um token anotado pelo modelo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocToken {
    /// Forma superficial (ex: "casas", ",", "Madrid").
    pub text: String,
    /// Forma base (ex: "casa", "ser").
    pub lemma: String,
    /// Classe gramatical grossa no padrão Universal Dependencies (ex: "NOUN").
    pub pos: String,
    /// Tag morfossintática fina.
    pub tag: String,
    /// Rótulo da relação de dependência (ex: "nsubj", "ROOT").
    pub dep: String,
    /// Índice do token governante.
    pub head: usize,
    pub is_alpha: bool,
    pub is_stop: bool,
    pub is_punct: bool,
}

impl DocToken {
    /// Indica se o token é raiz de uma sentença.
    pub fn is_root(&self) -> bool {
        self.dep == ROOT_LABEL
    }
}

/// Um span de entidade nomeada reconhecido no texto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntity {
    pub text: String,
    /// Categoria (ex: "PER", "LOC", "ORG", "MISC").
    pub label: String,
    /// Offset inicial em caracteres (inclusivo).
    pub start_char: usize,
    /// Offset final em caracteres (exclusivo).
    pub end_char: usize,
}

/// O documento completo devolvido por uma invocação do modelo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    /// Texto original, exatamente como foi passado ao modelo.
    pub text: String,
    pub tokens: Vec<DocToken>,
    pub entities: Vec<DocEntity>,
}

impl AnnotatedDocument {
    /// Cria um documento vazio para o texto dado (útil para entrada vazia).
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tokens: vec![],
            entities: vec![],
        }
    }

    /// Retorna o token governante de `token`.
    ///
    /// Um índice de head fora do intervalo (modelo inconsistente) cai no
    /// próprio token, como acontece com a raiz.
    pub fn head_of<'a>(&'a self, token: &'a DocToken) -> &'a DocToken {
        self.tokens.get(token.head).unwrap_or(token)
    }

    /// Quantidade de tokens marcados como raiz.
    pub fn root_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_root()).count()
    }
}

/// Converte um offset em bytes para offset em caracteres dentro de `text`.
pub fn byte_to_char_offset(text: &str, byte_offset: usize) -> usize {
    text.char_indices()
        .take_while(|(i, _)| *i < byte_offset)
        .count()
}
