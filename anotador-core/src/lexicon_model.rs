//! # Modelo Léxico (backend padrão, Rust puro)
//!
//! Junta os estágios do pacote de modelo num único [`LanguageModel`]:
//!
//! 1. **Tokenização** ([`tokenizer`](crate::tokenizer)) e divisão em sentenças.
//! 2. **Etiquetagem** ([`tagger`](crate::tagger)): lema, classe, tag e flags.
//! 3. **Dependências** ([`parser`](crate::parser)): uma raiz por sentença.
//! 4. **Entidades** ([`rule_based`](crate::rule_based)): gazetteers e nomes próprios.
//!
//! O resultado é um [`AnnotatedDocument`] com offsets de entidade em caracteres.

use std::path::Path;

use tracing::{debug, info};

use crate::document::{byte_to_char_offset, AnnotatedDocument, DocEntity, DocToken};
use crate::model::{LanguageModel, ModelError};
use crate::package::ModelPackage;
use crate::parser::parse;
use crate::rule_based::RuleEngine;
use crate::tagger::{PosTagger, TaggedToken};
use crate::tokenizer::{split_sentences, tokenize};

/// Modelo de linguagem construído a partir de um [`ModelPackage`].
pub struct LexiconModel {
    name: String,
    version: String,
    tagger: PosTagger,
    rule_engine: RuleEngine,
}

impl LexiconModel {
    /// Carrega o pacote do disco e constrói o modelo.
    pub fn load(name: &str, path: &Path) -> Result<Self, ModelError> {
        let package = ModelPackage::load(name, path)?;
        let model = Self::from_package(name, &package);
        info!(
            "Modelo '{}' v{} carregado de {} ({} formas, {} regras de sufixo)",
            model.name,
            model.version,
            path.display(),
            package.lexicon.len(),
            package.suffix_rules.len()
        );
        Ok(model)
    }

    /// Constrói o modelo a partir de um pacote já interpretado.
    pub fn from_package(name: &str, package: &ModelPackage) -> Self {
        Self {
            name: name.to_string(),
            version: package.version.clone(),
            tagger: PosTagger::new(package),
            rule_engine: RuleEngine::from_package(package),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl LanguageModel for LexiconModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, ModelError> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(AnnotatedDocument::empty(text));
        }

        let sentences = split_sentences(&tokens);
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for range in &sentences {
            // "¡Hola!", "¿Dónde...?", "«Genial»": a pontuação inicial não conta
            let mut seen_word = false;
            for i in range.clone() {
                let token = self.tagger.tag(&tokens[i], !seen_word);
                seen_word |= !token.is_punct;
                tagged.push(token);
            }
        }

        let pos: Vec<&str> = tagged.iter().map(|t| t.pos.as_str()).collect();
        let arcs = parse(&pos, &sentences);

        let entities = self
            .rule_engine
            .apply(&tokens, &tagged)
            .into_iter()
            .map(|m| {
                let start = tokens[m.start].start;
                let end = tokens[m.end - 1].end;
                debug!("Entidade '{}' {} [regra {}]", &text[start..end], m.label, m.rule_name);
                DocEntity {
                    text: text[start..end].to_string(),
                    label: m.label,
                    start_char: byte_to_char_offset(text, start),
                    end_char: byte_to_char_offset(text, end),
                }
            })
            .collect();

        let doc_tokens = tagged
            .into_iter()
            .zip(arcs)
            .map(|(t, arc)| DocToken {
                text: t.text,
                lemma: t.lemma,
                pos: t.pos,
                tag: t.tag,
                dep: arc.label.to_string(),
                head: arc.head,
                is_alpha: t.is_alpha,
                is_stop: t.is_stop,
                is_punct: t.is_punct,
            })
            .collect::<Vec<_>>();

        debug!(
            "Anotados {} tokens em {} sentenças",
            doc_tokens.len(),
            sentences.len()
        );

        Ok(AnnotatedDocument {
            text: text.to_string(),
            tokens: doc_tokens,
            entities,
        })
    }
}
