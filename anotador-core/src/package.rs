//! # Pacote de Modelo
//!
//! O backend léxico lê o seu "modelo pré-treinado" de um arquivo JSON:
//! `<models_dir>/<nome>.json`. O pacote reúne tudo o que o anotador precisa
//! saber sobre a língua:
//!
//! - **lexicon**: forma (minúsculas) → lema, classe gramatical e tag fina;
//! - **suffix_rules**: regras de sufixo para palavras fora do léxico;
//! - **stop_words**: palavras funcionais;
//! - **gazetteers**: entidades conhecidas por rótulo (`PER`, `LOC`, `ORG`, `MISC`);
//! - **person_titles**: tratamentos que antecedem nomes de pessoas.
//!
//! ```json
//! {
//!   "name": "es_core_news_sm",
//!   "lang": "es",
//!   "version": "0.1.0",
//!   "stop_words": ["el", "de"],
//!   "lexicon": { "es": { "lemma": "ser", "pos": "AUX" } },
//!   "suffix_rules": [ { "suffix": "mente", "pos": "ADV" } ],
//!   "gazetteers": { "LOC": ["Madrid"] },
//!   "person_titles": ["señor"]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::ModelError;

/// Entrada do léxico para uma forma de palavra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexEntry {
    pub lemma: String,
    pub pos: String,
    /// Tag fina; quando ausente, repete a classe gramatical.
    #[serde(default)]
    pub tag: Option<String>,
}

/// Regra de sufixo para palavras desconhecidas.
///
/// O lema é obtido removendo `strip` caracteres do final da forma (em
/// minúsculas) e acrescentando `append`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
    pub pos: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub strip: usize,
    #[serde(default)]
    pub append: String,
}

impl SuffixRule {
    /// Aplica a regra à forma em minúsculas, devolvendo o lema.
    pub fn lemmatize(&self, lower: &str) -> String {
        let keep = lower.chars().count().saturating_sub(self.strip);
        let mut lemma: String = lower.chars().take(keep).collect();
        lemma.push_str(&self.append);
        lemma
    }
}

/// Conteúdo completo de um pacote de modelo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelPackage {
    pub name: String,
    pub lang: String,
    pub version: String,
    #[serde(default)]
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub lexicon: HashMap<String, LexEntry>,
    #[serde(default)]
    pub suffix_rules: Vec<SuffixRule>,
    #[serde(default)]
    pub gazetteers: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub person_titles: Vec<String>,
}

impl ModelPackage {
    /// Lê e valida o pacote em `path`.
    pub fn load(name: &str, path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            debug!("Falha ao ler {}: {}", path.display(), e);
            ModelError::NotFound {
                name: name.to_string(),
                path: path.display().to_string(),
                remediation: install_instructions(name, path),
            }
        })?;
        Self::from_json(name, &raw)
    }

    /// Interpreta o pacote a partir de JSON.
    pub fn from_json(name: &str, raw: &str) -> Result<Self, ModelError> {
        let package: ModelPackage = serde_json::from_str(raw).map_err(|e| ModelError::Invalid {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        package.validate(name)?;
        Ok(package)
    }

    fn validate(&self, name: &str) -> Result<(), ModelError> {
        if self.lang != "es" {
            return Err(ModelError::Invalid {
                name: name.to_string(),
                reason: format!("idioma '{}' não suportado (esperado 'es')", self.lang),
            });
        }
        if self.lexicon.is_empty() {
            return Err(ModelError::Invalid {
                name: name.to_string(),
                reason: "léxico vazio".to_string(),
            });
        }
        if let Some(rule) = self.suffix_rules.iter().find(|r| r.suffix.is_empty()) {
            return Err(ModelError::Invalid {
                name: name.to_string(),
                reason: format!("regra de sufixo vazia para a classe {}", rule.pos),
            });
        }
        Ok(())
    }
}

fn install_instructions(name: &str, path: &Path) -> String {
    let dir = path
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string());
    format!(
        "Instale o modelo espanhol copiando '{name}.json' (disponível em models/ no repositório) para {dir}, \
         ou indique o diretório correto com --models-dir."
    )
}
