//! Backend spaCy: delega a anotação a um pipeline Python carregado com
//! `spacy.load(nome)`.
//!
//! Disponível apenas com a feature `spacy`. O modelo precisa estar instalado
//! no Python embarcado:
//!
//! ```bash
//! python -m spacy download es_core_news_sm
//! ```

use pyo3::prelude::*;
use tracing::info;

use crate::document::{AnnotatedDocument, DocEntity, DocToken};
use crate::model::{LanguageModel, ModelError};

/// Mapeia erros do Python para falhas de inferência.
macro_rules! py_err {
    ($operation:expr) => {
        |e: PyErr| ModelError::Inference(format!("falha ao {}: {}", $operation, e))
    };
}

/// Pipeline spaCy já carregado.
pub struct SpacyModel {
    name: String,
    nlp: Py<PyAny>,
}

impl SpacyModel {
    /// Importa o spaCy e carrega o pipeline `name`.
    pub fn load(name: &str) -> Result<Self, ModelError> {
        let not_found = |e: PyErr| ModelError::NotFound {
            name: name.to_string(),
            path: "spaCy".to_string(),
            remediation: format!(
                "Instale o modelo com: python -m spacy download {} ({})",
                name, e
            ),
        };

        let nlp = Python::with_gil(|py| -> Result<Py<PyAny>, ModelError> {
            let spacy = py.import_bound("spacy").map_err(not_found)?;
            let nlp = spacy.call_method1("load", (name,)).map_err(not_found)?;
            Ok(nlp.unbind())
        })?;

        info!("Pipeline spaCy '{}' carregado", name);
        Ok(Self {
            name: name.to_string(),
            nlp,
        })
    }
}

fn attr<'py, T: FromPyObject<'py>>(obj: &Bound<'py, PyAny>, name: &str) -> Result<T, ModelError> {
    obj.getattr(name)
        .and_then(|v| v.extract::<T>())
        .map_err(py_err!(format!("ler o atributo {}", name)))
}

impl LanguageModel for SpacyModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, ModelError> {
        Python::with_gil(|py| {
            let doc = self
                .nlp
                .bind(py)
                .call1((text,))
                .map_err(py_err!("processar o texto"))?;

            let mut tokens = Vec::new();
            for token in doc.iter().map_err(py_err!("iterar os tokens"))? {
                let token = token.map_err(py_err!("ler um token"))?;
                let head = token.getattr("head").map_err(py_err!("ler o head"))?;
                tokens.push(DocToken {
                    text: attr(&token, "text")?,
                    lemma: attr(&token, "lemma_")?,
                    pos: attr(&token, "pos_")?,
                    tag: attr(&token, "tag_")?,
                    dep: attr(&token, "dep_")?,
                    head: attr(&head, "i")?,
                    is_alpha: attr(&token, "is_alpha")?,
                    is_stop: attr(&token, "is_stop")?,
                    is_punct: attr(&token, "is_punct")?,
                });
            }

            let mut entities = Vec::new();
            let ents = doc.getattr("ents").map_err(py_err!("ler as entidades"))?;
            for ent in ents.iter().map_err(py_err!("iterar as entidades"))? {
                let ent = ent.map_err(py_err!("ler uma entidade"))?;
                entities.push(DocEntity {
                    text: attr(&ent, "text")?,
                    label: attr(&ent, "label_")?,
                    start_char: attr(&ent, "start_char")?,
                    end_char: attr(&ent, "end_char")?,
                });
            }

            Ok(AnnotatedDocument {
                text: text.to_string(),
                tokens,
                entities,
            })
        })
    }
}
