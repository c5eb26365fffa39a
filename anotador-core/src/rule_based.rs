//! # Reconhecimento de Entidades por Regras
//!
//! Combina duas fontes de evidência:
//!
//! 1. **Gazetteers** do pacote de modelo: nomes conhecidos (possivelmente com
//!    várias palavras) associados a um rótulo. O casamento mais longo vence.
//! 2. **Sequências de nomes próprios**: tokens `PROPN` consecutivos (com
//!    conectores como "de" entre eles) formam uma entidade. O rótulo vem de uma
//!    palavra do gazetteer dentro da sequência, de um tratamento anterior
//!    ("señor", "presidenta" → `PER`) ou, na falta de pistas, `MISC`.

use std::collections::HashMap;

use crate::package::ModelPackage;
use crate::tagger::{starts_uppercase, TaggedToken};
use crate::tokenizer::Token;

/// Rótulo usado quando não há pista da categoria.
pub const FALLBACK_LABEL: &str = "MISC";

/// Rótulo atribuído a nomes precedidos de tratamento.
pub const PERSON_LABEL: &str = "PER";

/// Palavras que podem ligar partes de um mesmo nome ("Universidad de Salamanca").
const NAME_CONNECTORS: &[&str] = &["de", "del"];

/// Um span de entidade em índices de token (fim exclusivo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMatch {
    pub start: usize,
    pub end: usize,
    pub label: String,
    pub rule_name: String,
}

/// Motor de regras com gazetteers e tratamentos.
pub struct RuleEngine {
    /// Nomes conhecidos já divididos em palavras (minúsculas), do mais longo ao mais curto.
    entries: Vec<(Vec<String>, String)>,
    /// Palavra isolada (minúsculas) → rótulo, para rotular sequências de nomes próprios.
    word_labels: HashMap<String, String>,
    person_titles: Vec<String>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            word_labels: HashMap::new(),
            person_titles: vec![],
        }
    }

    /// Constrói o motor a partir dos gazetteers e tratamentos do pacote.
    pub fn from_package(package: &ModelPackage) -> Self {
        let mut engine = Self::new();
        for (label, names) in &package.gazetteers {
            for name in names {
                engine.add_entity(name, label);
            }
        }
        for title in &package.person_titles {
            engine.add_person_title(title);
        }
        engine
    }

    pub fn add_entity(&mut self, name: &str, label: &str) {
        let parts: Vec<String> = name.split_whitespace().map(|p| p.to_lowercase()).collect();
        if parts.is_empty() {
            return;
        }
        for part in &parts {
            if !NAME_CONNECTORS.contains(&part.as_str()) {
                self.word_labels
                    .entry(part.clone())
                    .or_insert_with(|| label.to_string());
            }
        }
        let pos = self
            .entries
            .iter()
            .position(|(p, _)| p.len() < parts.len())
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, (parts, label.to_string()));
    }

    pub fn add_person_title(&mut self, title: &str) {
        self.person_titles.push(title.to_lowercase());
    }

    /// Aplica as regras, devolvendo spans sem sobreposição em ordem de texto.
    pub fn apply(&self, tokens: &[Token], tagged: &[TaggedToken]) -> Vec<EntityMatch> {
        let lower: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        let mut matches = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let gazetteer = self.match_gazetteer(&lower, tagged, i);
            let run_end = (tagged[i].pos == "PROPN").then(|| self.proper_noun_run_end(&lower, tagged, i));

            // Um nome próprio mais longo que o casamento do gazetteer prevalece
            let m = match (gazetteer, run_end) {
                // "Dra. Gómez": o tratamento fica fora do nome e rotula a sequência seguinte
                (None, _) if self.person_titles.contains(&lower[i]) => {
                    i += 1;
                    continue;
                }
                (Some(g), Some(end)) if g.end < end => self.run_match(&lower, i, end),
                (Some(g), _) => g,
                (None, Some(end)) => self.run_match(&lower, i, end),
                (None, None) => {
                    i += 1;
                    continue;
                }
            };
            i = m.end;
            matches.push(m);
        }

        matches
    }

    fn match_gazetteer(&self, lower: &[String], tagged: &[TaggedToken], i: usize) -> Option<EntityMatch> {
        // Nomes do gazetteer só casam começando por maiúscula ("Buenos Aires", não "buenos aires")
        if !starts_uppercase(&tagged[i].text) {
            return None;
        }
        self.entries
            .iter()
            .find(|(parts, _)| {
                i + parts.len() <= lower.len()
                    && parts.iter().enumerate().all(|(j, part)| lower[i + j] == *part)
            })
            .map(|(parts, label)| EntityMatch {
                start: i,
                end: i + parts.len(),
                label: label.clone(),
                rule_name: "gazetteer".to_string(),
            })
    }

    /// Estende a sequência de nomes próprios iniciada em `start`.
    fn proper_noun_run_end(&self, lower: &[String], tagged: &[TaggedToken], start: usize) -> usize {
        let mut end = start + 1;
        loop {
            if end < tagged.len() && tagged[end].pos == "PROPN" {
                end += 1;
                continue;
            }
            // "Universidad de Salamanca": conector seguido de outro nome próprio
            let connector = end < tagged.len() && NAME_CONNECTORS.contains(&lower[end].as_str());
            if connector && end + 1 < tagged.len() && tagged[end + 1].pos == "PROPN" {
                end += 2;
                continue;
            }
            return end;
        }
    }

    fn run_match(&self, lower: &[String], start: usize, end: usize) -> EntityMatch {
        let (label, rule_name) =
            if let Some(label) = lower[start..end].iter().find_map(|w| self.word_labels.get(w)) {
                (label.clone(), "gazetteer_word")
            } else if start > 0 && self.person_titles.contains(&lower[start - 1]) {
                (PERSON_LABEL.to_string(), "title_pattern")
            } else {
                (FALLBACK_LABEL.to_string(), "proper_noun_run")
            };
        EntityMatch {
            start,
            end,
            label,
            rule_name: rule_name.to_string(),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    /// Etiquetagem mínima: maiúscula fora do início vira PROPN.
    fn tag(tokens: &[Token]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|t| {
                let upper = t.text.chars().next().map(char::is_uppercase).unwrap_or(false);
                TaggedToken {
                    text: t.text.clone(),
                    lemma: t.text.to_lowercase(),
                    pos: if upper && t.index > 0 { "PROPN" } else { "NOUN" }.to_string(),
                    tag: String::new(),
                    is_alpha: true,
                    is_stop: false,
                    is_punct: false,
                }
            })
            .collect()
    }

    fn run(engine: &RuleEngine, text: &str) -> Vec<(String, String)> {
        let tokens = tokenize(text);
        let tagged = tag(&tokens);
        engine
            .apply(&tokens, &tagged)
            .into_iter()
            .map(|m| {
                let words: Vec<&str> = tokens[m.start..m.end].iter().map(|t| t.text.as_str()).collect();
                (words.join(" "), m.label)
            })
            .collect()
    }

    #[test]
    fn test_multiword_gazetteer_longest_first() {
        let mut engine = RuleEngine::new();
        engine.add_entity("Real", "ORG");
        engine.add_entity("Real Madrid", "ORG");
        engine.add_entity("Madrid", "LOC");

        let found = run(&engine, "ayer el Real Madrid ganó en Madrid");
        assert_eq!(
            found,
            vec![
                ("Real Madrid".to_string(), "ORG".to_string()),
                ("Madrid".to_string(), "LOC".to_string()),
            ]
        );
    }

    #[test]
    fn test_title_pattern() {
        let mut engine = RuleEngine::new();
        engine.add_person_title("señora");
        let found = run(&engine, "habló la señora Gutiérrez");
        assert_eq!(found, vec![("Gutiérrez".to_string(), "PER".to_string())]);
    }

    #[test]
    fn test_abbreviated_title_is_left_out_of_the_name() {
        let mut engine = RuleEngine::new();
        engine.add_person_title("dra.");
        engine.add_person_title("sr.");
        // A etiquetagem mínima marca "Dra." e "Sr." como PROPN
        assert_eq!(
            run(&engine, "habló la Dra. Gómez ayer"),
            vec![("Gómez".to_string(), "PER".to_string())]
        );
        assert_eq!(
            run(&engine, "ayer habló el Sr. Ruiz"),
            vec![("Ruiz".to_string(), "PER".to_string())]
        );
    }

    #[test]
    fn test_run_with_connector_and_word_label() {
        let mut engine = RuleEngine::new();
        engine.add_entity("Universidad", "ORG");
        let found = run(&engine, "estudia en la Universidad de Salamanca");
        assert_eq!(
            found,
            vec![("Universidad de Salamanca".to_string(), "ORG".to_string())]
        );
    }

    #[test]
    fn test_unknown_run_is_misc() {
        let engine = RuleEngine::new();
        let found = run(&engine, "vimos Xanadu Quimera hoy");
        assert_eq!(found, vec![("Xanadu Quimera".to_string(), "MISC".to_string())]);
    }

    #[test]
    fn test_lowercase_gazetteer_words_do_not_match() {
        let mut engine = RuleEngine::new();
        engine.add_entity("Buenos Aires", "LOC");
        assert!(run(&engine, "días buenos aires limpios").is_empty());
    }
}
