//! # Parser de Dependências por Regras
//!
//! Constrói, para cada sentença, uma árvore de dependências a partir apenas
//! das classes gramaticais. Não há aprendizado: são regras de vizinhança
//! típicas do espanhol (determinante antes do nome, adjetivo depois, preposição
//! introduzindo o complemento...).
//!
//! ## Escolha da raiz
//!
//! 1. Primeiro `VERB` da sentença.
//! 2. Sem verbo pleno: primeiro `AUX`. Se um predicativo (`ADJ`, `NOUN`,
//!    `PROPN`) vier depois dele, o predicativo vira raiz e o `AUX` recebe
//!    `cop` ("es excelente").
//! 3. Sem verbo: primeiro nominal; senão o primeiro token.
//!
//! A raiz aponta para si mesma e recebe o rótulo `ROOT`.

use std::ops::Range;

use crate::document::ROOT_LABEL;

/// Relação de dependência atribuída a um token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc {
    /// Índice absoluto do token governante.
    pub head: usize,
    pub label: &'static str,
}

fn is_nominal(pos: &str) -> bool {
    matches!(pos, "NOUN" | "PROPN" | "PRON")
}

fn is_modifier(pos: &str) -> bool {
    matches!(pos, "DET" | "NUM" | "ADJ" | "ADV")
}

/// Classes que participam de coordenação ("A y B").
fn is_conjunct(pos: &str) -> bool {
    is_nominal(pos) || matches!(pos, "ADJ" | "VERB")
}

/// Classe usada para casar os dois lados de uma coordenação.
fn conj_class(pos: &str) -> &str {
    if is_nominal(pos) {
        "NOMINAL"
    } else {
        pos
    }
}

/// Analisa todas as sentenças, devolvendo uma relação por token.
pub fn parse(pos: &[&str], sentences: &[Range<usize>]) -> Vec<Arc> {
    let mut arcs = Vec::with_capacity(pos.len());
    for range in sentences {
        let offset = range.start;
        arcs.extend(
            SentenceParser::new(&pos[range.clone()])
                .parse()
                .into_iter()
                .map(|(head, label)| Arc {
                    head: head + offset,
                    label,
                }),
        );
    }
    arcs
}

struct SentenceParser<'a> {
    pos: &'a [&'a str],
    root: usize,
    copula: Option<usize>,
}

impl<'a> SentenceParser<'a> {
    fn new(pos: &'a [&'a str]) -> Self {
        let (root, copula) = choose_root(pos);
        Self { pos, root, copula }
    }

    fn parse(&self) -> Vec<(usize, &'static str)> {
        (0..self.pos.len())
            .map(|i| {
                if i == self.root {
                    (i, ROOT_LABEL)
                } else {
                    self.attach(i)
                }
            })
            .collect()
    }

    fn attach(&self, i: usize) -> (usize, &'static str) {
        let pos = self.pos[i];

        if let Some(first) = self.first_conjunct(i) {
            return (first, "conj");
        }

        match pos {
            "PUNCT" => (self.root, "punct"),
            "DET" => self.next_nominal(i).map_or((self.root, "dep"), |h| (h, "det")),
            "NUM" => self.next_nominal(i).map_or((self.root, "nummod"), |h| (h, "nummod")),
            "ADP" => self.next_complement(i).map_or((self.root, "dep"), |h| (h, "case")),
            "ADJ" => self.adjective_head(i).map_or((self.root, "dep"), |h| (h, "amod")),
            "ADV" => (self.root, "advmod"),
            "AUX" if Some(i) == self.copula => (self.root, "cop"),
            "AUX" => (self.next_verb(i).unwrap_or(self.root), "aux"),
            "CCONJ" => self
                .scan_forward(i, is_conjunct)
                .map_or((self.root, "cc"), |h| (h, "cc")),
            "SCONJ" => (self.next_verb(i).unwrap_or(self.root), "mark"),
            "PROPN" if i > 0 && self.pos[i - 1] == "PROPN" => (self.flat_head(i), "flat"),
            p if is_nominal(p) => self.nominal_head(i),
            "VERB" if i > 0 && matches!(self.pos[i - 1], "VERB" | "AUX") => (self.root, "xcomp"),
            "VERB" => (self.root, "advcl"),
            _ => (self.root, "dep"),
        }
    }

    /// Quando `i` vem logo após uma conjunção, procura o conjunto anterior de mesma classe.
    fn first_conjunct(&self, i: usize) -> Option<usize> {
        if !is_conjunct(self.pos[i]) {
            return None;
        }
        let cc = (0..i)
            .rev()
            .find(|&j| !matches!(self.pos[j], "DET" | "NUM" | "ADV"))?;
        if self.pos[cc] != "CCONJ" {
            return None;
        }
        let class = conj_class(self.pos[i]);
        (0..cc).rev().find(|&j| conj_class(self.pos[j]) == class)
    }

    fn next_nominal(&self, i: usize) -> Option<usize> {
        self.scan_forward(i, is_nominal)
    }

    fn next_complement(&self, i: usize) -> Option<usize> {
        self.scan_forward(i, |p| is_nominal(p) || p == "VERB")
    }

    fn next_verb(&self, i: usize) -> Option<usize> {
        (i + 1..self.pos.len()).find(|&j| self.pos[j] == "VERB")
    }

    /// Avança sobre modificadores até achar um token aceito por `accept`.
    fn scan_forward(&self, i: usize, accept: impl Fn(&str) -> bool) -> Option<usize> {
        for j in i + 1..self.pos.len() {
            let p = self.pos[j];
            if accept(p) {
                return Some(j);
            }
            if !is_modifier(p) {
                return None;
            }
        }
        None
    }

    fn adjective_head(&self, i: usize) -> Option<usize> {
        // Posposto: "casa blanca", "casa grande y bonita"
        let before = (0..i)
            .rev()
            .take_while(|&j| matches!(self.pos[j], "ADJ" | "ADV" | "NOUN" | "PROPN"))
            .find(|&j| matches!(self.pos[j], "NOUN" | "PROPN"));
        // Anteposto: "gran ciudad"
        before.or_else(|| self.next_nominal(i).filter(|&j| self.pos[j] != "PRON"))
    }

    fn flat_head(&self, i: usize) -> usize {
        let mut j = i;
        while j > 0 && self.pos[j - 1] == "PROPN" {
            j -= 1;
        }
        j
    }

    fn nominal_head(&self, i: usize) -> (usize, &'static str) {
        // Volta sobre os modificadores até a preposição, se houver
        let mut j = i;
        while j > 0 && matches!(self.pos[j - 1], "DET" | "NUM" | "ADJ") {
            j -= 1;
        }
        if j > 0 && self.pos[j - 1] == "ADP" {
            let adp = j - 1;
            if adp > 0 && matches!(self.pos[adp - 1], "NOUN" | "PROPN") {
                return (adp - 1, "nmod");
            }
            return (self.root, "obl");
        }
        if i < self.root {
            (self.root, "nsubj")
        } else {
            (self.root, "obj")
        }
    }
}

fn choose_root(pos: &[&str]) -> (usize, Option<usize>) {
    if let Some(verb) = pos.iter().position(|p| *p == "VERB") {
        return (verb, None);
    }
    if let Some(aux) = pos.iter().position(|p| *p == "AUX") {
        let predicate = (aux + 1..pos.len()).find(|&j| matches!(pos[j], "ADJ" | "NOUN" | "PROPN"));
        return match predicate {
            Some(pred) => (pred, Some(aux)),
            None => (aux, None),
        };
    }
    let root = pos.iter().position(|p| is_nominal(p)).unwrap_or(0);
    (root, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(pos: &[&str]) -> Vec<(usize, &'static str)> {
        parse(pos, &[0..pos.len()])
            .into_iter()
            .map(|a| (a.head, a.label))
            .collect()
    }

    #[test]
    fn test_simple_transitive() {
        // El perro come carne .
        let arcs = parse_one(&["DET", "NOUN", "VERB", "NOUN", "PUNCT"]);
        assert_eq!(
            arcs,
            vec![(1, "det"), (2, "nsubj"), (2, "ROOT"), (2, "obj"), (2, "punct")]
        );
    }

    #[test]
    fn test_copula_with_coordinated_adjectives() {
        // Este producto es excelente y genial
        let arcs = parse_one(&["DET", "NOUN", "AUX", "ADJ", "CCONJ", "ADJ"]);
        assert_eq!(arcs[3], (3, "ROOT"));
        assert_eq!(arcs[2], (3, "cop"));
        assert_eq!(arcs[1], (3, "nsubj"));
        assert_eq!(arcs[4], (5, "cc"));
        assert_eq!(arcs[5], (3, "conj"));
    }

    #[test]
    fn test_prepositional_modifiers() {
        // La casa de Juan Pérez está en Madrid
        let arcs = parse_one(&["DET", "NOUN", "ADP", "PROPN", "PROPN", "VERB", "ADP", "PROPN"]);
        assert_eq!(arcs[2], (3, "case"));
        assert_eq!(arcs[3], (1, "nmod"));
        assert_eq!(arcs[4], (3, "flat"));
        assert_eq!(arcs[6], (7, "case"));
        assert_eq!(arcs[7], (5, "obl"));
    }

    #[test]
    fn test_adjective_attaches_to_noun() {
        // una gran ciudad antigua
        let arcs = parse_one(&["DET", "ADJ", "NOUN", "ADJ"]);
        assert_eq!(arcs[2], (2, "ROOT"));
        assert_eq!(arcs[0], (2, "det"));
        assert_eq!(arcs[1], (2, "amod"));
        assert_eq!(arcs[3], (2, "amod"));
    }

    #[test]
    fn test_one_root_per_sentence_with_offsets() {
        let pos = ["PROPN", "VERB", "PUNCT", "PRON", "VERB", "PUNCT"];
        let arcs = parse(&pos, &[0..3, 3..6]);
        let roots: Vec<usize> = arcs
            .iter()
            .enumerate()
            .filter(|(_, a)| a.label == ROOT_LABEL)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(roots, vec![1, 4]);
        assert_eq!(arcs[3].head, 4);
        assert_eq!(arcs[5].head, 4);
    }

    #[test]
    fn test_sentence_without_verb_or_nominal() {
        let arcs = parse_one(&["INTJ", "PUNCT"]);
        assert_eq!(arcs, vec![(0, "ROOT"), (0, "punct")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse(&[], &[]).is_empty());
    }
}
