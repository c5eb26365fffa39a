//! # Etiquetador Morfossintático
//!
//! Atribui a cada token um lema, uma classe gramatical grossa (padrão
//! Universal Dependencies) e uma tag fina, usando os recursos do pacote de
//! modelo.
//!
//! ## Ordem de decisão
//!
//! 1. Pontuação → `PUNCT`; símbolos sem letras nem dígitos → `SYM`.
//! 2. Números ("12", "3,5", "1.000") → `NUM`.
//! 3. Tratamentos do pacote ("Sr.", "Dra.", "Señora") → `NOUN`.
//! 4. Entrada do léxico para a forma em minúsculas.
//! 5. Palavra capitalizada fora do início de sentença, ou presente nos
//!    gazetteers, ou sigla em maiúsculas → `PROPN`.
//! 6. Regras de sufixo (o sufixo mais longo vence).
//! 7. Palavra capitalizada no início de sentença sem outra pista → `PROPN`.
//! 8. Caso contrário, `NOUN`, com o plural removido do lema.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::package::{LexEntry, ModelPackage, SuffixRule};
use crate::tokenizer::Token;

/// Um token com a análise morfossintática.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub lemma: String,
    pub pos: String,
    pub tag: String,
    pub is_alpha: bool,
    pub is_stop: bool,
    pub is_punct: bool,
}

/// Indica se o caractere é sinal de pontuação.
pub fn is_punct_char(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | ';' | ':' | '!' | '?' | '¿' | '¡' | '"' | '\'' | '(' | ')' | '[' | ']'
            | '{' | '}' | '-' | '–' | '—' | '…' | '«' | '»' | '“' | '”' | '‘' | '’' | '/'
            | '\\' | '_'
    )
}

fn grapheme_is_upper(g: &str) -> bool {
    g.chars().next().map(char::is_uppercase).unwrap_or(false)
}

/// Primeira letra maiúscula, comparando grafemas ("É" decomposto conta como uma letra).
pub fn starts_uppercase(text: &str) -> bool {
    text.graphemes(true).next().map(grapheme_is_upper).unwrap_or(false)
}

/// Sigla: dois ou mais grafemas, todos em maiúscula ("ONU", "UE").
pub fn is_acronym(text: &str) -> bool {
    let mut count = 0;
    for g in text.graphemes(true) {
        if !grapheme_is_upper(g) {
            return false;
        }
        count += 1;
    }
    count > 1
}

/// Etiquetador baseado em léxico + regras.
pub struct PosTagger {
    lexicon: HashMap<String, LexEntry>,
    /// Ordenadas do sufixo mais longo para o mais curto.
    suffix_rules: Vec<SuffixRule>,
    stop_words: HashSet<String>,
    /// Palavras (minúsculas) que aparecem em algum gazetteer.
    known_names: HashSet<String>,
    /// Tratamentos ("señora", "dra."): nunca são nome próprio, mesmo capitalizados.
    person_titles: HashSet<String>,
    number_pattern: Regex,
}

impl PosTagger {
    pub fn new(package: &ModelPackage) -> Self {
        let mut suffix_rules = package.suffix_rules.clone();
        suffix_rules.sort_by(|a, b| b.suffix.chars().count().cmp(&a.suffix.chars().count()));

        let known_names = package
            .gazetteers
            .values()
            .flatten()
            .flat_map(|name| name.split_whitespace())
            .filter(|w| starts_uppercase(w))
            .map(|w| w.to_lowercase())
            .collect();

        Self {
            lexicon: package
                .lexicon
                .iter()
                .map(|(form, entry)| (form.to_lowercase(), entry.clone()))
                .collect(),
            suffix_rules,
            stop_words: package.stop_words.iter().map(|w| w.to_lowercase()).collect(),
            known_names,
            person_titles: package.person_titles.iter().map(|t| t.to_lowercase()).collect(),
            number_pattern: Regex::new(r"^\d+([.,]\d+)*(º|ª)?$").expect("padrão numérico válido"),
        }
    }

    pub fn is_stop_word(&self, lower: &str) -> bool {
        self.stop_words.contains(lower)
    }

    /// Etiqueta um único token.
    ///
    /// `sentence_initial` indica que o token abre a sentença (a capitalização
    /// ali não é pista de nome próprio).
    pub fn tag(&self, token: &Token, sentence_initial: bool) -> TaggedToken {
        let text = token.text.as_str();
        let lower = text.to_lowercase();
        let is_punct = !text.is_empty() && text.chars().all(is_punct_char);
        let is_alpha = !text.is_empty()
            && text
                .graphemes(true)
                .all(|g| g.chars().next().map(char::is_alphabetic).unwrap_or(false));

        let (lemma, pos, tag) = self.analyze(text, &lower, is_punct, sentence_initial);

        TaggedToken {
            text: text.to_string(),
            lemma,
            tag: tag.unwrap_or_else(|| pos.clone()),
            pos,
            is_alpha,
            is_stop: self.is_stop_word(&lower),
            is_punct,
        }
    }

    fn analyze(
        &self,
        text: &str,
        lower: &str,
        is_punct: bool,
        sentence_initial: bool,
    ) -> (String, String, Option<String>) {
        if is_punct {
            return (text.to_string(), "PUNCT".to_string(), None);
        }
        if !text.chars().any(char::is_alphanumeric) {
            return (text.to_string(), "SYM".to_string(), None);
        }
        if self.number_pattern.is_match(text) {
            return (text.to_string(), "NUM".to_string(), None);
        }

        if self.person_titles.contains(lower) {
            return match self.lexicon.get(lower) {
                Some(entry) => (entry.lemma.clone(), entry.pos.clone(), entry.tag.clone()),
                None => (lower.to_string(), "NOUN".to_string(), None),
            };
        }

        let capitalized = starts_uppercase(text);
        let acronym = is_acronym(text);

        if let Some(entry) = self.lexicon.get(lower) {
            // Em maiúscula no meio da frase, só palavras gramaticais mantêm a entrada
            let closed_class = matches!(
                entry.pos.as_str(),
                "DET" | "ADP" | "PRON" | "CCONJ" | "SCONJ" | "AUX"
            );
            if !capitalized || sentence_initial || closed_class {
                return (entry.lemma.clone(), entry.pos.clone(), entry.tag.clone());
            }
        }

        if (capitalized && (!sentence_initial || self.known_names.contains(lower))) || acronym {
            return (text.to_string(), "PROPN".to_string(), None);
        }

        if let Some(rule) = self.match_suffix(lower) {
            return (rule.lemmatize(lower), rule.pos.clone(), rule.tag.clone());
        }

        if capitalized {
            return (text.to_string(), "PROPN".to_string(), None);
        }

        (singularize(lower), "NOUN".to_string(), None)
    }

    fn match_suffix(&self, lower: &str) -> Option<&SuffixRule> {
        let len = lower.chars().count();
        self.suffix_rules
            .iter()
            .find(|rule| lower.ends_with(rule.suffix.as_str()) && len > rule.suffix.chars().count() + 1)
    }
}

/// Remove o plural regular de um substantivo: "casas" → "casa", "ciudades" → "ciudad".
pub fn singularize(lower: &str) -> String {
    let chars: Vec<char> = lower.chars().collect();
    let n = chars.len();
    if n <= 3 || chars[n - 1] != 's' {
        return lower.to_string();
    }
    let is_vowel = |c: char| "aeiouáéíóú".contains(c);
    if n > 4 && chars[n - 2] == 'e' && !is_vowel(chars[n - 3]) {
        return chars[..n - 2].iter().collect();
    }
    if is_vowel(chars[n - 2]) {
        return chars[..n - 1].iter().collect();
    }
    lower.to_string()
}
