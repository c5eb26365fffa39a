//! Extração de palavras-chave por classe gramatical.
//!
//! Seleciona substantivos, adjetivos e nomes próprios que não sejam stopwords
//! nem pontuação e tenham mais de 2 caracteres; devolve o lema em minúsculas,
//! sem repetições, na ordem da primeira ocorrência.

use std::collections::HashSet;

use crate::document::{AnnotatedDocument, DocToken};

/// Classes gramaticais aceitas como palavra-chave.
pub const KEYWORD_POS: &[&str] = &["NOUN", "ADJ", "PROPN"];

/// Comprimento mínimo (exclusivo) da forma superficial, em caracteres.
pub const MIN_KEYWORD_CHARS: usize = 2;

/// Indica se o token é candidato a palavra-chave.
pub fn is_keyword_candidate(token: &DocToken) -> bool {
    KEYWORD_POS.contains(&token.pos.as_str())
        && !token.is_stop
        && !token.is_punct
        && token.text.chars().count() > MIN_KEYWORD_CHARS
}

/// Extrai as palavras-chave do documento.
pub fn extract_keywords(doc: &AnnotatedDocument) -> Vec<String> {
    let mut seen = HashSet::new();
    doc.tokens
        .iter()
        .filter(|t| is_keyword_candidate(t))
        .map(|t| t.lemma.to_lowercase())
        .filter(|lemma| seen.insert(lemma.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, lemma: &str, pos: &str, is_stop: bool) -> DocToken {
        DocToken {
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            tag: pos.to_string(),
            dep: "dep".to_string(),
            head: 0,
            is_alpha: text.chars().all(char::is_alphabetic),
            is_stop,
            is_punct: pos == "PUNCT",
        }
    }

    fn doc(tokens: Vec<DocToken>) -> AnnotatedDocument {
        AnnotatedDocument {
            text: String::new(),
            tokens,
            entities: vec![],
        }
    }

    #[test]
    fn test_selects_nouns_adjectives_and_proper_nouns() {
        let d = doc(vec![
            token("Las", "el", "DET", true),
            token("casas", "casa", "NOUN", false),
            token("blancas", "blanco", "ADJ", false),
            token("de", "de", "ADP", true),
            token("Sevilla", "Sevilla", "PROPN", false),
            token("brillan", "brillar", "VERB", false),
            token(".", ".", "PUNCT", false),
        ]);
        assert_eq!(extract_keywords(&d), vec!["casa", "blanco", "sevilla"]);
    }

    #[test]
    fn test_excludes_short_and_stopwords() {
        let d = doc(vec![
            token("sol", "sol", "NOUN", false),
            token("té", "té", "NOUN", false),
            token("otro", "otro", "ADJ", true),
            token("UE", "UE", "PROPN", false),
        ]);
        assert_eq!(extract_keywords(&d), vec!["sol"]);
    }

    #[test]
    fn test_excludes_punctuation_even_with_content_pos() {
        let mut dash = token("---", "---", "NOUN", false);
        dash.is_punct = true;
        let mut quotes = token("«»«", "«»«", "ADJ", false);
        quotes.is_punct = true;
        let d = doc(vec![dash, token("mesa", "mesa", "NOUN", false), quotes]);
        assert_eq!(extract_keywords(&d), vec!["mesa"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "año" tem 3 caracteres e 4 bytes; "ñu" tem 2 caracteres e 3 bytes
        let d = doc(vec![
            token("año", "año", "NOUN", false),
            token("ñu", "ñu", "NOUN", false),
        ]);
        assert_eq!(extract_keywords(&d), vec!["año"]);
    }

    #[test]
    fn test_deduplicates_by_lowercased_lemma() {
        let d = doc(vec![
            token("Madrid", "Madrid", "PROPN", false),
            token("ciudad", "ciudad", "NOUN", false),
            token("MADRID", "MADRID", "PROPN", false),
            token("ciudades", "ciudad", "NOUN", false),
        ]);
        assert_eq!(extract_keywords(&d), vec!["madrid", "ciudad"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_keywords(&doc(vec![])).is_empty());
    }
}
