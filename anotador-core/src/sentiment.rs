//! # Sentimento por Léxico
//!
//! Heurística grosseira: procura palavras de dois léxicos fixos (positivo e
//! negativo) no texto em minúsculas e compara as contagens.
//!
//! A busca é por **substring**, não por token: "malos" e "malograr" contam
//! como ocorrência de "malo". Cada palavra do léxico conta no máximo uma vez,
//! independente de quantas vezes aparece.

use serde::{Deserialize, Serialize};

/// Léxico positivo padrão.
pub const POSITIVE_LEXICON: &[&str] = &[
    "bueno", "excelente", "genial", "perfecto", "increíble", "fantástico",
];

/// Léxico negativo padrão.
pub const NEGATIVE_LEXICON: &[&str] = &["malo", "terrible", "horrible", "pésimo", "deficiente"];

/// Rótulo de sentimento do documento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// Par de listas de palavras usado pela heurística.
///
/// As palavras são guardadas em minúsculas, já que a comparação é feita
/// contra o texto em minúsculas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentLexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl SentimentLexicon {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            positive: positive.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
            negative: negative.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    /// Classifica o texto comparando quantas palavras de cada léxico aparecem nele.
    pub fn classify(&self, text: &str) -> Sentiment {
        let lowered = text.to_lowercase();
        let positive = count_matches(&self.positive, &lowered);
        let negative = count_matches(&self.negative, &lowered);

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new(POSITIVE_LEXICON, NEGATIVE_LEXICON)
    }
}

fn count_matches(words: &[String], lowered: &str) -> usize {
    words.iter().filter(|w| lowered.contains(w.as_str())).count()
}
