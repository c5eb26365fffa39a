//! # Tokenizador para Espanhol
//!
//! Divide o texto bruto em tokens (palavras e pontuações) preservando a
//! posição original de cada um, para que entidades possam ser devolvidas com
//! offsets exatos.
//!
//! ## Regras
//!
//! - Espaços separam tokens e nunca viram token.
//! - Letras, dígitos, hífens internos e apóstrofos formam palavras ("bien-estar").
//! - `.` após abreviação conhecida ("Sr.", "Dra.", "etc.") fica no token.
//! - `.` e `,` entre dígitos ficam no número ("3,5", "1.000").
//! - Qualquer outro símbolo, incluindo `¿` e `¡`, vira um token próprio.
//!
//! ```rust
//! use anotador_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("¿Vino la Sra. Pérez?");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["¿", "Vino", "la", "Sra.", "Pérez", "?"]);
//! ```

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    /// Índice de byte inicial no texto original (inclusivo).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Posição sequencial do token.
    pub index: usize,
}

/// Abreviações comuns em espanhol cujo ponto não encerra a sentença.
const ABBREVIATIONS: &[&str] = &[
    "Sr", "Sra", "Srta", "Sres", "Dr", "Dra", "Drs", "Ud", "Uds", "Vd", "Vds", "Lic", "Ing",
    "Prof", "Profa", "Arq", "Gral", "Cnel", "Tte", "Sto", "Sta", "Dña", "Dn", "Mons", "Av",
    "Avda", "etc", "pág", "págs", "núm", "tel", "aprox", "cap", "vol", "ej", "p", "pp", "km",
    "kg", "cm", "mm",
];

/// Tokens que encerram uma sentença.
const SENTENCE_TERMINATORS: &[&str] = &[".", "!", "?", "…"];

/// Tokeniza o texto.
///
/// Percorre grafemas, não `char`s: um acento combinante fica colado à letra.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current_start = 0;
    let mut current_text = String::new();
    let graphemes: Vec<(usize, &str)> = text.grapheme_indices(true).collect();
    let first_char = |g: &str| g.chars().next().unwrap_or(' ');

    for (i, &(byte_pos, g)) in graphemes.iter().enumerate() {
        let ch = first_char(g);
        let next = graphemes.get(i + 1).map(|&(_, n)| first_char(n));

        if ch.is_alphanumeric() {
            if current_text.is_empty() {
                current_start = byte_pos;
            }
            current_text.push_str(g);
        } else if (ch == '-' || ch == '\'' || ch == '\u{2019}')
            && !current_text.is_empty()
            && next.map(char::is_alphanumeric).unwrap_or(false)
        {
            // Hífen ou apóstrofo interno: "bien-estar", "O'Donnell"
            current_text.push_str(g);
        } else if (ch == '.' || ch == ',')
            && !current_text.is_empty()
            && current_text.chars().all(|c| c.is_numeric() || c == '.' || c == ',')
            && next.map(char::is_numeric).unwrap_or(false)
        {
            // Separador decimal ou de milhar
            current_text.push_str(g);
        } else if ch == '.' && ABBREVIATIONS.contains(&current_text.as_str()) {
            current_text.push_str(g);
            flush_token(&mut tokens, &mut current_text, current_start, byte_pos + g.len());
        } else if ch.is_whitespace() {
            flush_token(&mut tokens, &mut current_text, current_start, byte_pos);
        } else {
            flush_token(&mut tokens, &mut current_text, current_start, byte_pos);
            push_token(&mut tokens, g.to_string(), byte_pos, byte_pos + g.len());
        }
    }

    flush_token(&mut tokens, &mut current_text, current_start, text.len());

    for (i, token) in tokens.iter_mut().enumerate() {
        token.index = i;
    }
    tokens
}

/// Agrupa os tokens em sentenças, devolvendo intervalos de índices.
///
/// Uma sentença termina após `.`, `!`, `?` ou `…`; sequências de terminadores
/// ("?!", "...") ficam na mesma sentença.
pub fn split_sentences(tokens: &[Token]) -> Vec<Range<usize>> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        let is_terminator = SENTENCE_TERMINATORS.contains(&token.text.as_str());
        let next_is_terminator = tokens
            .get(i + 1)
            .map(|t| SENTENCE_TERMINATORS.contains(&t.text.as_str()))
            .unwrap_or(false);
        if is_terminator && !next_is_terminator {
            sentences.push(start..i + 1);
            start = i + 1;
        }
    }
    if start < tokens.len() {
        sentences.push(start..tokens.len());
    }
    sentences
}

/// Fecha o token acumulado e adiciona à lista (se não vazio)
fn flush_token(tokens: &mut Vec<Token>, text: &mut String, start: usize, end: usize) {
    if !text.is_empty() {
        tokens.push(Token {
            text: text.clone(),
            start,
            end,
            index: 0,
        });
        text.clear();
    }
}

/// Adiciona um token de pontuação diretamente
fn push_token(tokens: &mut Vec<Token>, text: String, start: usize, end: usize) {
    tokens.push(Token {
        text,
        start,
        end,
        index: 0,
    });
}
