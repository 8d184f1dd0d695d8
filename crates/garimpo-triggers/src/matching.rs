use unicode_normalization::UnicodeNormalization;

/// Normalize text for keyword matching: lowercase, NFD-decompose and drop
/// combining marks, trim. "Botão" and "botao" compare equal.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Substring check over already-normalized text. Supports multi-word
/// keywords ("criar pagina").
pub fn keyword_match(normalized_text: &str, keyword: &str) -> bool {
    normalized_text.contains(&normalize(keyword))
}
