//! Article text tokenization.
//!
//! Splits article text into [`ArticleWord`]s carrying the metadata the
//! renderer needs to reconstruct the original text: punctuation peeled off as
//! separate Symbol tokens anchored to the start or end of their host word,
//! and `next_space` marking where whitespace sat in the source.

use crate::types::{ArticleWord, ArticleWordKind, SymbolPosition, Word};

/// Split `text` into practice tokens.
pub fn tokenize(text: &str) -> Vec<ArticleWord> {
    let raw: Vec<&str> = text.split_whitespace().collect();
    let mut out = Vec::new();
    for (i, token) in raw.iter().copied().enumerate() {
        let last = i == raw.len() - 1;
        push_token(&mut out, token, !last);
    }
    out
}

fn push_token(out: &mut Vec<ArticleWord>, token: &str, space_after: bool) {
    let chars: Vec<char> = token.chars().collect();
    let mut start = 0;
    let mut end = chars.len();
    while start < end && is_symbol(chars[start]) {
        start += 1;
    }
    while end > start && is_symbol(chars[end - 1]) {
        end -= 1;
    }

    if start == end {
        // punctuation-only token: anchor every character as a trailing
        // symbol so the space after it survives reconstruction
        for (j, &c) in chars.iter().enumerate() {
            let last = j == chars.len() - 1;
            out.push(symbol(c, SymbolPosition::End, space_after && last));
        }
        return;
    }

    for &c in &chars[..start] {
        out.push(symbol(c, SymbolPosition::Start, false));
    }

    let core: String = chars[start..end].iter().collect();
    if !core.is_empty() {
        let trailing = end < chars.len();
        out.push(ArticleWord {
            word: Word::new("", core.clone()),
            next_space: space_after && !trailing,
            symbol_position: SymbolPosition::None,
            input: String::new(),
            kind: classify(&core),
        });
    }

    let trailing_count = chars.len() - end;
    for (j, &c) in chars[end..].iter().enumerate() {
        let last_trailing = j == trailing_count - 1;
        out.push(symbol(c, SymbolPosition::End, space_after && last_trailing));
    }
}

fn symbol(c: char, position: SymbolPosition, next_space: bool) -> ArticleWord {
    ArticleWord {
        word: Word::new("", c.to_string()),
        next_space,
        symbol_position: position,
        input: String::new(),
        kind: ArticleWordKind::Symbol,
    }
}

fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && c != '\'' && c != '-'
}

fn classify(core: &str) -> ArticleWordKind {
    if core.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.') {
        ArticleWordKind::Number
    } else {
        ArticleWordKind::Word
    }
}

/// Rebuild the source text from its tokens.
pub fn reconstruct(words: &[ArticleWord]) -> String {
    let mut text = String::new();
    for token in words {
        text.push_str(&token.word.word);
        if token.next_space {
            text.push(' ');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_words_keep_spacing() {
        let words = tokenize("the quick fox");
        assert_eq!(words.len(), 3);
        assert!(words[0].next_space);
        assert!(!words[2].next_space);
        assert!(words.iter().all(|w| w.kind == ArticleWordKind::Word));
    }

    #[test]
    fn trailing_punctuation_becomes_end_symbol() {
        let words = tokenize("Hello, world!");
        let texts: Vec<&str> = words.iter().map(|w| w.word.word.as_str()).collect();
        assert_eq!(texts, ["Hello", ",", "world", "!"]);
        assert_eq!(words[1].symbol_position, SymbolPosition::End);
        assert!(words[1].next_space);
        assert!(!words[0].next_space);
    }

    #[test]
    fn leading_punctuation_becomes_start_symbol() {
        let words = tokenize("\"Wait\"");
        let texts: Vec<&str> = words.iter().map(|w| w.word.word.as_str()).collect();
        assert_eq!(texts, ["\"", "Wait", "\""]);
        assert_eq!(words[0].symbol_position, SymbolPosition::Start);
        assert_eq!(words[2].symbol_position, SymbolPosition::End);
    }

    #[test]
    fn numbers_are_classified() {
        let words = tokenize("over 9,000 miles");
        assert_eq!(words[1].kind, ArticleWordKind::Number);
    }

    #[test]
    fn contractions_and_hyphens_stay_whole() {
        let words = tokenize("it's well-known");
        let texts: Vec<&str> = words.iter().map(|w| w.word.word.as_str()).collect();
        assert_eq!(texts, ["it's", "well-known"]);
    }

    #[test]
    fn reconstruct_round_trips() {
        let text = "\"Stop!\" she said, twice.";
        assert_eq!(reconstruct(&tokenize(text)), text);
    }

    #[test]
    fn standalone_punctuation_keeps_its_following_space() {
        let words = tokenize("wait ... done");
        assert!(words
            .iter()
            .filter(|w| w.kind == ArticleWordKind::Symbol)
            .all(|w| w.symbol_position == SymbolPosition::End));
        assert_eq!(reconstruct(&words), "wait ... done");
    }

    #[test]
    fn dash_only_token_round_trips() {
        // '-' is word-internal, so a lone em-dash style token stays whole
        let text = "yes -- no";
        assert_eq!(reconstruct(&tokenize(text)), text);
    }
}
