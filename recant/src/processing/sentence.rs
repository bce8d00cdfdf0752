use unicode_segmentation::UnicodeSegmentation;

/// Split text into trimmed sentences.
///
/// A sentence ends at a line break, or at a run of `.`, `!`, `?` or `…`
/// (plus any closing quotes or brackets) that is followed by whitespace or
/// the end of the text. A period closing one of `abbreviations` or a single
/// capital initial does not end the sentence.
pub fn split_sentences(text: &str, abbreviations: &[&str]) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut graphemes = text.grapheme_indices(true).peekable();

    while let Some((_, grapheme)) = graphemes.next() {
        if is_line_break(grapheme) {
            push_trimmed(&mut sentences, &mut current);
            continue;
        }

        current.push_str(grapheme);
        if !is_terminal(grapheme) {
            continue;
        }

        while let Some(&(_, next)) = graphemes.peek() {
            if is_terminal(next) || is_closer(next) {
                current.push_str(next);
                graphemes.next();
            } else {
                break;
            }
        }

        let rest = graphemes.peek().map_or("", |&(offset, _)| &text[offset..]);
        let at_break = rest.chars().next().map_or(true, char::is_whitespace);

        if at_break && !ends_with_abbreviation(&current, rest, abbreviations) {
            push_trimmed(&mut sentences, &mut current);
        }
    }

    push_trimmed(&mut sentences, &mut current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

fn is_line_break(grapheme: &str) -> bool {
    matches!(grapheme, "\n" | "\r\n" | "\r")
}

fn is_terminal(grapheme: &str) -> bool {
    matches!(grapheme, "." | "!" | "?" | "…")
}

fn is_closer(grapheme: &str) -> bool {
    matches!(grapheme, "\"" | "'" | ")" | "]" | "”" | "’" | "»")
}

/// Abbreviations that only hold when a number follows ("No. 5").
const NUMBER_ABBREVIATIONS: &[&str] = &["no.", "nos."];

fn ends_with_abbreviation(current: &str, rest: &str, abbreviations: &[&str]) -> bool {
    let Some(last_word) = current.split_whitespace().last() else {
        return false;
    };
    let word = last_word.trim_start_matches(|c: char| !c.is_alphanumeric());

    // Initials such as the "J." in "J. Smith". "I." is the pronoun.
    let mut chars = word.chars();
    if let (Some(first), Some('.'), None) = (chars.next(), chars.next(), chars.next()) {
        if first.is_uppercase() && first != 'I' {
            return true;
        }
    }

    let lower = word.to_lowercase();
    if !abbreviations.iter().any(|abbr| *abbr == lower) {
        return false;
    }
    if NUMBER_ABBREVIATIONS.contains(&lower.as_str()) {
        return rest
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit());
    }
    true
}
