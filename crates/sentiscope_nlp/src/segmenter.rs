use sentiscope_core::{CapabilityError, SentenceSegmenter};

/// Splits on runs of `.`, `!` and `?` followed by whitespace.
///
/// A boundary is not taken after a known abbreviation or a single-letter
/// initial ("Dr. Smith", "J. R. R. Tolkien"), nor when the next sentence
/// would start in lowercase. Closing quotes and brackets stay with the
/// sentence they close.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctSegmenter;

impl SentenceSegmenter for PunctSegmenter {
    fn sentences(&self, text: &str) -> Result<Vec<String>, CapabilityError> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut i = 0usize;

        while i < chars.len() {
            if !is_terminal(chars[i].1) {
                i += 1;
                continue;
            }

            let run_start = i;
            while i < chars.len() && is_terminal(chars[i].1) {
                i += 1;
            }
            let single_period = i - run_start == 1 && chars[run_start].1 == '.';
            while i < chars.len() && is_closer(chars[i].1) {
                i += 1;
            }

            let end = chars.get(i).map_or(text.len(), |&(pos, _)| pos);
            if i < chars.len() && !chars[i].1.is_whitespace() {
                continue;
            }

            let mut next = i;
            while next < chars.len() && chars[next].1.is_whitespace() {
                next += 1;
            }
            if chars.get(next).is_some_and(|&(_, c)| c.is_lowercase()) {
                continue;
            }
            if single_period && ends_with_abbreviation(&text[start..chars[run_start].0]) {
                continue;
            }

            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }

        push_trimmed(&mut sentences, &text[start..]);
        Ok(sentences)
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '’' | '”' | '»')
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

/// True when the text before a period ends in an abbreviation or initial.
fn ends_with_abbreviation(before: &str) -> bool {
    let word = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if word.is_empty() {
        return false;
    }
    let mut letters = word.chars();
    if letters.next().is_some_and(char::is_alphabetic) && letters.next().is_none() {
        return true;
    }
    ABBREVIATIONS.contains(&word.as_str())
}

/// Stored without the final period; inner periods are kept ("e.g").
const ABBREVIATIONS: &[&str] = &[
    "a.m", "apr", "approx", "aug", "ave", "co", "col", "corp", "dec", "dept", "dr", "e.g",
    "etc", "feb", "fig", "gen", "gov", "i.e", "inc", "jan", "jr", "jul", "jun", "lt", "ltd",
    "mar", "mr", "mrs", "ms", "mt", "no", "nov", "oct", "p.m", "prof", "rd", "sep", "sept",
    "sgt", "sr", "st", "u.k", "u.s", "vs",
];
