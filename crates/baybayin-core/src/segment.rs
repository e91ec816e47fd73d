//! Splits input into whitespace runs and word tokens.

/// One contiguous piece of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// One or more whitespace characters, copied to the output verbatim.
    Whitespace(&'a str),
    /// A maximal run of non-whitespace characters.
    Word(&'a str),
}

impl<'a> Span<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Span::Whitespace(s) | Span::Word(s) => s,
        }
    }
}

/// Iterator over the [`Span`]s of a string, in input order.
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        let first = self.rest.chars().next()?;
        let in_space = first.is_whitespace();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != in_space)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(if in_space {
            Span::Whitespace(head)
        } else {
            Span::Word(head)
        })
    }
}

pub fn segment(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

/// The plural marker `mga`, written as a whole word in lower or title case.
///
/// It is read "ma-nga", so no canceller separates the `m` from the following
/// syllable and the word bypasses letter-by-letter mapping.
pub fn is_standalone_mga(word: &str) -> bool {
    matches!(word, "mga" | "Mga")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<Span<'_>> {
        segment(text).collect()
    }

    #[test]
    fn test_empty() {
        assert!(spans("").is_empty());
    }

    #[test]
    fn test_words_and_spaces() {
        assert_eq!(
            spans("ang  bata\tay\n"),
            vec![
                Span::Word("ang"),
                Span::Whitespace("  "),
                Span::Word("bata"),
                Span::Whitespace("\t"),
                Span::Word("ay"),
                Span::Whitespace("\n"),
            ]
        );
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(spans(" \u{3000}x"), vec![Span::Whitespace(" \u{3000}"), Span::Word("x")]);
    }

    #[test]
    fn test_only_whitespace() {
        assert_eq!(spans(" \r\n "), vec![Span::Whitespace(" \r\n ")]);
    }

    #[test]
    fn test_spans_rebuild_input() {
        let text = "  Mabuhay ang\t\tPilipinas!  ";
        let rebuilt: String = segment(text).map(|s| s.as_str()).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_non_ascii_word() {
        assert_eq!(spans("niño ñ"), vec![Span::Word("niño"), Span::Whitespace(" "), Span::Word("ñ")]);
    }

    #[test]
    fn test_standalone_mga() {
        assert!(is_standalone_mga("mga"));
        assert!(is_standalone_mga("Mga"));
        assert!(!is_standalone_mga("MGA"));
        assert!(!is_standalone_mga("mgab"));
        assert!(!is_standalone_mga("amga"));
        assert!(!is_standalone_mga("mga,"));
    }
}
