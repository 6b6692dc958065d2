pub mod keyword_set;
pub mod lexical;
pub mod tiny;
pub mod token;

pub use keyword_set::KeywordSet;
pub use lexical::{analyze_source, LexicalAnalyzer};
pub use tiny::{check_program, ParseResult, TinyError};
pub use token::{LexKind, Span, Token};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words_from_shared_set() {
        // One keyword set reused across several scans
        let reserved: KeywordSet<String> = ["if", "else", "while", "return"].into_iter().collect();

        let first = LexicalAnalyzer::new("if (a) return b;", &reserved).analyze();
        let second = LexicalAnalyzer::new("whilex = else_", &reserved).analyze();

        assert_eq!(first.len(), 7);
        assert_eq!(first[0].kind, LexKind::ReservedWord);
        assert_eq!(first[4].kind, LexKind::ReservedWord);
        assert_eq!(first[4].text, "return");

        // Only whole lexemes are reserved
        assert_eq!(second[0].kind, LexKind::Identifier);
        assert_eq!(second[2].kind, LexKind::Identifier);
        assert_eq!(second[2].text, "else_");
    }

    #[test]
    fn test_tiny_entry_point() {
        assert!(check_program("if x > 0 then y := 1 else y := 2 end").is_accepted());
        assert!(!check_program("x := 1 + 2 > 3 then end").is_accepted());
    }
}
