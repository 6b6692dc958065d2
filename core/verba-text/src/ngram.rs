use verba_protocol::NGram;

/// Sliding-window n-grams over `tokens`, in order.
///
/// Yields `len - n + 1` overlapping tuples, or nothing when `n` is zero or
/// larger than the sequence.
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<NGram> {
    if n == 0 {
        return Vec::new();
    }
    tokens.windows(n).map(NGram::from_slice).collect()
}

pub fn unigrams<S: AsRef<str>>(tokens: &[S]) -> Vec<NGram> {
    ngrams(tokens, 1)
}

pub fn bigrams<S: AsRef<str>>(tokens: &[S]) -> Vec<NGram> {
    ngrams(tokens, 2)
}

pub fn trigrams<S: AsRef<str>>(tokens: &[S]) -> Vec<NGram> {
    ngrams(tokens, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn g(tokens: &[&str]) -> NGram {
        NGram::from_slice(tokens)
    }

    #[test]
    fn test_bigrams() {
        let tokens = ["a", "b", "c", "d"];
        assert_eq!(
            bigrams(&tokens),
            vec![g(&["a", "b"]), g(&["b", "c"]), g(&["c", "d"])]
        );
    }

    #[test]
    fn test_degenerate_orders() {
        let tokens = ["a", "b"];
        assert!(ngrams(&tokens, 0).is_empty());
        assert!(trigrams(&tokens).is_empty());
        assert!(unigrams::<&str>(&[]).is_empty());
        assert_eq!(ngrams(&tokens, 2), vec![g(&["a", "b"])]);
    }

    proptest! {
        #[test]
        fn test_window_count_and_contents(
            tokens in proptest::collection::vec("[a-c]{1,2}", 0..20),
            n in 0usize..5,
        ) {
            let grams = ngrams(&tokens, n);
            let expected = if n == 0 { 0 } else { (tokens.len() + 1).saturating_sub(n) };
            prop_assert_eq!(grams.len(), expected);

            for (i, gram) in grams.iter().enumerate() {
                prop_assert_eq!(gram.order(), n);
                prop_assert_eq!(gram.tokens(), &tokens[i..i + n]);
            }
        }
    }
}
