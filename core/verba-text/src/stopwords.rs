use std::collections::HashSet;
use std::sync::OnceLock;

use crate::tokenizer::Tokenizer;

/// Spanish function words dropped before keyword counting.
pub const STOP_WORDS: &[&str] = &[
    "a", "ademas", "al", "algo", "algunas", "algunos", "ante", "antes", "aunque", "aún",
    "bajo", "cabe", "cada", "cierto", "como", "con", "contra", "cual", "cuales",
    "cuando", "cuanta", "cuantas", "cuanto", "cuantos", "cuál", "cuáles", "cuán", "cómo",
    "de", "del", "desde", "donde", "dos", "dónde", "el", "ella", "ellas", "ellos", "en",
    "entre", "era", "erais", "eramos", "eran", "eres", "es", "esa", "esas", "ese", "esos",
    "esta", "estaban", "estamos", "estan", "estas", "este", "esto", "estos", "estoy",
    "está", "estábamos", "están", "estás", "fue", "fueron", "fui", "fuimos", "fuiste",
    "ha", "habido", "había", "habíamos", "habían", "hace", "haceis", "hacemos", "hacen",
    "hacer", "hacia", "haciendo", "han", "hasta", "hay", "hicieron", "hizo", "incluso",
    "jamás", "junto", "la", "las", "le", "les", "lo", "los", "mas", "me", "mi", "mis",
    "mucha", "muchas", "mucho", "muchos", "muy", "nada", "ni", "ninguna", "ningunas",
    "ninguno", "ningunos", "no", "nos", "nosotras", "nosotros", "nunca", "o", "os",
    "otra", "otras", "otro", "otros", "para", "pero", "poca", "pocas", "poco", "pocos",
    "por", "porque", "posiblemente", "primer", "primera", "primeras", "primeros",
    "propia", "propias", "propio", "propios", "que", "quien", "quienes", "qué", "se",
    "según", "ser", "si", "siendo", "sin", "sino", "sobre", "solamente", "solo", "somos",
    "soy", "sr", "sra", "sres", "su", "sus", "suya", "suyas", "suyo", "suyos", "sí",
    "sólo", "tal", "tales", "también", "tampoco", "tan", "tanto", "te", "tendremos",
    "tendrá", "tendrán", "teneis", "tenemos", "tengo", "tiene", "tienen", "tienes",
    "toda", "todas", "todo", "todos", "tras", "tu", "tus", "tuya", "tuyas", "tuyo",
    "tuyos", "un", "una", "unas", "uno", "unos", "usted", "ustedes", "vais", "vamos",
    "van", "vosotros", "voy", "vuestra", "vuestras", "vuestro", "vuestros", "y", "ya",
    "yo", "él", "ése", "ésa", "ésos", "ésas",
];

fn stop_word_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

pub fn is_stop_word(word: &str) -> bool {
    stop_word_set().contains(word)
}

/// Yields the tokens that are not stop words, in their original order.
pub fn remove_stop_words<I>(tokens: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens.into_iter().filter(|token| !is_stop_word(token.as_ref()))
}

/// Tokenizes `text` and drops stop words.
pub fn clean_tokens(text: &str) -> Vec<String> {
    let tokenizer = Tokenizer::new(text);
    remove_stop_words(tokenizer.tokens()).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_stop_words_in_order() {
        let filtered: Vec<&str> = remove_stop_words(["el", "perro", "corre"]).collect();
        assert_eq!(filtered, vec!["perro", "corre"]);
    }

    #[test]
    fn test_accented_stop_words() {
        assert!(is_stop_word("él"));
        assert!(is_stop_word("también"));
        assert!(!is_stop_word("perro"));
        // Matching is exact; tokens are expected to be lowercased already
        assert!(!is_stop_word("El"));
    }

    #[test]
    fn test_clean_tokens() {
        assert_eq!(
            clean_tokens("El perro de mi vecino ladra MUCHO"),
            vec!["perro", "vecino", "ladra"]
        );
        assert!(clean_tokens("y de la que").is_empty());
    }

    #[test]
    fn test_stop_word_table_has_no_duplicates() {
        assert_eq!(stop_word_set().len(), STOP_WORDS.len());
    }
}
