//! Keyword Extractor: turns free text into the set of significant lowercase tokens.
//!
//! Pipeline: lowercase → strip punctuation (hyphens survive) → split on whitespace →
//! drop short tokens, stop words and numbers → collect into a set.
//!
//! The same rules are applied to both the job description and the resume corpus,
//! so a token dropped on one side is always dropped on the other.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Common English function words plus job-posting filler that carries no signal.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "you", "your", "this",
    "but", "or", "if", "we", "can", "not", "have", "do", "about", "most", "other", "some", "these",
    "them", "they", "our", "all", "into", "more", "also", "any", "new", "work", "what", "who",
    "which", "when", "so", "one", "use", "get", "how", "job", "role", "team", "company",
    "experience", "description", "requirements", "responsibilities", "years", "ability", "skills",
    "knowledge", "strong", "excellent", "must", "preferred", "plus", "able", "looking", "seeking",
];

/// Tokens must be strictly longer than this to count as keywords.
pub const MIN_TOKEN_EXCLUSIVE_LEN: usize = 2;

/// Anything that is not an ASCII word character, whitespace, or a hyphen.
pub const STRIP_PATTERN: &str = r"[^A-Za-z0-9_\s-]";

/// Number literals as a JavaScript-style `Number()` would accept them:
/// signed decimals with optional exponent, or unsigned 0x / 0o / 0b integers.
const NUMERIC_PATTERN: &str =
    r"^(?:[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:e[+-]?[0-9]+)?|0x[0-9a-f]+|0o[0-7]+|0b[01]+)$";

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMERIC_PATTERN).expect("numeric pattern is a valid regex"));

static DEFAULT_RULES: LazyLock<KeywordRules> = LazyLock::new(KeywordRules::default);

/// The filter rules for keyword extraction.
///
/// Kept as data rather than hardcoded branches so callers (and tests) can ask
/// directly whether a given token is kept or dropped.
#[derive(Debug, Clone)]
pub struct KeywordRules {
    stop_words: HashSet<String>,
    min_exclusive_len: usize,
    strip: Regex,
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self::new(STOP_WORDS.iter().copied(), MIN_TOKEN_EXCLUSIVE_LEN)
    }
}

impl KeywordRules {
    /// Rules with a custom stop-word list and length cutoff. Stop words are
    /// lowercased, since they are compared against lowercased tokens.
    pub fn new<I, S>(stop_words: I, min_exclusive_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            min_exclusive_len,
            strip: Regex::new(STRIP_PATTERN).expect("strip pattern is a valid regex"),
        }
    }

    /// The shared default rule set.
    pub fn standard() -> &'static KeywordRules {
        &DEFAULT_RULES
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Returns true if `token` (already normalized) survives every filter.
    pub fn keeps(&self, token: &str) -> bool {
        token.len() > self.min_exclusive_len && !self.is_stop_word(token) && !is_numeric(token)
    }

    /// Lowercases `text` and replaces each stripped character with a single space.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        self.strip.replace_all(&lowered, " ").into_owned()
    }

    /// Extracts the unique significant keywords from `text`.
    pub fn extract(&self, text: &str) -> HashSet<String> {
        self.normalize(text)
            .split_whitespace()
            .filter(|token| self.keeps(token))
            .map(str::to_string)
            .collect()
    }
}

/// Extracts keywords from `text` using the standard rules.
pub fn extract_keywords(text: &str) -> HashSet<String> {
    KeywordRules::standard().extract(text)
}

/// Returns true if `token` parses as a number literal.
pub fn is_numeric(token: &str) -> bool {
    NUMERIC.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(set: HashSet<String>) -> Vec<String> {
        let mut v: Vec<String> = set.into_iter().collect();
        v.sort();
        v
    }

    #[test]
    fn test_backend_engineer_example() {
        let keywords =
            extract_keywords("We need a Backend Engineer with strong Python and AWS experience.");
        assert_eq!(sorted(keywords), vec!["aws", "backend", "engineer", "python"]);
    }

    #[test]
    fn test_hyphenated_term_stays_one_token() {
        let keywords = extract_keywords("back-end developer");
        assert!(keywords.contains("back-end"));
        assert!(keywords.contains("developer"));
        assert!(!keywords.contains("back"));
        assert!(!keywords.contains("end"));
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \n\t ").is_empty());
    }

    #[test]
    fn test_only_noise_yields_empty_set() {
        let keywords = extract_keywords("The team, with 5+ years of experience!!! 2024 -- ... ?");
        assert!(keywords.is_empty(), "got {keywords:?}");
    }

    #[test]
    fn test_lone_hyphen_dropped() {
        assert!(extract_keywords("rust - go").iter().all(|k| k != "-"));
        assert!(extract_keywords("---").contains("---"));
    }

    #[test]
    fn test_punctuation_splits_words() {
        let keywords = extract_keywords("docker/kubernetes,terraform;ansible");
        assert_eq!(
            sorted(keywords),
            vec!["ansible", "docker", "kubernetes", "terraform"]
        );
    }

    #[test]
    fn test_punctuation_inside_name_splits_it() {
        // "node.js" → "node" + "js"; "js" is too short
        let keywords = extract_keywords("Node.js and C++");
        assert_eq!(sorted(keywords), vec!["node"]);
    }

    #[test]
    fn test_underscore_is_word_character() {
        assert!(extract_keywords("snake_case identifiers").contains("snake_case"));
    }

    #[test]
    fn test_non_ascii_letters_are_stripped() {
        // Only ASCII letters count as word characters.
        let keywords = extract_keywords("Résumé naïve");
        assert_eq!(sorted(keywords), vec!["sum"]);
    }

    #[test]
    fn test_numbers_dropped() {
        for token in ["100", "2024", "-500", "1e10", "3e-4", "0x1f", "0b101", "0o17", "007"] {
            assert!(is_numeric(token), "{token} should be numeric");
        }
        let keywords = extract_keywords("100 2024 1e10 0x1f");
        assert!(keywords.is_empty(), "got {keywords:?}");
    }

    #[test]
    fn test_alphanumeric_tokens_kept() {
        for token in ["s3", "ec2", "web3", "1_000", "0b2", "nan", "infinity", "e10", "10x"] {
            assert!(!is_numeric(token), "{token} should not be numeric");
        }
        let keywords = extract_keywords("web3 ec2 10x");
        assert_eq!(sorted(keywords), vec!["10x", "ec2", "web3"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let rules = KeywordRules::standard();
        assert!(!rules.keeps("go"));
        assert!(!rules.keeps("ai"));
        assert!(rules.keeps("sql"));
    }

    #[test]
    fn test_stop_word_membership() {
        let rules = KeywordRules::standard();
        for word in ["experience", "skills", "requirements", "team", "company", "seeking", "the"] {
            assert!(rules.is_stop_word(word), "{word} should be a stop word");
            assert!(!rules.keeps(word));
        }
        assert!(!rules.is_stop_word("python"));
        assert_eq!(STOP_WORDS.len(), 80);
    }

    #[test]
    fn test_custom_rules() {
        let rules = KeywordRules::new(["Rust", "remote"], 3);
        assert!(rules.is_stop_word("rust"));
        assert!(!rules.is_stop_word("experience"));
        assert!(!rules.keeps("sql"));
        assert_eq!(
            sorted(rules.extract("Remote Rust role with SQL and Kafka experience")),
            vec!["experience", "kafka", "role", "with"]
        );
    }

    #[test]
    fn test_uppercase_stop_words_filtered_after_lowercasing() {
        assert!(extract_keywords("EXPERIENCE Skills TEAM").is_empty());
    }

    #[test]
    fn test_extraction_invariants_hold() {
        let text = "Senior Rust Engineer (Core Infra) - 5+ years; K8s, gRPC, back-end & front-end \
                    systems. We're seeking an able, excellent team-player for our company's 24/7 on-call!";
        let rules = KeywordRules::standard();
        for keyword in extract_keywords(text) {
            assert!(keyword.len() > 2, "{keyword} too short");
            assert!(!rules.is_stop_word(&keyword), "{keyword} is a stop word");
            assert!(!is_numeric(&keyword), "{keyword} is numeric");
            assert_eq!(keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn test_idempotent_under_self_concatenation() {
        let text = "Distributed systems, Kafka, Kubernetes; PostgreSQL and Redis";
        let doubled = format!("{text} {text}");
        assert_eq!(extract_keywords(text), extract_keywords(&doubled));
    }

    #[test]
    fn test_normalize_replaces_each_char_with_space() {
        let rules = KeywordRules::standard();
        assert_eq!(rules.normalize("A,B!!c-d"), "a b  c-d");
    }
}
