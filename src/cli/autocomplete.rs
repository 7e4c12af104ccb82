use txkv::KvDatabase;

/// Command keywords offered by the completer, in canonical spelling.
const KEYWORDS: [&str; 7] = [
    "SET", "GET", "DELETE", "COUNT", "BEGIN", "COMMIT", "ROLLBACK",
];

pub struct Autocompleter;

impl Autocompleter {
    pub fn new() -> Self {
        Self
    }

    /// Completions for the word under the cursor: command keywords plus the
    /// keys currently in the live store.
    pub fn suggestions(&self, input: &str, db: &KvDatabase) -> Vec<String> {
        let input_upper = input.to_uppercase();
        let mut suggestions = Vec::new();

        for kw in KEYWORDS {
            if kw.starts_with(&input_upper) {
                suggestions.push(kw.to_string());
            }
        }

        // Keys are matched case-sensitively; the store is case-sensitive.
        for key in db.keys() {
            if key.starts_with(input) {
                suggestions.push(key);
            }
        }

        suggestions.sort();
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_prefixes() {
        let db = KvDatabase::new();
        let completer = Autocompleter::new();
        assert_eq!(completer.suggestions("co", &db), vec!["COMMIT", "COUNT"]);
        assert_eq!(completer.suggestions("R", &db), vec!["ROLLBACK"]);
    }

    #[test]
    fn test_live_keys_are_suggested() {
        let mut db = KvDatabase::new();
        db.execute("SET counter 1");
        let completer = Autocompleter::new();
        assert_eq!(
            completer.suggestions("co", &db),
            vec!["COMMIT", "COUNT", "counter"]
        );
    }
}
