use glob::Pattern;

const GLOB_METACHARACTERS: [char; 4] = ['*', '?', '[', ']'];

/// Shell-glob patterns used to filter names, ids and states on the client.
///
/// A single pattern or a sequence of patterns is normalized into this type
/// once, at the entry of every listing operation. A candidate matches when it
/// matches any of the patterns, so an empty sequence matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patterns(Vec<String>);

impl Patterns {
    pub fn any() -> Self {
        Self(vec!["*".to_owned()])
    }

    /// The pattern itself when this is exactly one pattern without glob metacharacters.
    pub fn single_literal(&self) -> Option<&str> {
        match self.0.as_slice() {
            [single] if !is_pattern(single) => Some(single.as_str()),
            _ => None,
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0.iter().any(|pattern| glob_match(pattern, candidate))
    }

    pub fn filter<I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        candidates
            .into_iter()
            .map(Into::into)
            .filter(|candidate| self.matches(candidate))
            .collect()
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::any()
    }
}

impl From<&str> for Patterns {
    fn from(value: &str) -> Self {
        Self(vec![value.to_owned()])
    }
}

impl From<String> for Patterns {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<&String> for Patterns {
    fn from(value: &String) -> Self {
        Self(vec![value.clone()])
    }
}

impl From<u32> for Patterns {
    fn from(value: u32) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<Vec<String>> for Patterns {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<Vec<&str>> for Patterns {
    fn from(value: Vec<&str>) -> Self {
        Self(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Patterns {
    fn from(value: &[&str]) -> Self {
        Self(value.iter().map(|x| (*x).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Patterns {
    fn from(value: [&str; N]) -> Self {
        Self(value.iter().map(|x| (*x).to_owned()).collect())
    }
}

impl<T: Into<Patterns>> From<Option<T>> for Patterns {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

pub fn is_pattern(value: &str) -> bool {
    value.contains(GLOB_METACHARACTERS)
}

// Patterns that do not compile (e.g. an unbalanced '[') are compared literally.
fn glob_match(pattern: &str, candidate: &str) -> bool {
    match Pattern::new(&collapse_stars(pattern)) {
        Ok(glob) => glob.matches(candidate),
        Err(_) => pattern == candidate,
    }
}

// `glob` rejects `**` unless it is a whole path component; in a shell glob it is just `*`.
fn collapse_stars(pattern: &str) -> String {
    let mut collapsed = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c == '*' && collapsed.ends_with('*') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_pattern_matches_everything() {
        let patterns = Patterns::from(None::<&str>);
        assert_eq!(patterns, Patterns::any());
        assert!(patterns.matches("orders"));
        assert!(patterns.matches(""));
    }

    #[test]
    fn any_of_several_patterns_matches() {
        let patterns = Patterns::from(["orders*", "pay?ents"]);
        assert!(patterns.matches("orders.v1"));
        assert!(patterns.matches("payments"));
        assert!(!patterns.matches("invoices"));
    }

    #[test]
    fn empty_sequence_matches_nothing() {
        let patterns = Patterns::from(Vec::<String>::new());
        assert!(!patterns.matches("orders"));
    }

    #[test]
    fn character_classes_are_supported() {
        let patterns = Patterns::from("broker-[12]");
        assert!(patterns.matches("broker-1"));
        assert!(!patterns.matches("broker-3"));
    }

    #[test]
    fn invalid_glob_falls_back_to_literal_comparison() {
        let patterns = Patterns::from("weird[");
        assert!(patterns.matches("weird["));
        assert!(!patterns.matches("weird"));
    }

    #[test]
    fn repeated_stars_behave_like_one() {
        assert!(Patterns::from("orders**").matches("orders-dlq"));
        assert!(Patterns::from("orders**").matches("orders"));
        assert!(Patterns::from("*-**").matches("orders-dlq"));
        assert!(Patterns::from("**").matches("payments"));
        assert!(!Patterns::from("orders**").matches("payments"));
    }

    #[test]
    fn single_literal_detection() {
        assert_eq!(Patterns::from("group-1").single_literal(), Some("group-1"));
        assert_eq!(Patterns::from("group-*").single_literal(), None);
        assert_eq!(Patterns::from(["a", "b"]).single_literal(), None);
        assert_eq!(Patterns::any().single_literal(), None);
    }

    #[test]
    fn broker_id_is_matched_as_string() {
        let patterns = Patterns::from(3u32);
        assert!(patterns.matches("3"));
        assert!(!patterns.matches("13"));
    }

    #[test]
    fn filter_preserves_candidate_order() {
        let filtered = Patterns::from("t*").filter(["tb", "x", "ta"]);
        assert_eq!(filtered, vec!["tb".to_owned(), "ta".to_owned()]);
    }
}
