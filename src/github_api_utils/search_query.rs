use std::fmt;

/// GitHub search term composed of bare values and `key:value` qualifiers,
/// rendered space separated in insertion order.
#[derive(Default, Debug, Clone)]
pub struct SearchQuery(Vec<(Option<String>, String)>);

impl SearchQuery {
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.0.push((None, value.into()));
        self
    }

    pub fn keyed(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((Some(key.into()), value.into()));
        self
    }

    /// Splits `key:value` words into qualifiers, anything else is a bare value.
    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        words.into_iter().fold(Self::default(), |query, word| {
            match word.as_ref().split_once(':') {
                Some((key, value)) if !key.is_empty() => query.keyed(key, value),
                _ => query.value(word.as_ref()),
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .0
            .iter()
            .map(|(key, value)| match key {
                Some(key) => format!("{key}:{value}"),
                None => value.clone(),
            })
            .collect::<Vec<String>>();
        write!(f, "{}", parts.join(" "))
    }
}
