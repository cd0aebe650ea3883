/// Outgoing query parameters for one request, in insertion order.
///
/// Absent and falsy values are never recorded: `None`, empty strings,
/// zero and `false` all leave the key out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    pub fn number(mut self, key: &'static str, value: Option<u64>) -> Self {
        if let Some(value) = value.filter(|v| *v != 0) {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Set flags go out as `True`, the spelling the services were built against
    pub fn flag(mut self, key: &'static str, value: bool) -> Self {
        if value {
            self.pairs.push((key, "True".to_string()));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(k, _)| *k).collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_values_are_skipped() {
        let query = QueryParams::new()
            .text("date", None)
            .text("keyword", Some(""))
            .number("speed", Some(0))
            .number("count", None)
            .flag("thumbs", false);
        assert!(query.is_empty());
    }

    #[test]
    fn present_values_keep_their_order() {
        let query = QueryParams::new()
            .text("startDate", Some("2020-01-01"))
            .number("speed", Some(500))
            .flag("most_accurate_only", true);

        assert_eq!(query.keys(), vec!["startDate", "speed", "most_accurate_only"]);
        assert_eq!(query.get("speed"), Some("500"));
        assert_eq!(query.get("most_accurate_only"), Some("True"));
        assert!(!query.contains_key("endDate"));
    }
}
