use crate::error::PipelineError;
use crate::{DrsGenerator, DrsRecord};
use std::collections::HashMap;

/// Previously generated DRS strings, keyed by trimmed source text.
#[derive(Debug, Default, Clone)]
pub struct DrsCache {
    entries: HashMap<String, String>,
}

impl DrsCache {
    pub fn from_records(records: impl IntoIterator<Item = DrsRecord>) -> Self {
        let mut cache = Self::default();
        for record in records {
            cache.insert(&record.syllogism, record.drs);
        }
        cache
    }

    pub fn insert(&mut self, text: &str, drs: String) {
        self.entries.insert(text.trim().to_string(), drs);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DrsGenerator for DrsCache {
    fn generate(&mut self, premise: &str) -> Result<String, PipelineError> {
        let key = premise.trim();
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| PipelineError::MissingDrs(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_surrounding_whitespace() {
        let mut cache = DrsCache::from_records(vec![DrsRecord {
            syllogism: " All daisies are plants ".to_string(),
            drs: "daisy.n.01".to_string(),
            validity: None,
        }]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.generate("All daisies are plants").unwrap(), "daisy.n.01");
    }

    #[test]
    fn missing_entry_is_an_error() {
        let mut cache = DrsCache::default();
        assert!(cache.is_empty());
        assert!(matches!(cache.generate("x"), Err(PipelineError::MissingDrs(_))));
    }
}
