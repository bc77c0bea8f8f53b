//! Paged list shape returned by list endpoints.

use serde::{Deserialize, Serialize};

/// One page of records plus the paging counters the backend reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub records: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub current: u64,
    #[serde(default)]
    pub pages: u64,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a page after this one exists.
    pub fn has_next(&self) -> bool {
        self.current < self.pages
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            size: 0,
            current: 0,
            pages: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counters_default_to_zero() {
        let page: Page<u32> = serde_json::from_str(r#"{"records":[1,2]}"#).unwrap();
        assert_eq!(page.records, vec![1, 2]);
        assert_eq!(page.total, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn has_next_compares_current_to_pages() {
        let page = Page::<u32> {
            records: vec![],
            total: 25,
            size: 10,
            current: 1,
            pages: 3,
        };
        assert!(page.has_next());
        assert!(page.is_empty());
    }
}
