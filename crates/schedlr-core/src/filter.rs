use serde::{Deserialize, Serialize};

use crate::domain::Record;

/// Optional keyword/date criteria used to narrow a fetched record list.
///
/// A record matches when every present criterion matches; an absent
/// criterion always matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_none() && self.date.is_none()
    }

    /// Case-sensitive substring match on content, exact match on date.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        let keyword_ok = self
            .keyword
            .as_deref()
            .is_none_or(|keyword| record.content().contains(keyword));
        let date_ok = self
            .date
            .as_deref()
            .is_none_or(|date| record.date() == date);
        keyword_ok && date_ok
    }

    /// Keeps the records matching this spec, preserving input order.
    pub fn apply<R: Record>(&self, records: Vec<R>) -> Vec<R> {
        if self.is_empty() {
            return records;
        }
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
