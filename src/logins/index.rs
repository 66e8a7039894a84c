//! Sectioned Login Index
//!
//! Groups logins into alphabetical sections keyed by the first letter of
//! their base domain, for indexed list display.

use std::collections::BTreeMap;

use crate::store::LoginRecord;

use super::cursor::IndexPath;
use super::domain::parse_hostname;

/// Logins grouped by the first letter of their base domain.
///
/// The working set is replaced wholesale by [`replace`](Self::replace);
/// sections are rebuilt from scratch every time. Logins whose hostname
/// yields no base domain stay in [`records`](Self::records) but belong to
/// no section.
#[derive(Debug, Default)]
pub struct SectionedLoginIndex {
    records: Vec<LoginRecord>,
    titles: Vec<String>,
    sections: Vec<Vec<SectionRow>>,
}

#[derive(Debug, Clone)]
struct SectionRow {
    record: usize,
    base_domain: String,
    host: String,
}

impl SectionedLoginIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<LoginRecord>) -> Self {
        let mut index = Self::new();
        index.replace(records);
        index
    }

    /// Replace the working set and rebuild every section
    pub fn replace(&mut self, records: Vec<LoginRecord>) {
        let mut buckets: BTreeMap<char, Vec<SectionRow>> = BTreeMap::new();

        for (i, record) in records.iter().enumerate() {
            let Some(parsed) = parse_hostname(&record.hostname) else {
                continue;
            };
            let Some(key) = section_key(&parsed.base_domain) else {
                continue;
            };

            buckets.entry(key).or_default().push(SectionRow {
                record: i,
                base_domain: parsed.base_domain,
                host: parsed.host,
            });
        }

        let mut titles = Vec::with_capacity(buckets.len());
        let mut sections = Vec::with_capacity(buckets.len());
        for (key, mut rows) in buckets {
            rows.sort_by(compare_rows);
            titles.push(key.to_string());
            sections.push(rows);
        }

        self.records = records;
        self.titles = titles;
        self.sections = sections;

        tracing::debug!(
            "Indexed {} of {} logins into {} sections",
            self.sectioned_len(),
            self.records.len(),
            self.titles.len()
        );
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Rows in `section`, 0 when the section does not exist
    pub fn row_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, Vec::len)
    }

    pub fn record_at(&self, section: usize, row: usize) -> Option<&LoginRecord> {
        let entry = self.sections.get(section)?.get(row)?;
        self.records.get(entry.record)
    }

    /// Base domain the row was sorted under
    pub fn base_domain_at(&self, section: usize, row: usize) -> Option<&str> {
        let entry = self.sections.get(section)?.get(row)?;
        Some(&entry.base_domain)
    }

    pub fn section_title(&self, section: usize) -> Option<&str> {
        self.titles.get(section).map(String::as_str)
    }

    pub fn section_titles(&self) -> &[String] {
        &self.titles
    }

    /// Section whose title is `title`, falling back to the first section.
    pub fn section_index_for_title(&self, title: &str) -> usize {
        self.titles.iter().position(|t| t == title).unwrap_or(0)
    }

    /// Section for an index-sidebar tap on `title` at position `index`.
    ///
    /// Falls back to the first section when `index` is past the end of
    /// the titles or `title` is unknown.
    pub fn section_for_index_title(&self, title: &str, index: usize) -> usize {
        if index >= self.titles.len() {
            return 0;
        }
        self.section_index_for_title(title)
    }

    /// Where the login with `id` currently sits, if it is sectioned
    pub fn index_path_of(&self, id: &str) -> Option<IndexPath> {
        self.sections.iter().enumerate().find_map(|(section, rows)| {
            rows.iter()
                .position(|r| self.records[r.record].id == id)
                .map(|row| IndexPath::new(section, row))
        })
    }

    /// The whole working set, including logins hidden from sections
    pub fn records(&self) -> &[LoginRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of logins that belong to a section
    pub fn sectioned_len(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    /// Number of logins excluded for having no base domain
    pub fn hidden_len(&self) -> usize {
        self.records.len() - self.sectioned_len()
    }
}

fn section_key(base_domain: &str) -> Option<char> {
    base_domain.to_uppercase().chars().next()
}

fn compare_rows(a: &SectionRow, b: &SectionRow) -> std::cmp::Ordering {
    a.base_domain
        .cmp(&b.base_domain)
        .then_with(|| a.host.cmp(&b.host))
}
