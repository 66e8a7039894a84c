//! Section Cursor
//!
//! Selection state over a sectioned index.

use crate::store::LoginRecord;

use super::index::SectionedLoginIndex;

/// A (section, row) coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectionCursor {
    selected: Option<IndexPath>,
}

impl SectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<IndexPath> {
        self.selected
    }

    /// Select `path` if it exists in `index`
    pub fn select(&mut self, index: &SectionedLoginIndex, path: IndexPath) -> bool {
        if path.row >= index.row_count(path.section) {
            return false;
        }
        self.selected = Some(path);
        true
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Pull the selection back inside `index` after its data changed
    pub fn clamp_to(&mut self, index: &SectionedLoginIndex) {
        self.selected = compute_selection_after_replace(self.selected, index);
    }

    pub fn move_down(&mut self, index: &SectionedLoginIndex) {
        let Some(current) = self.selected else {
            self.selected = first_path(index);
            return;
        };

        if current.row + 1 < index.row_count(current.section) {
            self.selected = Some(IndexPath::new(current.section, current.row + 1));
            return;
        }

        let next_section = (current.section + 1..index.section_count())
            .find(|&s| index.row_count(s) > 0);
        if let Some(section) = next_section {
            self.selected = Some(IndexPath::new(section, 0));
        }
    }

    pub fn move_up(&mut self, index: &SectionedLoginIndex) {
        let Some(current) = self.selected else {
            self.selected = first_path(index);
            return;
        };

        if current.row > 0 {
            self.selected = Some(IndexPath::new(current.section, current.row - 1));
            return;
        }

        let prev_section = (0..current.section).rev().find(|&s| index.row_count(s) > 0);
        if let Some(section) = prev_section {
            self.selected = Some(IndexPath::new(section, index.row_count(section) - 1));
        }
    }

    /// Jump to the first row of the section titled `title`
    pub fn jump_to_title(&mut self, index: &SectionedLoginIndex, title: &str) {
        if index.section_count() == 0 {
            self.selected = None;
            return;
        }
        let section = index.section_index_for_title(title);
        self.selected = Some(IndexPath::new(section, 0));
    }

    pub fn selected_record<'a>(&self, index: &'a SectionedLoginIndex) -> Option<&'a LoginRecord> {
        let path = self.selected?;
        index.record_at(path.section, path.row)
    }
}

fn first_path(index: &SectionedLoginIndex) -> Option<IndexPath> {
    (index.section_count() > 0).then(|| IndexPath::new(0, 0))
}

fn compute_selection_after_replace(
    selected: Option<IndexPath>,
    index: &SectionedLoginIndex,
) -> Option<IndexPath> {
    let sections = index.section_count();
    if sections == 0 {
        return None;
    }

    let path = selected?;
    let section = path.section.min(sections - 1);
    let row = path.row.min(index.row_count(section).saturating_sub(1));
    Some(IndexPath::new(section, row))
}
