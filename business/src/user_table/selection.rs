use std::collections::BTreeSet;

use crate::UserId;

/// Ids of the selected rows. Each id appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<UserId>,
}

impl Selection {
    pub fn contains(&self, id: &UserId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.ids.iter()
    }

    /// Flip membership of `id`.
    pub fn toggle(&mut self, id: UserId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn remove(&mut self, id: &UserId) {
        self.ids.remove(id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn extend(&mut self, ids: impl IntoIterator<Item = UserId>) {
        self.ids.extend(ids);
    }

    pub fn retain(&mut self, keep: impl FnMut(&UserId) -> bool) {
        self.ids.retain(keep);
    }
}

/// Display state of the select-all checkbox for a set of visible rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectAllState {
    #[default]
    Unchecked,
    Indeterminate,
    Checked,
}

impl SelectAllState {
    pub fn of<'a>(selection: &Selection, scope: impl IntoIterator<Item = &'a UserId>) -> Self {
        let (mut total, mut selected) = (0usize, 0usize);
        for id in scope {
            total += 1;
            if selection.contains(id) {
                selected += 1;
            }
        }
        match selected {
            0 => Self::Unchecked,
            n if n == total => Self::Checked,
            _ => Self::Indeterminate,
        }
    }

    pub fn is_checked(self) -> bool {
        self == Self::Checked
    }

    pub fn is_indeterminate(self) -> bool {
        self == Self::Indeterminate
    }
}
