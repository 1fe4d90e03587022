//! Inline row editing.
//!
//! `Viewing -> Editing(draft) -> Committed | Cancelled -> Viewing`. The draft is a standalone
//! copy of the editable fields; the working list only changes on commit.

use crate::{User, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Email,
    Role,
}

impl EditField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Role];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserDraft {
    pub fn of(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }

    pub fn get(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.name,
            EditField::Email => &self.email,
            EditField::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: EditField, value: String) {
        match field {
            EditField::Name => self.name = value,
            EditField::Email => self.email = value,
            EditField::Role => self.role = value,
        }
    }

    /// The draft as a patch that replaces every editable field. The id is never touched.
    pub fn into_patch(self) -> (UserId, UserPatch) {
        let patch = UserPatch {
            name: Some(self.name),
            email: Some(self.email),
            role: Some(self.role),
        };
        (self.id, patch)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditPhase {
    #[default]
    Viewing,
    Editing(UserDraft),
}

impl EditPhase {
    pub fn draft(&self) -> Option<&UserDraft> {
        match self {
            Self::Viewing => None,
            Self::Editing(draft) => Some(draft),
        }
    }

    pub fn is_editing(&self, id: &UserId) -> bool {
        self.draft().is_some_and(|draft| &draft.id == id)
    }
}

/// How the last edit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Committed(UserId),
    Cancelled(UserId),
}

/// Partial update: `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }

    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_is_decoupled_until_written() {
        let mut user = User::new(1_i64, "Ann", "ann@x.io", "admin");
        let mut draft = UserDraft::of(&user);

        draft.set(EditField::Name, "Annie".to_owned());
        assert_eq!(user.name, "Ann");
        assert_eq!(draft.get(EditField::Name), "Annie");

        let (id, patch) = draft.into_patch();
        assert_eq!(id, UserId::Number(1));
        patch.apply_to(&mut user);
        assert_eq!(user, User::new(1_i64, "Annie", "ann@x.io", "admin"));
    }

    #[test]
    fn patch_keeps_unset_fields() {
        let mut user = User::new(1_i64, "Ann", "ann@x.io", "admin");
        UserPatch {
            role: Some(String::new()),
            ..Default::default()
        }
        .apply_to(&mut user);

        assert_eq!(user, User::new(1_i64, "Ann", "ann@x.io", ""));
    }

    #[test]
    fn phase_tracks_edited_id() {
        let user = User::new("a", "Ann", "", "");
        let phase = EditPhase::Editing(UserDraft::of(&user));

        assert!(phase.is_editing(&UserId::from("a")));
        assert!(!phase.is_editing(&UserId::from("b")));
        assert!(!EditPhase::Viewing.is_editing(&UserId::from("a")));
    }
}
