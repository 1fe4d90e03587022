use crate::User;

/// Case-insensitive substring match against name, email or role.
///
/// The empty term matches every record.
pub fn matches(user: &User, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [&user.name, &user.email, &user.role]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records matching `term`, in list order.
pub fn filter<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    users.iter().filter(|user| matches(user, term)).collect()
}
