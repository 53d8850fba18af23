#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

/// Read-only identity data. Authentication resolves a `userId` into one of
/// these before any operation runs.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: u64,
    pub name: String,
    pub location: String,
    pub role: Role,
}

impl User {
    pub fn new(user_id: u64, name: &str, location: &str, role: Role) -> Self {
        Self {
            user_id,
            name: name.to_string(),
            location: location.to_string(),
            role,
        }
    }
}
