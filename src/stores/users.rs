use crate::domain::user::{Role, User};

/// Read-only user directory. Identity resolution is the only lookup the
/// core needs; user management is out of scope.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            User::new(1, "Amit Sharma", "Delhi, India", Role::Admin),
            User::new(2, "Sophia Williams", "New York, USA", Role::User),
            User::new(3, "Raj Patel", "Mumbai, India", Role::User),
            User::new(4, "Emily Johnson", "London, UK", Role::Admin),
        ])
    }

    pub fn find(&self, user_id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.user_id == user_id)
    }
}
