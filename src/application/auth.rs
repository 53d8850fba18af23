use crate::domain::errors::DomainError;
use crate::domain::user::{Role, User};
use crate::stores::{self, SharedStores};

/// Resolves a raw `userId` into a user record. Authentication proper is out
/// of scope; an unknown id is simply `Unauthenticated`.
pub struct IdentityService {
    stores: SharedStores,
}

impl IdentityService {
    pub fn new(stores: SharedStores) -> Self {
        Self { stores }
    }

    pub fn resolve(&self, user_id: u64) -> Result<User, DomainError> {
        let stores = stores::lock(&self.stores)?;
        stores
            .users
            .find(user_id)
            .cloned()
            .ok_or(DomainError::Unauthenticated)
    }
}

/// Single role gate applied before any admin operation runs.
pub fn require_role(user: &User, role: Role) -> Result<(), DomainError> {
    if user.role == role {
        Ok(())
    } else {
        Err(DomainError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::Stores;

    #[test]
    fn resolve_known_and_unknown_users() {
        let identity = IdentityService::new(Stores::seeded().into_shared());
        assert_eq!(identity.resolve(1).expect("user 1").name, "Amit Sharma");
        assert_eq!(identity.resolve(99).unwrap_err(), DomainError::Unauthenticated);
    }

    #[test]
    fn role_gate() {
        let admin = User::new(1, "a", "x", Role::Admin);
        let buyer = User::new(2, "b", "y", Role::User);
        assert!(require_role(&admin, Role::Admin).is_ok());
        assert_eq!(require_role(&buyer, Role::Admin), Err(DomainError::Forbidden));
    }
}
