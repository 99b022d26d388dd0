//! Identifier and edit-token generation.

use uuid::Uuid;

/// Generates a fresh edit token: 32 lowercase hex characters backed by a
/// random UUID, so possession is not guessable.
pub fn new_edit_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Generates a fresh profile record id in the same 32-hex format.
pub fn new_profile_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = new_edit_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(token, token.to_lowercase());
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = new_edit_token();
        let b = new_edit_token();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_shape() {
        let id = new_profile_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
