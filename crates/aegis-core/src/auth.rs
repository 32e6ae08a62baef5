//! Credential Gate
//!
//! Development-only login check. Credentials are one hardcoded pair; real
//! account storage and session management are out of scope.

/// localStorage key the frontend keeps its session token under.
pub const AUTH_TOKEN_KEY: &str = "authToken";

const DEV_USERNAME: &str = "admin";
const DEV_PASSWORD: &str = "password";

/// Check a username/password pair against the development credentials.
pub fn verify_credentials(username: &str, password: &str) -> bool {
    username == DEV_USERNAME && password == DEV_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dev_pair() {
        assert!(verify_credentials("admin", "password"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!verify_credentials("admin", "hunter2"));
        assert!(!verify_credentials("root", "password"));
        assert!(!verify_credentials("", ""));
    }
}
