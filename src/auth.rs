use subtle::ConstantTimeEq;

pub const DEFAULT_ADMIN_PASSCODE: &str = "1212";

/// Decides whether a sign-in is granted admin rights.
///
/// The state manager only ever sees this capability, so the passcode gate
/// below can be swapped for a real credential check without touching it.
pub trait Authenticator {
    fn grant_admin(&self, email: &str, password: &str) -> bool;
}

/// Grants admin when the password matches a fixed passcode, compared in
/// constant time.
#[derive(Debug, Clone)]
pub struct PasscodeAuthenticator {
    passcode: String,
}

impl PasscodeAuthenticator {
    pub fn new(passcode: impl Into<String>) -> Self {
        Self {
            passcode: passcode.into(),
        }
    }
}

impl Default for PasscodeAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PASSCODE)
    }
}

impl Authenticator for PasscodeAuthenticator {
    fn grant_admin(&self, _email: &str, password: &str) -> bool {
        password.as_bytes().ct_eq(self.passcode.as_bytes()).into()
    }
}
