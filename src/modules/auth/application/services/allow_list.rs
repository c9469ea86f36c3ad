/// Allow-list authorization policy: sign-in is accepted only for logins on
/// the list. Usually holds exactly one entry, but stays a list so the policy
/// can be changed without a rebuild.
#[derive(Debug, Clone)]
pub struct AllowList {
    logins: Vec<String>,
}

impl AllowList {
    pub fn new(logins: Vec<String>) -> Self {
        Self { logins }
    }

    /// Exact, case-sensitive match against the configured logins.
    pub fn permits(&self, login: &str) -> bool {
        self.logins.iter().any(|allowed| allowed == login)
    }
}
