//! Team membership for the external-contributor flag

use std::collections::HashSet;

use logbook_core::config::TeamConfig;

const NOREPLY_DOMAIN: &str = "@users.noreply.github.com";

/// Known maintainers and bots.
///
/// Entries may be author names, GitHub logins or emails; all of them are
/// compared after [`normalize_identity`].
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    members: HashSet<String>,
}

impl TeamRoster {
    /// Build a roster from member and bot identities
    pub fn new<I, S>(identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members = identities
            .into_iter()
            .map(|s| normalize_identity(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        Self { members }
    }

    /// Build a roster from the `team` config section
    pub fn from_config(config: &TeamConfig) -> Self {
        Self::new(config.maintainers.iter().chain(config.bots.iter()))
    }

    /// Whether no team members are known
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the identity belongs to the team
    pub fn contains(&self, identity: &str) -> bool {
        let normalized = normalize_identity(identity);
        !normalized.is_empty() && self.members.contains(&normalized)
    }

    /// Whether an author is outside the team.
    ///
    /// An empty roster knows nobody, so nobody is reported as external.
    pub fn is_external(&self, name: &str, email: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        !(self.contains(name) || self.contains(email))
    }
}

/// Normalize a name, login or email for comparison.
///
/// GitHub noreply addresses (`12345+login@users.noreply.github.com`)
/// collapse to the bare login so they match a roster entry for that login.
pub fn normalize_identity(identity: &str) -> String {
    let mut value = identity.trim().to_lowercase();

    if let Some(local) = value.strip_suffix(NOREPLY_DOMAIN) {
        let login = match local.split_once('+') {
            Some((id, login)) if id.chars().all(|c| c.is_ascii_digit()) => login,
            _ => local,
        };
        value = login.to_string();
    }

    if let Some(stripped) = value.strip_suffix("[bot]") {
        value = stripped.trim_end().to_string();
    }

    value
}
