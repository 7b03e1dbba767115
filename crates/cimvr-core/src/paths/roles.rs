//! The two fixed process roles and their static search data.

use std::fmt;

/// Process role launched by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Server,
    Client,
}

impl Role {
    /// Environment variable that overrides the executable search for this
    /// role. An override value is trusted verbatim, with no existence check.
    pub const fn override_var(self) -> &'static str {
        match self {
            Self::Server => "CIMVR_SERVER",
            Self::Client => "CIMVR_CLIENT",
        }
    }

    /// Candidate executable filenames, in probe order.
    ///
    /// Both the bare and the `.exe` form are probed on every platform, so a
    /// cross-built tree resolves the same everywhere.
    pub const fn candidate_filenames(self) -> &'static [&'static str] {
        match self {
            Self::Server => &["cimvr_server", "cimvr_server.exe"],
            Self::Client => &["cimvr_client", "cimvr_client.exe"],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server => write!(f, "server"),
            Self::Client => write!(f, "client"),
        }
    }
}
