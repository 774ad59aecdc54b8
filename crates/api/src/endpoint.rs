//! API environments and the hosts that serve them.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

pub const UAT_URL: &str = "https://uat-api.ssg-wsg.sg";
pub const PRODUCTION_URL: &str = "https://public-api.ssg-wsg.sg";
/// Production host for course-run publishing, SkillsFuture Credit claims and
/// attendance uploads.
pub const PRODUCTION_ALTERNATE_URL: &str = "https://api.ssg-wsg.sg";
pub const MOCK_URL: &str = "https://mock-api.ssg-wsg.sg";

/// Deployment of the SSG API a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Uat,
    Production,
    Mock,
}

/// Which of an environment's hosts an operation talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    Public,
    Alternate,
}

impl Environment {
    pub const ALL: &'static [Environment] = &[Self::Uat, Self::Production, Self::Mock];

    pub fn name(self) -> &'static str {
        match self {
            Self::Uat => "UAT",
            Self::Production => "Production",
            Self::Mock => "Mock",
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Self::Uat => UAT_URL,
            Self::Production => PRODUCTION_URL,
            Self::Mock => MOCK_URL,
        }
    }

    /// Only production has a second host; the others serve everything from
    /// [`Environment::base_url`].
    pub fn alternate_base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_ALTERNATE_URL,
            other => other.base_url(),
        }
    }

    pub fn url(self, host: Host) -> &'static str {
        match host {
            Host::Public => self.base_url(),
            Host::Alternate => self.alternate_base_url(),
        }
    }
}

impl FromStr for Environment {
    type Err = ApiError;

    /// Case-insensitive match on the environment name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|env| env.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ApiError::Config(format!(
                    "unknown environment '{s}', expected UAT, Production or Mock"
                ))
            })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
