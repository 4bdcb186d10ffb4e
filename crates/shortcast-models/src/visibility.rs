//! Clip visibility on the publishing platform.

use serde::{Deserialize, Serialize};

/// Privacy status applied to a published clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Map the request's `make_public` flag to a visibility.
    pub fn from_public_flag(make_public: bool) -> Self {
        if make_public {
            Self::Public
        } else {
            Self::Private
        }
    }

    /// Platform privacy status string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
