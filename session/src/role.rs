//! Closed set of marketplace roles.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::SessionError;

/// Role tag attached to every session. Fixes which protected routes are reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(alias = "staff-admin", alias = "staff_admin")]
    StaffAdmin,
    Vendor,
    Customer,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 4] = [Self::Admin, Self::StaffAdmin, Self::Vendor, Self::Customer];

    /// Wire tag used in persisted sessions and API paths.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::StaffAdmin => "staffadmin",
            Self::Vendor => "vendor",
            Self::Customer => "customer",
        }
    }

    /// Dashboard a signed-in user of this role lands on.
    #[must_use]
    pub fn landing_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::StaffAdmin => "/staffadmin",
            Self::Vendor => "/vendor",
            Self::Customer => "/customer",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::StaffAdmin => "Staff Admin",
            Self::Vendor => "Vendor",
            Self::Customer => "Customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "staffadmin" | "staff-admin" | "staff_admin" => Ok(Self::StaffAdmin),
            "vendor" => Ok(Self::Vendor),
            "customer" => Ok(Self::Customer),
            _ => Err(SessionError::UnknownRole(s.to_owned())),
        }
    }
}
