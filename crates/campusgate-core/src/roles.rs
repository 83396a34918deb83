//! Platform roles and role requirements.
//!
//! A user carries exactly one [`Role`]. Administrators may additionally pick a
//! [`ViewAs`] override to preview the platform as another role; the role used
//! for authorization after that override is the *effective role*.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A platform role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Instructor,
    Moderator,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Student, Role::Instructor, Role::Moderator, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            "moderator" => Ok(Role::Moderator),
            "admin" => Ok(Role::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// The admin "view as" override: either a concrete role or `"current"`.
///
/// Serialized as a plain string so it round-trips through JWT claims and JSON
/// bodies as `"current"`, `"instructor"`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ViewAs {
    #[default]
    Current,
    Role(Role),
}

impl ViewAs {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewAs::Current => "current",
            ViewAs::Role(role) => role.as_str(),
        }
    }
}

impl fmt::Display for ViewAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid view-as value: {0}")]
pub struct ParseViewAsError(pub String);

impl FromStr for ViewAs {
    type Err = ParseViewAsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "current" {
            return Ok(ViewAs::Current);
        }
        s.parse::<Role>()
            .map(ViewAs::Role)
            .map_err(|_| ParseViewAsError(s.to_string()))
    }
}

impl TryFrom<String> for ViewAs {
    type Error = ParseViewAsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ViewAs> for String {
    fn from(value: ViewAs) -> Self {
        value.as_str().to_string()
    }
}

impl From<Role> for ViewAs {
    fn from(role: Role) -> Self {
        ViewAs::Role(role)
    }
}

/// Resolve the role used for authorization decisions.
///
/// The override only applies to administrators; for every other role it is
/// ignored, even if a forged or stale value is present.
pub fn effective_role(user_role: Role, view_as: ViewAs) -> Role {
    match (user_role, view_as) {
        (Role::Admin, ViewAs::Role(role)) => role,
        _ => user_role,
    }
}

/// Roles accepted by a gated route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleRequirement {
    Single(Role),
    AnyOf(Vec<Role>),
}

impl RoleRequirement {
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        RoleRequirement::AnyOf(roles.into_iter().collect())
    }

    /// Set membership: an empty `AnyOf` is satisfied by nobody.
    pub fn is_satisfied_by(&self, role: Role) -> bool {
        match self {
            RoleRequirement::Single(required) => *required == role,
            RoleRequirement::AnyOf(allowed) => allowed.contains(&role),
        }
    }

    pub fn roles(&self) -> &[Role] {
        match self {
            RoleRequirement::Single(role) => std::slice::from_ref(role),
            RoleRequirement::AnyOf(roles) => roles,
        }
    }
}

impl From<Role> for RoleRequirement {
    fn from(role: Role) -> Self {
        RoleRequirement::Single(role)
    }
}
