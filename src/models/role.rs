use std::fmt;
use std::str::FromStr;

/// The four cohort roles a visitor can log in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Mentor,
    Floorwing,
    Administrator,
}

impl Role {
    /// Login selector order.
    pub const ALL: [Role; 4] = [Role::Student, Role::Mentor, Role::Floorwing, Role::Administrator];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Mentor => "Mentor",
            Role::Floorwing => "Floorwing",
            Role::Administrator => "Administrator",
        }
    }

    /// Heading shown at the top of the role's dashboard.
    pub fn dashboard_title(&self) -> &'static str {
        match self {
            Role::Student => "📚 Student Dashboard",
            Role::Mentor => "👨‍🏫 Mentor Dashboard",
            Role::Floorwing => "🏢 Floorwing Dashboard",
            Role::Administrator => "⚙️ Administrator Dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Exact, case-sensitive match on the role name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
