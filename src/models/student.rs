use std::fmt;

/// Achievement tier derived from a points threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Milestone {
    None,
    Bronze,
    Silver,
    Gold,
}

pub const BRONZE_THRESHOLD: u32 = 100;
pub const SILVER_THRESHOLD: u32 = 200;
pub const GOLD_THRESHOLD: u32 = 300;

impl Milestone {
    /// Highest tier whose threshold `points` reaches.
    pub fn for_points(points: u32) -> Self {
        if points >= GOLD_THRESHOLD {
            Milestone::Gold
        } else if points >= SILVER_THRESHOLD {
            Milestone::Silver
        } else if points >= BRONZE_THRESHOLD {
            Milestone::Bronze
        } else {
            Milestone::None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Milestone::None => "None",
            Milestone::Bronze => "Bronze",
            Milestone::Silver => "Silver",
            Milestone::Gold => "Gold",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Milestone::Gold => "🏆 Milestone: Gold Achieved!",
            Milestone::Silver => "⭐ Milestone: Silver Achieved!",
            Milestone::Bronze => "🎯 Milestone: Bronze Achieved!",
            Milestone::None => "Keep going to reach your first milestone!",
        }
    }

    /// CSS tone of the milestone banner.
    pub fn tone(&self) -> &'static str {
        match self {
            Milestone::Gold => "success",
            Milestone::Silver => "info",
            Milestone::Bronze => "warning",
            Milestone::None => "plain",
        }
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: &'static str,
    pub points: u32,
    /// Label carried by the sample data; not recomputed from `points`.
    pub milestone: Milestone,
}

const ROSTER: [Student; 5] = [
    Student { name: "Alice", points: 120, milestone: Milestone::Bronze },
    Student { name: "Bob", points: 95, milestone: Milestone::Bronze },
    Student { name: "Charlie", points: 200, milestone: Milestone::Silver },
    Student { name: "David", points: 75, milestone: Milestone::None },
    Student { name: "Eva", points: 150, milestone: Milestone::Bronze },
];

/// The fixed sample roster, in stored order.
pub fn roster() -> &'static [Student] {
    &ROSTER
}

/// Roster sorted by points, highest first. Ties keep stored order.
pub fn leaderboard() -> Vec<Student> {
    let mut students = ROSTER.to_vec();
    students.sort_by(|a, b| b.points.cmp(&a.points));
    students
}

pub fn find_by_name(name: &str) -> Option<&'static Student> {
    ROSTER.iter().find(|s| s.name == name)
}

pub fn names() -> Vec<&'static str> {
    ROSTER.iter().map(|s| s.name).collect()
}
