use rand::Rng;
use rand::seq::IndexedRandom;

use crate::models::chart::Datum;
use crate::models::student::{self, GOLD_THRESHOLD, Milestone};

// ---------- Widget bounds ----------

/// Bounds of a numeric form input: `min..=max` in multiples of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsInput {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl PointsInput {
    /// Clamp into range, then snap down onto the step grid.
    pub fn normalize(&self, value: i64) -> u32 {
        let clamped = value.clamp(i64::from(self.min), i64::from(self.max)) as u32;
        self.min + (clamped - self.min) / self.step * self.step
    }
}

/// Mentor "Assign Points" input.
pub const ASSIGN_POINTS: PointsInput = PointsInput { min: 0, max: 100, step: 5 };
/// Administrator "Set new points" input.
pub const ADJUST_POINTS: PointsInput = PointsInput { min: 0, max: 500, step: 10 };

// ---------- Student dashboard ----------

/// The "Your Points" panel of the student dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentOverview {
    pub points: u32,
    pub milestone: Milestone,
}

impl StudentOverview {
    pub fn for_points(points: u32) -> Self {
        Self { points, milestone: Milestone::for_points(points) }
    }

    /// Pick a roster point value at random, the way a demo "logged in student" is chosen.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let points: Vec<u32> = student::roster().iter().map(|s| s.points).collect();
        let chosen = points.choose(rng).copied().unwrap_or(0);
        Self::for_points(chosen)
    }

    /// Progress toward Gold, capped at 1.0.
    pub fn progress(&self) -> f64 {
        (f64::from(self.points) / f64::from(GOLD_THRESHOLD)).min(1.0)
    }

    pub fn progress_percent(&self) -> u32 {
        (self.progress() * 100.0).round() as u32
    }
}

/// Fixed monthly activity series shown to students.
pub fn monthly_activity() -> Vec<Datum> {
    [("Jan", 20), ("Feb", 35), ("Mar", 50), ("Apr", 15)]
        .into_iter()
        .map(|(month, points)| Datum::new(month, points))
        .collect()
}

// ---------- Floorwing dashboard ----------

pub fn floor_performance() -> Vec<Datum> {
    student::roster()
        .iter()
        .map(|s| Datum::new(s.name, s.points))
        .collect()
}

// ---------- Administrator dashboard ----------

pub const MONTHLY_REPORT_MIN: u32 = 50;
pub const MONTHLY_REPORT_MAX: u32 = 150;

/// A fresh random monthly score per student, in roster order.
pub fn monthly_report<R: Rng + ?Sized>(rng: &mut R) -> Vec<Datum> {
    student::roster()
        .iter()
        .map(|s| Datum::new(s.name, rng.random_range(MONTHLY_REPORT_MIN..=MONTHLY_REPORT_MAX)))
        .collect()
}
