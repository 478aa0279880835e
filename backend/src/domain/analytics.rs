//! Aggregate statistics for the admin dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use super::complaint::{Category, Complaint, Status, TimelineAction};
use super::{Role, User};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Snapshot of complaint metrics. Maps only carry keys that occur, in
/// declaration order of the enum.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStats {
    pub total_complaints: usize,
    pub resolved_complaints: usize,
    pub avg_resolution_hours: f64,
    pub category_counts: BTreeMap<Category, usize>,
    pub status_counts: BTreeMap<Status, usize>,
    pub total_students: usize,
}

impl ComplaintStats {
    /// `(label, count)` pairs for chart collaborators.
    pub fn category_data(&self) -> Vec<(&'static str, usize)> {
        self.category_counts
            .iter()
            .map(|(category, count)| (category.label(), *count))
            .collect()
    }

    /// `(label, count)` pairs for the status chart.
    pub fn status_data(&self) -> Vec<(&'static str, usize)> {
        self.status_counts
            .iter()
            .map(|(status, count)| (status.label(), *count))
            .collect()
    }

    /// Average resolution time rendered with two decimals, e.g. `"3.50 hrs"`.
    pub fn avg_resolution_label(&self) -> String {
        format!("{:.2} hrs", self.avg_resolution_hours)
    }
}

/// Hours from creation to the resolution event that heads the timeline.
///
/// Timelines are newest first, so a reopened and re-resolved complaint is
/// measured to its latest resolution. Returns `None` when no resolution
/// event exists.
fn resolution_hours(complaint: &Complaint) -> Option<f64> {
    complaint
        .timeline()
        .iter()
        .find(|event| event.action() == TimelineAction::Resolution)
        .map(|event| {
            let elapsed = event.timestamp() - complaint.created_at();
            elapsed.num_milliseconds() as f64 / MILLIS_PER_HOUR
        })
}

/// Compute [`ComplaintStats`] over `complaints` and `users`.
///
/// Resolved complaints without a resolution event count as zero hours but
/// still divide the total.
pub fn aggregate(complaints: &[Complaint], users: &[User]) -> ComplaintStats {
    let mut category_counts = BTreeMap::new();
    let mut status_counts = BTreeMap::new();
    let mut resolved = 0_usize;
    let mut resolution_total = 0.0_f64;

    for complaint in complaints {
        *category_counts.entry(complaint.category()).or_insert(0) += 1;
        *status_counts.entry(complaint.status()).or_insert(0) += 1;
        if complaint.status() == Status::Resolved {
            resolved += 1;
            resolution_total += resolution_hours(complaint).unwrap_or(0.0);
        }
    }

    let avg_resolution_hours = if resolved == 0 {
        0.0
    } else {
        resolution_total / resolved as f64
    };

    ComplaintStats {
        total_complaints: complaints.len(),
        resolved_complaints: resolved,
        avg_resolution_hours,
        category_counts,
        status_counts,
        total_students: users
            .iter()
            .filter(|user| user.role() == Role::Student)
            .count(),
    }
}
