//! Read-side queries over a complaint collection.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::json;

use super::complaint::{Category, Complaint, ComplaintId, Priority, Status};
use super::{Error, UserId};

/// Label that selects every value of a filter dimension.
pub const ALL_LABEL: &str = "All";

/// One filter dimension: either a wildcard or an exact value.
///
/// Serialises as the value's label, with the wildcard spelled `"All"`.
///
/// # Examples
/// ```
/// use brotocare::domain::{Selection, Status};
///
/// let any: Selection<Status> = serde_json::from_str("\"All\"").unwrap();
/// assert_eq!(any, Selection::All);
/// let one: Selection<Status> = serde_json::from_str("\"In Progress\"").unwrap();
/// assert_eq!(one, Selection::Only(Status::InProgress));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this dimension.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_LABEL),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_LABEL {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Admin filter over the complaint collection. The default admits everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComplaintFilter {
    pub category: Selection<Category>,
    pub priority: Selection<Priority>,
    pub status: Selection<Status>,
    pub campus: Selection<String>,
    pub search_term: String,
}

impl ComplaintFilter {
    /// Whether every dimension and the search term admit `complaint`.
    ///
    /// The search term matches, ignoring case, anywhere in the student name
    /// or the complaint id. An empty term matches everything.
    pub fn matches(&self, complaint: &Complaint) -> bool {
        self.category.admits(&complaint.category())
            && self.priority.admits(&complaint.priority())
            && self.status.admits(&complaint.status())
            && self.campus_admits(complaint.campus())
            && self.search_admits(complaint)
    }

    fn campus_admits(&self, campus: &str) -> bool {
        match &self.campus {
            Selection::All => true,
            Selection::Only(expected) => expected == campus,
        }
    }

    fn search_admits(&self, complaint: &Complaint) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        complaint
            .student_name()
            .as_ref()
            .to_lowercase()
            .contains(&needle)
            || complaint.id().as_ref().to_lowercase().contains(&needle)
    }
}

/// Complaints admitted by `filter`, in stored order.
pub fn filter(complaints: &[Complaint], filter: &ComplaintFilter) -> Vec<Complaint> {
    complaints
        .iter()
        .filter(|complaint| filter.matches(complaint))
        .cloned()
        .collect()
}

/// Look up a single complaint for the detail view.
pub fn find<'a>(complaints: &'a [Complaint], id: &ComplaintId) -> Result<&'a Complaint, Error> {
    complaints
        .iter()
        .find(|complaint| complaint.id() == id)
        .ok_or_else(|| {
            Error::not_found(format!("complaint {id} not found"))
                .with_details(json!({ "complaintId": id }))
        })
}

/// `"All"` followed by each distinct campus in first-seen order.
pub fn campus_options(complaints: &[Complaint]) -> Vec<String> {
    let mut options = vec![ALL_LABEL.to_owned()];
    for complaint in complaints {
        let campus = complaint.campus();
        if !options.iter().skip(1).any(|seen| seen == campus) {
            options.push(campus.to_owned());
        }
    }
    options
}

/// Complaints authored by `student_id`, newest first as stored.
pub fn complaints_for_student(complaints: &[Complaint], student_id: &UserId) -> Vec<Complaint> {
    complaints
        .iter()
        .filter(|complaint| complaint.student_id() == student_id)
        .cloned()
        .collect()
}
