//! Input data model for the career graph.
//!
//! These types describe the already-aggregated snapshot the engine consumes:
//! one profile (the hub), its ambitions (ring satellites) and the projects
//! grouped under them. The host aggregator builds a `GraphData` per load and
//! re-supplies it wholesale on refresh; the engine never mutates it.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which ambitions currently show their full project grid instead of a
/// collapsed cluster head. Owned by the interaction state machine and
/// replaced wholesale on each toggle; a `BTreeSet` keeps serialized output
/// ordered deterministically.
pub type ExpansionState = BTreeSet<String>;

/// Ambition id reserved for projects whose ambition reference is absent or
/// does not match any known ambition.
pub const OTHER_AMBITION_ID: &str = "other";

/// Display name for the synthetic `"other"` ambition.
pub const OTHER_AMBITION_NAME: &str = "Other";

/// Identity and descriptive attributes of the graph's hub.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Skill/product tags shown on the hub detail view.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Aggregate project count as reported by the aggregator.
    #[serde(default)]
    pub project_count: usize,
}

/// A strategic-ambition grouping key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbitionNode {
    pub id: String,
    pub name: String,
    /// Ordered set of member project ids, as supplied by the aggregator.
    #[serde(default)]
    pub project_ids: Vec<String>,
}

/// A single project under an ambition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ambition_id: Option<String>,
    #[serde(default)]
    pub ambition_name: Option<String>,
}

/// The complete snapshot the engine consumes.
///
/// Projects are assumed deduplicated by id; a project whose `ambition_id`
/// does not resolve is bucketed under the synthetic `"other"` ambition
/// rather than dropped (see `GraphIndex`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub profile: Profile,
    #[serde(default)]
    pub ambitions: Vec<AmbitionNode>,
    #[serde(default)]
    pub projects: Vec<ProjectNode>,
}
