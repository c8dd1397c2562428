//! Deterministic view of a `GraphData` snapshot.
//!
//! `GraphIndex` resolves every project into exactly one cluster (bucketing
//! unmatched projects under the synthetic `"other"` ambition), applies the
//! stable ordering rules used by both the layout facade and the interaction
//! state machine, and provides O(1) id lookups.
//!
//! Ordering rules:
//! - Clusters: descending by project count, tie-broken by ascending name.
//! - Projects within a cluster: deadline descending with missing deadlines
//!   last, then `created_at` descending, then name ascending. The first
//!   project in this order is the cluster head.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::{AmbitionNode, GraphData, ProjectNode, OTHER_AMBITION_ID, OTHER_AMBITION_NAME};

/// One ambition together with its member projects in display order.
#[derive(Debug, Clone)]
pub struct Cluster<'a> {
    pub id: String,
    pub name: String,
    /// Member projects, sorted by `compare_projects`. The head is index 0.
    pub projects: Vec<&'a ProjectNode>,
}

impl<'a> Cluster<'a> {
    /// The project shown when this cluster is collapsed, if any.
    pub fn head(&self) -> Option<&'a ProjectNode> {
        self.projects.first().copied()
    }
}

/// Index over a `GraphData` snapshot. Built once per layout/interaction
/// pass; borrows the snapshot it was built from.
#[derive(Debug)]
pub struct GraphIndex<'a> {
    /// Clusters in ring display order (`compare_clusters`). Includes the
    /// synthetic `"other"` cluster only when unmatched projects exist.
    pub clusters: Vec<Cluster<'a>>,
    project_by_id: HashMap<&'a str, &'a ProjectNode>,
    cluster_of_project: HashMap<&'a str, usize>,
    cluster_by_id: HashMap<String, usize>,
}

/// Total order on projects: dated entries first (later deadlines first),
/// then `created_at` descending, then name ascending.
pub fn compare_projects(a: &ProjectNode, b: &ProjectNode) -> Ordering {
    b.deadline
        .cmp(&a.deadline)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.name.cmp(&b.name))
}

fn compare_clusters(a: &Cluster<'_>, b: &Cluster<'_>) -> Ordering {
    b.projects
        .len()
        .cmp(&a.projects.len())
        .then_with(|| a.name.cmp(&b.name))
}

impl<'a> GraphIndex<'a> {
    pub fn build(data: &'a GraphData) -> Self {
        let known: HashMap<&str, &AmbitionNode> =
            data.ambitions.iter().map(|a| (a.id.as_str(), a)).collect();

        // Bucket projects by resolved ambition; unresolved go to "other".
        let mut buckets: HashMap<&str, Vec<&ProjectNode>> = HashMap::new();
        let mut other: Vec<&ProjectNode> = Vec::new();
        for project in &data.projects {
            match project.ambition_id.as_deref().filter(|id| known.contains_key(id)) {
                Some(id) => buckets.entry(id).or_default().push(project),
                None => other.push(project),
            }
        }

        let mut clusters: Vec<Cluster<'a>> = data
            .ambitions
            .iter()
            .map(|a| Cluster {
                id: a.id.clone(),
                name: a.name.clone(),
                projects: buckets.remove(a.id.as_str()).unwrap_or_default(),
            })
            .collect();
        if !other.is_empty() {
            clusters.push(Cluster {
                id: OTHER_AMBITION_ID.to_string(),
                name: OTHER_AMBITION_NAME.to_string(),
                projects: other,
            });
        }

        for cluster in &mut clusters {
            cluster.projects.sort_by(|a, b| compare_projects(a, b));
        }
        clusters.sort_by(compare_clusters);

        let mut project_by_id = HashMap::new();
        let mut cluster_of_project = HashMap::new();
        let mut cluster_by_id = HashMap::new();
        for (ci, cluster) in clusters.iter().enumerate() {
            cluster_by_id.insert(cluster.id.clone(), ci);
            for &project in &cluster.projects {
                project_by_id.insert(project.id.as_str(), project);
                cluster_of_project.insert(project.id.as_str(), ci);
            }
        }

        Self {
            clusters,
            project_by_id,
            cluster_of_project,
            cluster_by_id,
        }
    }

    pub fn project(&self, id: &str) -> Option<&'a ProjectNode> {
        self.project_by_id.get(id).copied()
    }

    /// The cluster a project belongs to.
    pub fn cluster_of(&self, project_id: &str) -> Option<&Cluster<'a>> {
        self.cluster_of_project
            .get(project_id)
            .map(|&ci| &self.clusters[ci])
    }

    pub fn cluster(&self, ambition_id: &str) -> Option<&Cluster<'a>> {
        self.cluster_by_id.get(ambition_id).map(|&ci| &self.clusters[ci])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::model::Profile;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(id: &str, ambition: Option<&str>, deadline: Option<NaiveDate>, created: NaiveDate) -> ProjectNode {
        ProjectNode {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            deadline,
            created_at: created,
            status: None,
            ambition_id: ambition.map(str::to_string),
            ambition_name: None,
        }
    }

    fn ambition(id: &str, name: &str) -> AmbitionNode {
        AmbitionNode {
            id: id.to_string(),
            name: name.to_string(),
            project_ids: vec![],
        }
    }

    #[test]
    fn test_project_order_deadline_then_created_then_name() {
        let mut projects = vec![
            project("undated", None, None, date(2024, 1, 1)),
            project("early", None, Some(date(2025, 1, 1)), date(2024, 1, 1)),
            project("late_old", None, Some(date(2025, 6, 1)), date(2024, 1, 1)),
            project("late_new", None, Some(date(2025, 6, 1)), date(2024, 3, 1)),
            project("b", None, Some(date(2025, 6, 1)), date(2024, 3, 1)),
        ];
        projects.sort_by(compare_projects);
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        // "b" ties with "late_new" on deadline and created_at, wins on name.
        assert_eq!(ids, vec!["b", "late_new", "late_old", "early", "undated"]);
    }

    #[test]
    fn test_unmatched_projects_bucket_under_other() {
        let data = GraphData {
            profile: Profile::default(),
            ambitions: vec![ambition("cloud", "Cloud")],
            projects: vec![
                project("p1", Some("cloud"), None, date(2024, 1, 1)),
                project("p2", Some("missing"), None, date(2024, 1, 2)),
                project("p3", None, None, date(2024, 1, 3)),
            ],
        };
        let index = GraphIndex::build(&data);

        let other = index.cluster(OTHER_AMBITION_ID).unwrap();
        assert_eq!(other.projects.len(), 2);
        assert_eq!(index.cluster_of("p2").unwrap().id, OTHER_AMBITION_ID);
        assert_eq!(index.cluster_of("p1").unwrap().id, "cloud");
    }

    #[test]
    fn test_cluster_order_by_size_then_name() {
        let data = GraphData {
            profile: Profile::default(),
            ambitions: vec![ambition("b", "Beta"), ambition("a", "Alpha"), ambition("c", "Gamma")],
            projects: vec![
                project("p1", Some("c"), None, date(2024, 1, 1)),
                project("p2", Some("c"), None, date(2024, 1, 2)),
                project("p3", Some("a"), None, date(2024, 1, 3)),
                project("p4", Some("b"), None, date(2024, 1, 4)),
            ],
        };
        let index = GraphIndex::build(&data);
        let names: Vec<&str> = index.clusters.iter().map(|c| c.name.as_str()).collect();
        // Gamma has 2 projects; Alpha and Beta tie at 1 and sort by name.
        assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn test_empty_ambition_keeps_its_cluster() {
        let data = GraphData {
            profile: Profile::default(),
            ambitions: vec![ambition("a", "Alpha")],
            projects: vec![],
        };
        let index = GraphIndex::build(&data);
        assert_eq!(index.clusters.len(), 1);
        assert!(index.clusters[0].projects.is_empty());
        assert!(index.clusters[0].head().is_none());
    }

    #[test]
    fn test_lookups() {
        let data = GraphData {
            profile: Profile::default(),
            ambitions: vec![ambition("a", "Alpha")],
            projects: vec![project("p1", Some("a"), None, date(2024, 1, 1))],
        };
        let index = GraphIndex::build(&data);
        assert_eq!(index.project("p1").unwrap().id, "p1");
        assert!(index.project("nope").is_none());
        assert!(index.cluster("nope").is_none());
    }
}
