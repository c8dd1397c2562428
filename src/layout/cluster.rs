//! Per-ambition cluster sub-layout.
//!
//! Each ambition's projects either collapse into a single cluster-head node
//! or expand into a 3-column grid. Both states anchor at the same base
//! point: a fixed offset past the ambition node along its outward radial
//! direction, so toggling one cluster never moves the ring or the hub.
//!
//! The project order comes from `graph::compare_projects`; the first project
//! in that order is the cluster head both when collapsed (the one visible
//! node) and when expanded (badge/label carrier).

use crate::graph::Cluster;
use crate::layout::{LayoutConfig, Placement, ProjectPlacement};

/// Anchor point for a cluster: `offset` units past the ambition's edge,
/// along the outward direction `angle` (radians, from the hub center).
fn cluster_base(ambition: &Placement, angle: f64, cfg: &LayoutConfig) -> (f64, f64) {
    let dist = cfg.ambition_radius + cfg.cluster_radial_offset;
    (
        ambition.x + dist * angle.cos(),
        ambition.y + dist * angle.sin(),
    )
}

/// Placements for one cluster. Empty clusters emit nothing; collapsed
/// clusters emit exactly the head; expanded clusters emit a row-major grid
/// of all members, horizontally centered under the ambition. `cluster_size`
/// is the full member count on every emitted node.
pub fn layout_cluster(
    cluster: &Cluster<'_>,
    ambition: &Placement,
    angle: f64,
    expanded: bool,
    cfg: &LayoutConfig,
) -> Vec<ProjectPlacement> {
    let size = cluster.projects.len();
    if size == 0 {
        return Vec::new();
    }
    let (base_x, base_y) = cluster_base(ambition, angle, cfg);

    if !expanded {
        let head = cluster.projects[0];
        return vec![ProjectPlacement {
            placement: Placement {
                id: head.id.clone(),
                x: base_x,
                y: base_y,
                radius: cfg.cluster_head_radius,
            },
            ambition_id: cluster.id.clone(),
            is_cluster_head: true,
            cluster_size: size,
        }];
    }

    let h_space = cfg.grid_h_spacing_factor * cfg.project_radius;
    let v_space = cfg.grid_v_spacing_factor * cfg.project_radius;
    let center_col = (cfg.grid_columns - 1) as f64 / 2.0;

    cluster
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let col = i % cfg.grid_columns;
            let row = i / cfg.grid_columns;
            ProjectPlacement {
                placement: Placement {
                    id: project.id.clone(),
                    x: base_x + (col as f64 - center_col) * h_space,
                    y: base_y + row as f64 * v_space,
                    radius: cfg.project_radius,
                },
                ambition_id: cluster.id.clone(),
                is_cluster_head: i == 0,
                cluster_size: size,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::model::ProjectNode;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(id: &str, deadline: Option<NaiveDate>, created: NaiveDate) -> ProjectNode {
        ProjectNode {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            deadline,
            created_at: created,
            status: None,
            ambition_id: Some("a".to_string()),
            ambition_name: None,
        }
    }

    fn cluster<'a>(projects: Vec<&'a ProjectNode>) -> Cluster<'a> {
        let mut projects = projects;
        projects.sort_by(|a, b| crate::graph::compare_projects(a, b));
        Cluster {
            id: "a".to_string(),
            name: "Alpha".to_string(),
            projects,
        }
    }

    fn north_ambition() -> (Placement, f64) {
        let placement = Placement {
            id: "a".to_string(),
            x: 500.0,
            y: 80.0,
            radius: LayoutConfig::default().ambition_radius,
        };
        (placement, (-90.0f64).to_radians())
    }

    #[test]
    fn test_empty_cluster_emits_nothing() {
        let cfg = LayoutConfig::default();
        let (ambition, angle) = north_ambition();
        let c = cluster(vec![]);
        assert!(layout_cluster(&c, &ambition, angle, false, &cfg).is_empty());
        assert!(layout_cluster(&c, &ambition, angle, true, &cfg).is_empty());
    }

    #[test]
    fn test_collapsed_emits_single_head() {
        let cfg = LayoutConfig::default();
        let (ambition, angle) = north_ambition();
        let p1 = project("p1", Some(date(2025, 1, 1)), date(2024, 1, 1));
        let p2 = project("p2", Some(date(2025, 6, 1)), date(2024, 1, 1));
        let c = cluster(vec![&p1, &p2]);

        let placed = layout_cluster(&c, &ambition, angle, false, &cfg);
        assert_eq!(placed.len(), 1);
        let head = &placed[0];
        // p2 has the later deadline, so it is the visible head.
        assert_eq!(head.placement.id, "p2");
        assert!(head.is_cluster_head);
        assert_eq!(head.cluster_size, 2);
        assert_eq!(head.placement.radius, cfg.cluster_head_radius);
        // North ambition: base point is straight up from the ambition.
        assert!((head.placement.x - ambition.x).abs() < 1e-9);
        let expected_y = ambition.y - (cfg.ambition_radius + cfg.cluster_radial_offset);
        assert!((head.placement.y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn test_expanded_grid_rows_and_columns() {
        let cfg = LayoutConfig::default();
        let (ambition, angle) = north_ambition();
        let projects: Vec<ProjectNode> = (0..4)
            .map(|i| project(&format!("p{i}"), Some(date(2025, 1, 1)), date(2024, 1, 1 + i)))
            .collect();
        let refs: Vec<&ProjectNode> = projects.iter().collect();
        let c = cluster(refs);

        let placed = layout_cluster(&c, &ambition, angle, true, &cfg);
        assert_eq!(placed.len(), 4);

        // Row-major: three in the first row, one in the second.
        let first_row_y = placed[0].placement.y;
        assert_eq!(placed[1].placement.y, first_row_y);
        assert_eq!(placed[2].placement.y, first_row_y);
        let v_space = cfg.grid_v_spacing_factor * cfg.project_radius;
        assert!((placed[3].placement.y - (first_row_y + v_space)).abs() < 1e-9);

        // Grid is centered: middle column sits on the ambition's x.
        assert!((placed[1].placement.x - ambition.x).abs() < 1e-9);
        let h_space = cfg.grid_h_spacing_factor * cfg.project_radius;
        assert!((placed[1].placement.x - placed[0].placement.x - h_space).abs() < 1e-9);

        // Only the first in sort order carries the head flag; all carry size.
        assert!(placed[0].is_cluster_head);
        assert!(placed.iter().skip(1).all(|p| !p.is_cluster_head));
        assert!(placed.iter().all(|p| p.cluster_size == 4));
        assert!(placed.iter().all(|p| p.placement.radius == cfg.project_radius));
    }

    #[test]
    fn test_collapsed_and_expanded_share_anchor() {
        let cfg = LayoutConfig::default();
        let (ambition, angle) = north_ambition();
        let p1 = project("p1", None, date(2024, 1, 1));
        let c = cluster(vec![&p1]);

        let collapsed = layout_cluster(&c, &ambition, angle, false, &cfg);
        let expanded = layout_cluster(&c, &ambition, angle, true, &cfg);
        // Both states hang off the same base point below the ambition.
        assert_eq!(collapsed[0].placement.y, expanded[0].placement.y);
        assert_eq!(collapsed[0].placement.radius, cfg.cluster_head_radius);
        assert_eq!(expanded[0].placement.radius, cfg.project_radius);
    }
}
