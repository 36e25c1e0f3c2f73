use std::collections::HashSet;

use super::records::ResumeData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Skill,
    Experience,
    Certification,
}

impl NodeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Skill => "Core Skill",
            Self::Experience => "Experience",
            Self::Certification => "Certification",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResumeNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub size: f32,
}

/// Stored with a source/target orientation but treated as undirected for
/// layout and highlighting. Duplicate pairs are permitted.
#[derive(Clone, Debug)]
pub struct ResumeLink {
    pub source: String,
    pub target: String,
    pub weight: f32,
}

/// Immutable node-link model derived once per dataset. Simulation state
/// lives elsewhere; nothing here changes after `build`.
#[derive(Clone, Debug, Default)]
pub struct ResumeGraph {
    pub nodes: Vec<ResumeNode>,
    pub links: Vec<ResumeLink>,
}

const SKILL_NODE_SIZE: f32 = 30.0;
const EXPERIENCE_NODE_SIZE: f32 = 20.0;
const CERTIFICATION_NODE_SIZE: f32 = 15.0;

impl ResumeGraph {
    /// Builds the graph by joining on skill-tag membership: one node per
    /// skill, experience company, and certification name; one link per
    /// tag match. Links whose endpoints do not both resolve to a node are
    /// dropped here rather than surfaced as an error.
    pub fn build(data: &ResumeData) -> Self {
        let mut nodes = Vec::new();

        for skill in &data.skills {
            nodes.push(ResumeNode {
                id: skill.clone(),
                label: skill.clone(),
                kind: NodeKind::Skill,
                size: SKILL_NODE_SIZE,
            });
        }
        for experience in &data.experiences {
            nodes.push(ResumeNode {
                id: experience.company.clone(),
                label: experience.company.clone(),
                kind: NodeKind::Experience,
                size: EXPERIENCE_NODE_SIZE,
            });
        }
        for certification in &data.certifications {
            nodes.push(ResumeNode {
                id: certification.name.clone(),
                label: certification.name.clone(),
                kind: NodeKind::Certification,
                size: CERTIFICATION_NODE_SIZE,
            });
        }

        let mut links = Vec::new();
        for skill in &data.skills {
            for experience in &data.experiences {
                if experience.skills.iter().any(|tag| tag == skill) {
                    links.push(ResumeLink {
                        source: skill.clone(),
                        target: experience.company.clone(),
                        weight: 2.0,
                    });
                }
            }
            for certification in &data.certifications {
                if certification.skills.iter().any(|tag| tag == skill) {
                    links.push(ResumeLink {
                        source: skill.clone(),
                        target: certification.name.clone(),
                        weight: 1.0,
                    });
                }
            }
        }

        Self { nodes, links }.retain_resolved_links()
    }

    fn retain_resolved_links(mut self) -> Self {
        let known_ids = self
            .nodes
            .iter()
            .map(|node| node.id.as_str())
            .collect::<HashSet<_>>();

        self.links.retain(|link| {
            let resolved =
                known_ids.contains(link.source.as_str()) && known_ids.contains(link.target.as_str());
            if !resolved {
                log::warn!(
                    "dropping link {} -> {}: endpoint is not a known node",
                    link.source,
                    link.target
                );
            }
            resolved
        });

        self
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::sample::sample_resume;

    #[test]
    fn build_joins_on_skill_tags() {
        let graph = ResumeGraph::build(&sample_resume());

        // 5 skills + 3 experiences + 5 certifications.
        assert_eq!(graph.node_count(), 13);
        assert!(
            graph
                .links
                .iter()
                .any(|link| link.source == "Project Management" && link.target == "Avanade")
        );
        assert!(
            graph
                .links
                .iter()
                .all(|link| { link.weight == 1.0 || link.weight == 2.0 })
        );
    }

    #[test]
    fn dangling_links_are_dropped() {
        let graph = ResumeGraph {
            nodes: vec![ResumeNode {
                id: "PM".to_owned(),
                label: "PM".to_owned(),
                kind: NodeKind::Skill,
                size: 30.0,
            }],
            links: vec![
                ResumeLink {
                    source: "PM".to_owned(),
                    target: "PM".to_owned(),
                    weight: 1.0,
                },
                ResumeLink {
                    source: "PM".to_owned(),
                    target: "Ghost Corp".to_owned(),
                    weight: 1.0,
                },
            ],
        }
        .retain_resolved_links();

        assert_eq!(graph.link_count(), 1);
        assert_eq!(graph.links[0].target, "PM");
    }

    #[test]
    fn empty_data_builds_an_empty_graph() {
        let graph = ResumeGraph::build(&ResumeData {
            name: String::new(),
            title: String::new(),
            summary: String::new(),
            skills: Vec::new(),
            experiences: Vec::new(),
            certifications: Vec::new(),
            educations: Vec::new(),
        });

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.link_count(), 0);
    }
}
