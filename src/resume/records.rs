use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
}

/// The full resume dataset supplied by the data feed. `skills` is the
/// derived skill-id list; a skill tag that never appears in it will not
/// materialize as a graph node.
#[derive(Clone, Debug, Deserialize)]
pub struct ResumeData {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub educations: Vec<Education>,
}

impl ResumeData {
    pub fn is_skill(&self, id: &str) -> bool {
        self.skills.iter().any(|skill| skill == id)
    }

    /// Skill tags referenced by experiences or certifications that are
    /// missing from the skill list. These never become nodes, so the
    /// related links are silently absent from the diagram.
    pub fn untracked_skill_tags(&self) -> Vec<&str> {
        let mut missing = Vec::new();

        let tags = self
            .experiences
            .iter()
            .flat_map(|experience| experience.skills.iter())
            .chain(
                self.certifications
                    .iter()
                    .flat_map(|certification| certification.skills.iter()),
            );

        for tag in tags {
            if !self.is_skill(tag) && !missing.contains(&tag.as_str()) {
                missing.push(tag.as_str());
            }
        }

        missing
    }
}
