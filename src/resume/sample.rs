use super::records::{Certification, Education, Experience, ResumeData};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// Built-in dataset used when no `--resume` file is given.
pub fn sample_resume() -> ResumeData {
    ResumeData {
        name: "Adrian Peh".to_owned(),
        title: "Solutions Architect & Team Lead".to_owned(),
        summary: "Experienced in client-facing operations and automation solutions across \
                  multiple industries. Skilled in Business Process Digitalization, \
                  Optimization, and Automation, with hands-on expertise in RPA, Power \
                  Platform, and software development. Proven ability to select and lead \
                  cross-functional teams, design end-to-end solutions, and support \
                  technical execution while driving stakeholder success."
            .to_owned(),
        skills: strings(&[
            "Project Management",
            "Solution Architecture",
            "AI Automation",
            "Software Engineering",
            "Quality Assurance",
        ]),
        experiences: vec![
            Experience {
                company: "Avanade".to_owned(),
                role: "Solutions Architect & Team Lead".to_owned(),
                period: "May 2025 - Present".to_owned(),
                bullets: strings(&[
                    "Acted as a strategic partner to customers, from analyzing as-is business \
                     processes to conducting collaborative on-site UATs.",
                    "Selected and led cross-functional teams of up to 8 members.",
                    "Designed and conducted training for automation tools such as Power \
                     Automate and Copilot Studio.",
                    "Developed RPA workflows and Power Platform solutions across maritime, \
                     hospitality, and healthcare.",
                ]),
                skills: strings(&[
                    "Solution Architecture",
                    "AI Automation",
                    "Project Management",
                    "Power Platform",
                    "RPA",
                ]),
            },
            Experience {
                company: "Teeny Weeny Wizard".to_owned(),
                role: "Technical Project Manager".to_owned(),
                period: "January 2024 - May 2025".to_owned(),
                bullets: strings(&[
                    "Led cross-functional teams (8-10 members) to develop and deliver 2D and \
                     3D RPG games.",
                    "Featured at Singapore Comic Con 2025.",
                    "Contributed as a developer coding core features in C++/Python and \
                     ensuring quality through testing frameworks.",
                ]),
                skills: strings(&[
                    "Project Management",
                    "Software Engineering",
                    "Python",
                    "C++",
                    "Quality Assurance",
                ]),
            },
            Experience {
                company: "Sanmina".to_owned(),
                role: "Quality Assurance (QA) Engineer".to_owned(),
                period: "March 2019 - October 2020".to_owned(),
                bullets: strings(&[
                    "Automated QA processes, improving Turnaround Time (TAT) by 50%.",
                    "Designed and implemented process improvements aligned with Lean Six \
                     Sigma framework.",
                    "Managed the 360 degree Virtual Plant Tour project end-to-end using \
                     AutoCAD.",
                ]),
                skills: strings(&[
                    "Quality Assurance",
                    "Software Engineering",
                    "Solution Architecture",
                    "AutoCAD",
                ]),
            },
        ],
        certifications: vec![
            Certification {
                name: "Google Project Management Professional".to_owned(),
                issuer: "Google".to_owned(),
                skills: strings(&["Project Management"]),
            },
            Certification {
                name: "Six Sigma Yellow Belt".to_owned(),
                issuer: "IASSC".to_owned(),
                skills: strings(&["Quality Assurance", "Solution Architecture"]),
            },
            Certification {
                name: "Registered Scrum Basics".to_owned(),
                issuer: "Dr. Jeff Sutherland".to_owned(),
                skills: strings(&["Project Management"]),
            },
            Certification {
                name: "Configure Atlassian Tools (Jira/Confluence)".to_owned(),
                issuer: "Atlassian".to_owned(),
                skills: strings(&["Project Management", "Solution Architecture"]),
            },
            Certification {
                name: "Understanding Cisco Network Automation".to_owned(),
                issuer: "Cisco".to_owned(),
                skills: strings(&["AI Automation", "Software Engineering"]),
            },
        ],
        educations: vec![
            Education {
                degree: "Bachelor of Technology - Computer Science".to_owned(),
                school: "Singapore Institute of Technology".to_owned(),
                period: "2022 - 2026".to_owned(),
            },
            Education {
                degree: "Diploma in Electrical & Electronic Engineering (ICT)".to_owned(),
                school: "Singapore Polytechnic".to_owned(),
                period: "2017 - 2020".to_owned(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique_across_kinds() {
        let data = sample_resume();
        let mut ids = data.skills.clone();
        ids.extend(data.experiences.iter().map(|e| e.company.clone()));
        ids.extend(data.certifications.iter().map(|c| c.name.clone()));

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn sample_tracks_most_skill_tags() {
        let data = sample_resume();
        // Tags like "RPA" and "AutoCAD" are deliberately absent from the
        // skill list and must be reported, not repaired.
        let missing = data.untracked_skill_tags();
        assert!(missing.contains(&"RPA"));
        assert!(missing.contains(&"AutoCAD"));
        assert!(!missing.contains(&"Project Management"));
    }
}
