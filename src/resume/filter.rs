use super::records::{Certification, Experience, ResumeData};

/// Filters the experience list against the active node id.
///
/// `None` keeps the full list. A skill id keeps only experiences tagged
/// with that skill (possibly none). A company id keeps that single
/// experience. Any other id falls back to the full list.
pub fn filter_experiences<'a>(
    active: Option<&str>,
    data: &'a ResumeData,
) -> Vec<&'a Experience> {
    let everything = || data.experiences.iter().collect::<Vec<_>>();

    let Some(active) = active else {
        return everything();
    };

    if data.is_skill(active) {
        return data
            .experiences
            .iter()
            .filter(|experience| experience.skills.iter().any(|tag| tag == active))
            .collect();
    }

    match data
        .experiences
        .iter()
        .find(|experience| experience.company == active)
    {
        Some(experience) => vec![experience],
        None => everything(),
    }
}

/// Same shape as [`filter_experiences`], keyed on certification names.
pub fn filter_certifications<'a>(
    active: Option<&str>,
    data: &'a ResumeData,
) -> Vec<&'a Certification> {
    let everything = || data.certifications.iter().collect::<Vec<_>>();

    let Some(active) = active else {
        return everything();
    };

    if data.is_skill(active) {
        return data
            .certifications
            .iter()
            .filter(|certification| certification.skills.iter().any(|tag| tag == active))
            .collect();
    }

    match data
        .certifications
        .iter()
        .find(|certification| certification.name == active)
    {
        Some(certification) => vec![certification],
        None => everything(),
    }
}
