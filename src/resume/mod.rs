mod filter;
mod graph;
mod load;
mod records;
mod sample;

pub use filter::{filter_certifications, filter_experiences};
pub use graph::{NodeKind, ResumeGraph, ResumeLink, ResumeNode};
pub use load::load_resume;
pub use records::{Certification, Education, Experience, ResumeData};

#[cfg(test)]
pub(crate) use sample::sample_resume;
