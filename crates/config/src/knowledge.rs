//! Curated knowledge tables
//!
//! Backing data for detailed topic answers: colleges by city, the
//! admission process, scholarship programs and application tips, and
//! career options with aptitude areas and planning steps. Shipped
//! defaults cover the Jammu & Kashmir region; deployments can override
//! any table from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// All knowledge tables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KnowledgeBase {
    /// College lists and the admission process
    #[serde(default)]
    pub colleges: CollegeKnowledge,

    /// Scholarship programs and application tips
    #[serde(default)]
    pub scholarships: ScholarshipKnowledge,

    /// Career options, aptitude areas, and planning steps
    #[serde(default)]
    pub careers: CareerKnowledge,
}

impl KnowledgeBase {
    /// Load knowledge tables from a YAML file. Tables absent from the
    /// file fall back to the shipped defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::FileNotFound(format!("{}: {}", path.as_ref().display(), e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// College lists and the admission process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeKnowledge {
    /// Top colleges in Jammu
    #[serde(default = "default_jammu_colleges")]
    pub jammu: Vec<String>,

    /// Top colleges in Srinagar
    #[serde(default = "default_srinagar_colleges")]
    pub srinagar: Vec<String>,

    /// General admission process, in order
    #[serde(default = "default_admission_steps")]
    pub admission_steps: Vec<String>,
}

/// Scholarship programs and application tips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarshipKnowledge {
    /// Government scholarship programs
    #[serde(default = "default_government_scholarships")]
    pub government: Vec<String>,

    /// Private scholarship programs
    #[serde(default = "default_private_scholarships")]
    pub private: Vec<String>,

    /// Application tips
    #[serde(default = "default_application_tips")]
    pub application_tips: Vec<String>,
}

/// Career options, aptitude areas, and planning steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerKnowledge {
    /// Popular career options for the region
    #[serde(default = "default_popular_careers")]
    pub popular_careers: Vec<String>,

    /// Aptitude areas assessed in counseling
    #[serde(default = "default_aptitude_areas")]
    pub aptitude_areas: Vec<String>,

    /// Career planning steps, in order
    #[serde(default = "default_planning_steps")]
    pub planning_steps: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_jammu_colleges() -> Vec<String> {
    strings(&[
        "University of Jammu - Offers various undergraduate and postgraduate programs",
        "Government Medical College Jammu - Premier medical institution",
        "Jammu College of Engineering and Technology - Engineering programs",
        "Jammu Institute of Management - Business and management courses",
    ])
}

fn default_srinagar_colleges() -> Vec<String> {
    strings(&[
        "University of Kashmir - Leading university with diverse programs",
        "Government Medical College Srinagar - Medical education hub",
        "National Institute of Technology Srinagar - Premier engineering institute",
        "Islamic University of Science and Technology - Technology and science programs",
    ])
}

fn default_admission_steps() -> Vec<String> {
    strings(&[
        "Check eligibility criteria for desired course",
        "Fill out application forms before deadline",
        "Submit required documents and certificates",
        "Appear for entrance exams if applicable",
        "Wait for merit list and counseling",
    ])
}

fn default_government_scholarships() -> Vec<String> {
    strings(&[
        "Post Matric Scholarship for J&K Students",
        "Merit Scholarship for Higher Education",
        "National Scholarship Portal schemes",
        "Chief Minister's Scholarship Program",
    ])
}

fn default_private_scholarships() -> Vec<String> {
    strings(&[
        "Corporate scholarships from major companies",
        "Foundation and NGO scholarships",
        "Merit-based institutional scholarships",
        "Need-based financial aid programs",
    ])
}

fn default_application_tips() -> Vec<String> {
    strings(&[
        "Keep all academic documents ready",
        "Apply before deadlines",
        "Write compelling personal statements",
        "Get recommendation letters from teachers",
    ])
}

fn default_popular_careers() -> Vec<String> {
    strings(&[
        "Engineering - Software, Civil, Mechanical, Electrical",
        "Medicine - MBBS, Dentistry, Pharmacy, Nursing",
        "Management - MBA, Business Administration",
        "Education - Teaching, Research, Administration",
        "Government Services - Civil Services, Banking, Defense",
    ])
}

fn default_aptitude_areas() -> Vec<String> {
    strings(&[
        "Logical Reasoning and Problem Solving",
        "Verbal and Communication Skills",
        "Mathematical and Analytical Ability",
        "Creative and Artistic Skills",
        "Leadership and Team Management",
    ])
}

fn default_planning_steps() -> Vec<String> {
    strings(&[
        "Self-assessment and interest identification",
        "Research career options and requirements",
        "Set educational and career goals",
        "Develop necessary skills and qualifications",
        "Create action plan with timelines",
    ])
}

impl Default for CollegeKnowledge {
    fn default() -> Self {
        Self {
            jammu: default_jammu_colleges(),
            srinagar: default_srinagar_colleges(),
            admission_steps: default_admission_steps(),
        }
    }
}

impl Default for ScholarshipKnowledge {
    fn default() -> Self {
        Self {
            government: default_government_scholarships(),
            private: default_private_scholarships(),
            application_tips: default_application_tips(),
        }
    }
}

impl Default for CareerKnowledge {
    fn default() -> Self {
        Self {
            popular_careers: default_popular_careers(),
            aptitude_areas: default_aptitude_areas(),
            planning_steps: default_planning_steps(),
        }
    }
}
