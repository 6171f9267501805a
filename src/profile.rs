// src/profile.rs

use crate::errors::FolioResult;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// A single role in the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// The biographical record behind the whole page. Built once at startup and
/// shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub current_company: String,
    pub summary: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    #[serde(default)]
    pub contact: Contact,
}

impl Profile {
    /// Loads a profile from a JSON file using the same camelCase shape that
    /// `to_context_json` produces.
    pub fn from_file(path: &Path) -> FolioResult<Self> {
        let raw = fs::read_to_string(path)?;
        let profile = serde_json::from_str(&raw)?;
        Ok(profile)
    }

    pub fn to_context_json(&self) -> FolioResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// "Harmish Bhavsar" -> "HB."
    pub fn initials(&self) -> String {
        let mut initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        initials.push('.');
        initials
    }

    pub fn builtin() -> Self {
        Profile {
            name: "Harmish Bhavsar".to_string(),
            role: "System Engineer & Frontend Developer".to_string(),
            current_company: "Tata Consultancy Services (Contracted to Pfizer)".to_string(),
            summary: "Excelling in Frontend Development and Java programming. Specialized in creating intuitive user interfaces, wireframing in Figma, and delivering robust system solutions.".to_string(),
            tagline: "I craft responsive, high-performance digital experiences. Currently building robust systems at Tata Consultancy Services. Specialized in Frontend Engineering, Java, and UI Design.".to_string(),
            about: vec![
                "My journey started with electronics, tinkering with Arduino boards and oscilloscopes. This hardware foundation gave me a unique perspective on how software interacts with the physical world.".to_string(),
                "Today, I leverage that analytical mindset in Frontend Development. Whether it's debating complex topics or architecting scalable Java applications, I bring passion and precision to every project.".to_string(),
            ],
            experiences: vec![
                Experience {
                    company: "Tata Consultancy Services".to_string(),
                    role: "System Engineer".to_string(),
                    period: "Oct 2023 - Present".to_string(),
                    location: "Mumbai, Maharashtra".to_string(),
                    description: "Contracted to Pfizer. Excelling in Frontend Development and Java programming. Specializing in creating intuitive user interfaces, wireframing in Figma, and delivering robust system solutions.".to_string(),
                    skills: strings(&["React", "Java", "Figma", "System Design"]),
                },
                Experience {
                    company: "Brainheaters".to_string(),
                    role: "Content Writer".to_string(),
                    period: "Dec 2021 - Dec 2023".to_string(),
                    location: "Mumbai, Maharashtra".to_string(),
                    description: "Worked as a content developer intern, creating engaging technical content and documentation.".to_string(),
                    skills: strings(&["Content Strategy", "Technical Writing"]),
                },
                Experience {
                    company: "FlyHawk RoboSpace".to_string(),
                    role: "Sales Manager Intern".to_string(),
                    period: "Sep 2021 - Feb 2022".to_string(),
                    location: "Delhi (Remote)".to_string(),
                    description: "Managed sales and marketing with CEO Anmol Gulati. Pitched Arduino and robotic projects to customers and collaborated with schools across cities.".to_string(),
                    skills: strings(&["Sales", "Communication", "Robotics"]),
                },
                Experience {
                    company: "Siemens".to_string(),
                    role: "Student Internship".to_string(),
                    period: "Dec 2021 (1 Month)".to_string(),
                    location: "Mumbai, Maharashtra".to_string(),
                    description: "Industrial automation software training using S7 1200 PLC at Siemens Centre of Excellence.".to_string(),
                    skills: strings(&["PLC", "Automation", "S7 1200"]),
                },
            ],
            education: vec![
                Education {
                    school: "Vidyavardhini's College of Eng. & Tech".to_string(),
                    degree: "B.E. in Electronics & Telecommunication".to_string(),
                    period: "2019 - 2022".to_string(),
                    grade: None,
                    details: "Graduated with comprehensive knowledge in EXTC.".to_string(),
                },
                Education {
                    school: "Shri TP Bhatia College of Science".to_string(),
                    degree: "HSC (Science & Electronics)".to_string(),
                    period: "2017 - 2019".to_string(),
                    grade: Some("69.54%".to_string()),
                    details: "Active in electronics projects (Arduino, LED control sequences). Won certificates in elocution and debate.".to_string(),
                },
                Education {
                    school: "St. Xavier's High School".to_string(),
                    degree: "Secondary School".to_string(),
                    period: "2016 - 2017".to_string(),
                    grade: Some("87.40%".to_string()),
                    details: "1st Prize in Interschool Professional Debate Competition. Excelled in Grammar and Content Writing.".to_string(),
                },
            ],
            skills: strings(&[
                "React.js",
                "JavaScript (ES6+)",
                "HTML5/CSS3",
                "Java",
                "Tailwind CSS",
                "Figma",
                "Wireframing",
                "Git/GitHub",
                "Arduino",
                "Technical Writing",
                "Public Speaking",
                "Sales",
            ]),
            contact: Contact {
                linkedin: Some("https://www.linkedin.com/in/harmish-bhavsar-822968214".to_string()),
                email: Some("contact@example.com".to_string()),
                github: None,
            },
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_context_json_uses_camel_case_and_skips_missing_grade() {
        let profile = Profile::builtin();
        let json = profile.to_context_json().unwrap();
        assert!(json.contains("\"currentCompany\""));
        assert!(!json.contains("current_company"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["education"][0].get("grade").is_none());
        assert_eq!(value["education"][1]["grade"], "69.54%");
    }

    #[test]
    fn test_initials_and_first_name() {
        let profile = Profile::builtin();
        assert_eq!(profile.initials(), "HB.");
        assert_eq!(profile.first_name(), "Harmish");
    }

    #[test]
    fn test_from_file_round_trips_builtin() {
        let profile = Profile::builtin();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(profile.to_context_json().unwrap().as_bytes())
            .unwrap();

        let loaded = Profile::from_file(file.path()).unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_from_file_accepts_minimal_profile() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Ada Lovelace",
                "role": "Analyst",
                "currentCompany": "Analytical Engines",
                "summary": "Notes on the engine.",
                "experiences": [],
                "education": [],
                "skills": ["Mathematics"]
            }}"#
        )
        .unwrap();

        let loaded = Profile::from_file(file.path()).unwrap();
        assert_eq!(loaded.name, "Ada Lovelace");
        assert!(loaded.about.is_empty());
        assert_eq!(loaded.contact, Contact::default());
    }

    #[test]
    fn test_from_file_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            Profile::from_file(file.path()),
            Err(crate::errors::FolioError::Profile(_))
        ));
    }
}
