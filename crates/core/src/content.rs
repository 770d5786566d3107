//! Structured sections of the About page and the default content used when
//! the singleton About and Contact documents are first created or reset.

use serde::{Deserialize, Serialize};

/// A titled group of skill bullet points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
}

/// Contact block embedded in the About document. Every entry is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// About defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_ABOUT_TITLE: &str = "About Me";

pub const DEFAULT_ABOUT_SUBTITLE: &str =
    "Developer building fast, reliable and well-crafted software for the web.";

pub const DEFAULT_PROFILE_IMAGE: &str =
    "https://images.unsplash.com/photo-1549692520-acc6669e2f0c?auto=format&fit=crop&w=800&q=60";

pub fn default_bio() -> Vec<String> {
    vec![
        "I design and build web applications end to end, from the data model to the last pixel."
            .to_string(),
        "Most of my work sits where product thinking meets engineering: small teams, short feedback loops and software that stays maintainable."
            .to_string(),
        "Outside of client work I contribute to open source and write about the tools I use."
            .to_string(),
    ]
}

fn group(title: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        title: title.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn default_skill_groups() -> Vec<SkillGroup> {
    vec![
        group(
            "Frontend Development",
            &["React, Next.js", "TypeScript", "HTML, CSS, Tailwind", "Accessibility"],
        ),
        group(
            "Backend Development",
            &["Rust, Node.js", "PostgreSQL, MongoDB", "REST APIs", "Authentication"],
        ),
        group(
            "Tools & Others",
            &["Git, CI/CD", "Docker", "Testing", "Cloud object storage"],
        ),
    ]
}

pub fn default_experiences() -> Vec<Experience> {
    vec![
        Experience {
            title: "Senior Developer".to_string(),
            company: "Example Studio".to_string(),
            period: "2021 - Present".to_string(),
            description: "Lead development of client web applications and internal tooling."
                .to_string(),
        },
        Experience {
            title: "Full Stack Developer".to_string(),
            company: "Example Agency".to_string(),
            period: "2018 - 2021".to_string(),
            description: "Built and maintained websites, APIs and content back offices."
                .to_string(),
        },
    ]
}

pub fn default_education() -> Vec<Education> {
    vec![Education {
        degree: "Bachelor of Science in Computer Science".to_string(),
        institution: "Example University".to_string(),
        period: "2014 - 2018".to_string(),
        description: "Software engineering, algorithms and distributed systems.".to_string(),
    }]
}

pub fn default_contact_info() -> ContactInfo {
    ContactInfo {
        location: Some(DEFAULT_CONTACT_LOCATION.to_string()),
        phone: Some(DEFAULT_CONTACT_PHONE.to_string()),
        email: Some(DEFAULT_CONTACT_EMAIL.to_string()),
        linkedin: Some(DEFAULT_CONTACT_LINKEDIN.to_string()),
        github: Some(DEFAULT_CONTACT_GITHUB.to_string()),
    }
}

pub fn default_certifications() -> Vec<Certification> {
    vec![Certification {
        title: "Web Development Certification".to_string(),
        issuer: "Coursera".to_string(),
        year: "2022".to_string(),
        credential: None,
        url: None,
    }]
}

// ---------------------------------------------------------------------------
// Contact defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_CONTACT_EMAIL: &str = "contact@example.com";
pub const DEFAULT_CONTACT_PHONE: &str = "+1 555 0100";
pub const DEFAULT_CONTACT_LOCATION: &str = "Remote";
pub const DEFAULT_CONTACT_LINKEDIN: &str = "https://linkedin.com/in/example";
pub const DEFAULT_CONTACT_GITHUB: &str = "https://github.com/example";

/// Category assigned to skills created without one.
pub const DEFAULT_SKILL_CATEGORY: &str = "Uncategorized";
