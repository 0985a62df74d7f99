use std::fmt::{self, Display};
use std::str::FromStr;

use crate::card::CardLike;
use crate::error::ModelError;

/// Whether a timeline entry is schooling or employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExperienceKind {
    Education,
    Work,
}

impl ExperienceKind {
    /// Badge text shown on the card.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceKind::Education => "Education",
            ExperienceKind::Work => "Work",
        }
    }
}

impl Display for ExperienceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExperienceKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "education" => Ok(ExperienceKind::Education),
            "work" => Ok(ExperienceKind::Work),
            other => Err(ModelError::UnknownExperienceKind(other.to_string())),
        }
    }
}

/// One stop on the "My Journey" timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WorkExperience {
    pub id: u32,
    pub kind: ExperienceKind,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    /// External site for the organisation; `None` renders a plain card
    /// with no outbound link.
    pub website: Option<&'static str>,
}

impl CardLike for WorkExperience {
    fn title(&self) -> &str {
        self.title
    }

    fn subtitle(&self) -> &str {
        self.company
    }
}

pub static WORK_EXPERIENCE: &[WorkExperience] = &[
    WorkExperience {
        id: 1,
        kind: ExperienceKind::Education,
        title: "BSc Mathematics",
        company: "University",
        location: "India",
        period: "2019 - 2022",
        description: "Completed Bachelor of Science in Mathematics, building strong analytical and problem-solving skills.",
        website: None,
    },
    WorkExperience {
        id: 2,
        kind: ExperienceKind::Education,
        title: "Full Stack Web Development",
        company: "Masai School",
        location: "Bengaluru, India",
        period: "2022 - 2023",
        description: "Completed intensive full-stack web development program with focus on modern technologies and best practices.",
        website: Some("https://www.masaischool.com"),
    },
    WorkExperience {
        id: 3,
        kind: ExperienceKind::Work,
        title: "Web Developer",
        company: "Webcastle Media",
        location: "Cochin, India",
        period: "2023 - Present",
        description: "Currently working as a web developer, building modern web applications and digital solutions for clients.",
        website: Some("https://www.webcastlemedia.com"),
    },
    WorkExperience {
        id: 4,
        kind: ExperienceKind::Education,
        title: "Advanced JavaScript & React",
        company: "Online Certification",
        location: "Remote",
        period: "2023",
        description: "Completed advanced courses in JavaScript, React, and modern frontend development frameworks.",
        website: None,
    },
    WorkExperience {
        id: 5,
        kind: ExperienceKind::Work,
        title: "Freelance Developer",
        company: "Independent Projects",
        location: "Remote",
        period: "2022 - Present",
        description: "Working on various freelance projects, delivering custom web solutions and applications for diverse clients.",
        website: None,
    },
];
