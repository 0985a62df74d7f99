use std::fmt::{self, Display};
use std::str::FromStr;

use crate::card::CardLike;
use crate::error::ModelError;

/// Showcase grouping for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProjectCategory {
    Ecommerce,
    Web,
    Mobile,
    Other,
}

impl Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectCategory::Ecommerce => write!(f, "ecommerce"),
            ProjectCategory::Web => write!(f, "web"),
            ProjectCategory::Mobile => write!(f, "mobile"),
            ProjectCategory::Other => write!(f, "other"),
        }
    }
}

impl FromStr for ProjectCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ecommerce" | "e-commerce" => Ok(ProjectCategory::Ecommerce),
            "web" => Ok(ProjectCategory::Web),
            "mobile" => Ok(ProjectCategory::Mobile),
            "other" => Ok(ProjectCategory::Other),
            other => Err(ModelError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Project {
    /// URL slug, unique across the showcase.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub short_description: &'static str,
    pub image: &'static str,
    pub website: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub featured: bool,
    pub year: Option<&'static str>,
    pub client: Option<&'static str>,
    pub role: Option<&'static str>,
}

impl Project {
    /// Split the technology list for badge rendering: the first `limit`
    /// names and how many were left out ("+N more").
    pub fn technology_badges(
        &self,
        limit: usize,
    ) -> (&'static [&'static str], usize) {
        let shown = limit.min(self.technologies.len());
        (
            &self.technologies[..shown],
            self.technologies.len() - shown,
        )
    }

    /// Page title used for the project detail route.
    pub fn page_title(&self) -> String {
        format!("{} | Portfolio", self.title)
    }
}

impl CardLike for Project {
    fn title(&self) -> &str {
        self.title
    }

    fn subtitle(&self) -> &str {
        self.short_description
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "v-perfumes",
        title: "V Perfumes",
        description: "A comprehensive e-commerce platform for perfumes and fragrances, featuring a modern shopping experience with advanced filtering, wishlist, and seamless checkout. Built with Next.js and optimized for performance. The platform serves customers across UAE, KSA, Oman, and Qatar with over 50 physical outlets. Features include click and collect, buy now pay later options, and a seamless mobile experience.",
        short_description: "Leading perfume e-commerce platform with advanced shopping features",
        image: "/images/projects/v-perfumes.jpg",
        website: "https://vperfumes.com",
        technologies: &[
            "Next.js",
            "React",
            "TypeScript",
            "Tailwind CSS",
            "E-commerce",
            "Payment Gateway",
            "Multi-currency",
        ],
        category: ProjectCategory::Ecommerce,
        featured: true,
        year: Some("2024"),
        client: Some("V Perfumes"),
        role: Some("Full Stack Developer"),
    },
    Project {
        id: "storedada",
        title: "StoreDada",
        description: "An all-in-one e-commerce platform solution that helps businesses grow faster with rapid deployment, advanced customization, and powerful integrations. Features include PWA support, multi-vendor marketplace, comprehensive analytics, ERP integration, and social media marketing tools. The platform enables businesses to scale efficiently with features like multi-currency support, multi-lingual functionality, and advanced SEO optimization.",
        short_description: "Enterprise e-commerce platform with advanced features and integrations",
        image: "/images/projects/storedada.jpg",
        website: "https://storedada.com",
        technologies: &[
            "Next.js",
            "React",
            "TypeScript",
            "PWA",
            "E-commerce Platform",
            "Multi-vendor",
            "ERP Integration",
        ],
        category: ProjectCategory::Ecommerce,
        featured: true,
        year: Some("2024"),
        client: Some("Webcastle Media"),
        role: Some("Full Stack Developer"),
    },
];

pub fn all_projects() -> &'static [Project] {
    PROJECTS
}

pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|project| project.featured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_projects_by_slug() {
        let project = project_by_id("storedada").expect("known slug");
        assert_eq!(project.title, "StoreDada");
        assert!(project_by_id("missing").is_none());
    }

    #[test]
    fn badges_report_hidden_technologies() {
        let project = project_by_id("v-perfumes").expect("known slug");
        let (shown, more) = project.technology_badges(4);
        assert_eq!(shown, &["Next.js", "React", "TypeScript", "Tailwind CSS"]);
        assert_eq!(more, 3);

        let (shown, more) = project.technology_badges(50);
        assert_eq!(shown.len(), project.technologies.len());
        assert_eq!(more, 0);
    }

    #[test]
    fn featured_filter_keeps_flagged_projects() {
        assert_eq!(featured_projects().count(), 2);
        assert_eq!(
            project_by_id("v-perfumes").map(Project::page_title),
            Some("V Perfumes | Portfolio".to_string())
        );
    }

    #[test]
    fn category_parsing_accepts_hyphenated_ecommerce() {
        assert_eq!(
            "E-Commerce".parse::<ProjectCategory>(),
            Ok(ProjectCategory::Ecommerce)
        );
        assert_eq!(
            "games".parse::<ProjectCategory>(),
            Err(ModelError::UnknownCategory("games".into()))
        );
    }
}
