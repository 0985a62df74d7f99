use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Other,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools",
            SkillCategory::Other => "Other",
        }
    }

    /// Categories that have at least one skill, in first-seen order.
    pub fn in_use() -> Vec<SkillCategory> {
        let mut seen = Vec::new();
        for skill in SKILLS {
            if !seen.contains(&skill.category) {
                seen.push(skill.category);
            }
        }
        seen
    }
}

impl Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "tools" => Ok(SkillCategory::Tools),
            "other" => Ok(SkillCategory::Other),
            other => Err(ModelError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Skill {
    pub id: u32,
    pub name: &'static str,
    pub category: SkillCategory,
    /// Logo asset path.
    pub image: &'static str,
}

const fn skill(
    id: u32,
    name: &'static str,
    category: SkillCategory,
    image: &'static str,
) -> Skill {
    Skill {
        id,
        name,
        category,
        image,
    }
}

pub static SKILLS: &[Skill] = &[
    skill(1, "React", SkillCategory::Frontend, "/images/skills/react.svg"),
    skill(2, "Next.js", SkillCategory::Frontend, "/images/skills/nextjs.svg"),
    skill(
        3,
        "TypeScript",
        SkillCategory::Frontend,
        "/images/skills/typescript.svg",
    ),
    skill(
        4,
        "JavaScript",
        SkillCategory::Frontend,
        "/images/skills/javascript.svg",
    ),
    skill(
        5,
        "Tailwind CSS",
        SkillCategory::Frontend,
        "/images/skills/tailwind.svg",
    ),
    skill(6, "Node.js", SkillCategory::Backend, "/images/skills/nodejs.svg"),
    skill(7, "MongoDB", SkillCategory::Backend, "/images/skills/mongodb.svg"),
    skill(8, "Git", SkillCategory::Tools, "/images/skills/git.svg"),
    skill(9, "Figma", SkillCategory::Tools, "/images/skills/figma.svg"),
    skill(10, "Python", SkillCategory::Backend, "/images/skills/python.svg"),
    skill(11, "HTML5", SkillCategory::Frontend, "/images/skills/html5.svg"),
    skill(12, "CSS3", SkillCategory::Frontend, "/images/skills/css3.svg"),
];

/// Skills filtered by category; `None` keeps the full grid.
pub fn skills_by_category(
    category: Option<SkillCategory>,
) -> impl Iterator<Item = &'static Skill> {
    SKILLS
        .iter()
        .filter(move |skill| category.is_none_or(|c| skill.category == c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_by_category() {
        let tools: Vec<&str> = skills_by_category(Some(SkillCategory::Tools))
            .map(|s| s.name)
            .collect();
        assert_eq!(tools, vec!["Git", "Figma"]);
        assert_eq!(skills_by_category(None).count(), SKILLS.len());
    }

    #[test]
    fn categories_in_use_follow_first_appearance() {
        assert_eq!(
            SkillCategory::in_use(),
            vec![
                SkillCategory::Frontend,
                SkillCategory::Backend,
                SkillCategory::Tools
            ]
        );
    }
}
