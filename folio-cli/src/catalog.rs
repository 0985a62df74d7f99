//! Text and JSON listings for the static portfolio content.

use std::io::Write;

use anyhow::bail;
use folio_model::{
    Project, SkillCategory, all_projects, featured_projects, project_by_id,
    skills_by_category,
};

/// Badges shown on a project card before collapsing into "+N more".
const CARD_BADGES: usize = 3;

pub fn list_projects(
    out: &mut impl Write,
    featured_only: bool,
    json: bool,
) -> anyhow::Result<()> {
    let projects: Vec<&Project> = if featured_only {
        featured_projects().collect()
    } else {
        all_projects().iter().collect()
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &projects)?;
        writeln!(out)?;
        return Ok(());
    }

    for project in projects {
        let (badges, hidden) = project.technology_badges(CARD_BADGES);
        let mut line = format!(
            "{:<24} {:<10} {}",
            project.id,
            project.category.to_string(),
            project.short_description
        );
        if !badges.is_empty() {
            line.push_str(&format!("  [{}", badges.join(", ")));
            if hidden > 0 {
                line.push_str(&format!(", +{hidden} more"));
            }
            line.push(']');
        }
        if project.featured {
            line.push_str("  *");
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn show_project(
    out: &mut impl Write,
    id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let Some(project) = project_by_id(id) else {
        bail!("project '{id}' not found");
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, project)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", project.page_title())?;
    writeln!(out)?;
    writeln!(out, "{}", project.description)?;
    writeln!(out)?;
    writeln!(out, "Category:     {}", project.category)?;
    for (label, value) in [
        ("Year", project.year),
        ("Client", project.client),
        ("Role", project.role),
    ] {
        if let Some(value) = value {
            writeln!(out, "{:<13} {value}", format!("{label}:"))?;
        }
    }
    writeln!(out, "Website:      {}", project.website)?;
    writeln!(out, "Technologies: {}", project.technologies.join(", "))?;
    Ok(())
}

pub fn list_skills(
    out: &mut impl Write,
    category: Option<SkillCategory>,
) -> anyhow::Result<()> {
    let categories = match category {
        Some(category) => vec![category],
        None => SkillCategory::in_use(),
    };
    for category in categories {
        let names: Vec<&str> = skills_by_category(Some(category))
            .map(|skill| skill.name)
            .collect();
        writeln!(out, "{}: {}", category.label(), names.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn unknown_project_is_an_error() {
        let mut buf = Vec::new();
        let err = show_project(&mut buf, "does-not-exist", false).unwrap_err();
        assert_eq!(err.to_string(), "project 'does-not-exist' not found");
    }

    #[test]
    fn project_detail_leads_with_page_title() {
        let first = &all_projects()[0];
        let text = render(|out| show_project(out, first.id, false));
        assert!(text.starts_with(&first.page_title()));
    }

    #[test]
    fn project_json_is_an_array() {
        let text = render(|out| list_projects(out, false, true));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value.as_array().map(Vec::len),
            Some(all_projects().len())
        );
    }

    #[test]
    fn skills_group_by_category() {
        let text = render(|out| list_skills(out, None));
        assert_eq!(text.lines().count(), SkillCategory::in_use().len());
        let frontend = render(|out| {
            list_skills(out, Some(SkillCategory::Frontend))
        });
        assert!(frontend.starts_with("Frontend: "));
    }
}
