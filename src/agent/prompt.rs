use crate::batch::item::WorkItem;

/// Render the CI/CD analysis instructions for one repository.
///
/// The repository name and branch are inserted as plain text; nothing in them
/// is interpreted as template syntax.
pub fn render_prompt(item: &WorkItem, branch: &str) -> String {
    let repo_name = item.name.as_str();
    let branch_name = branch;

    format!(
        r#"Analyze the repository '{repo_name}' for enterprise CI/CD compatibility.

**Task:**
1. Set active codebase to {repo_name}
2. Run repomix to generate full analysis
3. Read repomix output
4. Rate the repository (0-10) based on these criteria:
   - Build System (0-2): Modern tools, reproducible builds, dependency mgmt
   - Testing (0-2): Unit tests, test framework, CI automation ready  
   - CI/CD Config (0-2): GH Actions/GitLab CI present, workflows, pipelines
   - Documentation (0-1): README, API docs, architecture
   - Code Quality (0-1): Linting, formatting, static analysis
   - Containerization (0-1): Dockerfile, Docker Compose, K8s
   - Security (0-1): Dependency scanning, secrets mgmt, best practices

5. Create rating JSON in this exact format:
```json
{{
  "repo": "{repo_name}",
  "overall_rating": X.X,
  "build_system": X,
  "testing": X,
  "cicd_config": X,
  "documentation": X,
  "code_quality": X,
  "containerization": X,
  "security": X,
  "notes": "Brief analysis",
  "recommendation": "production-ready|needs-work|prototype"
}}
```

6. Append this rating to 'cicd_ratings.json' file (create if doesn't exist)
7. Commit to branch '{branch_name}' with message "Add CI/CD rating for {repo_name}"
8. Push changes

**Important:** 
- Be concise but thorough
- Focus on facts from repomix analysis
- Provide actionable recommendations
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> WorkItem {
        WorkItem {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_prompt(&item("my-repo"), "cicd-ratings");
        let b = render_prompt(&item("my-repo"), "cicd-ratings");
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_substitutes_name_and_branch() {
        let prompt = render_prompt(&item("my-repo"), "cicd-ratings");
        assert!(prompt.starts_with("Analyze the repository 'my-repo' for enterprise"));
        assert!(prompt.contains("1. Set active codebase to my-repo\n"));
        assert!(prompt.contains(r#""repo": "my-repo","#));
        assert!(prompt.contains(
            "Commit to branch 'cicd-ratings' with message \"Add CI/CD rating for my-repo\""
        ));
        assert!(!prompt.contains("{repo_name}"));
        assert!(!prompt.contains("{branch_name}"));
    }

    #[test]
    fn test_render_keeps_json_braces_single() {
        let prompt = render_prompt(&item("x"), "b");
        assert!(prompt.contains("```json\n{\n  \"repo\": \"x\","));
        assert!(prompt.contains("\n}\n```"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_render_keeps_trailing_spaces() {
        let prompt = render_prompt(&item("x"), "b");
        assert!(prompt.contains("test framework, CI automation ready  \n"));
        assert!(prompt.contains("\n**Important:** \n- Be concise"));
        assert!(prompt.ends_with("- Provide actionable recommendations\n"));
    }

    #[test]
    fn test_render_treats_template_syntax_in_name_literally() {
        let name = "{branch_name}-{0}-{{x}}";
        let prompt = render_prompt(&item(name), "main");
        assert!(prompt.contains("Analyze the repository '{branch_name}-{0}-{{x}}' for"));
        assert!(prompt.contains("Set active codebase to {branch_name}-{0}-{{x}}\n"));
    }

    #[test]
    fn test_render_empty_and_unicode_names() {
        let empty = render_prompt(&item(""), "main");
        assert!(empty.starts_with("Analyze the repository '' for"));

        let unicode = render_prompt(&item("répo-日本"), "ブランチ");
        assert!(unicode.contains("Set active codebase to répo-日本\n"));
        assert!(unicode.contains("Commit to branch 'ブランチ'"));
    }
}
