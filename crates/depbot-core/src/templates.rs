//! Static file templates emitted by the scaffolder.
//!
//! Each template carries exactly one `{{interval}}` slot.

use crate::types::Interval;

/// Placeholder replaced by the chosen interval.
pub const INTERVAL_SLOT: &str = "{{interval}}";

pub const DEPENDABOT_CONFIG_TEMPLATE: &str = r#"
version: 2
updates:
  - package-ecosystem: "npm"
    directory: "/"
    schedule:
      interval: "{{interval}}"
"#;

pub const DEPENDABOT_WORKFLOW_TEMPLATE: &str = r#"
name: 'Check Dependabot'

on:
  push:
    branches:
      - main

jobs:
  check:
    runs-on: ubuntu-latest

    steps:
      - name: Checkout repository
        uses: actions/checkout@v2

      - name: Set up Node.js
        uses: actions/setup-node@v2
        with:
          node-version: '16'

      - name: Install dependencies
        run: npm install

      - name: Create dependabot.yml
        run: |
          echo 'version: 2
          updates:
            - package-ecosystem: "npm"
              directory: "/"
              schedule:
                interval: "{{interval}}"' > .github/dependabot.yml

      - name: Commit dependabot.yml
        run: |
          git config --global user.email "github-actions@github.com"
          git config --global user.name "GitHub Actions"
          git add .github/dependabot.yml
          git commit -m "Add dependabot.yml" || echo "No changes to commit"
          git push origin main
"#;

/// Fill the interval slot. Surrounding blank lines are dropped and the
/// result ends with a single newline.
pub fn render(template: &str, interval: Interval) -> String {
    let mut out = template.trim().replacen(INTERVAL_SLOT, interval.as_str(), 1);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_template_has_one_slot() {
        assert_eq!(DEPENDABOT_CONFIG_TEMPLATE.matches(INTERVAL_SLOT).count(), 1);
        assert_eq!(DEPENDABOT_WORKFLOW_TEMPLATE.matches(INTERVAL_SLOT).count(), 1);
    }

    #[test]
    fn render_fills_interval() {
        let out = render(DEPENDABOT_CONFIG_TEMPLATE, Interval::Weekly);
        assert!(out.contains(r#"interval: "weekly""#));
        assert!(!out.contains(INTERVAL_SLOT));
        assert!(out.starts_with("version: 2"));
        assert!(out.ends_with("\"weekly\"\n"));
    }

    #[test]
    fn rendered_config_is_valid_yaml() {
        for interval in Interval::all() {
            let out = render(DEPENDABOT_CONFIG_TEMPLATE, *interval);
            let doc: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
            let update = &doc["updates"][0];
            assert_eq!(update["package-ecosystem"].as_str(), Some("npm"));
            assert_eq!(update["schedule"]["interval"].as_str(), Some(interval.as_str()));
        }
    }

    #[test]
    fn rendered_workflow_embeds_interval_in_generation_step() {
        let out = render(DEPENDABOT_WORKFLOW_TEMPLATE, Interval::Daily);
        let doc: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        let steps = doc["jobs"]["check"]["steps"].as_sequence().unwrap();
        let names: Vec<_> = steps.iter().filter_map(|s| s["name"].as_str()).collect();
        assert_eq!(
            names,
            [
                "Checkout repository",
                "Set up Node.js",
                "Install dependencies",
                "Create dependabot.yml",
                "Commit dependabot.yml",
            ]
        );
        let generate = steps[3]["run"].as_str().unwrap();
        assert!(generate.contains(r#"interval: "daily""#));
    }
}
