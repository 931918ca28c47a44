//! Display implementations for domain models.

use std::fmt;

use crate::models::Plan;

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.project_name)?;
        writeln!(f)?;
        writeln!(f, "**Goal:** {}", self.instruction)?;
        writeln!(f)?;

        writeln!(f, "## Targets")?;
        if self.targets.is_empty() {
            writeln!(f, "\nNo targets. Regenerate or edit the plan before running it.")?;
        } else {
            writeln!(f)?;
            for target in &self.targets {
                writeln!(f, "- r/{target}")?;
            }
        }

        writeln!(f, "\n## Keywords")?;
        if self.keywords.is_empty() {
            writeln!(f, "\nNo keywords.")?;
        } else {
            writeln!(f)?;
            for keyword in &self.keywords {
                writeln!(f, "- {keyword}")?;
            }
        }

        Ok(())
    }
}
