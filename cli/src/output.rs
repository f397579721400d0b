//! Terminal rendering for command results.

use clap::ValueEnum;
use serde::Serialize;
use anyhow::Result;
use shared::models::{Deployment, Environment, Project, Service};
use std::fmt;

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}

/// A record that can be rendered as a text block.
pub trait TextRecord {
    /// Writes the record's `Label: value` lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

impl TextRecord for Project {
    fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "  ID: {}", self.id)?;
        writeln!(out, "  Name: {}", self.name)?;
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(out, "  Description: {description}")?;
        }
        Ok(())
    }
}

impl TextRecord for Environment {
    fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "  ID: {}", self.id)?;
        writeln!(out, "  Name: {}", self.name)
    }
}

impl TextRecord for Service {
    fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "  ID: {}", self.id)?;
        writeln!(out, "  Name: {}", self.name)
    }
}

impl TextRecord for Deployment {
    fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "  ID: {}", self.id)?;
        writeln!(out, "  Status: {}", self.status)?;
        writeln!(out, "  Created: {}", self.created_at.to_rfc3339())?;
        if let Some(url) = self.static_url.as_deref().filter(|u| !u.is_empty()) {
            writeln!(out, "  URL: {url}")?;
        }
        Ok(())
    }
}

/// Renders a listing of `records`, described by `noun` (e.g. `"project"`).
///
/// # Errors
///
/// Returns an error if JSON encoding or text formatting fails.
pub fn render_listing<T>(records: &[T], noun: &str, format: OutputFormat) -> Result<String>
where
    T: TextRecord + Serialize,
{
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(records)?);
    }

    if records.is_empty() {
        return Ok(format!("No {noun}s found or error occurred"));
    }

    let mut out = format!("\nFound {} {noun}(s):\n\n", records.len());
    for record in records {
        record.write_text(&mut out)?;
        out.push('\n');
    }
    Ok(out)
}

/// Guidance printed when no log query shape succeeded.
#[must_use]
pub fn remediation(project_id: Option<&str>) -> String {
    let project = project_id.unwrap_or("<project-id>");
    let rule = "=".repeat(70);

    format!(
        "
{rule}
Unable to fetch logs through the GraphQL API
{rule}

Alternative options:

1. Railway Dashboard (recommended):
   https://railway.app/project/{project}
   -> Open the service -> Open the deployment -> View logs

2. Railway CLI:
   npm install -g @railway/cli
   railway login
   railway link {project}
   railway logs

3. GraphiQL Playground:
   https://railway.com/graphiql
   -> Add an Authorization header with your token
   -> Explore the schema for the current log query shape

Tip: rerun with --debug to see every query attempt"
    )
}

/// File label for a deployment: `deployment_` plus the first 8 characters of
/// its ID.
#[must_use]
pub fn deployment_label(deployment_id: &str) -> String {
    let short: String = deployment_id.chars().take(8).collect();
    format!("deployment_{short}")
}
