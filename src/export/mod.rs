//! Read-only renderings of a finished [`TripPlan`] for offline use.

pub mod html;
pub mod icons;
pub mod map;
pub mod text;

use crate::error::{AppError, Result};
use crate::models::TripPlan;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::macros::format_description;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Mobile,
    Html,
    Json,
}

impl ExportFormat {
    /// Lenient lookup: anything unrecognised exports as mobile text
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "html" => ExportFormat::Html,
            "json" => ExportFormat::Json,
            _ => ExportFormat::Mobile,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Mobile => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Mobile => "text/plain; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Mobile => write!(f, "mobile"),
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedPlan {
    pub content: String,
    pub filename: String,
    pub mime_type: String,
    pub format: ExportFormat,
}

pub fn export_trip_plan(plan: &TripPlan, format: ExportFormat) -> Result<ExportedPlan> {
    let content = match format {
        ExportFormat::Mobile => text::render(plan),
        ExportFormat::Html => html::render(plan),
        ExportFormat::Json => serde_json::to_string_pretty(plan)
            .map_err(|e| AppError::Internal(format!("Failed to serialize plan: {}", e)))?,
    };

    Ok(ExportedPlan {
        content,
        filename: filename(plan, format)?,
        mime_type: format.mime_type().to_string(),
        format,
    })
}

/// `trip_plan_{destination}_{YYYYmmdd_HHMM}.{ext}`, restricted to ASCII so
/// it can go into a content-disposition header
fn filename(plan: &TripPlan, format: ExportFormat) -> Result<String> {
    let timestamp = plan
        .generated_at
        .format(format_description!("[year][month][day]_[hour][minute]"))
        .map_err(|e| AppError::Internal(format!("Failed to format timestamp: {}", e)))?;

    let destination: String = plan
        .destination
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    Ok(format!(
        "trip_plan_{}_{}.{}",
        destination,
        timestamp,
        format.extension()
    ))
}

/// Human-readable generation time shared by the text and HTML exports
pub(crate) fn generated_label(plan: &TripPlan) -> String {
    plan.generated_at
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_else(|_| plan.generated_at.to_string())
}

/// First `max_chars` characters, with "..." when anything was cut
pub(crate) fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
