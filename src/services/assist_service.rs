//! Request-text assistant.
//!
//! Suggests a cleaner version of a mentorship request draft. The current
//! implementation is a local placeholder with no model behind it.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::PLACEHOLDER_REWRITE_EXPLANATION;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RewriteSuggestion {
    pub original_text: String,
    pub suggested_text: String,
    pub explanation: String,
}

#[async_trait]
pub trait RequestAssistant: Send + Sync {
    async fn rewrite(&self, original_text: &str, questions: &[String])
        -> AppResult<RewriteSuggestion>;
}

/// Trims the draft and capitalizes its first letter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderAssistant;

#[async_trait]
impl RequestAssistant for PlaceholderAssistant {
    async fn rewrite(
        &self,
        original_text: &str,
        questions: &[String],
    ) -> AppResult<RewriteSuggestion> {
        let trimmed = original_text.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Text to rewrite is required"));
        }

        tracing::debug!(questions = questions.len(), "Placeholder rewrite requested");

        Ok(RewriteSuggestion {
            original_text: original_text.to_string(),
            suggested_text: capitalize_first(trimmed),
            explanation: PLACEHOLDER_REWRITE_EXPLANATION.to_string(),
        })
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
