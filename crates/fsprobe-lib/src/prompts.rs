//! Reusable prompt templates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_REVIEW_LANGUAGE: &str = "python";

/// Arguments for the `code-review` prompt.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct CodeReviewArgs {
    #[schemars(description = "Source code to review")]
    pub code: String,
    #[schemars(description = "Language of the code (default: python)")]
    pub language: Option<String>,
}

/// Arguments for the `explain-error` prompt.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExplainErrorArgs {
    #[schemars(description = "Error message to explain")]
    pub error: String,
    #[schemars(description = "Optional surrounding context")]
    pub context: Option<String>,
}

pub fn code_review(args: &CodeReviewArgs) -> String {
    let language = args
        .language
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_REVIEW_LANGUAGE);

    format!(
        "Please review the following {language} code:\n\n\
         ```{language}\n{code}\n```\n\n\
         Consider:\n\
         1. Code quality and readability\n\
         2. Potential bugs or edge cases\n\
         3. Performance implications\n\
         4. Security concerns\n\
         5. Suggestions for improvement",
        code = args.code,
    )
}

pub fn explain_error(args: &ExplainErrorArgs) -> String {
    let mut prompt = format!(
        "Please explain this error and how to fix it:\n\n```\n{}\n```",
        args.error
    );
    if let Some(context) = args.context.as_deref().filter(|c| !c.is_empty()) {
        prompt.push_str("\n\nContext:\n");
        prompt.push_str(context);
    }
    prompt
}
