//! Message templates and the built-in set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder replaced with the recipient's name when a template is applied.
pub const RECIPIENT_PLACEHOLDER: &str = "[Representative Name]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub subject: String,
    pub body: String,
}

/// Subject and body being edited for one recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub subject: String,
    pub body: String,
}

impl Template {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Fill in the recipient name. Other bracketed placeholders are left for
    /// the sender to edit.
    #[must_use]
    pub fn apply(&self, recipient_name: &str) -> Draft {
        Draft {
            subject: self.subject.clone(),
            body: self.body.replace(RECIPIENT_PLACEHOLDER, recipient_name),
        }
    }
}

/// Templates available when configuration adds none.
#[must_use]
pub fn default_templates() -> BTreeMap<String, Template> {
    [
        (
            "general",
            Template::new(
                "Constituent Concern Regarding [Your Issue]",
                "Dear [Representative Name],\n\n\
                 I am writing to you as your constituent from [City, State ZIP] regarding [describe your concern].\n\n\
                 [Explain your position and why this matters to you]\n\n\
                 I urge you to [your request - vote for/against, support, investigate, etc.].\n\n\
                 Thank you for your time and consideration.\n\n\
                 Sincerely,\n[Your Name]\n[Your Address]\n[Your Email]\n[Your Phone]",
            ),
        ),
        (
            "support",
            Template::new(
                "Support for [Bill Number/Issue]",
                "Dear [Representative Name],\n\n\
                 I am writing to express my strong support for [Bill Number/Issue Name].\n\n\
                 [Explain why you support this legislation and how it affects you or your community]\n\n\
                 I urge you to vote in favor of this important legislation.\n\n\
                 Thank you for your service.\n\n\
                 Sincerely,\n[Your Name]\n[Your City, State ZIP]",
            ),
        ),
        (
            "oppose",
            Template::new(
                "Opposition to [Bill Number/Issue]",
                "Dear [Representative Name],\n\n\
                 I am writing to express my strong opposition to [Bill Number/Issue Name].\n\n\
                 [Explain your concerns and how this legislation would negatively impact you or your community]\n\n\
                 I urge you to vote against this legislation.\n\n\
                 Thank you for considering my concerns.\n\n\
                 Sincerely,\n[Your Name]\n[Your City, State ZIP]",
            ),
        ),
        (
            "local-issue",
            Template::new(
                "Local Concern: [Brief Description]",
                "Dear [Representative Name],\n\n\
                 I am a resident of [City/Town] and I am writing to bring your attention to a local issue that affects our community: [describe the issue].\n\n\
                 [Explain the problem, its impact, and what you'd like to see done]\n\n\
                 I would appreciate your assistance in addressing this matter.\n\n\
                 Thank you for your attention to this important local issue.\n\n\
                 Sincerely,\n[Your Name]\n[Your Address]",
            ),
        ),
        (
            "thank-you",
            Template::new(
                "Thank You for Your Support of [Issue]",
                "Dear [Representative Name],\n\n\
                 I wanted to take a moment to thank you for your support of [issue/bill/action].\n\n\
                 [Explain why this matters to you and the positive impact]\n\n\
                 Your leadership on this issue is greatly appreciated.\n\n\
                 Sincerely,\n[Your Name]\n[Your City, State ZIP]",
            ),
        ),
    ]
    .into_iter()
    .map(|(id, template)| (id.to_string(), template))
    .collect()
}
