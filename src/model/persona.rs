use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Which assistant a dashboard session talks to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Persona {
    Hr,
    Hiring,
}

/// Static texts a client shows around the chat area.
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonaProfile {
    #[schema(example = "HR Assistant Dashboard")]
    pub title: &'static str,
    #[schema(example = "Welcome to Keka HR Assistant")]
    pub welcome_heading: &'static str,
    pub welcome_text: &'static str,
    #[schema(example = "Ask Keka Assistant...")]
    pub input_placeholder: &'static str,
    #[schema(value_type = Vec<String>)]
    pub sample_prompts: &'static [&'static str],
}

impl Persona {
    pub fn profile(self) -> PersonaProfile {
        match self {
            Persona::Hr => PersonaProfile {
                title: "HR Assistant Dashboard",
                welcome_heading: "Welcome to Keka HR Assistant",
                welcome_text: "Ask me anything about employee data, leave requests, attendance records, or generate reports.",
                input_placeholder: "Ask Keka Assistant...",
                sample_prompts: &[
                    "Show all pending leave requests",
                    "Get Emma Watson's leave balance",
                    "Show attendance for December 2024",
                ],
            },
            Persona::Hiring => PersonaProfile {
                title: "Hiring Assistant Dashboard",
                welcome_heading: "Welcome to Keka Hiring Assistant",
                welcome_text: "Ask me about candidates, open positions, interview schedules, or hiring pipeline reports.",
                input_placeholder: "Ask Hiring Assistant...",
                sample_prompts: &[
                    "Show candidates for Senior Backend Engineer",
                    "List all open job positions",
                    "Show interviews scheduled this week",
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!(Persona::from_str("hr").ok(), Some(Persona::Hr));
        assert_eq!(Persona::from_str("hiring").ok(), Some(Persona::Hiring));
        assert!(Persona::from_str("payroll").is_err());
        assert_eq!(Persona::Hiring.to_string(), "hiring");
    }

    #[test]
    fn hr_profile_lists_try_asking_prompts() {
        let profile = Persona::Hr.profile();
        assert_eq!(profile.sample_prompts.len(), 3);
        assert_eq!(profile.sample_prompts[0], "Show all pending leave requests");
    }
}
