use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BotError;

/// Fixed shortcut buttons that answer without going through the classifier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuickAction {
    Courses,
    Grades,
    Help,
    Tips,
}

serde_plain::derive_display_from_serialize!(QuickAction);

impl FromStr for QuickAction {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s.trim()).map_err(|_| BotError::UnknownAction(s.to_string()))
    }
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::Courses,
        QuickAction::Grades,
        QuickAction::Help,
        QuickAction::Tips,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::Courses => "📚 Courses",
            QuickAction::Grades => "📊 Grades",
            QuickAction::Help => "❓ Help",
            QuickAction::Tips => "💡 Study Tips",
        }
    }

    /// Text shown on the user side of the transcript when the button is used.
    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::Courses => "Show me the available courses",
            QuickAction::Grades => "How do I check my grades?",
            QuickAction::Help => "I need help",
            QuickAction::Tips => "Give me some study tips",
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            QuickAction::Courses => {
                "📚 **Popular Courses**\n\n• Introduction to Python Programming\n• Web Development with Flask\n• Data Science Fundamentals\n• Cloud Computing with AWS\n• UI/UX Design Principles\n\nAsk \"How many courses are available?\" to see the whole catalog, or mention a course by name for details."
            }
            QuickAction::Grades => {
                "📊 **Checking Your Grades**\n\n1. Open your dashboard\n2. Click **Grades** in the menu\n3. Pick a course to see every quiz and assignment score\n\nGrades are usually posted within 48 hours."
            }
            QuickAction::Help => {
                "❓ **How Can I Help?**\n\nI can answer questions about:\n• Courses and enrollment\n• Grades and assignments\n• Deadlines and schedules\n• Study tips and motivation\n\nJust type your question!"
            }
            QuickAction::Tips => {
                "💡 **Top Study Tips**\n\n1. Study in short, focused sessions\n2. Test yourself instead of re-reading\n3. Review notes within 24 hours\n4. Take regular breaks\n5. Get enough sleep before exams"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_identifiers() {
        for action in QuickAction::ALL {
            assert_eq!(action.to_string().parse::<QuickAction>().unwrap(), action);
        }
        assert_eq!(" tips ".parse::<QuickAction>().unwrap(), QuickAction::Tips);
    }

    #[test]
    fn rejects_unknown_identifiers() {
        let err = "weather".parse::<QuickAction>().unwrap_err();
        assert!(matches!(err, BotError::UnknownAction(ref id) if id == "weather"));
    }
}
