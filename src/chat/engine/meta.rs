use serde::Serialize;

/// Conversational small talk answered before any topic matching.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetaKind {
    Identity,
    Gratitude,
    Farewell,
    Compliment,
    Confusion,
    Urgency,
}

serde_plain::derive_display_from_serialize!(MetaKind);

struct MetaRule {
    kind: MetaKind,
    patterns: &'static [&'static str],
    /// Patterns must end on a word boundary ("who are you" but not
    /// "who are your instructors").
    whole_words: bool,
    reply: &'static str,
}

impl MetaRule {
    fn matches(&self, message: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            if !self.whole_words {
                return message.contains(pattern);
            }

            message.match_indices(pattern).any(|(start, _)| {
                message[start + pattern.len()..]
                    .chars()
                    .next()
                    .is_none_or(|c| !c.is_alphanumeric())
            })
        })
    }
}

// checked top to bottom, first hit wins
static RULES: &[MetaRule] = &[
    MetaRule {
        kind: MetaKind::Identity,
        patterns: &["who are you", "your name", "are you a bot", "are you human"],
        whole_words: true,
        reply: "🤖 I'm **EduBot**, your virtual learning assistant! I can tell you about courses, grades, assignments, enrollment and study tips. I'm a scripted helper, so I work best with short, direct questions.",
    },
    MetaRule {
        kind: MetaKind::Gratitude,
        patterns: &["thank", "thx", "appreciate"],
        whole_words: false,
        reply: "You're very welcome! 😊 I'm always here if you need anything else. Happy learning!",
    },
    MetaRule {
        kind: MetaKind::Farewell,
        patterns: &["goodbye", "bye", "see you", "good night", "farewell"],
        whole_words: true,
        reply: "Goodbye! 👋 Good luck with your studies, and come back any time you have a question.",
    },
    MetaRule {
        kind: MetaKind::Compliment,
        patterns: &[
            "you're great",
            "you are great",
            "you're awesome",
            "you are awesome",
            "amazing bot",
            "good bot",
            "you're smart",
            "you are smart",
            "you're helpful",
            "you are helpful",
        ],
        whole_words: true,
        reply: "Aww, thank you! 🥰 That means a lot. I'm just happy to help you learn!",
    },
    MetaRule {
        kind: MetaKind::Confusion,
        patterns: &[
            "confused",
            "don't understand",
            "dont understand",
            "what do you mean",
            "i'm lost",
            "makes no sense",
        ],
        whole_words: false,
        reply: "No worries, let me try to make it simpler! 🙂 You can ask me things like:\n• \"How many courses are available?\"\n• \"Tell me about Python\"\n• \"How do I check my grades?\"",
    },
    MetaRule {
        kind: MetaKind::Urgency,
        patterns: &["urgent", "asap", "emergency", "immediately"],
        whole_words: false,
        reply: "🚨 For urgent issues, please contact the support team directly at **support@edubot.local** or call the help desk. For deadline problems, reach out to your instructor as soon as possible.",
    },
];

/// Returns the first small-talk rule whose patterns appear in `message`.
pub fn detect(message: &str) -> Option<(MetaKind, &'static str)> {
    RULES
        .iter()
        .find(|rule| rule.matches(message))
        .map(|rule| (rule.kind, rule.reply))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_kind() {
        let cases = [
            ("who are you?", MetaKind::Identity),
            ("thanks a lot", MetaKind::Gratitude),
            ("ok bye", MetaKind::Farewell),
            ("you're awesome", MetaKind::Compliment),
            ("i'm so confused", MetaKind::Confusion),
            ("this is urgent", MetaKind::Urgency),
        ];

        for (message, expected) in cases {
            let (kind, _) = detect(message).unwrap();
            assert_eq!(kind, expected, "{message}");
        }
    }

    #[test]
    fn earlier_rules_take_precedence() {
        let (kind, _) = detect("thank you, bye").unwrap();
        assert_eq!(kind, MetaKind::Gratitude);
    }

    #[test]
    fn ordinary_questions_pass_through() {
        for message in [
            "how do i check my grades",
            "what are your courses?",
            "what are your grading rules",
            "who are your instructors",
            "which courses are open right now",
            "how can i see your course list",
        ] {
            assert!(detect(message).is_none(), "{message}");
        }
    }

    #[test]
    fn phrases_match_at_the_end_of_a_message() {
        assert_eq!(detect("who are you").unwrap().0, MetaKind::Identity);
        assert_eq!(detect("what's your name?").unwrap().0, MetaKind::Identity);
        assert_eq!(detect("see you!").unwrap().0, MetaKind::Farewell);
        assert_eq!(detect("i need this urgently").unwrap().0, MetaKind::Urgency);
    }
}
