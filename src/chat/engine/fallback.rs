pub const VAGUE_TOKENS: &[&str] = &["anything", "whatever", "idk", "not sure", "maybe"];

pub const MENU: &str = "No problem! 😊 Here are some things I can help with:\n\n📚 **Courses**: what we offer and course details\n📊 **Grades**: checking your scores\n📝 **Assignments**: deadlines and submissions\n🎓 **Enrollment**: joining a course\n💡 **Study tips**: learning more effectively\n\nJust pick a topic!";

pub const CLARIFY: &str = "🤔 Which course are you interested in? We offer courses in programming, data science and AI, cloud and security, and design and business.\n\nTry asking about a specific one, like \"Python\" or \"DevOps\", or ask \"How many courses are available?\"";

pub const GENERIC: &[&str] = &[
    "I'm not quite sure I understood that. 🤔 Could you rephrase? You can ask me about courses, grades, assignments or study tips.",
    "Hmm, I don't have an answer for that yet. Try asking about our courses, your grades, or how to enroll!",
    "Interesting question! I'm best at helping with courses, grades, deadlines and study strategies. What would you like to know?",
];
