use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod defaults;

/// Topic bucket of the knowledge base.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Greetings,
    Courses,
    Grades,
    Assignments,
    Enrollment,
    Schedule,
    Instructors,
    Certificates,
    Technical,
    Help,
    Learning,
    Motivation,
}

serde_plain::derive_display_from_serialize!(Category);
serde_plain::derive_fromstr_from_deserialize!(Category);

impl Category {
    /// Human readable label used in multi-topic summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Greetings => "Greetings",
            Category::Courses => "Courses",
            Category::Grades => "Grades",
            Category::Assignments => "Assignments",
            Category::Enrollment => "Enrollment",
            Category::Schedule => "Schedule",
            Category::Instructors => "Instructors",
            Category::Certificates => "Certificates",
            Category::Technical => "Technical Support",
            Category::Help => "Help",
            Category::Learning => "Learning",
            Category::Motivation => "Motivation",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    /// Lowercase substrings that signal this category.
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
    pub summary: String,
    pub follow_up: Option<String>,
    /// Whether replies from this category reveal the quick-action buttons.
    pub quick_actions: bool,
}

impl CategoryEntry {
    pub fn new<P, R>(patterns: P, responses: R, summary: &str) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| Into::<String>::into(p).to_lowercase())
                .collect(),
            responses: responses.into_iter().map(Into::into).collect(),
            summary: summary.to_string(),
            follow_up: None,
            quick_actions: false,
        }
    }

    pub fn with_follow_up(mut self, follow_up: &str) -> Self {
        self.follow_up = Some(follow_up.to_string());
        self
    }

    pub fn with_quick_actions(mut self) -> Self {
        self.quick_actions = true;
        self
    }

    /// Highest score of any pattern found in `message`: the pattern length,
    /// plus 10 when the message starts with it.
    pub fn score(&self, message: &str) -> Option<usize> {
        self.patterns
            .iter()
            .filter_map(|pattern| {
                message.find(pattern.as_str()).map(|index| {
                    let bonus = if index == 0 { 10 } else { 0 };
                    pattern.len() + bonus
                })
            })
            .max()
    }

    pub fn matches(&self, message: &str) -> bool {
        self.patterns.iter().any(|p| message.contains(p.as_str()))
    }
}

/// Ordered category table. Iteration order is insertion order, which is
/// also the tie-break order when two categories score the same.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    categories: IndexMap<Category, CategoryEntry>,
}

impl KnowledgeBase {
    pub fn empty() -> Self {
        Self {
            categories: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, category: Category, entry: CategoryEntry) {
        self.categories.insert(category, entry);
    }

    pub fn get(&self, category: Category) -> Option<&CategoryEntry> {
        self.categories.get(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &CategoryEntry)> {
        self.categories.iter()
    }

    /// Every category with at least one pattern in `message`, in table order.
    pub fn matching(&self, message: &str) -> Vec<Category> {
        self.iter()
            .filter(|(_, entry)| entry.matches(message))
            .map(|(category, _)| *category)
            .collect()
    }

    /// Best scoring category; ties keep the first one seen.
    pub fn best_match(&self, message: &str) -> Option<(Category, usize)> {
        let mut best: Option<(Category, usize)> = None;

        for (category, entry) in &self.categories {
            if let Some(score) = entry.score(message) {
                match best {
                    Some((_, best_score)) if score <= best_score => {}
                    _ => best = Some((*category, score)),
                }
            }
        }

        best
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        defaults::knowledge_base()
    }
}
