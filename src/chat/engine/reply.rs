use crate::chat::knowledge::Category;

use super::meta::MetaKind;

/// Side effect requested from the view layer alongside a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ShowQuickActions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKind {
    CourseList,
    Menu,
    Clarify,
    Generic,
}

/// Which processing tier produced a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Meta(MetaKind),
    CourseCount,
    CourseCatalog,
    SpecificCourse(&'static str),
    MultiTopic(Vec<Category>),
    Category(Category),
    Fallback(FallbackKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub action: Option<UiAction>,
    pub intent: Intent,
}

impl Reply {
    pub fn new(text: impl Into<String>, intent: Intent) -> Self {
        Self {
            text: text.into(),
            action: None,
            intent,
        }
    }

    pub fn with_action(mut self, action: Option<UiAction>) -> Self {
        self.action = action;
        self
    }
}
