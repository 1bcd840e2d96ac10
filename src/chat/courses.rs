use std::fmt::{self, Write};

mod catalog;

pub use catalog::CATALOG;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Development,
    Data,
    Infrastructure,
    Business,
}

impl Area {
    pub const ALL: [Area; 4] = [
        Area::Development,
        Area::Data,
        Area::Infrastructure,
        Area::Business,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            Area::Development => "💻 Programming & Development",
            Area::Data => "📊 Data Science & AI",
            Area::Infrastructure => "🛡️ Cloud, DevOps & Security",
            Area::Business => "💼 Design, Business & Media",
        }
    }
}

/// Read-only reference data for one course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseInfo {
    /// Lowercase lookup key matched against incoming messages.
    pub key: &'static str,
    pub title: &'static str,
    pub instructor: &'static str,
    pub duration_weeks: u32,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub max_students: u32,
    pub highlights: &'static [&'static str],
    pub prerequisites: &'static str,
    pub skills: &'static str,
    pub area: Area,
}

impl CourseInfo {
    pub fn card(&self) -> String {
        let mut card = format!(
            "📘 **{}**\n\n{}\n\n👨‍🏫 **Instructor:** {}\n⏱️ **Duration:** {} weeks\n📊 **Difficulty:** {}\n👥 **Class size:** up to {} students\n\n✨ **Highlights:**\n",
            self.title,
            self.description,
            self.instructor,
            self.duration_weeks,
            self.difficulty,
            self.max_students,
        );

        for highlight in self.highlights {
            let _ = writeln!(card, "• {highlight}");
        }

        let _ = write!(
            card,
            "\n📋 **Prerequisites:** {}\n🎯 **Skills you'll gain:** {}\n\nWould you like to know how to enroll?",
            self.prerequisites, self.skills
        );

        card
    }
}

/// Finds the course whose key appears in `message`. When several keys
/// match, the longest one wins; ties keep table order.
pub fn lookup(message: &str) -> Option<&'static CourseInfo> {
    let mut found: Option<&'static CourseInfo> = None;

    for course in CATALOG {
        if !message.contains(course.key) {
            continue;
        }
        match found {
            Some(best) if course.key.len() <= best.key.len() => {}
            _ => found = Some(course),
        }
    }

    found
}

pub fn statistics() -> String {
    let count = |area: Area| CATALOG.iter().filter(|c| c.area == area).count();
    let level = |difficulty: Difficulty| {
        CATALOG
            .iter()
            .filter(|c| c.difficulty == difficulty)
            .count()
    };

    let mut reply = format!(
        "📚 **We currently offer {} courses!**\n\nHere's the breakdown by subject:\n",
        CATALOG.len()
    );

    for area in Area::ALL {
        let _ = writeln!(reply, "• {}: {} courses", area.heading(), count(area));
    }

    let _ = write!(
        reply,
        "\n📊 **By difficulty:**\n• Beginner: {}\n• Intermediate: {}\n• Advanced: {}\n\nWould you like to see the complete list?",
        level(Difficulty::Beginner),
        level(Difficulty::Intermediate),
        level(Difficulty::Advanced),
    );

    reply
}

pub fn full_listing() -> String {
    let mut reply = format!(
        "📋 **Complete Course Catalog ({} courses):**\n",
        CATALOG.len()
    );

    let mut number = 0;
    for area in Area::ALL {
        let _ = write!(reply, "\n**{}**\n", area.heading());
        for course in CATALOG.iter().filter(|c| c.area == area) {
            number += 1;
            let _ = writeln!(
                reply,
                "{number}. {} ({}, {} weeks)",
                course.title, course.difficulty, course.duration_weeks
            );
        }
    }

    reply.push_str("\nAsk me about any course by name to see its full details!");
    reply
}
