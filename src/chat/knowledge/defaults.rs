use super::{Category, CategoryEntry, KnowledgeBase};

pub fn knowledge_base() -> KnowledgeBase {
    let mut kb = KnowledgeBase::empty();

    kb.insert(
        Category::Greetings,
        CategoryEntry::new(
            [
                "hello",
                "hey",
                "hi there",
                "good morning",
                "good afternoon",
                "good evening",
                "greetings",
                "howdy",
            ],
            [
                "Hello! 👋 Welcome to the learning platform. How can I help you today?",
                "Hi there! 😊 I'm here to help with courses, grades, assignments and more. What's on your mind?",
                "Hey! 🎓 Great to see you. Ask me anything about your studies!",
            ],
            "Hi! I'm always happy to chat.",
        ),
    );

    kb.insert(
        Category::Courses,
        CategoryEntry::new(
            [
                "course",
                "courses",
                "class",
                "classes",
                "catalog",
                "subject",
                "curriculum",
                "offer",
            ],
            [
                "📚 **Our Courses**\n\nWe offer courses in programming, data science and AI, cloud and security, and design and business.\nEvery course includes video lectures, quizzes and hands-on assignments.",
                "🎓 **Course Overview**\n\nYou can browse all available courses from the Courses page.\nEach course page lists the instructor, duration, difficulty and prerequisites.",
                "📖 **Finding a Course**\n\nCourses are grouped by subject area and difficulty level.\nBeginner courses have no prerequisites, so they're a great place to start!",
            ],
            "Browse 20 courses across development, data, infrastructure and business.",
        )
        .with_follow_up(
            "💡 Would you like details about a specific course? Just mention its name, like \"Python\" or \"Data Science\".",
        )
        .with_quick_actions(),
    );

    kb.insert(
        Category::Grades,
        CategoryEntry::new(
            [
                "grade",
                "grades",
                "gpa",
                "score",
                "marks",
                "transcript",
                "report card",
                "result",
            ],
            [
                "📊 **Checking Your Grades**\n\nOpen the **Grades** page from your dashboard to see scores for every quiz and assignment.\nGrades are usually posted within 48 hours of the deadline.",
                "📈 **Your Progress**\n\nEach course shows a running average along with individual quiz results.\nIf a grade looks wrong, contact your instructor through the course page.",
                "🏅 **Grading System**\n\nQuizzes and assignments are weighted per course; check the syllabus for the breakdown.\nA final score of 70% or higher is required to pass.",
            ],
            "View quiz and assignment scores from the Grades page.",
        )
        .with_follow_up("📈 Want some tips on improving your grades?")
        .with_quick_actions(),
    );

    kb.insert(
        Category::Assignments,
        CategoryEntry::new(
            [
                "assignment",
                "homework",
                "deadline",
                "due date",
                "submit",
                "project",
                "quiz",
                "exam",
            ],
            [
                "📝 **Assignments**\n\nAll assignments are listed on each course page with their due dates.\nSubmit before the deadline to avoid late penalties.",
                "⏰ **Deadlines**\n\nYou'll find upcoming deadlines on your dashboard.\nTip: set a reminder a couple of days before each one!",
                "✅ **Quizzes & Exams**\n\nQuizzes open on the course page and are timed.\nMake sure you have a stable connection before you start.",
            ],
            "Find assignments, quizzes and due dates on each course page.",
        ),
    );

    kb.insert(
        Category::Enrollment,
        CategoryEntry::new(
            [
                "enroll",
                "register",
                "sign up",
                "join",
                "admission",
                "apply",
            ],
            [
                "🎓 **How to Enroll**\n\n1. Open the course page\n2. Click **Enroll Now**\n3. Confirm your enrollment\n\nThe course will then appear on your dashboard.",
                "✍️ **Enrollment**\n\nEnrollment is open until a course reaches its maximum class size.\nJust click **Enroll Now** on any course page.",
                "📋 **Joining a Course**\n\nCheck the prerequisites first, then hit **Enroll Now**.\nYou can be enrolled in several courses at once.",
            ],
            "Enroll from any course page with the Enroll Now button.",
        ),
    );

    kb.insert(
        Category::Schedule,
        CategoryEntry::new(
            [
                "schedule",
                "timetable",
                "when does",
                "start date",
                "calendar",
                "semester",
            ],
            [
                "📅 **Schedule**\n\nCourse start dates and weekly schedules are shown on each course page.\nMost courses are self-paced within their duration.",
                "🗓️ **Timetable**\n\nYour personal calendar on the dashboard lists lectures and deadlines for all your courses.",
                "⏳ **Course Timing**\n\nNew sessions start every semester. Check the course page for the next start date.",
            ],
            "Start dates and deadlines live on your dashboard calendar.",
        ),
    );

    kb.insert(
        Category::Instructors,
        CategoryEntry::new(
            ["instructor", "teacher", "professor", "tutor", "faculty"],
            [
                "👨‍🏫 **Our Instructors**\n\nAll instructors are experienced educators and industry professionals.\nYou can message them directly from the course page.",
                "🧑‍🏫 **Contacting Instructors**\n\nUse the course discussion board or the **Message Instructor** button.\nInstructors usually reply within one business day.",
                "🎓 **Faculty**\n\nEach course page introduces its instructor along with their background and office hours.",
            ],
            "Reach instructors through the course page or discussion board.",
        ),
    );

    kb.insert(
        Category::Certificates,
        CategoryEntry::new(
            ["certificate", "certification", "diploma", "credential"],
            [
                "🏆 **Certificates**\n\nComplete all modules with a final score of at least 70% to earn a certificate.\nCertificates can be downloaded from your profile.",
                "📜 **Certification**\n\nEvery completed course awards a shareable digital certificate.\nYou can add it straight to your professional profile!",
                "🎖️ **Earning Your Certificate**\n\nFinish every assignment and pass the final quiz. Your certificate is generated automatically.",
            ],
            "Pass a course with 70% or more to earn a certificate.",
        ),
    );

    kb.insert(
        Category::Technical,
        CategoryEntry::new(
            [
                "login",
                "log in",
                "password",
                "error",
                "not working",
                "bug",
                "website",
                "account",
            ],
            [
                "🔧 **Technical Support**\n\nTry refreshing the page and clearing your browser cache.\nIf the problem persists, contact support with a screenshot of the issue.",
                "🔑 **Account Help**\n\nUse **Forgot Password** on the login page to reset your password.\nA reset link will be sent to your registered email.",
                "💻 **Having Trouble?**\n\nMake sure you're using an up-to-date browser.\nStill stuck? Our support team is happy to help.",
            ],
            "Reset your password or contact support for site problems.",
        ),
    );

    kb.insert(
        Category::Help,
        CategoryEntry::new(
            ["help", "support", "assist", "how do i", "how to", "guide"],
            [
                "🤝 **I'm Here to Help!**\n\nI can answer questions about:\n• Courses and enrollment\n• Grades and assignments\n• Study tips and motivation\n\nWhat would you like to know?",
                "💬 **How I Can Help**\n\nAsk me about a specific course, your grades, deadlines, or how to study more effectively.",
                "🧭 **Getting Started**\n\nTry asking things like \"How many courses are available?\" or \"Tell me about Python\".",
            ],
            "I can guide you through courses, grades and study tips.",
        )
        .with_quick_actions(),
    );

    kb.insert(
        Category::Learning,
        CategoryEntry::new(
            [
                "study",
                "learn",
                "tips",
                "improve",
                "focus",
                "memorize",
                "technique",
                "prepare",
            ],
            [
                "🧠 **Study Tips**\n\n• Study in short, focused sessions (try 25 minutes on, 5 off)\n• Review your notes within 24 hours\n• Teach the material to someone else",
                "📚 **Learning Effectively**\n\n• Set a specific goal for every study session\n• Practice with quizzes instead of re-reading\n• Get enough sleep before exams",
                "🎯 **Better Focus**\n\n• Silence notifications while studying\n• Break big topics into small chunks\n• Reward yourself after each milestone",
            ],
            "Use focused sessions, active recall and regular review.",
        )
        .with_follow_up("🎯 Would you like study techniques for a specific subject?")
        .with_quick_actions(),
    );

    kb.insert(
        Category::Motivation,
        CategoryEntry::new(
            [
                "motivat",
                "stressed",
                "give up",
                "tired",
                "overwhelmed",
                "difficult",
                "struggling",
            ],
            [
                "💪 **You've Got This!**\n\nEvery expert was once a beginner. Take it one step at a time and celebrate small wins.",
                "🌟 **Keep Going!**\n\nFeeling stuck is part of learning. Take a short break, then come back with fresh eyes.",
                "🚀 **Stay Motivated**\n\nRemember why you started. Progress, not perfection, is what counts!",
            ],
            "Small steps and regular breaks keep you moving forward.",
        )
        .with_quick_actions(),
    );

    kb
}
