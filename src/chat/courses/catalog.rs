use super::{Area, CourseInfo, Difficulty};

pub static CATALOG: &[CourseInfo] = &[
    CourseInfo {
        key: "python",
        title: "Introduction to Python Programming",
        instructor: "Dr. Sarah Johnson",
        duration_weeks: 8,
        difficulty: Difficulty::Beginner,
        description: "Learn the fundamentals of Python programming including variables, data types, control structures, and functions.",
        max_students: 30,
        highlights: &[
            "Hands-on coding exercises every week",
            "Build a small command-line project",
            "Tour of the standard library",
        ],
        prerequisites: "None, perfect for beginners",
        skills: "Python syntax, control flow, functions, problem solving",
        area: Area::Development,
    },
    CourseInfo {
        key: "web development",
        title: "Web Development with Flask",
        instructor: "Prof. Michael Chen",
        duration_weeks: 12,
        difficulty: Difficulty::Intermediate,
        description: "Build dynamic web applications using Flask framework, HTML, CSS, and JavaScript.",
        max_students: 25,
        highlights: &[
            "Routing, templates and forms",
            "User accounts with a real database",
            "Deploy your own web app",
        ],
        prerequisites: "Introduction to Python Programming or equivalent",
        skills: "Flask, HTML, CSS, JavaScript, web application design",
        area: Area::Development,
    },
    CourseInfo {
        key: "data science",
        title: "Data Science Fundamentals",
        instructor: "Dr. Emily Rodriguez",
        duration_weeks: 10,
        difficulty: Difficulty::Intermediate,
        description: "Introduction to data analysis, visualization, and machine learning concepts using Python.",
        max_students: 20,
        highlights: &[
            "Clean and explore real datasets",
            "Charts that tell a story",
            "First predictive models",
        ],
        prerequisites: "Basic Python",
        skills: "Data analysis, visualization, statistics, Python",
        area: Area::Data,
    },
    CourseInfo {
        key: "database",
        title: "Database Design and SQL",
        instructor: "Prof. David Kim",
        duration_weeks: 6,
        difficulty: Difficulty::Beginner,
        description: "Learn database design principles, SQL queries, and database management systems.",
        max_students: 35,
        highlights: &[
            "Entity-relationship modelling",
            "Writing joins and aggregate queries",
            "Indexes and normalisation",
        ],
        prerequisites: "None",
        skills: "SQL, schema design, query tuning",
        area: Area::Data,
    },
    CourseInfo {
        key: "javascript",
        title: "Advanced JavaScript",
        instructor: "Ms. Lisa Wang",
        duration_weeks: 8,
        difficulty: Difficulty::Advanced,
        description: "Master advanced JavaScript concepts including ES6+, async programming, and modern frameworks.",
        max_students: 15,
        highlights: &[
            "ES6+ features in depth",
            "Promises and async/await",
            "Working with a modern framework",
        ],
        prerequisites: "Solid JavaScript basics",
        skills: "Modern JavaScript, async programming, framework architecture",
        area: Area::Development,
    },
    CourseInfo {
        key: "react native",
        title: "Mobile App Development with React Native",
        instructor: "Mr. Alex Thompson",
        duration_weeks: 14,
        difficulty: Difficulty::Intermediate,
        description: "Build cross-platform mobile applications using React Native and JavaScript.",
        max_students: 18,
        highlights: &[
            "One codebase for iOS and Android",
            "Navigation, state and device APIs",
            "Publish an app to a test store",
        ],
        prerequisites: "JavaScript fundamentals",
        skills: "React Native, mobile UI, cross-platform development",
        area: Area::Development,
    },
    CourseInfo {
        key: "machine learning",
        title: "Machine Learning Basics",
        instructor: "Dr. Maria Garcia",
        duration_weeks: 12,
        difficulty: Difficulty::Advanced,
        description: "Introduction to machine learning algorithms, data preprocessing, and model evaluation.",
        max_students: 12,
        highlights: &[
            "Supervised and unsupervised learning",
            "Feature engineering and preprocessing",
            "Evaluating and comparing models",
        ],
        prerequisites: "Python and basic statistics",
        skills: "Model training, evaluation, data preprocessing",
        area: Area::Data,
    },
    CourseInfo {
        key: "cybersecurity",
        title: "Cybersecurity Fundamentals",
        instructor: "Prof. James Wilson",
        duration_weeks: 10,
        difficulty: Difficulty::Intermediate,
        description: "Learn essential cybersecurity concepts, threat detection, and security best practices.",
        max_students: 22,
        highlights: &[
            "Common attack techniques explained",
            "Threat detection labs",
            "Security policies that work",
        ],
        prerequisites: "Basic networking knowledge",
        skills: "Threat analysis, defensive security, risk assessment",
        area: Area::Infrastructure,
    },
    CourseInfo {
        key: "ui/ux",
        title: "UI/UX Design Principles",
        instructor: "Ms. Rachel Green",
        duration_weeks: 8,
        difficulty: Difficulty::Beginner,
        description: "Master user interface and user experience design principles and best practices.",
        max_students: 25,
        highlights: &[
            "User research and personas",
            "Wireframes and prototypes",
            "Usability testing",
        ],
        prerequisites: "None",
        skills: "Interface design, prototyping, user research",
        area: Area::Business,
    },
    CourseInfo {
        key: "cloud",
        title: "Cloud Computing with AWS",
        instructor: "Mr. Kevin Martinez",
        duration_weeks: 12,
        difficulty: Difficulty::Intermediate,
        description: "Learn cloud computing fundamentals and AWS services for scalable applications.",
        max_students: 20,
        highlights: &[
            "Compute, storage and networking on AWS",
            "Designing for scale",
            "Cost management basics",
        ],
        prerequisites: "Basic programming and command-line experience",
        skills: "AWS services, cloud architecture, scalability",
        area: Area::Infrastructure,
    },
    CourseInfo {
        key: "devops",
        title: "DevOps Fundamentals",
        instructor: "Dr. Amanda Foster",
        duration_weeks: 10,
        difficulty: Difficulty::Advanced,
        description: "Introduction to DevOps practices, CI/CD pipelines, and automation tools.",
        max_students: 18,
        highlights: &[
            "Build a CI/CD pipeline end to end",
            "Infrastructure as code",
            "Monitoring and incident response",
        ],
        prerequisites: "Programming experience and Linux basics",
        skills: "CI/CD, automation, containers, infrastructure as code",
        area: Area::Infrastructure,
    },
    CourseInfo {
        key: "blockchain",
        title: "Blockchain Development",
        instructor: "Prof. Robert Chen",
        duration_weeks: 14,
        difficulty: Difficulty::Advanced,
        description: "Learn blockchain technology and smart contract development with Solidity.",
        max_students: 15,
        highlights: &[
            "How blockchains reach consensus",
            "Smart contracts in Solidity",
            "Testing and auditing contracts",
        ],
        prerequisites: "Solid programming experience",
        skills: "Solidity, smart contracts, decentralised applications",
        area: Area::Development,
    },
    CourseInfo {
        key: "digital marketing",
        title: "Digital Marketing Strategy",
        instructor: "Ms. Jennifer Lee",
        duration_weeks: 8,
        difficulty: Difficulty::Beginner,
        description: "Master digital marketing techniques, SEO, and social media marketing.",
        max_students: 30,
        highlights: &[
            "Search engine optimisation",
            "Social media campaigns",
            "Measuring what works",
        ],
        prerequisites: "None",
        skills: "SEO, social media marketing, campaign analytics",
        area: Area::Business,
    },
    CourseInfo {
        key: "project management",
        title: "Project Management",
        instructor: "Mr. Thomas Anderson",
        duration_weeks: 10,
        difficulty: Difficulty::Intermediate,
        description: "Learn project management methodologies and tools for successful project delivery.",
        max_students: 25,
        highlights: &[
            "Agile and waterfall compared",
            "Planning, estimating and tracking",
            "Leading a project team",
        ],
        prerequisites: "None",
        skills: "Planning, risk management, stakeholder communication",
        area: Area::Business,
    },
    CourseInfo {
        key: "data visualization",
        title: "Data Visualization",
        instructor: "Dr. Sarah Williams",
        duration_weeks: 8,
        difficulty: Difficulty::Intermediate,
        description: "Create compelling data visualizations using tools like Tableau and D3.js.",
        max_students: 20,
        highlights: &[
            "Dashboards in Tableau",
            "Interactive charts with D3.js",
            "Design rules for clear charts",
        ],
        prerequisites: "Comfort with spreadsheets or basic programming",
        skills: "Tableau, D3.js, visual storytelling",
        area: Area::Data,
    },
    CourseInfo {
        key: "artificial intelligence",
        title: "Artificial Intelligence Basics",
        instructor: "Prof. Michael Brown",
        duration_weeks: 12,
        difficulty: Difficulty::Advanced,
        description: "Introduction to AI concepts, neural networks, and machine learning applications.",
        max_students: 16,
        highlights: &[
            "Search, reasoning and learning",
            "Neural networks from first principles",
            "Applied AI case studies",
        ],
        prerequisites: "Python and basic linear algebra",
        skills: "Neural networks, AI problem solving, applied machine learning",
        area: Area::Data,
    },
    CourseInfo {
        key: "web security",
        title: "Web Security",
        instructor: "Mr. David Clark",
        duration_weeks: 10,
        difficulty: Difficulty::Advanced,
        description: "Learn web application security, vulnerability assessment, and penetration testing.",
        max_students: 18,
        highlights: &[
            "The most common web vulnerabilities",
            "Vulnerability assessment labs",
            "Penetration testing workflow",
        ],
        prerequisites: "Web development experience",
        skills: "Vulnerability assessment, penetration testing, secure coding",
        area: Area::Infrastructure,
    },
    CourseInfo {
        key: "game development",
        title: "Mobile Game Development",
        instructor: "Ms. Lisa Rodriguez",
        duration_weeks: 16,
        difficulty: Difficulty::Intermediate,
        description: "Create mobile games using Unity and C# programming language.",
        max_students: 20,
        highlights: &[
            "Game loops, physics and input",
            "C# scripting in Unity",
            "Ship a complete mobile game",
        ],
        prerequisites: "Any introductory programming course",
        skills: "Unity, C#, game design",
        area: Area::Development,
    },
    CourseInfo {
        key: "e-commerce",
        title: "E-commerce Development",
        instructor: "Prof. Daniel Taylor",
        duration_weeks: 12,
        difficulty: Difficulty::Intermediate,
        description: "Build online stores and e-commerce platforms using modern web technologies.",
        max_students: 22,
        highlights: &[
            "Product catalogs and carts",
            "Payment integration",
            "Running an online store",
        ],
        prerequisites: "Web development basics",
        skills: "Online store development, payments, web technologies",
        area: Area::Development,
    },
    CourseInfo {
        key: "content creation",
        title: "Content Creation",
        instructor: "Ms. Emily Davis",
        duration_weeks: 8,
        difficulty: Difficulty::Beginner,
        description: "Learn content creation, video editing, and digital storytelling techniques.",
        max_students: 28,
        highlights: &[
            "Planning content that people share",
            "Video editing essentials",
            "Digital storytelling",
        ],
        prerequisites: "None",
        skills: "Video editing, storytelling, content planning",
        area: Area::Business,
    },
];
