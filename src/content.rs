//! Portfolio Content
//!
//! Static content tables rendered by the home page sections. Everything is
//! `'static` data; nothing here is fetched or persisted.

pub const OWNER_NAME: &str = "Abdullah Rana";

pub const ABOUT_TEXT: &str = "I'm a Computer Science and Mathematics student at the \
University of Virginia, passionate about software engineering, fintech, and AI. I \
enjoy building impactful tech and continuously learning new things.";

pub struct ContactLink {
    pub name: &'static str,
    pub display: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        name: "GitHub",
        display: "github.com/CodingFreeze",
        href: "https://github.com/CodingFreeze",
        glyph: "🐙",
    },
    ContactLink {
        name: "LinkedIn",
        display: "linkedin.com/in/abdullahranaofc",
        href: "https://www.linkedin.com/in/abdullahranaofc/",
        glyph: "💼",
    },
    ContactLink {
        name: "Email",
        display: "abdullahranaofc@gmail.com",
        href: "mailto:abdullahranaofc@gmail.com",
        glyph: "✉️",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub github: &'static str,
    pub demo: &'static str,
    pub tech_stack: &'static [&'static str],
    pub learned: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "AI Text Summarizer",
        description: "A web application that uses AI to generate concise summaries \
                      of long articles and documents.",
        github: "https://github.com/CodingFreeze/text-summarizer",
        demo: "https://text-summarizer-demo.vercel.app",
        tech_stack: &["React", "OpenAI API", "TailwindCSS", "Node.js"],
        learned: Some(
            "Integrating LLM APIs, prompt engineering, and optimizing for response times.",
        ),
    },
    Project {
        title: "Crypto Portfolio Tracker",
        description: "Monitor cryptocurrency investments in real-time with price \
                      alerts and performance analytics.",
        github: "https://github.com/CodingFreeze/crypto-tracker",
        demo: "https://crypto-tracker-app.vercel.app",
        tech_stack: &["Next.js", "TypeScript", "CoinGecko API", "Chart.js"],
        learned: Some(
            "Real-time data visualization, API rate limiting, and secure user authentication.",
        ),
    },
    Project {
        title: "E-Commerce Platform",
        description: "A full-featured online store with product listings, shopping \
                      cart, and payment processing.",
        github: "https://github.com/CodingFreeze/ecommerce-site",
        demo: "https://ecommerce-site-demo.vercel.app",
        tech_stack: &["React", "Firebase", "Stripe", "Redux"],
        learned: Some(
            "State management patterns, payment gateway integration, and inventory \
             tracking systems.",
        ),
    },
    Project {
        title: "Social Media Dashboard",
        description: "An analytics dashboard for tracking engagement and analytics \
                      across multiple social media platforms.",
        github: "https://github.com/CodingFreeze/social-dashboard",
        demo: "https://social-dashboard-demo.vercel.app",
        tech_stack: &["Vue.js", "D3.js", "Express", "MongoDB"],
        learned: None,
    },
];

pub struct Skill {
    pub name: &'static str,
    pub glyph: &'static str,
    pub description: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", glyph: "⚛️", description: "Frontend development" },
    Skill { name: "JavaScript", glyph: "📜", description: "Web development" },
    Skill { name: "Python", glyph: "🐍", description: "Backend & data science" },
    Skill { name: "Node.js", glyph: "🟢", description: "Server-side applications" },
    Skill { name: "SQL", glyph: "🗄️", description: "Database management" },
    Skill { name: "Git", glyph: "🌿", description: "Version control" },
    Skill { name: "Docker", glyph: "🐳", description: "Containerization" },
    Skill { name: "Machine Learning", glyph: "🧠", description: "AI & data modeling" },
    Skill { name: "TypeScript", glyph: "🔷", description: "Type-safe JavaScript" },
    Skill { name: "TailwindCSS", glyph: "🎨", description: "Utility-first CSS" },
];

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Software Engineering Intern",
        company: "[Company Name]",
        period: "Summer 2024",
        description: "Description of your internship and key achievements.",
    },
    Experience {
        title: "Data Science Intern",
        company: "[Company Name]",
        period: "Summer 2023",
        description: "Description of your data science internship role.",
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MilestoneStatus {
    Done,
    Active,
    Planned,
}

pub struct Milestone {
    pub title: &'static str,
    pub detail: &'static str,
    pub status: MilestoneStatus,
}

pub struct WorkInProgress {
    pub title: &'static str,
    pub github: &'static str,
    pub status_label: &'static str,
    pub status_hue: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
    pub plan_heading: &'static str,
    pub eta: &'static str,
    pub completion_pct: u32,
    pub milestones: &'static [Milestone],
}

pub const IN_PROGRESS: &[WorkInProgress] = &[
    WorkInProgress {
        title: "AI Code Assistant",
        github: "https://github.com/CodingFreeze/ai-code-assistant",
        status_label: "Active Development",
        status_hue: "bg-green-400",
        summary: "Building an IDE extension that helps developers write better code \
                  through AI-powered suggestions, documentation, and refactoring.",
        stack: &["TypeScript", "React", "OpenAI API"],
        plan_heading: "Progress Highlights",
        eta: "Est. Completion: Q3 2023",
        completion_pct: 65,
        milestones: &[
            Milestone {
                title: "Set up VS Code extension infrastructure",
                detail: "Created the basic extension structure with TypeScript and \
                         VS Code API",
                status: MilestoneStatus::Done,
            },
            Milestone {
                title: "Integrated OpenAI API for code completions",
                detail: "Added support for generating code suggestions based on context",
                status: MilestoneStatus::Done,
            },
            Milestone {
                title: "Building context-aware code documentation",
                detail: "Working on generating documentation for functions and classes",
                status: MilestoneStatus::Planned,
            },
        ],
    },
    WorkInProgress {
        title: "Personal Finance Dashboard",
        github: "https://github.com/CodingFreeze/finance-dashboard",
        status_label: "Planning Phase",
        status_hue: "bg-blue-400",
        summary: "Developing a customizable dashboard for tracking personal finances, \
                  investments, and financial goals with interactive visualizations.",
        stack: &["Next.js", "D3.js", "Firebase"],
        plan_heading: "Project Plan",
        eta: "Est. Completion: Q4 2023",
        completion_pct: 25,
        milestones: &[
            Milestone {
                title: "Research existing finance tools",
                detail: "Analyzed strengths and weaknesses of popular personal finance \
                         applications",
                status: MilestoneStatus::Done,
            },
            Milestone {
                title: "Design UI mockups and user flows",
                detail: "Creating wireframes and interactive prototypes in Figma",
                status: MilestoneStatus::Active,
            },
            Milestone {
                title: "Set up Next.js project and authentication",
                detail: "Planning to implement secure user authentication with NextAuth.js",
                status: MilestoneStatus::Planned,
            },
        ],
    },
];

pub struct CourseTag {
    pub label: &'static str,
    pub classes: &'static str,
}

// Tag chip styling, keyed by discipline.
const THEORY: CourseTag = CourseTag {
    label: "Theory",
    classes: "bg-blue-500/20 text-blue-500 border-blue-500/30",
};
const PRACTICAL: CourseTag = CourseTag {
    label: "Practical",
    classes: "bg-purple-500/20 text-purple-500 border-purple-500/30",
};
const DEVOPS: CourseTag = CourseTag {
    label: "DevOps",
    classes: "bg-green-500/20 text-green-500 border-green-500/30",
};
const RESEARCH: CourseTag = CourseTag {
    label: "Research",
    classes: "bg-orange-500/20 text-orange-500 border-orange-500/30",
};
const FRONTEND: CourseTag = CourseTag {
    label: "Frontend",
    classes: "bg-sky-500/20 text-sky-500 border-sky-500/30",
};
const ALGORITHMS: CourseTag = CourseTag {
    label: "Algorithms",
    classes: "bg-yellow-500/20 text-yellow-500 border-yellow-500/30",
};
const SECURITY: CourseTag = CourseTag {
    label: "Security",
    classes: "bg-red-500/20 text-red-500 border-red-500/30",
};
const ML_AI: CourseTag = CourseTag {
    label: "ML/AI",
    classes: "bg-teal-500/20 text-teal-500 border-teal-500/30",
};
const GRAPHICS: CourseTag = CourseTag {
    label: "Graphics",
    classes: "bg-amber-500/20 text-amber-500 border-amber-500/30",
};
const BLOCKCHAIN: CourseTag = CourseTag {
    label: "Blockchain",
    classes: "bg-amber-500/20 text-amber-500 border-amber-500/30",
};

pub struct Course {
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [CourseTag],
}

pub const COMPLETED_COURSES: &[Course] = &[
    Course {
        name: "Advanced Machine Learning",
        summary: "Deep learning, neural networks, and advanced ML algorithms",
        tags: &[THEORY, PRACTICAL],
    },
    Course {
        name: "Cloud Computing",
        summary: "AWS, Azure, and cloud architecture principles",
        tags: &[DEVOPS, PRACTICAL],
    },
    Course {
        name: "Distributed Systems",
        summary: "System design, scalability, and distributed computing",
        tags: &[THEORY, RESEARCH],
    },
    Course {
        name: "Database Management",
        summary: "SQL, NoSQL, and database optimization techniques",
        tags: &[PRACTICAL, DEVOPS],
    },
    Course {
        name: "Web Development",
        summary: "Full-stack development with modern frameworks and tools",
        tags: &[PRACTICAL, FRONTEND],
    },
    Course {
        name: "Algorithm Design",
        summary: "Advanced algorithms and optimization techniques",
        tags: &[THEORY, ALGORITHMS],
    },
    Course {
        name: "Computer Networks",
        summary: "Network protocols, security, and distributed systems",
        tags: &[THEORY, DEVOPS],
    },
    Course {
        name: "Artificial Intelligence",
        summary: "AI Systems, natural language processing, and computer vision",
        tags: &[THEORY, ML_AI],
    },
];

pub const CURRENT_COURSES: &[Course] = &[
    Course {
        name: "Web Development",
        summary: "Full-stack development with modern frameworks and tools",
        tags: &[PRACTICAL, FRONTEND],
    },
    Course {
        name: "Algorithm Design",
        summary: "Advanced algorithms and optimization techniques",
        tags: &[THEORY, ALGORITHMS],
    },
    Course {
        name: "Computer Networks",
        summary: "Network protocols, security, and distributed systems",
        tags: &[THEORY, DEVOPS],
    },
    Course {
        name: "Artificial Intelligence",
        summary: "AI Systems, natural language processing, and computer vision",
        tags: &[THEORY, ML_AI],
    },
];

pub const UPCOMING_COURSES: &[Course] = &[
    Course {
        name: "Cybersecurity",
        summary: "Network security, ethical hacking, and threat analysis",
        tags: &[SECURITY, PRACTICAL],
    },
    Course {
        name: "Mobile Development",
        summary: "iOS, Android, and cross-platform app development",
        tags: &[PRACTICAL, FRONTEND],
    },
    Course {
        name: "Game Development",
        summary: "Graphics programming, game engines, and interactive design",
        tags: &[PRACTICAL, GRAPHICS],
    },
    Course {
        name: "Blockchain Technology",
        summary: "Cryptocurrency, smart contracts, and decentralized applications",
        tags: &[THEORY, BLOCKCHAIN],
    },
];

pub struct Passion {
    pub name: &'static str,
    pub glyph: &'static str,
    pub blurb: &'static str,
}

pub const TECHNICAL_PASSIONS: &[Passion] = &[
    Passion {
        name: "Algorithms",
        glyph: "🧩",
        blurb: "Solving complex problems through elegant and efficient algorithmic \
                solutions.",
    },
    Passion {
        name: "AI Research",
        glyph: "🧠",
        blurb: "Exploring machine learning models and their applications in solving \
                real-world problems.",
    },
    Passion {
        name: "Open Source",
        glyph: "🌐",
        blurb: "Contributing to and creating projects that benefit the developer \
                community.",
    },
    Passion {
        name: "Data Science",
        glyph: "📊",
        blurb: "Analyzing and visualizing data to extract meaningful insights and \
                patterns.",
    },
];

pub const CREATIVE_PASSIONS: &[Passion] = &[
    Passion {
        name: "Music Production",
        glyph: "🎵",
        blurb: "Creating electronic music, composing, and experimenting with audio \
                processing.",
    },
    Passion {
        name: "Photography",
        glyph: "📷",
        blurb: "Capturing moments and exploring visual storytelling through the lens.",
    },
    Passion {
        name: "Creative Writing",
        glyph: "📖",
        blurb: "Crafting narratives, poetry, and essays to express ideas and emotions.",
    },
    Passion {
        name: "Digital Art",
        glyph: "🎨",
        blurb: "Creating visual designs and illustrations using digital tools and \
                techniques.",
    },
];

pub const LIFESTYLE_PASSIONS: &[Passion] = &[
    Passion {
        name: "Hiking",
        glyph: "🥾",
        blurb: "Exploring nature trails and summiting peaks to reconnect with the \
                natural world.",
    },
    Passion {
        name: "Chess",
        glyph: "♟️",
        blurb: "Enjoying the strategic depth and mental challenge of the royal game.",
    },
    Passion {
        name: "Gaming",
        glyph: "🎮",
        blurb: "Playing story-rich games and competitive esports to unwind and connect \
                with friends.",
    },
    Passion {
        name: "Travel",
        glyph: "🌍",
        blurb: "Exploring diverse cultures, cuisines, and landscapes across the globe.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_project_links_somewhere() {
        for project in PROJECTS {
            assert!(project.github.starts_with("https://github.com/"));
            assert!(project.demo.starts_with("https://"));
            assert!(!project.tech_stack.is_empty());
        }
    }

    #[test]
    fn test_completion_percentages_are_sane() {
        for work in IN_PROGRESS {
            assert!(work.completion_pct <= 100);
            assert!(!work.milestones.is_empty());
        }
    }

    #[test]
    fn test_passion_tabs_are_balanced() {
        assert_eq!(TECHNICAL_PASSIONS.len(), 4);
        assert_eq!(CREATIVE_PASSIONS.len(), 4);
        assert_eq!(LIFESTYLE_PASSIONS.len(), 4);
    }
}
