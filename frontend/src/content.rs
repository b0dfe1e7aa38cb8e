// Site copy. Order matters: slides and skill rows render in this order.

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
}

pub struct Skill {
    pub subject: &'static str,
    pub level: f64, // 0..=100
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub const OWNER_NAME: &str = "Md Umor";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Services", section_id: "skills" },
    NavItem { label: "Work", section_id: "projects" },
    NavItem { label: "About", section_id: "about" },
    NavItem { label: "Contact", section_id: "contact" },
];

pub const SKILLS: &[Skill] = &[
    Skill { subject: "React/Frontend", level: 95.0 },
    Skill { subject: "Java", level: 85.0 },
    Skill { subject: "Python/AI", level: 90.0 },
    Skill { subject: "C#/.NET", level: 80.0 },
    Skill { subject: "Web Design", level: 90.0 },
    Skill { subject: "Automation", level: 85.0 },
];

pub const TECH_TAGS: &[&str] = &[
    "Git", "Docker", "AWS", "SQL", "MongoDB", "Redis", "GraphQL", "Tailwind", "Figma", "Linux",
];

pub const CORE_STACK: &[&str] = &[
    "React / Next.js Environment",
    "Python Automation Scripting",
    "Java Spring Boot Backend",
    "n8n AI Integration",
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "AI Automation Suite",
        description: "A comprehensive automated workflow system using Python and n8n to streamline business processes.",
        tags: &["Python", "AI", "Automation"],
        image: "https://picsum.photos/600/400?random=1",
    },
    Project {
        id: 2,
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution built with React and Java Spring Boot featuring real-time inventory.",
        tags: &["React", "Java", "Spring Boot"],
        image: "https://picsum.photos/600/400?random=2",
    },
    Project {
        id: 3,
        title: "Financial Dashboard",
        description: "Interactive financial data visualization dashboard using C# and React.",
        tags: &["C#", "React", "Data Viz"],
        image: "https://picsum.photos/600/400?random=3",
    },
    Project {
        id: 4,
        title: "Modern Portfolio Template",
        description: "A high-performance, visually stunning portfolio template for developers.",
        tags: &["HTML", "CSS", "JavaScript"],
        image: "https://picsum.photos/600/400?random=4",
    },
];

pub const SERVICES: &[Service] = &[
    Service { title: "Backend Engineering", description: "Java, Python, C#, Node.js" },
    Service { title: "Interface Design", description: "Figma, Tailwind, UI/UX" },
    Service { title: "AI Integration", description: "n8n, LLMs, Automation" },
    Service { title: "Full Stack Web", description: "React, Next.js, TypeScript" },
];

pub fn skill_levels() -> Vec<f64> {
    SKILLS.iter().map(|skill| skill.level).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::slide_sequencer::SLIDE_COUNT;

    #[test]
    fn one_project_per_slide() {
        assert_eq!(PROJECTS.len(), SLIDE_COUNT);
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(skill_levels().iter().all(|level| (0.0..=100.0).contains(level)));
        assert_eq!(skill_levels().len(), SKILLS.len());
    }
}
