/// Static portfolio content. Edit these tables to change what the views show.

pub const OWNER_NAME: &str = "Ben Amor Moutie";
pub const OWNER_ROLE: &str = "UI/UX DESIGNER & FRONTEND DEVELOPER";
pub const OWNER_LOCATION: &str = "Available for work · Based in Gabes, Tunisia";
pub const CONTACT_EMAIL: &str = "moutie.benamor@isimg.tn";
pub const GITHUB_URL: &str = "https://github.com/moutiebenamor";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/moutie-ben-amor-3b866025b";

pub fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub const ABOUT_LINES: [&str; 3] = [
    "UI/UX Designer and Frontend Web Developer focused on building user-centered digital products and scalable web applications.",
    "Experienced in React and modern design systems, combining design thinking, development, and marketing strategy to deliver high-performance solutions.",
    "Previously UI/UX Designer at EDC Canada and Marketing Manager at SART Équipement. Passionate about AI-powered technologies and innovative problem-solving.",
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub kind: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub color: u32,
    pub link: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Agency Portfolio",
        kind: "Fullstack Web",
        year: "2026",
        description: "Modern digital agency website showcasing web, mobile, UI/UX, and AI services with optimized performance.",
        tags: &["TypeScript", "React", "AI"],
        color: 0x4A9EFF,
        link: "https://github.com/moutiebenamor/agency-portfolio",
    },
    Project {
        title: "TKM E-Commerce",
        kind: "Bilingual Platform",
        year: "2025",
        description: "A robust Tunisian Kuwaiti House e-commerce platform with secure checkout and scalable frontend architecture.",
        tags: &["React", "E-Commerce", "i18n"],
        color: 0x00C896,
        link: "https://github.com/moutiebenamor/tkm-ecommerce",
    },
    Project {
        title: "Hyper Scroll",
        kind: "Creative Experiment",
        year: "2025",
        description: "A high-fidelity immersive scrolling experience utilizing advanced canvas techniques and micro-interactions.",
        tags: &["JavaScript", "Canvas", "Aesthetics"],
        color: 0xBF00FF,
        link: "https://github.com/moutiebenamor/HYPER_SCROLL",
    },
    Project {
        title: "Voice Assistant",
        kind: "AI Tool",
        year: "2025",
        description: "A modular desktop voice assistant featuring intent detection, memory, and proactive agent capabilities.",
        tags: &["Python", "NLP", "AI"],
        color: 0xFF6B35,
        link: "https://github.com/moutiebenamor/voice-desktop-assistant",
    },
    Project {
        title: "CafeNoBistro",
        kind: "Web Platform",
        year: "2025",
        description: "Restaurant platform with precise UI and structured component architecture for seamless user experience.",
        tags: &["TypeScript", "React", "UI/UX"],
        color: 0xFFD43B,
        link: "https://github.com/moutiebenamor/cafienobistro",
    },
    Project {
        title: "Post Management",
        kind: "CMS Tool",
        year: "2024",
        description: "Full CRUD content management system with structured state handling and dynamic updates.",
        tags: &["JavaScript", "React", "State"],
        color: 0x00C8FF,
        link: "https://github.com/moutiebenamor/post_management",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
}

pub const SKILLS: [Skill; 6] = [
    Skill { name: "React / Frontend", level: 95, category: "Frontend" },
    Skill { name: "UI/UX / Figma", level: 92, category: "Design" },
    Skill { name: "TypeScript / JS", level: 90, category: "Frontend" },
    Skill { name: "Python / Automation", level: 85, category: "Programming" },
    Skill { name: "Digital Marketing", level: 88, category: "Strategy" },
    Skill { name: "Generative AI", level: 80, category: "Innovation" },
];

/// Placement of a project cube in the creative presentation.
#[derive(Debug, Clone, Copy)]
pub struct CreativeProject {
    pub title: &'static str,
    pub kind: &'static str,
    pub color: u32,
    /// Percent of container width.
    pub x: f64,
    /// Percent of container height.
    pub y: f64,
    pub scale: f64,
}

pub const CREATIVE_PROJECTS: [CreativeProject; 6] = [
    CreativeProject { title: "Agency Portfolio", kind: "Web", color: 0x4A9EFF, x: 15.0, y: 25.0, scale: 1.1 },
    CreativeProject { title: "TKM E-Commerce", kind: "Platform", color: 0x00C896, x: 65.0, y: 20.0, scale: 1.0 },
    CreativeProject { title: "Hyper Scroll", kind: "Creative", color: 0xBF00FF, x: 45.0, y: 55.0, scale: 1.2 },
    CreativeProject { title: "Voice Assistant", kind: "AI Tool", color: 0xFF6B35, x: 80.0, y: 70.0, scale: 0.9 },
    CreativeProject { title: "CafeNoBistro", kind: "UI/UX", color: 0xFFD43B, x: 20.0, y: 80.0, scale: 1.0 },
    CreativeProject { title: "Post Management", kind: "CMS", color: 0x00C8FF, x: 85.0, y: 35.0, scale: 0.9 },
];

/// A labeled point of the skills constellation.
///
/// `connections` are outgoing: they are not mirrored onto the target node.
#[derive(Debug, Clone, Copy)]
pub struct ConstellationNode {
    pub name: &'static str,
    /// Percent of container width.
    pub x: f64,
    /// Percent of container height.
    pub y: f64,
    pub size: f64,
    pub connections: &'static [usize],
    pub color: u32,
}

pub const SKILL_NODES: [ConstellationNode; 6] = [
    ConstellationNode { name: "React", x: 50.0, y: 30.0, size: 14.0, connections: &[1, 2], color: 0x61DAFB },
    ConstellationNode { name: "Figma", x: 20.0, y: 55.0, size: 12.0, connections: &[0, 3], color: 0xBF00FF },
    ConstellationNode { name: "TypeScript", x: 75.0, y: 50.0, size: 11.0, connections: &[0, 4], color: 0x3178C6 },
    ConstellationNode { name: "Python", x: 30.0, y: 80.0, size: 10.0, connections: &[1], color: 0xFF6B35 },
    ConstellationNode { name: "Marketing", x: 70.0, y: 75.0, size: 11.0, connections: &[2, 5], color: 0x84CE49 },
    ConstellationNode { name: "AI", x: 50.0, y: 85.0, size: 10.0, connections: &[4], color: 0xFFD43B },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_connections_in_range() {
        for node in &SKILL_NODES {
            assert!(node.connections.iter().all(|&j| j < SKILL_NODES.len()));
        }
    }

    #[test]
    fn test_creative_projects_mirror_projects() {
        for (p, c) in PROJECTS.iter().zip(CREATIVE_PROJECTS.iter()) {
            assert_eq!(p.title, c.title);
            assert_eq!(p.color, c.color);
        }
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
        assert_eq!(mailto(), "mailto:moutie.benamor@isimg.tn");
    }
}
