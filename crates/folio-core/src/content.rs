//! Fixed copy for the home page sections.

use crate::embed::Particle;
use crate::motion::{TextMode, TextOptions};
use crate::routes::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: SectionId,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", section: SectionId::Hero },
    NavItem { label: "Projects", section: SectionId::Projects },
    NavItem { label: "About", section: SectionId::About },
    NavItem { label: "Skills", section: SectionId::Skills },
    NavItem { label: "Contact", section: SectionId::Contact },
];

pub const HERO_GREETING: &str = "Hi, I'm";
pub const HERO_NAME: &str = "Your Name";
pub const HERO_TAGLINE: &str = "I craft beautiful, interactive digital experiences with modern technologies. Let's build something amazing together.";
pub const HERO_BADGE: &str = "Available for work";

/// Both title lines wave in letter by letter, the name right after the greeting.
pub const HERO_TITLE_MODE: TextMode = TextMode::Wave;
const HERO_TITLE_STAGGER_MS: u64 = 50;
const HERO_NAME_DELAY_MS: u64 = 300;

pub fn hero_greeting_options() -> TextOptions {
    TextOptions::default().stagger_ms(HERO_TITLE_STAGGER_MS)
}

pub fn hero_name_options() -> TextOptions {
    hero_greeting_options().delay_ms(HERO_NAME_DELAY_MS)
}

/// Fixed layout for the scene placeholder's drifting dots.
pub const SCENE_PARTICLES: [Particle; 20] = [
    Particle { left_pct: 5.0, top_pct: 10.0, delay: 0.0, period: 2.5 },
    Particle { left_pct: 15.0, top_pct: 80.0, delay: 0.3, period: 3.0 },
    Particle { left_pct: 25.0, top_pct: 30.0, delay: 0.6, period: 2.8 },
    Particle { left_pct: 35.0, top_pct: 60.0, delay: 0.9, period: 3.2 },
    Particle { left_pct: 45.0, top_pct: 20.0, delay: 1.2, period: 2.6 },
    Particle { left_pct: 55.0, top_pct: 90.0, delay: 1.5, period: 3.4 },
    Particle { left_pct: 65.0, top_pct: 45.0, delay: 0.2, period: 2.9 },
    Particle { left_pct: 75.0, top_pct: 15.0, delay: 0.5, period: 3.1 },
    Particle { left_pct: 85.0, top_pct: 70.0, delay: 0.8, period: 2.7 },
    Particle { left_pct: 95.0, top_pct: 40.0, delay: 1.1, period: 3.3 },
    Particle { left_pct: 10.0, top_pct: 55.0, delay: 1.4, period: 2.4 },
    Particle { left_pct: 20.0, top_pct: 85.0, delay: 0.1, period: 3.5 },
    Particle { left_pct: 30.0, top_pct: 25.0, delay: 0.4, period: 2.5 },
    Particle { left_pct: 40.0, top_pct: 75.0, delay: 0.7, period: 3.0 },
    Particle { left_pct: 50.0, top_pct: 5.0, delay: 1.0, period: 2.8 },
    Particle { left_pct: 60.0, top_pct: 65.0, delay: 1.3, period: 3.2 },
    Particle { left_pct: 70.0, top_pct: 35.0, delay: 0.25, period: 2.6 },
    Particle { left_pct: 80.0, top_pct: 95.0, delay: 0.55, period: 3.4 },
    Particle { left_pct: 90.0, top_pct: 50.0, delay: 0.85, period: 2.9 },
    Particle { left_pct: 12.0, top_pct: 42.0, delay: 1.15, period: 3.1 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "50+", label: "Projects" },
    Stat { value: "5+", label: "Years Exp." },
    Stat { value: "30+", label: "Happy Clients" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Timeline entries alternate, starting on the left.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Horizontal offset the entry slides in from.
    pub fn entry_offset(self) -> f32 {
        match self {
            Side::Left => -50.0,
            Side::Right => 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub years: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        years: "2023 - Present",
        title: "Senior Frontend Developer",
        company: "Tech Innovators Inc.",
        description: "Leading frontend architecture and building scalable design systems with React and TypeScript.",
        icon: "🚀",
    },
    TimelineEntry {
        years: "2021 - 2023",
        title: "Full Stack Developer",
        company: "Digital Agency Co.",
        description: "Developed full-stack applications and mentored junior developers on best practices.",
        icon: "💻",
    },
    TimelineEntry {
        years: "2019 - 2021",
        title: "Frontend Developer",
        company: "Startup Labs",
        description: "Built interactive web applications and implemented responsive design systems.",
        icon: "⚡",
    },
    TimelineEntry {
        years: "2017 - 2019",
        title: "Junior Developer",
        company: "Code Academy",
        description: "Started my journey in web development, learning modern frameworks and tools.",
        icon: "🌱",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
}

pub const SKILLS: [Skill; 9] = [
    Skill { name: "React / Next.js", category: SkillCategory::Frontend },
    Skill { name: "TypeScript", category: SkillCategory::Frontend },
    Skill { name: "Tailwind CSS", category: SkillCategory::Frontend },
    Skill { name: "Node.js", category: SkillCategory::Backend },
    Skill { name: "Python", category: SkillCategory::Backend },
    Skill { name: "PostgreSQL", category: SkillCategory::Backend },
    Skill { name: "Git", category: SkillCategory::Tools },
    Skill { name: "Figma", category: SkillCategory::Tools },
    Skill { name: "Docker", category: SkillCategory::Tools },
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "Email", href: "mailto:hello@example.com", icon: "📧", label: "hello@example.com" },
    SocialLink { name: "GitHub", href: "https://github.com", icon: "🐙", label: "@username" },
    SocialLink { name: "LinkedIn", href: "https://linkedin.com", icon: "💼", label: "/in/username" },
    SocialLink { name: "Twitter", href: "https://twitter.com", icon: "🐦", label: "@username" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_skills_per_category() {
        for c in [SkillCategory::Frontend, SkillCategory::Backend, SkillCategory::Tools] {
            assert_eq!(skills_in(c).count(), 3);
        }
    }

    #[test]
    fn particles_stay_inside_the_placeholder() {
        for p in SCENE_PARTICLES {
            assert!((0.0..=100.0).contains(&p.left_pct) && (0.0..=100.0).contains(&p.top_pct));
            assert!(p.period > 0.0 && p.delay < p.period);
        }
    }

    #[test]
    fn timeline_alternates() {
        let sides: Vec<_> = (0..TIMELINE.len()).map(Side::for_index).collect();
        assert_eq!(sides, vec![Side::Left, Side::Right, Side::Left, Side::Right]);
    }
}
