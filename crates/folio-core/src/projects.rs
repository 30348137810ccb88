//! Static project table, keyed by slug.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub fn css(&self) -> String {
        format!("linear-gradient(135deg, {}, {})", self.from, self.to)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    pub live: Option<&'static str>,
    pub source: Option<&'static str>,
}

impl ProjectLinks {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_none() && self.source.is_none()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    /// Card blurb on the projects grid.
    pub summary: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tags: &'static [&'static str],
    pub color: Gradient,
    pub year: &'static str,
    pub client: &'static str,
    pub role: &'static str,
    pub links: ProjectLinks,
    pub gallery: &'static [&'static str],
    pub features: &'static [&'static str],
    pub featured: bool,
}

const CARD_TAGS: usize = 3;

impl ProjectRecord {
    /// Tags shown on the grid card.
    pub fn card_tags(&self) -> &'static [&'static str] {
        &self.tags[..self.tags.len().min(CARD_TAGS)]
    }

    pub fn href(&self) -> String {
        format!("/projects/{}", self.slug)
    }
}

const EXAMPLE_SITE: &str = "https://example.com";
const GITHUB: &str = "https://github.com";

pub static PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        id: 1,
        slug: "project-one",
        title: "E-Commerce Platform",
        summary: "A modern e-commerce solution with real-time inventory and AI-powered recommendations.",
        description: "A modern e-commerce solution with real-time inventory and AI-powered recommendations.",
        long_description: "A comprehensive e-commerce platform built with modern technologies. Features include real-time inventory management, AI-powered product recommendations, seamless checkout experience, and an intuitive admin dashboard for store management.",
        tags: &["Next.js", "TypeScript", "Tailwind", "Stripe", "PostgreSQL"],
        color: Gradient { from: "#8b5cf6", to: "#a855f7" },
        year: "2024",
        client: "TechRetail Inc.",
        role: "Lead Frontend Developer",
        links: ProjectLinks { live: Some(EXAMPLE_SITE), source: Some(GITHUB) },
        gallery: &["/projects/project-1-1.jpg", "/projects/project-1-2.jpg", "/projects/project-1-3.jpg"],
        features: &[
            "Real-time inventory synchronization",
            "AI-powered product recommendations",
            "Multi-currency support",
            "Advanced analytics dashboard",
            "Mobile-first responsive design",
        ],
        featured: true,
    },
    ProjectRecord {
        id: 2,
        slug: "project-two",
        title: "SaaS Dashboard",
        summary: "Analytics dashboard with interactive charts, real-time data, and custom reporting.",
        description: "Analytics dashboard with interactive charts and real-time data.",
        long_description: "A powerful analytics dashboard designed for SaaS companies. Provides real-time insights, customizable reports, and interactive data visualizations to help businesses make data-driven decisions.",
        tags: &["React", "D3.js", "Node.js", "MongoDB", "WebSocket"],
        color: Gradient { from: "#3b82f6", to: "#06b6d4" },
        year: "2023",
        client: "DataFlow Systems",
        role: "Full Stack Developer",
        links: ProjectLinks { live: Some(EXAMPLE_SITE), source: Some(GITHUB) },
        gallery: &["/projects/project-2-1.jpg", "/projects/project-2-2.jpg", "/projects/project-2-3.jpg"],
        features: &[
            "Real-time data streaming",
            "Custom report builder",
            "Interactive chart library",
            "Team collaboration features",
            "Export to multiple formats",
        ],
        featured: true,
    },
    ProjectRecord {
        id: 3,
        slug: "project-three",
        title: "Mobile Banking App",
        summary: "Secure mobile banking application with biometric authentication and real-time transactions.",
        description: "Secure mobile banking with biometric auth and real-time transactions.",
        long_description: "A secure and user-friendly mobile banking application featuring biometric authentication, instant transfers, bill payments, and comprehensive financial management tools.",
        tags: &["React Native", "Firebase", "Stripe", "Node.js"],
        color: Gradient { from: "#10b981", to: "#14b8a6" },
        year: "2023",
        client: "FinTech Solutions",
        role: "Mobile Developer",
        links: ProjectLinks { live: Some(EXAMPLE_SITE), source: None },
        gallery: &["/projects/project-3-1.jpg", "/projects/project-3-2.jpg", "/projects/project-3-3.jpg"],
        features: &[
            "Biometric authentication",
            "Instant P2P transfers",
            "Bill payment automation",
            "Spending analytics",
            "Multi-account management",
        ],
        featured: true,
    },
    ProjectRecord {
        id: 4,
        slug: "project-four",
        title: "3D Portfolio Experience",
        summary: "Interactive 3D portfolio with WebGL, particle systems, and immersive navigation.",
        description: "Interactive 3D portfolio with WebGL and particle systems.",
        long_description: "An immersive 3D portfolio experience built with Three.js and WebGL. Features include interactive 3D navigation, particle systems, dynamic lighting, and scroll-based animations.",
        tags: &["Three.js", "GSAP", "WebGL", "React"],
        color: Gradient { from: "#f97316", to: "#ef4444" },
        year: "2024",
        client: "Personal Project",
        role: "Creative Developer",
        links: ProjectLinks { live: None, source: Some(GITHUB) },
        gallery: &["/projects/project-4-1.jpg", "/projects/project-4-2.jpg", "/projects/project-4-3.jpg"],
        features: &[
            "3D interactive navigation",
            "Custom particle systems",
            "Dynamic lighting effects",
            "Scroll-based animations",
            "Performance optimized",
        ],
        featured: false,
    },
    ProjectRecord {
        id: 5,
        slug: "project-five",
        title: "AI Content Generator",
        summary: "AI-powered platform for generating marketing content, social posts, and blog articles.",
        description: "AI-powered platform for generating marketing content.",
        long_description: "An AI-powered content generation platform that helps marketers create engaging social media posts, blog articles, and marketing copy in seconds using advanced language models.",
        tags: &["OpenAI", "Next.js", "MongoDB", "Tailwind"],
        color: Gradient { from: "#ec4899", to: "#f43f5e" },
        year: "2024",
        client: "ContentAI Co.",
        role: "Full Stack Developer",
        links: ProjectLinks { live: Some(EXAMPLE_SITE), source: None },
        gallery: &["/projects/project-5-1.jpg", "/projects/project-5-2.jpg", "/projects/project-5-3.jpg"],
        features: &[
            "Multiple content formats",
            "Brand voice customization",
            "SEO optimization",
            "Content scheduling",
            "Analytics integration",
        ],
        featured: false,
    },
    ProjectRecord {
        id: 6,
        slug: "project-six",
        title: "Real Estate Platform",
        summary: "Property listing platform with virtual tours, mortgage calculator, and agent matching.",
        description: "Property listing with virtual tours and mortgage calculator.",
        long_description: "A comprehensive real estate platform featuring property listings with virtual 3D tours, advanced search filters, mortgage calculator, and agent matching system.",
        tags: &["Vue.js", "Three.js", "PostgreSQL", "Node.js"],
        color: Gradient { from: "#6366f1", to: "#8b5cf6" },
        year: "2023",
        client: "HomeFind Inc.",
        role: "Lead Developer",
        links: ProjectLinks { live: Some(EXAMPLE_SITE), source: None },
        gallery: &["/projects/project-6-1.jpg", "/projects/project-6-2.jpg", "/projects/project-6-3.jpg"],
        features: &[
            "Virtual 3D property tours",
            "Advanced search filters",
            "Mortgage calculator",
            "Agent matching system",
            "Saved searches & alerts",
        ],
        featured: false,
    },
];

/// An unknown slug is an expected outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectLookup {
    Found(&'static ProjectRecord),
    NotFound { slug: String },
}

impl ProjectLookup {
    pub fn found(&self) -> Option<&'static ProjectRecord> {
        match self {
            ProjectLookup::Found(p) => Some(p),
            ProjectLookup::NotFound { .. } => None,
        }
    }
}

pub fn lookup(slug: &str) -> ProjectLookup {
    match PROJECTS.iter().find(|p| p.slug == slug) {
        Some(p) => ProjectLookup::Found(p),
        None => ProjectLookup::NotFound {
            slug: slug.to_string(),
        },
    }
}

#[inline]
pub fn all() -> &'static [ProjectRecord] {
    &PROJECTS
}

pub fn slugs() -> impl Iterator<Item = &'static str> {
    PROJECTS.iter().map(|p| p.slug)
}
