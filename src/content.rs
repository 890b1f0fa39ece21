//! Everything the page says.

pub const FULL_NAME: &str = "Hamoudi Benarba";
pub const DISPLAY_NAME: &str = "Dr. Hamoudi";
pub const ROLE: &str = "EFL/ESL Educator, Trainer & Researcher";
pub const EMAIL: &str = "hamoudibenarba@gmail.com";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/hamoudi-benarba-08b46b161/";
pub const WHATSAPP: &str = "https://wa.me/905358163762";
pub const HERO_IMAGE: &str = "/images/HeroImage.webp";
pub const PORTRAIT_IMAGE: &str = "/images/Portrait.png";
pub const DEVELOPER_SITE: &str = "https://salahmed-ctrlz.github.io/salaheddine-medkour-portfolio/";

/// Ids of the page sections, top to bottom.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "education", "services", "contact"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Emoji rendered as text.
    Glyph(&'static str),
    /// Icon font class (devicon).
    Font(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub static NAVIGATION: [NavItem; 5] = [
    NavItem {
        name: "Home",
        href: "#home",
    },
    NavItem {
        name: "About",
        href: "#about",
    },
    NavItem {
        name: "Education & Experience",
        href: "#education",
    },
    NavItem {
        name: "Services",
        href: "#services",
    },
    NavItem {
        name: "Contact",
        href: "#contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
    pub suffix: &'static str,
    /// Shown instead of the counter when set.
    pub special: Option<&'static str>,
}

pub static STATS: [Stat; 3] = [
    Stat {
        value: 8,
        label: "Years of Experience",
        suffix: "+",
        special: None,
    },
    Stat {
        value: 5,
        label: "Institutions Served",
        suffix: "+",
        special: None,
    },
    Stat {
        value: 1,
        label: "PhD Candidate",
        suffix: "",
        special: Some("PhD"),
    },
];

impl Stat {
    pub fn display(&self, count: u32) -> String {
        match self.special {
            Some(label) => label.to_string(),
            None => format!("{count}{}", self.suffix),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: Icon,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "LinkedIn",
        icon: Icon::Font("devicon-linkedin-plain"),
        href: LINKEDIN,
    },
    SocialLink {
        name: "ResearchGate",
        icon: Icon::Glyph("🔬"),
        href: "https://www.researchgate.net/profile/Hamoudi-Benarba",
    },
    SocialLink {
        name: "Academia",
        icon: Icon::Glyph("🏛"),
        href: "https://independent.academia.edu/benarbahamoudi",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineItem {
    pub year: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: &'static str,
}

pub static TIMELINE: [TimelineItem; 4] = [
    TimelineItem {
        year: "2014-2019",
        title: "Teacher Education",
        institution: "École Normale Supérieure Assia Djebar, Constantine",
        description: "Five years of rigorous teacher education at this distinguished teacher training institution. Graduated as the valedictorian of the class of 2019. Training encompassed both theoretical and practical components, complemented by relevant research work in English literature and civilization.",
        icon: Icon::Glyph("🎓"),
        color: "#3B82F6",
    },
    TimelineItem {
        year: "2019-2021",
        title: "MA in Didactics of Foreign Languages (ELT)",
        institution: "Oum El Bouaghi University",
        description: "Pursued advanced studies in English Language Teaching while working as a secondary school teacher. Focused on reflective teaching, textbook evaluation, and material adaptation initiatives to enhance student academic performance.",
        icon: Icon::Glyph("🎓"),
        color: "#8B5CF6",
    },
    TimelineItem {
        year: "2021-Present",
        title: "PhD Candidate & Adjunct Lecturer",
        institution: "University of Béchar & Multiple Institutions",
        description: "Successfully qualified for the national PhD competition at the University of Béchar. Served as adjunct lecturer at OEB University, ENSC Teacher Training College, University of Constantine 3, and École Supérieure de Comptabilité et de Finances.",
        icon: Icon::Glyph("💼"),
        color: "#10B981",
    },
    TimelineItem {
        year: "2024",
        title: "International Academic Internship",
        institution: "Turkey",
        description: "One-year academic and professional internship where he taught English in an ESL context and conducted research on blended learning models in second language instruction. This expanded intercultural understanding and reinforced commitment to fostering globally competent English learners.",
        icon: Icon::Glyph("🌐"),
        color: "#F59E0B",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: &'static str,
}

pub static SERVICES: [Service; 6] = [
    Service {
        name: "CEFR English Courses",
        description: "Comprehensive courses for all levels (A1-C2) focusing on practical language skills.",
        icon: Icon::Glyph("🧑‍🎓"),
        color: "#3B82F6",
    },
    Service {
        name: "Teacher Training",
        description: "Workshops and programs on modern teaching methodologies and classroom management.",
        icon: Icon::Glyph("🧑‍🏫"),
        color: "#8B5CF6",
    },
    Service {
        name: "Academic Consultation",
        description: "Expert guidance on curriculum design, assessment strategies, and educational research.",
        icon: Icon::Glyph("🧪"),
        color: "#06B6D4",
    },
    Service {
        name: "Translation Services",
        description: "Professional translation between English and Arabic for various documents.",
        icon: Icon::Glyph("🔤"),
        color: "#10B981",
    },
    Service {
        name: "Academic Writing",
        description: "Assistance and workshops on research papers, theses, and academic publications.",
        icon: Icon::Glyph("📖"),
        color: "#F59E0B",
    },
    Service {
        name: "Certification Prep",
        description: "Preparation courses for international English proficiency tests like IELTS and TOEFL.",
        icon: Icon::Glyph("📜"),
        color: "#EC4899",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub name: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub icon: Icon,
    pub color: &'static str,
}

impl ContactMethod {
    /// Web links open in a new tab; `mailto:` and friends stay in place.
    pub fn opens_new_tab(&self) -> bool {
        self.href.is_some_and(|href| href.starts_with("http"))
    }
}

pub static CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        name: "Email",
        value: EMAIL,
        href: Some("mailto:hamoudibenarba@gmail.com"),
        icon: Icon::Glyph("✉️"),
        color: "#FF9500",
    },
    ContactMethod {
        name: "Call Me",
        value: "+90 535 816 3762",
        href: Some(WHATSAPP),
        icon: Icon::Glyph("💬"),
        color: "#25D366",
    },
    ContactMethod {
        name: "LinkedIn",
        value: FULL_NAME,
        href: Some(LINKEDIN),
        icon: Icon::Font("devicon-linkedin-plain"),
        color: "#0077B5",
    },
    ContactMethod {
        name: "Location",
        value: "Algeria / Turkey",
        href: None,
        icon: Icon::Glyph("📍"),
        color: "#8B8BFF",
    },
];

/// Translucent tint of an accent colour (`#RRGGBB` plus a `15` alpha byte).
pub fn tint(color: &str) -> String {
    format!("{color}15")
}

/// Placeholder text for a missing portrait: first letters of the first and
/// last words.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return "?".to_string();
    };
    let first_letter = |w: &str| w.chars().next().into_iter().flat_map(char::to_uppercase);
    let mut out = first_letter(first).collect::<String>();
    if let Some(last) = words.last() {
        out.extend(first_letter(last));
    }
    out
}
