use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Level {
    pub fn bar_class(self) -> &'static str {
        match self {
            Self::Expert => "bg-gradient-to-r from-pink-500 to-rose-500",
            Self::Advanced => "bg-gradient-to-r from-purple-500 to-violet-500",
            Self::Intermediate => "bg-gradient-to-r from-orange-500 to-amber-500",
            Self::Beginner => "bg-gradient-to-r from-green-500 to-emerald-500",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Expert => "bg-pink-100 text-pink-800 border-pink-200",
            Self::Advanced => "bg-purple-100 text-purple-800 border-purple-200",
            Self::Intermediate => "bg-orange-100 text-orange-800 border-orange-200",
            Self::Beginner => "bg-green-100 text-green-800 border-green-200",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sparkles,
    Code,
    Database,
    Wrench,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Sparkles => "✨",
            Self::Code => "💻",
            Self::Database => "🗄️",
            Self::Wrench => "🔧",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: Level,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub average: u8,
    pub certifications: u8,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: Level, percentage: u8) -> Skill {
    Skill {
        name,
        level,
        percentage,
    }
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Blockchain & Web3",
        icon: Icon::Sparkles,
        average: 58,
        certifications: 0,
        skills: &[
            skill("Solidity", Level::Beginner, 55),
            skill("Layer 1/2 Protocols", Level::Beginner, 50),
            skill("Vyper", Level::Advanced, 70),
        ],
    },
    SkillCategory {
        title: "Frontend Development",
        icon: Icon::Code,
        average: 76,
        certifications: 2,
        skills: &[
            skill("React", Level::Intermediate, 65),
            skill("JavaScript", Level::Intermediate, 60),
            skill("HTML", Level::Expert, 95),
        ],
    },
    SkillCategory {
        title: "Backend Development",
        icon: Icon::Database,
        average: 69,
        certifications: 1,
        skills: &[
            skill("Firebase", Level::Advanced, 80),
            skill("PHP", Level::Intermediate, 60),
            skill("MySQL", Level::Advanced, 80),
        ],
    },
    SkillCategory {
        title: "Tools & Others",
        icon: Icon::Wrench,
        average: 68,
        certifications: 2,
        skills: &[
            skill("G-Developer", Level::Advanced, 75),
            skill("Construct 2", Level::Intermediate, 65),
            skill("Photoshop", Level::Intermediate, 65),
        ],
    },
];

/// Technologies worked with overall; the cards only list a few per category.
pub const TECHNOLOGIES_USED: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

/// Builds the statistics panel from the category data.
pub fn stats(categories: &[SkillCategory]) -> Vec<Stat> {
    let certifications: u32 = categories.iter().map(|c| c.certifications as u32).sum();
    let listed: usize = categories.iter().map(|c| c.skills.len()).sum();
    let technologies = listed.max(TECHNOLOGIES_USED);
    let avg_proficiency = if categories.is_empty() {
        0
    } else {
        let total: u32 = categories.iter().map(|c| c.average as u32).sum();
        (total as f64 / categories.len() as f64).round() as u32
    };

    vec![
        Stat {
            value: format!("{}+", certifications),
            label: "Certifications",
            color: "text-pink-600",
            emoji: "🏆",
        },
        Stat {
            value: format!("{}+", technologies),
            label: "Technologies",
            color: "text-purple-600",
            emoji: "⚡",
        },
        Stat {
            value: format!("{}%", avg_proficiency),
            label: "Avg Proficiency",
            color: "text-orange-600",
            emoji: "📊",
        },
        Stat {
            value: categories.len().to_string(),
            label: "Skill Categories",
            color: "text-rose-600",
            emoji: "🎯",
        },
    ]
}
