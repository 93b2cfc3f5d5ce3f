//! Compiled-in taxonomy seeds: areas and niches.
//!
//! These lists are the source of truth for the two fixed taxonomy levels.
//! Sync upserts them on every run; rows are never deleted, so removing an
//! entry here only stops it from being refreshed.

pub struct AreaSeed {
    pub area_type: &'static str,
    pub name_en: &'static str,
    pub name_pt: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub sort_order: i32,
}

pub struct NicheSeed {
    pub slug: &'static str,
    pub area_type: &'static str,
    pub name_en: &'static str,
    pub name_pt: &'static str,
    pub icon: &'static str,
    pub sort_order: i32,
}

pub const AREAS: &[AreaSeed] = &[
    AreaSeed {
        area_type: "development",
        name_en: "Development",
        name_pt: "Desenvolvimento",
        icon: "code",
        color: "#3B82F6",
        sort_order: 1,
    },
    AreaSeed {
        area_type: "infrastructure",
        name_en: "Infrastructure",
        name_pt: "Infraestrutura",
        icon: "server",
        color: "#8B5CF6",
        sort_order: 2,
    },
    AreaSeed {
        area_type: "data",
        name_en: "Data & AI",
        name_pt: "Dados & IA",
        icon: "chart-bar",
        color: "#10B981",
        sort_order: 3,
    },
    AreaSeed {
        area_type: "design",
        name_en: "Design",
        name_pt: "Design",
        icon: "pen-tool",
        color: "#F59E0B",
        sort_order: 4,
    },
    AreaSeed {
        area_type: "management",
        name_en: "Management",
        name_pt: "Gestão",
        icon: "users",
        color: "#EF4444",
        sort_order: 5,
    },
];

pub const NICHES: &[NicheSeed] = &[
    // development
    NicheSeed { slug: "frontend", area_type: "development", name_en: "Frontend", name_pt: "Frontend", icon: "layout", sort_order: 1 },
    NicheSeed { slug: "backend", area_type: "development", name_en: "Backend", name_pt: "Backend", icon: "cpu", sort_order: 2 },
    NicheSeed { slug: "mobile", area_type: "development", name_en: "Mobile", name_pt: "Mobile", icon: "smartphone", sort_order: 3 },
    NicheSeed { slug: "games", area_type: "development", name_en: "Game Development", name_pt: "Desenvolvimento de Jogos", icon: "gamepad", sort_order: 4 },
    NicheSeed { slug: "blockchain", area_type: "development", name_en: "Blockchain", name_pt: "Blockchain", icon: "link", sort_order: 5 },
    NicheSeed { slug: "testing", area_type: "development", name_en: "Testing & QA", name_pt: "Testes & QA", icon: "check-circle", sort_order: 6 },
    NicheSeed { slug: "developer-tools", area_type: "development", name_en: "Developer Tools", name_pt: "Ferramentas de Desenvolvimento", icon: "tool", sort_order: 7 },
    // infrastructure
    NicheSeed { slug: "devops", area_type: "infrastructure", name_en: "DevOps", name_pt: "DevOps", icon: "refresh-cw", sort_order: 1 },
    NicheSeed { slug: "cloud", area_type: "infrastructure", name_en: "Cloud", name_pt: "Nuvem", icon: "cloud", sort_order: 2 },
    NicheSeed { slug: "databases", area_type: "infrastructure", name_en: "Databases", name_pt: "Bancos de Dados", icon: "database", sort_order: 3 },
    NicheSeed { slug: "security", area_type: "infrastructure", name_en: "Security", name_pt: "Segurança", icon: "shield", sort_order: 4 },
    // data
    NicheSeed { slug: "data-science", area_type: "data", name_en: "Data Science", name_pt: "Ciência de Dados", icon: "trending-up", sort_order: 1 },
    NicheSeed { slug: "machine-learning", area_type: "data", name_en: "Machine Learning", name_pt: "Aprendizado de Máquina", icon: "brain", sort_order: 2 },
    NicheSeed { slug: "data-engineering", area_type: "data", name_en: "Data Engineering", name_pt: "Engenharia de Dados", icon: "git-merge", sort_order: 3 },
    // design
    NicheSeed { slug: "ui-ux", area_type: "design", name_en: "UI/UX", name_pt: "UI/UX", icon: "figma", sort_order: 1 },
    NicheSeed { slug: "graphic-design", area_type: "design", name_en: "Graphic Design", name_pt: "Design Gráfico", icon: "image", sort_order: 2 },
    // management
    NicheSeed { slug: "agile", area_type: "management", name_en: "Agile & Methodologies", name_pt: "Metodologias Ágeis", icon: "repeat", sort_order: 1 },
    NicheSeed { slug: "product", area_type: "management", name_en: "Product", name_pt: "Produto", icon: "box", sort_order: 2 },
    NicheSeed { slug: "collaboration", area_type: "management", name_en: "Collaboration", name_pt: "Colaboração", icon: "message-circle", sort_order: 3 },
];
