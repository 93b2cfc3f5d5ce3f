//! Search-enrichment tables: aliases (alternative spellings the search
//! treats as exact hits) and keywords (related terms). Keyed by slug;
//! missing entries mean empty sets.

pub const SKILL_ALIASES: &[(&str, &[&str])] = &[
    ("react", &["reactjs", "react.js"]),
    ("vue-js", &["vue", "vuejs"]),
    ("next-js", &["nextjs"]),
    ("nuxt-js", &["nuxtjs"]),
    ("angular", &["angularjs"]),
    ("node-js", &["node", "nodejs"]),
    ("postgresql", &["postgres", "pgsql"]),
    ("mongodb", &["mongo"]),
    ("kubernetes", &["k8s"]),
    ("amazon-web-services", &["aws"]),
    ("google-cloud-platform", &["gcp"]),
    ("visual-studio-code", &["vscode", "vs-code"]),
    ("tailwind-css", &["tailwind", "tailwindcss"]),
    ("machine-learning", &["ml"]),
    ("continuous-integration", &["ci", "ci-cd"]),
    ("continuous-deployment", &["cd"]),
    ("ruby-on-rails", &["rails", "ror"]),
    ("spring-boot", &["springboot"]),
    ("apache-kafka", &["kafka"]),
    ("apache-spark", &["spark"]),
    ("elasticsearch", &["elastic", "es"]),
    ("ionic-framework", &["ionic"]),
    ("unity3d", &["unity"]),
    ("oauth-2-0", &["oauth", "oauth2"]),
    ("solid-principles", &["solid"]),
];

pub const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("react", &["frontend", "spa", "components", "ui"]),
    ("angular", &["frontend", "spa", "typescript"]),
    ("vue-js", &["frontend", "spa", "components"]),
    ("django", &["backend", "python", "orm"]),
    ("flask", &["backend", "python", "microframework"]),
    ("spring-boot", &["backend", "java", "microservices"]),
    ("laravel", &["backend", "php", "mvc"]),
    ("flutter", &["mobile", "cross-platform", "dart"]),
    ("react-native", &["mobile", "cross-platform", "javascript"]),
    ("mysql", &["sql", "relational", "database"]),
    ("postgresql", &["sql", "relational", "database"]),
    ("mongodb", &["nosql", "documents", "database"]),
    ("redis", &["cache", "key-value", "in-memory"]),
    ("docker", &["containers", "devops", "images"]),
    ("kubernetes", &["orchestration", "containers", "devops"]),
    ("terraform", &["iac", "infrastructure", "provisioning"]),
    ("ansible", &["automation", "configuration-management"]),
    ("jenkins", &["ci", "automation", "pipelines"]),
    ("github-actions", &["ci", "automation", "workflows"]),
    ("pandas", &["dataframes", "analysis", "python"]),
    ("numpy", &["arrays", "numerical", "python"]),
    ("tensorflow", &["neural-networks", "deep-learning", "python"]),
    ("pytorch", &["neural-networks", "deep-learning", "python"]),
    ("scikit-learn", &["models", "training", "python"]),
    ("apache-kafka", &["streaming", "events", "messaging"]),
    ("apache-spark", &["big-data", "distributed", "etl"]),
    ("selenium", &["automation", "browser", "e2e"]),
    ("jest", &["unit-testing", "javascript"]),
    ("cypress", &["e2e", "browser", "javascript"]),
    ("figma", &["design", "prototyping", "ui"]),
    ("git", &["version-control", "branches"]),
    ("graphql", &["api", "queries", "schema"]),
    ("scrum", &["agile", "sprints", "ceremonies"]),
    ("kanban", &["agile", "flow", "wip"]),
    ("tdd", &["testing", "red-green-refactor"]),
    ("microservices", &["architecture", "distributed", "services"]),
    ("jwt", &["authentication", "tokens", "stateless"]),
    ("ethereum", &["blockchain", "smart-contracts", "web3"]),
];
