//! Thematic category sub-tables.
//!
//! The classifier merges these in the order of [`ALL_IN_ORDER`] with
//! first-registered-wins semantics on duplicate keys. Reordering the list
//! or switching to a last-wins merge changes classification results, so
//! both are covered by tests in the parent module.
//!
//! Keys are lowercased raw tags as the tag API emits them; the resolver
//! also probes the normalized slug as a second tier.

use crate::models::SkillType;
use crate::models::SkillType::*;

pub type CategoryEntry = (&'static str, SkillType, Option<&'static str>);

pub const FRAMEWORKS: &[CategoryEntry] = &[
    ("react", Framework, Some("frontend")),
    ("angular", Framework, Some("frontend")),
    ("vue.js", Framework, Some("frontend")),
    ("svelte", Framework, Some("frontend")),
    ("next.js", Framework, Some("frontend")),
    ("nuxt.js", Framework, Some("frontend")),
    ("gatsby", Framework, Some("frontend")),
    ("ember.js", Framework, Some("frontend")),
    ("django", Framework, Some("backend")),
    ("flask", Framework, Some("backend")),
    ("fastapi", Framework, Some("backend")),
    ("spring-boot", Framework, Some("backend")),
    ("spring", Framework, Some("backend")),
    ("ruby-on-rails", Framework, Some("backend")),
    ("laravel", Framework, Some("backend")),
    ("symfony", Framework, Some("backend")),
    ("express", Framework, Some("backend")),
    ("nestjs", Framework, Some("backend")),
    ("asp.net-core", Framework, Some("backend")),
    ("asp.net", Framework, Some("backend")),
    (".net", Platform, Some("backend")),
    ("node.js", Platform, Some("backend")),
    ("electron", Framework, Some("frontend")),
    ("wordpress", Platform, Some("frontend")),
    ("flutter", Framework, Some("mobile")),
    ("react-native", Framework, Some("mobile")),
    ("ionic-framework", Framework, Some("mobile")),
    ("xamarin", Framework, Some("mobile")),
    ("android", Platform, Some("mobile")),
    ("ios", Platform, Some("mobile")),
    ("unity3d", Platform, Some("games")),
    ("unreal-engine", Platform, Some("games")),
    ("godot", Platform, Some("games")),
];

pub const DATABASES: &[CategoryEntry] = &[
    ("mysql", Database, Some("databases")),
    ("postgresql", Database, Some("databases")),
    ("mongodb", Database, Some("databases")),
    ("redis", Database, Some("databases")),
    ("sqlite", Database, Some("databases")),
    ("mariadb", Database, Some("databases")),
    ("elasticsearch", Database, Some("databases")),
    ("cassandra", Database, Some("databases")),
    ("oracle", Database, Some("databases")),
    ("sql-server", Database, Some("databases")),
    ("dynamodb", Database, Some("databases")),
    ("neo4j", Database, Some("databases")),
    ("couchdb", Database, Some("databases")),
    ("influxdb", Database, Some("databases")),
];

pub const DEVOPS: &[CategoryEntry] = &[
    ("docker", Tool, Some("devops")),
    ("kubernetes", Tool, Some("devops")),
    ("jenkins", Tool, Some("devops")),
    ("terraform", Tool, Some("devops")),
    ("ansible", Tool, Some("devops")),
    ("vagrant", Tool, Some("devops")),
    ("github-actions", Tool, Some("devops")),
    ("gitlab-ci", Tool, Some("devops")),
    ("circleci", Tool, Some("devops")),
    ("travis-ci", Tool, Some("devops")),
    ("nginx", Tool, Some("devops")),
    ("apache", Tool, Some("devops")),
    ("linux", Platform, Some("devops")),
    ("prometheus", Tool, Some("devops")),
    ("grafana", Tool, Some("devops")),
    ("helm", Tool, Some("devops")),
    ("amazon-web-services", Platform, Some("cloud")),
    ("azure", Platform, Some("cloud")),
    ("google-cloud-platform", Platform, Some("cloud")),
    ("heroku", Platform, Some("cloud")),
    ("vercel", Platform, Some("cloud")),
    ("netlify", Platform, Some("cloud")),
];

pub const DATA_AI: &[CategoryEntry] = &[
    ("pandas", Library, Some("data-science")),
    ("numpy", Library, Some("data-science")),
    ("matplotlib", Library, Some("data-science")),
    ("jupyter", Tool, Some("data-science")),
    ("data-science", Methodology, Some("data-science")),
    ("tensorflow", Library, Some("machine-learning")),
    ("pytorch", Library, Some("machine-learning")),
    ("keras", Library, Some("machine-learning")),
    ("scikit-learn", Library, Some("machine-learning")),
    ("opencv", Library, Some("machine-learning")),
    ("machine-learning", Methodology, Some("machine-learning")),
    ("deep-learning", Methodology, Some("machine-learning")),
    ("apache-spark", Tool, Some("data-engineering")),
    ("hadoop", Tool, Some("data-engineering")),
    ("apache-kafka", Tool, Some("data-engineering")),
    ("airflow", Tool, Some("data-engineering")),
    ("dbt", Tool, Some("data-engineering")),
    ("snowflake", Platform, Some("data-engineering")),
    ("databricks", Platform, Some("data-engineering")),
];

pub const TESTING: &[CategoryEntry] = &[
    ("selenium", Tool, Some("testing")),
    ("jest", Tool, Some("testing")),
    ("cypress", Tool, Some("testing")),
    ("mocha", Tool, Some("testing")),
    ("jasmine", Tool, Some("testing")),
    ("junit", Tool, Some("testing")),
    ("pytest", Tool, Some("testing")),
    ("phpunit", Tool, Some("testing")),
    ("rspec", Tool, Some("testing")),
    ("testng", Tool, Some("testing")),
    ("playwright", Tool, Some("testing")),
    ("cucumber", Tool, Some("testing")),
    ("postman", Tool, Some("testing")),
];

pub const DESIGN: &[CategoryEntry] = &[
    ("figma", Tool, Some("ui-ux")),
    ("sketch", Tool, Some("ui-ux")),
    ("adobe-xd", Tool, Some("ui-ux")),
    ("adobe-photoshop", Tool, Some("graphic-design")),
    ("adobe-illustrator", Tool, Some("graphic-design")),
    ("blender", Tool, Some("graphic-design")),
];

pub const SECURITY: &[CategoryEntry] = &[
    ("jwt", Tool, Some("security")),
    ("oauth-2.0", Tool, Some("security")),
    ("openssl", Library, Some("security")),
    ("keycloak", Tool, Some("security")),
    ("penetration-testing", Methodology, Some("security")),
    ("owasp", Methodology, Some("security")),
    ("cryptography", Methodology, Some("security")),
];

pub const COLLABORATION: &[CategoryEntry] = &[
    ("git", Tool, Some("developer-tools")),
    ("github", Platform, Some("developer-tools")),
    ("gitlab", Platform, Some("developer-tools")),
    ("bitbucket", Platform, Some("developer-tools")),
    ("jira", Tool, Some("collaboration")),
    ("confluence", Tool, Some("collaboration")),
    ("trello", Tool, Some("collaboration")),
    ("slack", Tool, Some("collaboration")),
    ("notion", Tool, Some("collaboration")),
    ("asana", Tool, Some("collaboration")),
];

pub const LIBRARIES: &[CategoryEntry] = &[
    ("jquery", Library, Some("frontend")),
    ("bootstrap", Library, Some("frontend")),
    ("tailwind-css", Library, Some("frontend")),
    ("sass", Library, Some("frontend")),
    ("redux", Library, Some("frontend")),
    ("rxjs", Library, Some("frontend")),
    ("styled-components", Library, Some("frontend")),
    ("three.js", Library, Some("frontend")),
    ("d3.js", Library, Some("frontend")),
    ("lodash", Library, Some("frontend")),
    ("axios", Library, Some("frontend")),
    ("socket.io", Library, Some("backend")),
    ("graphql", Tool, Some("backend")),
    ("webpack", Tool, Some("frontend")),
    ("vite", Tool, Some("frontend")),
    ("babel", Tool, Some("frontend")),
];

pub const METHODOLOGY: &[CategoryEntry] = &[
    ("agile", Methodology, Some("agile")),
    ("scrum", Methodology, Some("agile")),
    ("kanban", Methodology, Some("agile")),
    ("tdd", Methodology, Some("testing")),
    ("bdd", Methodology, Some("testing")),
    ("continuous-integration", Methodology, Some("devops")),
    ("continuous-deployment", Methodology, Some("devops")),
    ("microservices", Methodology, Some("backend")),
    ("rest", Methodology, Some("backend")),
    ("design-patterns", Methodology, Some("backend")),
    ("solid-principles", Methodology, Some("backend")),
    ("domain-driven-design", Methodology, Some("backend")),
    ("clean-architecture", Methodology, Some("backend")),
    ("pair-programming", Methodology, Some("agile")),
    ("code-review", Methodology, Some("agile")),
];

pub const BLOCKCHAIN: &[CategoryEntry] = &[
    ("blockchain", Platform, Some("blockchain")),
    ("ethereum", Platform, Some("blockchain")),
    ("solana", Platform, Some("blockchain")),
    ("web3js", Library, Some("blockchain")),
    ("smart-contracts", Methodology, Some("blockchain")),
    ("hyperledger-fabric", Platform, Some("blockchain")),
];

pub const IDES: &[CategoryEntry] = &[
    ("visual-studio-code", Tool, Some("developer-tools")),
    ("visual-studio", Tool, Some("developer-tools")),
    ("intellij-idea", Tool, Some("developer-tools")),
    ("pycharm", Tool, Some("developer-tools")),
    ("eclipse", Tool, Some("developer-tools")),
    ("vim", Tool, Some("developer-tools")),
    ("emacs", Tool, Some("developer-tools")),
    ("android-studio", Tool, Some("mobile")),
    ("xcode", Tool, Some("mobile")),
];

/// Merge order. First-registered wins on key collision; do not reorder.
pub const ALL_IN_ORDER: &[&[CategoryEntry]] = &[
    FRAMEWORKS,
    DATABASES,
    DEVOPS,
    DATA_AI,
    TESTING,
    DESIGN,
    SECURITY,
    COLLABORATION,
    LIBRARIES,
    METHODOLOGY,
    BLOCKCHAIN,
    IDES,
];
