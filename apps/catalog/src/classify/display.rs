//! Display-name tables for skills.
//!
//! `DISPLAY_NAMES_EN` fixes brand spellings the generic title-casing
//! fallback gets wrong ("Jquery", "Mysql"). `TRANSLATIONS_PT` carries the
//! pt-BR names for concept tags; tool and brand names stay untranslated
//! and fall back to the English display name.

pub const DISPLAY_NAMES_EN: &[(&str, &str)] = &[
    ("node.js", "Node.js"),
    ("vue.js", "Vue.js"),
    ("next.js", "Next.js"),
    ("nuxt.js", "Nuxt.js"),
    ("ember.js", "Ember.js"),
    ("asp.net-core", "ASP.NET Core"),
    ("asp.net", "ASP.NET"),
    (".net", ".NET"),
    ("nestjs", "NestJS"),
    ("fastapi", "FastAPI"),
    ("mysql", "MySQL"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("sqlite", "SQLite"),
    ("mariadb", "MariaDB"),
    ("sql-server", "SQL Server"),
    ("dynamodb", "DynamoDB"),
    ("couchdb", "CouchDB"),
    ("influxdb", "InfluxDB"),
    ("graphql", "GraphQL"),
    ("jquery", "jQuery"),
    ("rxjs", "RxJS"),
    ("d3.js", "D3.js"),
    ("three.js", "Three.js"),
    ("socket.io", "Socket.IO"),
    ("web3js", "Web3.js"),
    ("tailwind-css", "Tailwind CSS"),
    ("styled-components", "styled-components"),
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
    ("bitbucket", "Bitbucket"),
    ("github-actions", "GitHub Actions"),
    ("gitlab-ci", "GitLab CI"),
    ("circleci", "CircleCI"),
    ("travis-ci", "Travis CI"),
    ("amazon-web-services", "AWS"),
    ("azure", "Microsoft Azure"),
    ("google-cloud-platform", "Google Cloud"),
    ("unity3d", "Unity"),
    ("intellij-idea", "IntelliJ IDEA"),
    ("pycharm", "PyCharm"),
    ("xcode", "Xcode"),
    ("numpy", "NumPy"),
    ("scikit-learn", "scikit-learn"),
    ("pytorch", "PyTorch"),
    ("opencv", "OpenCV"),
    ("dbt", "dbt"),
    ("phpunit", "PHPUnit"),
    ("rspec", "RSpec"),
    ("testng", "TestNG"),
    ("junit", "JUnit"),
    ("jwt", "JWT"),
    ("oauth-2.0", "OAuth 2.0"),
    ("owasp", "OWASP"),
    ("openssl", "OpenSSL"),
    ("tdd", "TDD"),
    ("bdd", "BDD"),
    ("rest", "REST"),
    ("ruby-on-rails", "Ruby on Rails"),
    ("ios", "iOS"),
    ("wordpress", "WordPress"),
    ("ionic-framework", "Ionic"),
    ("solid-principles", "SOLID"),
    ("ui-ux", "UI/UX"),
];

pub const TRANSLATIONS_PT: &[(&str, &str)] = &[
    ("agile", "Metodologias Ágeis"),
    ("machine-learning", "Aprendizado de Máquina"),
    ("deep-learning", "Aprendizado Profundo"),
    ("data-science", "Ciência de Dados"),
    ("penetration-testing", "Testes de Invasão"),
    ("cryptography", "Criptografia"),
    ("smart-contracts", "Contratos Inteligentes"),
    ("design-patterns", "Padrões de Projeto"),
    ("clean-architecture", "Arquitetura Limpa"),
    ("continuous-integration", "Integração Contínua"),
    ("continuous-deployment", "Entrega Contínua"),
    ("code-review", "Revisão de Código"),
    ("pair-programming", "Programação em Par"),
    ("microservices", "Microsserviços"),
];
