//! Brand colors for skills, keyed by lowercased raw tag (slug probed as
//! the second tier). Languages never consult this table — their color
//! comes from the linguist dataset.

pub const SKILL_COLORS: &[(&str, &str)] = &[
    ("react", "#61DAFB"),
    ("angular", "#DD0031"),
    ("vue.js", "#4FC08D"),
    ("svelte", "#FF3E00"),
    ("next.js", "#000000"),
    ("django", "#092E20"),
    ("flask", "#000000"),
    ("fastapi", "#009688"),
    ("spring-boot", "#6DB33F"),
    ("laravel", "#FF2D20"),
    ("ruby-on-rails", "#CC0000"),
    ("nestjs", "#E0234E"),
    ("flutter", "#02569B"),
    ("react-native", "#61DAFB"),
    ("node.js", "#339933"),
    ("mysql", "#4479A1"),
    ("postgresql", "#336791"),
    ("mongodb", "#47A248"),
    ("redis", "#DC382D"),
    ("sqlite", "#003B57"),
    ("mariadb", "#003545"),
    ("elasticsearch", "#005571"),
    ("docker", "#2496ED"),
    ("kubernetes", "#326CE5"),
    ("jenkins", "#D24939"),
    ("terraform", "#7B42BC"),
    ("ansible", "#EE0000"),
    ("nginx", "#009639"),
    ("grafana", "#F46800"),
    ("prometheus", "#E6522C"),
    ("amazon-web-services", "#FF9900"),
    ("azure", "#0078D4"),
    ("google-cloud-platform", "#4285F4"),
    ("heroku", "#430098"),
    ("pandas", "#150458"),
    ("numpy", "#013243"),
    ("tensorflow", "#FF6F00"),
    ("pytorch", "#EE4C2C"),
    ("jupyter", "#F37626"),
    ("apache-spark", "#E25A1C"),
    ("apache-kafka", "#231F20"),
    ("selenium", "#43B02A"),
    ("jest", "#C21325"),
    ("cypress", "#17202C"),
    ("figma", "#F24E1E"),
    ("sketch", "#F7B500"),
    ("blender", "#F5792A"),
    ("git", "#F05032"),
    ("github", "#181717"),
    ("gitlab", "#FC6D26"),
    ("bitbucket", "#0052CC"),
    ("jira", "#0052CC"),
    ("slack", "#4A154B"),
    ("notion", "#000000"),
    ("jquery", "#0769AD"),
    ("bootstrap", "#7952B3"),
    ("tailwind-css", "#06B6D4"),
    ("sass", "#CC6699"),
    ("redux", "#764ABC"),
    ("graphql", "#E10098"),
    ("webpack", "#8DD6F9"),
    ("vite", "#646CFF"),
    ("ethereum", "#3C3C3D"),
    ("solana", "#9945FF"),
    ("visual-studio-code", "#007ACC"),
    ("unity3d", "#000000"),
    ("unreal-engine", "#0E1128"),
];
