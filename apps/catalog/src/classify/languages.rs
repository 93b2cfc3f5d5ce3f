//! Static language enrichment: the fixed popularity ordering, per-language
//! paradigm/typing/website profiles, and the short pt-BR display-override
//! list (language names rarely translate; the fallback is the source name).

/// Fixed popularity ordering. A language at index `i` scores `1000 - i`;
/// names absent from the list score 0. Earlier entries therefore always
/// outrank later ones. Names must match the linguist dataset exactly.
pub const POPULARITY_ORDER: &[&str] = &[
    "JavaScript",
    "Python",
    "TypeScript",
    "Java",
    "C#",
    "C++",
    "PHP",
    "C",
    "Go",
    "Rust",
    "Kotlin",
    "Swift",
    "Ruby",
    "Dart",
    "Scala",
    "R",
    "Elixir",
    "Objective-C",
    "Perl",
    "Haskell",
    "Lua",
    "Clojure",
    "Julia",
    "Erlang",
    "F#",
    "Groovy",
    "PowerShell",
    "Shell",
    "Visual Basic .NET",
    "Assembly",
    "MATLAB",
    "COBOL",
    "Fortran",
    "Crystal",
    "Nim",
    "Zig",
    "OCaml",
    "Solidity",
    "Vala",
    "D",
    "Elm",
    "PureScript",
    "Racket",
    "Scheme",
    "Prolog",
];

pub struct LanguageProfile {
    pub paradigms: &'static [&'static str],
    pub typing: Option<&'static str>,
    pub website: Option<&'static str>,
}

pub const LANGUAGE_PROFILES: &[(&str, LanguageProfile)] = &[
    ("JavaScript", LanguageProfile { paradigms: &["object-oriented", "functional", "event-driven"], typing: Some("dynamic"), website: Some("https://developer.mozilla.org/docs/Web/JavaScript") }),
    ("TypeScript", LanguageProfile { paradigms: &["object-oriented", "functional"], typing: Some("gradual"), website: Some("https://www.typescriptlang.org") }),
    ("Python", LanguageProfile { paradigms: &["object-oriented", "functional", "imperative"], typing: Some("dynamic"), website: Some("https://www.python.org") }),
    ("Java", LanguageProfile { paradigms: &["object-oriented", "concurrent"], typing: Some("static"), website: Some("https://www.java.com") }),
    ("C#", LanguageProfile { paradigms: &["object-oriented", "functional"], typing: Some("static"), website: Some("https://learn.microsoft.com/dotnet/csharp") }),
    ("C++", LanguageProfile { paradigms: &["object-oriented", "generic", "systems"], typing: Some("static"), website: Some("https://isocpp.org") }),
    ("C", LanguageProfile { paradigms: &["imperative", "systems"], typing: Some("static"), website: None }),
    ("PHP", LanguageProfile { paradigms: &["object-oriented", "imperative"], typing: Some("dynamic"), website: Some("https://www.php.net") }),
    ("Go", LanguageProfile { paradigms: &["imperative", "concurrent"], typing: Some("static"), website: Some("https://go.dev") }),
    ("Rust", LanguageProfile { paradigms: &["systems", "functional", "concurrent"], typing: Some("static"), website: Some("https://www.rust-lang.org") }),
    ("Kotlin", LanguageProfile { paradigms: &["object-oriented", "functional"], typing: Some("static"), website: Some("https://kotlinlang.org") }),
    ("Swift", LanguageProfile { paradigms: &["object-oriented", "functional", "protocol-oriented"], typing: Some("static"), website: Some("https://www.swift.org") }),
    ("Ruby", LanguageProfile { paradigms: &["object-oriented", "functional"], typing: Some("dynamic"), website: Some("https://www.ruby-lang.org") }),
    ("Dart", LanguageProfile { paradigms: &["object-oriented"], typing: Some("static"), website: Some("https://dart.dev") }),
    ("Scala", LanguageProfile { paradigms: &["object-oriented", "functional"], typing: Some("static"), website: Some("https://www.scala-lang.org") }),
    ("R", LanguageProfile { paradigms: &["functional", "array"], typing: Some("dynamic"), website: Some("https://www.r-project.org") }),
    ("Elixir", LanguageProfile { paradigms: &["functional", "concurrent"], typing: Some("dynamic"), website: Some("https://elixir-lang.org") }),
    ("Objective-C", LanguageProfile { paradigms: &["object-oriented"], typing: Some("static"), website: None }),
    ("Perl", LanguageProfile { paradigms: &["imperative", "functional"], typing: Some("dynamic"), website: Some("https://www.perl.org") }),
    ("Haskell", LanguageProfile { paradigms: &["functional", "lazy"], typing: Some("static"), website: Some("https://www.haskell.org") }),
    ("Lua", LanguageProfile { paradigms: &["imperative", "scripting"], typing: Some("dynamic"), website: Some("https://www.lua.org") }),
    ("Clojure", LanguageProfile { paradigms: &["functional"], typing: Some("dynamic"), website: Some("https://clojure.org") }),
    ("Julia", LanguageProfile { paradigms: &["functional", "array"], typing: Some("dynamic"), website: Some("https://julialang.org") }),
    ("Erlang", LanguageProfile { paradigms: &["functional", "concurrent"], typing: Some("dynamic"), website: Some("https://www.erlang.org") }),
    ("F#", LanguageProfile { paradigms: &["functional", "object-oriented"], typing: Some("static"), website: Some("https://fsharp.org") }),
    ("PowerShell", LanguageProfile { paradigms: &["imperative", "scripting"], typing: Some("dynamic"), website: Some("https://learn.microsoft.com/powershell") }),
    ("Shell", LanguageProfile { paradigms: &["imperative", "scripting"], typing: None, website: None }),
    ("Solidity", LanguageProfile { paradigms: &["object-oriented", "contract-oriented"], typing: Some("static"), website: Some("https://soliditylang.org") }),
    ("Zig", LanguageProfile { paradigms: &["imperative", "systems"], typing: Some("static"), website: Some("https://ziglang.org") }),
    ("OCaml", LanguageProfile { paradigms: &["functional", "object-oriented"], typing: Some("static"), website: Some("https://ocaml.org") }),
    ("Elm", LanguageProfile { paradigms: &["functional"], typing: Some("static"), website: Some("https://elm-lang.org") }),
];

/// pt-BR display overrides. Most language names are used as-is in the
/// local market, so this list stays short by design.
pub const LANGUAGE_NAMES_PT: &[(&str, &str)] = &[
    ("Shell", "Shell Script"),
    ("Batchfile", "Script em Lote"),
    ("Assembly", "Linguagem Assembly"),
];
