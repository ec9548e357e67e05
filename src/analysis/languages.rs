//! Language byte-count breakdown.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct LanguageEntry {
    pub name: String,
    pub bytes: u64,
    /// Share of total bytes, rounded to one decimal place.
    pub percent: f64,
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LanguageAnalysis {
    /// Descending by byte count.
    pub languages: Vec<LanguageEntry>,
    pub primary: Option<String>,
}

const FALLBACK_COLOR: &str = "#8b8b8b";

/// Display colors for common languages, matching the hosting site's palette.
const COLORS: &[(&str, &str)] = &[
    ("C", "#555555"),
    ("C#", "#178600"),
    ("C++", "#f34b7d"),
    ("CSS", "#663399"),
    ("Clojure", "#db5855"),
    ("CoffeeScript", "#244776"),
    ("Dart", "#00B4AB"),
    ("Dockerfile", "#384d54"),
    ("Elixir", "#6e4a7e"),
    ("Elm", "#60B5CC"),
    ("Emacs Lisp", "#c065db"),
    ("Erlang", "#B83998"),
    ("Go", "#00ADD8"),
    ("HCL", "#844FBA"),
    ("HTML", "#e34c26"),
    ("Haskell", "#5e5086"),
    ("Java", "#b07219"),
    ("JavaScript", "#f1e05a"),
    ("Julia", "#a270ba"),
    ("Jupyter Notebook", "#DA5B0B"),
    ("Kotlin", "#A97BFF"),
    ("Lua", "#000080"),
    ("MDX", "#fcb32c"),
    ("Makefile", "#427819"),
    ("Nix", "#7e7eff"),
    ("OCaml", "#ef7a08"),
    ("Objective-C", "#438eff"),
    ("PHP", "#4F5D95"),
    ("Perl", "#0298c3"),
    ("PowerShell", "#012456"),
    ("Python", "#3572A5"),
    ("R", "#198CE7"),
    ("Ruby", "#701516"),
    ("Rust", "#dea584"),
    ("SCSS", "#c6538c"),
    ("Scala", "#c22d40"),
    ("Shell", "#89e051"),
    ("Svelte", "#ff3e00"),
    ("Swift", "#F05138"),
    ("TeX", "#3D6117"),
    ("TypeScript", "#3178c6"),
    ("Vim Script", "#199f4b"),
    ("Vue", "#41b883"),
    ("Zig", "#ec915c"),
];

fn color_for(name: &str) -> String {
    COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map_or(FALLBACK_COLOR, |(_, c)| *c)
        .to_owned()
}

#[must_use]
pub fn process_languages(bytes_by_language: &BTreeMap<String, u64>) -> LanguageAnalysis {
    let total: u64 = bytes_by_language.values().sum();

    let mut languages: Vec<LanguageEntry> = bytes_by_language
        .iter()
        .map(|(name, &bytes)| {
            let percent = if total == 0 {
                0.0
            } else {
                (bytes as f64 / total as f64 * 1000.0).round() / 10.0
            };
            LanguageEntry {
                name: name.clone(),
                bytes,
                percent,
                color: color_for(name),
            }
        })
        .collect();

    languages.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.name.cmp(&b.name)));

    LanguageAnalysis {
        primary: languages.first().map(|l| l.name.clone()),
        languages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, u64)]) -> BTreeMap<String, u64> {
        entries.iter().map(|(n, b)| ((*n).to_owned(), *b)).collect()
    }

    #[test]
    fn test_percentages_to_one_decimal() {
        let analysis = process_languages(&map(&[("TypeScript", 600), ("JavaScript", 400)]));
        assert_eq!(analysis.languages[0].name, "TypeScript");
        assert_eq!(analysis.languages[0].percent, 60.0);
        assert_eq!(analysis.languages[1].percent, 40.0);
        assert_eq!(analysis.primary.as_deref(), Some("TypeScript"));
    }

    #[test]
    fn test_rounding() {
        let analysis = process_languages(&map(&[("Rust", 2), ("Shell", 1)]));
        assert_eq!(analysis.languages[0].percent, 66.7);
        assert_eq!(analysis.languages[1].percent, 33.3);
    }

    #[test]
    fn test_empty_map() {
        let analysis = process_languages(&BTreeMap::new());
        assert!(analysis.languages.is_empty());
        assert!(analysis.primary.is_none());
    }

    #[test]
    fn test_known_and_fallback_colors() {
        let analysis = process_languages(&map(&[("Rust", 10), ("Brainfuck", 1)]));
        assert_eq!(analysis.languages[0].color, "#dea584");
        assert_eq!(analysis.languages[1].color, "#8b8b8b");
    }

    #[test]
    fn test_descending_order() {
        let analysis = process_languages(&map(&[("A", 1), ("B", 3), ("C", 2)]));
        let names: Vec<&str> = analysis.languages.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["B", "C", "A"]);
    }
}
