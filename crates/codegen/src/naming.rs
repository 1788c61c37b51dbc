//! Lookup names and identifiers.
//!
//! A lookup name is the kebab-case file stem (`chevron-right`) and stays the
//! runtime key. The identifier is its PascalCase form (`ChevronRight`) used
//! for static references in generated code.

use std::path::Path;

/// Converts a kebab-case name to PascalCase.
///
/// Each hyphen-separated segment gets its first character upper-cased and
/// keeps the rest unchanged. Empty segments are skipped, so `a--b` becomes
/// `AB`.
pub fn to_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split('-').filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Returns the lookup name for `path` if it is an `.svg` file name.
pub fn lookup_name(path: &Path) -> Option<&str> {
    if path.extension()? != "svg" {
        return None;
    }
    path.file_stem()?.to_str()
}

/// Makes an identifier safe to use as a Rust item name.
///
/// Identifiers can start with a digit (`3d-box` → `3dBox`), which Rust does
/// not allow; those get an `Icon` prefix. `self` maps to the `Self` keyword
/// and becomes `SelfIcon`.
pub fn rust_item_name(identifier: &str) -> String {
    match identifier.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("Icon{}", identifier),
        Some(_) if identifier == "Self" => "SelfIcon".to_string(),
        Some(_) => identifier.to_string(),
        None => "Icon".to_string(),
    }
}

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Module name for a lookup name: snake_case, raw identifier for keywords.
pub fn rust_module_name(name: &str) -> String {
    let snake: String = name
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();

    match snake.chars().next() {
        None => "icon".to_string(),
        Some(c) if c.is_ascii_digit() => format!("icon_{}", snake),
        Some(_) if matches!(snake.as_str(), "crate" | "self" | "super") => {
            format!("{}_icon", snake)
        }
        Some(_) if RUST_KEYWORDS.contains(&snake.as_str()) => format!("r#{}", snake),
        Some(_) => snake,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_identifier_basic() {
        assert_eq!(to_identifier("chevron-right"), "ChevronRight");
        assert_eq!(to_identifier("x"), "X");
        assert_eq!(to_identifier("arrow-up-from-line"), "ArrowUpFromLine");
    }

    #[test]
    fn test_to_identifier_skips_empty_segments() {
        assert_eq!(to_identifier("a--b"), "AB");
        assert_eq!(to_identifier("-leading-trailing-"), "LeadingTrailing");
        assert_eq!(to_identifier(""), "");
        assert_eq!(to_identifier("---"), "");
    }

    #[test]
    fn test_to_identifier_keeps_rest_unchanged() {
        assert_eq!(to_identifier("wifi-HIGH"), "WifiHIGH");
        assert_eq!(to_identifier("dice-1"), "Dice1");
        assert_eq!(to_identifier("écran-plat"), "ÉcranPlat");
    }

    #[test]
    fn test_lookup_name() {
        assert_eq!(lookup_name(Path::new("icons/chevron-right.svg")), Some("chevron-right"));
        assert_eq!(lookup_name(Path::new("README.md")), None);
        assert_eq!(lookup_name(Path::new("icon.SVG")), None);
        assert_eq!(lookup_name(Path::new("noext")), None);
    }

    #[test]
    fn test_rust_item_name() {
        assert_eq!(rust_item_name("ChevronRight"), "ChevronRight");
        assert_eq!(rust_item_name("3dBox"), "Icon3dBox");
        assert_eq!(rust_item_name(""), "Icon");
        assert_eq!(rust_item_name(&to_identifier("self")), "SelfIcon");
        assert_eq!(rust_item_name("Selfie"), "Selfie");
    }

    #[test]
    fn test_rust_module_name() {
        assert_eq!(rust_module_name("chevron-right"), "chevron_right");
        assert_eq!(rust_module_name("type"), "r#type");
        assert_eq!(rust_module_name("box"), "r#box");
        assert_eq!(rust_module_name("3d-box"), "icon_3d_box");
        assert_eq!(rust_module_name("a--b"), "a_b");
        assert_eq!(rust_module_name("self"), "self_icon");
    }
}
