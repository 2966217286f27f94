//! Identifier and generics naming helpers for generated TypeScript

/// Uppercases the first character, identity on empty input.
///
/// # Examples
/// ```
/// use respgen::generation::utils::capitalize;
///
/// assert_eq!(capitalize("getThing"), "GetThing");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Lowercases the first character, identity on empty input.
///
/// # Examples
/// ```
/// use respgen::generation::utils::uncapitalize;
///
/// assert_eq!(uncapitalize("GetThing"), "getThing");
/// ```
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Escape a string for use inside a double-quoted TypeScript literal.
///
/// # Examples
/// ```
/// use respgen::generation::utils::escape_ts_string;
///
/// assert_eq!(escape_ts_string("X-\"Id\""), r#"X-\"Id\""#);
/// assert_eq!(escape_ts_string("a\nb"), r"a\nb");
/// ```
pub fn escape_ts_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Renders a union of string literal types, or `never` for an empty list.
///
/// Order is preserved and duplicates are kept.
///
/// # Examples
/// ```
/// use respgen::generation::utils::to_union_of_literals;
///
/// assert_eq!(to_union_of_literals::<&str>(&[]), "never");
/// assert_eq!(to_union_of_literals(&["a", "b"]), r#""a" | "b""#);
/// ```
pub fn to_union_of_literals<S: AsRef<str>>(names: &[S]) -> String {
    if names.is_empty() {
        return "never".to_string();
    }
    names
        .iter()
        .map(|n| format!("\"{}\"", escape_ts_string(n.as_ref())))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Applies generic parameters to a base name, e.g. `Foo<A, B>`.
///
/// # Examples
/// ```
/// use respgen::generation::utils::with_generics;
///
/// assert_eq!(with_generics::<&str>("Foo", &[]), "Foo");
/// assert_eq!(with_generics("Foo", &["A", "B"]), "Foo<A, B>");
/// ```
pub fn with_generics<S: AsRef<str>>(base_name: &str, param_exprs: &[S]) -> String {
    if param_exprs.is_empty() {
        return base_name.to_string();
    }
    let params = param_exprs
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{base_name}<{params}>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("getThing"), "GetThing");
        assert_eq!(capitalize("GetThing"), "GetThing");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_uncapitalize() {
        assert_eq!(uncapitalize("GetThing"), "getThing");
        assert_eq!(uncapitalize("getThing"), "getThing");
        assert_eq!(uncapitalize(""), "");
    }

    #[test]
    fn test_to_union_of_literals() {
        let empty: [&str; 0] = [];
        assert_eq!(to_union_of_literals(&empty), "never");
        assert_eq!(to_union_of_literals(&["a"]), "\"a\"");
        assert_eq!(to_union_of_literals(&["b", "a"]), "\"b\" | \"a\"");
        // duplicates are kept
        assert_eq!(to_union_of_literals(&["a", "a"]), "\"a\" | \"a\"");
    }

    #[test]
    fn test_to_union_of_literals_escapes_quotes() {
        assert_eq!(to_union_of_literals(&["x\"y"]), "\"x\\\"y\"");
    }

    #[test]
    fn test_escape_ts_string_control_characters() {
        assert_eq!(escape_ts_string("a\\b"), "a\\\\b");
        assert_eq!(escape_ts_string("X-Id\r\n"), "X-Id\\r\\n");
        assert_eq!(escape_ts_string("tab\there"), "tab\\there");
        assert_eq!(escape_ts_string("bell\u{7}"), "bell\\u0007");
        assert_eq!(escape_ts_string("ünïcode"), "ünïcode");
        assert_eq!(to_union_of_literals(&["X-Id\n"]), "\"X-Id\\n\"");
    }

    #[test]
    fn test_with_generics() {
        let empty: [String; 0] = [];
        assert_eq!(with_generics("Foo", &empty), "Foo");
        assert_eq!(with_generics("Foo", &["A", "B"]), "Foo<A, B>");
        assert_eq!(
            with_generics("t.Type", &["A200".to_string(), "C200".to_string()]),
            "t.Type<A200, C200>"
        );
    }
}
