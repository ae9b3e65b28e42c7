//! Go type expression helpers
//!
//! Used by the front-end's export filter and by method/constructor binding,
//! so both agree on which type a receiver or result names.

/// Marks a variadic parameter type: `...string`
pub const VARIADIC_MARKER: &str = "...";

/// Marks a pointer type: `*Foo`
pub const POINTER_MARKER: char = '*';

/// Named type a type expression refers to, without pointers or type arguments
///
/// `*Foo` → `Foo`, `(*Foo)` → `Foo`, `List[T]` → `List`, `pkg.Foo` → `pkg.Foo`.
/// Slices, maps, channels and function types have no base name.
pub fn base_type_name(type_expr: &str) -> Option<&str> {
    let mut expr = type_expr.trim();
    if expr.starts_with(VARIADIC_MARKER) {
        return None;
    }
    loop {
        let stripped = expr
            .trim_start_matches(POINTER_MARKER)
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim();
        if stripped == expr {
            break;
        }
        expr = stripped;
    }

    let name = match expr.find('[') {
        Some(0) => return None,
        Some(i) => expr[..i].trim_end(),
        None => expr,
    };

    let is_named = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
        && !name.starts_with(|c: char| c.is_ascii_digit());
    match name {
        "map" | "chan" | "func" | "struct" | "interface" => None,
        _ if is_named => Some(name),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_type_name() {
        assert_eq!(base_type_name("Foo"), Some("Foo"));
        assert_eq!(base_type_name("*Foo"), Some("Foo"));
        assert_eq!(base_type_name("(*Foo)"), Some("Foo"));
        assert_eq!(base_type_name("*List[T]"), Some("List"));
        assert_eq!(base_type_name("Pair[K, V]"), Some("Pair"));
        assert_eq!(base_type_name("io.Reader"), Some("io.Reader"));
        assert_eq!(base_type_name("[]Foo"), None);
        assert_eq!(base_type_name("map[string]Foo"), None);
        assert_eq!(base_type_name("...Foo"), None);
        assert_eq!(base_type_name("func() error"), None);
        assert_eq!(base_type_name(""), None);
    }
}
