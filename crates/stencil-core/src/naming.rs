//! Naming convention utilities for code generation.
//!
//! Schema documents use PascalCase member names (`OrderId`), while generated
//! Rust uses snake_case fields and PascalCase types.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `PascalCase` | [`to_snake_case`] | `pascal_case` |
//! | `crate::a_b::c` | [`namespace_slug`] | `crate_a__b_c` |

use crate::error::{GenerateError, GenerateResult};
use proc_macro2::{Ident, Span};

/// Convert PascalCase or camelCase to snake_case.
///
/// Acronyms stay together: `HTTPServer` becomes `http_server`.
///
/// # Examples
///
/// ```
/// use stencil_core::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("OrderId"), "order_id");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p == '_' => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Flatten a module path into something usable inside an identifier.
///
/// Segments keep their spelling and join with `_`; an underscore inside a
/// segment is doubled, so `crate::a_b` and `crate::a::b` stay apart.
///
/// ```
/// use stencil_core::naming::namespace_slug;
///
/// assert_eq!(namespace_slug("crate::models"), "crate_models");
/// assert_eq!(namespace_slug("crate::order_lines"), "crate_order__lines");
/// ```
pub fn namespace_slug(namespace: &str) -> String {
    namespace
        .split("::")
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.replace('_', "__"))
        .collect::<Vec<_>>()
        .join("_")
}

/// Whether `s` is shaped like an identifier (ASCII letters, digits, `_`).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Build an identifier, falling back to a raw identifier for keywords.
///
/// `context` names the entity or candidate for diagnostics.
pub fn ident(name: &str, context: &str) -> GenerateResult<Ident> {
    let invalid = || GenerateError::InvalidIdentifier {
        name: name.to_string(),
        context: context.to_string(),
    };

    if !is_identifier(name) {
        return Err(invalid());
    }
    if let Ok(ident) = syn::parse_str::<Ident>(name) {
        return Ok(ident);
    }
    match name {
        "_" | "self" | "Self" | "super" | "crate" => Err(invalid()),
        _ => Ok(Ident::new_raw(name, Span::call_site())),
    }
}
