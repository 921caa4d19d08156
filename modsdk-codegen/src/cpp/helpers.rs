//! Formatting helpers shared by the declaration builders.
//!
//! Each helper turns one schema field into the text slot a template expects.
//! An empty hardcode string means a hardcode or pad directive has nothing
//! on that platform.

use modsdk_schema::{Function, Member, Platform};

/// Renders a base-class list suffix, or nothing when there are no bases.
#[must_use]
pub fn format_bases(superclasses: &[String]) -> String {
    if superclasses.is_empty() {
        String::new()
    } else {
        format!(" : {}", superclasses.join(", "))
    }
}

/// Printable return type of a function.
///
/// Constructors and destructors have none; other functions without a
/// declared type return `void`.
#[must_use]
pub fn return_type(function: &Function) -> &str {
    if function.function_type.is_structor() {
        ""
    } else {
        function
            .return_type
            .as_deref()
            .filter(|ty| !ty.is_empty())
            .unwrap_or("void")
    }
}

/// Argument types joined for a declaration.
#[must_use]
pub fn raw_arg_types(args: &[String]) -> String {
    args.join(", ")
}

/// Typed and named parameters for a definition.
///
/// Missing names become `p0`, `p1`, ... by position.
#[must_use]
pub fn raw_params(args: &[String], argnames: &[String]) -> String {
    args.iter()
        .enumerate()
        .map(|(i, ty)| match argnames.get(i).filter(|n| !n.is_empty()) {
            Some(name) => format!("{ty} {name}"),
            None => format!("{ty} p{i}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Hardcoded value of a member on a platform, or an empty string.
///
/// Only hardcode and pad directives treat `""` as unsupported. A plain
/// member is placed by entry presence instead (see
/// [`Member::is_present_on`]), so an empty entry still declares it.
#[must_use]
pub fn hardcode(member: &Member, platform: Platform) -> &str {
    member.hardcodes.get(&platform).map_or("", String::as_str)
}

/// Array suffix for a member count.
#[must_use]
pub fn array_suffix(count: Option<usize>) -> String {
    match count {
        Some(n) if n > 0 => format!("[{n}]"),
        _ => String::new(),
    }
}
