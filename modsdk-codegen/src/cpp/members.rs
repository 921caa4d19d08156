//! Data member and layout directive rendering.

use super::{helpers, templates};
use modsdk_schema::{Member, MemberType, Platform};

/// Renders the in-body line for a member.
///
/// A plain member without an entry for `platform` is absent there. Hardcode
/// and pad directives need a value, so an empty one also produces nothing.
#[must_use]
pub fn member_definition(member: &Member, platform: Platform) -> Option<String> {
    let hardcode = helpers::hardcode(member, platform);

    let line = match member.member_type {
        MemberType::Default => {
            if !member.is_present_on(platform) {
                tracing::debug!(member = %member.name, %platform, "member not present on platform");
                return None;
            }
            templates::member_definition(
                &member.ty,
                &member.name,
                &helpers::array_suffix(member.count),
            )
        }
        MemberType::Hardcode | MemberType::Pad if hardcode.is_empty() => {
            tracing::debug!(member = %member.name, %platform, "no hardcode on platform");
            return None;
        }
        MemberType::Hardcode => {
            templates::hardcode_definition(&member.ty, stripped_name(&member.name), hardcode)
        }
        MemberType::Pad => templates::pad_definition(hardcode),
    };
    Some(line)
}

/// Drops the 2-character intent prefix of a hardcode member name.
fn stripped_name(name: &str) -> &str {
    name.char_indices().nth(2).map_or("", |(i, _)| &name[i..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_member() {
        let mut member = Member::new(MemberType::Default, "int", "m_values");
        member.count = Some(4);
        member.hardcodes.insert(Platform::Windows, String::new());

        assert_eq!(
            member_definition(&member, Platform::Windows).as_deref(),
            Some("\tint m_values[4];\n")
        );
        assert!(member_definition(&member, Platform::Mac).is_none());
    }

    #[test]
    fn test_default_member_without_entries() {
        let member = Member::new(MemberType::Default, "bool", "m_flag");
        assert!(member_definition(&member, Platform::Windows).is_none());
    }

    #[test]
    fn test_hardcode_member_strips_prefix() {
        let mut member = Member::new(MemberType::Hardcode, "float", "m_m_speed");
        member.hardcodes.insert(Platform::Mac, "0x120".to_string());

        assert_eq!(
            member_definition(&member, Platform::Mac).as_deref(),
            Some("\tCLASSPARAM(float, m_speed, 0x120);\n")
        );
        assert!(member_definition(&member, Platform::Ios).is_none());
    }

    #[test]
    fn test_pad() {
        let mut pad = Member::pad();
        pad.hardcodes.insert(Platform::Windows, "0x8".to_string());
        pad.hardcodes.insert(Platform::Mac, String::new());

        assert_eq!(
            member_definition(&pad, Platform::Windows).as_deref(),
            Some("\tGEODE_PAD(0x8);\n")
        );
        assert!(member_definition(&pad, Platform::Mac).is_none());
    }

    #[test]
    fn test_stripped_name() {
        assert_eq!(stripped_name("m_m_speed"), "m_speed");
        assert_eq!(stripped_name("xyz"), "z");
        assert_eq!(stripped_name("ab"), "");
    }
}
