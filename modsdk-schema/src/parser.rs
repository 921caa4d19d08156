//! XML schema loader.
//!
//! This module turns a class schema document into a [`Root`]. Element and
//! attribute names follow the layout below:
//!
//! ```xml
//! <schema>
//!   <class name="PlayLayer" bases="GJBaseGameLayer">
//!     <inline>static PlayLayer* get();</inline>
//!     <function name="init" kind="virtual" returns="bool">
//!       <arg type="GJGameLevel*" name="level"/>
//!       <bind platform="windows">0x1fb6d0</bind>
//!     </function>
//!     <member type="int" name="m_attempts" platforms="all"/>
//!     <hardcode type="float" name="m_m_speed"><bind platform="mac">0x120</bind></hardcode>
//!     <pad><bind platform="windows">0x8</bind></pad>
//!   </class>
//! </schema>
//! ```

use crate::classes::{ClassDefinition, Function, FunctionType, Member, MemberType};
use crate::error::ParseError;
use crate::types::{Platform, Root};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use std::collections::HashSet;
use std::path::Path;

/// Parses a class schema from a string.
///
/// # Arguments
/// * `xml` - XML schema content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or contains invalid schema elements.
pub fn parse_schema(xml: &str) -> Result<Root, ParseError> {
    let mut reader = Reader::from_str(xml);

    let mut root: Option<Root> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "schema" if root.is_none() => root = Some(Root::new()),
                    "class" if root.is_some() => {
                        let class = parse_class(&mut reader, e)?;
                        if let Some(schema) = root.as_mut() {
                            schema.add_class(class)?;
                        }
                    }
                    other => return Err(ParseError::unknown_element(other, "schema")),
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "schema" if root.is_none() => root = Some(Root::new()),
                    "class" if root.is_some() => {
                        let class = class_header(e)?;
                        if let Some(schema) = root.as_mut() {
                            schema.add_class(class)?;
                        }
                    }
                    other => return Err(ParseError::unknown_element(other, "schema")),
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    root.ok_or_else(|| ParseError::InvalidStructure {
        message: "No schema element found".to_string(),
    })
}

/// Reads and parses a class schema file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_schema_file(path: &Path) -> Result<Root, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_schema(&xml)
}

/// Collects an element's attributes as unescaped key/value pairs.
fn attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>, ParseError> {
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        attrs.push((key.to_string(), value.into_owned()));
    }
    Ok(attrs)
}

/// Parses a boolean attribute value.
fn parse_flag(element: &str, attribute: &str, value: &str) -> Result<bool, ParseError> {
    match value {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ParseError::invalid_attr(element, attribute, value)),
    }
}

/// Builds a class from the attributes of its opening tag.
fn class_header(e: &BytesStart<'_>) -> Result<ClassDefinition, ParseError> {
    let mut name = None;
    let mut bases = Vec::new();

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => name = Some(value),
            "bases" => {
                bases = value
                    .split(',')
                    .map(str::trim)
                    .filter(|b| !b.is_empty())
                    .map(str::to_string)
                    .collect()
            }
            _ => {}
        }
    }

    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ParseError::missing_attr("class", "name"))?;
    let mut class = ClassDefinition::new(name);
    for base in bases {
        class.add_superclass(base);
    }
    Ok(class)
}

/// Parses a class element and its contents.
fn parse_class(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<ClassDefinition, ParseError> {
    let mut class = class_header(e)?;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let (start, empty) = match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => (e.into_owned(), false),
            Ok(Event::Empty(e)) => (e.into_owned(), true),
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: format!("unexpected end of document inside class '{}'", class.name),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => continue,
        };

        let name_bytes = start.name().as_ref().to_vec();
        let tag = std::str::from_utf8(&name_bytes)?;
        match tag {
            "inline" => {
                let text = if empty {
                    String::new()
                } else {
                    read_text(reader, "inline")?
                };
                class.add_inline(text);
            }
            "function" => {
                let function = parse_function(reader, &start, empty)?;
                class.add_function(function);
            }
            "member" | "hardcode" | "pad" => {
                let member = parse_member(reader, &start, tag, empty)?;
                class.add_member(member);
            }
            other => return Err(ParseError::unknown_element(other, "class")),
        }
    }

    Ok(class)
}

/// Parses a function element.
fn parse_function(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    empty: bool,
) -> Result<Function, ParseError> {
    let mut function = Function::default();

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "name" => function.name = value,
            "kind" => {
                function.function_type = FunctionType::parse(&value)
                    .ok_or_else(|| ParseError::invalid_attr("function", "kind", &value))?
            }
            "returns" => function.return_type = Some(value),
            "const" => function.is_const = parse_flag("function", "const", &value)?,
            _ => {}
        }
    }

    if function.name.is_empty() {
        return Err(ParseError::missing_attr("function", "name"));
    }
    if empty {
        return Ok(function);
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let (start, child_empty) = match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => (e.into_owned(), false),
            Ok(Event::Empty(e)) => (e.into_owned(), true),
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: format!(
                        "unexpected end of document inside function '{}'",
                        function.name
                    ),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => continue,
        };

        let name_bytes = start.name().as_ref().to_vec();
        match std::str::from_utf8(&name_bytes)? {
            "arg" => {
                let mut ty = None;
                let mut arg_name = String::new();
                for (key, value) in attributes(&start)? {
                    match key.as_str() {
                        "type" => ty = Some(value),
                        "name" => arg_name = value,
                        _ => {}
                    }
                }
                if !child_empty {
                    read_text(reader, "arg")?;
                }
                let ty = ty.ok_or_else(|| ParseError::missing_attr("arg", "type"))?;
                function.add_arg(ty, arg_name);
            }
            "bind" => {
                let (platform, value) = parse_bind(reader, &start, child_empty)?;
                if function.binds.insert(platform, value).is_some() {
                    return Err(ParseError::duplicate(
                        "bind",
                        format!("{}@{}", function.name, platform),
                    ));
                }
            }
            "body" => {
                let body = if child_empty {
                    String::new()
                } else {
                    read_text(reader, "body")?
                };
                function.set_definition(body);
            }
            other => return Err(ParseError::unknown_element(other, "function")),
        }
    }

    Ok(function)
}

/// Parses a member, hardcode or pad element.
fn parse_member(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    tag: &str,
    empty: bool,
) -> Result<Member, ParseError> {
    let member_type = match tag {
        "hardcode" => MemberType::Hardcode,
        "pad" => MemberType::Pad,
        _ => MemberType::Default,
    };
    let mut member = Member::new(member_type, "", "");
    // Platforms named in `platforms=` may still receive one real `bind`.
    let mut listed = HashSet::new();

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "type" => member.ty = value,
            "name" => member.name = value,
            "count" => {
                member.count = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::invalid_attr(tag, "count", &value))?,
                )
            }
            "platforms" => {
                for platform in parse_platform_list(tag, &value)? {
                    member.hardcodes.entry(platform).or_default();
                    listed.insert(platform);
                }
            }
            _ => {}
        }
    }

    if member_type != MemberType::Pad {
        if member.ty.is_empty() {
            return Err(ParseError::missing_attr(tag, "type"));
        }
        if member.name.is_empty() {
            return Err(ParseError::missing_attr(tag, "name"));
        }
    }
    if empty {
        return Ok(member);
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let (start, child_empty) = match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => (e.into_owned(), false),
            Ok(Event::Empty(e)) => (e.into_owned(), true),
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: format!("unexpected end of document inside {tag}"),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => continue,
        };

        let name_bytes = start.name().as_ref().to_vec();
        match std::str::from_utf8(&name_bytes)? {
            "bind" => {
                let (platform, value) = parse_bind(reader, &start, child_empty)?;
                let replaced = member.hardcodes.insert(platform, value).is_some();
                if replaced && !listed.remove(&platform) {
                    let owner = if member.name.is_empty() { tag } else { member.name.as_str() };
                    return Err(ParseError::duplicate("bind", format!("{owner}@{platform}")));
                }
            }
            other => return Err(ParseError::unknown_element(other, tag)),
        }
    }

    Ok(member)
}

/// Parses a `bind` element into its platform and text value.
fn parse_bind(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    empty: bool,
) -> Result<(Platform, String), ParseError> {
    let mut platform = None;
    for (key, value) in attributes(e)? {
        if key == "platform" {
            platform = Some(
                Platform::parse(&value)
                    .ok_or_else(|| ParseError::invalid_attr("bind", "platform", &value))?,
            );
        }
    }
    let platform = platform.ok_or_else(|| ParseError::missing_attr("bind", "platform"))?;
    let value = if empty {
        String::new()
    } else {
        read_text(reader, "bind")?
    };
    Ok((platform, value))
}

/// Parses a comma-separated platform list, or `all`.
fn parse_platform_list(element: &str, value: &str) -> Result<Vec<Platform>, ParseError> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(Platform::ALL.to_vec());
    }
    value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| Platform::parse(p).ok_or_else(|| ParseError::invalid_attr(element, "platforms", p)))
        .collect()
}

/// Reads the text content of the current element up to its end tag.
///
/// Surrounding whitespace is trimmed; inner whitespace is kept verbatim.
fn read_text(reader: &mut Reader<&[u8]>, element: &str) -> Result<String, ParseError> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => {
                text.push_str(&t.decode().map_err(quick_xml::Error::from)?);
            }
            Ok(Event::CData(ref t)) => {
                text.push_str(std::str::from_utf8(t.as_ref())?);
            }
            Ok(Event::GeneralRef(ref r)) => push_reference(&mut text, r, element)?,
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                return Err(ParseError::unknown_element(name, element));
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: format!("unexpected end of document inside {element}"),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text.trim().to_string())
}

/// Appends the character a `&...;` reference in text content stands for.
fn push_reference(text: &mut String, r: &BytesRef<'_>, element: &str) -> Result<(), ParseError> {
    if let Some(ch) = r.resolve_char_ref()? {
        text.push(ch);
        return Ok(());
    }
    let name = r.decode().map_err(quick_xml::Error::from)?;
    let resolved = resolve_predefined_entity(&name).ok_or_else(|| ParseError::InvalidStructure {
        message: format!("unknown entity '&{name};' in {element}"),
    })?;
    text.push_str(resolved);
    Ok(())
}
