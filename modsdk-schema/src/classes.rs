//! Class, function and member definitions.

use crate::types::{ClassName, Platform};
use std::collections::HashMap;

/// Class definition as declared in the schema.
#[derive(Debug, Clone)]
pub struct ClassDefinition {
    /// Fully-qualified class name.
    pub name: ClassName,
    /// Direct base classes, in declaration order.
    pub superclasses: Vec<String>,
    /// Member functions, in declaration order.
    pub functions: Vec<Function>,
    /// Data members and layout directives, in declaration order.
    pub members: Vec<Member>,
    /// Verbatim text emitted at the top of the class body.
    pub inlines: Vec<Inline>,
}

impl ClassDefinition {
    /// Creates a new class definition with no bases or contents.
    #[must_use]
    pub fn new(name: impl Into<ClassName>) -> Self {
        Self {
            name: name.into(),
            superclasses: Vec::new(),
            functions: Vec::new(),
            members: Vec::new(),
            inlines: Vec::new(),
        }
    }

    /// Adds a direct base class.
    pub fn add_superclass(&mut self, name: impl Into<String>) {
        self.superclasses.push(name.into());
    }

    /// Adds a function, pointing its back-reference at this class.
    pub fn add_function(&mut self, mut function: Function) {
        function.parent_class = self.name.clone();
        self.functions.push(function);
    }

    /// Adds a member.
    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Adds an inline fragment.
    pub fn add_inline(&mut self, inlined: impl Into<String>) {
        self.inlines.push(Inline {
            inlined: inlined.into(),
        });
    }
}

/// Kind of member function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FunctionType {
    /// Constructor.
    Constructor,
    /// Destructor.
    Destructor,
    /// Virtual member function.
    Virtual,
    /// Static member function.
    Static,
    /// Ordinary member function.
    #[default]
    Normal,
}

impl FunctionType {
    /// Parses a function kind from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "constructor" | "ctor" => Some(Self::Constructor),
            "destructor" | "dtor" => Some(Self::Destructor),
            "virtual" => Some(Self::Virtual),
            "static" => Some(Self::Static),
            "normal" | "" => Some(Self::Normal),
            _ => None,
        }
    }

    /// Returns true for constructors and destructors.
    #[must_use]
    pub const fn is_structor(&self) -> bool {
        matches!(self, Self::Constructor | Self::Destructor)
    }
}

/// Member function definition.
#[derive(Debug, Clone, Default)]
pub struct Function {
    /// Function kind.
    pub function_type: FunctionType,
    /// Function name.
    pub name: String,
    /// Declared return type (None for structors or an implied `void`).
    pub return_type: Option<String>,
    /// Argument types, in order.
    pub args: Vec<String>,
    /// Argument names, empty or the same length as `args`.
    pub argnames: Vec<String>,
    /// Whether the function is const-qualified.
    pub is_const: bool,
    /// Whether the function has an out-of-line body.
    pub is_defined: bool,
    /// Body text including its enclosing braces, present iff `is_defined`.
    pub definition: Option<String>,
    /// Per-platform binding; empty or absent means unsupported.
    pub binds: HashMap<Platform, String>,
    /// Name of the owning class.
    pub parent_class: ClassName,
}

impl Function {
    /// Creates a new ordinary function with no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, function_type: FunctionType) -> Self {
        Self {
            name: name.into(),
            function_type,
            ..Self::default()
        }
    }

    /// Adds an argument.
    pub fn add_arg(&mut self, ty: impl Into<String>, name: impl Into<String>) {
        self.args.push(ty.into());
        self.argnames.push(name.into());
    }

    /// Attaches an out-of-line body.
    pub fn set_definition(&mut self, body: impl Into<String>) {
        self.is_defined = true;
        self.definition = Some(body.into());
    }

    /// Returns the binding for a platform, or an empty string if there is none.
    #[must_use]
    pub fn bind(&self, platform: Platform) -> &str {
        self.binds.get(&platform).map_or("", String::as_str)
    }

    /// Returns true if the function has a non-empty binding on the platform.
    #[must_use]
    pub fn is_bound_on(&self, platform: Platform) -> bool {
        !self.bind(platform).is_empty()
    }
}

/// Kind of data member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemberType {
    /// Plain data member.
    #[default]
    Default,
    /// Member placed at a hardcoded per-platform value.
    Hardcode,
    /// Raw padding.
    Pad,
}

/// Data member or layout directive.
#[derive(Debug, Clone, Default)]
pub struct Member {
    /// Member kind.
    pub member_type: MemberType,
    /// Member type text.
    pub ty: String,
    /// Member name. Hardcode members carry a 2-character prefix.
    pub name: String,
    /// Array dimension (None or zero for scalars).
    pub count: Option<usize>,
    /// Per-platform hardcoded values.
    pub hardcodes: HashMap<Platform, String>,
}

impl Member {
    /// Creates a new member.
    #[must_use]
    pub fn new(member_type: MemberType, ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            member_type,
            ty: ty.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a padding directive.
    #[must_use]
    pub fn pad() -> Self {
        Self::new(MemberType::Pad, "", "")
    }

    /// Returns true if the member has an entry for the platform.
    #[must_use]
    pub fn is_present_on(&self, platform: Platform) -> bool {
        self.hardcodes.contains_key(&platform)
    }
}

/// Verbatim class-body fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    /// Text copied into the class body.
    pub inlined: String,
}
