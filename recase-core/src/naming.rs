//! Naming conventions for different programming languages.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::{CaseStyle, Error, format};

/// Language-specific naming conventions.
///
/// Defines which style type, file and field names use, and how reserved words
/// are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Style for type names (e.g., "hello-world" -> "HelloWorld")
    pub type_style: CaseStyle,
    /// Style for file names (e.g., "HelloWorld" -> "hello_world")
    pub file_style: CaseStyle,
    /// Style for field names
    pub field_style: CaseStyle,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        self.safe_name_with::<&str>(name, &[])
    }

    /// Like [`safe_name`](Self::safe_name), also escaping any of `extra`.
    pub fn safe_name_with<S: AsRef<str>>(&self, name: &str, extra: &[S]) -> String {
        if self.is_reserved(name) || extra.iter().any(|w| w.as_ref() == name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&format(name, self.type_style))
    }

    /// Transform for use as a file name.
    pub fn file_name(&self, name: &str) -> String {
        // File names don't need escaping
        format(name, self.file_style)
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        self.safe_name(&format(name, self.field_style))
    }
}

fn escape_rust_reserved(name: &str) -> String {
    format!("r#{}", name)
}

fn escape_with_underscore(name: &str) -> String {
    format!("_{}", name)
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    type_style: CaseStyle::Pascal,
    file_style: CaseStyle::Snake,
    field_style: CaseStyle::Snake,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

/// TypeScript naming conventions.
pub const TYPESCRIPT_NAMING: NamingConvention = NamingConvention {
    type_style: CaseStyle::Pascal,
    file_style: CaseStyle::Kebab,
    field_style: CaseStyle::Camel,
    reserved_words: &[
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "as",
        "implements",
        "interface",
        "let",
        "package",
        "private",
        "protected",
        "public",
        "static",
        "yield",
        "any",
        "boolean",
        "constructor",
        "declare",
        "get",
        "module",
        "require",
        "number",
        "set",
        "string",
        "symbol",
        "type",
        "from",
        "of",
        "async",
        "await",
    ],
    escape_reserved: escape_with_underscore,
};

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    type_style: CaseStyle::Pascal,
    file_style: CaseStyle::Snake,
    field_style: CaseStyle::Pascal, // Go uses PascalCase for exported fields
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
    escape_reserved: escape_with_underscore,
};

/// Languages with a built-in naming profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    #[default]
    Rust,
    TypeScript,
    Go,
}

impl Language {
    pub const ALL: [Language; 3] = [Self::Rust, Self::TypeScript, Self::Go];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::TypeScript => "typescript",
            Self::Go => "go",
        }
    }

    /// The naming profile for this language.
    pub fn naming(self) -> &'static NamingConvention {
        match self {
            Self::Rust => &RUST_NAMING,
            Self::TypeScript => &TYPESCRIPT_NAMING,
            Self::Go => &GO_NAMING,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(Self::Rust),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "go" | "golang" => Ok(Self::Go),
            _ => Err(Error::UnknownLanguage {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
