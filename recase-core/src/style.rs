use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::{Error, Input, format};

/// Target naming convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CaseStyle {
    /// `helloWorld`
    #[default]
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello-world`
    Kebab,
    /// `hello_world`
    Snake,
}

impl CaseStyle {
    /// Every supported style, in display order.
    pub const ALL: [CaseStyle; 4] = [Self::Camel, Self::Pascal, Self::Kebab, Self::Snake];

    /// Short lowercase name (e.g. "kebab").
    pub fn name(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::Kebab => "kebab",
            Self::Snake => "snake",
        }
    }

    /// Word delimiter for delimiter-joined styles.
    pub fn delimiter(self) -> Option<char> {
        match self {
            Self::Camel | Self::Pascal => None,
            Self::Kebab => Some('-'),
            Self::Snake => Some('_'),
        }
    }

    /// Convert `input` to this style.
    pub fn apply<'a>(self, input: impl Into<Input<'a>>) -> String {
        format(input, self)
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Self::Camel),
            "pascal" | "pascalcase" => Ok(Self::Pascal),
            "kebab" | "kebab-case" => Ok(Self::Kebab),
            "snake" | "snake_case" => Ok(Self::Snake),
            _ => Err(Error::UnknownStyle {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for CaseStyle {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for CaseStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
