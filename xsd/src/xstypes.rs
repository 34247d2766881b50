use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub type NCName = String;

pub type Sequence<T> = Vec<T>;

/// A qualified name as spelled in the schema document, e.g. `ifc:IfcElement`.
///
/// Names are compared lexically. The prefix is never resolved to a namespace URI, since the
/// schema refers to its own types through a single fixed prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QName {
    pub prefix: Option<NCName>,
    pub local_name: NCName,
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix.as_ref() {
            write!(f, "{}:{}", prefix, self.local_name)
        } else {
            write!(f, "{}", self.local_name)
        }
    }
}

impl QName {
    pub fn prefixed(prefix: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            local_name: local_name.into(),
        }
    }

    pub fn unprefixed(local_name: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local_name: local_name.into(),
        }
    }

    pub fn parse(source: &str) -> Self {
        if let Some((prefix, local)) = source.split_once(':') {
            Self::prefixed(prefix, local)
        } else {
            Self::unprefixed(source)
        }
    }

    /// Returns the local name if this name carries `prefix`, otherwise the full lexical form.
    pub fn strip_prefix(&self, prefix: &str) -> String {
        match self.prefix.as_deref() {
            Some(p) if p == prefix => self.local_name.clone(),
            _ => self.to_string(),
        }
    }
}

impl FromStr for QName {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
