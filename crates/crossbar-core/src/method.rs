//! HTTP method enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownMethod;

/// The fixed set of HTTP methods a route can be keyed on.
///
/// Parsing is case-sensitive: the wire tokens are uppercase, and anything
/// else is rejected as [`UnknownMethod`]. Serde representation matches the
/// wire tokens, so metadata carried through configuration or codegen uses
/// `"GET"`, `"POST"`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Trace,
}

impl HttpMethod {
    /// Every enumerated method, in declaration order.
    ///
    /// Route metadata declared without an explicit method set expands
    /// across this list.
    pub const ALL: [Self; 8] = [
        Self::Get,
        Self::Head,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Delete,
        Self::Options,
        Self::Trace,
    ];

    /// Returns the uppercase wire token for this method.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "OPTIONS" => Ok(Self::Options),
            "TRACE" => Ok(Self::Trace),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_uppercase_token() {
        for method in HttpMethod::ALL {
            assert_eq!(method.as_str().parse::<HttpMethod>().unwrap(), method);
        }
    }

    #[test]
    fn rejects_lowercase_and_unknown_tokens() {
        assert_eq!("get".parse::<HttpMethod>(), Err(UnknownMethod("get".into())));
        assert_eq!(
            "FETCH".parse::<HttpMethod>(),
            Err(UnknownMethod("FETCH".into()))
        );
        assert_eq!("".parse::<HttpMethod>(), Err(UnknownMethod(String::new())));
    }

    #[test]
    fn displays_the_wire_token() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn serde_round_trips_as_uppercase_strings() {
        let json = serde_json::to_string(&HttpMethod::Delete).unwrap();
        assert_eq!(json, "\"DELETE\"");

        let back: HttpMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HttpMethod::Delete);
    }
}
