//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static COMPONENT: OnceLock<Component> = OnceLock::new();

/// Identity of the running binary, tagged on every log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// The course management HTTP server
    Server,
    /// The end-to-end scenario runner
    Tester,
}

impl Component {
    /// Initialize the global component identity for the server
    pub fn init_server() -> &'static Component {
        COMPONENT.get_or_init(|| Component::Server)
    }

    /// Initialize the global component identity for the tester
    pub fn init_tester() -> &'static Component {
        COMPONENT.get_or_init(|| Component::Tester)
    }

    /// Get the global component identity, defaulting to the server
    pub fn current() -> &'static Component {
        COMPONENT.get_or_init(|| Component::Server)
    }

    /// Crate name used as the tracing target prefix
    pub fn target(&self) -> &'static str {
        match self {
            Component::Server => "cms_server",
            Component::Tester => "tester",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Server => write!(f, "server"),
            Component::Tester => write!(f, "tester"),
        }
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Primary key of a course row
    CourseId
);

entity_id!(
    /// Primary key of an instructor row
    InstructorId
);

entity_id!(
    /// Primary key of a student row
    StudentId
);
