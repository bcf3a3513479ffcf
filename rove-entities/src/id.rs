use std::{fmt, num::ParseIntError, str::FromStr};

/// Defines a typed integer identifier as assigned by the database.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            pub const fn to_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(from: i64) -> Self {
                Self(from)
            }
        }

        impl From<$name> for i64 {
            fn from(from: $name) -> Self {
                from.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(AccountId);
entity_id!(PostId);
entity_id!(CommentId);
entity_id!(TagId);
entity_id!(LodgingId);
entity_id!(LodgingVisitId);
entity_id!(
    /// Identifies a destination folder.
    FolderId
);
entity_id!(
    /// Identifies a single to-do item of a to-do list.
    ToDoId
);
