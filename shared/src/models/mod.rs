//! Domain models
//!
//! Entities, request payloads and response DTOs shared by the server and its
//! tests. Enum columns use the same lowercase/kebab spellings on the wire and
//! in storage.

/// Declares a closed enum with one wire spelling per variant, plus
/// `as_str`, `Display`, `FromStr` and serde in that spelling.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $err:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        #[error("unknown {}: {}", stringify!($name), .0)]
        pub struct $err(pub String);

        impl std::str::FromStr for $name {
            type Err = $err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err($err(other.to_string())),
                }
            }
        }
    };
}

pub mod attendance;
pub mod employee;
pub mod event;
pub mod feedback;
pub mod role;
pub mod user;

pub use attendance::{AttendanceCreate, EventAttendance, ParticipantType};
pub use employee::{Employee, EmployeeType, EmployeeWithRoles, Grade};
pub use event::{
    Event, EventBuckets, EventCreate, EventStats, EventStatus, EventStatusUpdate, EventType,
    EventWithCreator, InProgressEvent, PastEvent, UpcomingEvent,
};
pub use feedback::{EventFeedback, FeedbackCreate};
pub use role::{Role, RoleName};
pub use user::{CurrentUserView, SessionView, SignIn, SignUp, User, UserEmployee, UserSummary};
