//! Strongly-typed ID wrappers for all entity types
//!
//! Newtype wrappers keep a `TripId` from ever being passed where a
//! `SectionId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Stable ID for fixtures: the sequence number occupies the
            /// leading 32 bits so the short display form stays distinct.
            pub const fn fixture(seq: u32) -> Self {
                Self(Uuid::from_u128(((seq as u128) << 96) | 0x6c6f_6265))
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                s.parse()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(TripId, "trip-");
define_id!(UserId, "usr-");
define_id!(CityId, "city-");
define_id!(ActivityId, "act-");
define_id!(PostId, "post-");
define_id!(ItemId, "item-");
define_id!(SectionId, "sec-");
