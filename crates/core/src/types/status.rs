//! Closed enums used by user records and operator sessions.
//!
//! Every enum serializes by variant name (`"Active"`, `"Male"`, ...) and
//! parses the same spelling through `FromStr`, so form values, query strings
//! and JSON all agree.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a variant of a closed enum.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseEnumError {
    /// Human-readable name of the enum being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Macro to define a closed, string-named enum.
///
/// Generates the enum with `Serialize`/`Deserialize`, an `ALL` constant in
/// declaration order, `as_str()`, `Display`, and `FromStr`.
macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the canonical spelling of this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

define_string_enum! {
    /// Account status of a back-office customer.
    UserStatus, "status" {
        Active => "Active",
        Inactive => "Inactive",
        Pending => "Pending",
        Blacklisted => "Blacklisted",
    }
}

define_string_enum! {
    /// Customer gender as captured at onboarding.
    Gender, "gender" {
        Male => "Male",
        Female => "Female",
    }
}

define_string_enum! {
    /// Customer marital status.
    MaritalStatus, "marital status" {
        Single => "Single",
        Married => "Married",
        Divorced => "Divorced",
        Widowed => "Widowed",
    }
}

define_string_enum! {
    /// Back-office operator role.
    AdminRole, "admin role" {
        /// Full access, including operator management.
        SuperAdmin => "super_admin",
        /// Can view and edit customer records.
        Admin => "admin",
        /// Read-only access.
        Viewer => "viewer",
    }
}
