//! Declarative helper for string-keyed identifier enums

/// Declares a closed identifier enum with its kebab-case string ids.
///
/// Generates `ALL`, `KIND`, `id()`, `from_id()`, `Display`, `FromStr` and
/// serde string (de)serialization for the listed variants.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $id:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $id)] $variant ),+
        }

        impl $name {
            /// Every variant, in catalog order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable table name used in errors and logs
            pub const KIND: &'static str = $kind;

            /// String identifier
            pub fn id(self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }

            /// Look up a variant by identifier
            pub fn from_id(id: &str) -> Option<Self> {
                match id {
                    $($id => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.id())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::SpriteError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_id(s).ok_or_else(|| $crate::error::SpriteError::unknown($kind, s))
            }
        }
    };
}
