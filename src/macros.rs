/// Declares a closed set of wire literals as an enum.
///
/// Values outside the set are kept verbatim in `Unknown`, so anything the
/// service sends back round-trips unchanged.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the known set.
            Unknown(String),
        }

        impl $name {
            /// Every known wire literal, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unknown(s) => s.as_str(),
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $wire => $name::$variant, )+
                    other => $name::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                match v {
                    $name::Unknown(s) => s,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::model::HashCode for $name {
            fn hash_code(&self) -> i32 {
                $crate::model::HashCode::hash_code(self.as_str())
            }
        }

        impl $crate::query::ToQuery for $name {
            fn write_query(&self, writer: &mut $crate::query::QueryWriter, key: &str) {
                writer.push(key, self.as_str());
            }
        }

        impl $crate::xml::FromXml for $name {
            fn from_xml(node: roxmltree::Node) -> $crate::error::Result<Self> {
                Ok($name::from($crate::xml::text(node).trim()))
            }
        }
    };
}
