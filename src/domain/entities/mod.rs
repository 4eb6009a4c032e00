/// Declares a unit-variant enum whose wire and storage form is a fixed
/// lowercase string, with `as_str`, `Display`, `FromStr` and an `ALL` table.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($label:literal) {
            $( $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(format!("Invalid {}: {}", $label, s)),
                }
            }
        }
    };
}

pub mod admin;
pub mod analytics;
pub mod customer;
pub mod gaming_session;
pub mod menu_item;
pub mod order;
pub mod report;
pub mod station;

pub use admin::*;
pub use analytics::*;
pub use customer::*;
pub use gaming_session::*;
pub use menu_item::*;
pub use order::*;
pub use report::*;
pub use station::*;
