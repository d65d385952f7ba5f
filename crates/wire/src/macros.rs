// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.

/// Generate a closed class enumeration with its name table.
///
/// Names are given in normalized form (underscores); the wire form swaps
/// them for dashes.
///
/// ```ignore
/// crate::class_enum! {
///     /// Doc comment.
///     pub enum MyClass {
///         Done => "done",
///         ThreadCreated => "thread_created",
///     }
/// }
/// ```
#[macro_export]
macro_rules! class_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $( $variant:ident => $str:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        #[serde(rename_all = "snake_case")]
        $vis enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every registered class, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Normalized name, with underscores.
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $str, )+
                }
            }

            /// Name as the debugger writes it, with dashes.
            pub fn wire_name(self) -> String {
                self.name().replace('_', "-")
            }

            /// Look up a normalized name in the closed set.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $str => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
