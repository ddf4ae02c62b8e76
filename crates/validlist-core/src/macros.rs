//! Declarative macros for reducing tag and capability boilerplate.
//!
//! These macros generate the repetitive trait implementations shared by the
//! tagged value types and the built-in capability table.

/// Generates `Display` for a tagged value type.
///
/// The plain form prints the tag name, or the raw number for plain scores.
/// The alternate form (`{:#}`) prints `{<label>: <raw>, Tag: <TAG|score>}`.
///
/// # Usage
/// ```ignore
/// impl_tag_display!(Outcome, OutcomeKind, "Return value" {
///     Pass => "PASS", Perfect => "PERFECT", Fail => "FAIL",
/// });
/// ```
macro_rules! impl_tag_display {
    ($type:ident, $kind:ident, $label:literal { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl<W: $crate::value::ScoreWidth> std::fmt::Display for $type<W> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let tag = match self.kind() {
                    $( $kind::$variant => Some($name), )+
                    $kind::Score(_) => None,
                };
                if f.alternate() {
                    write!(
                        f,
                        concat!("{{", $label, ": {}, Tag: {}}}"),
                        self.raw(),
                        tag.unwrap_or("score")
                    )
                } else {
                    match tag {
                        Some(name) => f.write_str(name),
                        None => write!(f, "{}", self.raw()),
                    }
                }
            }
        }

        impl<W: $crate::value::ScoreWidth> std::fmt::Debug for $type<W> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($type), "({})"), self)
            }
        }
    };
}

/// Generates `Capable` for a list of types sharing one capability set.
///
/// # Usage
/// ```ignore
/// impl_capable!(Capabilities::ALL => u8, u16, u32);
/// ```
macro_rules! impl_capable {
    ($caps:expr => $($type:ty),+ $(,)?) => {
        $(
            impl $crate::capability::Capable for $type {
                const CAPABILITIES: $crate::capability::Capabilities = $caps;
            }
        )+
    };
}

// Macros are used via #[macro_use] on the module declaration.
