//! Macros for ergonomic machine construction.

/// Generate an enum implementing the `Ident` trait.
///
/// # Example
///
/// ```
/// use statemap::ident_enum;
///
/// ident_enum! {
///     pub enum PlayerState {
///         Idle,
///         Running,
///         Paused,
///     }
/// }
/// ```
#[macro_export]
macro_rules! ident_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Ident for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Build a string-keyed [`MachineConfig`](crate::core::MachineConfig)
/// from a declarative table.
///
/// Expands to a `Result<MachineConfig<String, String>, BuildError>`.
///
/// # Example
///
/// ```
/// use statemap::machine_config;
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle", "pause" => "paused" },
///         "paused" => { "resume" => "running" },
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $dest:expr ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        (|| -> ::std::result::Result<_, $crate::builder::BuildError> {
            let mut builder = $crate::builder::ConfigBuilder::<String, String>::new()
                .initial($initial)
                $( .state($state) )*;
            $(
                $(
                    builder = builder.transition($state, $event, $dest)?;
                )*
            )*
            builder.build()
        })()
    }};
}
