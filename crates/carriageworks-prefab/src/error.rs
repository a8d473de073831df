//! Errors raised by the strict builder variants and by tree emission.
//!
//! The default builder paths never fail; they keep the permissive contract
//! of the authoring pipeline. These errors exist only behind the opt-in
//! `try_` functions and [`crate::dump::to_ron_string`].

/// Error from a strict (`try_`) builder variant or from emission.
#[derive(Debug, thiserror::Error)]
pub enum PrefabError {
    /// The colour string is not six hex digits after `#`-stripping.
    #[error("malformed colour hex '{value}': expected 6 hex digits")]
    MalformedHexColour { value: String },

    /// A repeated-child count was zero.
    #[error("{builder} requires at least one {unit} (got 0)")]
    ZeroCount {
        builder: &'static str,
        unit: &'static str,
    },

    /// The tree could not be rendered.
    #[error("emit error: {detail}")]
    Emit { detail: String },
}
