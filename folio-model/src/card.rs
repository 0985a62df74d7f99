//! Minimal text surface shared by carousel items.

/// Anything that can be rendered as a titled card.
///
/// Text renderers (the CLI, logs) only need a headline and a secondary
/// line; the richer fields stay on the concrete types.
pub trait CardLike {
    fn title(&self) -> &str;

    fn subtitle(&self) -> &str;
}
