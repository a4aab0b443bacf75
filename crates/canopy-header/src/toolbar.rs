use std::fmt;

use crate::scroller::ReferencePosition;

/// Which header representation is in charge: the hero image with floating
/// actions (`Hidden`), or the compact bar (`Shown`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToolbarState {
    #[default]
    Hidden,
    Shown,
}

impl fmt::Display for ToolbarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToolbarState::Hidden => "HIDDEN",
            ToolbarState::Shown => "SHOWN",
        })
    }
}

/// The bar is shown once the content has scrolled `threshold_offset` px past
/// the title's first-layout position.
///
/// An unset reference, or one recorded as exactly 0, always yields `Hidden`.
/// The comparison is strict and there is no hysteresis: the result depends
/// only on the arguments.
pub fn resolve(
    scroll_offset: f32,
    reference: ReferencePosition,
    threshold_offset: f32,
) -> ToolbarState {
    match reference {
        ReferencePosition::At(y) if y != 0.0 && scroll_offset > y + threshold_offset => {
            ToolbarState::Shown
        }
        _ => ToolbarState::Hidden,
    }
}
