use canopy_core::Size;

/// Output of [`MeasuredPlaceholder::render`].
#[derive(Clone, Debug, PartialEq)]
pub enum Placeholder<T> {
    Content(T),
    /// Empty box standing in for hidden content.
    Spacer(Size),
}

impl<T> Placeholder<T> {
    pub fn content(&self) -> Option<&T> {
        match self {
            Placeholder::Content(c) => Some(c),
            Placeholder::Spacer(_) => None,
        }
    }

    pub fn is_content(&self) -> bool {
        matches!(self, Placeholder::Content(_))
    }

    pub fn spacer_size(&self) -> Option<Size> {
        match self {
            Placeholder::Content(_) => None,
            Placeholder::Spacer(s) => Some(*s),
        }
    }
}

/// Keeps the space of content that is sometimes hidden.
///
/// While shown, every layout pass reports the content's size through
/// [`on_measured`](Self::on_measured). While hidden, an empty spacer of the
/// last reported size is rendered instead, so siblings do not reflow.
/// Content hidden on its very first render was never measured and leaves a
/// zero-sized spacer.
#[derive(Debug, Default)]
pub struct MeasuredPlaceholder {
    size: Size,
    hidden: bool,
}

impl MeasuredPlaceholder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<T>(&mut self, hidden: bool, content: impl FnOnce() -> T) -> Placeholder<T> {
        self.hidden = hidden;
        if hidden {
            Placeholder::Spacer(self.size)
        } else {
            Placeholder::Content(content())
        }
    }

    /// Layout callback for the content. Ignored while hidden; returns
    /// whether the recorded size changed.
    pub fn on_measured(&mut self, size: Size) -> bool {
        if self.hidden || size == self.size {
            return false;
        }
        log::trace!("hide: measured {}x{}", size.width, size.height);
        self.size = size;
        true
    }

    pub fn measured_size(&self) -> Size {
        self.size
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
