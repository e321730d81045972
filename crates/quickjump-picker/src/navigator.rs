use quickjump_common::{PlatformError, Tab};

/// Focuses a tab in the browser. Implemented by the platform layer.
pub trait Navigator {
    fn jump_to(&mut self, tab: &Tab) -> Result<(), PlatformError>;
}

impl<F> Navigator for F
where
    F: FnMut(&Tab) -> Result<(), PlatformError>,
{
    fn jump_to(&mut self, tab: &Tab) -> Result<(), PlatformError> {
        self(tab)
    }
}
