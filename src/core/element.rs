// Observed Elements
// Measurement seam between the observer and whatever surface it watches

use super::ElementBox;

/// A rendered surface whose size can be sampled
///
/// The observer holds the element only while attached and never mutates it;
/// ownership stays with the surrounding view. `None` means the element is
/// not currently in the layout tree (e.g. unmounted mid-measure) - the
/// observer retains its previous dimensions in that case.
pub trait Measurable {
    /// Sample the element's current bounding box
    fn bounding_box(&self) -> Option<ElementBox>;
}

/// The terminal grid as an observed element
///
/// Used by the demo binary: the whole terminal plays the role of the
/// container element, with cells standing in for pixels.
#[derive(Debug, Default)]
pub struct TerminalElement;

impl TerminalElement {
    pub fn new() -> Self {
        Self
    }
}

impl Measurable for TerminalElement {
    fn bounding_box(&self) -> Option<ElementBox> {
        let (width, height) = crossterm::terminal::size().ok()?;
        Some(ElementBox::new(f64::from(width), f64::from(height)))
    }
}
