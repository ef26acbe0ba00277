use web_sys::{Document, Window};

#[inline]
pub fn window() -> Window {
    web_sys::window().expect("no window found")
}

/// Returns the root [`Document`].
///
/// # Panics
///
/// Panics if there is no [`Document`] in the root window or no root window is
/// present. This should never be the case in a web environment.
pub fn document() -> Document {
    window().document().expect("no document present")
}

/// Returns the current viewport width in layout pixels.
///
/// A width that cannot be read reports as 0, which keeps width gated
/// elements hidden.
pub fn viewport_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0) as u32
}
