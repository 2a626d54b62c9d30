//! Terminal viewport.
//!
//! The root of a full-screen tree lays out into the terminal window. The
//! size is read through crossterm; when there is no terminal (pipes, CI) a
//! classic 80x24 box is used instead.

use tracing::debug;

use crate::types::Size;

/// Viewport used when the terminal size cannot be read.
pub const DEFAULT_VIEWPORT: Size = Size::new(80, 24);

/// Current terminal size in cells, or [`DEFAULT_VIEWPORT`].
pub fn detect_viewport() -> Size {
    viewport_from(crossterm::terminal::size())
}

fn viewport_from(size: std::io::Result<(u16, u16)>) -> Size {
    match size {
        Ok((width, height)) if width > 0 && height > 0 => {
            Size::new(i32::from(width), i32::from(height))
        }
        Ok((width, height)) => {
            debug!(width, height, "terminal reported an empty size, using default viewport");
            DEFAULT_VIEWPORT
        }
        Err(error) => {
            debug!(%error, "terminal size unavailable, using default viewport");
            DEFAULT_VIEWPORT
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
