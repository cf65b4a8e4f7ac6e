//! Window icon shown by the window manager and the drawn title bar.

use std::fmt;

use crate::error::{ChromeError, Result};

/// RGBA icon image.
#[derive(Clone, PartialEq, Eq)]
pub struct WindowIcon {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
}

impl WindowIcon {
    /// Build an icon from row-major RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::InvalidIcon`] if a dimension is zero or the
    /// data length is not `width * height * 4`.
    pub fn from_rgba(rgba: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ChromeError::InvalidIcon(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ChromeError::InvalidIcon(format!(
                "expected {expected} bytes of RGBA data, got {}",
                rgba.len()
            )));
        }
        Ok(Self { rgba, width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixels.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub(crate) fn to_winit_icon(&self) -> Result<winit::window::Icon> {
        winit::window::Icon::from_rgba(self.rgba.clone(), self.width, self.height)
            .map_err(|err| ChromeError::InvalidIcon(err.to_string()))
    }
}

impl fmt::Debug for WindowIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowIcon")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data_len", &self.rgba.len())
            .finish()
    }
}
