//! Screen capture.

use std::io::Cursor;

use screenshots::Screen;
use screenshots::image::ImageOutputFormat;

use frankie_protocols::error::AutomationError;

/// A PNG capture of the primary display.
#[derive(Debug)]
pub struct Screenshot {
    pub png: Vec<u8>,
    /// Image size in physical pixels.
    pub width: u32,
    pub height: u32,
    /// Physical pixels per logical point (2.0 on Retina displays).
    pub scale: f32,
}

impl Screenshot {
    /// Convert a point in image pixels to logical screen coordinates.
    pub fn to_logical(&self, x: i32, y: i32) -> (i32, i32) {
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        (
            (x as f32 / scale).round() as i32,
            (y as f32 / scale).round() as i32,
        )
    }
}

fn primary_screen() -> Result<Screen, AutomationError> {
    let screens = Screen::all().map_err(|e| AutomationError::Capture(e.to_string()))?;
    let mut fallback = None;
    for screen in screens {
        if screen.display_info.is_primary {
            return Ok(screen);
        }
        fallback.get_or_insert(screen);
    }
    fallback.ok_or_else(|| AutomationError::Capture("no monitor found".to_string()))
}

/// Capture the primary display. Blocking.
pub fn capture_screen() -> Result<Screenshot, AutomationError> {
    let screen = primary_screen()?;
    let image = screen
        .capture()
        .map_err(|e| AutomationError::Capture(e.to_string()))?;

    let width = image.width();
    let height = image.height();
    let logical_width = screen.display_info.width.max(1);

    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageOutputFormat::Png)
        .map_err(|e| AutomationError::Capture(format!("PNG encoding failed: {e}")))?;

    Ok(Screenshot {
        png: buffer.into_inner(),
        width,
        height,
        scale: width as f32 / logical_width as f32,
    })
}
