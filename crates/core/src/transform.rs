//! Mapping from native device coordinates to the output canvas.

use crate::error::ConfigError;

/// Native device width in device units.
pub const NATIVE_WIDTH: f64 = 1404.0;
/// Native device height in device units.
pub const NATIVE_HEIGHT: f64 = 1872.0;

/// A point in output canvas units.
pub type Point = (f64, f64);

/// Rescales device coordinates onto a target canvas.
///
/// When the target is relatively taller than the device, x is stretched by
/// the aspect ratio; when it is relatively wider (or equal), y is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapper {
    width: f64,
    height: f64,
    ratio: f64,
}

impl CanvasMapper {
    /// Build a mapper for a `width` x `height` canvas.
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        let ratio = (height / width) / (NATIVE_HEIGHT / NATIVE_WIDTH);
        Ok(Self {
            width,
            height,
            ratio,
        })
    }

    /// The device's own canvas; maps every point to itself.
    pub const fn native() -> Self {
        Self {
            width: NATIVE_WIDTH,
            height: NATIVE_HEIGHT,
            ratio: 1.0,
        }
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Aspect correction factor relative to the native canvas.
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Map a device point onto the canvas.
    pub fn map(&self, x: f32, y: f32) -> Point {
        let x = f64::from(x) * self.width / NATIVE_WIDTH;
        let y = f64::from(y) * self.height / NATIVE_HEIGHT;
        if self.ratio > 1.0 {
            (self.ratio * x, y)
        } else {
            (x, (1.0 / self.ratio) * y)
        }
    }
}

impl Default for CanvasMapper {
    fn default() -> Self {
        Self::native()
    }
}
