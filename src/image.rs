use core::fmt;
use std::{fmt::Debug, sync::Arc};

use glam::{UVec2, Vec2};
use image::RgbaImage;

/// Image
/// A shared bitmap, clones point to the same pixels
#[derive(Clone)]
pub struct Image {
    pixels: Arc<RgbaImage>,
}

impl Image {
    /// Build a blank transparent image
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_rgba(RgbaImage::new(width, height))
    }

    /// Build image from pixels
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Both images refer to the same bitmap
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.pixels, &b.pixels)
    }
}

impl Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        f.debug_struct("Image").field("size", &size).finish()
    }
}

impl Image {
    /// Return image size
    pub fn size(&self) -> UVec2 {
        let (w, h) = self.pixels.dimensions();
        UVec2::new(w, h)
    }

    /// Return image size in Vec2
    pub fn sizef(&self) -> Vec2 {
        let size = self.size();
        Vec2::new(size.x as f32, size.y as f32)
    }
}
