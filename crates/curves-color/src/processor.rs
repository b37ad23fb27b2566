//! Buffer processing.
//!
//! [`PixelProcessor`] runs a [`CompositeTransform`] over whole buffers,
//! either normalized `f32` pixels or raw channel bytes of a color space.
//! With the `parallel` feature, pixels are split across rayon workers; each
//! worker calls the same immutable composite.

use curves_core::{ColorSpace, Error as CoreError};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{ColorResult, CompositeTransform};

/// Pixels per work item.
const BATCH_PIXELS: usize = 4096;

/// Applies composite transforms to pixel buffers.
///
/// # Example
///
/// ```rust
/// use curves_color::{CompositeTransform, PixelProcessor};
/// use curves_core::ColorSpace;
///
/// let mut proc = PixelProcessor::new();
/// let mut data = vec![10u8, 20, 30, 255, 40, 50, 60, 255];
/// proc.process_bytes(&CompositeTransform::identity(), &ColorSpace::rgba8(), &mut data)
///     .unwrap();
/// assert_eq!(data, [10, 20, 30, 255, 40, 50, 60, 255]);
/// assert_eq!(proc.pixels_processed(), 2);
/// ```
#[derive(Debug, Default)]
pub struct PixelProcessor {
    /// Number of pixels processed.
    pixels_processed: u64,
}

impl PixelProcessor {
    /// Creates a processor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pixels processed so far.
    pub fn pixels_processed(&self) -> u64 {
        self.pixels_processed
    }

    /// Resets statistics.
    pub fn reset_stats(&mut self) {
        self.pixels_processed = 0;
    }

    /// Transforms interleaved normalized pixels of `channels` values each.
    ///
    /// # Errors
    ///
    /// [`ColorError::Core`](crate::ColorError::Core) when `data` is not a whole number of pixels.
    pub fn process_f32(
        &mut self,
        transform: &CompositeTransform,
        data: &mut [f32],
        channels: usize,
    ) -> ColorResult<()> {
        if channels == 0 || data.len() % channels != 0 {
            return Err(CoreError::BufferSize {
                len: data.len(),
                pixel_size: channels,
            }
            .into());
        }

        let pixels = data.len() / channels;
        self.pixels_processed += pixels as u64;
        if transform.is_identity() {
            return Ok(());
        }
        debug!(pixels, channels, stages = transform.len(), "processing f32 buffer");

        let run = |batch: &mut [f32]| {
            for px in batch.chunks_exact_mut(channels) {
                transform.apply(px);
            }
        };

        #[cfg(feature = "parallel")]
        data.par_chunks_mut(BATCH_PIXELS * channels).for_each(run);
        #[cfg(not(feature = "parallel"))]
        data.chunks_mut(BATCH_PIXELS * channels).for_each(run);

        Ok(())
    }

    /// Transforms raw pixels laid out as `space` describes.
    ///
    /// Every pixel is decoded to normalized values, transformed, and encoded
    /// back. Integer channels are rounded to nearest.
    ///
    /// # Errors
    ///
    /// [`ColorError::Core`](crate::ColorError::Core) when `data` is not a whole number of pixels.
    pub fn process_bytes(
        &mut self,
        transform: &CompositeTransform,
        space: &ColorSpace,
        data: &mut [u8],
    ) -> ColorResult<()> {
        let pixel_size = space.pixel_size();
        if pixel_size == 0 || data.len() % pixel_size != 0 {
            return Err(CoreError::BufferSize {
                len: data.len(),
                pixel_size,
            }
            .into());
        }

        let pixels = data.len() / pixel_size;
        self.pixels_processed += pixels as u64;
        if transform.is_identity() {
            return Ok(());
        }
        debug!(pixels, space = %space.id, stages = transform.len(), "processing raw buffer");

        let channels = space.channel_count();
        let run = |batch: &mut [u8]| -> ColorResult<()> {
            let mut px = vec![0.0_f32; channels];
            for raw in batch.chunks_exact_mut(pixel_size) {
                space.decode_pixel(raw, &mut px)?;
                transform.apply(&mut px);
                space.encode_pixel(&px, raw)?;
            }
            Ok(())
        };

        #[cfg(feature = "parallel")]
        data.par_chunks_mut(BATCH_PIXELS * pixel_size).try_for_each(run)?;
        #[cfg(not(feature = "parallel"))]
        data.chunks_mut(BATCH_PIXELS * pixel_size).try_for_each(run)?;

        Ok(())
    }
}
