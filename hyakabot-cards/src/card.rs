use std::path::PathBuf;

use hyakabot_model::{AggregatedStats, StatusCounts};
use skia_safe::{EncodedImageFormat, Surface};

use crate::{builder::card::CardBuilder, error::CardError, font::FontData};

pub struct StatsCard<'a> {
    counts: &'a StatusCounts,
    stats: &'a AggregatedStats,
    assets: PathBuf,
}

impl<'a> StatsCard<'a> {
    pub fn new(counts: &'a StatusCounts, stats: &'a AggregatedStats) -> Self {
        Self {
            counts,
            stats,
            assets: PathBuf::new(),
        }
    }

    pub fn assets(mut self, assets: PathBuf) -> Self {
        self.assets = assets;

        self
    }

    pub fn draw(&self) -> Result<Vec<u8>, CardError> {
        let size = (CardBuilder::W, CardBuilder::H);
        let mut surface = Surface::new_raster_n32_premul(size).ok_or(CardError::CreateSurface)?;

        let font_data = FontData::new(self.assets.clone())?;

        CardBuilder::new(surface.canvas())
            .draw_user_stats(self.stats, &font_data)?
            .draw_status_labels(self.counts, &font_data)?
            .draw_status_bar(self.counts);

        let png_data = surface
            .image_snapshot()
            .encode_to_data(EncodedImageFormat::PNG)
            .ok_or(CardError::EncodeAsPng)?;

        Ok(png_data.as_bytes().to_vec())
    }
}
