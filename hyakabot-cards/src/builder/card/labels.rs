use hyakabot_model::{AggregatedStats, StatusCounts};

use super::{color, CardBuilder};
use crate::{
    builder::{font::FontBuilder, paint::PaintBuilder},
    error::FontError,
    font::FontData,
};

const FONT_SIZE: f32 = 16.0;

const LEFT_COLUMN_X: f32 = 25.0;
const RIGHT_COLUMN_X: f32 = 260.0;
const ROW_H: f32 = 20.0;

const USER_STATS_Y: f32 = 60.0;
const STATUS_Y: f32 = 120.0;

impl CardBuilder<'_> {
    pub(crate) fn draw_user_stats(
        &mut self,
        stats: &AggregatedStats,
        font_data: &FontData,
    ) -> Result<&mut Self, FontError> {
        let font = FontBuilder::build(font_data, FONT_SIZE)?;
        let (r, g, b) = color::TEXT;
        let paint = PaintBuilder::rgb(r, g, b).anti_alias().build();

        let lines = [
            ("Titres ajoutés", stats.total_episodes),
            ("Titres rewatch", stats.rewatched_animes),
            ("Épisodes vus", stats.total_progression),
            ("Épisodes rewatch", stats.rewatched_episodes),
        ];

        for (i, (label, value)) in lines.into_iter().enumerate() {
            let x = if i < 2 { LEFT_COLUMN_X } else { RIGHT_COLUMN_X };
            let y = USER_STATS_Y + (i % 2) as f32 * ROW_H;

            self.canvas
                .draw_str(format!("{label}: {value}"), (x, y), &font, &paint);
        }

        Ok(self)
    }

    pub(crate) fn draw_status_labels(
        &mut self,
        counts: &StatusCounts,
        font_data: &FontData,
    ) -> Result<&mut Self, FontError> {
        let font = FontBuilder::build(font_data, FONT_SIZE)?;

        let lines = [
            ("Total", counts.total, color::TEXT),
            ("À voir", counts.to_watch, color::TO_WATCH),
            ("En Pause", counts.paused, color::PAUSED),
            ("En cours", counts.watching, color::WATCHING),
            ("Terminé", counts.completed, color::COMPLETED),
            ("Abandonné", counts.dropped, color::DROPPED),
        ];

        for (i, (label, value, (r, g, b))) in lines.into_iter().enumerate() {
            let x = if i < 3 { LEFT_COLUMN_X } else { RIGHT_COLUMN_X };
            let y = STATUS_Y + (i % 3) as f32 * ROW_H;
            let paint = PaintBuilder::rgb(r, g, b).anti_alias().build();

            self.canvas
                .draw_str(format!("{label}: {value}"), (x, y), &font, &paint);
        }

        Ok(self)
    }
}
