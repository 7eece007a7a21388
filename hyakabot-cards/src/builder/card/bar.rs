use hyakabot_model::StatusCounts;
use skia_safe::Path;

use super::{color, CardBuilder};
use crate::builder::paint::PaintBuilder;

const BAR_X: f32 = 20.0;
const BAR_Y: f32 = 180.0;
const BAR_W: f32 = 430.0;
const BAR_H: f32 = 15.0;

const BORDER_RADIUS: f32 = 7.0;

impl CardBuilder<'_> {
    pub(crate) fn draw_status_bar(&mut self, counts: &StatusCounts) -> &mut Self {
        let mut x = BAR_X;

        for segment in bar_segments(counts, BAR_W) {
            let path = rounded_rect(
                x,
                BAR_Y,
                segment.width,
                BAR_H,
                BORDER_RADIUS,
                segment.round_left,
                segment.round_right,
            );

            let (r, g, b) = segment.color;
            let paint = PaintBuilder::rgb(r, g, b).anti_alias().build();
            self.canvas.draw_path(&path, &paint);

            x += segment.width;
        }

        self
    }
}

#[derive(Debug, PartialEq)]
struct BarSegment {
    width: f32,
    color: (u8, u8, u8),
    round_left: bool,
    round_right: bool,
}

/// Split the bar into one segment per non-zero status, in the fixed
/// order watching, to-watch, completed, paused, dropped. Only the
/// outermost segments get rounded.
fn bar_segments(counts: &StatusCounts, width: f32) -> Vec<BarSegment> {
    // an empty list also dodges the division below
    if counts.total == 0 {
        return Vec::new();
    }

    let sections = [
        (counts.watching, color::WATCHING),
        (counts.to_watch, color::TO_WATCH),
        (counts.completed, color::COMPLETED),
        (counts.paused, color::PAUSED),
        (counts.dropped, color::DROPPED),
    ];

    let mut segments: Vec<_> = sections
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, color)| BarSegment {
            width: count as f32 / counts.total as f32 * width,
            color,
            round_left: false,
            round_right: false,
        })
        .collect();

    if let Some(first) = segments.first_mut() {
        first.round_left = true;
    }

    if let Some(last) = segments.last_mut() {
        last.round_right = true;
    }

    segments
}

/// Outline a rectangle with straight edges, replacing the corners of
/// the rounded sides by tangent quarter arcs.
fn rounded_rect(
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    radius: f32,
    round_left: bool,
    round_right: bool,
) -> Path {
    let mut path = Path::new();

    if round_left {
        path.move_to((x + radius, y));
        path.arc_to_tangent((x, y), (x, y + radius), radius);
        path.line_to((x, y + h - radius));
        path.arc_to_tangent((x, y + h), (x + radius, y + h), radius);
    } else {
        path.move_to((x, y));
        path.line_to((x, y + h));
    }

    if round_right {
        path.line_to((x + w - radius, y + h));
        path.arc_to_tangent((x + w, y + h), (x + w, y + h - radius), radius);
        path.line_to((x + w, y + radius));
        path.arc_to_tangent((x + w, y), (x + w - radius, y), radius);
    } else {
        path.line_to((x + w, y + h));
        path.line_to((x + w, y));
    }

    path.close();

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_segments_without_total() {
        let counts = StatusCounts::default();

        assert!(bar_segments(&counts, BAR_W).is_empty());
    }

    #[test]
    fn two_even_segments() {
        let counts = StatusCounts {
            watching: 5,
            to_watch: 5,
            total: 10,
            ..Default::default()
        };

        let segments = bar_segments(&counts, BAR_W);

        assert_eq!(
            segments,
            vec![
                BarSegment {
                    width: BAR_W / 2.0,
                    color: color::WATCHING,
                    round_left: true,
                    round_right: false,
                },
                BarSegment {
                    width: BAR_W / 2.0,
                    color: color::TO_WATCH,
                    round_left: false,
                    round_right: true,
                },
            ]
        );
    }

    #[test]
    fn zero_counts_are_skipped() {
        let counts = StatusCounts {
            watching: 1,
            completed: 2,
            dropped: 1,
            total: 4,
            ..Default::default()
        };

        let segments = bar_segments(&counts, BAR_W);
        let colors: Vec<_> = segments.iter().map(|segment| segment.color).collect();

        assert_eq!(
            colors,
            vec![color::WATCHING, color::COMPLETED, color::DROPPED]
        );
    }

    #[test]
    fn single_segment_rounds_both_sides() {
        let counts = StatusCounts {
            completed: 3,
            total: 3,
            ..Default::default()
        };

        let segments = bar_segments(&counts, BAR_W);

        assert_eq!(segments.len(), 1);
        assert!(segments[0].round_left);
        assert!(segments[0].round_right);
        assert_eq!(segments[0].width, BAR_W);
    }

    #[test]
    fn segment_widths_fill_the_bar() {
        let counts = StatusCounts {
            watching: 7,
            to_watch: 11,
            completed: 42,
            paused: 3,
            dropped: 1,
            total: 64,
        };

        let segments = bar_segments(&counts, BAR_W);
        let sum: f32 = segments.iter().map(|segment| segment.width).sum();

        assert!((sum - BAR_W).abs() < f32::EPSILON * BAR_W);
    }
}
