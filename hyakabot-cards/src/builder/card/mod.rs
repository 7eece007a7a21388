mod bar;
mod labels;

use skia_safe::Canvas;

pub(crate) struct CardBuilder<'c> {
    canvas: &'c mut Canvas,
}

impl<'c> CardBuilder<'c> {
    pub(crate) const W: i32 = 490;
    pub(crate) const H: i32 = 200;

    pub(crate) fn new(canvas: &'c mut Canvas) -> Self {
        Self { canvas }
    }
}

pub(crate) mod color {
    pub(crate) const TEXT: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);
    pub(crate) const WATCHING: (u8, u8, u8) = (0x00, 0x99, 0xFF);
    pub(crate) const TO_WATCH: (u8, u8, u8) = (0x9F, 0x9F, 0x9F);
    pub(crate) const COMPLETED: (u8, u8, u8) = (0x00, 0xCC, 0x33);
    pub(crate) const PAUSED: (u8, u8, u8) = (0xA1, 0x6E, 0xFF);
    pub(crate) const DROPPED: (u8, u8, u8) = (0xFF, 0x33, 0x33);
}
