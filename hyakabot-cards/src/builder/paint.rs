use std::mem;

use skia_safe::Paint;

pub(crate) struct PaintBuilder {
    paint: Paint,
}

impl PaintBuilder {
    pub(crate) fn build(&mut self) -> Paint {
        mem::take(&mut self.paint)
    }

    pub(crate) fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut paint = Paint::default();
        paint.set_argb(255, r, g, b);

        Self { paint }
    }

    pub(crate) fn anti_alias(&mut self) -> &mut Self {
        self.paint.set_anti_alias(true);

        self
    }
}
