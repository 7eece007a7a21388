use std::{fs, path::PathBuf};

use crate::error::CardError;

pub(crate) struct FontData {
    bold: Box<[u8]>,
}

impl FontData {
    pub(crate) fn new(mut assets: PathBuf) -> Result<Self, CardError> {
        assets.push("fonts");
        assets.push("Roboto-Bold.ttf");

        let bold = fs::read(&assets)
            .map_err(|source| CardError::LoadFont {
                source,
                path: assets.display().to_string().into_boxed_str(),
            })?
            .into_boxed_slice();

        Ok(Self { bold })
    }

    pub(crate) fn bold(&self) -> &[u8] {
        &self.bold
    }
}
