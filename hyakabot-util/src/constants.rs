pub const HYAKANIME_BASE: &str = "https://hyakanime.fr/";

pub const BLUE: u32 = 0x0099FF;
pub const RED: u32 = 0xE74C3C;

pub const GENERAL_ISSUE: &str = "Something went wrong, try again later";
pub const HYAKANIME_API_ISSUE: &str = "Some issue with the hyakanime api, try again later";
