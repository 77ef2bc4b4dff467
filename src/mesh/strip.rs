//! Cook-time strip flags: a two-byte bitfield recording which editor/server
//! data was removed when the asset was cooked.

use binrw::binrw;
use serde::Serialize;

#[binrw]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[br(little)]
pub struct StripDataFlags {
    pub global: u8,
    pub class: u8,
}

impl StripDataFlags {
    const EDITOR_DATA_STRIPPED: u8 = 1;
    const SERVER_DATA_STRIPPED: u8 = 2;

    pub fn is_editor_data_stripped(&self) -> bool {
        (self.global & Self::EDITOR_DATA_STRIPPED) != 0
    }

    pub fn is_data_stripped_for_server(&self) -> bool {
        (self.global & Self::SERVER_DATA_STRIPPED) != 0
    }

    pub fn is_class_data_stripped(&self, flag: u8) -> bool {
        (self.class & flag) != 0
    }

    /// Flags as written by a standard cook: editor data removed.
    pub fn cooked() -> Self {
        Self {
            global: Self::EDITOR_DATA_STRIPPED,
            class: 0,
        }
    }
}
