use binrw::BinRead;

use crate::block::Record;


/// Rectangular gameplay region. `id` is only unique within one course file.
#[derive(Debug, Clone, Default, PartialEq, Eq, BinRead)]
pub struct Area {
    pub offset_x: u16,
    pub offset_y: u16,
    pub size_x: u16,
    pub size_y: u16,
    pub color_obj: u16,
    pub color_bg: u16,
    pub id: u8,
    pub scroll: u8,
    pub zoom_type: u8,
    pub zoom_id: u8,
    pub zoom_change: u8,
    pub mask: u8,
    pub bg2: u8,
    pub bg3: u8,
    pub direction: u8,
    _unknown: u8,
    pub bgm: u8,
    pub bgm_mode: u8,
    pub distant_view: u8,
    pub flag: u8,

    _pad: [u8; 2],
}

impl Record for Area {
    const SIZE: usize = 28;
}

impl Area {
    pub fn new(id: u8, offset: (u16, u16), size: (u16, u16)) -> Self {
        Self {
            id,
            offset_x: offset.0,
            offset_y: offset.1,
            size_x: size.0,
            size_y: size.1,
            ..Self::default()
        }
    }
}
