use binrw::BinRead;

use crate::block::Record;


#[derive(Debug, Clone, PartialEq, Eq, BinRead)]
pub struct RailInfo {
    pub id: u8,
    _unknown_1: i8,
    pub point_start: u16,
    pub point_count: u16,
    pub flag: u16,
    _unknown_8: u32,
}

impl Record for RailInfo {
    const SIZE: usize = 12;
}

impl RailInfo {
    pub fn point_range(&self) -> std::ops::Range<usize> {
        let start = self.point_start as usize;
        start..start + self.point_count as usize
    }
}


#[derive(Debug, Clone, PartialEq, BinRead)]
pub struct RailPoint {
    pub offset_x: u16,
    pub offset_y: u16,
    pub speed: f32,
    pub accel: f32,
    pub delay: i16,
    _unknown_e: u16,

    _unknown_10: [u8; 4],
}

impl Record for RailPoint {
    const SIZE: usize = 20;
}
