use binrw::BinRead;

use crate::block::Record;


#[derive(Debug, Clone, PartialEq, Eq, BinRead)]
pub struct ScrollData {
    pub bound_0_upper: i32,
    pub bound_0_lower: i32,
    pub bound_1_upper: i32,
    pub bound_1_lower: i32,
    pub id: u16,
    pub flag: u16,
    pub mp_bound_adjust_upper: i16,
    pub mp_bound_adjust_lower: i16,

    _unused: [u8; 4],
}

impl Record for ScrollData {
    const SIZE: usize = 28;
}
