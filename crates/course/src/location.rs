use binrw::BinRead;

use crate::block::Record;


#[derive(Debug, Clone, PartialEq, Eq, BinRead)]
pub struct Location {
    pub offset_x: u16,
    pub offset_y: u16,
    pub size_x: u16,
    pub size_y: u16,
    pub id: u8,

    _pad: [u8; 3],
}

impl Record for Location {
    const SIZE: usize = 12;
}
