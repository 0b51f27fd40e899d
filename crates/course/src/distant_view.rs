use binrw::BinRead;

use crate::block::Record;


const NAME_LEN: usize = 16;


#[derive(Debug, Clone, PartialEq, Eq, BinRead)]
pub struct DistantView {
    pub id: u16,
    pub offset_x: i16,
    pub offset_y: i16,
    pub offset_z: i16,

    #[br(map = |raw: [u8; NAME_LEN]| name_from_raw(&raw))]
    pub name: String,

    pub parallax_mode: u16,

    _pad: [u8; 2],
}

impl Record for DistantView {
    const SIZE: usize = 28;
}

fn name_from_raw(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}
