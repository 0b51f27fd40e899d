use binrw::BinRead;

use crate::block::Record;
use crate::geometry::Placement;


pub const FLAG_DISABLED: u16 = 0x80;


/// Entrance/exit point ("portal"). A destination of `(0, 0)` means the portal
/// leads nowhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, BinRead)]
pub struct NextGoto {
    pub offset_x: u16,
    pub offset_y: u16,
    pub camera_offset_x: u16,
    pub camera_offset_y: u16,
    pub id: u8,
    pub destination_file: u8,
    pub destination_next_goto: u8,
    pub kind: u8,
    pub mp_spawn_flag: u8,
    pub area: u8,
    _unused: u8,
    pub mp_inner_gap: u8,
    pub flag: u16,
    pub chibi_yoshi_next_goto: u8,
    pub coin_edit_priority: u8,
    pub rail_info: u8,
    pub rail_point: u8,
    pub wipe_type: u8,
    _pad: u8,
}

impl Record for NextGoto {
    const SIZE: usize = 24;
}

impl NextGoto {
    pub fn new(id: u8, offset: (u16, u16), destination: (u8, u8)) -> Self {
        Self {
            id,
            offset_x: offset.0,
            offset_y: offset.1,
            destination_file: destination.0,
            destination_next_goto: destination.1,
            ..Self::default()
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.flag & FLAG_DISABLED != 0
    }

    pub fn has_no_destination(&self) -> bool {
        self.destination_file == 0 && self.destination_next_goto == 0
    }
}

impl Placement for NextGoto {
    fn position(&self) -> (u16, u16) {
        (self.offset_x, self.offset_y)
    }

    fn area_hint(&self) -> u8 {
        self.area
    }
}
