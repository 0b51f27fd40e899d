use binrw::BinRead;

use crate::block::Record;
use crate::geometry::Placement;


pub const AIRSHIP_CANNON: u16 = 424;
pub const AREA_WARP: u16 = 432;
pub const FINAL_BATTLE_CONTROLLER: u16 = 497;


/// Placed game object. Actors have no stable ID; they are addressed by their
/// index in the block.
#[derive(Debug, Clone, Default, PartialEq, Eq, BinRead)]
pub struct MapActor {
    pub kind: u16,
    pub offset_x: u16,
    pub offset_y: u16,
    pub event_id: u16,
    pub settings_0: u32,
    pub settings_1: u32,
    pub area: u8,
    pub layer: u8,
    pub movement_id: u8,
    pub link_id: u8,
    pub init_state: u8,

    _pad: [u8; 3],
}

impl Record for MapActor {
    const SIZE: usize = 24;
}


/// Jump encoded in an actor's settings. File indices are still in their
/// on-disk form, where `0` means the actor's own file and `n` means slot
/// `n - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorLink {
    NextGoto { file: u8, next_goto: u8 },
    CourseStart { file: u8 },
}

impl MapActor {
    pub fn new(kind: u16, offset: (u16, u16), settings_0: u32) -> Self {
        Self {
            kind,
            offset_x: offset.0,
            offset_y: offset.1,
            settings_0,
            ..Self::default()
        }
    }

    /// Decodes the cross-area jump of the few actor types that have one.
    /// `area_warps` gates type 432, which older tool revisions ignored.
    pub fn link(&self, area_warps: bool) -> Option<ActorLink> {
        let settings = self.settings_0;

        match self.kind {
            AIRSHIP_CANNON => Some(ActorLink::NextGoto {
                file: (settings >> 8 & 0xFF) as u8,
                next_goto: (settings & 0xFF) as u8,
            }),
            AREA_WARP if area_warps && settings & 0xF == 1 => Some(ActorLink::NextGoto {
                file: (settings >> 4 & 0xF) as u8,
                next_goto: (settings >> 8 & 0xFF) as u8,
            }),
            FINAL_BATTLE_CONTROLLER => Some(ActorLink::CourseStart {
                file: (settings & 0xFF) as u8,
            }),
            _ => None,
        }
    }
}

impl Placement for MapActor {
    fn position(&self) -> (u16, u16) {
        (self.offset_x, self.offset_y)
    }

    fn area_hint(&self) -> u8 {
        self.area
    }
}
