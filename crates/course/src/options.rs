use binrw::BinRead;


/// Course-wide settings from block 2. Only the entry points matter to the
/// reachability checker, the rest is carried for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, BinRead)]
pub struct Options {
    pub def_events_0: u32,
    pub def_events_1: u32,
    pub loop_type: u16,
    pub time_0: u16,

    _unused0: [u8; 4],

    pub start_next_goto: u8,

    _unused1: [u8; 2],

    pub start_next_goto_coin_boost: u8,
    pub time_1: u16,
    pub time_2: u16,
}

impl Options {
    pub const SIZE: usize = 24;

    pub fn has_coin_boost_entry(&self) -> bool {
        self.start_next_goto_coin_boost != 0
    }
}
