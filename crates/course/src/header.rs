use core::fmt;
use std::io::Cursor;

use binrw::{BinRead, BinReaderExt, Endian};

use crate::{Error, Result};


pub const BLOCK_COUNT: usize = 15;


/// Named slots of the course file block table. Slots 3, 5, 11 and 12 are
/// reserved and never carry data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Environment,
    Options,
    ScrollData,
    DistantView,
    NextGoto,
    MapActor,
    MapActorResources,
    Area,
    Location,
    RailInfo,
    RailPoint,
}

impl BlockKind {
    pub fn index(self) -> usize {
        match self {
            Self::Environment => 0,
            Self::Options => 1,
            Self::ScrollData => 2,
            Self::DistantView => 4,
            Self::NextGoto => 6,
            Self::MapActor => 7,
            Self::MapActorResources => 8,
            Self::Area => 9,
            Self::Location => 10,
            Self::RailInfo => 13,
            Self::RailPoint => 14,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Environment => "Environment",
            Self::Options => "Options",
            Self::ScrollData => "ScrollData",
            Self::DistantView => "DistantView",
            Self::NextGoto => "NextGoto",
            Self::MapActor => "MapActor",
            Self::MapActorResources => "MapActorResources",
            Self::Area => "Area",
            Self::Location => "Location",
            Self::RailInfo => "RailInfo",
            Self::RailPoint => "RailPoint",
        };

        write!(f, "{} (#{})", name, self.index() + 1)
    }
}


#[derive(Debug, Clone, Copy, BinRead)]
pub struct BlockEntry {
    pub offset: u32,
    pub size: u32,
}


/// Offset/size table at the start of a `courseN.bin` blob.
#[derive(Debug, BinRead)]
pub struct CourseFileHeader {
    #[br(count = BLOCK_COUNT)]
    entries: Vec<BlockEntry>,
}

impl CourseFileHeader {
    pub fn parse(data: &[u8], endian: Endian) -> Result<Self> {
        let mut reader = Cursor::new(data);
        Ok(reader.read_type(endian)?)
    }

    pub fn entry(&self, kind: BlockKind) -> BlockEntry {
        self.entries[kind.index()]
    }

    /// Payload of `kind` within `data`, or `None` when the block is empty.
    pub fn block<'a>(&self, kind: BlockKind, data: &'a [u8]) -> Result<Option<&'a [u8]>> {
        let BlockEntry { offset, size } = self.entry(kind);
        if size == 0 {
            return Ok(None);
        }

        let start = offset as usize;
        let end = start + size as usize;
        if end > data.len() {
            return Err(Error::BlockOutOfBounds {
                block: kind,
                end,
                len: data.len(),
            });
        }

        Ok(Some(&data[start..end]))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn header(endian: Endian, entries: &[(BlockKind, u32, u32)]) -> Vec<u8> {
        let mut table = [(0u32, 0u32); BLOCK_COUNT];
        for (kind, offset, size) in entries {
            table[kind.index()] = (*offset, *size);
        }

        let mut data = Vec::new();
        for (offset, size) in table {
            match endian {
                Endian::Big => {
                    data.extend(offset.to_be_bytes());
                    data.extend(size.to_be_bytes());
                }
                Endian::Little => {
                    data.extend(offset.to_le_bytes());
                    data.extend(size.to_le_bytes());
                }
            }
        }
        data
    }

    #[test]
    fn block_slices_payload() {
        for endian in [Endian::Big, Endian::Little] {
            let mut data = header(endian, &[(BlockKind::Area, 120, 4)]);
            data.extend([1, 2, 3, 4, 5]);

            let header = CourseFileHeader::parse(&data, endian).unwrap();
            let block = header.block(BlockKind::Area, &data).unwrap();

            assert_eq!(block, Some(&[1u8, 2, 3, 4][..]));
        }
    }

    #[test]
    fn empty_block_is_absent() {
        let data = header(Endian::Big, &[(BlockKind::Area, 120, 0)]);
        let header = CourseFileHeader::parse(&data, Endian::Big).unwrap();

        assert_eq!(header.block(BlockKind::Area, &data).unwrap(), None);
        assert_eq!(header.block(BlockKind::NextGoto, &data).unwrap(), None);
    }

    #[test]
    fn block_past_end_is_rejected() {
        let data = header(Endian::Big, &[(BlockKind::Options, 120, 24)]);
        let header = CourseFileHeader::parse(&data, Endian::Big).unwrap();

        let result = header.block(BlockKind::Options, &data);
        assert!(matches!(
            result,
            Err(Error::BlockOutOfBounds { end: 144, len: 120, .. })
        ));
    }

    #[test]
    fn short_header_is_rejected() {
        let result = CourseFileHeader::parse(&[0u8; 40], Endian::Big);
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
