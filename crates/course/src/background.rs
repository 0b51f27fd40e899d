use core::fmt;
use std::io::Cursor;

use binrw::{BinRead, Endian};

use crate::{Error, Result};


const TERMINATOR: [u8; 2] = [0xFF, 0xFF];


/// Background layers in storage order. Layer 0 is stored last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    One,
    Two,
    Zero,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::One, Layer::Two, Layer::Zero];

    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Zero => 2,
        }
    }

    /// Suffix of the per-layer archive entry, `courseN_bgdatL{suffix}.bin`.
    pub fn file_suffix(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.file_suffix())
    }
}


#[derive(Debug, Clone, PartialEq, Eq, BinRead)]
pub struct Background {
    pub kind: u16,
    pub offset_x: u16,
    pub offset_y: u16,
    pub size_x: u16,
    pub size_y: u16,
    pub flag: u8,

    _pad: [u8; 5],
}

impl Background {
    pub const SIZE: usize = 16;

    /// Reads records until the next two bytes are `FF FF`. The layer files
    /// carry no count, so running out of data first is an error.
    pub fn read_layer(layer: Layer, data: &[u8], endian: Endian) -> Result<Vec<Self>> {
        let mut reader = Cursor::new(data);
        let mut records = Vec::new();
        let mut pos = 0;

        loop {
            match data.get(pos..pos + TERMINATOR.len()) {
                Some(next) if next == TERMINATOR => break,
                Some(_) if pos + Self::SIZE <= data.len() => (),
                _ => return Err(Error::MissingBackgroundTerminator(layer)),
            }

            records.push(Self::read_options(&mut reader, endian, ())?);
            pos += Self::SIZE;
        }

        Ok(records)
    }
}
