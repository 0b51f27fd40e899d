use std::io::Cursor;

use binrw::{BinRead, Endian};

use crate::header::BlockKind;
use crate::{Error, Result};


const ACTOR_TERMINATOR: [u8; 4] = [0xFF; 4];


/// A record stored as a homogeneous fixed-width array inside a block.
pub trait Record {
    const SIZE: usize;
}


pub(crate) fn read_one<T>(data: &[u8], endian: Endian) -> Result<T>
where
    T: for<'a> BinRead<Args<'a> = ()>,
{
    let mut reader = Cursor::new(data);
    Ok(T::read_options(&mut reader, endian, ())?)
}


pub(crate) fn read_array<T>(kind: BlockKind, data: &[u8], endian: Endian) -> Result<Vec<T>>
where
    T: Record + for<'a> BinRead<Args<'a> = ()>,
{
    if data.len() % T::SIZE != 0 {
        return Err(Error::RecordWidthMismatch {
            block: kind,
            len: data.len(),
            width: T::SIZE,
        });
    }

    let count = data.len() / T::SIZE;
    let mut reader = Cursor::new(data);
    let mut records = Vec::with_capacity(count);

    for _ in 0..count {
        records.push(T::read_options(&mut reader, endian, ())?);
    }

    Ok(records)
}


/// Map actor arrays carry a trailing `u32(-1)` after the last record.
pub(crate) fn read_terminated_array<T>(
    kind: BlockKind,
    data: &[u8],
    endian: Endian,
) -> Result<Vec<T>>
where
    T: Record + for<'a> BinRead<Args<'a> = ()>,
{
    let Some(body_len) = data.len().checked_sub(ACTOR_TERMINATOR.len()) else {
        return Err(Error::MissingActorTerminator);
    };

    if data[body_len..] != ACTOR_TERMINATOR {
        return Err(Error::MissingActorTerminator);
    }

    if body_len == 0 {
        return Err(Error::EmptyActorBlock);
    }

    read_array(kind, &data[..body_len], endian)
}
