use binrw::BinRead;


pub const SLOT_COUNT: usize = 4;
pub const SLOT_NAME_LEN: usize = 32;


/// Particle slot names from block 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, BinRead)]
pub struct Environment {
    #[br(parse_with = parse_slot_names)]
    slot_names: [String; SLOT_COUNT],
}

impl Environment {
    pub fn slot_name(&self, index: usize) -> Option<&str> {
        self.slot_names.get(index).map(String::as_str)
    }

    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slot_names.iter().map(String::as_str)
    }
}

#[binrw::parser(reader)]
fn parse_slot_names() -> binrw::BinResult<[String; SLOT_COUNT]> {
    let mut names: [String; SLOT_COUNT] = Default::default();

    for name in names.iter_mut() {
        let pos = reader.stream_position()?;
        let mut raw = [0u8; SLOT_NAME_LEN];
        reader.read_exact(&mut raw)?;

        let Some(end) = raw.iter().position(|&b| b == 0) else {
            return Err(binrw::Error::AssertFail {
                pos,
                message: "environment slot name is not NUL-terminated".to_string(),
            });
        };

        *name = String::from_utf8_lossy(&raw[..end]).into_owned();
    }

    Ok(names)
}


#[cfg(test)]
mod test {
    use std::io::Cursor;

    use binrw::BinReaderExt;

    use super::*;

    fn slot(name: &str) -> Vec<u8> {
        let mut raw = name.as_bytes().to_vec();
        raw.resize(SLOT_NAME_LEN, 0);
        raw
    }

    #[test]
    fn reads_slot_names() {
        let data = [slot("Pa1_toride"), slot(""), slot("Pa3_rail"), slot("")].concat();
        let env: Environment = Cursor::new(data).read_be().unwrap();

        assert_eq!(env.slot_name(0), Some("Pa1_toride"));
        assert_eq!(env.slot_name(1), Some(""));
        assert_eq!(env.slot_name(2), Some("Pa3_rail"));
        assert_eq!(env.slot_name(4), None);
    }

    #[test]
    fn rejects_unterminated_name() {
        let data = [vec![b'x'; SLOT_NAME_LEN], slot(""), slot(""), slot("")].concat();
        let result: binrw::BinResult<Environment> = Cursor::new(data).read_be();

        assert!(result.is_err());
    }
}
