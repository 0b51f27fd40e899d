use std::collections::{BTreeMap, HashSet};

use binrw::Endian;
use tracing::{error, info, instrument};

use crate::archive::ArchiveReader;
use crate::background::Layer;
use crate::course_file::CourseFile;
use crate::{Error, Result, COURSE_FILE_COUNT};


/// Game release that produced an archive. Only the byte order differs as
/// far as course data is concerned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    #[default]
    WiiU,
    Deluxe,
}

impl Variant {
    pub fn endian(self) -> Endian {
        match self {
            Self::WiiU => Endian::Big,
            Self::Deluxe => Endian::Little,
        }
    }
}


pub fn course_file_name(index: usize) -> String {
    format!("course/course{}.bin", index + 1)
}

pub fn background_file_name(index: usize, layer: Layer) -> String {
    format!("course/course{}_bgdat{}.bin", index + 1, layer)
}


/// The four course file slots of one level, plus every archive entry the
/// course loader did not consume.
#[derive(Debug, Clone, Default)]
pub struct CourseSet {
    endian: Option<Endian>,
    files: [CourseFile; COURSE_FILE_COUNT],
    load_errors: Vec<(usize, String)>,
    resources: BTreeMap<String, Vec<u8>>,
}

impl CourseSet {
    /// Loads all slots from `archive`. Slot 0 must be present and decode
    /// cleanly; a corrupt secondary slot is logged and left empty.
    #[instrument(skip_all, fields(variant = ?variant))]
    pub fn load<A>(archive: &A, variant: Variant) -> Result<Self>
    where
        A: ArchiveReader + ?Sized,
    {
        let endian = variant.endian();
        let mut set = Self {
            endian: Some(endian),
            ..Self::default()
        };
        let mut consumed = HashSet::new();

        for index in 0..COURSE_FILE_COUNT {
            let name = course_file_name(index);
            let data = archive.try_get(&name)?;
            consumed.insert(name);

            let mut layers: [Option<Vec<u8>>; 3] = Default::default();
            for layer in Layer::ALL {
                let name = background_file_name(index, layer);
                layers[layer.index()] = archive.try_get(&name)?;
                consumed.insert(name);
            }

            let result = set.files[index].load(
                index,
                endian,
                data.as_deref(),
                [
                    layers[0].as_deref(),
                    layers[1].as_deref(),
                    layers[2].as_deref(),
                ],
            );

            match result {
                Err(err) if index == 0 => return Err(err),
                Err(err) => {
                    error!(file = index, "course file is corrupt: {}", err);
                    set.load_errors.push((index, err.to_string()));
                }
                Ok(()) if index == 0 && !set.files[0].is_valid() => {
                    return Err(Error::MissingRootFile(0));
                }
                Ok(()) => (),
            }
        }

        for (name, data) in archive.entries()? {
            if !consumed.contains(&name) {
                set.resources.insert(name, data);
            }
        }

        info!(
            files = set.valid_files().count(),
            resources = set.resources.len(),
            "loaded course set"
        );

        Ok(set)
    }

    /// Builds a set from already decoded files. Slot 0 must be valid.
    pub fn from_files(endian: Endian, files: [CourseFile; COURSE_FILE_COUNT]) -> Result<Self> {
        if !files[0].is_valid() {
            return Err(Error::MissingRootFile(0));
        }

        Ok(Self {
            endian: Some(endian),
            files,
            ..Self::default()
        })
    }

    pub fn endian(&self) -> Option<Endian> {
        self.endian
    }

    /// The file in slot `index` if that slot holds one.
    pub fn file(&self, index: usize) -> Option<&CourseFile> {
        self.files.get(index).filter(|file| file.is_valid())
    }

    pub fn slot(&self, index: usize) -> Option<&CourseFile> {
        self.files.get(index)
    }

    pub fn valid_files(&self) -> impl Iterator<Item = (usize, &CourseFile)> {
        self.files
            .iter()
            .enumerate()
            .filter(|(_, file)| file.is_valid())
    }

    pub fn root(&self) -> Option<&CourseFile> {
        self.file(0)
    }

    pub fn load_errors(&self) -> &[(usize, String)] {
        &self.load_errors
    }

    pub fn resources(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.resources
    }
}
