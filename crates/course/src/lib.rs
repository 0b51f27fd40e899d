mod analysis;
mod archive;
mod area;
mod background;
mod block;
mod course_file;
mod course_set;
mod distant_view;
mod environment;
mod geometry;
mod graph;
mod header;
mod location;
mod map_actor;
mod next_goto;
mod options;
mod rail;
mod render;
mod scroll;
mod unreachable;


pub use binrw::Endian;

pub use crate::analysis::{analyze, Analysis, RunResult};
pub use crate::archive::{ArchiveReader, DirArchive, MemoryArchive};
pub use crate::area::Area;
pub use crate::background::{Background, Layer};
pub use crate::course_file::CourseFile;
pub use crate::course_set::{background_file_name, course_file_name, CourseSet, Variant};
pub use crate::distant_view::DistantView;
pub use crate::environment::Environment;
pub use crate::geometry::{Containment, Placement};
pub use crate::graph::{
    traverse, AreaGraph, AreaId, Inconsistency, NextGotoId, RunMode, TraversalConfig,
    TraversalOutcome,
};
pub use crate::header::{BlockEntry, BlockKind, CourseFileHeader};
pub use crate::location::Location;
pub use crate::map_actor::{ActorLink, MapActor};
pub use crate::next_goto::NextGoto;
pub use crate::options::Options;
pub use crate::rail::{RailInfo, RailPoint};
pub use crate::render::{Dot, GraphView};
pub use crate::scroll::ScrollData;
pub use crate::unreachable::find_unreachable;


/// Number of course file slots in one level archive.
pub const COURSE_FILE_COUNT: usize = 4;


pub type Result<T, E = Error> = std::result::Result<T, E>;


#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Block {block} ends at {end:#x}, past the end of a {len:#x} byte header")]
    BlockOutOfBounds {
        block: BlockKind,
        end: usize,
        len: usize,
    },

    #[error("Block {block} is {len} bytes, not a multiple of the {width} byte record width")]
    RecordWidthMismatch {
        block: BlockKind,
        len: usize,
        width: usize,
    },

    #[error("Map actor block does not end with the 0xFFFFFFFF terminator")]
    MissingActorTerminator,

    #[error("Map actor block holds no records before its terminator")]
    EmptyActorBlock,

    #[error("Background layer {0} ends before its 0xFFFF terminator")]
    MissingBackgroundTerminator(Layer),

    #[error("Course file {0} must be present")]
    MissingRootFile(usize),

    #[error("Course file index {0} is out of range")]
    FileIndexOutOfRange(usize),

    #[error("Failed to read {name} from archive")]
    Archive {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] binrw::Error),
}
