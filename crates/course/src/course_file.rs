use binrw::Endian;
use tracing::debug;

use crate::area::Area;
use crate::background::{Background, Layer};
use crate::block::{read_array, read_one, read_terminated_array};
use crate::distant_view::DistantView;
use crate::environment::Environment;
use crate::header::{BlockKind, CourseFileHeader};
use crate::location::Location;
use crate::map_actor::MapActor;
use crate::next_goto::NextGoto;
use crate::options::Options;
use crate::rail::{RailInfo, RailPoint};
use crate::scroll::ScrollData;
use crate::{Error, Result, COURSE_FILE_COUNT};


/// Decoded contents of one `courseN.bin` and its background layer files.
#[derive(Debug, Clone, Default)]
pub struct CourseFile {
    index: Option<usize>,
    pub environment: Environment,
    pub options: Options,
    pub scroll_data: Vec<ScrollData>,
    pub distant_views: Vec<DistantView>,
    pub next_gotos: Vec<NextGoto>,
    pub map_actors: Vec<MapActor>,
    pub areas: Vec<Area>,
    pub locations: Vec<Location>,
    pub rail_infos: Vec<RailInfo>,
    pub rail_points: Vec<RailPoint>,
    backgrounds: [Vec<Background>; 3],
}

impl CourseFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents with `data`. Absent data leaves the file
    /// cleared; corrupt data clears it and returns the error.
    pub fn load(
        &mut self,
        index: usize,
        endian: Endian,
        data: Option<&[u8]>,
        backgrounds: [Option<&[u8]>; 3],
    ) -> Result<()> {
        if index >= COURSE_FILE_COUNT {
            return Err(Error::FileIndexOutOfRange(index));
        }

        self.clear();

        let Some(data) = data else {
            return Ok(());
        };

        let mut loaded = Self::decode(endian, data)?;
        for layer in Layer::ALL {
            if let Some(layer_data) = backgrounds[layer.index()] {
                loaded.backgrounds[layer.index()] = Background::read_layer(layer, layer_data, endian)?;
            }
        }
        loaded.index = Some(index);

        debug!(
            file = index,
            areas = loaded.areas.len(),
            next_gotos = loaded.next_gotos.len(),
            map_actors = loaded.map_actors.len(),
            "loaded course file"
        );

        *self = loaded;
        Ok(())
    }

    fn decode(endian: Endian, data: &[u8]) -> Result<Self> {
        let header = CourseFileHeader::parse(data, endian)?;
        let mut file = Self::new();

        if let Some(block) = header.block(BlockKind::Environment, data)? {
            file.environment = read_one(block, endian)?;
        }
        if let Some(block) = header.block(BlockKind::Options, data)? {
            file.options = read_one(block, endian)?;
        }
        if let Some(block) = header.block(BlockKind::ScrollData, data)? {
            file.scroll_data = read_array(BlockKind::ScrollData, block, endian)?;
        }
        if let Some(block) = header.block(BlockKind::DistantView, data)? {
            file.distant_views = read_array(BlockKind::DistantView, block, endian)?;
        }
        if let Some(block) = header.block(BlockKind::NextGoto, data)? {
            file.next_gotos = read_array(BlockKind::NextGoto, block, endian)?;
        }
        if let Some(block) = header.block(BlockKind::MapActor, data)? {
            file.map_actors = read_terminated_array(BlockKind::MapActor, block, endian)?;
        }
        if let Some(block) = header.block(BlockKind::Area, data)? {
            file.areas = read_array(BlockKind::Area, block, endian)?;
        }
        if let Some(block) = header.block(BlockKind::Location, data)? {
            file.locations = read_array(BlockKind::Location, block, endian)?;
        }
        if let Some(block) = header.block(BlockKind::RailInfo, data)? {
            file.rail_infos = read_array(BlockKind::RailInfo, block, endian)?;
        }
        if let Some(block) = header.block(BlockKind::RailPoint, data)? {
            file.rail_points = read_array(BlockKind::RailPoint, block, endian)?;
        }

        Ok(file)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_valid(&self) -> bool {
        self.index.is_some()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn backgrounds(&self, layer: Layer) -> &[Background] {
        &self.backgrounds[layer.index()]
    }

    pub fn area_by_id(&self, id: u8) -> Option<&Area> {
        find_from(&self.areas, 0, |area| area.id == id)
    }

    pub fn area_by_id_from(&self, id: u8, start: usize) -> Option<&Area> {
        find_from(&self.areas, start, |area| area.id == id)
    }

    pub fn next_goto_by_id(&self, id: u8) -> Option<&NextGoto> {
        find_from(&self.next_gotos, 0, |next_goto| next_goto.id == id)
    }

    pub fn next_goto_by_id_from(&self, id: u8, start: usize) -> Option<&NextGoto> {
        find_from(&self.next_gotos, start, |next_goto| next_goto.id == id)
    }

    pub fn scroll_data_by_id(&self, id: u16) -> Option<&ScrollData> {
        find_from(&self.scroll_data, 0, |scroll| scroll.id == id)
    }

    pub fn distant_view_by_id(&self, id: u16) -> Option<&DistantView> {
        find_from(&self.distant_views, 0, |view| view.id == id)
    }

    pub fn location_by_id(&self, id: u8) -> Option<&Location> {
        find_from(&self.locations, 0, |location| location.id == id)
    }

    pub fn rail_info_by_id(&self, id: u8) -> Option<&RailInfo> {
        find_from(&self.rail_infos, 0, |rail| rail.id == id)
    }

    /// Points of `rail`, or `None` when its range runs past the point block.
    pub fn rail_points_of(&self, rail: &RailInfo) -> Option<&[RailPoint]> {
        self.rail_points.get(rail.point_range())
    }
}

fn find_from<T, F>(records: &[T], start: usize, mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    records.iter().skip(start).find(|&record| predicate(record))
}
