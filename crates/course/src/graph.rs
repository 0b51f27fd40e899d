use core::fmt;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::{debug, instrument, warn};

use crate::area::Area;
use crate::course_file::CourseFile;
use crate::course_set::CourseSet;
use crate::geometry::Containment;
use crate::map_actor::{ActorLink, MapActor};
use crate::next_goto::NextGoto;
use crate::options::Options;


/// Actor pseudo-links live above the 16-bit range so they never collide
/// with real NextGoto IDs.
pub const ACTOR_ID_BIT: u32 = 0x10000;


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AreaId {
    pub file: usize,
    pub area: u8,
}

impl AreaId {
    pub fn new(file: usize, area: u8) -> Self {
        Self { file, area }
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.area)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NextGotoId {
    pub file: usize,
    pub id: u32,
}

impl NextGotoId {
    pub fn new(file: usize, id: u32) -> Self {
        Self { file, id }
    }

    pub fn actor(file: usize, index: usize) -> Self {
        Self {
            file,
            id: ACTOR_ID_BIT | index as u32,
        }
    }

    pub fn is_actor(&self) -> bool {
        self.id & ACTOR_ID_BIT != 0
    }
}

impl fmt::Display for NextGotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_actor() {
            write!(f, "file {} actor #{}", self.file, self.id & !ACTOR_ID_BIT)
        } else {
            write!(f, "file {} nextGoto {}", self.file, self.id)
        }
    }
}


/// Out-adjacency of every area reached in one run. Areas with no exits
/// still have an (empty) entry.
pub type AreaGraph = BTreeMap<AreaId, BTreeSet<AreaId>>;


#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Normal,
    CoinBoost,
}

impl RunMode {
    pub fn entry_next_goto(self, options: &Options) -> u8 {
        match self {
            Self::Normal => options.start_next_goto,
            Self::CoinBoost => options.start_next_goto_coin_boost,
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    pub containment: Containment,

    /// Follow actor 432 links. Older tool revisions never did.
    pub area_warp_links: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            containment: Containment::Strict,
            area_warp_links: true,
        }
    }
}


/// Authoring problems met during a run. None of them stop the run; the
/// affected edge is dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Inconsistency {
    #[error("Trying to visit {0}, but file does not exist!")]
    MissingNextGotoFile(NextGotoId),

    #[error("Trying to visit {0}, but nextGoto does not exist!")]
    MissingNextGoto(NextGotoId),

    #[error("Trying to visit {0}, but nextGoto is not contained in any area!")]
    UncontainedNextGoto(NextGotoId),

    #[error("Trying to visit file {} area {}, but file does not exist!", .0.file, .0.area)]
    MissingAreaFile(AreaId),

    #[error("Trying to visit file {} area {}, but area does not exist!", .0.file, .0.area)]
    MissingArea(AreaId),

    #[error(
        "File {}, area {}: NextGoto {next_goto} leads to the same file, but uses file ID explicitly instead of 0.",
        .area.file,
        .area.area
    )]
    ExplicitSameFile { area: AreaId, next_goto: u8 },

    #[error("Trying to visit file {file} through final battle controller #{actor}, but file does not exist!")]
    MissingCourseStartFile { actor: usize, file: usize },
}


/// Result of one traversal run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalOutcome {
    pub graph: AreaGraph,

    /// Area holding the entry NextGoto, if it resolved.
    pub entry: Option<AreaId>,

    pub issues: Vec<Inconsistency>,

    /// Distinct NextGoto and actor identities visited.
    pub visits: usize,
}


/// Walks portal and actor links from the entry point of `mode`.
#[instrument(skip(set))]
pub fn traverse(set: &CourseSet, config: TraversalConfig, mode: RunMode) -> TraversalOutcome {
    let mut traversal = Traversal {
        set,
        config,
        mode,
        visited: HashSet::new(),
        graph: AreaGraph::new(),
        issues: Vec::new(),
    };

    let entry = match set.root() {
        Some(root) => {
            let start = NextGotoId::new(0, mode.entry_next_goto(&root.options).into());
            traversal.visit_next_goto(start)
        }
        None => {
            traversal.report(Inconsistency::MissingNextGotoFile(NextGotoId::new(0, 0)));
            None
        }
    };

    debug!(
        areas = traversal.graph.len(),
        visits = traversal.visited.len(),
        "traversal finished"
    );

    TraversalOutcome {
        entry,
        visits: traversal.visited.len(),
        graph: traversal.graph,
        issues: traversal.issues,
    }
}


struct Traversal<'a> {
    set: &'a CourseSet,
    config: TraversalConfig,
    mode: RunMode,
    visited: HashSet<NextGotoId>,
    graph: AreaGraph,
    issues: Vec<Inconsistency>,
}


/// An area being explored: its NextGotos are scanned first, then its
/// actors, both in declaration order.
struct Frame<'a> {
    id: AreaId,
    file: &'a CourseFile,
    area: &'a Area,
    cursor: Cursor,
}

#[derive(Clone, Copy)]
enum Cursor {
    NextGoto(usize),
    Actor(usize),
}


impl<'a> Traversal<'a> {
    fn visit_next_goto(&mut self, id: NextGotoId) -> Option<AreaId> {
        let area = self.resolve_next_goto(id, false)?;
        self.explore(area);
        Some(area)
    }

    /// Depth-first walk from `start`. A frame is suspended while the area
    /// behind its latest link is explored, which keeps the visiting order
    /// of a recursive walk without using the call stack.
    fn explore(&mut self, start: AreaId) {
        let mut stack: Vec<Frame<'a>> = self.enter_area(start).into_iter().collect();

        while let Some(frame) = stack.last_mut() {
            let source = frame.id;

            match self.next_link(frame) {
                Some(target) => {
                    self.graph.entry(source).or_default().insert(target);
                    stack.extend(self.enter_area(target));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    fn enter_area(&mut self, id: AreaId) -> Option<Frame<'a>> {
        self.graph.entry(id).or_default();

        let set = self.set;
        let Some(file) = set.file(id.file) else {
            self.report(Inconsistency::MissingAreaFile(id));
            return None;
        };

        let Some(area) = file.area_by_id(id.area) else {
            self.report(Inconsistency::MissingArea(id));
            return None;
        };

        Some(Frame {
            id,
            file,
            area,
            cursor: Cursor::NextGoto(0),
        })
    }

    /// Advances `frame` to its next link that leads to a newly reached area.
    fn next_link(&mut self, frame: &mut Frame<'a>) -> Option<AreaId> {
        let file = frame.file;

        loop {
            match frame.cursor {
                Cursor::NextGoto(index) => {
                    let Some(next_goto) = file.next_gotos.get(index) else {
                        frame.cursor = Cursor::Actor(0);
                        continue;
                    };

                    frame.cursor = Cursor::NextGoto(index + 1);
                    if let Some(target) = self.follow_next_goto(frame, next_goto) {
                        return Some(target);
                    }
                }
                Cursor::Actor(index) => {
                    let actor = file.map_actors.get(index)?;

                    frame.cursor = Cursor::Actor(index + 1);
                    if let Some(target) = self.follow_actor(frame, index, actor) {
                        return Some(target);
                    }
                }
            }
        }
    }

    fn follow_next_goto(&mut self, source: &Frame<'a>, next_goto: &NextGoto) -> Option<AreaId> {
        if !self.contains(source, next_goto) || next_goto.is_disabled() {
            return None;
        }

        let file = destination_file(source.id.file, next_goto.destination_file);
        if next_goto.destination_file != 0 && file == source.id.file {
            self.report(Inconsistency::ExplicitSameFile {
                area: source.id,
                next_goto: next_goto.id,
            });
        }

        let target = NextGotoId::new(file, next_goto.destination_next_goto.into());
        self.resolve_next_goto(target, next_goto.has_no_destination())
    }

    fn follow_actor(&mut self, source: &Frame<'a>, index: usize, actor: &MapActor) -> Option<AreaId> {
        if !self.visited.insert(NextGotoId::actor(source.id.file, index)) {
            return None;
        }

        if !self.contains(source, actor) {
            return None;
        }

        let target = match actor.link(self.config.area_warp_links)? {
            ActorLink::NextGoto { file, next_goto } => NextGotoId::new(
                destination_file(source.id.file, file),
                next_goto.into(),
            ),
            ActorLink::CourseStart { file } => {
                let file = destination_file(source.id.file, file);
                let Some(course) = self.set.file(file) else {
                    self.report(Inconsistency::MissingCourseStartFile { actor: index, file });
                    return None;
                };

                NextGotoId::new(file, self.mode.entry_next_goto(&course.options).into())
            }
        };

        self.resolve_next_goto(target, false)
    }

    /// Marks `id` visited and finds the area its NextGoto sits in. Returns
    /// `None` for identities already handled in this run.
    fn resolve_next_goto(&mut self, id: NextGotoId, no_destination: bool) -> Option<AreaId> {
        if !self.visited.insert(id) {
            return None;
        }

        let set = self.set;
        let Some(file) = set.file(id.file) else {
            self.report(Inconsistency::MissingNextGotoFile(id));
            return None;
        };

        let next_goto = u8::try_from(id.id)
            .ok()
            .and_then(|next_goto_id| file.next_goto_by_id(next_goto_id));
        let Some(next_goto) = next_goto else {
            if !no_destination {
                self.report(Inconsistency::MissingNextGoto(id));
            }
            return None;
        };

        let containment = self.config.containment;
        let area = file
            .areas
            .iter()
            .find(|area| containment.contains(area, next_goto, area.id));
        let Some(area) = area else {
            self.report(Inconsistency::UncontainedNextGoto(id));
            return None;
        };

        Some(AreaId::new(id.file, area.id))
    }

    fn contains<P>(&self, source: &Frame<'a>, point: &P) -> bool
    where
        P: crate::geometry::Placement,
    {
        self.config
            .containment
            .contains(source.area, point, source.id.area)
    }

    fn report(&mut self, issue: Inconsistency) {
        warn!("{}", issue);
        self.issues.push(issue);
    }
}

/// `0` is the source file itself, anything else is the 1-based slot.
fn destination_file(source: usize, encoded: u8) -> usize {
    match encoded {
        0 => source,
        slot => usize::from(slot) - 1,
    }
}
