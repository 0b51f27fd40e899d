use core::fmt;

use tracing::{instrument, warn};

use crate::course_set::CourseSet;
use crate::graph::{traverse, AreaId, RunMode, TraversalConfig, TraversalOutcome};
use crate::render::GraphView;
use crate::unreachable::find_unreachable;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub mode: RunMode,
    pub outcome: TraversalOutcome,
    pub unreachable: Vec<AreaId>,
}

impl RunResult {
    fn new(set: &CourseSet, config: TraversalConfig, mode: RunMode) -> Self {
        let outcome = traverse(set, config, mode);
        let unreachable = find_unreachable(set, &outcome.graph);

        Self {
            mode,
            outcome,
            unreachable,
        }
    }

    pub fn is_enterable(&self) -> bool {
        !self.outcome.graph.is_empty()
    }

    pub fn view(&self) -> GraphView<'_> {
        GraphView::new(&self.outcome.graph, &self.unreachable, self.outcome.entry)
    }
}


/// Both traversal runs of one course set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub normal: RunResult,

    /// Present only when file 0 declares a coin battle / boost rush entry.
    pub coin_boost: Option<RunResult>,

    pub load_errors: Vec<(usize, String)>,
}

impl Analysis {
    pub fn runs(&self) -> impl Iterator<Item = &RunResult> {
        std::iter::once(&self.normal).chain(self.coin_boost.as_ref())
    }

    pub fn has_findings(&self) -> bool {
        self.runs()
            .any(|run| !run.is_enterable() || !run.unreachable.is_empty())
    }
}

#[instrument(skip(set))]
pub fn analyze(set: &CourseSet, config: TraversalConfig) -> Analysis {
    let normal = RunResult::new(set, config, RunMode::Normal);
    if !normal.is_enterable() {
        warn!("course not even enterable through start_next_goto");
    }

    let has_coin_boost = set
        .root()
        .map_or(false, |root| root.options.has_coin_boost_entry());
    let coin_boost = has_coin_boost.then(|| RunResult::new(set, config, RunMode::CoinBoost));
    if matches!(&coin_boost, Some(run) if !run.is_enterable()) {
        warn!("course not even enterable through start_next_goto_coin_boost");
    }

    Analysis {
        normal,
        coin_boost,
        load_errors: set.load_errors().to_vec(),
    }
}


impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (file, err) in &self.load_errors {
            writeln!(f, "Warning: course file {} skipped: {}", file, err)?;
        }

        for run in self.runs() {
            let context = match run.mode {
                RunMode::Normal => "",
                RunMode::CoinBoost => " (Coin Battle and Boost Rush)",
            };

            for issue in &run.outcome.issues {
                writeln!(f, "Warning{}: {}", context, issue)?;
            }
        }

        if self.normal.is_enterable() {
            writeln!(f, "Visitable areas tree:")?;
            for (area, exits) in &self.normal.outcome.graph {
                let exits = exits.iter().map(AreaId::to_string).collect::<Vec<_>>();
                writeln!(f, "  {} -> [{}]", area, exits.join(", "))?;
            }
        } else {
            writeln!(f, "Warning: Course not even enterable through start_next_goto!")?;
        }

        if let Some(run) = &self.coin_boost {
            if !run.is_enterable() {
                writeln!(
                    f,
                    "Warning: Course not even enterable through start_next_goto_coin_boost!"
                )?;
            }
        }

        if !self.normal.unreachable.is_empty() {
            writeln!(f, "Unvisitable areas:")?;
            for area in &self.normal.unreachable {
                writeln!(f, "  {}", area)?;
            }
        }

        if let Some(run) = self.coin_boost.as_ref().filter(|run| !run.unreachable.is_empty()) {
            writeln!(f, "Unvisitable areas in Coin Battle and Boost Rush specifically:")?;
            for area in &run.unreachable {
                writeln!(f, "  {}", area)?;
            }
        }

        Ok(())
    }
}
