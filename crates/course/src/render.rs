use core::fmt;

use crate::graph::{AreaGraph, AreaId};


/// What a graph renderer needs: the edges, every node to draw (including
/// isolated and unreachable ones) and the entry area to highlight.
#[derive(Debug, Clone)]
pub struct GraphView<'a> {
    pub edges: &'a AreaGraph,
    pub nodes: Vec<AreaId>,
    pub unreachable: &'a [AreaId],
    pub root: Option<AreaId>,
}

impl<'a> GraphView<'a> {
    pub fn new(edges: &'a AreaGraph, unreachable: &'a [AreaId], root: Option<AreaId>) -> Self {
        let mut nodes = edges.keys().copied().collect::<Vec<_>>();
        nodes.extend(unreachable.iter().filter(|id| !edges.contains_key(*id)));

        Self {
            edges,
            nodes,
            unreachable,
            root,
        }
    }

    pub fn dot(&self) -> Dot<'_, 'a> {
        Dot(self)
    }
}


/// Graphviz rendering of a [`GraphView`].
pub struct Dot<'v, 'a>(&'v GraphView<'a>);

impl fmt::Display for Dot<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "digraph areas {{")?;

        for node in &view.nodes {
            write!(f, "    \"{}\"", node)?;
            if view.root == Some(*node) {
                write!(f, " [shape=doublecircle]")?;
            } else if view.unreachable.contains(node) {
                write!(f, " [style=dashed]")?;
            }
            writeln!(f, ";")?;
        }

        for (source, targets) in view.edges {
            for target in targets {
                writeln!(f, "    \"{}\" -> \"{}\";", source, target)?;
            }
        }

        writeln!(f, "}}")
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_isolated_nodes() {
        let mut edges = AreaGraph::new();
        edges.entry(AreaId::new(0, 1)).or_default().insert(AreaId::new(0, 2));
        edges.entry(AreaId::new(0, 2)).or_default();
        let unreachable = [AreaId::new(1, 1)];

        let view = GraphView::new(&edges, &unreachable, Some(AreaId::new(0, 1)));
        let dot = view.dot().to_string();

        assert_eq!(view.nodes.len(), 3);
        assert!(dot.contains("\"(0, 1)\" [shape=doublecircle];"));
        assert!(dot.contains("\"(1, 1)\" [style=dashed];"));
        assert!(dot.contains("\"(0, 1)\" -> \"(0, 2)\";"));
    }
}
