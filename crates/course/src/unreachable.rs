use crate::course_set::CourseSet;
use crate::graph::{AreaGraph, AreaId};


/// Every declared area missing from `graph`, in file order and then
/// declaration order.
pub fn find_unreachable(set: &CourseSet, graph: &AreaGraph) -> Vec<AreaId> {
    set.valid_files()
        .flat_map(|(index, file)| file.areas.iter().map(move |area| AreaId::new(index, area.id)))
        .filter(|id| !graph.contains_key(id))
        .collect()
}
