// Cross-platform matching: pairwise scoring and greedy assignment.
//
// `similarity` decides how alike two titles are through a fixed sequence of
// veto gates followed by a weighted blend. `assign` runs that score over two
// whole collections and hands out each pool record at most once.

pub mod assign;
pub mod filter;
pub mod similarity;
