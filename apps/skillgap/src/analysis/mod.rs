// Skill gap & role recommendation.
// `gap` and `recommend` are pure functions over the catalog; `pipeline`
// wires them to extraction and job lookup for one run.

pub mod gap;
pub mod pipeline;
pub mod recommend;
