// Resume → skill set: document text, normalization, skill recognition.
// Each stage sits behind a trait so another parser or recognizer can be
// swapped in without touching the analysis code.

pub mod document;
pub mod normalize;
pub mod skills;
