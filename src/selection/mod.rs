//! Character selection: the appearance model plus the two ways of producing
//! one (constrained-random synthesis and feature matching).

pub mod features;
pub mod matcher;
pub mod metadata;
pub mod model;
pub mod random;
