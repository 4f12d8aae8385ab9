// Text handling — token cleanup and sentence/phrase segmentation.

pub mod normalize;
pub mod segment;
