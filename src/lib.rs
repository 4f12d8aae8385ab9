// Penprint: stylometric authorship attribution
//
// This is the library root. Text cleanup and segmentation feed feature
// extraction; scoring compares the resulting signatures. Storage and output
// are the thin layers the CLI puts around that core.

pub mod config;
pub mod error;
pub mod features;
pub mod output;
pub mod scoring;
pub mod store;
pub mod text;
