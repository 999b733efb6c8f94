// Extrakt: topic extraction for counseling-session transcripts.
//
// This is the library root. The pipeline runs
// request -> provider -> normalize, with error.rs as the shared
// failure taxonomy and web/ as the HTTP boundary around it all.

pub mod config;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod request;
pub mod web;
