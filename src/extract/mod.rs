//! Markup-table extraction: a shared tag-event scanner plus one small
//! state machine per source document shape.

pub mod depth_chart;
pub mod injuries;
pub mod projections;
pub mod quality_starts;
pub mod scanner;
