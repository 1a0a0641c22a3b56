//! The valuation engine: normalization, scoring, tiering, enrichment, and
//! auction pricing over extracted player rows.

pub mod enrich;
pub mod normalize;
pub mod pricing;
pub mod record;
pub mod scoring;
pub mod tiers;
