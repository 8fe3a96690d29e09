pub mod allocator;
pub mod analyzer;
pub mod dedup;
pub mod distance;
pub mod engine;
pub mod openroute;
pub mod opentripmap;
pub mod openweather;
pub mod partition;
pub mod place_discovery;
pub mod providers;
pub mod radius;
pub mod ranking;
pub mod sequencer;
pub mod trip_planner;
