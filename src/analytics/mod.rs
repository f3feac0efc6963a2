pub mod path_stats;
