pub mod cache_refresh;
