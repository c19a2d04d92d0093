pub mod config;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod recommender;
pub mod response;
pub mod routes;
pub mod state;
