// laborbrief - labour-law defence report generator
// Library exports

pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod providers;
pub mod reference;
pub mod report;
