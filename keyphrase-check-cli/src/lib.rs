//! Command line and workflow-runner front end for `keyphrase-check`.

pub mod cli;
pub mod logging;
pub mod workflow;
