//! Plumbing around the statement core: extraction providers, input handling,
//! run configuration, document processing and output encoding.

pub mod config;
pub mod docanalysis;
pub mod input;
pub mod output;
pub mod process;
pub mod provider;
pub mod tabula_wrapper;
