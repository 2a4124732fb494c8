pub mod collect;
pub mod fetch;
pub mod install;
pub mod orchestrator;
pub mod permissions;
