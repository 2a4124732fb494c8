#![allow(dead_code, unused_imports)]

pub(crate) mod fake_docker;
pub(crate) mod recording_runner;
pub(crate) mod scripted_console;
pub(crate) mod test_context;

pub(crate) use fake_docker::FakeDocker;
pub(crate) use recording_runner::RecordingRunner;
pub(crate) use scripted_console::ScriptedConsole;
pub(crate) use test_context::{BASIC, InstallRun, TemplateSet, TestContext, is_within};
