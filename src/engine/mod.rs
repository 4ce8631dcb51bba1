pub(crate) mod command;
pub(crate) mod config;
pub(crate) mod listener;
pub(crate) mod scale;
pub(crate) mod view;
