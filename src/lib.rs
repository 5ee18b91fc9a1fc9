//! Розрахункове ядро винесене в бібліотеку, щоб CLI та GUI користувалися
//! одним і тим самим кодом.

pub mod app;
pub mod calculator;
pub mod config;
pub mod i18n;
pub mod optimizer;
pub mod process;
pub mod ui_cli;
