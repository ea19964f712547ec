//! 핵심 계산/표시 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod animation;
pub mod app;
pub mod cashflow;
pub mod chart;
pub mod config;
pub mod controller;
pub mod format;
pub mod i18n;
pub mod projection;
pub mod ui_cli;
