pub mod action;
pub mod config;
pub mod dispatch;
pub mod simulation;
pub mod state;
