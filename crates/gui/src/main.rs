//! Rock-paper-scissors GUI Application
//!
//! A graphical interface for:
//! - Playing rounds against the computer
//! - Watching two computer players face off
//! - Tracking the score across a session

mod app;
mod styles;

use app::RpsApp;
use iced::application;

fn main() -> iced::Result {
    application("Rock Paper Scissors", RpsApp::update, RpsApp::view)
        .theme(RpsApp::theme)
        .window_size((520.0, 440.0))
        .run_with(RpsApp::new)
}
