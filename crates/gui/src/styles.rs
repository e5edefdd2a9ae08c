//! Styling constants and theme configuration

use iced::Color;

// Round summary colors
pub const WIN_TEXT: Color = Color::from_rgb(0.45, 0.8, 0.45); // Soft green
pub const LOSE_TEXT: Color = Color::from_rgb(0.88, 0.42, 0.42); // Soft red
pub const TIE_TEXT: Color = Color::from_rgb(0.65, 0.65, 0.65); // Gray

// Dimensions
pub const MOVE_BUTTON_WIDTH: f32 = 130.0;
pub const SCORE_VALUE_SIZE: f32 = 28.0;
