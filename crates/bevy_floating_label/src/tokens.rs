use std::time::Duration;

use bevy::color::palettes::basic;
use bevy::prelude::*;

pub const LABEL_REST_OFFSET: f32 = 4.0;
pub const LABEL_FLOAT_OFFSET: f32 = -20.0;
pub const LABEL_LEFT: f32 = 15.0;
pub const LABEL_LEFT_WITH_ICON: f32 = 20.0;
/// Distance from the top of the container to the label before any translation.
pub const LABEL_TOP: f32 = 12.0;
pub const LABEL_PADDING_X: f32 = 4.0;

pub const ERROR_MARGIN_TOP: f32 = 5.0;

pub const TRANSITION_DURATION: Duration = Duration::from_millis(200);

// #111
pub const LABEL_COLOR: Srgba = Srgba::rgb(0.067, 0.067, 0.067);
// #bdbdbd
pub const BORDER_COLOR: Srgba = Srgba::rgb(0.741, 0.741, 0.741);
pub const ERROR_COLOR: Srgba = basic::RED;
pub const CONTAINER_BG: Srgba = basic::WHITE;
pub const INPUT_TEXT_COLOR: Srgba = Srgba::rgb(0.13, 0.13, 0.13);

pub const INPUT_HEIGHT: f32 = 48.0;
pub const CONTAINER_PADDING_X: f32 = 12.0;
pub const BORDER_WIDTH: f32 = 1.0;
pub const CORNER_RADIUS: f32 = 4.0;
pub const ICON_SLOT_WIDTH: f32 = 24.0;
pub const ICON_SIZE: f32 = 18.0;

pub const LABEL_FONT_SIZE: f32 = 14.0;
pub const INPUT_FONT_SIZE: f32 = 16.0;
pub const ERROR_FONT_SIZE: f32 = 12.0;
