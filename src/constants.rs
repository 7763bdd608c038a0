use raylib::prelude::*;

pub const SCREEN_WIDTH: i32 = 198;            // Logical watch canvas width (points)
pub const SCREEN_HEIGHT: i32 = 242;           // Logical watch canvas height (points)
pub const FPS: u32 = 60;                      // Frames per second

pub const TEXT_TOP_PADDING: f32 = 30.0;       // Gap above the text block
pub const TEXT_REGION_HEIGHT: f32 = 80.0;     // Fixed height of the top text region
pub const TEXT_LINE_SPACING: f32 = 3.0;       // Extra pixels between text lines

pub const DEFAULT_FONT_SIZE: f32 = 13.0;
pub const DEFAULT_TEXT_COLOR: Color = Color::new(0, 122, 235, 204);

pub const DEFAULT_CHARACTER_WIDTH: f32 = 140.0;
pub const DEFAULT_CHARACTER_HEIGHT: f32 = 110.0;
pub const DEFAULT_CHARACTER_OFFSET: f32 = 10.0; // Vertical shift below the text region
