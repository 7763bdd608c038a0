use raylib::prelude::*;
use crate::assets::TextureLibrary;
use crate::constants::*;
use crate::step::{Decoration, Step};

/// Declarative paint of one step onto the watch canvas: background
/// color, background decorations, text block, character, overlay
/// decorations, in that order.
pub fn draw_step(d: &mut RaylibDrawHandle, step: &Step, library: &mut TextureLibrary) {
    d.clear_background(step.background_color);

    for deco in &step.background_elements {
        draw_decoration(d, deco, library);
    }

    draw_text_block(d, step);

    if step.has_character() {
        draw_character(d, step, library);
    }

    for deco in &step.overlay_elements {
        draw_decoration(d, deco, library);
    }
}

fn draw_decoration(d: &mut RaylibDrawHandle, deco: &Decoration, library: &mut TextureLibrary) {
    match deco {
        Decoration::Image { image, position, size, opacity, .. } => {
            let Some(texture) = library.get(image) else {
                return;
            };
            // Positions are element centers
            let dest = Rectangle::new(
                position.x - size.x * 0.5,
                position.y - size.y * 0.5,
                size.x,
                size.y,
            );
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                dest,
                Vector2::new(0.0, 0.0),
                0.0,
                with_opacity(Color::WHITE, *opacity),
            );
        }
        Decoration::Text { text, position, font_size, color, opacity, .. } => {
            let size = *font_size as i32;
            let width = d.measure_text(text, size);
            d.draw_text(
                text,
                position.x as i32 - width / 2,
                position.y as i32 - size / 2,
                size,
                with_opacity(*color, *opacity),
            );
        }
    }
}

/// Multi-line text, each line centered, anchored to the fixed top
/// region. An empty string draws nothing.
fn draw_text_block(d: &mut RaylibDrawHandle, step: &Step) {
    if step.text.is_empty() {
        return;
    }
    let size = step.font_size as i32;
    let mut y = TEXT_TOP_PADDING as i32;
    for line in step.text.lines() {
        let width = d.measure_text(line, size);
        d.draw_text(line, (SCREEN_WIDTH - width) / 2, y, size, step.text_color);
        y += size + TEXT_LINE_SPACING as i32;
    }
}

fn draw_character(d: &mut RaylibDrawHandle, step: &Step, library: &mut TextureLibrary) {
    let Some(texture) = library.get(step.character_image) else {
        return;
    };
    let size = step.character_image_size;
    let dest = Rectangle::new(
        (SCREEN_WIDTH as f32 - size.x) * 0.5,
        TEXT_TOP_PADDING + TEXT_REGION_HEIGHT + step.character_image_offset,
        size.x,
        size.y,
    );
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
        dest,
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

fn with_opacity(color: Color, opacity: f32) -> Color {
    Color::new(
        color.r,
        color.g,
        color.b,
        (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_scales_the_alpha_channel() {
        let c = with_opacity(Color::new(10, 20, 30, 200), 0.5);
        assert_eq!((c.r, c.g, c.b, c.a), (10, 20, 30, 100));
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(with_opacity(Color::WHITE, 2.0).a, 255);
        assert_eq!(with_opacity(Color::WHITE, -1.0).a, 0);
    }
}
