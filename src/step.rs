use std::sync::atomic::{AtomicU64, Ordering};
use raylib::prelude::*;
use crate::constants::*;

static NEXT_DECORATION_ID: AtomicU64 = AtomicU64::new(0);

/// One unit of displayed content: a text block, an optional character
/// image, background styling and any number of decorations drawn below
/// or above the character.
#[derive(Debug, Clone)]
pub struct Step {
    pub text: &'static str,

    /// Empty string means no character is drawn for this step.
    pub character_image: &'static str,

    pub background_color: Color,
    pub text_color: Color,
    pub font_size: f32,

    pub character_image_size: Vector2,
    pub character_image_offset: f32,

    pub enable_vibration: bool,

    /// Drawn beneath the character, in list order.
    pub background_elements: Vec<Decoration>,
    /// Drawn above everything else, in list order.
    pub overlay_elements: Vec<Decoration>,
}

impl Default for Step {
    fn default() -> Self {
        Self {
            text: "",
            character_image: "",
            background_color: Color::WHITE,
            text_color: DEFAULT_TEXT_COLOR,
            font_size: DEFAULT_FONT_SIZE,
            character_image_size: Vector2::new(DEFAULT_CHARACTER_WIDTH, DEFAULT_CHARACTER_HEIGHT),
            character_image_offset: DEFAULT_CHARACTER_OFFSET,
            enable_vibration: false,
            background_elements: Vec::new(),
            overlay_elements: Vec::new(),
        }
    }
}

impl Step {
    pub fn has_character(&self) -> bool {
        !self.character_image.is_empty()
    }
}

/// A positioned embellishment, either a sprite or a literal text label.
/// Positions are the element's center in watch canvas coordinates.
#[derive(Debug, Clone)]
pub enum Decoration {
    Image {
        id: u64,
        image: &'static str,
        position: Vector2,
        size: Vector2,
        opacity: f32,
    },
    Text {
        id: u64,
        text: &'static str,
        position: Vector2,
        font_size: f32,
        color: Color,
        opacity: f32,
    },
}

impl Decoration {
    pub fn image(image: &'static str, x: f32, y: f32, width: f32, height: f32) -> Self {
        Decoration::Image {
            id: NEXT_DECORATION_ID.fetch_add(1, Ordering::Relaxed),
            image,
            position: Vector2::new(x, y),
            size: Vector2::new(width, height),
            opacity: 1.0,
        }
    }

    pub fn text(text: &'static str, x: f32, y: f32, font_size: f32, color: Color) -> Self {
        Decoration::Text {
            id: NEXT_DECORATION_ID.fetch_add(1, Ordering::Relaxed),
            text,
            position: Vector2::new(x, y),
            font_size,
            color,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, value: f32) -> Self {
        match &mut self {
            Decoration::Image { opacity, .. } | Decoration::Text { opacity, .. } => {
                *opacity = value;
            }
        }
        self
    }

    /// Synthetic identity used only to keep rendering lists stable.
    pub fn id(&self) -> u64 {
        match self {
            Decoration::Image { id, .. } | Decoration::Text { id, .. } => *id,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Decoration::Image { opacity, .. } | Decoration::Text { opacity, .. } => *opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_defaults_render_nothing_optional() {
        let step = Step::default();
        assert!(!step.has_character());
        assert!(step.background_elements.is_empty());
        assert!(step.overlay_elements.is_empty());
        assert!(!step.enable_vibration);
        assert_eq!(step.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn decoration_ids_are_unique() {
        let a = Decoration::image("heart", 50.0, 100.0, 30.0, 30.0);
        let b = Decoration::image("heart", 50.0, 100.0, 30.0, 30.0);
        let c = Decoration::text("BPM", 10.0, 10.0, 12.0, Color::WHITE);
        assert_ne!(a.id(), b.id());
        assert_ne!(b.id(), c.id());
    }

    #[test]
    fn decoration_opacity_defaults_to_opaque() {
        let deco = Decoration::image("sparkle", 70.0, 120.0, 25.0, 25.0);
        assert_eq!(deco.opacity(), 1.0);
        let faded = deco.with_opacity(0.4);
        assert_eq!(faded.opacity(), 0.4);
    }
}
