use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod assets;
mod constants;
mod controller;
mod conversation;
mod haptics;
mod render;
mod script;
mod step;

use crate::assets::TextureLibrary;
use crate::constants::*;
use crate::controller::StepController;
use crate::haptics::LogHaptics;
use crate::render::draw_step;

/// Tap-advanced companion slideshow on a simulated watch screen.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the conversation's image assets
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Integer scale factor from watch canvas to window pixels
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Step index to start the session at
    #[arg(long, default_value_t = 0)]
    start: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let scale = args.scale.max(1) as i32;

    let script = conversation::conversation().context("failed to build conversation script")?;

    let (mut rl, thread) = raylib::init()
        .size(SCREEN_WIDTH * scale, SCREEN_HEIGHT * scale)
        .title("Companion")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut library = TextureLibrary::load(&mut rl, &thread, &args.assets)
        .context("failed to load asset library")?;

    let mut framebuffer = rl
        .load_render_texture(&thread, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
        .map_err(anyhow::Error::msg)
        .context("failed to create render texture")?;

    let mut controller = StepController::new(script, LogHaptics);
    if args.start > 0 {
        controller.seek(args.start);
    }
    info!(steps = controller.step_count(), start = controller.cursor(), "session ready");

    // The view just became visible; the initial step may buzz.
    controller.on_activate();

    while !rl.window_should_close() {
        if tapped(&rl) {
            controller.advance();
        }

        // Render the current step at logical watch resolution.
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            draw_step(&mut d, controller.current(), &mut library);
        });

        // Blit the canvas to the window, flipped vertically because
        // render textures are stored bottom-up.
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    Ok(())
}

/// The single discrete input event: a click anywhere on the screen, or
/// a key press standing in for it.
fn tapped(rl: &RaylibHandle) -> bool {
    rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
        || rl.is_key_pressed(KeyboardKey::KEY_SPACE)
        || rl.is_key_pressed(KeyboardKey::KEY_ENTER)
}
