use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{bail, Result};
use clap::Parser;
use rand::Rng;
use raylib::prelude::*;

use concentric_onboarding::colors::{default_palette, Rgba};
use concentric_onboarding::concentric::{TransitionEngine, TransitionEvent};
use concentric_onboarding::constants::*;
use concentric_onboarding::logging::init_logging;

mod page;
mod render;
mod texture_loader;

use crate::page::{builtin_pages, Page};
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

/// Concentric onboarding carousel.
///
/// Click the circle or press Right to go forward, Left to go back.
/// N and P jump without animation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory of page images (png, jpg, bmp, gif). Built-in pages when omitted.
    #[arg(short, long)]
    images: Option<PathBuf>,

    /// Background colors, one per page, as comma separated hex (#RRGGBB).
    #[arg(short, long, value_delimiter = ',')]
    colors: Vec<Rgba>,

    /// Pick a random background color for every page.
    #[arg(long, conflicts_with = "colors")]
    random_colors: bool,

    /// Duration of one transition in seconds.
    #[arg(short, long, default_value_t = DEFAULT_DURATION)]
    duration: f32,

    /// Log filter (env_logger syntax), overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

fn load_pages(rl: &mut RaylibHandle, thread: &RaylibThread, args: &Args) -> Result<Vec<Page>> {
    let Some(dir) = &args.images else {
        return Ok(builtin_pages());
    };

    let mut pages = Vec::new();
    for path in load_sorted_image_paths(dir)? {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => pages.push(Page::Image(texture)),
            Err(e) => log::warn!("skipping page: {:#}", e),
        }
    }
    if pages.is_empty() {
        bail!("no page could be loaded from {}", dir.display());
    }
    Ok(pages)
}

fn page_colors(args: &Args, count: usize) -> Vec<Rgba> {
    if args.random_colors {
        let mut rng = rand::rng();
        return (0..count)
            .map(|_| Rgba::rgb(rng.random(), rng.random(), rng.random()))
            .collect();
    }
    if !args.colors.is_empty() {
        return args.colors.clone();
    }
    default_palette().into_iter().cycle().take(count).collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Concentric Onboarding")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Pages ---
    let pages = load_pages(&mut rl, &thread, &args)?;
    let colors = page_colors(&args, pages.len());
    log::info!("{} pages, {} colors", pages.len(), colors.len());

    let mut engine = TransitionEngine::with_duration(pages, colors, args.duration);
    let (events_tx, events_rx) = mpsc::channel::<TransitionEvent>();
    engine.add_listener(events_tx);

    let mut view = engine.mount();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // --- Input ---
        let button = render::anchor(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let mouse = rl.get_mouse_position();
        let on_button = view
            .frame()
            .shape
            .contains(Vector2::new(mouse.x - button.x, mouse.y - button.y));

        let navigation = if rl.is_key_pressed(KeyboardKey::KEY_RIGHT)
            || (on_button && rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT))
        {
            Some(view.go_to_next_page(true))
        } else if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            Some(view.go_to_previous_page(true))
        } else if rl.is_key_pressed(KeyboardKey::KEY_N) {
            Some(view.go_to_next_page(false))
        } else if rl.is_key_pressed(KeyboardKey::KEY_P) {
            Some(view.go_to_previous_page(false))
        } else {
            None
        };
        if let Some(navigation) = navigation {
            log::debug!("navigation: {:?}", navigation);
        }

        // --- Update ---
        let frame = view.advance(dt);

        for event in events_rx.try_iter() {
            match event {
                TransitionEvent::DidGoToLastPage => log::info!("reached the last page"),
                other => log::debug!("{:?} (page {})", other, view.current_page_index()),
            }
        }

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        render::draw_frame(&mut d, &frame, view.pages());
    }

    Ok(())
}
