use raylib::prelude::*;

use concentric_onboarding::Rgba;
use concentric_onboarding::concentric::{ArcSide, PeepholeShape, RenderFrame};
use concentric_onboarding::constants::*;

use crate::page::Renderable;

const ARC_SEGMENTS: i32 = 256;

#[inline]
pub fn to_color(c: Rgba) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

/// Center of the peephole button in window coordinates.
pub fn anchor(screen_width: f32, screen_height: f32) -> Vector2 {
    Vector2::new(screen_width * 0.5, screen_height * 0.5 + BUTTON_OFFSET_Y)
}

fn draw_shape(d: &mut RaylibDrawHandle, anchor: Vector2, shape: &PeepholeShape, color: Color) {
    match *shape {
        PeepholeShape::Disc { center, radius } => {
            d.draw_circle_v(Vector2::new(anchor.x + center.x, anchor.y + center.y), radius, color);
        }
        PeepholeShape::HalfDisc { center, radius, side } => {
            let (start, end) = match side {
                ArcSide::Left => (90.0, 270.0),
                ArcSide::Right => (-90.0, 90.0),
            };
            d.draw_circle_sector(
                Vector2::new(anchor.x + center.x, anchor.y + center.y),
                radius,
                start,
                end,
                ARC_SEGMENTS,
                color,
            );
        }
    }
}

/// Chevron drawn on the resting button.
fn draw_arrow(d: &mut RaylibDrawHandle, anchor: Vector2, color: Color) {
    let tip = Vector2::new(anchor.x + 4.0, anchor.y);
    d.draw_line_ex(Vector2::new(anchor.x - 3.0, anchor.y - 6.0), tip, 2.5, color);
    d.draw_line_ex(Vector2::new(anchor.x - 3.0, anchor.y + 6.0), tip, 2.5, color);
}

pub fn draw_frame<P: Renderable>(d: &mut RaylibDrawHandle, frame: &RenderFrame, pages: &[P]) {
    let screen_width = d.get_screen_width() as f32;
    let screen_height = d.get_screen_height() as f32;
    let anchor = anchor(screen_width, screen_height);
    let background = to_color(frame.background);

    d.clear_background(background);
    draw_shape(d, anchor, &frame.shape, to_color(frame.shape_color));
    if !frame.is_animating {
        draw_arrow(d, anchor, background);
    }

    let page_center = Vector2::new(screen_width * 0.5, screen_height * 0.5 + PAGE_OFFSET_Y);
    for placement in [frame.outgoing, frame.incoming].into_iter().flatten() {
        if let Some(page) = pages.get(placement.index) {
            let center = Vector2::new(
                page_center.x + placement.offset.x,
                page_center.y + placement.offset.y,
            );
            page.draw(d, center, placement.scale);
        }
    }
}
