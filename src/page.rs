use raylib::prelude::*;

use concentric_onboarding::constants::*;

/// Anything the onboarding view can draw as page content.
pub trait Renderable {
    /// Draws the content centred on `center`, scaled by `scale`.
    fn draw(&self, d: &mut RaylibDrawHandle, center: Vector2, scale: f32);
}

pub enum Page {
    Image(Texture2D),
    Caption { title: String, body: String },
}

impl Page {
    pub fn caption(title: &str, body: &str) -> Self {
        Page::Caption {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Pages shown when no image directory is given.
pub fn builtin_pages() -> Vec<Page> {
    vec![
        Page::caption("Welcome", "Tap the circle to continue"),
        Page::caption("Concentric", "Each page brings its own color"),
        Page::caption("Reversible", "Left arrow goes back"),
        Page::caption("All set", "That was the last page"),
    ]
}

// No font metrics here, so text is centred on an average glyph width.
fn draw_centered_text(d: &mut RaylibDrawHandle, text: &str, center: Vector2, size: i32) {
    let width = text.chars().count() as f32 * size as f32 * 0.55;
    d.draw_text(
        text,
        (center.x - width * 0.5) as i32,
        (center.y - size as f32 * 0.5) as i32,
        size,
        Color::new(20, 20, 20, 255),
    );
}

impl Renderable for Page {
    fn draw(&self, d: &mut RaylibDrawHandle, center: Vector2, scale: f32) {
        match self {
            Page::Image(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;

                // Fit into 80% of the window width, then apply the transition scale.
                let fit = (RENDER_WIDTH as f32 * 0.8 / tex_width).min(1.0);
                let width = tex_width * fit * scale;
                let height = tex_height * fit * scale;
                let origin = Vector2::new(width * 0.5, height * 0.5);

                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(center.x, center.y, width, height),
                    origin,
                    0.0,
                    Color::WHITE,
                );
            }
            Page::Caption { title, body } => {
                let title_size = (48.0 * scale).round() as i32;
                let body_size = (22.0 * scale).round() as i32;
                draw_centered_text(d, title, Vector2::new(center.x, center.y - 30.0 * scale), title_size);
                draw_centered_text(d, body, Vector2::new(center.x, center.y + 30.0 * scale), body_size);
            }
        }
    }
}
