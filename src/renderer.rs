use egui::{Color32, ColorImage, Context, Painter, Pos2, Rect, TextureHandle, TextureOptions, pos2, vec2};

use crate::document::Document;

/// Shows the document bitmap as an egui texture.
///
/// The texture is re-uploaded only when the document revision moved, so idle
/// frames cost a single textured quad.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("texture", &self.texture.as_ref().map(|t| t.id()))
            .field("uploaded_revision", &self.uploaded_revision)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn color_image(doc: &Document) -> ColorImage {
        let bitmap = doc.canvas().bitmap();
        let size = [bitmap.width() as usize, bitmap.height() as usize];
        ColorImage::from_rgba_premultiplied(size, bitmap.as_raw())
    }

    /// Uploads the bitmap if it changed since the last upload.
    /// Returns true when an upload happened.
    pub fn sync(&mut self, ctx: &Context, doc: &Document) -> bool {
        if self.texture.is_some() && self.uploaded_revision == Some(doc.revision()) {
            return false;
        }
        let image = Self::color_image(doc);
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_revision = Some(doc.revision());
        true
    }

    /// Paints the canvas with its top-left corner at `origin`, one pixel per point
    pub fn render(&mut self, ctx: &Context, painter: &Painter, origin: Pos2, doc: &Document) {
        self.sync(ctx, doc);
        let Some(texture) = &self.texture else {
            return;
        };
        let (width, height) = doc.canvas().size();
        let rect = Rect::from_min_size(origin, vec2(width as f32, height as f32));
        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, Color32::WHITE);
    }
}
