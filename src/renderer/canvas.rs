//! HTML canvas 2D render surface (WASM only)

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{RenderSurface, Sprite, TextStyle};
use crate::error::StartupError;
use crate::sim::Rect;

/// Decoded images for every sprite
pub struct SpriteSheet {
    avatar: HtmlImageElement,
    top_pipe: HtmlImageElement,
    bottom_pipe: HtmlImageElement,
}

impl SpriteSheet {
    /// Fetch and decode all sprite images; any failure is fatal
    pub async fn load() -> Result<Self, StartupError> {
        Ok(Self {
            avatar: load_image(Sprite::Avatar.asset_path()).await?,
            top_pipe: load_image(Sprite::TopPipe.asset_path()).await?,
            bottom_pipe: load_image(Sprite::BottomPipe.asset_path()).await?,
        })
    }

    fn get(&self, sprite: Sprite) -> &HtmlImageElement {
        match sprite {
            Sprite::Avatar => &self.avatar,
            Sprite::TopPipe => &self.top_pipe,
            Sprite::BottomPipe => &self.bottom_pipe,
        }
    }
}

async fn load_image(path: &'static str) -> Result<HtmlImageElement, StartupError> {
    let image = HtmlImageElement::new().map_err(|e| StartupError::Asset {
        path,
        message: format!("{:?}", e),
    })?;
    image.set_src(path);
    JsFuture::from(image.decode())
        .await
        .map_err(|e| StartupError::Asset {
            path,
            message: format!("{:?}", e),
        })?;
    log::info!("Loaded {} ({}x{})", path, image.natural_width(), image.natural_height());
    Ok(image)
}

/// Render surface backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    sprites: SpriteSheet,
}

impl CanvasSurface {
    /// Size the canvas to the board and grab its 2D context
    pub fn new(
        canvas: &HtmlCanvasElement,
        width: f32,
        height: f32,
        sprites: SpriteSheet,
    ) -> Result<Self, StartupError> {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| StartupError::Js(format!("{:?}", e)))?
            .ok_or(StartupError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StartupError::NoContext)?;

        Ok(Self {
            ctx,
            width: f64::from(width),
            height: f64::from(height),
            sprites,
        })
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        let result = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            self.sprites.get(sprite),
            f64::from(rect.x),
            f64::from(rect.y),
            f64::from(rect.width),
            f64::from(rect.height),
        );
        if let Err(e) = result {
            log::warn!("Draw error ({:?}): {:?}", sprite, e);
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.ctx.set_fill_style_str(style.fill);
        self.ctx.set_font(style.font);
        if let Err(e) = self.ctx.fill_text(text, f64::from(x), f64::from(y)) {
            log::warn!("Text draw error: {:?}", e);
        }
    }
}
