use embedded_graphics::Drawable;
use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::iso_8859_1::FONT_7X13;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use image::{Rgba, RgbaImage};

/// ベースラインからグリフ上端までの高さ
const FONT_ASCENT: i32 = 11;

/// embedded-graphics の描画先として RgbaImage をラップする
///
/// キャンバス外のピクセルは捨てる。
struct CanvasTarget<'a>(&'a mut RgbaImage);

impl OriginDimensions for CanvasTarget<'_> {
    fn size(&self) -> Size {
        Size::new(self.0.width(), self.0.height())
    }
}

impl DrawTarget for CanvasTarget<'_> {
    type Color = Rgb888;
    type Error = std::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.0.dimensions();
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y))
                && x < width
                && y < height
            {
                self.0
                    .put_pixel(x, y, Rgba([color.r(), color.g(), color.b(), 255]));
            }
        }
        Ok(())
    }
}

fn text_style(color: Rgba<u8>) -> MonoTextStyle<'static, Rgb888> {
    let [r, g, b, _] = color.0;
    MonoTextStyle::new(&FONT_7X13, Rgb888::new(r, g, b))
}

/// ラベルの描画幅（ピクセル）
pub fn measure_label(label: &str) -> i32 {
    let metrics = text_style(Rgba([0, 0, 0, 255])).measure_string(
        label,
        Point::zero(),
        Baseline::Alphabetic,
    );
    metrics.next_position.x
}

/// ラベルの描画開始位置（ベースライン左端）
///
/// 水平方向は中央寄せ、垂直方向はキャンバス中央をベースラインとする。
pub fn label_origin(canvas_width: u32, canvas_height: u32, label: &str) -> Point {
    let center_x = (canvas_width / 2) as i32;
    let center_y = (canvas_height / 2) as i32;
    Point::new(center_x - measure_label(label) / 2, center_y)
}

/// 7x13 の等幅ビットマップフォントでラベルを中央に描画する
///
/// 折り返しはせず、はみ出した部分は切り捨てる。
pub fn draw_label(canvas: &mut RgbaImage, label: &str, color: Rgba<u8>) {
    let origin = label_origin(canvas.width(), canvas.height(), label);
    // グリフ上端はベースラインから FONT_ASCENT 上
    let top_left = Point::new(origin.x, origin.y - FONT_ASCENT);
    let text = Text::with_baseline(label, top_left, text_style(color), Baseline::Top);

    text.draw(&mut CanvasTarget(canvas))
        .unwrap_or_else(|never| match never {});
}
