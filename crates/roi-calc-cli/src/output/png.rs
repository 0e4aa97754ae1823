//! Text-only PNG report: a title, label/value rows between two rules and a
//! footer line, drawn with the 8x8 bitmap glyphs from `font8x8`.

use clap::ValueEnum;
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

use roi_calc_core::roi::export::ExportRow;

const WIDTH: u32 = 1200;
const PADDING: u32 = 40;
const LINE_HEIGHT: f32 = 42.0;
const RULE_WIDTH: u32 = 2;
const GLYPH_SIZE: u32 = 8;

const TITLE_SCALE: u32 = 5;
const ROW_SCALE: u32 = 3;
const FOOTER_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

struct Palette {
    background: Rgb<u8>,
    title: Rgb<u8>,
    label: Rgb<u8>,
    value: Rgb<u8>,
    rule: Rgb<u8>,
    footer: Rgb<u8>,
}

impl Theme {
    fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Rgb([18, 18, 18]),
                title: Rgb([240, 240, 240]),
                label: Rgb([200, 200, 200]),
                value: Rgb([240, 240, 240]),
                rule: Rgb([80, 80, 80]),
                footer: Rgb([160, 160, 160]),
            },
            Theme::Light => Palette {
                background: Rgb([250, 250, 250]),
                title: Rgb([20, 20, 20]),
                label: Rgb([70, 70, 70]),
                value: Rgb([20, 20, 20]),
                rule: Rgb([200, 200, 200]),
                footer: Rgb([110, 110, 110]),
            },
        }
    }
}

/// Canvas height for `rows` label/value lines.
pub fn report_height(rows: usize) -> u32 {
    PADDING * 2 + (LINE_HEIGHT as u32) * (rows as u32 + 4)
}

/// Draw the report onto a fresh canvas.
pub fn render_report(title: &str, rows: &[ExportRow], footer: &str, theme: Theme) -> RgbImage {
    let palette = theme.palette();
    let mut img = RgbImage::from_pixel(WIDTH, report_height(rows.len()), palette.background);

    let mut y = PADDING as f32;
    draw_text(&mut img, PADDING, y as u32, title, TITLE_SCALE, palette.title);
    y += LINE_HEIGHT * 1.4;

    draw_rule(&mut img, y as u32, palette.rule);
    y += LINE_HEIGHT * 0.8;

    for row in rows {
        draw_text(&mut img, PADDING, y as u32, &row.field, ROW_SCALE, palette.label);
        draw_text(&mut img, WIDTH / 2, y as u32, &row.value, ROW_SCALE, palette.value);
        y += LINE_HEIGHT;
    }

    y += LINE_HEIGHT * 0.5;
    draw_rule(&mut img, y as u32, palette.rule);
    y += LINE_HEIGHT * 0.6;
    draw_text(&mut img, PADDING, y as u32, footer, FOOTER_SCALE, palette.footer);

    img
}

/// PNG-encode a rendered report.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Render and save the report as a PNG file. Returns the canvas size.
pub fn write_report(
    path: &Path,
    title: &str,
    rows: &[ExportRow],
    footer: &str,
    theme: Theme,
) -> Result<(u32, u32), image::ImageError> {
    let img = render_report(title, rows, footer, theme);
    std::fs::write(path, encode_png(&img)?)?;
    Ok(img.dimensions())
}

fn glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Each glyph byte is one pixel row, least significant bit leftmost.
fn draw_text(img: &mut RgbImage, x: u32, y: u32, text: &str, scale: u32, color: Rgb<u8>) {
    let advance = GLYPH_SIZE * scale;
    for (i, ch) in text.chars().enumerate() {
        let origin_x = x + advance * i as u32;
        if origin_x >= img.width() {
            break;
        }
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) != 0 {
                    fill_rect(
                        img,
                        origin_x + col * scale,
                        y + row as u32 * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }
}

fn draw_rule(img: &mut RgbImage, y: u32, color: Rgb<u8>) {
    fill_rect(img, PADDING, y, WIDTH - 2 * PADDING, RULE_WIDTH, color);
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}
