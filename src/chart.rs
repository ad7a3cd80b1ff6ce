//! Raster bar chart of the [`Totals`].
use std::io::Cursor;

use ab_glyph::{FontRef, PxScale};
use image::{imageops, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::{Error, Totals};

/// The file name of the chart inside the output directory
pub const CHART_FILE: &str = "logistics_metrics_summary.png";

pub const TITLE: &str = "Green Logistics Summary Metrics";
const Y_LABEL: &str = "Value";

/// DejaVu Sans, see `assets/DejaVuSans.LICENSE`
static FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

const WIDTH: u32 = 800;
const HEIGHT: u32 = 400;
const LEFT: u32 = 90;
const RIGHT: u32 = 20;
const TOP: u32 = 40;
const BOTTOM: u32 = 40;
const TICKS: u32 = 4;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const GRID: Rgb<u8> = Rgb([230, 230, 230]);

/// The bars in order, with their colour
const BARS: [(&str, Rgb<u8>); 3] = [
    ("Distance (km)", Rgb([0x4C, 0xAF, 0x50])),
    ("Duration (min)", Rgb([0x21, 0x96, 0xF3])),
    ("Emissions (g CO₂)", Rgb([0xFF, 0x57, 0x22])),
];

/// Returns the (label, value) of each bar of the chart
pub fn bars(totals: &Totals) -> [(&'static str, f64); 3] {
    let values = [totals.distance_km, totals.duration_min, totals.co2_grams];
    [
        (BARS[0].0, values[0]),
        (BARS[1].0, values[1]),
        (BARS[2].0, values[2]),
    ]
}

fn fill(image: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    for y in y0..y1.min(image.height()) {
        for x in x0..x1.min(image.width()) {
            image.put_pixel(x, y, color);
        }
    }
}

/// Width and height of `text` in pixels
fn measure(font: &FontRef, scale: f32, text: &str) -> (i32, i32) {
    let (width, height) = text_size(PxScale::from(scale), font, text);
    (width as i32, height as i32)
}

/// Draws `text` horizontally centred on `x`, with its top at `y`
fn centered(image: &mut RgbImage, font: &FontRef, scale: f32, x: i32, y: i32, text: &str) {
    let (width, _) = measure(font, scale, text);
    draw_text_mut(image, AXIS, x - width / 2, y, PxScale::from(scale), font, text);
}

/// Draws `text` rotated a quarter turn counter-clockwise, vertically centred on `y`
fn vertical(image: &mut RgbImage, font: &FontRef, scale: f32, x: i32, y: i32, text: &str) {
    let (width, height) = measure(font, scale, text);
    let mut label = RgbImage::from_pixel(width as u32 + 4, height as u32 + 4, BACKGROUND);
    draw_text_mut(&mut label, AXIS, 2, 2, PxScale::from(scale), font, text);
    let label = imageops::rotate270(&label);
    let top = y - label.height() as i32 / 2;
    imageops::overlay(image, &label, x as i64, top as i64);
}

fn tick(value: f64) -> String {
    if value >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Draws the three totals as labelled bars scaled to the largest one
pub fn draw(totals: &Totals) -> Result<RgbImage, Error> {
    let font = FontRef::try_from_slice(FONT).map_err(Error::Font)?;
    let mut image = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    let plot_height = HEIGHT - TOP - BOTTOM;
    let baseline = HEIGHT - BOTTOM;

    let bars = bars(totals);
    let max = bars
        .iter()
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);
    // all-zero totals still get a readable axis
    let axis_max = if max > 0.0 { max } else { 1.0 };

    // horizontal grid and y ticks at every quarter of the largest value
    for i in 0..=TICKS {
        let y = baseline - plot_height * i / TICKS;
        if i > 0 {
            fill(&mut image, LEFT, y, WIDTH - RIGHT, y + 1, GRID);
        }
        let label = tick(axis_max * i as f64 / TICKS as f64);
        let (width, height) = measure(&font, 12.0, &label);
        draw_text_mut(
            &mut image,
            AXIS,
            LEFT as i32 - 8 - width,
            y as i32 - height / 2,
            PxScale::from(12.0),
            &font,
            &label,
        );
    }

    let slot = (WIDTH - LEFT - RIGHT) / bars.len() as u32;
    let bar_width = slot * 3 / 5;
    for (i, ((label, value), (_, color))) in bars.iter().zip(BARS.iter()).enumerate() {
        let x0 = LEFT + slot * i as u32 + (slot - bar_width) / 2;
        if value.is_finite() && *value > 0.0 {
            let height = ((value / axis_max) * plot_height as f64).round() as u32;
            fill(&mut image, x0, baseline - height, x0 + bar_width, baseline, *color);
        }
        let center = (x0 + bar_width / 2) as i32;
        centered(&mut image, &font, 14.0, center, baseline as i32 + 10, label);
    }

    // axes
    fill(&mut image, LEFT, TOP, LEFT + 1, baseline + 1, AXIS);
    fill(&mut image, LEFT, baseline, WIDTH - RIGHT, baseline + 1, AXIS);

    let plot_center = ((LEFT + WIDTH - RIGHT) / 2) as i32;
    centered(&mut image, &font, 20.0, plot_center, 10, TITLE);
    vertical(
        &mut image,
        &font,
        14.0,
        10,
        (TOP + plot_height / 2) as i32,
        Y_LABEL,
    );

    Ok(image)
}

/// Returns the chart of `totals` encoded as PNG
pub fn render(totals: &Totals) -> Result<Vec<u8>, Error> {
    let mut data = Cursor::new(vec![]);
    draw(totals)?.write_to(&mut data, ImageFormat::Png)?;
    Ok(data.into_inner())
}
