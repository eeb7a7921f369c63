use egui::{Color32, Pos2};

/// Default text color (dark slate).
pub const TEXT_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);
/// Default shape fill (neutral gray).
pub const SHAPE_DEFAULT: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);
/// Selection outline and accent controls.
pub const ACCENT: Color32 = Color32::from_rgb(0x8B, 0x5C, 0xF6);

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
pub fn parse_hex(input: &str) -> Option<Color32> {
    let hex = input.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 17;
            }
            Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}

/// Formats a color as `#rrggbb`, ignoring alpha.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// A linear gradient rendered between two points. Sampling is a pure function
/// of the definition and the pointer coordinate; nothing is read back from
/// the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Pos2,
    pub end: Pos2,
    /// Stops as `(offset in 0..=1, color)`, sorted by offset.
    pub stops: Vec<(f32, Color32)>,
}

impl LinearGradient {
    pub fn new(start: Pos2, end: Pos2, mut stops: Vec<(f32, Color32)>) -> Self {
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { start, end, stops }
    }

    /// Full-saturation hue strip, the usual backdrop of a color picker.
    pub fn hue_strip(start: Pos2, end: Pos2) -> Self {
        let hues = [
            Color32::from_rgb(255, 0, 0),
            Color32::from_rgb(255, 255, 0),
            Color32::from_rgb(0, 255, 0),
            Color32::from_rgb(0, 255, 255),
            Color32::from_rgb(0, 0, 255),
            Color32::from_rgb(255, 0, 255),
            Color32::from_rgb(255, 0, 0),
        ];
        let last = (hues.len() - 1) as f32;
        let stops = hues
            .iter()
            .enumerate()
            .map(|(i, c)| (i as f32 / last, *c))
            .collect();
        Self::new(start, end, stops)
    }

    /// RGB under `point`. Points beyond either end clamp to the end stops.
    pub fn sample(&self, point: Pos2) -> [u8; 3] {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return [0, 0, 0];
        };

        let axis = self.end - self.start;
        let len_sq = axis.length_sq();
        let t = if len_sq <= f32::EPSILON {
            0.0
        } else {
            ((point - self.start).dot(axis) / len_sq).clamp(0.0, 1.0)
        };

        if t <= first.0 {
            return rgb(first.1);
        }
        if t >= last.0 {
            return rgb(last.1);
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.0 && t <= b.0 {
                let span = b.0 - a.0;
                let local = if span <= f32::EPSILON { 0.0 } else { (t - a.0) / span };
                return lerp_rgb(a.1, b.1, local);
            }
        }
        rgb(last.1)
    }
}

fn rgb(c: Color32) -> [u8; 3] {
    [c.r(), c.g(), c.b()]
}

fn lerp_rgb(a: Color32, b: Color32, t: f32) -> [u8; 3] {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    [mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b())]
}
