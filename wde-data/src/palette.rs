//! Color assignment: an ordinal palette over country codes sampled from a
//! four-stop ramp, plus the two-stop fill ramp used by the choropleth.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn parse(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        Some(Rgb {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgb {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
        }
    }
}

/// Ramp stops shared by all views.
const RAMP: [(f64, &str); 4] = [
    (0.0, "#cfe2f2"),
    (0.33, "#7accc8"),
    (0.66, "#f2b880"),
    (1.0, "#0d306b"),
];

const MAP_LOW: &str = "#cfe2f2";
const MAP_HIGH: &str = "#0d306b";

/// Sample the four-stop ramp at `t` in [0, 1].
pub fn ramp(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    for window in RAMP.windows(2) {
        let (t0, hex0) = window[0];
        let (t1, hex1) = window[1];
        if t <= t1 {
            let a = Rgb::parse(hex0).unwrap_or(Rgb { r: 0, g: 0, b: 0 });
            let b = Rgb::parse(hex1).unwrap_or(Rgb { r: 0, g: 0, b: 0 });
            let local = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return Rgb::lerp(a, b, local);
        }
    }
    Rgb::parse(MAP_HIGH).unwrap_or(Rgb { r: 0, g: 0, b: 0 })
}

/// Assign each distinct code a stable color: codes are sorted, then spread
/// evenly across the ramp.
pub fn ordinal_palette<I, S>(codes: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique: Vec<String> = codes
        .into_iter()
        .map(|c| c.as_ref().trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    unique.sort();
    unique.dedup();

    let n = unique.len();
    unique
        .into_iter()
        .enumerate()
        .map(|(i, code)| {
            let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
            (code, ramp(t).to_hex())
        })
        .collect()
}

/// Two-stop choropleth fill for a normalized value.
pub fn map_fill(t: f64) -> String {
    let low = Rgb::parse(MAP_LOW).unwrap_or(Rgb { r: 0, g: 0, b: 0 });
    let high = Rgb::parse(MAP_HIGH).unwrap_or(Rgb { r: 0, g: 0, b: 0 });
    Rgb::lerp(low, high, t).to_hex()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let rgb = Rgb::parse("#cfe2f2").unwrap();
        assert_eq!(rgb, Rgb { r: 0xcf, g: 0xe2, b: 0xf2 });
        assert_eq!(rgb.to_hex(), "#cfe2f2");
        assert_eq!(Rgb::parse("cfe2f2"), None);
        assert_eq!(Rgb::parse("#xyzxyz"), None);
    }

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(ramp(0.0).to_hex(), "#cfe2f2");
        assert_eq!(ramp(1.0).to_hex(), "#0d306b");
        assert_eq!(ramp(0.33).to_hex(), "#7accc8");
        // Out-of-range samples clamp.
        assert_eq!(ramp(-3.0).to_hex(), "#cfe2f2");
        assert_eq!(ramp(9.0).to_hex(), "#0d306b");
    }

    #[test]
    fn test_ordinal_palette_spread() {
        let palette = ordinal_palette(["IND", "USA", "CHN", "USA", " "]);
        assert_eq!(palette.len(), 3);
        // Sorted codes: CHN first gets the ramp start, USA last the end.
        assert_eq!(palette["CHN"], "#cfe2f2");
        assert_eq!(palette["USA"], "#0d306b");
    }

    #[test]
    fn test_single_code_gets_ramp_start() {
        let palette = ordinal_palette(["USA"]);
        assert_eq!(palette["USA"], "#cfe2f2");
    }

    #[test]
    fn test_map_fill_endpoints() {
        assert_eq!(map_fill(0.0), "#cfe2f2");
        assert_eq!(map_fill(1.0), "#0d306b");
    }
}
