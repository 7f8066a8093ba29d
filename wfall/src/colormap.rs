//! Intensity-to-color mapping.
//!
//! Both maps are total over `[0, 1]` including the endpoints, and are applied
//! uniformly to the whole raster; a single image never mixes policies.

use image::Rgb;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMap {
    /// Triangular-wave approximation of a heat gradient. The default.
    #[default]
    Thermal,
    /// Classic piecewise jet: dark blue through cyan and yellow to dark red.
    Jet,
}

impl ColorMap {
    /// Maps a normalized intensity to a color.
    ///
    /// `v` outside `[0, 1]` is clamped by the channel math, not rejected.
    pub fn map(&self, v: f32) -> Rgb<u8> {
        match self {
            ColorMap::Thermal => thermal(v),
            ColorMap::Jet => jet(v),
        }
    }
}

fn thermal(v: f32) -> Rgb<u8> {
    let channel = |center: f32| {
        let c = (1.5 - 4.0 * (v - center).abs()).clamp(0.0, 1.0);
        (c * 255.0).round() as u8
    };
    Rgb([channel(0.75), channel(0.5), channel(0.25)])
}

fn jet(v: f32) -> Rgb<u8> {
    if v <= 0.0 {
        return Rgb([0, 0, 128]);
    }
    if v >= 1.0 {
        return Rgb([128, 0, 0]);
    }

    let clamp = |c: f32| (c as i32).clamp(0, 255) as u8;

    let t = v * 4.0;
    if t <= 1.0 {
        Rgb([0, 0, clamp(128.0 + 127.0 * t)])
    }
    else if t <= 2.0 {
        Rgb([0, clamp(255.0 * (t - 1.0)), 255])
    }
    else if t <= 3.0 {
        Rgb([clamp(255.0 * (t - 2.0)), 255, clamp(255.0 * (3.0 - t))])
    }
    else {
        Rgb([255, clamp(255.0 * (4.0 - t)), 0])
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use crate::colormap::ColorMap;

    #[test]
    fn both_maps_are_total_at_the_endpoints() {
        // channels are u8 by construction; this checks the endpoint paths
        // don't hit the unclamped branches
        for map in [ColorMap::Thermal, ColorMap::Jet] {
            map.map(0.0);
            map.map(1.0);
        }
    }

    #[test]
    fn thermal_endpoints() {
        // v=0: r,g clamp to 0; b = 1.5 - 4*0.25 = 0.5
        assert_eq!(ColorMap::Thermal.map(0.0), Rgb([0, 0, 128]));
        // v=1: r = 0.5; g,b clamp to 0
        assert_eq!(ColorMap::Thermal.map(1.0), Rgb([128, 0, 0]));
        // v=0.5: g saturates at 1.0
        assert_eq!(ColorMap::Thermal.map(0.5), Rgb([128, 255, 128]));
    }

    #[test]
    fn jet_endpoints_and_segments() {
        assert_eq!(ColorMap::Jet.map(0.0), Rgb([0, 0, 128]));
        assert_eq!(ColorMap::Jet.map(1.0), Rgb([128, 0, 0]));
        assert_eq!(ColorMap::Jet.map(0.25), Rgb([0, 0, 255]));
        assert_eq!(ColorMap::Jet.map(0.5), Rgb([0, 255, 255]));
        assert_eq!(ColorMap::Jet.map(0.75), Rgb([255, 255, 0]));
    }
}
