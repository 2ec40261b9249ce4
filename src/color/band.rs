//! Color bands and band masks
//!
//! A band is an inclusive HSV predicate. Red wraps around the hue axis at
//! 0/180, so a band may carry several hue sub-ranges; a pixel matches when
//! saturation and value are in range and its hue falls in any sub-range.

use crate::constants::bands;

use super::conversion::{HsvImage, HsvPixel};

/// Inclusive `[lower, upper]` range over one HSV component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    pub lower: u8,
    pub upper: u8,
}

impl ChannelRange {
    pub const fn new(lower: u8, upper: u8) -> Self {
        Self { lower, upper }
    }

    const fn from_pair(pair: (u8, u8)) -> Self {
        Self::new(pair.0, pair.1)
    }

    pub fn contains(&self, value: u8) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Named inclusive range predicate over (hue, saturation, value)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBand {
    pub name: &'static str,
    pub hue: &'static [ChannelRange],
    pub saturation: ChannelRange,
    pub value: ChannelRange,
}

/// Green rind: hue 35-85
pub const GREEN_BAND: ColorBand = ColorBand {
    name: "green",
    hue: &[ChannelRange::from_pair(bands::GREEN_HUE)],
    saturation: ChannelRange::from_pair(bands::SATURATION),
    value: ChannelRange::from_pair(bands::VALUE),
};

/// Red flesh: hue 0-10 or 170-180
pub const RED_BAND: ColorBand = ColorBand {
    name: "red",
    hue: &[
        ChannelRange::from_pair(bands::RED_HUE_LOW),
        ChannelRange::from_pair(bands::RED_HUE_HIGH),
    ],
    saturation: ChannelRange::from_pair(bands::SATURATION),
    value: ChannelRange::from_pair(bands::VALUE),
};

impl ColorBand {
    /// Check whether one pixel falls inside the band
    pub fn matches(&self, pixel: HsvPixel) -> bool {
        self.saturation.contains(pixel.s)
            && self.value.contains(pixel.v)
            && self.hue.iter().any(|range| range.contains(pixel.h))
    }

    /// Build the mask of pixels inside the band
    pub fn mask(&self, hsv: &HsvImage) -> Mask {
        let bits = hsv.pixels().iter().map(|&p| self.matches(p)).collect();
        Mask {
            width: hsv.width(),
            height: hsv.height(),
            bits,
        }
    }
}

/// Boolean grid marking which pixels matched a band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether the pixel at column `x`, row `y` is set
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Number of set pixels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bgr_image::Image;
    use crate::color::ColorConverter;

    fn px(h: u8, s: u8, v: u8) -> HsvPixel {
        HsvPixel::new(h, s, v)
    }

    #[test]
    fn test_green_band_bounds_inclusive() {
        assert!(GREEN_BAND.matches(px(35, 50, 50)));
        assert!(GREEN_BAND.matches(px(85, 255, 255)));
        assert!(!GREEN_BAND.matches(px(34, 200, 200)));
        assert!(!GREEN_BAND.matches(px(86, 200, 200)));
    }

    #[test]
    fn test_low_saturation_or_value_rejected() {
        assert!(!GREEN_BAND.matches(px(60, 49, 200)));
        assert!(!GREEN_BAND.matches(px(60, 200, 49)));
        assert!(!RED_BAND.matches(px(0, 49, 200)));
        assert!(!RED_BAND.matches(px(175, 200, 49)));
    }

    #[test]
    fn test_red_band_wraps_hue_axis() {
        assert!(RED_BAND.matches(px(0, 255, 255)));
        assert!(RED_BAND.matches(px(10, 255, 255)));
        assert!(RED_BAND.matches(px(170, 255, 255)));
        assert!(RED_BAND.matches(px(180, 255, 255)));

        // Between the two sub-ranges nothing is red
        for h in 11..170 {
            assert!(!RED_BAND.matches(px(h, 255, 255)), "hue {} matched red", h);
        }
    }

    #[test]
    fn test_band_membership_at_converted_edges() {
        // BGR colors whose 8-bit hue, saturation or value lands on either side
        // of a band bound
        let cases: [([u8; 3], bool, bool); 12] = [
            ([0, 70, 200], true, false),
            ([0, 85, 243], false, false),
            ([0, 113, 96], false, false),
            ([0, 127, 108], false, true),
            ([164, 200, 0], false, true),
            ([170, 200, 2], false, false),
            ([53, 0, 150], false, false),
            ([48, 0, 150], true, false),
            ([205, 255, 205], false, true),
            ([206, 255, 206], false, false),
            ([0, 50, 0], false, true),
            ([0, 49, 0], false, false),
        ];
        let converter = ColorConverter::new();
        for ([b, g, r], red, green) in cases {
            let hsv = converter.bgr_to_hsv(b, g, r);
            assert_eq!(RED_BAND.matches(hsv), red, "red band for {:?}", [b, g, r]);
            assert_eq!(GREEN_BAND.matches(hsv), green, "green band for {:?}", [b, g, r]);
        }
    }

    #[test]
    fn test_mask_counts_matching_pixels() {
        let rows = vec![
            vec![[0, 255, 0], [0, 0, 255]],
            vec![[0, 0, 0], [40, 0, 255]],
        ];
        let image = Image::from_rows(&rows).unwrap();
        let hsv = ColorConverter::new().to_hsv(&image).unwrap();

        let green = GREEN_BAND.mask(&hsv);
        let red = RED_BAND.mask(&hsv);

        assert_eq!(green.count(), 1);
        assert!(green.is_set(0, 0));
        assert_eq!(red.count(), 2);
        assert!(red.is_set(1, 0));
        assert!(red.is_set(1, 1));
        assert!(!red.is_set(0, 1));
        assert!(!red.is_set(5, 5));
    }
}
