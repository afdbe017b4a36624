//! Color temperature analysis.
//!
//! Warm colors have hues close to orange, cool colors hues close to blue.
//! [`TemperatureCache`] ranks the colors sharing an input color's chroma and
//! tone by temperature, which yields analogous colors evenly spaced in
//! temperature as well as the complement.

use std::cell::OnceCell;

use crate::core::{lab_from_argb, sanitize_degrees, sanitize_degrees_int};
use crate::hct::Hct;

/// Determine whether the angle lies on the arc going from `a` to `b`.
fn is_between(angle: f64, a: f64, b: f64) -> bool {
    if a < b {
        a <= angle && angle <= b
    } else {
        a <= angle || angle <= b
    }
}

/// A temperature analysis of a color.
///
/// The tables of colors by hue and by temperature are computed on first use
/// and reused thereafter.
#[derive(Debug)]
pub struct TemperatureCache {
    input: Hct,
    hcts_by_hue: OnceCell<Vec<Hct>>,
    hcts_by_temperature: OnceCell<Vec<(Hct, f64)>>,
    complement: OnceCell<Hct>,
}

impl TemperatureCache {
    /// Create a new temperature analysis for the given color.
    pub fn new(input: Hct) -> Self {
        Self {
            input,
            hcts_by_hue: OnceCell::new(),
            hcts_by_temperature: OnceCell::new(),
            complement: OnceCell::new(),
        }
    }

    /// Get the input color.
    pub fn input(&self) -> &Hct {
        &self.input
    }

    /// Compute the raw temperature of the color.
    ///
    /// The result is -0.5 for achromatic colors and grows with chroma towards
    /// warm hues, i.e., hues close to 50º in CIELAB.
    pub fn raw_temperature(color: &Hct) -> f64 {
        let [_, a, b] = lab_from_argb(color.to_argb());
        let hue = sanitize_degrees(b.atan2(a).to_degrees());
        let chroma = a.hypot(b);
        -0.5 + 0.02 * chroma.powf(1.07) * sanitize_degrees(hue - 50.0).to_radians().cos()
    }

    /// Get the 361 colors with the input's chroma and tone for hues 0 through
    /// 360 inclusive.
    fn hcts_by_hue(&self) -> &[Hct] {
        self.hcts_by_hue.get_or_init(|| {
            (0..=360)
                .map(|hue| Hct::new(hue as f64, self.input.chroma(), self.input.tone()))
                .collect()
        })
    }

    /// Get the colors by hue together with the input color, sorted by
    /// increasing temperature.
    fn hcts_by_temperature(&self) -> &[(Hct, f64)] {
        self.hcts_by_temperature.get_or_init(|| {
            let mut hcts: Vec<_> = self
                .hcts_by_hue()
                .iter()
                .chain(std::iter::once(&self.input))
                .map(|hct| (*hct, Self::raw_temperature(hct)))
                .collect();
            hcts.sort_by(|(_, t1), (_, t2)| t1.total_cmp(t2));
            hcts
        })
    }

    fn coldest(&self) -> (Hct, f64) {
        self.hcts_by_temperature()
            .first()
            .copied()
            .unwrap_or((self.input, Self::raw_temperature(&self.input)))
    }

    fn warmest(&self) -> (Hct, f64) {
        self.hcts_by_temperature()
            .last()
            .copied()
            .unwrap_or((self.input, Self::raw_temperature(&self.input)))
    }

    /// Get the color with the input's chroma and tone at the rounded hue.
    fn hct_at_hue(&self, hue: f64) -> Hct {
        let index = sanitize_degrees_int(hue.round() as i32) as usize;
        self.hcts_by_hue().get(index).copied().unwrap_or(self.input)
    }

    /// Determine the temperature of the color relative to the coldest and
    /// warmest colors with the input's chroma and tone.
    ///
    /// The result is 0 for the coldest, 1 for the warmest, and 0.5 if all
    /// colors have the same temperature.
    pub fn relative_temperature(&self, color: &Hct) -> f64 {
        let (_, coldest) = self.coldest();
        let (_, warmest) = self.warmest();
        let range = warmest - coldest;
        if range == 0.0 {
            return 0.5;
        }

        (Self::raw_temperature(color) - coldest) / range
    }

    /// Find the complement of the input color.
    ///
    /// The complement has the input's chroma and tone, lies on the other side
    /// of the temperature spectrum, and is as far from the input in relative
    /// temperature as possible. It need not be 180º apart in hue.
    pub fn complement(&self) -> Hct {
        *self.complement.get_or_init(|| {
            let (coldest, coldest_temperature) = self.coldest();
            let (warmest, warmest_temperature) = self.warmest();
            let range = warmest_temperature - coldest_temperature;

            let input_hue = self.input.hue();
            let (start_hue, end_hue) = if is_between(input_hue, coldest.hue(), warmest.hue()) {
                (warmest.hue(), coldest.hue())
            } else {
                (coldest.hue(), warmest.hue())
            };

            let target = 1.0 - self.relative_temperature(&self.input);
            let mut smallest_error = 1000.0;
            let mut answer = self.hct_at_hue(input_hue);

            for addend in 0..=360 {
                let hue = sanitize_degrees(start_hue + addend as f64);
                if !is_between(hue, start_hue, end_hue) {
                    continue;
                }

                let candidate = self.hct_at_hue(hue);
                let relative = (Self::raw_temperature(&candidate) - coldest_temperature) / range;
                let error = (target - relative).abs();
                if error < smallest_error {
                    smallest_error = error;
                    answer = candidate;
                }
            }

            answer
        })
    }

    /// Find analogous colors.
    ///
    /// This method divides the hue circle into the given number of divisions
    /// with equal temperature differences and returns `count` colors, with the
    /// input color in the middle.
    pub fn analogous_colors(&self, count: usize, divisions: usize) -> Vec<Hct> {
        let start_hue = self.input.hue().round() as i32;
        let start = self.hct_at_hue(start_hue as f64);
        let hue_at = |addend: i32| {
            self.hcts_by_hue()
                .get(sanitize_degrees_int(start_hue + addend) as usize)
                .copied()
                .unwrap_or(start)
        };

        // Total temperature change around the circle
        let mut last_temperature = self.relative_temperature(&start);
        let mut absolute_total_delta = 0.0;
        for addend in 0..360 {
            let temperature = self.relative_temperature(&hue_at(addend));
            absolute_total_delta += (temperature - last_temperature).abs();
            last_temperature = temperature;
        }

        // Colors evenly spaced by temperature
        let step = absolute_total_delta / divisions as f64;
        let mut all_colors = vec![start];
        let mut total_delta = 0.0;
        let mut last_temperature = self.relative_temperature(&start);
        let mut hue_addend = 1;

        while all_colors.len() < divisions {
            let hct = hue_at(hue_addend);
            let temperature = self.relative_temperature(&hct);
            total_delta += (temperature - last_temperature).abs();

            let mut index_addend = 0;
            while all_colors.len() < divisions
                && (all_colors.len() + index_addend) as f64 * step <= total_delta
            {
                all_colors.push(hct);
                index_addend += 1;
            }

            last_temperature = temperature;
            hue_addend += 1;
            if 360 < hue_addend {
                all_colors.resize(divisions, hct);
                break;
            }
        }

        // Arrange around the input color
        let length = all_colors.len() as isize;
        let pick = |index: isize| all_colors[index.rem_euclid(length) as usize];

        let increase_count = (count.saturating_sub(1) / 2) as isize;
        let decrease_count = count as isize - increase_count - 1;

        let mut answers = Vec::with_capacity(count);
        answers.extend((1..=increase_count).rev().map(|index| pick(-index)));
        answers.push(self.input);
        answers.extend((1..=decrease_count).map(pick));
        answers
    }
}

#[cfg(test)]
mod test {
    use super::TemperatureCache;
    use crate::core::assert_close_enough;
    use crate::hct::Hct;

    #[test]
    fn test_raw_temperature() {
        let blue = Hct::from_argb(0xff0000ff);
        assert_close_enough!(TemperatureCache::raw_temperature(&blue), -1.393, 1e-3);

        let red = Hct::from_argb(0xffff0000);
        assert_close_enough!(TemperatureCache::raw_temperature(&red), 2.351, 1e-3);

        let green = Hct::from_argb(0xff00ff00);
        assert_close_enough!(TemperatureCache::raw_temperature(&green), -0.267, 1e-3);

        let white = Hct::from_argb(0xffffffff);
        assert_close_enough!(TemperatureCache::raw_temperature(&white), -0.5, 1e-3);
    }

    #[test]
    fn test_relative_temperature() {
        let cache = TemperatureCache::new(Hct::from_argb(0xff0000ff));
        let relative = cache.relative_temperature(cache.input());
        assert!((0.0..=1.0).contains(&relative));

        let black = TemperatureCache::new(Hct::from_argb(0xff000000));
        assert_eq!(black.relative_temperature(black.input()), 0.5);
    }

    #[test]
    fn test_analogous_colors() {
        let input = Hct::from_argb(0xff0000ff);
        let cache = TemperatureCache::new(input);

        let colors = cache.analogous_colors(5, 12);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[2], input);

        let colors = cache.analogous_colors(3, 6);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1], input);
        for color in &colors {
            assert_close_enough!(color.tone(), input.tone(), 1.0);
        }
    }

    #[test]
    fn test_complement() {
        let input = Hct::from_argb(0xff0000ff);
        let cache = TemperatureCache::new(input);
        let complement = cache.complement();

        assert_close_enough!(complement.tone(), input.tone(), 1.0);
        assert!(0.5 < cache.relative_temperature(&complement));
        assert_eq!(cache.complement(), complement);
    }
}
