use super::viewing::{cam16rgb_to_xyz, ViewingConditions, XYZ_TO_CAM16RGB};
use crate::core::{argb_from_xyz, multiply, sanitize_degrees, signum, xyz_from_argb};

/// A color's appearance correlates under some viewing conditions.
///
/// Besides hue, chroma, lightness J, brightness Q, colorfulness M, and
/// saturation S, a CAM16 color also carries its coordinates J*, a*, b* in the
/// perceptually uniform CAM16-UCS space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cam16 {
    hue: f64,
    chroma: f64,
    j: f64,
    q: f64,
    m: f64,
    s: f64,
    jstar: f64,
    astar: f64,
    bstar: f64,
}

impl Cam16 {
    /// Compute the CAM16 correlates of the ARGB color under the default
    /// viewing conditions.
    pub fn from_argb(argb: u32) -> Self {
        Self::from_argb_in_viewing_conditions(argb, ViewingConditions::standard())
    }

    /// Compute the CAM16 correlates of the ARGB color under the given viewing
    /// conditions.
    pub fn from_argb_in_viewing_conditions(argb: u32, vc: &ViewingConditions) -> Self {
        Self::from_xyz_in_viewing_conditions(&xyz_from_argb(argb), vc)
    }

    /// Compute the CAM16 correlates of the XYZ color under the given viewing
    /// conditions.
    pub fn from_xyz_in_viewing_conditions(xyz: &[f64; 3], vc: &ViewingConditions) -> Self {
        // Chromatic adaptation
        let rgb_t = multiply(&XYZ_TO_CAM16RGB, xyz);
        let rgb_d = vc.rgb_d();
        let response = |index: usize| {
            let discounted = rgb_d[index] * rgb_t[index];
            let af = (vc.fl() * discounted.abs() / 100.0).powf(0.42);
            signum(discounted) * 400.0 * af / (af + 27.13)
        };
        let [ra, ga, ba] = [response(0), response(1), response(2)];

        // Opponent channels and hue
        let a = (11.0 * ra - 12.0 * ga + ba) / 11.0;
        let b = (ra + ga - 2.0 * ba) / 9.0;
        let u = (20.0 * ra + 20.0 * ga + 21.0 * ba) / 20.0;
        let p2 = (40.0 * ra + 20.0 * ga + ba) / 20.0;

        let hue = sanitize_degrees(b.atan2(a).to_degrees());
        let hue_radians = hue.to_radians();

        // Achromatic response, lightness, and brightness
        let ac = p2 * vc.nbb();
        let j = 100.0 * (ac / vc.aw()).powf(vc.c() * vc.z());
        let q = 4.0 / vc.c() * (j / 100.0).sqrt() * (vc.aw() + 4.0) * vc.fl_root();

        // Chroma, colorfulness, and saturation
        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc() * vc.ncb();
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29_f64.powf(vc.n())).powf(0.73) * t.powf(0.9);
        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root();
        let s = 50.0 * (alpha * vc.c() / (vc.aw() + 4.0)).sqrt();

        let (jstar, astar, bstar) = Self::to_ucs(j, m, hue_radians);
        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// Create a CAM16 color from lightness J, chroma, and hue under the
    /// default viewing conditions.
    pub fn from_jch(j: f64, chroma: f64, hue: f64) -> Self {
        Self::from_jch_in_viewing_conditions(j, chroma, hue, ViewingConditions::standard())
    }

    /// Create a CAM16 color from lightness J, chroma, and hue under the given
    /// viewing conditions.
    pub fn from_jch_in_viewing_conditions(
        j: f64,
        chroma: f64,
        hue: f64,
        vc: &ViewingConditions,
    ) -> Self {
        let q = 4.0 / vc.c() * (j / 100.0).sqrt() * (vc.aw() + 4.0) * vc.fl_root();
        let m = chroma * vc.fl_root();
        let alpha = if j == 0.0 {
            0.0
        } else {
            chroma / (j / 100.0).sqrt()
        };
        let s = 50.0 * (alpha * vc.c() / (vc.aw() + 4.0)).sqrt();

        let (jstar, astar, bstar) = Self::to_ucs(j, m, hue.to_radians());
        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// Create a CAM16 color from its CAM16-UCS coordinates under the default
    /// viewing conditions.
    pub fn from_ucs(jstar: f64, astar: f64, bstar: f64) -> Self {
        Self::from_ucs_in_viewing_conditions(jstar, astar, bstar, ViewingConditions::standard())
    }

    /// Create a CAM16 color from its CAM16-UCS coordinates under the given
    /// viewing conditions.
    pub fn from_ucs_in_viewing_conditions(
        jstar: f64,
        astar: f64,
        bstar: f64,
        vc: &ViewingConditions,
    ) -> Self {
        let m = (astar.hypot(bstar) * 0.0228).exp_m1() / 0.0228;
        let chroma = m / vc.fl_root();
        let hue = sanitize_degrees(bstar.atan2(astar).to_degrees());
        let j = jstar / (1.0 - (jstar - 100.0) * 0.007);
        Self::from_jch_in_viewing_conditions(j, chroma, hue, vc)
    }

    fn to_ucs(j: f64, m: f64, hue_radians: f64) -> (f64, f64, f64) {
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = (0.0228 * m).ln_1p() / 0.0228;
        (
            jstar,
            mstar * hue_radians.cos(),
            mstar * hue_radians.sin(),
        )
    }

    /// Get the hue in degrees `0..360`.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Get the chroma.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Get the lightness J.
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Get the brightness Q.
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Get the colorfulness M.
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Get the saturation S.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Get the CAM16-UCS lightness J*.
    pub fn jstar(&self) -> f64 {
        self.jstar
    }

    /// Get the CAM16-UCS coordinate a*.
    pub fn astar(&self) -> f64 {
        self.astar
    }

    /// Get the CAM16-UCS coordinate b*.
    pub fn bstar(&self) -> f64 {
        self.bstar
    }

    /// Compute the color difference in CAM16-UCS.
    pub fn distance(&self, other: &Self) -> f64 {
        let dj = self.jstar - other.jstar;
        let da = self.astar - other.astar;
        let db = self.bstar - other.bstar;
        let de_prime = (dj * dj + da * da + db * db).sqrt();
        1.41 * de_prime.powf(0.63)
    }

    /// Convert this color back to ARGB under the default viewing conditions.
    pub fn to_argb(&self) -> u32 {
        self.viewed(ViewingConditions::standard())
    }

    /// Convert this color back to ARGB under the given viewing conditions.
    pub fn viewed(&self, vc: &ViewingConditions) -> u32 {
        argb_from_xyz(&self.xyz_in_viewing_conditions(vc))
    }

    /// Convert this color to XYZ under the given viewing conditions.
    pub fn xyz_in_viewing_conditions(&self, vc: &ViewingConditions) -> [f64; 3] {
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };

        let t = (alpha / (1.64 - 0.29_f64.powf(vc.n())).powf(0.73)).powf(1.0 / 0.9);
        let hue_radians = self.hue.to_radians();

        let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
        let ac = vc.aw() * (self.j / 100.0).powf(1.0 / vc.c() / vc.z());
        let p1 = e_hue * (50000.0 / 13.0) * vc.nc() * vc.ncb();
        let p2 = ac / vc.nbb();

        let (h_sin, h_cos) = hue_radians.sin_cos();
        let gamma =
            23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;

        let ra = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let ga = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let ba = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        let rgb_d = vc.rgb_d();
        let unadapted = |response: f64, index: usize| {
            let base = (27.13 * response.abs() / (400.0 - response.abs())).max(0.0);
            signum(response) * (100.0 / vc.fl()) * base.powf(1.0 / 0.42) / rgb_d[index]
        };

        multiply(
            cam16rgb_to_xyz(),
            &[unadapted(ra, 0), unadapted(ga, 1), unadapted(ba, 2)],
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{assert_close_enough, is_same_hue};

    #[test]
    fn test_blue() {
        let cam = Cam16::from_argb(0xff0000ff);
        assert_close_enough!(cam.j(), 25.4656, 0.1);
        assert_close_enough!(cam.chroma(), 87.2307, 0.1);
        assert_close_enough!(cam.hue(), 282.7882, 0.1);
        assert_close_enough!(cam.q(), 78.4814, 0.1);
        assert_close_enough!(cam.m(), 68.8671, 0.1);
        assert_close_enough!(cam.s(), 93.6748, 0.1);
        assert_close_enough!(cam.jstar(), 36.7420, 0.1);
        assert_close_enough!(cam.astar(), 9.1643, 0.1);
        assert_close_enough!(cam.bstar(), -40.3753, 0.1);
    }

    #[test]
    fn test_black() {
        let cam = Cam16::from_argb(0xff000000);
        for value in [
            cam.j(),
            cam.chroma(),
            cam.hue(),
            cam.q(),
            cam.m(),
            cam.s(),
            cam.jstar(),
            cam.astar(),
            cam.bstar(),
        ] {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_round_trip() {
        for argb in [0xffff0000, 0xff00ff00, 0xff0000ff, 0xff63a002, 0xffffffff, 0xff777777] {
            let cam = Cam16::from_argb(argb);
            assert_eq!(cam.to_argb(), argb);

            let from_jch = Cam16::from_jch(cam.j(), cam.chroma(), cam.hue());
            assert_eq!(from_jch.to_argb(), argb);

            let from_ucs = Cam16::from_ucs(cam.jstar(), cam.astar(), cam.bstar());
            assert_close_enough!(from_ucs.j(), cam.j(), 1e-6);
            assert_close_enough!(from_ucs.chroma(), cam.chroma(), 1e-6);
            assert!(cam.chroma() < 1e-3 || is_same_hue(from_ucs.hue(), cam.hue(), 1e-6));
        }
    }

    #[test]
    fn test_distance() {
        let red = Cam16::from_argb(0xffff0000);
        let blue = Cam16::from_argb(0xff0000ff);
        assert_eq!(red.distance(&red), 0.0);
        assert!(10.0 < red.distance(&blue));
        assert_close_enough!(red.distance(&blue), blue.distance(&red), 1e-12);
    }
}
