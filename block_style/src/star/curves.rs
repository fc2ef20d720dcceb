//! Parametric curves built from four polygon vertices.

use bevy::math::Vec3;

/// A curve parameterized over `t ∈ [0, 1]`.
pub trait PathCurve {
    fn position(&self, t: f32) -> Vec3;

    /// Unit tangent at `t`. Falls back to a central difference when the
    /// analytic derivative vanishes.
    fn tangent(&self, t: f32) -> Vec3 {
        const H: f32 = 1e-3;
        let a = self.position((t - H).max(0.0));
        let b = self.position((t + H).min(1.0));
        (b - a).normalize_or_zero()
    }

    /// `divisions + 1` evenly spaced points including both ends.
    fn sample(&self, divisions: usize) -> Vec<Vec3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.position(i as f32 / divisions as f32))
            .collect()
    }
}

/// Cubic Bézier over a control polygon. Passes through the first and last
/// points only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub points: [Vec3; 4],
}

impl CubicBezier {
    pub fn new(points: [Vec3; 4]) -> Self {
        Self { points }
    }
}

impl PathCurve for CubicBezier {
    fn position(&self, t: f32) -> Vec3 {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        let tt = t * t;
        let uu = u * u;
        uu * u * p0 + 3.0 * uu * t * p1 + 3.0 * u * tt * p2 + tt * t * p3
    }

    fn tangent(&self, t: f32) -> Vec3 {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        let d = 3.0 * u * u * (p1 - p0) + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (p3 - p2);
        match d.try_normalize() {
            Some(dir) => dir,
            None => {
                const H: f32 = 1e-3;
                let a = self.position((t - H).max(0.0));
                let b = self.position((t + H).min(1.0));
                (b - a).normalize_or_zero()
            }
        }
    }
}

/// Centripetal Catmull-Rom spline through every point. The ends are extended
/// by reflecting the neighbouring point so the curve starts and stops exactly
/// on the first and last points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatmullRom {
    pub points: [Vec3; 4],
}

/// Knot spacing exponent applied to squared distances (alpha 0.5).
const CENTRIPETAL_POW: f32 = 0.25;
const MIN_KNOT_SPACING: f32 = 1e-4;

impl CatmullRom {
    pub fn new(points: [Vec3; 4]) -> Self {
        Self { points }
    }

    fn control(&self, i: isize) -> Vec3 {
        let last = self.points.len() as isize - 1;
        if i < 0 {
            2.0 * self.points[0] - self.points[1]
        } else if i > last {
            2.0 * self.points[3] - self.points[2]
        } else {
            self.points[i as usize]
        }
    }
}

impl PathCurve for CatmullRom {
    fn position(&self, t: f32) -> Vec3 {
        let spans = (self.points.len() - 1) as f32;
        let p = t.clamp(0.0, 1.0) * spans;
        let mut seg = p.floor() as isize;
        let mut w = p - seg as f32;
        if seg as f32 >= spans {
            seg = spans as isize - 1;
            w = 1.0;
        }

        let p0 = self.control(seg - 1);
        let p1 = self.control(seg);
        let p2 = self.control(seg + 1);
        let p3 = self.control(seg + 2);

        let mut dt1 = p1.distance_squared(p2).powf(CENTRIPETAL_POW);
        if dt1 < MIN_KNOT_SPACING {
            dt1 = 1.0;
        }
        let mut dt0 = p0.distance_squared(p1).powf(CENTRIPETAL_POW);
        if dt0 < MIN_KNOT_SPACING {
            dt0 = dt1;
        }
        let mut dt2 = p2.distance_squared(p3).powf(CENTRIPETAL_POW);
        if dt2 < MIN_KNOT_SPACING {
            dt2 = dt1;
        }

        // Hermite tangents for a non-uniform knot sequence, rescaled to [0, 1].
        let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

        let c2 = -3.0 * p1 + 3.0 * p2 - 2.0 * m1 - m2;
        let c3 = 2.0 * p1 - 2.0 * p2 + m1 + m2;
        p1 + m1 * w + c2 * (w * w) + c3 * (w * w * w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn bezier_hits_end_points() {
        let c = CubicBezier::new(square());
        assert!(c.position(0.0).distance(square()[0]) < 1e-6);
        assert!(c.position(1.0).distance(square()[3]) < 1e-6);
        assert!(c.position(0.5).distance(Vec3::new(0.75, 0.5, 0.0)) < 1e-6);
    }

    #[test]
    fn bezier_tangent_survives_coincident_controls() {
        let p = Vec3::new(3.0, 4.0, 0.0);
        let c = CubicBezier::new([Vec3::ZERO, p, p, p]);
        let t = c.tangent(1.0);
        assert!((t.length() - 1.0).abs() < 1e-4);
        assert!(t.dot(p.normalize()) > 0.99);
    }

    #[test]
    fn catmull_rom_passes_through_every_point() {
        let c = CatmullRom::new(square());
        for (i, p) in square().iter().enumerate() {
            let t = i as f32 / 3.0;
            assert!(c.position(t).distance(*p) < 1e-5, "point {i}");
        }
    }

    #[test]
    fn catmull_rom_spaces_knots_by_root_distance() {
        let c = CatmullRom::new([
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
        ]);
        // A quarter into the long middle span; uniform spacing gives 1.859375.
        let p = c.position(1.25 / 3.0);
        assert!((p.x - 1.875).abs() < 1e-4, "{p}");
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn catmull_rom_handles_repeated_points() {
        let a = Vec3::new(800.0, 0.0, -1.0);
        let b = Vec3::new(-400.0, 692.8, -1.0);
        let c = CatmullRom::new([a, b, b, a]);
        for p in c.sample(30) {
            assert!(p.is_finite());
        }
        assert!(c.position(1.0 / 3.0).distance(b) < 1e-2);
        assert!(c.position(1.0).distance(a) < 1e-2);
    }

    #[test]
    fn sample_includes_both_ends() {
        let c = CatmullRom::new(square());
        let pts = c.sample(12);
        assert_eq!(pts.len(), 13);
        assert!(pts[12].distance(square()[3]) < 1e-5);
    }
}
