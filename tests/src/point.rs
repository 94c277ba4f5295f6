#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use hikari::math::{point3, vec3, Point3};

    #[test]
    fn new() {
        let p = Point3::new(0.0f32, 1.0, 2.0);
        assert_eq!((p.x, p.y, p.z), (0.0, 1.0, 2.0));
        assert_eq!(point3(0.0, 1.0, 2.0), p);
        assert_eq!(Point3::<f32>::default(), Point3::zeros());
    }

    #[test]
    fn ops() {
        let p = point3(1.0f32, 2.0, 3.0);
        let q = point3(2.0f32, 4.0, 8.0);
        let v = vec3(1.0f32, 1.0, -1.0);
        assert_eq!(p + v, point3(2.0, 3.0, 2.0));
        assert_eq!(p - v, point3(0.0, 1.0, 4.0));
        assert_eq!(q - p, vec3(1.0, 2.0, 5.0));
        // Weighted sums of points
        assert_eq!(p * 0.5 + q * 0.5, point3(1.5, 3.0, 5.5));

        let mut r = p;
        r += v;
        assert_eq!(r, point3(2.0, 3.0, 2.0));
        r -= v;
        assert_eq!(r, p);
    }

    #[test]
    fn dist() {
        let p = point3(1.0f32, 2.0, 3.0);
        let q = point3(1.0f32, 5.0, 7.0);
        assert_abs_diff_eq!(p.dist(q), 5.0);
    }

    #[test]
    fn min_max() {
        let p = point3(1.0f32, 6.0, 3.0);
        let q = point3(2.0f32, 5.0, 3.0);
        assert_eq!(p.min(q), point3(1.0, 5.0, 3.0));
        assert_eq!(p.max(q), point3(2.0, 6.0, 3.0));
    }

    #[test]
    fn from() {
        assert_eq!(Point3::from(vec3(1.0f32, 2.0, 3.0)), point3(1.0, 2.0, 3.0));
    }
}
