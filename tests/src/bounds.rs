#[cfg(test)]
mod tests {
    use hikari::math::{point3, vec3, Bounds3, Ray, Vec3};

    fn inv(d: Vec3<f32>) -> Vec3<f32> {
        vec3(1.0 / d.x, 1.0 / d.y, 1.0 / d.z)
    }

    #[test]
    fn new() {
        let bb = Bounds3::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
        assert_eq!(bb.p_min, point3(0.0, 0.0, 0.0));
        assert_eq!(bb.p_max, point3(1.0, 1.0, 1.0));
        let bb = Bounds3::new(point3(1.0, 0.0, 1.0), point3(0.0, 1.0, 0.0));
        assert_eq!(bb.p_min, point3(0.0, 0.0, 0.0));
        assert_eq!(bb.p_max, point3(1.0, 1.0, 1.0));
    }

    #[test]
    fn default() {
        let bb = Bounds3::<f32>::default();
        for i in 0..3 {
            assert_eq!(bb.p_max[i], f32::NEG_INFINITY);
            assert_eq!(bb.p_min[i], f32::INFINITY);
        }
        // Any point overrides the empty bounds
        let p = point3(1.0, -2.0, 3.0);
        assert_eq!(bb.union_p(p), Bounds3::new(p, p));
    }

    #[test]
    fn index() {
        let mut bb = Bounds3::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
        assert_eq!(bb[0], point3(0.0, 0.0, 0.0));
        assert_eq!(bb[1], point3(1.0, 1.0, 1.0));
        bb[0][0] = -2.0;
        bb[1][2] = 3.0;
        assert_eq!(bb.p_min, point3(-2.0, 0.0, 0.0));
        assert_eq!(bb.p_max, point3(1.0, 1.0, 3.0));
    }

    #[test]
    fn union() {
        let bb = Bounds3::new(point3(0.0, 1.0, 2.0), point3(3.0, 4.0, 5.0));
        assert_eq!(
            bb.union_p(point3(-1.0, 6.0, 3.0)),
            Bounds3::new(point3(-1.0, 1.0, 2.0), point3(3.0, 6.0, 5.0))
        );
        assert_eq!(
            bb.union_b(Bounds3::new(point3(1.0, -1.0, 1.0), point3(2.0, 2.0, 7.0))),
            Bounds3::new(point3(0.0, -1.0, 1.0), point3(3.0, 4.0, 7.0))
        );
    }

    #[test]
    fn inside() {
        let bb = Bounds3::new(point3(0.0, 1.0, 2.0), point3(3.0, 4.0, 5.0));
        assert!(bb.inside(point3(1.0, 2.0, 3.0)));
        assert!(bb.inside(point3(0.0, 4.0, 5.0)));
        assert!(!bb.inside(point3(-0.1, 2.0, 3.0)));
        assert!(!bb.inside(point3(1.0, 2.0, 5.1)));
    }

    #[test]
    fn diagonal() {
        let bb = Bounds3::new(point3(0.0, 1.0, 2.0), point3(3.0, 5.0, 7.0));
        assert_eq!(bb.diagonal(), vec3(3.0, 4.0, 5.0));
    }

    #[test]
    fn intersect_p() {
        let bb = Bounds3::new(point3(-1.0, -1.0, -1.0), point3(1.0, 1.0, 1.0));

        let d = vec3(0.0, 0.0, 1.0);
        assert!(bb.intersect_p(&Ray::new(point3(0.0, 0.0, -3.0), d), inv(d)));
        assert!(bb.intersect_p(&Ray::new(point3(0.0, 0.0, 0.0), d), inv(d)));
        assert!(!bb.intersect_p(&Ray::new(point3(0.0, 0.0, 3.0), d), inv(d)));
        assert!(!bb.intersect_p(&Ray::new(point3(2.0, 0.0, -3.0), d), inv(d)));

        // Diagonal through a corner region
        let d = vec3(1.0, 1.0, 1.0);
        assert!(bb.intersect_p(&Ray::new(point3(-3.0, -3.0, -3.0), d), inv(d)));
        assert!(!bb.intersect_p(&Ray::new(point3(-3.0, -3.0, 0.0), d), inv(d)));

        // Origin on a slab plane with a zero component gives a NaN slab that never rejects
        let d = vec3(0.0, 1.0, 0.0);
        assert!(bb.intersect_p(&Ray::new(point3(1.0, -3.0, 0.0), d), inv(d)));
    }
}
