#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use hikari::math::{
        transform_point, transform_vector, transforms, Bounds3, Matrix4x4, Normal, Point3, Ray,
        Transform, Vec3,
    };

    // These are by no means exhaustive. We throw some simple cases at the implementation
    // to catch obvious typos

    fn md() -> [[f32; 4]; 4] {
        [
            [16.0, 11.0, 6.0, 13.0],
            [12.0, 15.0, 10.0, 9.0],
            [8.0, 7.0, 14.0, 5.0],
            [4.0, 3.0, 2.0, 1.0],
        ]
    }

    #[test]
    fn new() {
        let m = Matrix4x4::new(md());
        let mi = m.inverted().unwrap();

        let t0 = Transform::new(md()).unwrap();
        let t1 = Transform::new_m(m).unwrap();
        let t2 = Transform::new_full(m, mi);
        assert_eq!(t0.m(), &m);
        assert_eq!(t0.m_inv(), &mi);
        assert_eq!(t0, t1);
        assert_eq!(t1, t2);

        let mut singular = md();
        singular[3] = [0.0; 4];
        assert!(Transform::new(singular).is_none());
    }

    #[test]
    fn default() {
        let t = Transform::default();
        let m = Matrix4x4::<f32>::identity();
        let ti = Transform::new_full(m, m);
        assert_eq!(t, ti);
    }

    #[test]
    fn inverted() {
        let t = Transform::new(md()).unwrap();
        let ti = t.inverted();
        assert_eq!(t.m(), ti.m_inv());
        assert_eq!(t.m_inv(), ti.m());
        assert_abs_diff_eq!(
            (&t * &ti).m(),
            &Matrix4x4::identity(),
            epsilon = 1e-5
        );
    }

    #[test]
    fn transposed() {
        let m = Matrix4x4::new(md());
        let t = Transform::new_m(m).unwrap().transposed();
        assert_eq!(t.m(), &m.transposed());
        assert_eq!(t.m_inv(), &m.inverted().unwrap().transposed());
    }

    #[test]
    fn mul() {
        let t = Transform::new(md()).unwrap();
        let mut tpd = md();
        tpd[3] = [0.0, 0.0, 0.0, 1.0];
        let tp = Transform::new(tpd).unwrap();

        let v = Vec3::new(17.0, 18.0, 19.0);
        assert_eq!(&t * v, Vec3::new(584.0, 664.0, 528.0));

        let p = Point3::new(17.0, 18.0, 19.0);
        assert_abs_diff_eq!(
            &t * p,
            Point3::new(597.0, 673.0, 533.0) / 161.0,
            epsilon = 1e-5
        );
        assert_eq!(&tp * p, Point3::new(597.0, 673.0, 533.0));

        let n = Normal::<f32>::new(17.0, 18.0, 19.0);
        assert_abs_diff_eq!(
            &t * n,
            Normal::new(-1.0694447, 0.5972222, 0.5972223),
            epsilon = 1e-5
        );

        let r = Ray::new(p, Vec3::new(20.0, 21.0, 22.0));
        assert_eq!(
            &tp * r,
            Ray::new(
                Point3::new(597.0, 673.0, 533.0),
                Vec3::new(683.0, 775.0, 615.0),
            )
        );

        let bb0 = Bounds3::new(Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0));
        let corners = [
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 2.0, 3.0),
            Point3::new(4.0, 5.0, 3.0),
            Point3::new(1.0, 5.0, 3.0),
            Point3::new(1.0, 2.0, 6.0),
            Point3::new(4.0, 2.0, 6.0),
            Point3::new(1.0, 5.0, 6.0),
            Point3::new(4.0, 5.0, 6.0),
        ];
        let mut bb1 = &tp * Bounds3::new(corners[0], corners[0]);
        for &c in &corners {
            bb1 = bb1.union_p(&tp * c);
        }
        assert_eq!(&tp * bb0, bb1);

        let ttpm = Transform::new_m(t.m() * tp.m()).unwrap();
        let ttpt = &t * &tp;
        assert_eq!(ttpm.m(), ttpt.m());
        assert_abs_diff_eq!(ttpm.m_inv(), ttpt.m_inv(), epsilon = 1e-4);
    }

    #[test]
    fn homogeneous_helpers() {
        // Projective last row, the helpers must not divide by w
        let m = Matrix4x4::new(md());
        let p = Point3::new(17.0, 18.0, 19.0);
        assert_eq!(transform_point(&m, p), Point3::new(597.0, 673.0, 533.0));

        // Directions ignore the translation column
        let t = transforms::translation(Vec3::new(1.0, 2.0, 3.0));
        let v = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(transform_vector(t.m(), v), v);
        assert_eq!(
            transform_point(t.m(), Point3::new(4.0, 5.0, 6.0)),
            Point3::new(5.0, 7.0, 9.0)
        );
    }

    #[test]
    fn translation() {
        let tm = Matrix4x4::new([
            [1.0, 0.0, 0.0, 2.0],
            [0.0, 1.0, 0.0, 3.0],
            [0.0, 0.0, 1.0, 4.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let tt = transforms::translation(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(tt.m(), &tm);
        assert_eq!(tt.m_inv(), &tm.inverted().unwrap());
    }

    #[test]
    fn scale() {
        let sm = Matrix4x4::new([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 8.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let st = transforms::scale(2.0, 4.0, 8.0);
        assert_eq!(st.m(), &sm);
        assert_eq!(st.m_inv(), &sm.inverted().unwrap());
    }

    #[test]
    fn rotation_x() {
        let rm = Matrix4x4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, -1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let rt = transforms::rotation_x(std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(rt.m(), &rm, epsilon = 1e-16);
        assert_abs_diff_eq!(rt.m_inv(), &rm.inverted().unwrap(), epsilon = 1e-16);
    }

    #[test]
    fn rotation_y() {
        let rm = Matrix4x4::new([
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let rt = transforms::rotation_y(std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(rt.m(), &rm, epsilon = 1e-16);
        assert_abs_diff_eq!(rt.m_inv(), &rm.inverted().unwrap(), epsilon = 1e-16);
    }

    #[test]
    fn rotation_z() {
        let rm = Matrix4x4::new([
            [0.0, -1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let rt = transforms::rotation_z(std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(rt.m(), &rm, epsilon = 1e-16);
        assert_abs_diff_eq!(rt.m_inv(), &rm.inverted().unwrap(), epsilon = 1e-16);
    }

    #[test]
    fn rotation() {
        // Quarter turn around z takes x to y and leaves the axis alone
        let rt = transforms::rotation(std::f32::consts::FRAC_PI_2, Vec3::new(0.0, 0.0, 3.0));
        assert_abs_diff_eq!(&rt * Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(&rt * Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);

        // Arbitrary axis stays fixed and lengths are kept
        let axis = Vec3::new(1.0, -2.0, 0.5);
        let rt = transforms::rotation(0.7f32, axis);
        assert_abs_diff_eq!(&rt * axis, axis, epsilon = 1e-5);
        let v = Vec3::new(0.3, 0.2, -4.0);
        assert_abs_diff_eq!((&rt * v).len(), v.len(), epsilon = 1e-5);
        assert_abs_diff_eq!((&rt * &rt.inverted()).m(), &Matrix4x4::identity(), epsilon = 1e-6);
    }

    #[test]
    fn rotation_euler() {
        let theta = Vec3::new(0.3f32, -0.5, 1.1);
        let expected = &transforms::rotation_x(theta.x)
            * &(&transforms::rotation_y(theta.y) * &transforms::rotation_z(theta.z));
        assert_eq!(transforms::rotation_euler(theta), expected);
    }
}
