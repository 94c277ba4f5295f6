#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use hikari::math::{normal, vec3, Normal};

    #[test]
    fn new() {
        let n = Normal::new(0.0f32, 1.0, 2.0);
        assert_eq!((n.x, n.y, n.z), (0.0, 1.0, 2.0));
        assert_eq!(normal(0.0, 1.0, 2.0), n);
    }

    #[test]
    fn ops() {
        let a = normal(1.0f32, 2.0, 3.0);
        let b = normal(1.0f32, 1.0, 1.0);
        assert_eq!(a + b, normal(2.0, 3.0, 4.0));
        assert_eq!(a - b, normal(0.0, 1.0, 2.0));
        assert_eq!(-a, normal(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, normal(2.0, 4.0, 6.0));
    }

    #[test]
    fn members() {
        let n = normal(3.0f32, 0.0, 4.0);
        assert_eq!(n.len(), 5.0);
        assert_abs_diff_eq!(n.normalized(), normal(0.6, 0.0, 0.8));
        assert_eq!(n.dot_v(vec3(1.0, 1.0, 1.0)), 7.0);
        assert_eq!(n.dot(normal(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn from() {
        assert_eq!(Normal::from(vec3(1.0f32, 2.0, 3.0)), normal(1.0, 2.0, 3.0));
    }
}
