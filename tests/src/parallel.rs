#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand_pcg::Pcg32;
    use rayon::prelude::*;

    use hikari::{
        hit_distance, intersect_geometry, mix_hash,
        math::{point3, transforms, vec3, Ray, Transform},
        Geometry, GeometryHit, GeometryKind, Mesh, PrimitiveData,
    };

    use crate::common::{quad, unit_vec};

    const RAY_COUNT: u32 = 20_000;
    const SEED: u32 = 0x1234_5678;

    fn scene() -> (Vec<Geometry>, Vec<Mesh>, PrimitiveData) {
        let mut data = PrimitiveData::new();
        let meshes = vec![data.add_mesh(vec![quad(0.0, 0), quad(0.25, 1)])];
        let geometry = vec![
            Geometry::new(
                GeometryKind::Cube,
                &transforms::translation(vec3(-1.0, 0.0, 0.0)),
            ),
            Geometry::new(
                GeometryKind::Sphere,
                &(&transforms::translation(vec3(1.0, 0.0, 0.0))
                    * &transforms::scale(1.0, 2.0, 0.5)),
            ),
            Geometry::new(GeometryKind::Mesh(0), &Transform::default()),
        ];
        (geometry, meshes, data)
    }

    /// Each ray owns a random stream seeded from its index so evaluation order can't leak
    /// into the rays themselves.
    fn ray(index: u32) -> Ray<f32> {
        let mut rng = Pcg32::new(mix_hash(index ^ SEED) as u64, 0);
        let o = point3(
            rng.gen_range(-3.0f32..3.0),
            rng.gen_range(-3.0f32..3.0),
            rng.gen_range(-3.0f32..3.0),
        );
        Ray::new(o, unit_vec(&mut rng))
    }

    fn closest(
        geometry: &[Geometry],
        meshes: &[Mesh],
        data: &PrimitiveData,
        ray: Ray<f32>,
    ) -> Option<GeometryHit> {
        geometry
            .iter()
            .filter_map(|g| intersect_geometry(g, meshes, data, ray))
            .fold(None, |best: Option<GeometryHit>, hit| match best {
                Some(b) if hit_distance(Some(&b)) <= hit_distance(Some(&hit)) => Some(b),
                _ => Some(hit),
            })
    }

    #[test]
    fn matches_sequential() {
        let (geometry, meshes, data) = scene();

        let sequential: Vec<_> = (0..RAY_COUNT)
            .map(|i| closest(&geometry, &meshes, &data, ray(i)))
            .collect();
        let parallel: Vec<_> = (0..RAY_COUNT)
            .into_par_iter()
            .map(|i| closest(&geometry, &meshes, &data, ray(i)))
            .collect();

        assert!(sequential.iter().any(Option::is_some));
        for (s, p) in sequential.iter().zip(&parallel) {
            assert_eq!(
                hit_distance(s.as_ref()).to_bits(),
                hit_distance(p.as_ref()).to_bits()
            );
            assert_eq!(s, p);
        }
    }
}
