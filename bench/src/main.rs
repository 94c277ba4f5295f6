mod macros;
mod scene;
mod settings;

use hikari::{
    hikari_info, hit_bounding_box, intersect_box, intersect_mesh, intersect_sphere, mix_hash,
    math::{point3, Ray, Vec3},
};
use log::LevelFilter;
use rand::Rng;
use rand_pcg::Pcg32;
use rayon::prelude::*;
use std::{path::PathBuf, time::Instant};

use scene::DemoScene;
use settings::BenchSettings;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn setup_logger(level: LevelFilter) -> std::result::Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("hikari.log")?)
        .apply()?;
    Ok(())
}

/// Rays from a shell around the scene, aimed into its middle so a good share of them hit.
///
/// Each ray draws from its own stream so the batch doesn't depend on the thread count.
fn generate_rays(count: u32, seed: u32) -> Vec<Ray<f32>> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = Pcg32::new(mix_hash(i ^ seed) as u64, 0);
            let mut point = |extent: f32| {
                point3(
                    rng.gen_range(-extent..extent),
                    rng.gen_range(-extent..extent),
                    rng.gen_range(-extent..extent),
                )
            };
            let target = point(2.0);
            let o = point3(0.0, 0.0, 0.0) + Vec3::from(point(1.0)).normalized() * 6.0;
            Ray::new(o, target - o)
        })
        .collect()
}

/// Runs `kernel` over `rays` in parallel and logs the hit count and throughput.
fn bench_kernel<F>(name: &str, rays: &[Ray<f32>], kernel: F)
where
    F: Fn(Ray<f32>) -> bool + Sync,
{
    let start = Instant::now();
    let hits = rays.par_iter().filter(|&&ray| kernel(ray)).count();
    let secs = start.elapsed().as_secs_f64();

    hikari_info!(
        "{:<8} {:>9} hits, {:7.2} ms, {:8.2} Mrays/s",
        name,
        hits,
        secs * 1e3,
        (rays.len() as f64) * 1e-6 / secs.max(f64::EPSILON)
    );
}

fn run(settings: &BenchSettings) -> Result<()> {
    let scene = DemoScene::new(settings.mesh_resolution)?;

    let start = Instant::now();
    let rays = generate_rays(settings.ray_count, settings.seed);
    hikari_info!(
        "Generated {} rays in {:.2} ms on {} threads",
        rays.len(),
        start.elapsed().as_secs_f64() * 1e3,
        rayon::current_num_threads()
    );

    let [cube, sphere, mesh_geom] = [0, 1, 2].map(|i| &scene.geometry[i]);
    let mesh = &scene.meshes[0];

    bench_kernel("box", &rays, |ray| intersect_box(cube, ray).is_some());
    bench_kernel("sphere", &rays, |ray| intersect_sphere(sphere, ray).is_some());
    bench_kernel("bounds", &rays, |ray| {
        let ray = (&mesh_geom.world_to_object * ray).normalized();
        scene.data.primitives[mesh.primitives()]
            .iter()
            .any(|prim| hit_bounding_box(&prim.bounds, &ray))
    });
    bench_kernel("mesh", &rays, |ray| {
        intersect_mesh(mesh_geom, mesh, &scene.data, ray).is_some()
    });
    bench_kernel("scene", &rays, |ray| scene.closest_hit(ray).is_some());

    Ok(())
}

fn main() {
    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = expect!(
        BenchSettings::load(settings_path.as_deref()),
        "Failed to load bench settings"
    );
    let level = expect!(
        settings.log_level.parse::<LevelFilter>(),
        "Invalid log level"
    );

    if let Err(why) = setup_logger(level) {
        panic!("{}", why);
    };

    hikari_info!(
        "Settings:\n{}",
        expect!(serde_yaml::to_string(&settings), "Failed to serialize settings")
    );

    expect!(run(&settings), "Bench failed");
}
