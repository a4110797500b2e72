use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pickview::bounds::{AxisAlignedBoundingBox, BoundingSphere, BoundingVolume};
use pickview::math::{Mat4, Point3, Vec3};
use pickview::picking::Ray;
use pickview::scene::primitives::uv_sphere;

fn matrices() -> (Mat4, Mat4) {
    let transform = Mat4::from_translation(Vec3::new(0.0, 1.5, 0.0))
        * Mat4::from_rotation_y(35.0)
        * Mat4::from_scale(0.5);
    let view = Mat4::from_translation(Vec3::new(0.0, -1.5, -6.0));
    (view * transform, transform)
}

fn box_recalculate_benchmark(c: &mut Criterion) {
    let (modelview, transform) = matrices();
    let mut group = c.benchmark_group("box_recalculate");

    for stacks in [8, 32, 128] {
        let mesh = uv_sphere(stacks, stacks * 2).expect("built-in sphere mesh");
        let mut aabb = AxisAlignedBoundingBox::default();
        group.bench_function(format!("{}_vertices", mesh.vertex_count()), |b| {
            b.iter(|| {
                aabb.recalculate(black_box(&mesh), &modelview, &transform);
            });
        });
    }
    group.finish();
}

fn ray_test_benchmark(c: &mut Criterion) {
    let (modelview, transform) = matrices();
    let mesh = uv_sphere(16, 16).expect("built-in sphere mesh");
    let mut aabb = AxisAlignedBoundingBox::default();
    aabb.recalculate(&mesh, &modelview, &transform);
    let mut sphere = BoundingSphere::default();
    sphere.recalculate(&mesh, &modelview, &transform);
    let ray = Ray::new(Point3::new(0.0, 1.5, 6.0), Point3::new(0.1, 1.4, 0.0));

    c.bench_function("box_ray_test", |b| {
        b.iter(|| black_box(aabb.intersects(black_box(&ray))));
    });
    c.bench_function("sphere_ray_test", |b| {
        b.iter(|| black_box(sphere.intersects(black_box(&ray))));
    });
}

criterion_group!(benches, box_recalculate_benchmark, ray_test_benchmark);
criterion_main!(benches);
