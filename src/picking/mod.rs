//! Ray picking against model bounding volumes.
//!
//! A click is turned into a world-space ray through the near and far
//! planes (see [`Viewport::pick_ray`](crate::camera::Viewport::pick_ray))
//! and tested against each model's bounding volume in scene order.

mod ray;

pub use ray::Ray;

use crate::bounds::BoundingVolume;

/// Index of the first volume the ray hits, in iteration order.
pub fn first_hit<'a, I>(volumes: I, ray: &Ray) -> Option<usize>
where
    I: IntoIterator<Item = &'a dyn BoundingVolume>,
{
    volumes.into_iter().position(|volume| volume.intersects(ray))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoundingSphere;
    use crate::math::Point3;

    #[test]
    fn first_hit_respects_order() {
        let behind = BoundingSphere::new(Point3::new(0.0, 0.0, 5.0), 1.0);
        let near = BoundingSphere::new(Point3::new(0.0, 0.0, -3.0), 1.0);
        let far = BoundingSphere::new(Point3::new(0.0, 0.0, -8.0), 1.0);
        let ray = Ray::new(Point3::ORIGIN, Point3::new(0.0, 0.0, -1.0));

        let volumes: [&dyn BoundingVolume; 3] = [&behind, &far, &near];
        assert_eq!(first_hit(volumes, &ray), Some(1));

        let misses: [&dyn BoundingVolume; 1] = [&behind];
        assert_eq!(first_hit(misses, &ray), None);
    }
}
