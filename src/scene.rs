pub mod object;

use derive_builder::Builder;
use indicatif::ParallelProgressIterator;
use object::{Intersectable, Primitive};
use rayon::prelude::*;

use crate::render::{intersection::IntersectionValues, ray::Ray};

/// Nearest intersection of a ray among the scene's primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the primitive in [`Scene::primitives`]
    pub primitive: usize,
    pub values: IntersectionValues,
}

/// Flat list of primitives queried for the closest hit.
#[derive(PartialEq, Debug, Clone, Default, Builder)]
#[builder(default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl SceneBuilder {
    pub fn primitive(&mut self, primitive: impl Into<Primitive>) -> &mut Self {
        self.primitives
            .get_or_insert_with(Vec::new)
            .push(primitive.into());
        self
    }
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Smallest finite `t_w` over all primitives; ties keep the earlier primitive.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit> {
        self.primitives
            .iter()
            .enumerate()
            .fold(None, |closest: Option<Hit>, (id, primitive)| {
                let values = primitive.intersect_ray(ray);
                match closest {
                    Some(hit) if !values.is_closer_than(&hit.values) => Some(hit),
                    _ => values.hit().map(|values| Hit {
                        primitive: id,
                        values,
                    }),
                }
            })
    }

    /// Closest hit of every ray, evaluated in parallel, in input order.
    pub fn closest_hits(&self, rays: &[Ray]) -> Vec<Option<Hit>> {
        log::debug!(
            "intersecting {} rays with {} primitives",
            rays.len(),
            self.primitives.len()
        );
        rays.par_iter().map(|ray| self.closest_hit(ray)).collect()
    }

    pub fn closest_hits_with_progress(
        &self,
        rays: &[Ray],
        progressbar: indicatif::ProgressBar,
    ) -> Vec<Option<Hit>> {
        let hits: Vec<Option<Hit>> = rays
            .par_iter()
            .progress_with(progressbar)
            .map(|ray| self.closest_hit(ray))
            .collect();
        log::info!(
            "{} of {} rays hit the scene",
            hits.iter().flatten().count(),
            rays.len()
        );
        hits
    }
}
