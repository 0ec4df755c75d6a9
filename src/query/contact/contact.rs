use core::mem;

use na::Unit;

use crate::math::{self, Point, Real, Vector};
use crate::query::mpr;
use crate::query::{closest_points, gjk, ClosestPoints, QueryError, QueryOptions};
use crate::shape::SupportMap;
use crate::utils::VectorOps;

/// Geometric description of a contact.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    /// Are the shapes penetrating each other? Touching shapes are not.
    pub colliding: bool,

    /// Position of the contact on the first object.
    pub point1: Point<Real>,

    /// Position of the contact on the second object.
    pub point2: Point<Real>,

    /// Contact normal, pointing from the first shape toward the second one.
    ///
    /// This is an outward normal, i.e., it points towards the exterior of the first shape.
    pub normal1: Unit<Vector<Real>>,

    /// Signed distance between the two shapes.
    ///
    /// If this is negative, this contact represents a penetration.
    pub dist: Real,

    /// The smallest translation of the first shape that separates it from the second one.
    ///
    /// Only set if the shapes are colliding.
    pub mtv: Option<Vector<Real>>,
}

impl Contact {
    /// Swaps the points and normals of this contact.
    #[inline]
    pub fn flip(&mut self) {
        mem::swap(&mut self.point1, &mut self.point2);
        self.normal1 = -self.normal1;
        self.mtv = self.mtv.map(|t| -t);
    }

    /// Returns a new contact containing the swapped points and normals of `self`.
    #[inline]
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}

/// Computes the contact between two convex shapes, penetrating or not.
///
/// The GJK test decides whether the shapes collide. Colliding shapes are then separated with the
/// MPR portal and the minimum translation vector, while the others go through the closest
/// points computation.
pub fn collide<G1, G2>(g1: &G1, g2: &G2, options: &QueryOptions) -> Result<Contact, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let fallback_normal = (g2.center() - g1.center()).unit_or(-math::up());

    if gjk::intersection_test(g1, g2, options)? {
        let portal = mpr::mpr(g1, g2, options)?;

        if portal.intersecting {
            let res = mpr::mtv(g1, g2, &portal.portal, options)?;

            if let (Some(translation), Some([point1, point2])) = (res.translation, res.points) {
                let depth = translation.norm();

                return Ok(Contact {
                    colliding: true,
                    point1,
                    point2,
                    normal1: (-translation).unit_or(fallback_normal),
                    dist: -depth,
                    mtv: Some(translation),
                });
            }
        }
    }

    // Both algorithms disagreeing only happens on the boundary of the Minkowski difference:
    // treat the shapes as separated, hence touching.
    match closest_points(g1, g2, options)? {
        ClosestPoints::WithinDistance {
            point1,
            point2,
            distance,
            ..
        } => Ok(Contact {
            colliding: false,
            point1,
            point2,
            normal1: (point2 - point1).unit_or(fallback_normal),
            dist: distance,
            mtv: None,
        }),
        ClosestPoints::Intersecting => {
            let center1 = g1.center();
            let center2 = g2.center();
            Ok(Contact {
                colliding: false,
                point1: center1,
                point2: center2,
                normal1: fallback_normal,
                dist: 0.0,
                mtv: None,
            })
        }
    }
}
