//! [BSP](https://en.wikipedia.org/wiki/Binary_space_partitioning) tree node structure and operations

use crate::float_types::Real;
use crate::solid::plane::{BACK, COPLANAR, FRONT, Plane};
use crate::solid::polygon::Polygon;

/// A BSP tree node, containing polygons plus optional front/back subtrees
#[derive(Debug, Clone)]
pub struct Node {
    /// Splitting plane for this node *or* **None** for a leaf that
    /// only stores polygons.
    pub plane: Option<Plane>,

    /// Polygons in *front* half-spaces.
    pub front: Option<Box<Node>>,

    /// Polygons in *back* half-spaces.
    pub back: Option<Box<Node>>,

    /// Polygons that lie *exactly* on `plane`
    /// (after the node has been built).
    pub polygons: Vec<Polygon>,
}

impl Node {
    /// Create a new empty BSP node
    pub const fn new() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }

    /// Creates a new BSP node from polygons
    pub fn from_polygons(polygons: &[Polygon]) -> Self {
        let mut node = Self::new();
        if !polygons.is_empty() {
            node.build(polygons);
        }
        node
    }

    /// Invert all polygons in the BSP tree, turning the solid inside-out
    pub fn invert(&mut self) {
        self.polygons.iter_mut().for_each(|p| p.flip());
        if let Some(ref mut plane) = self.plane {
            plane.flip();
        }

        if let Some(ref mut front) = self.front {
            front.invert();
        }
        if let Some(ref mut back) = self.back {
            back.invert();
        }

        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Choose a splitting plane from a sample of candidate polygon planes,
    /// scoring each by spanning count and front/back imbalance.
    pub fn pick_best_splitting_plane(&self, polygons: &[Polygon]) -> Plane {
        const K_SPANS: Real = 8.0; // Weight for spanning polygons
        const K_BALANCE: Real = 1.0; // Weight for front/back balance

        let mut best_plane = polygons[0].plane.clone();
        let mut best_score = Real::MAX;

        let sample_size = polygons.len().min(20);
        polygons.iter().take(sample_size).for_each(|p| {
            let plane = &p.plane;
            let mut num_front = 0;
            let mut num_back = 0;
            let mut num_spanning = 0;

            polygons.iter().for_each(|poly| {
                match plane.classify_polygon(poly) {
                    COPLANAR => {}, // Not counted for balance
                    FRONT => num_front += 1,
                    BACK => num_back += 1,
                    _ => num_spanning += 1,
                }
            });

            let score = K_SPANS * num_spanning as Real
                + K_BALANCE * ((num_front - num_back) as Real).abs();

            if score < best_score {
                best_score = score;
                best_plane = plane.clone();
            }
        });
        best_plane
    }

    /// Remove all polygons in `polygons` that are inside this BSP tree.
    /// Iterative with an explicit stack, so deep trees cannot overflow.
    pub fn clip_polygons(&self, polygons: &[Polygon]) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack = vec![(self, polygons.to_vec())];

        while let Some((node, polys)) = stack.pop() {
            let Some(plane) = node.plane.as_ref() else {
                result.extend(polys);
                continue;
            };

            let mut front_polys = Vec::with_capacity(polys.len());
            let mut back_polys = Vec::with_capacity(polys.len());

            polys.iter().for_each(|polygon| {
                let (coplanar_front, coplanar_back, mut front_parts, mut back_parts) =
                    plane.split_polygon(polygon);

                coplanar_front
                    .into_iter()
                    .chain(coplanar_back)
                    .for_each(|coplanar_poly| {
                        if plane.orient_plane(&coplanar_poly.plane) == FRONT {
                            front_parts.push(coplanar_poly);
                        } else {
                            back_parts.push(coplanar_poly);
                        }
                    });

                front_polys.append(&mut front_parts);
                back_polys.append(&mut back_parts);
            });

            if let Some(front_node) = &node.front {
                if !front_polys.is_empty() {
                    stack.push((front_node, front_polys));
                }
            } else {
                result.extend(front_polys);
            }

            // Polygons behind a leaf plane are inside the solid and dropped
            if let Some(back_node) = &node.back {
                if !back_polys.is_empty() {
                    stack.push((back_node, back_polys));
                }
            }
        }
        result
    }

    /// Remove all polygons in this BSP tree that are inside the other BSP tree
    pub fn clip_to(&mut self, bsp: &Node) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            node.polygons = bsp.clip_polygons(&node.polygons);
            if let Some(front) = node.front.as_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_mut() {
                stack.push(back);
            }
        }
    }

    /// Return all polygons in this BSP tree using an iterative approach,
    /// avoiding potential stack overflow of recursive approach
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            result.extend_from_slice(&node.polygons);

            stack.extend(
                [&node.front, &node.back]
                    .iter()
                    .filter_map(|child| child.as_ref().map(|boxed| boxed.as_ref())),
            );
        }
        result
    }

    /// Build a BSP tree from the given polygons
    pub fn build(&mut self, polygons: &[Polygon]) {
        if polygons.is_empty() {
            return;
        }

        let mut stack = vec![(self, polygons.to_vec())];

        while let Some((node, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }

            if node.plane.is_none() {
                node.plane = Some(node.pick_best_splitting_plane(&polys));
            }
            let plane = node.plane.as_ref().unwrap();

            let mut front = Vec::with_capacity(polys.len() / 2);
            let mut back = Vec::with_capacity(polys.len() / 2);

            polys.iter().for_each(|polygon| {
                let (coplanar_front, coplanar_back, mut front_parts, mut back_parts) =
                    plane.split_polygon(polygon);

                node.polygons.extend(coplanar_front);
                node.polygons.extend(coplanar_back);
                front.append(&mut front_parts);
                back.append(&mut back_parts);
            });

            if !front.is_empty() {
                let front_node = node.front.get_or_insert_with(|| Box::new(Node::new()));
                stack.push((front_node, front));
            }

            if !back.is_empty() {
                let back_node = node.back.get_or_insert_with(|| Box::new(Node::new()));
                stack.push((back_node, back));
            }
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::solid::bsp::Node;
    use crate::solid::plane::{BACK, FRONT, Plane};
    use crate::solid::polygon::Polygon;
    use crate::solid::vertex::Vertex;
    use nalgebra::{Point3, Vector3};

    fn unit_triangle() -> Polygon {
        let vertices = vec![
            Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
            Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
            Vertex::new(Point3::new(0.5, 1.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
        ];
        Polygon::new(vertices)
    }

    #[test]
    fn build_retains_polygons() {
        let node = Node::from_polygons(&[unit_triangle()]);
        assert!(!node.all_polygons().is_empty());
    }

    #[test]
    fn invert_flips_polygon_planes() {
        let mut node = Node::from_polygons(&[unit_triangle()]);
        let before = node.all_polygons()[0].plane.normal();
        node.invert();
        let after = node.all_polygons()[0].plane.normal();
        assert!((before + after).norm() < 1e-12);
    }

    #[test]
    fn spanning_polygon_is_split() {
        // A vertical plane at x = 0.5 cuts the triangle into two pieces
        let plane = Plane::from_normal(Vector3::x(), 0.5);
        let (_, _, front, back) = plane.split_polygon(&unit_triangle());
        assert_eq!(front.len(), 1);
        assert_eq!(back.len(), 1);
        assert_eq!(plane.classify_polygon(&front[0]), FRONT);
        assert_eq!(plane.classify_polygon(&back[0]), BACK);
    }
}
