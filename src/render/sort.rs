//! Painter's algorithm ordering.

use crate::scene::{NodeId, Scene};

/// Leaves below `root` in paint order: siblings are visited far to near
/// (ascending transformed centroid z) and sub-groups are flattened in
/// place. Ties keep child order; empty groups contribute nothing.
pub(crate) fn paint_list(scene: &Scene, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect(scene, root, &mut out);
    out
}

fn collect(scene: &Scene, id: NodeId, out: &mut Vec<NodeId>) {
    let node = scene.node(id);
    let Some(group) = node.as_group() else {
        out.push(id);
        return;
    };
    let mut children = group.children().to_vec();
    children.sort_by(|a, b| {
        let za = scene.node(*a).centroid().transformed.z;
        let zb = scene.node(*b).centroid().transformed.z;
        za.total_cmp(&zb)
    });
    for child in children {
        collect(scene, child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::shapes;

    fn square_at(scene: &mut Scene, z: f64) -> NodeId {
        let id = scene.compile_shape(&shapes::square(1.0), None, None);
        scene.translate(id, 0.0, 0.0, z);
        id
    }

    #[test]
    fn far_to_near() {
        let mut scene = Scene::new();
        let a = square_at(&mut scene, 5.0);
        let b = square_at(&mut scene, -2.0);
        let c = square_at(&mut scene, 10.0);
        let g = scene.create_group(&[a, b, c]);
        assert_eq!(paint_list(&scene, g), [b, a, c]);
        // sorting leaves the children alone
        assert_eq!(scene.children(g), [a, b, c]);
    }

    #[test]
    fn groups_sort_as_units() {
        let mut scene = Scene::new();
        let near1 = square_at(&mut scene, 9.0);
        let near2 = square_at(&mut scene, 11.0);
        let near = scene.create_group(&[near2, near1]);
        let far = square_at(&mut scene, -5.0);
        let empty = scene.create_group(&[]);
        let root = scene.create_group(&[near, empty, far]);
        assert_eq!(paint_list(&scene, root), [far, near1, near2]);
    }

    #[test]
    fn ties_keep_child_order() {
        let mut scene = Scene::new();
        let a = square_at(&mut scene, 0.0);
        let b = square_at(&mut scene, 0.0);
        let g = scene.create_group(&[b, a]);
        assert_eq!(paint_list(&scene, g), [b, a]);
    }

    #[test]
    fn single_leaf_root() {
        let mut scene = Scene::new();
        let a = square_at(&mut scene, 0.0);
        assert_eq!(paint_list(&scene, a), [a]);
    }
}
