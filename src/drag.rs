//! Pointer picking and drag state machine.
//!
//! The host feeds pointer events to the [`Renderer`](crate::Renderer), which
//! forwards them here with the cursor already converted to world
//! coordinates. Hit testing runs against the leaves registered during the
//! last paint, so what can be grabbed is exactly what was drawn.

use std::fmt;
use std::rc::Rc;

use glam::{DVec2, DVec3};
use kurbo::Shape;

use crate::log::{debug, trace};
use crate::render::surface::bez_path;
use crate::scene::{NodeId, Scene};

/// Callback invoked on grab, drag or drop.
pub type DragHandler = Rc<dyn Fn(&mut Scene, &DragEvent)>;

/// Handlers attached to a draggable node. Missing handlers are skipped.
#[derive(Clone, Default)]
pub struct DragCallbacks {
    on_grab: Option<DragHandler>,
    on_drag: Option<DragHandler>,
    on_drop: Option<DragHandler>,
}

impl DragCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_grab(mut self, f: impl Fn(&mut Scene, &DragEvent) + 'static) -> Self {
        self.on_grab = Some(Rc::new(f));
        self
    }

    pub fn on_drag(mut self, f: impl Fn(&mut Scene, &DragEvent) + 'static) -> Self {
        self.on_drag = Some(Rc::new(f));
        self
    }

    pub fn on_drop(mut self, f: impl Fn(&mut Scene, &DragEvent) + 'static) -> Self {
        self.on_drop = Some(Rc::new(f));
        self
    }
}

impl fmt::Debug for DragCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragCallbacks")
            .field("on_grab", &self.on_grab.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .field("on_drop", &self.on_drop.is_some())
            .finish()
    }
}

/// A leaf's drag binding: the callbacks and the node they move.
#[derive(Debug, Clone)]
pub struct DragBinding {
    callbacks: DragCallbacks,
    target: NodeId,
}

impl DragBinding {
    pub(crate) fn new(callbacks: DragCallbacks, target: NodeId) -> Self {
        DragBinding { callbacks, target }
    }

    /// The node moved by the drag: the leaf itself or the group that
    /// enabled dragging.
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn callbacks(&self) -> &DragCallbacks {
        &self.callbacks
    }
}

/// Cursor and origin data handed to drag callbacks, all in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    /// Node being dragged
    pub target: NodeId,
    /// The leaf that was hit
    pub hit: NodeId,
    /// Cursor at pointer-down
    pub grab_cursor: DVec2,
    /// Current cursor
    pub cursor: DVec2,
    /// Target drawing origin at pointer-down
    pub drawing_origin: DVec3,
    /// Target drawing origin relative to its parent's
    pub origin_offset: DVec3,
    /// `grab_cursor` minus `origin_offset`
    pub grab_offset: DVec2,
}

impl DragEvent {
    /// Where the target's offset should put it so the grabbed point
    /// follows the cursor.
    pub fn follow(&self) -> DVec2 {
        self.cursor - self.grab_offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is down on a draggable, not moved yet
    Grabbed,
    Dragging,
}

/// Picking state carried between frames.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    draggables: Vec<NodeId>,
    /// Roots rendered since the last clear
    roots: Vec<NodeId>,
    active: Option<(DragCallbacks, DragEvent)>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Leaves registered by the last paint, in paint order.
    pub fn draggables(&self) -> &[NodeId] {
        &self.draggables
    }

    pub(crate) fn clear(&mut self) {
        self.draggables.clear();
        self.roots.clear();
    }

    pub(crate) fn register(&mut self, root: NodeId, leaf: NodeId) {
        if !self.roots.contains(&root) {
            self.roots.push(root);
        }
        self.draggables.push(leaf);
    }

    /// Topmost painted leaf under `cursor` that is still draggable.
    pub fn hit_test(&self, scene: &Scene, cursor: DVec2) -> Option<NodeId> {
        let pt = kurbo::Point::new(cursor.x, cursor.y);
        self.draggables.iter().rev().copied().find(|&id| {
            let Some(leaf) = scene.get(id).and_then(|n| n.as_leaf()) else {
                return false;
            };
            if leaf.drag().is_none() {
                return false;
            }
            // detached since it was painted
            if !self.roots.iter().any(|&root| scene.is_ancestor_or_self(root, id)) {
                return false;
            }
            let outline = leaf.text().map_or(leaf.primitives(), |t| t.bbox());
            bez_path(outline, true, |p| kurbo::Point::new(p.x, p.y)).contains(pt)
        })
    }

    /// Start a drag if `cursor` is over a draggable. Returns whether
    /// something was grabbed.
    pub fn pointer_down(&mut self, scene: &mut Scene, cursor: DVec2) -> bool {
        if self.state != DragState::Idle {
            self.cancel(scene);
        }
        let Some(hit) = self.hit_test(scene, cursor) else {
            trace!(?cursor, "pointer down missed");
            return false;
        };
        let Some(binding) = scene.leaf(hit).and_then(|l| l.drag()).cloned() else {
            return false;
        };
        let target = binding.target();
        let drawing_origin = scene.drawing_origin(target);
        let origin_offset = match scene.parent(target) {
            Some(parent) => drawing_origin - scene.drawing_origin(parent),
            None => drawing_origin,
        };
        let event = DragEvent {
            target,
            hit,
            grab_cursor: cursor,
            cursor,
            drawing_origin,
            origin_offset,
            grab_offset: cursor - origin_offset.truncate(),
        };
        debug!(%hit, %target, "grabbed");
        self.state = DragState::Grabbed;
        let handler = binding.callbacks.on_grab.clone();
        self.active = Some((binding.callbacks, event));
        if let Some(f) = handler {
            f(scene, &event);
        }
        true
    }

    pub fn pointer_move(&mut self, scene: &mut Scene, cursor: DVec2) {
        let Some((callbacks, event)) = self.active.as_mut() else {
            return;
        };
        if self.state == DragState::Grabbed {
            debug!(target = %event.target, "dragging");
            self.state = DragState::Dragging;
        }
        event.cursor = cursor;
        let event = *event;
        if let Some(f) = callbacks.on_drag.clone() {
            f(scene, &event);
        }
    }

    pub fn pointer_up(&mut self, scene: &mut Scene, cursor: DVec2) {
        if let Some((_, event)) = self.active.as_mut() {
            event.cursor = cursor;
        }
        self.cancel(scene);
    }

    pub fn pointer_leave(&mut self, scene: &mut Scene) {
        self.cancel(scene);
    }

    /// Return to idle, calling `on_drop` if a drag was in progress.
    pub fn cancel(&mut self, scene: &mut Scene) {
        self.state = DragState::Idle;
        let Some((callbacks, event)) = self.active.take() else {
            return;
        };
        debug!(target = %event.target, "dropped");
        if let Some(f) = callbacks.on_drop {
            f(scene, &event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::path::shapes;

    /// A square 2 units across whose projected points equal its original
    /// ones, registered as painted.
    fn painted_square(scene: &mut Scene, ctl: &mut DragController, at: DVec2) -> NodeId {
        let id = scene.compile_shape(&shapes::square(2.0), None, None);
        scene.translate(id, at.x, at.y, 0.0);
        if let Some(leaf) = scene.leaf_mut(id) {
            for prim in &mut leaf.prims {
                for p in prim.points_mut() {
                    p.projected = p.original.truncate();
                }
            }
        }
        ctl.register(id, id);
        id
    }

    fn recorder(log: &Rc<RefCell<Vec<String>>>, tag: &'static str) -> impl Fn(&mut Scene, &DragEvent) + 'static {
        let log = log.clone();
        move |_, ev| log.borrow_mut().push(format!("{tag} {} {}", ev.cursor.x, ev.cursor.y))
    }

    // ========================================================================
    // Hit testing
    // ========================================================================

    #[test]
    fn last_painted_wins() {
        let mut scene = Scene::new();
        let mut ctl = DragController::new();
        let below = painted_square(&mut scene, &mut ctl, DVec2::ZERO);
        let above = painted_square(&mut scene, &mut ctl, DVec2::new(1.0, 0.0));
        scene.enable_drag(below, DragCallbacks::new());
        scene.enable_drag(above, DragCallbacks::new());

        assert_eq!(ctl.hit_test(&scene, DVec2::new(0.5, 0.0)), Some(above));
        assert_eq!(ctl.hit_test(&scene, DVec2::new(-0.5, 0.0)), Some(below));
        assert_eq!(ctl.hit_test(&scene, DVec2::new(5.0, 0.0)), None);
    }

    #[test]
    fn detached_leaves_are_not_hit() {
        let mut scene = Scene::new();
        let mut ctl = DragController::new();
        let a = scene.compile_shape(&shapes::square(2.0), None, None);
        let b = painted_square(&mut scene, &mut ctl, DVec2::new(5.0, 0.0));
        let g = scene.create_group(&[a, b]);
        // repaint both under the group
        ctl.clear();
        for id in [a, b] {
            if let Some(leaf) = scene.leaf_mut(id) {
                for prim in &mut leaf.prims {
                    for p in prim.points_mut() {
                        p.projected = p.original.truncate();
                    }
                }
            }
            ctl.register(g, id);
        }
        scene.enable_drag(g, DragCallbacks::new());
        assert_eq!(ctl.hit_test(&scene, DVec2::ZERO), Some(a));

        scene.delete_child(g, a);
        assert_eq!(ctl.hit_test(&scene, DVec2::ZERO), None);
        assert!(!ctl.pointer_down(&mut scene, DVec2::ZERO));
        assert_eq!(ctl.hit_test(&scene, DVec2::new(5.0, 0.0)), Some(b));
    }

    #[test]
    fn disabled_leaves_are_not_hit() {
        let mut scene = Scene::new();
        let mut ctl = DragController::new();
        let a = painted_square(&mut scene, &mut ctl, DVec2::ZERO);
        scene.enable_drag(a, DragCallbacks::new());
        scene.disable_drag(a);
        assert!(!ctl.pointer_down(&mut scene, DVec2::ZERO));
        assert_eq!(ctl.state(), DragState::Idle);
    }

    // ========================================================================
    // State machine
    // ========================================================================

    #[test]
    fn grab_drag_drop_sequence() {
        let mut scene = Scene::new();
        let mut ctl = DragController::new();
        let a = painted_square(&mut scene, &mut ctl, DVec2::ZERO);
        let log = Rc::new(RefCell::new(Vec::new()));
        scene.enable_drag(
            a,
            DragCallbacks::new()
                .on_grab(recorder(&log, "grab"))
                .on_drag(recorder(&log, "drag"))
                .on_drop(recorder(&log, "drop")),
        );

        assert!(ctl.pointer_down(&mut scene, DVec2::new(0.5, 0.5)));
        assert_eq!(ctl.state(), DragState::Grabbed);
        ctl.pointer_move(&mut scene, DVec2::new(2.0, 1.0));
        assert_eq!(ctl.state(), DragState::Dragging);
        ctl.pointer_up(&mut scene, DVec2::new(3.0, 1.0));
        assert_eq!(ctl.state(), DragState::Idle);

        assert_eq!(*log.borrow(), ["grab 0.5 0.5", "drag 2 1", "drop 3 1"]);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut scene = Scene::new();
        let mut ctl = DragController::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = painted_square(&mut scene, &mut ctl, DVec2::ZERO);
        scene.enable_drag(a, DragCallbacks::new().on_drag(recorder(&log, "drag")));
        ctl.pointer_move(&mut scene, DVec2::ZERO);
        ctl.cancel(&mut scene);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn leave_and_cancel_drop() {
        let mut scene = Scene::new();
        let mut ctl = DragController::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = painted_square(&mut scene, &mut ctl, DVec2::ZERO);
        scene.enable_drag(a, DragCallbacks::new().on_drop(recorder(&log, "drop")));

        ctl.pointer_down(&mut scene, DVec2::ZERO);
        ctl.pointer_leave(&mut scene);
        ctl.pointer_down(&mut scene, DVec2::ZERO);
        ctl.cancel(&mut scene);
        ctl.cancel(&mut scene);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn grab_offset_is_relative_to_parent_origin() {
        let mut scene = Scene::new();
        let mut ctl = DragController::new();
        let a = painted_square(&mut scene, &mut ctl, DVec2::ZERO);
        let g = scene.create_group(&[a]);
        scene.node_mut(g).placement.drawing_origin = DVec3::new(1.0, 1.0, 0.0).into();
        scene.node_mut(a).placement.drawing_origin = DVec3::new(3.0, 1.0, 0.0).into();

        let seen = Rc::new(RefCell::new(None));
        let out = seen.clone();
        scene.enable_drag(a, DragCallbacks::new().on_grab(move |_, ev| *out.borrow_mut() = Some(*ev)));
        ctl.pointer_down(&mut scene, DVec2::new(0.5, 0.0));

        let ev = seen.borrow().unwrap();
        assert_eq!(ev.target, a);
        assert_eq!(ev.origin_offset, DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(ev.grab_offset, DVec2::new(-1.5, 0.0));
        assert_eq!(ev.follow(), DVec2::new(2.0, 0.0));
    }
}
