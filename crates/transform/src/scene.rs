use crate::operation::{Operation, Target};
use glam::{Mat4, Vec3};
use objview_common::{CameraConfig, StepSizes};

/// Result of applying one operation: the updated matrices and their product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformUpdate {
    pub model: Mat4,
    pub view: Mat4,
    pub combined: Mat4,
}

/// Projection × View × Model.
pub fn combine(projection: Mat4, view: Mat4, model: Mat4) -> Mat4 {
    projection * view * model
}

/// Apply `op` to the given matrices without touching any shared state.
pub fn apply_operation(
    op: Operation,
    steps: &StepSizes,
    model: Mat4,
    view: Mat4,
    projection: Mat4,
) -> TransformUpdate {
    let increment = op.increment(steps);
    let (model, view) = match op.target() {
        Target::Model => (model * increment, view),
        Target::View => (model, view * increment),
    };
    TransformUpdate {
        model,
        view,
        combined: combine(projection, view, model),
    }
}

/// Camera matrix looking from `eye` at `target`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, up)
}

/// Perspective projection with wgpu clip-space depth.
pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fov_degrees.to_radians(), aspect, near, far)
}

/// Owns the Model, View and Projection matrices of the scene.
///
/// The combined transform is recomputed after every mutation, so
/// [`SceneTransform::combined`] always reflects the latest Model and View.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTransform {
    model: Mat4,
    view: Mat4,
    projection: Mat4,
    combined: Mat4,
    steps: StepSizes,
}

impl SceneTransform {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            model,
            view,
            projection,
            combined: combine(projection, view, model),
            steps: StepSizes::DEFAULT,
        }
    }

    /// Identity model, look-at view and perspective projection from `camera`.
    pub fn from_camera(camera: &CameraConfig, aspect: f32) -> Self {
        Self::new(
            Mat4::IDENTITY,
            look_at(camera.eye, camera.target, camera.up),
            perspective(camera.fov_degrees, aspect, camera.near, camera.far),
        )
    }

    pub fn with_steps(mut self, steps: StepSizes) -> Self {
        self.steps = steps;
        self
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn combined(&self) -> Mat4 {
        self.combined
    }

    pub fn steps(&self) -> &StepSizes {
        &self.steps
    }

    /// Replace the projection, e.g. after the window aspect ratio changed.
    pub fn set_projection(&mut self, projection: Mat4) {
        self.projection = projection;
        self.combined = combine(self.projection, self.view, self.model);
    }

    /// Apply one operation and return the new combined transform.
    pub fn apply(&mut self, op: Operation) -> Mat4 {
        let update = apply_operation(op, &self.steps, self.model, self.view, self.projection);
        self.model = update.model;
        self.view = update.view;
        self.combined = update.combined;
        tracing::trace!(operation = op.name(), "applied transform operation");
        self.combined
    }

    /// Apply operations in iteration order.
    pub fn apply_all(&mut self, ops: impl IntoIterator<Item = Operation>) -> Mat4 {
        for op in ops {
            self.apply(op);
        }
        self.combined
    }

    pub fn move_forward(&mut self) -> Mat4 {
        self.apply(Operation::MoveForward)
    }

    pub fn move_backward(&mut self) -> Mat4 {
        self.apply(Operation::MoveBackward)
    }

    pub fn strafe_left(&mut self) -> Mat4 {
        self.apply(Operation::StrafeLeft)
    }

    pub fn strafe_right(&mut self) -> Mat4 {
        self.apply(Operation::StrafeRight)
    }

    pub fn scale_up(&mut self) -> Mat4 {
        self.apply(Operation::ScaleUp)
    }

    pub fn scale_down(&mut self) -> Mat4 {
        self.apply(Operation::ScaleDown)
    }

    pub fn yaw_left(&mut self) -> Mat4 {
        self.apply(Operation::YawLeft)
    }

    pub fn yaw_right(&mut self) -> Mat4 {
        self.apply(Operation::YawRight)
    }

    pub fn pitch_up(&mut self) -> Mat4 {
        self.apply(Operation::PitchUp)
    }

    pub fn pitch_down(&mut self) -> Mat4 {
        self.apply(Operation::PitchDown)
    }

    pub fn rotate_object_x(&mut self) -> Mat4 {
        self.apply(Operation::RotateObjectX)
    }

    pub fn rotate_object_y(&mut self) -> Mat4 {
        self.apply(Operation::RotateObjectY)
    }

    pub fn rotate_object_z(&mut self) -> Mat4 {
        self.apply(Operation::RotateObjectZ)
    }

    /// Translate the object along one axis; `positive` selects the direction.
    pub fn translate_object(&mut self, axis: Axis, positive: bool) -> Mat4 {
        let op = match (axis, positive) {
            (Axis::X, true) => Operation::TranslateObjectPosX,
            (Axis::X, false) => Operation::TranslateObjectNegX,
            (Axis::Y, true) => Operation::TranslateObjectPosY,
            (Axis::Y, false) => Operation::TranslateObjectNegY,
            (Axis::Z, true) => Operation::TranslateObjectPosZ,
            (Axis::Z, false) => Operation::TranslateObjectNegZ,
        };
        self.apply(op)
    }

    pub fn dolly_in(&mut self) -> Mat4 {
        self.apply(Operation::DollyIn)
    }

    pub fn dolly_out(&mut self) -> Mat4 {
        self.apply(Operation::DollyOut)
    }
}

impl Default for SceneTransform {
    fn default() -> Self {
        Self::from_camera(&CameraConfig::default(), 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat3;

    fn identity_scene() -> SceneTransform {
        SceneTransform::new(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY)
    }

    fn assert_orthonormal(m: Mat4, eps: f32) {
        let r = Mat3::from_mat4(m);
        for col in [r.x_axis, r.y_axis, r.z_axis] {
            assert!((col.length() - 1.0).abs() < eps, "column not unit: {col}");
        }
        assert!(r.x_axis.dot(r.y_axis).abs() < eps);
        assert!(r.y_axis.dot(r.z_axis).abs() < eps);
        assert!(r.z_axis.dot(r.x_axis).abs() < eps);
    }

    #[test]
    fn repeated_forward_equals_closed_form() {
        let mut scene = identity_scene();
        let n = 100;
        for _ in 0..n {
            scene.move_forward();
        }
        let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -0.05 * n as f32));
        assert!(scene.view().abs_diff_eq(expected, 1e-4));
        assert_eq!(scene.model(), Mat4::IDENTITY);
    }

    #[test]
    fn repeated_object_translation_equals_closed_form() {
        let mut scene = identity_scene();
        for _ in 0..40 {
            scene.translate_object(Axis::Y, true);
        }
        let expected = Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0));
        assert!(scene.model().abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn rotate_and_translate_do_not_commute() {
        let steps = StepSizes {
            translate: 1.0,
            rotate_degrees: 90.0,
            ..StepSizes::DEFAULT
        };

        let mut a = identity_scene().with_steps(steps);
        a.rotate_object_y();
        a.translate_object(Axis::X, true);

        let mut b = identity_scene().with_steps(steps);
        b.translate_object(Axis::X, true);
        b.rotate_object_y();

        assert!(!a.model().abs_diff_eq(b.model(), 1e-3));

        // Rotate-then-translate moves along the rotated X axis.
        assert!(a.model().w_axis.truncate().abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
        assert!(b.model().w_axis.truncate().abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn default_steps_also_do_not_commute() {
        let mut a = identity_scene();
        a.yaw_left();
        a.strafe_right();

        let mut b = identity_scene();
        b.strafe_right();
        b.yaw_left();

        assert_ne!(a.view(), b.view());
    }

    #[test]
    fn scale_up_then_down_is_close_but_not_exact() {
        let mut scene = identity_scene();
        scene.scale_up();
        scene.scale_down();

        assert_ne!(scene.model(), Mat4::IDENTITY);
        assert!(scene.model().abs_diff_eq(Mat4::IDENTITY, 1e-3));
        assert!((scene.model().x_axis.x - 0.9999).abs() < 1e-6);
    }

    #[test]
    fn rotations_preserve_orthonormality() {
        let mut scene = SceneTransform::default();
        let sequence = [
            Operation::RotateObjectX,
            Operation::RotateObjectY,
            Operation::RotateObjectZ,
            Operation::YawLeft,
            Operation::PitchUp,
            Operation::RotateObjectY,
            Operation::PitchDown,
        ];
        for _ in 0..500 {
            scene.apply_all(sequence);
        }
        assert_orthonormal(scene.model(), 1e-3);
        assert_orthonormal(scene.view(), 1e-3);
    }

    #[test]
    fn rotate_object_y_once_from_identity() {
        let mut scene = identity_scene();
        scene.rotate_object_y();

        let expected = Mat4::IDENTITY * Mat4::from_axis_angle(Vec3::Y, 0.05_f32.to_radians());
        assert!(scene.model().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn move_forward_from_look_at() {
        let view = look_at(Vec3::new(0.0, 0.0, -40.0), Vec3::ZERO, Vec3::Y);
        let projection = perspective(45.0, 1.0, 0.1, 200.0);
        let mut scene = SceneTransform::new(Mat4::IDENTITY, view, projection);
        let before = scene.combined();

        let after = scene.move_forward();

        let moved_view = view * Mat4::from_translation(Vec3::new(0.0, 0.0, -0.05));
        let expected = projection * moved_view * Mat4::IDENTITY;
        assert!(after.abs_diff_eq(expected, 1e-6));
        assert!(scene.view().abs_diff_eq(moved_view, 1e-6));
        assert_ne!(before, after);
    }

    #[test]
    fn combined_is_fresh_after_every_operation() {
        let mut scene = SceneTransform::default();
        for op in Operation::ALL {
            let combined = scene.apply(op);
            let fresh = scene.projection() * scene.view() * scene.model();
            assert!(combined.abs_diff_eq(fresh, 1e-6), "stale after {op}");
            assert_eq!(combined, scene.combined());
        }
    }

    #[test]
    fn operations_only_touch_their_target() {
        for op in Operation::ALL {
            let mut scene = SceneTransform::default();
            let (model, view) = (scene.model(), scene.view());
            scene.apply(op);
            match op.target() {
                Target::Model => {
                    assert_eq!(scene.view(), view, "{op} touched view");
                    assert_ne!(scene.model(), model, "{op} left model unchanged");
                }
                Target::View => {
                    assert_eq!(scene.model(), model, "{op} touched model");
                    assert_ne!(scene.view(), view, "{op} left view unchanged");
                }
            }
        }
    }

    #[test]
    fn apply_operation_is_deterministic() {
        let scene = SceneTransform::default();
        for op in Operation::ALL {
            let a = apply_operation(
                op,
                &StepSizes::DEFAULT,
                scene.model(),
                scene.view(),
                scene.projection(),
            );
            let b = apply_operation(
                op,
                &StepSizes::DEFAULT,
                scene.model(),
                scene.view(),
                scene.projection(),
            );
            assert_eq!(a, b);
        }
    }

    #[test]
    fn dolly_in_and_out_cancel() {
        let mut scene = SceneTransform::default();
        let view = scene.view();
        scene.dolly_in();
        scene.dolly_out();
        assert!(scene.view().abs_diff_eq(view, 1e-5));
    }

    #[test]
    fn set_projection_refreshes_combined() {
        let mut scene = SceneTransform::default();
        let projection = perspective(45.0, 16.0 / 9.0, 0.1, 200.0);
        scene.set_projection(projection);
        assert_eq!(scene.combined(), projection * scene.view() * scene.model());
    }
}
