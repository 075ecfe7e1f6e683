use glam::{Mat4, Vec3};
use objview_common::StepSizes;
use std::fmt;
use std::str::FromStr;

/// Which matrix an operation mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Model,
    View,
}

/// A discrete, named transform operation.
///
/// Each operation is a fixed small increment right-multiplied onto either the
/// Model or the View matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    ScaleUp,
    ScaleDown,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    RotateObjectX,
    RotateObjectY,
    RotateObjectZ,
    TranslateObjectPosX,
    TranslateObjectNegX,
    TranslateObjectPosY,
    TranslateObjectNegY,
    TranslateObjectPosZ,
    TranslateObjectNegZ,
    DollyIn,
    DollyOut,
}

/// Returned when parsing an operation name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl Operation {
    pub const ALL: [Operation; 21] = [
        Operation::MoveForward,
        Operation::MoveBackward,
        Operation::StrafeLeft,
        Operation::StrafeRight,
        Operation::ScaleUp,
        Operation::ScaleDown,
        Operation::YawLeft,
        Operation::YawRight,
        Operation::PitchUp,
        Operation::PitchDown,
        Operation::RotateObjectX,
        Operation::RotateObjectY,
        Operation::RotateObjectZ,
        Operation::TranslateObjectPosX,
        Operation::TranslateObjectNegX,
        Operation::TranslateObjectPosY,
        Operation::TranslateObjectNegY,
        Operation::TranslateObjectPosZ,
        Operation::TranslateObjectNegZ,
        Operation::DollyIn,
        Operation::DollyOut,
    ];

    /// Stable kebab-case name, used for scripting and logs.
    pub fn name(self) -> &'static str {
        match self {
            Operation::MoveForward => "move-forward",
            Operation::MoveBackward => "move-backward",
            Operation::StrafeLeft => "strafe-left",
            Operation::StrafeRight => "strafe-right",
            Operation::ScaleUp => "scale-up",
            Operation::ScaleDown => "scale-down",
            Operation::YawLeft => "yaw-left",
            Operation::YawRight => "yaw-right",
            Operation::PitchUp => "pitch-up",
            Operation::PitchDown => "pitch-down",
            Operation::RotateObjectX => "rotate-object-x",
            Operation::RotateObjectY => "rotate-object-y",
            Operation::RotateObjectZ => "rotate-object-z",
            Operation::TranslateObjectPosX => "translate-object-pos-x",
            Operation::TranslateObjectNegX => "translate-object-neg-x",
            Operation::TranslateObjectPosY => "translate-object-pos-y",
            Operation::TranslateObjectNegY => "translate-object-neg-y",
            Operation::TranslateObjectPosZ => "translate-object-pos-z",
            Operation::TranslateObjectNegZ => "translate-object-neg-z",
            Operation::DollyIn => "dolly-in",
            Operation::DollyOut => "dolly-out",
        }
    }

    pub fn target(self) -> Target {
        match self {
            Operation::MoveForward
            | Operation::MoveBackward
            | Operation::StrafeLeft
            | Operation::StrafeRight
            | Operation::YawLeft
            | Operation::YawRight
            | Operation::PitchUp
            | Operation::PitchDown
            | Operation::DollyIn
            | Operation::DollyOut => Target::View,
            Operation::ScaleUp
            | Operation::ScaleDown
            | Operation::RotateObjectX
            | Operation::RotateObjectY
            | Operation::RotateObjectZ
            | Operation::TranslateObjectPosX
            | Operation::TranslateObjectNegX
            | Operation::TranslateObjectPosY
            | Operation::TranslateObjectNegY
            | Operation::TranslateObjectPosZ
            | Operation::TranslateObjectNegZ => Target::Model,
        }
    }

    /// The incremental matrix this operation right-multiplies onto its target.
    pub fn increment(self, steps: &StepSizes) -> Mat4 {
        let d = steps.translate;
        let e = steps.dolly;
        let theta = steps.rotate_degrees.to_radians();

        match self {
            Operation::MoveForward => Mat4::from_translation(Vec3::new(0.0, 0.0, -d)),
            Operation::MoveBackward => Mat4::from_translation(Vec3::new(0.0, 0.0, d)),
            Operation::StrafeLeft => Mat4::from_translation(Vec3::new(-d, 0.0, 0.0)),
            Operation::StrafeRight => Mat4::from_translation(Vec3::new(d, 0.0, 0.0)),
            Operation::ScaleUp => Mat4::from_scale(Vec3::splat(1.0 + steps.scale)),
            Operation::ScaleDown => Mat4::from_scale(Vec3::splat(1.0 - steps.scale)),
            Operation::YawLeft => Mat4::from_axis_angle(Vec3::Y, theta),
            Operation::YawRight => Mat4::from_axis_angle(Vec3::Y, -theta),
            Operation::PitchUp => Mat4::from_axis_angle(Vec3::X, -theta),
            Operation::PitchDown => Mat4::from_axis_angle(Vec3::X, theta),
            Operation::RotateObjectX => Mat4::from_axis_angle(Vec3::X, -theta),
            Operation::RotateObjectY => Mat4::from_axis_angle(Vec3::Y, theta),
            Operation::RotateObjectZ => Mat4::from_axis_angle(Vec3::Z, theta),
            Operation::TranslateObjectPosX => Mat4::from_translation(Vec3::new(d, 0.0, 0.0)),
            Operation::TranslateObjectNegX => Mat4::from_translation(Vec3::new(-d, 0.0, 0.0)),
            Operation::TranslateObjectPosY => Mat4::from_translation(Vec3::new(0.0, d, 0.0)),
            Operation::TranslateObjectNegY => Mat4::from_translation(Vec3::new(0.0, -d, 0.0)),
            Operation::TranslateObjectPosZ => Mat4::from_translation(Vec3::new(0.0, 0.0, d)),
            Operation::TranslateObjectNegZ => Mat4::from_translation(Vec3::new(0.0, 0.0, -d)),
            Operation::DollyIn => Mat4::from_translation(Vec3::new(0.0, 0.0, e)),
            Operation::DollyOut => Mat4::from_translation(Vec3::new(0.0, 0.0, -e)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "fly-away".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown operation: fly-away");
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Operation::ALL.iter().map(|op| op.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Operation::ALL.len());
    }

    #[test]
    fn camera_and_object_targets() {
        let view_ops = Operation::ALL
            .iter()
            .filter(|op| op.target() == Target::View)
            .count();
        assert_eq!(view_ops, 10);
        assert_eq!(Operation::ScaleUp.target(), Target::Model);
        assert_eq!(Operation::DollyIn.target(), Target::View);
    }

    #[test]
    fn translation_increments_use_step_sizes() {
        let steps = StepSizes::DEFAULT;
        let fwd = Operation::MoveForward.increment(&steps);
        assert_eq!(fwd.w_axis.truncate(), Vec3::new(0.0, 0.0, -0.05));

        let dolly = Operation::DollyIn.increment(&steps);
        assert_eq!(dolly.w_axis.truncate(), Vec3::new(0.0, 0.0, 0.1));

        let obj = Operation::TranslateObjectNegY.increment(&steps);
        assert_eq!(obj.w_axis.truncate(), Vec3::new(0.0, -0.05, 0.0));
    }

    #[test]
    fn scale_increments() {
        let steps = StepSizes::DEFAULT;
        let up = Operation::ScaleUp.increment(&steps);
        let down = Operation::ScaleDown.increment(&steps);
        assert_eq!(up.x_axis.x, 1.01);
        assert_eq!(down.z_axis.z, 0.99);
    }

    #[test]
    fn opposite_rotations_cancel() {
        let steps = StepSizes::DEFAULT;
        let m = Operation::YawLeft.increment(&steps) * Operation::YawRight.increment(&steps);
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));

        let m = Operation::PitchUp.increment(&steps) * Operation::PitchDown.increment(&steps);
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }
}
