use crate::key::Key;
use crate::state::{InputState, VerticalMotion};
use objview_transform::Operation;

/// Level-triggered camera bindings, in dispatch order.
pub const CAMERA_BINDINGS: [(Key, Operation); 8] = [
    (Key::W, Operation::MoveForward),
    (Key::S, Operation::MoveBackward),
    (Key::A, Operation::StrafeLeft),
    (Key::D, Operation::StrafeRight),
    (Key::ArrowLeft, Operation::YawLeft),
    (Key::ArrowRight, Operation::YawRight),
    (Key::ArrowUp, Operation::PitchUp),
    (Key::ArrowDown, Operation::PitchDown),
];

/// Level-triggered object bindings, in dispatch order.
pub const OBJECT_BINDINGS: [(Key, Operation); 11] = [
    (Key::O, Operation::ScaleUp),
    (Key::P, Operation::ScaleDown),
    (Key::B, Operation::RotateObjectX),
    (Key::N, Operation::RotateObjectY),
    (Key::E, Operation::RotateObjectZ),
    (Key::J, Operation::TranslateObjectPosX),
    (Key::L, Operation::TranslateObjectNegX),
    (Key::I, Operation::TranslateObjectPosY),
    (Key::K, Operation::TranslateObjectNegY),
    (Key::PageUp, Operation::TranslateObjectPosZ),
    (Key::PageDown, Operation::TranslateObjectNegZ),
];

/// Operations to apply for one tick given the current input snapshot.
///
/// Order is fixed: camera bindings, then object bindings, then the mouse
/// dolly. Each active input contributes exactly one operation.
pub fn frame_operations(input: &InputState) -> Vec<Operation> {
    let mut ops: Vec<Operation> = CAMERA_BINDINGS
        .iter()
        .chain(OBJECT_BINDINGS.iter())
        .filter(|(key, _)| input.is_held(*key))
        .map(|(_, op)| *op)
        .collect();

    if input.left_mouse() {
        match input.vertical_motion() {
            VerticalMotion::Down => ops.push(Operation::DollyIn),
            VerticalMotion::Up => ops.push(Operation::DollyOut),
            VerticalMotion::Still => {}
        }
    }

    ops
}
