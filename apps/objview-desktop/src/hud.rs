use crate::state::AppState;
use egui::Context as EguiContext;
use objview_common::MotionMode;
use objview_input::{CAMERA_BINDINGS, InputState, OBJECT_BINDINGS};

/// Mesh facts shown in the HUD.
pub struct MeshSummary {
    pub name: String,
    pub triangles: usize,
}

fn motion_label(mode: MotionMode) -> String {
    match mode {
        MotionMode::PerFrame => "per frame".into(),
        MotionMode::FixedRate { hz } => format!("{hz} Hz"),
    }
}

fn held_label(input: &InputState) -> String {
    let keys: Vec<&str> = input.held_keys().map(|k| k.label()).collect();
    if keys.is_empty() {
        "-".into()
    } else {
        keys.join(" ")
    }
}

pub fn draw_hud(ctx: &EguiContext, state: &AppState, mesh: &MeshSummary) {
    if !state.show_hud {
        return;
    }

    egui::SidePanel::left("hud")
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("objview");
            ui.separator();
            ui.label(format!("{} ({} triangles)", mesh.name, mesh.triangles));
            ui.label(format!("Shading: {}", state.ctx.shading));
            ui.label(format!(
                "Ticks: {} ({})",
                state.ticks,
                motion_label(state.clock.mode())
            ));
            let steps = state.scene.steps();
            ui.label(format!(
                "Steps: move {} scale {} rotate {}° dolly {}",
                steps.translate, steps.scale, steps.rotate_degrees, steps.dolly
            ));
            ui.label(format!("Held: {}", held_label(&state.input)));

            let l = &state.ctx.lighting;
            ui.label(format!(
                "Light: {}  RGB: ({:.0}, {:.0}, {:.0})",
                if l.light_on { "on" } else { "off" },
                l.channels[0],
                l.channels[1],
                l.channels[2]
            ));

            let eye = state.scene.view().inverse().w_axis;
            ui.label(format!("Eye: ({:.2}, {:.2}, {:.2})", eye.x, eye.y, eye.z));

            ui.separator();
            ui.heading("Camera");
            for (key, op) in CAMERA_BINDINGS {
                ui.monospace(format!("{:<6} {op}", key.label()));
            }
            ui.heading("Object");
            for (key, op) in OBJECT_BINDINGS {
                ui.monospace(format!("{:<6} {op}", key.label()));
            }

            ui.separator();
            ui.small("LMB + drag: dolly | 1-3: channels | 4: reset | 6: light");
            ui.small("F1: toggle HUD | Esc: quit");
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use objview_input::Key;

    #[test]
    fn motion_labels() {
        assert_eq!(motion_label(MotionMode::PerFrame), "per frame");
        assert_eq!(motion_label(MotionMode::FixedRate { hz: 60.0 }), "60 Hz");
    }

    #[test]
    fn held_keys_are_listed_in_order() {
        let mut input = InputState::new();
        assert_eq!(held_label(&input), "-");
        input.press(Key::D);
        input.press(Key::W);
        assert_eq!(held_label(&input), "W D");
    }
}
