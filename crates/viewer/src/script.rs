use anyhow::Result;
use stride::{ControllerConfig, MovementState};

use crate::scene::{self, DemoSession};

struct Step {
    label: &'static str,
    toggle_run: bool,
    keys: &'static [&'static str],
    seconds: f32,
}

const WALKTHROUGH: &[Step] = &[
    Step {
        label: "stand",
        toggle_run: false,
        keys: &[],
        seconds: 0.5,
    },
    Step {
        label: "walk forward",
        toggle_run: false,
        keys: &["w"],
        seconds: 1.0,
    },
    Step {
        label: "run forward-left",
        toggle_run: true,
        keys: &["w", "a"],
        seconds: 1.0,
    },
    Step {
        label: "run back",
        toggle_run: false,
        keys: &["arrowdown"],
        seconds: 0.5,
    },
    Step {
        label: "walk right",
        toggle_run: true,
        keys: &["d"],
        seconds: 0.5,
    },
    Step {
        label: "forward and back together",
        toggle_run: false,
        keys: &["w", "s"],
        seconds: 0.5,
    },
    Step {
        label: "stop",
        toggle_run: false,
        keys: &[],
        seconds: 1.0,
    },
];

pub fn run(config: ControllerConfig, fps: u32) -> Result<()> {
    let mut scene = scene::load(config)?;
    walkthrough(&mut scene.session, fps);
    log::info!(
        "walkthrough finished after {} frames",
        scene.session.frames()
    );
    Ok(())
}

fn walkthrough(session: &mut DemoSession, fps: u32) -> MovementState {
    let dt = 1.0 / fps as f32;

    for step in WALKTHROUGH {
        if step.toggle_run {
            session.key_down("shift");
            session.key_up("shift");
        }
        for key in step.keys {
            session.key_down(key);
        }

        let frames = (step.seconds * fps as f32).round() as u32;
        for _ in 0..frames {
            session.frame(dt);
        }

        for key in step.keys {
            session.key_up(key);
        }

        let controller = session.controller();
        let position = controller.position();
        log::info!(
            "{:<26} {:<4} run={:<5} pos=({:6.2}, {:5.2}, {:6.2}) yaw={:7.1}deg",
            step.label,
            controller.current(),
            controller.is_run_toggled(),
            position.x,
            position.y,
            position.z,
            controller.orientation().to_degrees(),
        );
    }

    session.controller().current()
}
