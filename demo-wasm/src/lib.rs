use tether::{
    Anchor, BodyId, BodySlot, NoOpObserver, PointMass, RopeCommands, RopeConfig, RopeId,
    RopeSystem, SystemConfig, Vec2, Vec3,
};
use wasm_bindgen::prelude::*;

// ---- Swing Demo ----

/// A hook the pointer drags around, with a weight hanging from it.
#[wasm_bindgen]
pub struct SwingDemo {
    system: RopeSystem<f32>,
    hook: BodyId,
    weight: BodyId,
    rope: RopeId,
}

#[wasm_bindgen]
impl SwingDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SwingDemo, JsError> {
        // Canvas space: pixels, y grows downward.
        let mut system = RopeSystem::new(
            SystemConfig::new()
                .with_gravity(Vec2::new(0.0, 400.0))
                .with_damping(0.995),
        )
        .map_err(|e| JsError::new(&e.to_string()))?;
        let hook = system.add_body(BodySlot::Kinematic(Anchor::new(Vec3::new(350.0, 80.0, 0.0))));
        let weight = system.add_body(BodySlot::Dynamic(PointMass::new(
            Vec3::new(550.0, 80.0, 0.0),
            1.0,
        )));
        let config = RopeConfig::new()
            .with_length_bounds(40.0, 400.0)
            .with_rest_length(160.0)
            .with_spring_force(60.0)
            .with_adjust_rate(10.0)
            .with_adjust_debounce(0.05);
        let rope = system
            .add_rope(hook, weight, &config)
            .map_err(|e| JsError::new(&e.to_string()))?;

        Ok(SwingDemo { system, hook, weight, rope })
    }

    /// Held-key state, sampled on every following `update`.
    pub fn set_commands(
        &mut self,
        extend_length: bool,
        retract_length: bool,
        pull_extend: bool,
        pull_retract: bool,
    ) {
        self.system.set_commands(
            self.rope,
            RopeCommands { extend_length, retract_length, pull_extend, pull_retract },
        );
    }

    pub fn move_hook(&mut self, x: f32, y: f32) {
        if let Some(BodySlot::Kinematic(anchor)) = self.system.body_mut(self.hook) {
            anchor.move_to(Vec3::new(x, y, 0.0));
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.system.step(dt, &mut NoOpObserver);
    }

    /// Returns [sx, sy, ex, ey], or an empty array before the first update.
    pub fn rope_line(&self) -> Vec<f32> {
        match self.system.endpoints(self.rope) {
            Some(e) => vec![e.start.x, e.start.y, e.end.x, e.end.y],
            None => Vec::new(),
        }
    }

    /// Returns [x, y] of the weight.
    pub fn weight_position(&self) -> Vec<f32> {
        self.system
            .body(self.weight)
            .map(|b| {
                let p = b.position();
                vec![p.x, p.y]
            })
            .unwrap_or_default()
    }

    pub fn rest_length(&self) -> f32 {
        self.system.rope(self.rope).map(|r| r.rest_length()).unwrap_or(0.0)
    }
}
