//! Billiards table demo
//!
//! Builds a small scene (a table, a cue ball and an object ball) and runs
//! the simulation headless for a fixed number of steps: the cue ball is
//! struck once, a marker object follows a scripted orbit, and contacts are
//! logged as the balls meet. Draw commands are produced every step and
//! discarded, standing in for an external presenter.

use std::collections::HashSet;

use sim_engine::prelude::*;

const TABLE_MESH: MeshHandle = MeshHandle(1);
const BALL_MESH: MeshHandle = MeshHandle(2);
const FELT_TEXTURE: TextureHandle = TextureHandle(10);

const BALL_RADIUS: f32 = 0.5;
const DEMO_STEPS: u32 = 600;
const STRIKE_STEP: u32 = 10;

struct BilliardsApp {
    steps: u32,
    struck: bool,
    touching: HashSet<(Entity, Entity)>,
}

impl BilliardsApp {
    fn new() -> Self {
        Self {
            steps: 0,
            struck: false,
            touching: HashSet::new(),
        }
    }
}

impl Application for BilliardsApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        log::info!("building billiards scene");
        let physics_defaults = engine.config().physics.clone();
        let scene = engine.scene_mut();

        // Table
        let table = scene.create_object("Table");
        scene.add_component(table, Material::new().with_color(0.1, 0.45, 0.2, 1.0));
        scene.add_component(table, MeshRenderer::new().with_mesh(TABLE_MESH));
        scene.add_component(
            table,
            BoxCollider::new(Vec3::new(4.0, 0.2, 8.0))
                .with_layers(CollisionLayers::ENVIRONMENT, CollisionLayers::DYNAMIC),
        );

        // Cue ball
        let cue_ball = scene.create_object("CueBall");
        scene.add_component(cue_ball, Material::new().with_color(0.9, 0.9, 0.85, 1.0));
        scene.add_component(cue_ball, MeshRenderer::new().with_mesh(BALL_MESH));
        scene.add_component(
            cue_ball,
            SphereCollider::new(BALL_RADIUS)
                .with_layers(CollisionLayers::DYNAMIC, CollisionLayers::ALL),
        );
        scene.add_component(
            cue_ball,
            RigidBody::from_settings(&physics_defaults).with_friction(0.02),
        );
        scene
            .object_mut(cue_ball)
            .expect("cue ball exists")
            .transform_mut()
            .set_position(Vec3::new(0.0, 0.5, -5.0));

        // Object ball, at rest until the cue ball reaches it
        let eight_ball = scene.create_object("EightBall");
        scene.add_component(eight_ball, Material::new().with_color(0.05, 0.05, 0.05, 1.0));
        scene.add_component(eight_ball, MeshRenderer::new().with_mesh(BALL_MESH));
        scene.add_component(
            eight_ball,
            SphereCollider::new(BALL_RADIUS)
                .with_layers(CollisionLayers::DYNAMIC, CollisionLayers::ALL),
        );
        scene.add_component(eight_ball, RigidBody::from_settings(&physics_defaults));
        scene
            .object_mut(eight_ball)
            .expect("eight ball exists")
            .transform_mut()
            .set_position(Vec3::new(0.0, 0.5, 3.0));

        // Scripted marker orbiting the table, moved by hand every step
        let marker = scene.create_object("Marker");
        scene.add_component(marker, Material::new().with_color(0.9, 0.8, 0.1, 1.0));
        scene.add_component(marker, MeshRenderer::new().with_mesh(BALL_MESH));

        // Camera pose feeds the shared render inputs; the camera itself
        // is just a posed object
        let camera = scene.create_object("Camera");
        {
            let transform = scene.object_mut(camera).expect("camera exists").transform_mut();
            transform.set_position(Vec3::new(6.0, 5.0, -8.0));
            transform.look_at(Vec3::zeros());
        }
        let view = scene
            .world_matrix(camera)
            .and_then(|matrix| matrix.try_inverse())
            .unwrap_or_else(Mat4::identity);

        let inputs = engine.render_inputs_mut();
        inputs.view = view;
        inputs.projection = Mat4::new_perspective(16.0 / 9.0, 45.0_f32.to_radians(), 0.1, 100.0);
        inputs.texture = Some(FELT_TEXTURE);

        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, time: FrameTime) -> Result<(), AppError> {
        self.steps += 1;

        // Scripted motion: the marker circles the table, written straight
        // onto its transform
        if let Some(marker) = engine.scene().find_object("Marker") {
            let angle = time.total / 4.0;
            let orbit = Vec3::new(angle.sin() * 4.0, 0.0, angle.cos() * 4.0);
            if let Some(object) = engine.scene_mut().object_mut(marker) {
                object.transform_mut().set_position(orbit);
            }
        }

        // One cue strike, a few steps in
        if !self.struck && self.steps >= STRIKE_STEP {
            if let Some(cue_ball) = engine.scene().find_object("CueBall") {
                if let Some(body) = engine.scene_mut().component_mut::<RigidBody>(cue_ball) {
                    body.add_force(Vec3::new(0.0, 0.0, 0.05));
                    self.struck = true;
                    log::info!("cue ball struck");
                }
            }
        }

        // Report pairs only as they start touching
        let scene = engine.scene();
        let mut touching = HashSet::new();
        for pair in scene.overlapping_pairs() {
            let key = (pair.first, pair.second);
            if !self.touching.contains(&key) {
                let first = scene.object(pair.first).map_or("?", |o| o.name());
                let second = scene.object(pair.second).map_or("?", |o| o.name());
                log::info!("contact: {first} <-> {second}");
            }
            touching.insert(key);
        }
        self.touching = touching;

        if self.steps >= DEMO_STEPS {
            log::info!("demo finished after {} steps", self.steps);
            engine.request_close();
        }
        Ok(())
    }

    fn render(&mut self, queue: &RenderQueue) -> Result<(), AppError> {
        log::trace!("{} draw commands submitted", queue.len());
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        if let Some(cue_ball) = engine.scene().find_object("CueBall") {
            if let Some(position) = engine.scene().world_position(cue_ball) {
                log::info!("cue ball came to rest near {position:?}");
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    sim_engine::foundation::logging::init();

    let config = match EngineConfig::load_from_file("engine.toml") {
        Ok(config) => config,
        Err(error) => {
            log::warn!("falling back to default config: {error}");
            EngineConfig::default()
        }
    };

    let mut app = BilliardsApp::new();
    Engine::run(config, &mut app)?;
    Ok(())
}
