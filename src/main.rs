//! Cursor camera demo.
//!
//! Opens a raylib window with a scattered scene and drives a
//! [`CursorCamera2D`] over it:
//!
//! - mouse wheel zooms, anchored at the cursor
//! - WASD or touching a window edge pans
//! - `R` frames the whole world instantly, `F` animates towards a random spot
//!
//! Camera settings come from an INI file (see `--config`).
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib -- --config camera.ini
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;
use raylib::prelude::*;
use std::path::PathBuf;

use cursorcamera::events::camera::{CameraFraming, SetCameraRectEvent, set_camera_rect_observer};
use cursorcamera::resources::camera2d::Camera2DRes;
use cursorcamera::resources::cameraconfig::CameraConfig;
use cursorcamera::resources::camerainput::CameraInput;
use cursorcamera::resources::cursorcamera2d::{CameraSettingMode, CursorCamera2D};
use cursorcamera::resources::rect::{RectF, to_vector2};
use cursorcamera::resources::screensize::ScreenSize;
use cursorcamera::resources::windowsize::WindowSize;
use cursorcamera::systems::cameraconfig::apply_camera_config_changes;
use cursorcamera::systems::camerainput::{CameraKeyBindings, update_camera_input};
use cursorcamera::systems::cursorcamera::cursor_camera_system;
use cursorcamera::systems::raylibcamera::sync_raylib_camera;

/// Cursor camera demo
#[derive(Parser)]
#[command(version, about = "Wheel to zoom, WASD or screen edges to pan, R to reset, F to focus.")]
struct Cli {
    /// Camera configuration file.
    #[arg(long, value_name = "PATH", default_value = "./camera.ini")]
    config: PathBuf,

    /// Base screen width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: i32,

    /// Base screen height in pixels.
    #[arg(long, default_value_t = 720)]
    height: i32,

    /// Seed for the scattered demo scene.
    #[arg(long, default_value_t = 2018)]
    seed: u64,
}

struct SceneItem {
    pos: Vector2,
    radius: f32,
    color: Color,
}

/// Everything drawn in a frame that comes from the ECS world.
struct FrameView {
    camera: Camera2D,
    view: RectF,
    target_view: RectF,
    restricted: RectF,
    cursor_world: Vec2,
    magnification: f32,
}

fn build_scene(area: RectF, seed: u64) -> Vec<SceneItem> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..400)
        .map(|_| SceneItem {
            pos: to_vector2(area.pos + Vec2::new(rng.f32(), rng.f32()) * area.size),
            radius: 2.0 + rng.f32() * 18.0,
            color: Color::new(rng.u8(40..220), rng.u8(40..220), rng.u8(40..220), 200),
        })
        .collect()
}

fn draw_frame(rl: &mut RaylibHandle, thread: &RaylibThread, frame: &FrameView, scene: &[SceneItem]) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::new(204, 230, 255, 255));

    {
        // Ends the camera mode when dropped.
        let mut d2 = d.begin_mode2D(frame.camera);
        for item in scene {
            d2.draw_circle_v(item.pos, item.radius, item.color);
        }
        let thickness = 2.0 / frame.magnification;
        d2.draw_rectangle_lines_ex(Rectangle::from(frame.restricted), thickness * 2.0, Color::DARKGRAY);
        d2.draw_rectangle_lines_ex(Rectangle::from(frame.target_view), thickness, Color::RED);
        d2.draw_circle_v(to_vector2(frame.cursor_world), 60.0, Color::new(255, 0, 0, 128));
    }

    d.draw_text(
        &format!(
            "View: ({:.1}, {:.1}) {:.1}x{:.1}  Zoom: {:.2}",
            frame.view.pos.x,
            frame.view.pos.y,
            frame.view.w(),
            frame.view.h(),
            frame.magnification
        ),
        20,
        20,
        20,
        Color::BLACK,
    );
    d.draw_text(
        &format!(
            "Cursor world: ({:.1}, {:.1})",
            frame.cursor_world.x, frame.cursor_world.y
        ),
        20,
        45,
        20,
        Color::new(90, 90, 90, 255),
    );
    d.draw_fps(20, 70);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = CameraConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using default camera settings", e);
    }

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Cursor Camera")
        .build();
    rl.set_target_fps(60);
    rl.set_exit_key(None);

    let screen = ScreenSize {
        w: cli.width,
        h: cli.height,
    };
    let world_rect = config.restricted_rect.unwrap_or(RectF {
        pos: Vec2::ZERO,
        size: screen.as_vec2(),
    });
    let scene = build_scene(world_rect, cli.seed);
    let mut rng = fastrand::Rng::with_seed(cli.seed.wrapping_add(1));

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    let camera = CursorCamera2D::new(screen.as_vec2());
    world.insert_resource(Camera2DRes(camera.to_raylib()));
    world.insert_resource(camera);
    world.insert_resource(screen);
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(CameraInput::idle(screen.as_vec2()));
    world.insert_resource(CameraKeyBindings::default());
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.spawn(Observer::new(set_camera_rect_observer));
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_camera_input,
            apply_camera_config_changes,
            cursor_camera_system,
            sync_raylib_camera,
        )
            .chain(),
    );

    log::info!("Cursor camera demo started ({}x{})", cli.width, cli.height);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<RaylibHandle>()
        .window_should_close()
    {
        let (reset, focus) = {
            let rl = world.non_send_resource::<RaylibHandle>();
            (
                rl.is_key_pressed(KeyboardKey::KEY_R),
                rl.is_key_pressed(KeyboardKey::KEY_F),
            )
        };
        if reset {
            world.trigger(SetCameraRectEvent {
                framing: CameraFraming::Rect(world_rect),
                mode: CameraSettingMode::BaseAndTarget,
            });
        }
        if focus {
            let center = Vec2::new(
                world_rect.pos.x + rng.f32() * world_rect.w(),
                world_rect.pos.y + rng.f32() * world_rect.h(),
            );
            world.trigger(SetCameraRectEvent {
                framing: CameraFraming::Point {
                    center,
                    magnification: 4.0,
                },
                mode: CameraSettingMode::TargetOnly,
            });
        }

        update.run(&mut world);
        world.clear_trackers();

        let frame = {
            let camera = world.resource::<CursorCamera2D>();
            let input = world.resource::<CameraInput>();
            FrameView {
                camera: world.resource::<Camera2DRes>().0,
                view: camera.camera_rect(),
                target_view: camera.target_camera_rect(),
                restricted: camera.restricted_rect(),
                cursor_world: camera.screen_to_world(input.cursor),
                magnification: camera.magnification(),
            }
        };
        let mut rl = world.non_send_resource_mut::<RaylibHandle>();
        draw_frame(&mut rl, &thread, &frame, &scene);
    }
}
