use clap::Parser;
use nalgebra::Vector2;
use sdl2::{event::Event, pixels::PixelFormatEnum, rect::Rect};
use std::error::Error;

use gridcast::{cli::Args, logger::init_logger, FrameBuffer, Scene, Viewport};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logger(args.log_level.into());
    args.validate()?;

    let grid = args.grid();
    let scene = Scene::new(grid, args.origin(), args.epsilon);
    log::info!(
        "grid {}x{}, origin {:.3}, {:.3}, epsilon {}",
        grid.width(),
        grid.height(),
        scene.origin.x,
        scene.origin.y,
        scene.epsilon
    );

    match args.trace_target() {
        Some(target) => print_trace(&scene, target),
        None => run_window(&scene, args.width, args.height)?,
    }
    Ok(())
}

fn print_trace(scene: &Scene, target: Vector2<f64>) {
    for (step, bounce) in scene.trace(target).enumerate() {
        let status = if bounce.exited {
            " exited"
        } else if bounce.stalled {
            " stalled"
        } else {
            ""
        };
        println!(
            "{step}: ({:.4}, {:.4}) -> ({:.4}, {:.4}) cell ({}, {}){status}",
            bounce.ray.origin.x,
            bounce.ray.origin.y,
            bounce.ray.target.x,
            bounce.ray.target.y,
            bounce.cell.x,
            bounce.cell.y,
        );
    }
}

fn run_window(scene: &Scene, width: u32, height: u32) -> Result<(), gridcast::Error> {
    let sdl2_context = sdl2::init()?;
    let mut canvas = sdl2_context
        .video()?
        .window("gridcast", width, height)
        .position_centered()
        .build()?
        .into_canvas()
        .build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture =
        texture_creator.create_texture_streaming(PixelFormatEnum::RGBA32, width, height)?;
    let mut events = sdl2_context.event_pump()?;

    let viewport = Viewport::new(scene.grid, width, height);
    let mut frame_buffer = FrameBuffer::new(width as usize, height as usize);
    let mut cursor = None;

    'main: loop {
        scene.render(&mut frame_buffer, &viewport, cursor);
        texture.update(
            Rect::new(0, 0, width, height),
            frame_buffer.pixel_data(),
            frame_buffer.pitch(),
        )?;
        canvas.copy(&texture, None, None)?;
        canvas.present();

        // Block until the pointer moves; every move retraces from scratch.
        loop {
            match events.wait_event() {
                Event::Quit { .. } => break 'main,
                Event::MouseMotion { x, y, .. } => {
                    cursor = Some(viewport.to_grid(Vector2::new(x as f64, y as f64)));
                    break;
                }
                _ => continue,
            }
        }
    }
    Ok(())
}
