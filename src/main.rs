// src/main.rs
use nannou::prelude::*;

use fuzzvis::{
    config::{Config, FuzzyTextConfig},
    controllers::{OscCommand, OscController},
    models::{ThemeMode, ThemeSignal},
    services::CosmicRasterizer,
    views::{FuzzyText, Viewport},
};

struct Model {
    // Core components:
    text_config: FuzzyTextConfig,
    theme: ThemeSignal,
    fuzzy: FuzzyText,

    // Text stack:
    rasterizer: CosmicRasterizer,

    // Comms components:
    osc_controller: OscController,

    // Rendering components:
    frame_image: Option<nannou::image::DynamicImage>,
    random: rand::rngs::ThreadRng,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create OSC controller
    let osc_controller =
        OscController::new(config.osc.rx_port).expect("Failed to create OSC Controller");

    // Create window
    app.new_window()
        .title("fuzzvis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    // Text stack and the one FuzzyText instance
    let rasterizer = CosmicRasterizer::new(&config.resolve_font_paths());
    let theme = ThemeSignal::new(config.theme.initial);
    let viewport = Viewport {
        width: config.window.width as f32,
        height: config.window.height as f32,
    };
    let fuzzy = FuzzyText::new(
        config.text.clone(),
        viewport,
        &theme,
        config.fonts.default_family.clone(),
    );

    Model {
        text_config: config.text,
        theme,
        fuzzy,
        rasterizer,
        osc_controller,
        frame_image: None,
        random: rand::thread_rng(),
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::T => model.theme.toggle(),
        Key::H => {
            let mut config = model.text_config.clone();
            config.enable_hover = !config.enable_hover;
            apply_text_config(model, config);
        }
        Key::Q => {
            model.fuzzy.teardown();
            app.quit();
        }
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    // The window is the viewport; a size change forces re-measurement
    // (responsive font sizes depend on the viewport width).
    let rect = app.window_rect();
    model.fuzzy.set_viewport(Viewport {
        width: rect.w(),
        height: rect.h(),
    });

    // Process OSC messages
    model.osc_controller.process_messages();
    for command in model.osc_controller.take_commands() {
        apply_command(model, command);
    }

    // Pointer hover hit-test against the frame, which view() draws centered
    if let Some((w, h)) = model
        .fuzzy
        .frame()
        .map(|frame| (frame.width as f32, frame.height as f32))
    {
        let mouse = app.mouse.position();
        if mouse.x.abs() <= w / 2.0 && mouse.y.abs() <= h / 2.0 {
            model.fuzzy.pointer_enter();
        } else {
            model.fuzzy.pointer_leave();
        }
    }

    /*********************  Main update for the instance *********************/
    model
        .fuzzy
        .update(&mut model.rasterizer, &model.theme, &mut model.random);
    /*************************************************************************/

    model.frame_image = model.fuzzy.frame().map(|frame| {
        let buffer = nannou::image::RgbaImage::from_raw(
            frame.width,
            frame.height,
            frame.pixels().to_vec(),
        )
        .expect("frame buffer size mismatch");
        nannou::image::DynamicImage::ImageRgba8(buffer)
    });
}

fn apply_command(model: &mut Model, command: OscCommand) {
    match command {
        OscCommand::SetTheme(mode) => model.theme.set(mode),
        OscCommand::ToggleTheme => model.theme.toggle(),
        OscCommand::SetText(content) => {
            let mut config = model.text_config.clone();
            config.content = content;
            apply_text_config(model, config);
        }
        OscCommand::SetIntensity { base, hover } => {
            let mut config = model.text_config.clone();
            if let Some(base) = base {
                config.base_intensity = base;
            }
            if let Some(hover) = hover {
                config.hover_intensity = hover;
            }
            apply_text_config(model, config);
        }
        OscCommand::SetHoverEnabled(enabled) => {
            let mut config = model.text_config.clone();
            config.enable_hover = enabled;
            apply_text_config(model, config);
        }
    }
}

fn apply_text_config(model: &mut Model, config: FuzzyTextConfig) {
    model.text_config = config.clone();
    model.fuzzy.set_config(config);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    let background = match model.theme.mode() {
        ThemeMode::Dark => rgb(0.04, 0.04, 0.05),
        ThemeMode::Light => rgb(0.97, 0.97, 0.96),
    };
    draw.background().color(background);

    if let Some(image) = &model.frame_image {
        let texture = wgpu::Texture::from_image(app, image);
        draw.texture(&texture);
    }

    draw.to_frame(app, &frame).unwrap();
}
