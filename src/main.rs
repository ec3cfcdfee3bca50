// src/main.rs
use nannou::prelude::*;
use std::process;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use oscdisplay::{
    config::Config,
    controllers::{mailbox, MailboxReceiver, OscListener, OscSender},
    error::Result,
    models::DisplayState,
    services::{apply_pending, LinkMonitor, LinkTransition},
    views::DisplayView,
};

struct Model {
    // Latest snapshot from the listener. Only this copy is drawn.
    state: DisplayState,
    view: DisplayView,

    // Comms components:
    mailbox: MailboxReceiver,
    link: LinkMonitor,
    osc_sender: Option<OscSender>,

    // FPS
    last_update: Instant,
    fps: f32,

    // Debug overlay
    debug_flag: bool,
}

fn main() {
    init_logging();
    nannou::app(model).update(update).run();
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Config and socket come first so a bad port fails before any window opens.
fn start_listener() -> Result<(Config, MailboxReceiver)> {
    let config = Config::load()?;
    let listener = OscListener::bind(&config.osc)?;
    let (tx, rx) = mailbox();
    listener.spawn(tx)?;
    Ok((config, rx))
}

fn model(app: &App) -> Model {
    let (config, mailbox) = match start_listener() {
        Ok(started) => started,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    // Escape leaves fullscreen instead of quitting
    app.set_exit_on_escape(false);

    let window = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build();
    if let Err(err) = window {
        error!("Failed to create window: {:?}", err);
        process::exit(1);
    }

    let osc_sender = match OscSender::for_listener(&config.osc) {
        Ok(sender) => Some(sender),
        Err(err) => {
            warn!("Keyboard test messages disabled: {}", err);
            None
        }
    };

    let now = Instant::now();
    Model {
        state: DisplayState::default(),
        view: DisplayView::new(config.style.clone()),
        mailbox,
        link: LinkMonitor::new(config.link_timeout(), now),
        osc_sender,
        last_update: now,
        fps: 0.0,
        debug_flag: false,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::F => {
            let window = app.main_window();
            window.set_fullscreen(!window.is_fullscreen());
        }
        Key::Escape => app.main_window().set_fullscreen(false),
        Key::P => model.debug_flag = !model.debug_flag,
        _ => send_test_message(model, key),
    }
}

// Loopback messages go through the socket like any external sender, so the
// display only changes once the listener has handled them.
fn send_test_message(model: &Model, key: Key) {
    let Some(sender) = &model.osc_sender else {
        return;
    };
    let state = model.state;

    match key {
        Key::Left => {
            sender.send_enc_a(state.left.saturating_sub(1));
        }
        Key::Right => {
            sender.send_enc_a(state.left.saturating_add(1));
        }
        Key::Down => {
            sender.send_enc_b(state.right.saturating_sub(1));
        }
        Key::Up => {
            sender.send_enc_b(state.right.saturating_add(1));
        }
        Key::Space => {
            sender.send_reset();
        }
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32().max(f32::EPSILON);
    }

    // Take whatever the listener posted since the last frame
    for transition in apply_pending(&mut model.state, &mut model.link, &model.mailbox, now) {
        log_transition(transition);
    }
}

fn log_transition(transition: LinkTransition) {
    match transition {
        LinkTransition::Lost => warn!("No data coming from the network"),
        LinkTransition::Resumed => info!("Receiving new data from the sensors"),
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window = app.window_rect();

    model.view.draw(&draw, window, &model.state);

    if model.debug_flag {
        draw_debug_overlay(&draw, window, model);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        error!("Failed to render frame: {:?}", err);
    }
}

fn draw_debug_overlay(draw: &Draw, window: Rect, model: &Model) {
    let text = format!("{}\nFPS: {:.1}", model.link.status().label(), model.fps);
    draw.text(&text)
        .color(WHITE)
        .font_size(14)
        .left_justify()
        .w_h(window.w() - 20.0, 40.0)
        .x_y(window.x(), window.top() - 30.0);
}
