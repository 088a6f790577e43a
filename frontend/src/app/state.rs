//! Application State
//!
//! This module defines the main application state and initialization logic.
//! It implements the MVU (Model-View-Update) pattern's Controller component.
//!
//! # Architecture
//!
//! The `App` struct contains:
//! - **State**: camera and microphone intent, roster, meeting details
//! - **Camera**: the resource manager owning the bound capture stream
//! - **Textures**: local video frame and roster portraits
//! - **Communication**: mpsc channels for logic thread coordination
//! - **Notifications**: toast system for user feedback
//!
//! # MVU Loop
//!
//! The `eframe::App::update()` implementation follows this flow:
//! 1. Process events from logic thread (non-blocking)
//! 2. Pull the newest camera frame into the local texture
//! 3. Render the call view (pure function of state)
//! 4. Handle UI commands from view (state mutations)

use crate::components::Toast;
use crate::config::AppConfig;
use crate::events::{LogicCommand, LogicEvent};
use crate::models::{CallInfo, Participant, roster_from_names};
use crate::pages::call::{Call, CallState, CallView};
use media::{CameraManager, CameraStatus, MediaConstraints, OpenCvDevices, PortraitSize};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;
use tracing::{debug, info, warn};

// The clock only shows minutes
const IDLE_REPAINT: Duration = Duration::from_secs(1);

/// Main application state - MVU Controller
pub struct App {
    // Config
    pub(super) config: AppConfig,

    // Call State
    pub(super) call_info: CallInfo,
    pub(super) participants: Vec<Participant>,
    pub(super) mic_enabled: bool,
    pub(super) camera: CameraManager,
    pub(super) call_state: CallState,

    // UI State
    pub(super) current_toast: Option<Toast>,

    // Logic Thread Communication
    pub(super) logic_cmd_tx: Sender<LogicCommand>,
    pub(super) logic_evt_rx: Receiver<LogicEvent>,
}

impl App {
    /// Create a new App instance from configuration.
    /// Logging must already be initialized.
    pub fn new(config: AppConfig) -> Self {
        info!("[APP] Initializing application...");

        let (logic_cmd_tx, logic_cmd_rx) = channel();
        let (logic_evt_tx, logic_evt_rx) = channel();

        let constraints = MediaConstraints::video_only(config.camera_device, config.camera_fps);
        let camera = CameraManager::new(constraints);

        info!("[APP] Starting logic thread...");
        let intent = camera.current_intent();
        std::thread::spawn(move || {
            crate::logic::run_logic_thread(
                logic_cmd_rx,
                logic_evt_tx,
                Box::new(OpenCvDevices::new()),
                intent,
            );
        });

        let participants = roster_from_names(&config.participants);

        let mut app = Self {
            call_info: CallInfo::new(config.user_name.clone(), config.meeting_code.clone()),
            call_state: CallState::new(participants.len()),
            participants,
            mic_enabled: config.mic_on_start,
            camera,
            current_toast: None,
            logic_cmd_tx,
            logic_evt_rx,
            config,
        };

        app.request_portraits();

        if app.config.camera_on_start {
            let request = app.camera.set_enabled(true);
            app.dispatch_acquire(request);
        }

        info!(
            "[APP] Application initialized - user: '{}', meeting: {}, {} participants",
            app.call_info.user_name,
            app.call_info.meeting_code,
            app.participants.len()
        );
        app
    }

    /// Asks the logic thread for every roster portrait
    fn request_portraits(&mut self) {
        let Some(portraits) = self.config.portrait_paths(self.participants.len()) else {
            info!("[PORTRAIT] No portraits_dir configured, showing initials");
            self.call_state.fail_all_portraits();
            return;
        };

        let command = LogicCommand::LoadPortraits {
            portraits,
            size: PortraitSize::default(),
        };

        if self.logic_cmd_tx.send(command).is_err() {
            warn!("[PORTRAIT] Logic thread unavailable, showing initials only");
            self.call_state.fail_all_portraits();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- MVU UPDATE LOOP ---

        // 1. Process all pending logic events (from background threads)
        while let Ok(event) = self.logic_evt_rx.try_recv() {
            self.handle_logic_event(ctx, event);
        }

        // 2. Refresh the local texture from the bound stream
        self.refresh_local_video(ctx);

        // 3. Render the view and collect UI commands
        let ui_command = self.render_view(ctx);

        // 4. Process UI command (if any)
        if let Some(command) = ui_command {
            self.handle_ui_command(command);
        }

        // 5. Render toast notification (if any)
        self.render_toast(ctx);

        // 6. Keep polling while the camera is starting or streaming
        match self.camera.status() {
            CameraStatus::Live | CameraStatus::Starting => {
                ctx.request_repaint_after(self.frame_interval());
            }
            CameraStatus::Off | CameraStatus::Failed => ctx.request_repaint_after(IDLE_REPAINT),
        }
    }

    /// Called when the app is about to close
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("[APP] Application shutting down...");

        self.camera.teardown();

        // Results already queued belong to a dead intent; this releases them.
        while let Ok(event) = self.logic_evt_rx.try_recv() {
            if let LogicEvent::CameraAcquired { token, result } = event {
                self.camera.complete(token, result);
            }
        }

        info!("[APP] Cleanup complete, goodbye!");
    }
}

impl App {
    /// Renders the call view and returns any UI command
    fn render_view(&self, ctx: &egui::Context) -> Option<crate::events::UiCommand> {
        let view = CallView {
            call_info: &self.call_info,
            clock: self.call_info.summary_now(),
            participants: &self.participants,
            mic_enabled: self.mic_enabled,
            camera_enabled: self.camera.is_enabled(),
            camera_error: self.camera.error(),
            state: &self.call_state,
        };

        Call::show(ctx, &view)
    }

    /// Uploads the newest camera frame, if any, to the local texture
    fn refresh_local_video(&mut self, ctx: &egui::Context) {
        if self.camera.status() != CameraStatus::Live {
            if self.call_state.local_texture.take().is_some() {
                debug!("[CAMERA] Local texture cleared");
            }
            return;
        }

        let Some(frame) = self.camera.take_latest_frame() else {
            return;
        };

        let image = crate::logic::rgb_to_color_image(&frame);
        match &mut self.call_state.local_texture {
            Some(texture) => texture.set(image, egui::TextureOptions::default()),
            None => {
                self.call_state.local_texture =
                    Some(ctx.load_texture("local_frame", image, egui::TextureOptions::default()));
            }
        }
    }

    fn frame_interval(&self) -> Duration {
        let fps = self.camera.constraints().fps;
        if fps.is_finite() && fps > 0.0 {
            Duration::from_secs_f64(1.0 / fps)
        } else {
            Duration::from_millis(33)
        }
    }

    /// Renders a toast notification if one exists
    fn render_toast(&mut self, ctx: &egui::Context) {
        // show() returns true if user clicked dismiss OR toast expired
        if let Some(toast) = &self.current_toast
            && toast.show(ctx)
        {
            self.current_toast = None;
        }
    }

    /// Shows an error toast notification to the user
    pub(super) fn show_error(&mut self, message: String) {
        self.current_toast = Some(Toast::error(message));
    }

    /// Shows a warning toast unless an error is already on screen
    pub(super) fn show_warning(&mut self, message: String) {
        if self.current_toast.as_ref().is_some_and(Toast::is_error) {
            return;
        }
        self.current_toast = Some(Toast::warning(message));
    }
}
