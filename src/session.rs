use image::DynamicImage;
use log::debug;

use crate::annotations::AnnotationStore;
use crate::detection;
use crate::export;
use crate::models::{Point, PointLabel};
use crate::view::ViewTransform;

/// On-screen hit target, in display pixels, for point deletion and for
/// grabbing the circle boundary. Divided by the zoom before comparing in
/// image space, so the target stays a constant size on screen.
pub const HIT_RADIUS_PX: f64 = 10.0;

/// Callbacks the session issues outward to its host shell. Rendering, status
/// bars, and popup menus all live behind this seam.
pub trait Shell {
    /// The display should be redrawn from the current store + view.
    fn request_refresh(&mut self);
    fn report_status(&mut self, message: &str);
    fn report_warning(&mut self, message: &str);
    fn report_error(&mut self, message: &str);
    /// Open a label chooser anchored at a display position. Returns None when
    /// the user dismisses it.
    fn prompt_label_choice(&mut self, at: Point, choices: &[PointLabel]) -> Option<PointLabel>;
}

/// Which gesture vocabulary is active. Each mode declares its accepted
/// pointer events in `Session::on_pointer` instead of rebinding handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Neutral,
    Picker,
    DrawFront,
    EditArea,
    Panning,
}

/// What an edit-area drag does, classified once on press from where the
/// press landed relative to the circle. Persists until the next press or
/// mode exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragIntent {
    #[default]
    None,
    Move,
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Move,
    Release,
}

/// A raw pointer event from the host, in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: Point,
    pub button: Button,
    /// The pan modifier (Alt on the reference bindings).
    pub alt: bool,
}

impl PointerEvent {
    pub fn press(pos: Point, button: Button) -> Self {
        Self {
            kind: PointerKind::Press,
            pos,
            button,
            alt: false,
        }
    }

    pub fn moved(pos: Point) -> Self {
        Self {
            kind: PointerKind::Move,
            pos,
            button: Button::Primary,
            alt: false,
        }
    }

    pub fn release(pos: Point) -> Self {
        Self {
            kind: PointerKind::Release,
            pos,
            button: Button::Primary,
            alt: false,
        }
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

/// Discrete commands from the host's menus and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ActivatePicker,
    StartDrawFront,
    EnableEditArea,
    Finish,
    ClearPoints,
    ClearFront,
    ClearArea,
    DetectArea,
    ExportRequested,
    CloseImage,
}

/// One annotation session: the loaded image, its annotations, the view
/// transform, and the interaction mode. Constructed empty, populated on
/// image load, fully reset on close or reload.
///
/// Single-threaded by construction: each pointer/command event is processed
/// to completion (transition, mutation, refresh signal) before the next.
pub struct Session {
    image: Option<DynamicImage>,
    store: AnnotationStore,
    view: ViewTransform,
    mode: Mode,
    /// Mode to restore when a pan drag releases.
    resume_mode: Mode,
    drag: DragIntent,
    /// Image-space position of the last processed edit-area event.
    last_image_pos: Option<Point>,
    /// Display-space position of the last pan event.
    pan_last: Option<Point>,
    viewport: (f64, f64),
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            image: None,
            store: AnnotationStore::new(),
            view: ViewTransform::new(),
            mode: Mode::Neutral,
            resume_mode: Mode::Neutral,
            drag: DragIntent::None,
            last_image_pos: None,
            pan_last: None,
            viewport: (0.0, 0.0),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn drag_intent(&self) -> DragIntent {
        self.drag
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// Direct store access, for hosts restoring annotations from a sidecar.
    /// Interactive edits go through `on_pointer`/`handle_command`.
    pub fn store_mut(&mut self) -> &mut AnnotationStore {
        &mut self.store
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    /// A decoded image arrived from the host. Resets all annotations and
    /// fits the view to the current viewport.
    pub fn on_image_loaded(&mut self, image: DynamicImage, shell: &mut dyn Shell) {
        self.view
            .set_image_size(Some((image.width(), image.height())));
        self.image = Some(image);
        self.store.clear_all();
        self.view.fit_to_viewport(self.viewport.0, self.viewport.1);
        self.enter_neutral();
        shell.report_status("Image loaded. Select an option from the menu.");
        shell.request_refresh();
    }

    pub fn on_viewport_resized(&mut self, width: f64, height: f64, shell: &mut dyn Shell) {
        self.viewport = (width, height);
        self.view.fit_to_viewport(width, height);
        shell.request_refresh();
    }

    /// Multiply the zoom, keeping the image point under `pivot` fixed on
    /// screen. Available in every mode; it is a viewport operation.
    pub fn zoom_at(&mut self, pivot: Point, factor: f64, shell: &mut dyn Shell) {
        if self.image.is_none() {
            return;
        }
        self.view.zoom_at(pivot, factor);
        shell.request_refresh();
    }

    /// Render the current annotations as the flat CSV export.
    pub fn export_csv(&self) -> String {
        export::render_csv(&self.store)
    }

    pub fn handle_command(&mut self, command: Command, shell: &mut dyn Shell) {
        debug!("command: {command:?} (mode: {:?})", self.mode);
        match command {
            Command::ActivatePicker => {
                if self.mode == Mode::Picker {
                    self.enter_neutral();
                    shell.report_status("Ready. Select an option from the menu.");
                } else {
                    self.switch_mode(Mode::Picker);
                    shell.report_status(
                        "Picker mode: left-click to label a point, right-click to delete.",
                    );
                }
            }
            Command::StartDrawFront => {
                if self.image.is_none() {
                    shell.report_warning("Please load an image first.");
                    return;
                }
                self.switch_mode(Mode::DrawFront);
                self.store.start_front();
                shell.report_status("Draw front: left-click to add points, Finish when done.");
            }
            Command::EnableEditArea => {
                if self.store.circle().is_none() {
                    shell.report_warning("No area detected to edit.");
                    return;
                }
                self.switch_mode(Mode::EditArea);
                shell.report_status(
                    "Edit area: drag inside to move, drag the boundary to resize.",
                );
            }
            Command::Finish => {
                if self.mode == Mode::DrawFront {
                    match self.store.finalize_front() {
                        Ok(()) if !self.store.front().is_empty() => {
                            shell.report_status("Feeding front finished.")
                        }
                        Ok(()) => {}
                        Err(err) => shell.report_warning(&err.to_string()),
                    }
                    shell.request_refresh();
                }
                self.enter_neutral();
                shell.report_status("Ready. Select an option from the menu.");
            }
            Command::ClearPoints => {
                self.store.clear_points();
                shell.request_refresh();
            }
            Command::ClearFront => {
                self.store.clear_front();
                shell.request_refresh();
            }
            Command::ClearArea => {
                self.store.clear_circle();
                if self.mode == Mode::EditArea {
                    self.enter_neutral();
                }
                shell.request_refresh();
            }
            Command::DetectArea => match &self.image {
                None => shell.report_warning("Please load an image first."),
                Some(img) => match detection::detect(img) {
                    Ok(circle) => {
                        self.store.set_circle(circle.center, circle.radius);
                        shell.report_status("Observation area detected.");
                        shell.request_refresh();
                    }
                    Err(err) => shell.report_error(&err.to_string()),
                },
            },
            Command::ExportRequested => {
                // The host picks the destination and writes the text from
                // `export_csv`; the core only guards the precondition.
                if self.image.is_none() {
                    shell.report_warning("No image loaded.");
                }
            }
            Command::CloseImage => {
                self.image = None;
                self.view.set_image_size(None);
                self.store.clear_all();
                self.enter_neutral();
                shell.report_status("Ready. Select an option from the menu.");
                shell.request_refresh();
            }
        }
    }

    pub fn on_pointer(&mut self, ev: PointerEvent, shell: &mut dyn Shell) {
        // An active pan owns the pointer until release.
        if self.mode == Mode::Panning {
            self.pointer_panning(ev, shell);
            return;
        }
        // The pan modifier wins over every mode's primary-click semantics.
        if ev.alt && ev.kind == PointerKind::Press && ev.button == Button::Primary {
            self.resume_mode = self.mode;
            self.mode = Mode::Panning;
            self.pan_last = Some(ev.pos);
            return;
        }
        match self.mode {
            Mode::Neutral | Mode::Panning => {}
            Mode::Picker => self.pointer_picker(ev, shell),
            Mode::DrawFront => self.pointer_draw_front(ev, shell),
            Mode::EditArea => self.pointer_edit_area(ev, shell),
        }
    }

    fn pointer_panning(&mut self, ev: PointerEvent, shell: &mut dyn Shell) {
        match ev.kind {
            PointerKind::Move => {
                if let Some(last) = self.pan_last {
                    self.view
                        .pan(Point::new(ev.pos.x - last.x, ev.pos.y - last.y));
                    self.pan_last = Some(ev.pos);
                    shell.request_refresh();
                }
            }
            PointerKind::Release => {
                self.pan_last = None;
                self.mode = self.resume_mode;
            }
            PointerKind::Press => {}
        }
    }

    fn pointer_picker(&mut self, ev: PointerEvent, shell: &mut dyn Shell) {
        if self.image.is_none() || ev.kind != PointerKind::Press {
            return;
        }
        let image_pos = self.view.to_image(ev.pos);
        match ev.button {
            Button::Primary => {
                if let Some(label) = shell.prompt_label_choice(ev.pos, &PointLabel::PICKER_CHOICES)
                {
                    self.store.add_point(label, image_pos);
                    shell.request_refresh();
                }
            }
            Button::Secondary => {
                let tolerance = HIT_RADIUS_PX / self.view.zoom();
                if self.store.remove_point_near(image_pos, tolerance) {
                    shell.request_refresh();
                }
            }
        }
    }

    fn pointer_draw_front(&mut self, ev: PointerEvent, shell: &mut dyn Shell) {
        if self.image.is_none() {
            return;
        }
        if ev.kind == PointerKind::Press && ev.button == Button::Primary {
            self.store.add_front_vertex(self.view.to_image(ev.pos));
            shell.request_refresh();
        }
    }

    fn pointer_edit_area(&mut self, ev: PointerEvent, shell: &mut dyn Shell) {
        match ev.kind {
            PointerKind::Press => {
                if ev.button != Button::Primary {
                    return;
                }
                let Some(circle) = self.store.circle() else {
                    return;
                };
                let p = self.view.to_image(ev.pos);
                let dist = p.distance_to(circle.center);
                let tolerance = HIT_RADIUS_PX / self.view.zoom();
                self.drag = if dist < circle.radius {
                    DragIntent::Move
                } else if (dist - circle.radius).abs() < tolerance {
                    DragIntent::Resize
                } else {
                    DragIntent::None
                };
                self.last_image_pos = Some(p);
            }
            PointerKind::Move => {
                let Some(last) = self.last_image_pos else {
                    return;
                };
                let p = self.view.to_image(ev.pos);
                match self.drag {
                    DragIntent::Move => {
                        let delta = Point::new(p.x - last.x, p.y - last.y);
                        if self.store.move_circle(delta).is_ok() {
                            shell.request_refresh();
                        }
                    }
                    DragIntent::Resize => {
                        if let Some(circle) = self.store.circle() {
                            let new_radius = p.distance_to(circle.center);
                            if self.store.resize_circle(new_radius, self.view.zoom()).is_ok() {
                                shell.request_refresh();
                            }
                        }
                    }
                    DragIntent::None => {}
                }
                // Updates after every processed drag-move regardless of intent.
                self.last_image_pos = Some(p);
            }
            // Intent persists until the next press re-classifies it.
            PointerKind::Release => {}
        }
    }

    fn switch_mode(&mut self, mode: Mode) {
        self.abandon_drag();
        self.mode = mode;
    }

    fn enter_neutral(&mut self) {
        self.abandon_drag();
        self.mode = Mode::Neutral;
    }

    fn abandon_drag(&mut self) {
        self.drag = DragIntent::None;
        self.last_image_pos = None;
        self.pan_last = None;
    }
}
