use crate::animation::lerp::Lerp;
use crate::animation::scheduler::{Scheduler, UpdateFn};
use crate::animation::timeline::TimelineSpec;
use crate::camera::viewport::Camera;
use crate::engine::opts::EngineOpts;
use crate::engine::registry::{SoundRegistry, TextureRegistry};
use crate::foundation::arena::Arena;
use crate::foundation::core::{Canvas, Vec2};
use crate::foundation::error::{VantageError, VantageResult};
use crate::foundation::ids::{ChannelId, ObjectId, TextureHandle, TimelineId};
use crate::platform::headless::{HeadlessWindow, NullAssets, NullAudio};
use crate::platform::{AssetLoader, AudioMixer, CursorKind, Rasterizer, Window};
use crate::render::compose::compose;
use crate::render::plan::DrawList;
use crate::scene::collision::sweep;
use crate::scene::def::{KindData, ObjectDef};
use crate::scene::hitbox::Hitbox;
use crate::scene::object::{
    BUTTON_HOVER, BUTTON_IDLE, CHECKBOX_CHECKED, CHECKBOX_UNCHECKED, CLICK_HITBOX, Interaction,
    Object, ObjectKind, POINTER_LAYER,
};

/// Pointer position and the interactive objects it is engaged with.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PointerState {
    pub(crate) position: Vec2,
    pub(crate) hovered: Option<ObjectId>,
    pub(crate) pressed: Option<ObjectId>,
}

/// Owns every subsystem: objects, timelines, camera, asset registries and collaborators.
///
/// One engine drives one window. All mutation happens on the thread that calls
/// [`Engine::update`]; callbacks receive `&mut Engine` and may create or destroy objects and
/// timelines freely.
pub struct Engine {
    pub(crate) opts: EngineOpts,
    pub(crate) objects: Arena<ObjectId, Object>,
    pub(crate) scheduler: Scheduler,
    pub(crate) camera: Camera,
    pub(crate) textures: TextureRegistry,
    pub(crate) sounds: SoundRegistry,
    pub(crate) window: Box<dyn Window>,
    pub(crate) assets: Box<dyn AssetLoader>,
    pub(crate) audio: Box<dyn AudioMixer>,
    pub(crate) paused: bool,
    pub(crate) follow: Option<ObjectId>,
    pub(crate) camera_timeline: Option<TimelineId>,
    pub(crate) pointer: PointerState,
    pub(crate) cursor: CursorKind,
    frame: u64,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("opts", &self.opts)
            .field("objects", &self.objects.len())
            .field("timelines", &self.scheduler.len())
            .field("camera", &self.camera)
            .field("paused", &self.paused)
            .field("frame", &self.frame)
            .finish()
    }
}

impl Engine {
    /// Build an engine over the given collaborators.
    pub fn new(
        opts: EngineOpts,
        window: Box<dyn Window>,
        assets: Box<dyn AssetLoader>,
        audio: Box<dyn AudioMixer>,
    ) -> VantageResult<Self> {
        opts.validate()?;
        let size = window.size();
        let canvas = Canvas::new(size.width, size.height)?;
        let mut camera = Camera::new(canvas, opts.game_width, opts.interface_width)?;
        camera.set_smoothing(opts.camera_smoothing);
        camera.set_padding(opts.camera_padding);
        camera.set_inversion(opts.invert_x, opts.invert_y);

        Ok(Self {
            opts,
            objects: Arena::new(),
            scheduler: Scheduler::new(),
            camera,
            textures: TextureRegistry::new(),
            sounds: SoundRegistry::new(),
            window,
            assets,
            audio,
            paused: false,
            follow: None,
            camera_timeline: None,
            pointer: PointerState::default(),
            cursor: CursorKind::Arrow,
            frame: 0,
        })
    }

    /// Engine with in-memory collaborators and a window of `canvas` size.
    pub fn headless(opts: EngineOpts, canvas: Canvas) -> VantageResult<Self> {
        Self::new(
            opts,
            Box::new(HeadlessWindow::new(canvas)),
            Box::new(NullAssets::new()),
            Box::new(NullAudio::new()),
        )
    }

    /// Options the engine was built with.
    pub fn opts(&self) -> &EngineOpts {
        &self.opts
    }

    /// Viewport.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable viewport.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Frames updated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Globally paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze pause-sensitive timelines, sprites and sounds.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            tracing::debug!(paused, "global pause changed");
        }
        self.paused = paused;
        self.audio.set_paused(paused);
    }

    /// Cursor shape last requested from the window.
    pub fn cursor(&self) -> CursorKind {
        self.cursor
    }

    pub(crate) fn apply_cursor(&mut self, cursor: CursorKind) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.window.set_cursor(cursor);
        }
    }

    /// Loaded textures.
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// Load the texture at `path` and register it as `name`.
    pub fn load_texture(
        &mut self,
        name: impl Into<String>,
        path: &str,
    ) -> VantageResult<TextureHandle> {
        let handle = self.assets.load_texture(path)?;
        self.textures.insert(name, handle);
        Ok(handle)
    }

    /// Load the sound at `path` and register it as `name`.
    pub fn load_sound(&mut self, name: impl Into<String>, path: &str) -> VantageResult<()> {
        let handle = self.assets.load_sound(path)?;
        self.sounds.insert(name, handle);
        Ok(())
    }

    /// Play the sound registered as `name`.
    pub fn play_sound(
        &mut self,
        name: &str,
        loops: i32,
        pause_sensitive: bool,
    ) -> VantageResult<ChannelId> {
        let Some(handle) = self.sounds.get(name) else {
            tracing::warn!(name, "sound not found");
            return Err(VantageError::lookup(format!("sound '{name}' not found")));
        };
        self.audio.play(handle, loops, pause_sensitive)
    }

    /// Live object behind `id`.
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    /// Whether `id` is live.
    pub fn contains_object(&self, id: ObjectId) -> bool {
        self.objects.contains(id)
    }

    /// Live objects in slot order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &Object)> + '_ {
        self.objects.iter()
    }

    /// Number of live objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub(crate) fn lookup(&self, id: ObjectId) -> VantageResult<&Object> {
        self.objects.get(id).ok_or_else(|| missing_object(id))
    }

    pub(crate) fn lookup_mut(&mut self, id: ObjectId) -> VantageResult<&mut Object> {
        self.objects.get_mut(id).ok_or_else(|| missing_object(id))
    }

    /// Add a basic object built in code.
    pub fn insert_object(&mut self, object: Object) -> ObjectId {
        let id = self.store(object);
        tracing::debug!(%id, "object created");
        id
    }

    fn store(&mut self, mut object: Object) -> ObjectId {
        object.set_hitbox_snap_deg(self.opts.hitbox_snap_deg);
        self.objects.insert(object)
    }

    /// Create an object of any kind from its definition.
    ///
    /// Buttons need `idle` and `hover` surfaces, checkboxes `unchecked` and `checked`. Both
    /// get a `click` hitbox matching their first state surface unless one is defined. A
    /// button label is placed relative to the button: its translate is an offset and its
    /// index counts up from just above the button.
    pub fn create_object(&mut self, def: ObjectDef) -> VantageResult<ObjectId> {
        let ObjectDef { data, kind } = def;
        let object_kind = kind.kind();
        let click_source = match object_kind {
            ObjectKind::Basic => None,
            ObjectKind::Button => Some(require_surfaces(&data, &[BUTTON_IDLE, BUTTON_HOVER])?),
            ObjectKind::Checkbox => Some(require_surfaces(
                &data,
                &[CHECKBOX_UNCHECKED, CHECKBOX_CHECKED],
            )?),
        };

        let mut object = data.build(object_kind);
        match kind {
            KindData::Basic => {}
            KindData::Button(button) => {
                object.interaction = Some(Interaction {
                    enabled: button.enabled,
                    ..Interaction::default()
                });
                if let Some(label) = button.label {
                    let mut label = *label;
                    label.transform.translate += object.transform().translate;
                    label.index = object.index().saturating_add(1).saturating_add(label.index);
                    label.absolute = object.absolute();
                    label.hidden |= object.is_hidden();
                    let label_id = self.store(label.build(ObjectKind::Basic));
                    object.label = Some(label_id);
                }
            }
            KindData::Checkbox(checkbox) => {
                object.interaction = Some(Interaction {
                    enabled: checkbox.enabled,
                    ..Interaction::default()
                });
                object.checked = Some(checkbox.checked);
            }
        }

        if let Some(source) = click_source
            && object.hitbox(CLICK_HITBOX).is_none()
        {
            let area = object
                .surface(source)
                .map(|s| *s.default_transform())
                .unwrap_or_default();
            object.add_hitbox(CLICK_HITBOX, Hitbox::new(area, POINTER_LAYER));
        }
        object.sync_widget_surfaces();

        let id = self.store(object);
        tracing::debug!(%id, kind = ?object_kind, "object created");
        Ok(id)
    }

    /// Parse a JSON object definition and create it.
    pub fn create_object_from_json(&mut self, json: &str) -> VantageResult<ObjectId> {
        self.create_object(ObjectDef::from_json_str(json)?)
    }

    /// Destroy an object, its label child and every timeline animating it.
    ///
    /// Returns `false` when `id` is stale.
    pub fn destroy_object(&mut self, id: ObjectId) -> bool {
        let Some(object) = self.objects.remove(id) else {
            tracing::warn!(%id, "destroy of missing object");
            return false;
        };
        let owned = self.scheduler.owned_by(id);
        for timeline in &owned {
            self.scheduler.remove(*timeline);
        }
        if !owned.is_empty() {
            tracing::debug!(%id, stopped = owned.len(), "timelines stopped with their object");
        }
        if self.follow == Some(id) {
            self.follow = None;
        }
        if self.pointer.hovered == Some(id) {
            self.pointer.hovered = None;
            self.apply_cursor(CursorKind::Arrow);
        }
        if self.pointer.pressed == Some(id) {
            self.pointer.pressed = None;
        }
        if let Some(label) = object.label {
            self.destroy_object(label);
        }
        tracing::debug!(%id, "object destroyed");
        true
    }

    /// Keep `target` inside the padded viewport every frame; `None` stops following.
    pub fn camera_follow(&mut self, target: Option<ObjectId>) {
        self.follow = target;
    }

    /// Object the camera follows.
    pub fn camera_target(&self) -> Option<ObjectId> {
        self.follow
    }

    /// Glide the camera to `target` over a timeline, replacing any glide in progress.
    ///
    /// Following a target overrides the glide every frame; clear it first with
    /// `camera_follow(None)`.
    pub fn move_camera(&mut self, target: Vec2, spec: TimelineSpec) -> TimelineId {
        if let Some(previous) = self.camera_timeline.take() {
            self.scheduler.remove(previous);
        }
        let start = self.camera.translate();
        let update: UpdateFn = Box::new(move |engine: &mut Engine, blend: f64| {
            engine
                .camera
                .set_translate(<Vec2 as Lerp>::lerp(&start, &target, blend));
        });
        let id = self.create_timeline(spec, Some(update), None);
        self.camera_timeline = Some(id);
        id
    }

    /// Advance one frame by `dt_secs` of wall time.
    ///
    /// Order: timelines, sprite frames, collisions, camera follow. Each phase sees the
    /// effects of the previous ones.
    #[tracing::instrument(level = "trace", skip(self), fields(frame = self.frame))]
    pub fn update(&mut self, dt_secs: f64) {
        let dt_ms = if dt_secs.is_finite() {
            (dt_secs * 1000.0).max(0.0)
        } else {
            0.0
        };
        self.frame += 1;
        self.sync_window();
        self.tick_timelines(dt_ms);
        self.advance_sprites(dt_ms);
        self.dispatch_collisions();
        self.follow_camera(dt_ms);
    }

    fn sync_window(&mut self) {
        let size = self.window.size();
        if size != self.camera.canvas() {
            match Canvas::new(size.width, size.height) {
                Ok(canvas) => self.camera.set_canvas(canvas),
                Err(err) => tracing::debug!(%err, "ignoring degenerate window size"),
            }
        }
    }

    fn advance_sprites(&mut self, dt_ms: f64) {
        let paused = self.paused;
        for (_, object) in self.objects.iter_mut() {
            object.advance_sprites(dt_ms, paused);
        }
    }

    /// Run the collision sweep and fire callbacks.
    ///
    /// Overlaps are collected before any callback runs. An event whose hitbox has been
    /// removed by an earlier callback in the same sweep is dropped.
    pub fn dispatch_collisions(&mut self) {
        let hits = sweep(&self.objects, self.opts.hitbox_snap_deg);
        for hit in hits {
            let Some(mut callback) = self
                .objects
                .get_mut(hit.object)
                .and_then(|o| o.hitbox_mut(&hit.hitbox))
                .and_then(|h| h.on_collide.take())
            else {
                continue;
            };
            callback(self, &hit);
            if let Some(hitbox) = self
                .objects
                .get_mut(hit.object)
                .and_then(|o| o.hitbox_mut(&hit.hitbox))
            {
                hitbox.on_collide.get_or_insert(callback);
            }
        }
    }

    fn follow_camera(&mut self, dt_ms: f64) {
        let Some(target) = self.follow else {
            return;
        };
        match self.objects.get(target) {
            Some(object) => {
                let position = object.transform().translate;
                self.camera.follow(position, dt_ms);
            }
            None => self.follow = None,
        }
    }

    /// Draw calls for the current state.
    pub fn compose(&self) -> DrawList {
        compose(&self.objects, &self.camera, &self.textures, &self.opts)
    }

    /// Compose the frame and hand it to `rasterizer`.
    #[tracing::instrument(level = "trace", skip(self, rasterizer), fields(frame = self.frame))]
    pub fn render(&self, rasterizer: &mut dyn Rasterizer) -> VantageResult<DrawList> {
        let list = self.compose();
        crate::render::compose::submit(&list, rasterizer)?;
        Ok(list)
    }
}

fn missing_object(id: ObjectId) -> VantageError {
    tracing::warn!(%id, "object not found");
    VantageError::lookup(format!("object {id} not found"))
}

fn require_surfaces<'a>(
    data: &crate::scene::def::ObjectData,
    names: &[&'a str],
) -> VantageResult<&'a str> {
    for name in names {
        if !data.surfaces.contains_key(*name) {
            return Err(VantageError::validation(format!(
                "missing required surface '{name}'"
            )));
        }
    }
    names
        .first()
        .copied()
        .ok_or_else(|| VantageError::validation("no required surfaces given"))
}

#[cfg(test)]
#[path = "../../tests/unit/engine/context.rs"]
mod tests;
