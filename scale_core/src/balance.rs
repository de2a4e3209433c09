//! The balance controller: explicit state plus one method per input event.
//!
//! The controller is display-agnostic. The visual surface forwards its
//! pointer/button events here and re-renders from `readout()` / `status()`
//! after each call; no event method returns an error, unmet preconditions
//! are silent no-ops.

use std::time::Duration;

use scale_traits::{Clock, MonotonicClock, Noise, UniformNoise};

use crate::display::{Readout, StatusMessage};
use crate::error::{BuildError, Result};
use crate::geometry::{PanZone, Point, Rect};
use crate::gesture::{DragSession, PointerInput};
use crate::objects::{MassTable, ObjectId, ObjectKind};
use crate::pan::PanContents;
use crate::timer::HoldTimer;
use crate::units::quantize_to_cg;

#[derive(Debug, Clone, Copy)]
struct SceneObject {
    kind: ObjectKind,
    /// Bounding box in viewport coordinates.
    rect: Rect,
}

pub struct Balance {
    clock: Box<dyn Clock>,
    noise: Box<dyn Noise>,
    masses: MassTable,
    hold_delay: Duration,
    drift_bound_g: f32,

    objects: Vec<SceneObject>,
    pan_zone: PanZone,
    /// Current page scroll; fixes drop positions in document coordinates.
    scroll: Point,

    powered_on: bool,
    calibrating: bool,
    tare_cg: i32,
    drift_cg: i32,
    pan: PanContents,
    drag: Option<DragSession>,
    hold: HoldTimer,
}

impl core::fmt::Debug for Balance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Balance")
            .field("powered_on", &self.powered_on)
            .field("calibrating", &self.calibrating)
            .field("tare_cg", &self.tare_cg)
            .field("drift_cg", &self.drift_cg)
            .field("pan_len", &self.pan.len())
            .field("dragging", &self.drag.is_some())
            .finish()
    }
}

impl Balance {
    /// Start building a Balance.
    pub fn builder() -> BalanceBuilder {
        BalanceBuilder::default()
    }

    // ---- readout -------------------------------------------------------

    /// Sum of resolved masses of the objects on the pan. Held objects were
    /// removed at grab time and never count.
    pub fn raw_mass_cg(&self) -> i32 {
        self.pan
            .iter()
            .filter_map(|id| self.objects.get(id.index()))
            .fold(0i32, |acc, obj| {
                acc.saturating_add(self.masses.mass_cg(obj.kind))
            })
    }

    pub fn readout(&self) -> Readout {
        if !self.powered_on {
            return Readout::Blank;
        }
        if self.calibrating {
            return Readout::Cal;
        }
        let net = self
            .raw_mass_cg()
            .saturating_add(self.drift_cg)
            .saturating_sub(self.tare_cg);
        Readout::Mass(net)
    }

    pub fn status(&self) -> StatusMessage {
        if !self.powered_on {
            return StatusMessage::PowerOff;
        }
        if self.calibrating {
            return StatusMessage::Calibrating;
        }
        let powder_on_pan = self.pan_kinds().any(ObjectKind::is_powder);
        if powder_on_pan && !self.pan_kinds().any(ObjectKind::is_container) {
            return StatusMessage::NeedsContainer;
        }
        StatusMessage::Ready
    }

    fn pan_kinds(&self) -> impl Iterator<Item = ObjectKind> + '_ {
        self.pan
            .iter()
            .filter_map(|id| self.objects.get(id.index()).map(|o| o.kind))
    }

    // ---- power / zero / settings --------------------------------------

    /// Power button activation: OFF -> ON draws a fresh drift offset and
    /// tares away whatever already rests on the pan; ON -> OFF clears the
    /// calibrating flag unconditionally.
    pub fn press_power(&mut self) {
        self.pump_hold();
        self.powered_on = !self.powered_on;
        if self.powered_on {
            self.drift_cg = quantize_to_cg(self.noise.sample(self.drift_bound_g));
            self.tare_cg = self.raw_mass_cg();
            tracing::debug!(
                drift_cg = self.drift_cg,
                tare_cg = self.tare_cg,
                "scale powered on"
            );
        } else {
            self.calibrating = false;
            tracing::debug!("scale powered off");
        }
    }

    /// Zero/tare button: only effective while ON and not calibrating.
    /// Makes the displayed mass exactly 0.0 for the current pan contents.
    pub fn press_zero(&mut self) {
        self.pump_hold();
        if !self.powered_on || self.calibrating {
            return;
        }
        self.tare_cg = self.raw_mass_cg().saturating_add(self.drift_cg);
        tracing::debug!(tare_cg = self.tare_cg, "zero set");
    }

    /// Settings press-start: arms the calibration long-press. A press that
    /// begins while the scale is off (or already calibrating) never arms.
    pub fn settings_press_start(&mut self) {
        self.pump_hold();
        if !self.powered_on || self.calibrating {
            return;
        }
        let now = self.clock.now();
        self.hold.arm(now, self.hold_delay);
    }

    /// Settings press-end/leave/cancel: cancels the pending long-press.
    /// A release exactly on the threshold does not enter calibration.
    pub fn settings_press_end(&mut self) {
        let now = self.clock.now();
        if self.hold.fire_if_passed(now) {
            self.enter_calibration();
        }
        self.hold.cancel();
    }

    /// Timer pump. The host event loop calls this periodically so the
    /// long-press can fire while the press is still held; every event
    /// method also pumps, which preserves dispatch ordering.
    pub fn tick(&mut self) {
        self.pump_hold();
    }

    fn pump_hold(&mut self) {
        let now = self.clock.now();
        if self.hold.fire_if_due(now) {
            self.enter_calibration();
        }
    }

    fn enter_calibration(&mut self) {
        // The transition only exists from ON; a hold that spanned a
        // power-off expires without effect.
        if self.powered_on && !self.calibrating {
            self.calibrating = true;
            tracing::debug!("calibration mode entered");
        }
    }

    // ---- drag lifecycle ------------------------------------------------

    /// Gesture start on an object. Records the grab offset, removes the
    /// object from the pan immediately (held objects never count toward the
    /// reading), and starts tracking the pointer. The surface is expected
    /// to float the element above other content for the duration.
    pub fn pointer_down(&mut self, id: ObjectId, input: &PointerInput) {
        self.pump_hold();
        let Some(p) = input.position() else { return };
        let Some(obj) = self.objects.get(id.index()) else {
            tracing::trace!(?id, "pointer down on unknown object");
            return;
        };
        if self.pan.remove(id) {
            tracing::trace!(?id, "lifted off pan");
        }
        let grab = Point::new(p.x - obj.rect.left, p.y - obj.rect.top);
        self.drag = Some(DragSession { id, grab });
    }

    /// Gesture motion: the grab point tracks the pointer. A move with no
    /// active session is a no-op. The surface must suppress default
    /// scrolling/selection while a drag is active.
    pub fn pointer_move(&mut self, input: &PointerInput) {
        self.pump_hold();
        let Some(session) = self.drag else { return };
        let Some(p) = input.position() else { return };
        self.place(session.id, p, session.grab);
    }

    /// Gesture end: fixes the final position, tests the object's center
    /// against the pan trapezoid, and adds it to the pan idempotently when
    /// inside. The session is cleared unconditionally.
    pub fn pointer_up(&mut self, input: &PointerInput) {
        self.pump_hold();
        let Some(session) = self.drag.take() else { return };
        if let Some(p) = input.position() {
            self.place(session.id, p, session.grab);
        }
        let Some(obj) = self.objects.get(session.id.index()) else {
            return;
        };
        let center = obj.rect.center();
        if self.pan_zone.contains(center) {
            if self.pan.insert(session.id) {
                tracing::debug!(id = ?session.id, kind = ?obj.kind, "placed on pan");
            }
        } else {
            tracing::trace!(id = ?session.id, "dropped outside pan");
        }
    }

    fn place(&mut self, id: ObjectId, pointer: Point, grab: Point) {
        if let Some(obj) = self.objects.get_mut(id.index()) {
            obj.rect.left = pointer.x - grab.x;
            obj.rect.top = pointer.y - grab.y;
        }
    }

    // ---- scene accessors ----------------------------------------------

    pub fn is_powered_on(&self) -> bool {
        self.powered_on
    }

    pub fn is_calibrating(&self) -> bool {
        self.calibrating
    }

    pub fn pan_contents(&self) -> &PanContents {
        &self.pan
    }

    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, ObjectKind)> + '_ {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| (ObjectId(i), o.kind))
    }

    pub fn object_kind(&self, id: ObjectId) -> Option<ObjectKind> {
        self.objects.get(id.index()).map(|o| o.kind)
    }

    /// Object bounding box in viewport coordinates.
    pub fn object_rect(&self, id: ObjectId) -> Option<Rect> {
        self.objects.get(id.index()).map(|o| o.rect)
    }

    /// Object bounding box fixed in document coordinates (viewport plus
    /// the current scroll offsets).
    pub fn object_document_rect(&self, id: ObjectId) -> Option<Rect> {
        self.objects.get(id.index()).map(|o| {
            Rect::new(
                o.rect.left + self.scroll.x,
                o.rect.top + self.scroll.y,
                o.rect.width,
                o.rect.height,
            )
        })
    }

    pub fn set_scroll(&mut self, scroll: Point) {
        self.scroll = scroll;
    }

    /// Surface re-layout hooks.
    pub fn set_object_rect(&mut self, id: ObjectId, rect: Rect) {
        if let Some(obj) = self.objects.get_mut(id.index()) {
            obj.rect = rect;
        }
    }

    pub fn set_pan_rect(&mut self, rect: Rect) {
        self.pan_zone.set_rect(rect);
    }
}

/// Builder for `Balance`. All fields are validated on `try_build()`.
pub struct BalanceBuilder {
    masses: Option<MassTable>,
    pan_rect: Option<Rect>,
    top_inset_ratio: f32,
    drift_bound_g: f32,
    hold_ms: u64,
    clock: Option<Box<dyn Clock>>,
    noise: Option<Box<dyn Noise>>,
    objects: Vec<(ObjectKind, Rect)>,
}

impl Default for BalanceBuilder {
    fn default() -> Self {
        Self {
            masses: None,
            pan_rect: None,
            top_inset_ratio: 0.2,
            drift_bound_g: 0.2,
            hold_ms: 2000,
            clock: None,
            noise: None,
            objects: Vec::new(),
        }
    }
}

impl BalanceBuilder {
    pub fn with_masses(mut self, masses: MassTable) -> Self {
        self.masses = Some(masses);
        self
    }

    pub fn with_pan_rect(mut self, rect: Rect) -> Self {
        self.pan_rect = Some(rect);
        self
    }

    pub fn with_top_inset_ratio(mut self, ratio: f32) -> Self {
        self.top_inset_ratio = ratio;
        self
    }

    pub fn with_drift_bound_g(mut self, bound: f32) -> Self {
        self.drift_bound_g = bound;
        self
    }

    pub fn with_hold_ms(mut self, ms: u64) -> Self {
        self.hold_ms = ms;
        self
    }

    /// Provide a custom clock; defaults to `MonotonicClock`.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Provide a custom drift source; defaults to `UniformNoise`.
    pub fn with_noise(mut self, noise: Box<dyn Noise>) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Register a draggable object with its initial viewport rect.
    /// Handles are assigned in registration order.
    pub fn with_object(mut self, kind: ObjectKind, rect: Rect) -> Self {
        self.objects.push((kind, rect));
        self
    }

    /// Apply masses and behavior knobs from a loaded config file.
    pub fn with_config(mut self, cfg: &scale_config::Config) -> Self {
        self.masses = Some(MassTable::from(&cfg.masses));
        self.drift_bound_g = cfg.behavior.drift_bound_g;
        self.hold_ms = cfg.behavior.hold_ms;
        self.top_inset_ratio = cfg.pan.top_inset_ratio;
        self
    }

    pub fn try_build(self) -> Result<Balance> {
        let pan_rect = self
            .pan_rect
            .ok_or_else(|| eyre::Report::new(BuildError::MissingPanRect))?;

        if !(rect_is_sane(&pan_rect)) {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "pan rect must have finite positive dimensions",
            )));
        }
        if !self.top_inset_ratio.is_finite() || !(0.0..0.5).contains(&self.top_inset_ratio) {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "top inset ratio must be in [0, 0.5)",
            )));
        }
        if !self.drift_bound_g.is_finite() || self.drift_bound_g < 0.0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "drift bound must be >= 0",
            )));
        }
        if self.hold_ms == 0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "hold delay must be >= 1 ms",
            )));
        }
        for (_, rect) in &self.objects {
            if !rect_is_sane(rect) {
                return Err(eyre::Report::new(BuildError::InvalidConfig(
                    "object rect must have finite positive dimensions",
                )));
            }
        }

        let objects = self
            .objects
            .into_iter()
            .map(|(kind, rect)| SceneObject { kind, rect })
            .collect();

        Ok(Balance {
            clock: self.clock.unwrap_or_else(|| Box::new(MonotonicClock::new())),
            noise: self.noise.unwrap_or_else(|| Box::new(UniformNoise::new())),
            masses: self.masses.unwrap_or_default(),
            hold_delay: Duration::from_millis(self.hold_ms),
            drift_bound_g: self.drift_bound_g,
            objects,
            pan_zone: PanZone::new(pan_rect, self.top_inset_ratio),
            scroll: Point::default(),
            powered_on: false,
            calibrating: false,
            tare_cg: 0,
            drift_cg: 0,
            pan: PanContents::new(),
            drag: None,
            hold: HoldTimer::new(),
        })
    }
}

fn rect_is_sane(r: &Rect) -> bool {
    r.left.is_finite()
        && r.top.is_finite()
        && r.width.is_finite()
        && r.height.is_finite()
        && r.width > 0.0
        && r.height > 0.0
}
