use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Longest integration step for the spring solver, in seconds.
const MAX_STEP: f64 = 1.0 / 240.0;
/// Frame deltas above this are treated as a stall (background tab) and clamped.
const MAX_FRAME: f64 = 0.1;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Shrinks the vector onto the circle of radius `max` if it lies outside it.
    pub fn clamp_length(self, max: f64) -> Self {
        let len = self.length();
        if len > max && len > 0.0 {
            self.scale(max / len)
        } else {
            self
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Screen-space box of an element, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepulsionConfig {
    /// Largest displacement a tag can be pushed, in pixels.
    pub max_shift: f64,
    /// Pointer distance at which the push saturates, in pixels.
    pub radius: f64,
}

impl Default for RepulsionConfig {
    fn default() -> Self {
        Self {
            max_shift: 50.0,
            radius: 120.0,
        }
    }
}

/// Offset that pushes an element centred at `center` away from `pointer`.
///
/// The push points from the pointer through the centre. Its strength grows
/// with the pointer distance until `radius`, where it reaches `max_shift`.
/// A pointer sitting exactly on the centre produces no push.
pub fn repel(center: Vec2, pointer: Vec2, config: &RepulsionConfig) -> Vec2 {
    let delta = pointer - center;
    let distance = delta.length();
    if distance == 0.0 || config.radius <= 0.0 {
        return Vec2::ZERO;
    }
    let strength = distance.min(config.radius) / config.radius;
    delta.scale(-config.max_shift * strength / distance)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub mass: f64,
    /// `None` selects critical damping for the given stiffness and mass.
    pub damping: Option<f64>,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 260.0,
            mass: 0.5,
            damping: None,
        }
    }
}

impl SpringConfig {
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn damping(&self) -> f64 {
        self.damping.unwrap_or_else(|| self.critical_damping())
    }

    /// Whether the fixed-step solver converges for these constants.
    ///
    /// Semi-implicit Euler with step `h` is stable while `h*c/m < 2` and
    /// `h^2*k/m + 2*h*c/m < 4`. Stiffer or heavier-damped springs diverge.
    pub fn is_stable(&self) -> bool {
        let a = MAX_STEP * MAX_STEP * self.stiffness / self.mass;
        let b = MAX_STEP * self.damping() / self.mass;
        a.is_finite() && b.is_finite() && b < 2.0 && a + 2.0 * b < 4.0
    }
}

/// One-dimensional damped spring chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            config,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advances the spring by `dt` seconds and reports whether it came to rest.
    pub fn step(&mut self, dt: f64) -> bool {
        let k = self.config.stiffness;
        let c = self.config.damping();
        let m = self.config.mass;
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = -k * (self.position - self.target) - c * self.velocity;
            self.velocity += force / m * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if !(self.position.is_finite() && self.velocity.is_finite()) {
            log::warn!("spring diverged, snapping to target {}", self.target);
            self.position = self.target;
            self.velocity = 0.0;
            return true;
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }
}

/// Smoothed pointer repulsion for one floating element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerFollow {
    x: Spring,
    y: Spring,
    repulsion: RepulsionConfig,
}

impl PointerFollow {
    pub fn new(repulsion: RepulsionConfig, spring: SpringConfig) -> Self {
        Self {
            x: Spring::new(spring),
            y: Spring::new(spring),
            repulsion,
        }
    }

    /// Retargets toward the repulsion offset for a pointer inside `rect`.
    pub fn on_pointer_move(&mut self, rect: Rect, pointer: Vec2) -> Vec2 {
        let target = repel(rect.center(), pointer, &self.repulsion);
        self.x.set_target(target.x);
        self.y.set_target(target.y);
        target
    }

    pub fn on_pointer_leave(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// Advances both axes; `true` once the element sits still on its target.
    pub fn tick(&mut self, dt: f64) -> bool {
        let x_rest = self.x.step(dt);
        let y_rest = self.y.step(dt);
        x_rest && y_rest
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    /// Displayed offset, never further than `max_shift` from the rest position.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.position(), self.y.position()).clamp_length(self.repulsion.max_shift)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Fast start with a long soft landing, used for content reveals.
    pub const SMOOTH: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);
    /// Slight overshoot, used for badges and tags popping in.
    pub const OVERSHOOT: Easing = Easing::CubicBezier(0.34, 1.56, 0.64, 1.0);
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "linear"),
            Easing::EaseInOut => write!(f, "ease-in-out"),
            Easing::CubicBezier(a, b, c, d) => write!(f, "cubic-bezier({a}, {b}, {c}, {d})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing,
        }
    }

    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// CSS `transition` value applying this timing to every listed property.
    pub fn css(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|p| {
                format!(
                    "{p} {}ms {} {}ms",
                    self.duration_ms, self.easing, self.delay_ms
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Hidden/visible pair for content that fades in once it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub rise_px: f64,
    pub scale: f64,
    pub transition: Transition,
}

impl Reveal {
    pub const fn rise(rise_px: f64, duration_ms: u32) -> Self {
        Self {
            rise_px,
            scale: 1.0,
            transition: Transition::new(duration_ms, Easing::SMOOTH),
        }
    }

    pub const fn pop() -> Self {
        Self {
            rise_px: 0.0,
            scale: 0.8,
            transition: Transition::new(500, Easing::OVERSHOOT),
        }
    }

    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self {
            transition: self.transition.with_delay(delay_ms),
            ..self
        }
    }

    pub fn style(&self, visible: bool) -> String {
        let transition = self.transition.css(&["opacity", "transform"]);
        if visible {
            format!("opacity: 1; transform: none; transition: {transition};")
        } else {
            format!(
                "opacity: 0; transform: translateY({}px) scale({}); transition: {transition};",
                self.rise_px, self.scale
            )
        }
    }
}

/// Delay of the `index`th child in a staggered group.
pub fn stagger(index: usize, base_ms: u32, step_ms: u32) -> u32 {
    base_ms + step_ms * index as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    pub repulsion: RepulsionConfig,
    pub spring: SpringConfig,
    /// Duration of the experience panel height transition.
    pub expand_ms: u32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            repulsion: RepulsionConfig::default(),
            spring: SpringConfig::default(),
            expand_ms: 250,
        }
    }
}

impl MotionSettings {
    pub fn follow(&self) -> PointerFollow {
        PointerFollow::new(self.repulsion, self.spring)
    }

    pub fn expand_transition(&self) -> Transition {
        Transition::new(self.expand_ms, Easing::EaseInOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn tag_rect() -> Rect {
        Rect {
            left: 100.0,
            top: 200.0,
            width: 80.0,
            height: 40.0,
        }
    }

    fn settle(follow: &mut PointerFollow) -> usize {
        let mut frames = 0;
        while !follow.tick(FRAME) {
            frames += 1;
            assert!(frames < 600, "spring failed to settle");
        }
        frames
    }

    #[test]
    fn test_repel_points_away_from_pointer() {
        let config = RepulsionConfig::default();
        let center = Vec2::new(0.0, 0.0);

        let push = repel(center, Vec2::new(30.0, 0.0), &config);
        assert!(push.x < 0.0);
        assert_eq!(push.y, 0.0);

        let push = repel(center, Vec2::new(0.0, -30.0), &config);
        assert!(push.y > 0.0);
        assert_eq!(push.x, 0.0);
    }

    #[test]
    fn test_repel_scales_with_distance_until_radius() {
        let config = RepulsionConfig::default();
        let center = Vec2::ZERO;

        let near = repel(center, Vec2::new(60.0, 0.0), &config);
        assert!((near.length() - 25.0).abs() < 1e-9);

        let at_radius = repel(center, Vec2::new(120.0, 0.0), &config);
        let far = repel(center, Vec2::new(5000.0, 0.0), &config);
        assert!((at_radius.length() - 50.0).abs() < 1e-9);
        assert!((far.length() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_repel_magnitude_bounded() {
        let config = RepulsionConfig {
            max_shift: 30.0,
            radius: 80.0,
        };
        let center = tag_rect().center();
        for i in -20..=20 {
            for j in -20..=20 {
                let pointer = Vec2::new(i as f64 * 17.3, j as f64 * 9.1) + center;
                let push = repel(center, pointer, &config);
                assert!(push.length() <= config.max_shift + 1e-9);
            }
        }
    }

    #[test]
    fn test_repel_at_center_is_zero() {
        let config = RepulsionConfig::default();
        let center = tag_rect().center();
        assert_eq!(repel(center, center, &config), Vec2::ZERO);
    }

    #[test]
    fn test_rect_center() {
        assert_eq!(tag_rect().center(), Vec2::new(140.0, 220.0));
    }

    #[test]
    fn test_default_spring_is_critically_damped() {
        let config = SpringConfig::default();
        assert!((config.damping() - 2.0 * 130f64.sqrt()).abs() < 1e-9);

        let explicit = SpringConfig {
            damping: Some(16.0),
            ..config
        };
        assert_eq!(explicit.damping(), 16.0);
    }

    #[test]
    fn test_spring_stability_bound() {
        assert!(SpringConfig::default().is_stable());
        assert!(SpringConfig {
            damping: Some(16.0),
            ..SpringConfig::default()
        }
        .is_stable());

        let stiff = SpringConfig {
            stiffness: 100_000.0,
            ..SpringConfig::default()
        };
        assert!(!stiff.is_stable());

        let overdamped = SpringConfig {
            damping: Some(500.0),
            ..SpringConfig::default()
        };
        assert!(!overdamped.is_stable());
    }

    #[test]
    fn test_diverging_spring_snaps_to_target() {
        let settings = MotionSettings {
            spring: SpringConfig {
                stiffness: 100_000.0,
                ..SpringConfig::default()
            },
            ..MotionSettings::default()
        };
        let mut follow = settings.follow();
        let rect = tag_rect();
        follow.on_pointer_move(rect, rect.center() + Vec2::new(30.0, 0.0));

        let mut settled = false;
        for _ in 0..600 {
            if follow.tick(FRAME) {
                settled = true;
                break;
            }
        }
        assert!(settled);
        let offset = follow.offset();
        assert!(offset.x.is_finite() && offset.y.is_finite());
        assert_eq!(offset, follow.target());
    }

    #[test]
    fn test_spring_reaches_target_without_overshoot() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set_target(40.0);
        let mut max_seen: f64 = 0.0;
        for _ in 0..600 {
            let rested = spring.step(FRAME);
            max_seen = max_seen.max(spring.position());
            if rested {
                break;
            }
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 40.0);
        assert!(max_seen <= 40.0 + REST_DELTA);
    }

    #[test]
    fn test_spring_ignores_negative_and_stalled_frames() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set_target(10.0);
        spring.step(-1.0);
        assert_eq!(spring.position(), 0.0);

        // a ten second stall advances at most one clamped frame
        spring.step(10.0);
        assert!(spring.position() > 0.0);
        assert!(spring.position() < 10.0);
    }

    #[test]
    fn test_follow_moves_away_then_returns_home() {
        let mut follow = MotionSettings::default().follow();
        let rect = tag_rect();
        let pointer = rect.center() + Vec2::new(20.0, 10.0);

        let target = follow.on_pointer_move(rect, pointer);
        assert!(target.x < 0.0 && target.y < 0.0);

        for _ in 0..5 {
            follow.tick(FRAME);
        }
        let offset = follow.offset();
        assert!(offset.x < 0.0 && offset.y < 0.0);

        follow.on_pointer_leave();
        assert_eq!(follow.target(), Vec2::ZERO);
        settle(&mut follow);
        assert!(follow.is_settled());
        assert_eq!(follow.offset(), Vec2::ZERO);
    }

    #[test]
    fn test_follow_offset_never_exceeds_max_shift() {
        let settings = MotionSettings {
            spring: SpringConfig {
                damping: Some(4.0),
                ..SpringConfig::default()
            },
            ..MotionSettings::default()
        };
        let max_shift = settings.repulsion.max_shift;
        let mut follow = settings.follow();
        let rect = tag_rect();
        let far = [
            Vec2::new(1000.0, 0.0),
            Vec2::new(-1000.0, 0.0),
            Vec2::new(0.0, 1000.0),
            Vec2::new(-700.0, -700.0),
        ];
        for (i, p) in far.iter().cycle().take(40).enumerate() {
            follow.on_pointer_move(rect, rect.center() + *p);
            for _ in 0..(i % 7) + 1 {
                follow.tick(FRAME);
                assert!(follow.offset().length() <= max_shift + 1e-9);
            }
        }
    }

    #[test]
    fn test_transition_css() {
        let t = Transition::new(250, Easing::EaseInOut);
        assert_eq!(t.css(&["height"]), "height 250ms ease-in-out 0ms");

        let t = Transition::new(600, Easing::SMOOTH).with_delay(150);
        assert_eq!(
            t.css(&["opacity", "transform"]),
            "opacity 600ms cubic-bezier(0.22, 1, 0.36, 1) 150ms, transform 600ms cubic-bezier(0.22, 1, 0.36, 1) 150ms"
        );
    }

    #[test]
    fn test_reveal_style() {
        let reveal = Reveal::rise(20.0, 500);
        let hidden = reveal.style(false);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(20px) scale(1);"));
        let shown = reveal.with_delay(100).style(true);
        assert!(shown.starts_with("opacity: 1; transform: none;"));
        assert!(shown.contains("500ms"));
        assert!(shown.contains("100ms"));

        assert!(Reveal::pop().style(false).contains("scale(0.8)"));
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, 300, 150), 300);
        assert_eq!(stagger(3, 300, 150), 750);
    }

    #[test]
    fn test_motion_settings_defaults_from_partial_json() {
        let settings: MotionSettings =
            serde_json::from_str(r#"{ "repulsion": { "max_shift": 30.0 } }"#).unwrap();
        assert_eq!(settings.repulsion.max_shift, 30.0);
        assert_eq!(settings.repulsion.radius, 120.0);
        assert_eq!(settings.spring, SpringConfig::default());
        assert_eq!(settings.expand_ms, 250);
    }
}
