// Style configuration model
// Flat record of the visual parameters a renderer consumes

use serde::{Deserialize, Serialize};

/// Transition used when a digit group changes value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationStyle {
    Flip,
    Fade,
    Bounce,
    Slide,
}

/// Rendering treatment for the countdown digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    Normal,
    Neon,
    Metallic,
    Glass,
    Retro,
    Glitch,
    Matrix,
}

/// Shape of the ambient particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleStyle {
    Circle,
    Star,
    Trail,
    Sparkle,
}

/// Backdrop pattern behind the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    Gradient,
    Mesh,
    Dots,
    Circuit,
    Matrix,
}

/// Hover behavior for event cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardHoverEffect {
    Tilt,
    Flip,
    Glow,
    Scale,
    None,
}

/// Slider ranges published for the input surface. The store itself does not
/// clamp; see [`StyleConfig::clamped`] for the renderer-side helper.
pub const PARTICLE_COUNT_RANGE: (u32, u32) = (5, 50);
pub const PARTICLE_SPEED_RANGE: (f64, f64) = (1.0, 5.0);
pub const PARTICLE_SIZE_RANGE: (f64, f64) = (1.0, 4.0);
pub const BG_OPACITY_RANGE: (f64, f64) = (0.3, 1.0);
pub const TEXT_SHADOW_RANGE: (f64, f64) = (0.0, 1.0);
pub const ANIMATION_SPEED_RANGE: (f64, f64) = (0.5, 2.0);

/// Gradient token applied to new events when none is chosen.
pub const DEFAULT_GRADIENT: &str = "from-blue-500 to-purple-600";

/// Gradient tokens offered by the color picker, grouped loosely by hue.
pub const GRADIENTS: &[&str] = &[
    // Cool tones
    "from-blue-500 to-purple-600",
    "from-cyan-500 to-blue-600",
    "from-indigo-500 to-purple-600",
    "from-violet-500 to-fuchsia-600",
    "from-blue-400 to-emerald-600",
    // Warm tones
    "from-red-500 to-pink-600",
    "from-orange-500 to-red-600",
    "from-amber-500 to-orange-600",
    "from-yellow-500 to-orange-600",
    "from-rose-500 to-red-600",
    // Nature tones
    "from-green-500 to-teal-600",
    "from-emerald-500 to-green-600",
    "from-teal-500 to-cyan-600",
    "from-lime-500 to-green-600",
    "from-green-400 to-cyan-600",
    // Vibrant
    "from-fuchsia-500 to-pink-600",
    "from-purple-500 to-indigo-600",
    "from-pink-500 to-rose-600",
    "from-violet-500 to-indigo-600",
    "from-blue-500 to-violet-600",
];

/// Complete visual configuration for the timer display.
///
/// Every field is independent; there is no cross-field validation. Numeric
/// fields may be set outside their advertised ranges and it is the rendering
/// collaborator's job to clamp or default them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    pub color: String,
    pub show_particles: bool,
    pub particle_count: u32,
    pub show_glow: bool,
    pub show_shockwave: bool,
    pub animation_style: AnimationStyle,
    pub particle_speed: f64,
    pub particle_size: f64,
    pub bg_opacity: f64,
    pub text_shadow: f64,
    pub animation_speed: f64,
    pub pulse_effect: bool,
    pub ripple_effect: bool,
    pub number_style: NumberStyle,
    pub particle_style: ParticleStyle,
    pub background_style: BackgroundStyle,
    pub card_hover_effect: CardHoverEffect,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_GRADIENT.to_string(),
            show_particles: true,
            particle_count: 20,
            show_glow: true,
            show_shockwave: true,
            animation_style: AnimationStyle::Flip,
            particle_speed: 2.0,
            particle_size: 2.0,
            bg_opacity: 1.0,
            text_shadow: 0.7,
            animation_speed: 1.0,
            pulse_effect: false,
            ripple_effect: false,
            number_style: NumberStyle::Normal,
            particle_style: ParticleStyle::Circle,
            background_style: BackgroundStyle::Gradient,
            card_hover_effect: CardHoverEffect::Scale,
        }
    }
}

impl StyleConfig {
    /// Returns a copy with every numeric field clamped to its slider range.
    /// Renderers call this before drawing; the store never does.
    pub fn clamped(&self) -> Self {
        let mut out = self.clone();
        out.particle_count = out
            .particle_count
            .clamp(PARTICLE_COUNT_RANGE.0, PARTICLE_COUNT_RANGE.1);
        out.particle_speed = out
            .particle_speed
            .clamp(PARTICLE_SPEED_RANGE.0, PARTICLE_SPEED_RANGE.1);
        out.particle_size = out
            .particle_size
            .clamp(PARTICLE_SIZE_RANGE.0, PARTICLE_SIZE_RANGE.1);
        out.bg_opacity = out.bg_opacity.clamp(BG_OPACITY_RANGE.0, BG_OPACITY_RANGE.1);
        out.text_shadow = out
            .text_shadow
            .clamp(TEXT_SHADOW_RANGE.0, TEXT_SHADOW_RANGE.1);
        out.animation_speed = out
            .animation_speed
            .clamp(ANIMATION_SPEED_RANGE.0, ANIMATION_SPEED_RANGE.1);
        out
    }
}

/// Single-field replacement applied to the active configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleUpdate {
    Color(String),
    ShowParticles(bool),
    ParticleCount(u32),
    ShowGlow(bool),
    ShowShockwave(bool),
    AnimationStyle(AnimationStyle),
    ParticleSpeed(f64),
    ParticleSize(f64),
    BgOpacity(f64),
    TextShadow(f64),
    AnimationSpeed(f64),
    PulseEffect(bool),
    RippleEffect(bool),
    NumberStyle(NumberStyle),
    ParticleStyle(ParticleStyle),
    BackgroundStyle(BackgroundStyle),
    CardHoverEffect(CardHoverEffect),
}

impl StyleConfig {
    /// Applies a single-field update in place.
    pub fn apply(&mut self, update: StyleUpdate) {
        match update {
            StyleUpdate::Color(v) => self.color = v,
            StyleUpdate::ShowParticles(v) => self.show_particles = v,
            StyleUpdate::ParticleCount(v) => self.particle_count = v,
            StyleUpdate::ShowGlow(v) => self.show_glow = v,
            StyleUpdate::ShowShockwave(v) => self.show_shockwave = v,
            StyleUpdate::AnimationStyle(v) => self.animation_style = v,
            StyleUpdate::ParticleSpeed(v) => self.particle_speed = v,
            StyleUpdate::ParticleSize(v) => self.particle_size = v,
            StyleUpdate::BgOpacity(v) => self.bg_opacity = v,
            StyleUpdate::TextShadow(v) => self.text_shadow = v,
            StyleUpdate::AnimationSpeed(v) => self.animation_speed = v,
            StyleUpdate::PulseEffect(v) => self.pulse_effect = v,
            StyleUpdate::RippleEffect(v) => self.ripple_effect = v,
            StyleUpdate::NumberStyle(v) => self.number_style = v,
            StyleUpdate::ParticleStyle(v) => self.particle_style = v,
            StyleUpdate::BackgroundStyle(v) => self.background_style = v,
            StyleUpdate::CardHoverEffect(v) => self.card_hover_effect = v,
        }
    }
}
