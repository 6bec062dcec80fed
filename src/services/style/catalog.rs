//! Immutable catalog of built-in style presets.
//!
//! These ship with the app, are listed ahead of user presets, and are never
//! written to disk or deleted. Keeping them out of the mutable user
//! collection means save/delete logic never has to special-case them.

use crate::models::preset::StylePreset;
use crate::models::style::{
    AnimationStyle, BackgroundStyle, CardHoverEffect, NumberStyle, ParticleStyle, StyleConfig,
};

/// Build the built-in presets in display order.
pub fn built_in_presets() -> Vec<StylePreset> {
    vec![
        StylePreset {
            id: "cyberpunk".to_string(),
            name: "🌆 Cyberpunk".to_string(),
            styles: StyleConfig {
                color: "from-pink-500 to-purple-600".to_string(),
                show_particles: true,
                particle_count: 30,
                show_glow: true,
                show_shockwave: true,
                animation_style: AnimationStyle::Flip,
                particle_speed: 3.0,
                particle_size: 2.0,
                bg_opacity: 0.9,
                text_shadow: 1.0,
                animation_speed: 1.2,
                pulse_effect: true,
                ripple_effect: true,
                number_style: NumberStyle::Neon,
                particle_style: ParticleStyle::Sparkle,
                background_style: BackgroundStyle::Circuit,
                card_hover_effect: CardHoverEffect::Tilt,
            },
        },
        StylePreset {
            id: "minimal".to_string(),
            name: "✨ Minimal".to_string(),
            styles: StyleConfig {
                color: "from-gray-500 to-gray-600".to_string(),
                show_particles: false,
                particle_count: 5,
                show_glow: false,
                show_shockwave: false,
                animation_style: AnimationStyle::Fade,
                particle_speed: 1.0,
                particle_size: 1.0,
                bg_opacity: 0.7,
                text_shadow: 0.3,
                animation_speed: 1.0,
                pulse_effect: false,
                ripple_effect: false,
                number_style: NumberStyle::Glass,
                particle_style: ParticleStyle::Circle,
                background_style: BackgroundStyle::Gradient,
                card_hover_effect: CardHoverEffect::Scale,
            },
        },
        StylePreset {
            id: "nature".to_string(),
            name: "🌿 Nature".to_string(),
            styles: StyleConfig {
                color: "from-green-500 to-emerald-600".to_string(),
                show_particles: true,
                particle_count: 20,
                show_glow: true,
                show_shockwave: false,
                animation_style: AnimationStyle::Bounce,
                particle_speed: 1.5,
                particle_size: 2.5,
                bg_opacity: 0.85,
                text_shadow: 0.5,
                animation_speed: 0.8,
                pulse_effect: true,
                ripple_effect: false,
                number_style: NumberStyle::Normal,
                particle_style: ParticleStyle::Trail,
                background_style: BackgroundStyle::Dots,
                card_hover_effect: CardHoverEffect::Glow,
            },
        },
        StylePreset {
            id: "retro-gaming".to_string(),
            name: "🎮 Retro Gaming".to_string(),
            styles: StyleConfig {
                color: "from-indigo-500 to-purple-600".to_string(),
                show_particles: true,
                particle_count: 15,
                show_glow: true,
                show_shockwave: true,
                animation_style: AnimationStyle::Slide,
                particle_speed: 2.0,
                particle_size: 3.0,
                bg_opacity: 1.0,
                text_shadow: 0.8,
                animation_speed: 1.5,
                pulse_effect: false,
                ripple_effect: true,
                number_style: NumberStyle::Retro,
                particle_style: ParticleStyle::Star,
                background_style: BackgroundStyle::Circuit,
                card_hover_effect: CardHoverEffect::Flip,
            },
        },
        StylePreset {
            id: "matrix".to_string(),
            name: "🖥️ Matrix".to_string(),
            styles: StyleConfig {
                color: "from-green-500 to-emerald-600".to_string(),
                show_particles: true,
                particle_count: 25,
                show_glow: true,
                show_shockwave: false,
                animation_style: AnimationStyle::Fade,
                particle_speed: 2.5,
                particle_size: 1.5,
                bg_opacity: 1.0,
                text_shadow: 0.9,
                animation_speed: 1.3,
                pulse_effect: false,
                ripple_effect: false,
                number_style: NumberStyle::Matrix,
                particle_style: ParticleStyle::Trail,
                background_style: BackgroundStyle::Matrix,
                card_hover_effect: CardHoverEffect::Glow,
            },
        },
        StylePreset {
            id: "neon-nights".to_string(),
            name: "🌙 Neon Nights".to_string(),
            styles: StyleConfig {
                color: "from-fuchsia-500 to-pink-600".to_string(),
                show_particles: true,
                particle_count: 35,
                show_glow: true,
                show_shockwave: true,
                animation_style: AnimationStyle::Bounce,
                particle_speed: 2.0,
                particle_size: 2.0,
                bg_opacity: 0.95,
                text_shadow: 1.0,
                animation_speed: 1.2,
                pulse_effect: true,
                ripple_effect: true,
                number_style: NumberStyle::Neon,
                particle_style: ParticleStyle::Sparkle,
                background_style: BackgroundStyle::Mesh,
                card_hover_effect: CardHoverEffect::Tilt,
            },
        },
        StylePreset {
            id: "glitch".to_string(),
            name: "🌐 Glitch".to_string(),
            styles: StyleConfig {
                color: "from-cyan-500 to-blue-600".to_string(),
                show_particles: true,
                particle_count: 20,
                show_glow: true,
                show_shockwave: true,
                animation_style: AnimationStyle::Slide,
                particle_speed: 3.0,
                particle_size: 2.0,
                bg_opacity: 1.0,
                text_shadow: 0.8,
                animation_speed: 1.5,
                pulse_effect: false,
                ripple_effect: true,
                number_style: NumberStyle::Glitch,
                particle_style: ParticleStyle::Sparkle,
                background_style: BackgroundStyle::Circuit,
                card_hover_effect: CardHoverEffect::Flip,
            },
        },
        StylePreset {
            id: "elegant".to_string(),
            name: "✨ Elegant".to_string(),
            styles: StyleConfig {
                color: "from-amber-500 to-orange-600".to_string(),
                show_particles: true,
                particle_count: 15,
                show_glow: true,
                show_shockwave: false,
                animation_style: AnimationStyle::Fade,
                particle_speed: 1.0,
                particle_size: 1.5,
                bg_opacity: 0.8,
                text_shadow: 0.6,
                animation_speed: 0.8,
                pulse_effect: true,
                ripple_effect: false,
                number_style: NumberStyle::Metallic,
                particle_style: ParticleStyle::Star,
                background_style: BackgroundStyle::Gradient,
                card_hover_effect: CardHoverEffect::Glow,
            },
        },
        StylePreset {
            id: "cosmic".to_string(),
            name: "🌌 Cosmic".to_string(),
            styles: StyleConfig {
                color: "from-violet-500 to-fuchsia-600".to_string(),
                show_particles: true,
                particle_count: 40,
                show_glow: true,
                show_shockwave: true,
                animation_style: AnimationStyle::Flip,
                particle_speed: 2.5,
                particle_size: 2.0,
                bg_opacity: 1.0,
                text_shadow: 0.9,
                animation_speed: 1.2,
                pulse_effect: true,
                ripple_effect: true,
                number_style: NumberStyle::Glass,
                particle_style: ParticleStyle::Sparkle,
                background_style: BackgroundStyle::Dots,
                card_hover_effect: CardHoverEffect::Tilt,
            },
        },
        StylePreset {
            id: "underwater".to_string(),
            name: "🌊 Underwater".to_string(),
            styles: StyleConfig {
                color: "from-blue-400 to-emerald-600".to_string(),
                show_particles: true,
                particle_count: 30,
                show_glow: true,
                show_shockwave: false,
                animation_style: AnimationStyle::Bounce,
                particle_speed: 1.0,
                particle_size: 2.0,
                bg_opacity: 0.85,
                text_shadow: 0.7,
                animation_speed: 0.8,
                pulse_effect: true,
                ripple_effect: true,
                number_style: NumberStyle::Glass,
                particle_style: ParticleStyle::Trail,
                background_style: BackgroundStyle::Mesh,
                card_hover_effect: CardHoverEffect::Scale,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_ten_presets() {
        assert_eq!(built_in_presets().len(), 10);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let presets = built_in_presets();
        let ids: HashSet<&str> = presets.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), presets.len());
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let first: Vec<String> = built_in_presets().into_iter().map(|p| p.id).collect();
        let second: Vec<String> = built_in_presets().into_iter().map(|p| p.id).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "cyberpunk");
        assert_eq!(first[9], "underwater");
    }

    #[test]
    fn test_cyberpunk_snapshot() {
        let presets = built_in_presets();
        let cyberpunk = presets.iter().find(|p| p.id == "cyberpunk").unwrap();
        assert_eq!(cyberpunk.styles.particle_count, 30);
        assert_eq!(cyberpunk.styles.number_style, NumberStyle::Neon);
        assert!(cyberpunk.styles.pulse_effect);
    }
}
