use bevy::prelude::*;

use super::universe::Universe;

/// The generated universe, inserted once at startup.
#[derive(Resource)]
pub struct ActiveUniverse(pub Universe);

/// Marker on each spawned star sphere.
#[derive(Component, Reflect)]
pub struct StarGlyph;
