//! Central system ordering labels to make update sequence explicit.
//! Stages (per frame):
//! 1. Input (pointer presses fire, drags move the ship)
//! 2. Actions (sequences advance; may despawn or emit spawn cues)
//! 3. Spawn (bullets / enemies requested this frame get entities; their
//!    sequences start advancing next frame)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SpawnSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ActionSet;
