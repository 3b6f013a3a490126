//! Central system ordering labels to make update sequence explicit.
//! Stages (per frame, `Update`):
//! 1. Input (lane shifts, restart requests)
//! 2. Simulation (minigame tick, fetch polling)
//! 3. Presentation (UI reconciliation against resources)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet; // keyboard / pointer interpretation

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SimulationSet; // state mutation driven by timers and tasks

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentationSet; // views read state, never write it
