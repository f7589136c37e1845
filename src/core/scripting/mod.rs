// src/core/scripting/mod.rs

pub mod script;

pub use script::{Script, ScriptOutput};
