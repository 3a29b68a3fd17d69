/// State management module
/// 
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The decode/encode mode and its texts (mode.rs)
/// - The view state machine and request sequencing (controller.rs)

pub mod data;
pub mod mode;
pub mod controller;
