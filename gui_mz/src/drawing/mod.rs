pub mod maze;
pub mod settings;
pub mod tab;
pub mod timings;
pub mod widgets;
