pub mod color;
pub mod cpu;
pub mod display;
pub mod exec;
pub mod gpu;
pub mod logo;
pub mod memory;
pub mod packages;
pub mod platform;
pub mod render;
pub mod report;
pub mod shell;
pub mod uptime;
