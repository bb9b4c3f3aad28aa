pub mod amount;
pub mod banner;
pub mod commands;
pub mod components;
pub mod config;
pub mod consts;
pub mod conversion;
pub mod countries;
pub mod events;
pub mod page;
pub mod provider;
pub mod refresh;
pub mod spinner;
pub mod state;
