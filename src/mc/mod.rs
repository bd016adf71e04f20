pub mod discount;
pub mod mc_engine;
pub mod payoffs;
