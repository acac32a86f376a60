mod common;

mod capacity;
mod engine;
