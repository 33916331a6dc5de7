// Application layer: the command line flow on top of the engine.

pub mod driver;
