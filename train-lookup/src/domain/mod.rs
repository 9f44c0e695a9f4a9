//! Domain types for train lookups.

mod train_number;

pub use train_number::{InvalidTrainNumber, TrainNumber};
