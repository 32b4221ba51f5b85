use thiserror::Error;

/// Reasons why a point source can't be turned into a polyline.
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum InputError {
    #[error("Flat coordinate sequence of length {len} is not a multiple of 3")]
    FlatLengthNotMultipleOfThree { len: usize },
    #[error("Position attribute item size {item_size} is not supported, expected 3")]
    UnsupportedItemSize { item_size: usize },
    #[error("Point {index} has a coordinate that is not a number")]
    PositionIsNaN { index: usize },
}
