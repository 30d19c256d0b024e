use lift_core::{Floor, RequestId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("a building needs at least one floor")]
    NoFloors,

    #[error("{request} uses {floor}, outside floors 1..={floors}")]
    FloorOutOfRange {
        request: RequestId,
        floor:   Floor,
        floors:  u32,
    },

    #[error("{request} starts and ends on {floor}")]
    SameFloor {
        request: RequestId,
        floor:   Floor,
    },

    #[error("target {floor} is outside floors 1..={floors}")]
    TargetOutOfRange {
        floor:  Floor,
        floors: u32,
    },

    #[error("dispatch configuration error: {0}")]
    Config(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
