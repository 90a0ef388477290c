//! Conversion orchestration: output tree setup and the per-note pipeline.

pub mod converter;

pub use converter::{
    ConvertError, ConvertOptions, ConvertStats, Converter, FailedNote, NoteOutcome,
    ProgressCallback, RecordError,
};
