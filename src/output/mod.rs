//! Diagnostics and output writing

pub mod logger;
mod writers;

pub use self::logger::{Level, Logger};
pub use self::writers::{
    nocheck_luaurc, write_nocheck_luaurc, FileWriter, OutputWriter, LUAURC_FILE_NAME,
};
