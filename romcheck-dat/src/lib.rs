pub mod dat;
pub mod error;
pub mod flags;
pub mod writer;

pub use dat::{DatFile, DatGame, DatHeader, DatRom, parse_dat, parse_dat_file};
pub use error::DatError;
pub use flags::GameFlags;
pub use writer::to_xml_string;
