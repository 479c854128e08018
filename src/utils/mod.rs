mod io_utils;
mod readers;
mod util;

pub use io_utils::create_writer;
pub use readers::{open_fasta_reader, open_reader, read_fasta_records, read_motif_lines};
pub use util::{handle_error_and_exit, Result};
