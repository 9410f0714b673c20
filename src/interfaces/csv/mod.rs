pub mod action_reader;
pub mod receipt_writer;
