pub mod archive;
pub mod header;
pub mod wav;
