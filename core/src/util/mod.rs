mod tail_buf;

pub use tail_buf::TailBuf;
