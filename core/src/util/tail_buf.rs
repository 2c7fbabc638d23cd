use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Bounded capture buffer that keeps only the most recent `cap` bytes pushed
/// into it. Shared between the pump task that drains a child pipe and the
/// invoker that reads the capture once the child is gone.
#[derive(Clone)]
pub struct TailBuf {
    inner: Arc<Mutex<VecDeque<u8>>>,
    cap: usize,
}

impl TailBuf {
    pub fn new(cap: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(cap.min(8 * 1024)))),
            cap,
        }
    }

    pub fn push(&self, data: &[u8]) {
        let mut g = self.inner.lock().unwrap();
        let data = if data.len() > self.cap {
            &data[data.len() - self.cap..]
        } else {
            data
        };
        let overflow = g.len().saturating_add(data.len()).saturating_sub(self.cap);
        if overflow > 0 {
            g.drain(..overflow);
        }
        g.extend(data);
    }

    /// Snapshot of the captured tail, lossily decoded.
    pub fn to_string_lossy(&self) -> String {
        let g = self.inner.lock().unwrap();
        let bytes: Vec<u8> = g.iter().copied().collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_everything_under_capacity() {
        let buf = TailBuf::new(16);
        buf.push(b"hello ");
        buf.push(b"world");
        assert_eq!(buf.to_string_lossy(), "hello world");
    }

    #[test]
    fn keeps_only_the_tail_over_capacity() {
        let buf = TailBuf::new(8);
        buf.push(b"0123456789");
        assert_eq!(buf.to_string_lossy(), "23456789");

        buf.push(b"ab");
        assert_eq!(buf.to_string_lossy(), "456789ab");
    }

    #[test]
    fn oversized_single_push_is_truncated_to_tail() {
        let buf = TailBuf::new(4);
        buf.push(b"abcdefgh");
        assert_eq!(buf.to_string_lossy(), "efgh");
    }
}
