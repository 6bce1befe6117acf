use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

/// Live keypad buffer owned by the text-entry side.
///
/// The strip reads it once per update and works from that snapshot.
pub trait DigitSource {
    fn current_digits(&self) -> String;
}

impl DigitSource for str {
    fn current_digits(&self) -> String {
        self.to_string()
    }
}

impl DigitSource for String {
    fn current_digits(&self) -> String {
        self.clone()
    }
}

/// Digit buffer shared between the dialpad and the suggestion strip.
#[derive(Debug, Clone, Default)]
pub struct SharedDigits {
    inner: Arc<RwLock<String>>,
}

impl SharedDigits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, digit: char) {
        self.buffer().push(digit);
    }

    pub fn pop(&self) -> Option<char> {
        self.buffer().pop()
    }

    pub fn set(&self, digits: &str) {
        let mut buf = self.buffer();
        buf.clear();
        buf.push_str(digits);
    }

    pub fn clear(&self) {
        self.set("");
    }

    /// A writer that panicked mid-edit leaves a plain `String` behind, which
    /// is still a valid digit buffer.
    fn buffer(&self) -> RwLockWriteGuard<'_, String> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("digit buffer lock poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

impl DigitSource for SharedDigits {
    fn current_digits(&self) -> String {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisoned_buffer_keeps_digits() {
        let digits = SharedDigits::new();
        digits.set("12");

        let writer = digits.clone();
        let handle = std::thread::spawn(move || {
            let _guard = writer.inner.write().unwrap();
            panic!("dialpad thread died while editing");
        });
        assert!(handle.join().is_err());
        assert!(digits.inner.is_poisoned());

        digits.push('3');
        assert_eq!(digits.current_digits(), "123");
        assert_eq!(digits.pop(), Some('3'));
        digits.clear();
        assert_eq!(digits.current_digits(), "");
    }
}
