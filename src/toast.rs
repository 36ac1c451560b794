/// Severity of a toast; controls its color in the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

/// TTL in whole ticks (the app ticks once per second)
const TOAST_TTL_TICKS: u32 = 3;

/// How many toasts the overlay shows at once
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub ticks_left: u32,
}

/// Transient notifications, newest first, expired on the shared tick
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toasts.insert(
            0,
            Toast {
                message: message.into(),
                level,
                ticks_left: TOAST_TTL_TICKS,
            },
        );
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Success);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Info);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Error);
    }

    /// Age every toast by one tick and drop the expired ones
    pub fn on_tick(&mut self) {
        for toast in &mut self.toasts {
            toast.ticks_left = toast.ticks_left.saturating_sub(1);
        }
        self.toasts.retain(|t| t.ticks_left > 0);
    }

    /// Newest-first slice capped at the overlay limit
    pub fn visible(&self) -> &[Toast] {
        &self.toasts[..self.toasts.len().min(MAX_VISIBLE_TOASTS)]
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_orders_newest_first() {
        let mut q = ToastQueue::new();
        q.info("first");
        q.success("second");

        let visible = q.visible();
        assert_eq!(visible[0].message, "second");
        assert_eq!(visible[0].level, ToastLevel::Success);
        assert_eq!(visible[1].message, "first");
    }

    #[test]
    fn test_toasts_expire_after_ttl() {
        let mut q = ToastQueue::new();
        q.error("oops");

        q.on_tick();
        q.on_tick();
        assert!(!q.is_empty());

        q.on_tick();
        assert!(q.is_empty());
    }

    #[test]
    fn test_visible_caps_at_limit() {
        let mut q = ToastQueue::new();
        for i in 0..5 {
            q.info(format!("toast {}", i));
        }

        let visible = q.visible();
        assert_eq!(visible.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(visible[0].message, "toast 4");
    }

    #[test]
    fn test_staggered_expiry() {
        let mut q = ToastQueue::new();
        q.info("old");
        q.on_tick();
        q.info("new");

        q.on_tick();
        q.on_tick();

        // "old" has seen 3 ticks, "new" only 2
        assert_eq!(q.visible().len(), 1);
        assert_eq!(q.visible()[0].message, "new");
    }

    #[test]
    fn test_tick_on_empty_queue_is_safe() {
        let mut q = ToastQueue::new();
        q.on_tick();
        assert!(q.is_empty());
        assert!(q.visible().is_empty());
    }
}
