//! User callbacks attached to widgets.

use std::fmt;

/// A boxed `FnMut()` fired by a widget on an edge-triggered transition.
///
/// Arguments the callback needs are captured by the closure; use
/// [`Callback::with_args`] to bind an owned argument bundle explicitly.
pub struct Callback {
    func: Box<dyn FnMut()>,
}

impl Callback {
    pub fn new(func: impl FnMut() + 'static) -> Self {
        Self { func: Box::new(func) }
    }

    /// Bind `args` and pass them by reference on every call.
    pub fn with_args<A: 'static>(args: A, mut func: impl FnMut(&A) + 'static) -> Self {
        Self::new(move || func(&args))
    }

    pub fn call(&mut self) {
        (self.func)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl<F: FnMut() + 'static> From<F> for Callback {
    fn from(func: F) -> Self {
        Callback::new(func)
    }
}

/// A callback that receives a value, such as a slider's new position.
pub struct ValueCallback<T> {
    func: Box<dyn FnMut(T)>,
}

impl<T> ValueCallback<T> {
    pub fn new(func: impl FnMut(T) + 'static) -> Self {
        Self { func: Box::new(func) }
    }

    pub fn call(&mut self, value: T) {
        (self.func)(value)
    }
}

impl<T> fmt::Debug for ValueCallback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueCallback(..)")
    }
}
