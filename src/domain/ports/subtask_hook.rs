//! SubtaskHook port - middleware around a named pipeline step
//!
//! A hook receives the step's input and a `next` continuation that runs the
//! wrapped behaviour (the previously registered hook, or the default action).
//! A hook that post-processes must call `next` first.

pub trait SubtaskHook<I, O> {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn run(&self, input: &I, next: &dyn Fn(&I) -> O) -> O;
}
