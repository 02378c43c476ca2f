/// Implemented by types whose channel subscriptions hold an `Rc` back to
/// themselves; `destroy` breaks that cycle.
pub trait Destroyable {
    fn destroy(&mut self);
}
