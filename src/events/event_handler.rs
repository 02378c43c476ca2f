/// Something that reacts to events of type `T` delivered over a channel.
pub trait EventHandler<T> {
    fn handle_event(&mut self, event: &T);
}
