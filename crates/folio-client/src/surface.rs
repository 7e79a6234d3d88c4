//! Display surface abstraction.
//!
//! The host page supplies the loader, results container, and error
//! message elements; the client only needs show/hide and text updates on
//! them. Methods take `&mut self` because a surface is single-writer
//! state owned by the submit flow.

pub trait ReviewSurface {
    /// Hide the results container from a previous submission.
    fn hide_results(&mut self);

    /// Clear the rendered analysis output.
    fn clear_output(&mut self);

    /// Hide any previous error message.
    fn hide_error(&mut self);

    fn show_loader(&mut self);

    fn hide_loader(&mut self);

    /// Display an error message to the user.
    fn show_error(&mut self, message: &str);

    /// Fill the output container with rendered HTML, reveal it, and
    /// bring it into view.
    fn show_results(&mut self, html: &str);
}
