/// User-facing progress of a resolution batch
///
/// Kept apart from logging: messages are meant for the person running the
/// command and never end up on stdout, which carries the JSON result.
pub trait ProgressReporter {
    fn report(&self, message: &str);

    /// Called once per finished package, `current` counts from 1 up to `total`.
    /// `message` carries the package URL that just finished.
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Per-package failures and other problems worth the user's attention
    fn report_error(&self, message: &str);

    /// Final summary line of a batch
    fn report_completion(&self, message: &str);
}
