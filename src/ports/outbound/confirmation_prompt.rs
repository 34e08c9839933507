/// ConfirmationPrompt port for gating destructive actions
///
/// Stands in for a modal yes/no dialog. Implementations must block until
/// the user has answered; anything other than an explicit yes is a no.
pub trait ConfirmationPrompt: Send + Sync {
    /// Asks the question and returns true only on an explicit yes
    fn confirm(&self, question: &str) -> bool;
}
